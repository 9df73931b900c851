//! CPU affinity pinning for stable measurements.
//!
//! Pinning the benchmarking thread to the core it is currently running on
//! avoids migrations mid-measurement. Only Linux supports true affinity via
//! `libc`; other platforms get no-op stubs and rely on the randomized
//! execution schedule alone.

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    /// Get the current CPU core the thread is running on
    fn get_current_cpu() -> Option<usize> {
        unsafe {
            let cpu = libc::sched_getcpu();
            if cpu >= 0 {
                Some(cpu as usize)
            } else {
                None
            }
        }
    }

    /// Save the current CPU affinity mask
    fn save_affinity() -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set) == 0 {
                ORIGINAL_AFFINITY.with(|cell| {
                    *cell.borrow_mut() = Some(set);
                });
                true
            } else {
                false
            }
        }
    }

    /// Pin to a specific core
    fn set_affinity(core_id: usize) -> bool {
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn pin_to_current_core() -> bool {
        match get_current_cpu() {
            Some(cpu) => save_affinity() && set_affinity(cpu),
            None => false,
        }
    }

    /// Restore the original CPU affinity (unpin)
    pub fn unpin() -> bool {
        unsafe {
            ORIGINAL_AFFINITY.with(|cell| {
                if let Some(set) = cell.borrow_mut().take() {
                    libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
                } else {
                    false
                }
            })
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn pin_to_current_core() -> bool {
        false
    }

    pub fn unpin() -> bool {
        false
    }
}

/// Pin the calling thread to the core it is currently running on.
pub fn pin_to_current_core() -> bool {
    platform::pin_to_current_core()
}

/// Restore the thread's original affinity mask.
pub fn unpin() -> bool {
    platform::unpin()
}

/// RAII guard: pins on construction, unpins on drop.
pub struct CpuPinGuard {
    pinned: bool,
}

impl CpuPinGuard {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            pinned: pin_to_current_core(),
        }
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned {
            unpin();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_guard_roundtrip() {
        {
            let _guard = CpuPinGuard::new();
            // Pinned (or a no-op on unsupported platforms) while in scope
        }
        // Dropping must not panic and must leave the thread schedulable
        unpin();
    }
}
