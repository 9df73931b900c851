//! Build script to compile C implementations.

use std::env;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(c_implementation_active)");
    // Check for C compiler compatibility and type
    let build = cc::Build::new();
    let compiler = build.get_compiler();
    let is_gnu_like = compiler.is_like_gnu() || compiler.is_like_clang();
    let is_msvc = compiler.is_like_msvc();

    if is_gnu_like || is_msvc {
        let compiler_name = if compiler.is_like_clang() {
            let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
            if target_os == "macos" {
                "Apple Clang"
            } else {
                "Clang"
            }
        } else if compiler.is_like_gnu() {
            "GCC"
        } else {
            "MSVC"
        };

        let mut build = cc::Build::new();

        // Auto-detect all C files in src/ directory
        let c_files = glob::glob("src/**/*.c")
            .expect("Failed to read glob pattern")
            .filter_map(|entry| entry.ok());

        for file in c_files {
            println!("cargo:rerun-if-changed={}", file.display());
            build.file(file);
        }

        // No -ffast-math: the C variants exist to mirror the strict
        // widen-multiply-accumulate semantics of the Rust kernel, and
        // fast-math would let the compiler reassociate the sums
        build.opt_level(3);

        build.compile("sdsdot_c");

        println!("cargo:rustc-cfg=c_implementation_active");
        println!("cargo:rustc-env=C_COMPILER_NAME={}", compiler_name);
    } else {
        println!("cargo:warning=C compiler is not compatible (needs GCC, Clang, or MSVC). C implementations disabled.");
    }
}
