//! BLAS-style strided vector primitives.

pub mod sdsdot;
