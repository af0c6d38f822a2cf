//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings for exposing the generator to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only expose what's needed
//! 2. **Simple types**: Use primitives, strings and bytes at boundary
//! 3. **Safe errors**: Convert all Rust errors to Python exceptions

pub mod rand;
