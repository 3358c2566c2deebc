//! This module contains the underlying data generation and shrinking
//! mechanism. Generators draw bytes from an `InfoSource`; the bytes a
//! generator consumed are captured by an `InfoRecorder` into an `InfoPool`,
//! which can be replayed (via `InfoPool#replay`) to reproduce the same value.
//!
//! Also manages the shrinking process (see [`minimize`](fn.minimize.html)).

mod shrinkers;
mod source;
pub use self::shrinkers::*;
pub use self::source::*;
