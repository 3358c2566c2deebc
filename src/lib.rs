//! Property-testing generators for a handful of general-purpose data types:
//! parallel/sequential computation trees, bounded natural numbers, non-empty
//! collections, generated functions, state transitions and validations.
//!
//! Every generator draws its randomness from a pool of bytes (see
//! [`data`](data/index.html)), so a failing input can be shrunk by shrinking
//! the pool that produced it. Use [`property`](fn.property.html) to check a
//! predicate against generated values:
//!
//! ```
//! use prelude_gens::generators::*;
//! use prelude_gens::property;
//! use prelude_gens::types::ParSeq;
//!
//! property(par_seqs(consts(ParSeq::Empty), u8s()))
//!     .check(|tree| tree.leaf_count() == tree.branch_count() + 1);
//! ```

#[macro_use]
extern crate log;

pub mod data;
pub mod generators;
mod properties;
pub mod types;

pub use crate::properties::*;
