//! This module describes how data gets generated from the underlying representation
//! in the [`data`](../data/index.html) module.
//!
//! The domain generators ([`par_seqs`](fn.par_seqs.html),
//! [`naturals_in_range`](fn.naturals_in_range.html),
//! [`non_empty_vecs`](fn.non_empty_vecs.html),
//! [`states`](fn.states.html), [`validations`](fn.validations.html), ...) are
//! built from the primitives in here in the same way user code would.

mod collections;
mod core;
mod functions;
mod naturals;
mod non_empty;
mod numbers;
mod par_seq;
mod sizing;
mod tuples;
mod validations;

pub use self::collections::*;
pub use self::core::*;
pub use self::functions::*;
pub use self::naturals::*;
pub use self::non_empty::*;
pub use self::numbers::*;
pub use self::par_seq::*;
pub use self::sizing::*;
pub use self::validations::*;
