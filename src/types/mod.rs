//! The values our generators produce. These are deliberately thin: just
//! enough structure for tests to inspect what was generated.

mod natural;
mod non_empty;
mod par_seq;
mod state;
mod validation;

pub use self::natural::*;
pub use self::non_empty::*;
pub use self::par_seq::*;
pub use self::state::*;
pub use self::validation::*;
