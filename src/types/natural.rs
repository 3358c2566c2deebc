use std::fmt;

/// A non-negative integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Natural(u64);

impl Natural {
    /// The smallest natural number.
    pub const ZERO: Natural = Natural(0);
    /// One.
    pub const ONE: Natural = Natural(1);
    /// The largest representable natural number.
    pub const MAX: Natural = Natural(u64::max_value());

    pub fn new(n: u64) -> Self {
        Natural(n)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Natural {
    fn from(n: u64) -> Self {
        Natural(n)
    }
}

impl From<Natural> for u64 {
    fn from(n: Natural) -> Self {
        n.0
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.0)
    }
}
