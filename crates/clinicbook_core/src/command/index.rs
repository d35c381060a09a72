//! Display index resolved against a filtered view.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Zero-based position in a filtered list, built from one-based user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError;

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "index must be a positive integer")
    }
}

impl Error for IndexError {}

impl Index {
    pub fn from_one_based(value: usize) -> Result<Self, IndexError> {
        value.checked_sub(1).map(Self).ok_or(IndexError)
    }

    pub fn zero_based(self) -> usize {
        self.0
    }

    pub fn one_based(self) -> usize {
        self.0 + 1
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
