use std::fmt::{Display, Formatter, Result};

/// The error returned when querying an empty [`AvlSet`] for an element that
/// must exist, such as its minimum or maximum.
///
/// [`AvlSet`]: crate::AvlSet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Underflow;

impl Display for Underflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "tree is empty")
    }
}

impl std::error::Error for Underflow {}
