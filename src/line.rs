use displaydoc::Display;
use serde::{Deserialize, Serialize};

/// A row (source) or column (destination) of the transportation tableau.
#[derive(Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Debug, Display, Serialize, Deserialize)]
pub enum Line {
    /// supply row {0}
    Row(usize),
    /// demand column {0}
    Column(usize),
}

impl Line {
    pub fn index(&self) -> usize {
        match self {
            Self::Row(i) | Self::Column(i) => *i,
        }
    }
}
