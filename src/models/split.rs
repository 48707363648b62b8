use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the fixed corpus partitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Val,
    Test,
}

impl Split {
    /// Processing order; also the row order of the combined table
    pub const ALL: [Split; 3] = [Split::Train, Split::Val, Split::Test];

    /// Directory name under the raw-text root, and the value of the `Split` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Val => "val",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
