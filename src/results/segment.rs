use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one segment partition: the partition name plus the ordered
/// tuple of segment values selecting it.
///
/// Deriving keys from dataset rows is the engine's job; this layer only
/// needs a hashable identity to navigate segmented results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SegmentKey {
    pub partition: String,
    pub values: Vec<String>,
}

impl SegmentKey {
    pub fn new(partition: &str, values: &[&str]) -> Self {
        Self {
            partition: partition.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.partition, self.values.join("/"))
    }
}
