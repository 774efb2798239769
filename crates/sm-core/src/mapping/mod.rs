use serde::{Deserialize, Serialize};

/// A mapping linking a segment-specific item id to its canonical sample item.
///
/// `(item_id, sample_item_id)` is the uniqueness key; `clm_segments` is a
/// non-key attribute listing the CLM segments under which the item id is
/// valid. Mappings are immutable once registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleMapping {
    pub item_id: String,
    pub sample_item_id: String,
    pub clm_segments: Vec<String>,
}

impl SampleMapping {
    /// True when this mapping shares at least one segment with `segments`.
    pub fn overlaps(&self, segments: &[String]) -> bool {
        self.clm_segments.iter().any(|s| segments.contains(s))
    }
}
