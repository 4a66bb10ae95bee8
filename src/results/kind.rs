use super::segment::SegmentKey;
use super::ProfilingResults;
use crate::profile::DatasetProfile;
use std::collections::HashMap;
use std::sync::Arc;

/// Every kind of outcome a profiling run can hand back.
///
/// Kinds are additive: call sites that navigate results match on this
/// enum, and the compiler walks them through any kind added later.
#[derive(Debug, Clone)]
pub enum ProfileResultKind<P> {
    /// The run accumulated one profile over the whole dataset.
    Single(Arc<P>),
    /// The run accumulated one profile per segment partition.
    Segmented(HashMap<SegmentKey, Arc<P>>),
}

impl<P: DatasetProfile> ProfileResultKind<P> {
    pub fn single(profile: Arc<P>) -> Self {
        Self::Single(profile)
    }

    pub fn segmented(partitions: HashMap<SegmentKey, Arc<P>>) -> Self {
        log::debug!("holding {} segmented profiles", partitions.len());
        Self::Segmented(partitions)
    }

    /// How many profiles this result holds.
    pub fn profile_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Segmented(partitions) => partitions.len(),
        }
    }

    /// The profile, when exactly one is held.
    pub fn profile(&self) -> Option<Arc<P>> {
        match self {
            Self::Single(profile) => Some(Arc::clone(profile)),
            Self::Segmented(_) => None,
        }
    }

    /// The profile accumulated for one segment partition.
    pub fn segment(&self, key: &SegmentKey) -> Option<Arc<P>> {
        match self {
            Self::Single(_) => None,
            Self::Segmented(partitions) => partitions.get(key).map(Arc::clone),
        }
    }

    /// Iterate the segmented partitions. Empty for [`ProfileResultKind::Single`].
    pub fn segments(&self) -> impl Iterator<Item = (&SegmentKey, &Arc<P>)> {
        match self {
            Self::Single(_) => None,
            Self::Segmented(partitions) => Some(partitions.iter()),
        }
        .into_iter()
        .flatten()
    }
}

impl<P: DatasetProfile> From<ProfilingResults<P>> for ProfileResultKind<P> {
    fn from(results: ProfilingResults<P>) -> Self {
        Self::Single(results.get_profile())
    }
}
