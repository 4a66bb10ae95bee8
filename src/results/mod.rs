mod kind;
mod segment;

pub use kind::ProfileResultKind;
pub use segment::SegmentKey;

use crate::profile::DatasetProfile;
use std::sync::Arc;

/// Holder over the profile a profiling run accumulated.
///
/// Keeps call sites stable while the set of result kinds grows: runs that
/// accumulated one profile per segment are navigated through
/// [`ProfileResultKind`] instead of this holder.
#[derive(Debug, Clone)]
pub struct ProfilingResults<P> {
    profile: Arc<P>,
}

impl<P: DatasetProfile> ProfilingResults<P> {
    pub fn new(profile: Arc<P>) -> Self {
        log::debug!("holding the profile of a profiling run");
        Self { profile }
    }

    /// The profile exactly as it was handed in, same allocation.
    pub fn get_profile(&self) -> Arc<P> {
        Arc::clone(&self.profile)
    }

    /// Snapshot of the held profile's current state.
    ///
    /// Delegates to the engine's view production and returns its result
    /// verbatim, errors included.
    pub fn view(&self) -> Result<P::View, P::Error> {
        self.profile.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct StubViewError(String);

    #[derive(Debug)]
    struct StubProfile {
        view: &'static str,
        fail: bool,
    }

    impl DatasetProfile for StubProfile {
        type View = String;
        type Error = StubViewError;

        fn view(&self) -> Result<String, StubViewError> {
            if self.fail {
                return Err(StubViewError("view production failed".to_string()));
            }
            Ok(self.view.to_string())
        }
    }

    fn stub(view: &'static str) -> Arc<StubProfile> {
        Arc::new(StubProfile { view, fail: false })
    }

    #[test]
    fn test_get_profile_returns_the_same_allocation() {
        let profile = stub("VIEW_1");
        let results = ProfilingResults::new(Arc::clone(&profile));

        assert!(Arc::ptr_eq(&profile, &results.get_profile()));
    }

    #[test]
    fn test_two_holders_share_one_profile() {
        let profile = stub("VIEW_1");
        let first = ProfilingResults::new(Arc::clone(&profile));
        let second = ProfilingResults::new(Arc::clone(&profile));

        assert!(Arc::ptr_eq(&first.get_profile(), &second.get_profile()));
    }

    #[test]
    fn test_view_delegates_to_the_profile() {
        let profile = stub("VIEW_42");
        let results = ProfilingResults::new(Arc::clone(&profile));

        assert_eq!(results.view().unwrap(), "VIEW_42");
        assert_eq!(results.view().unwrap(), profile.view().unwrap());
    }

    #[test]
    fn test_view_propagates_the_engine_error_unaltered() {
        let profile = Arc::new(StubProfile {
            view: "",
            fail: true,
        });
        let results = ProfilingResults::new(profile);

        let err = results.view().unwrap_err();
        assert_eq!(err, StubViewError("view production failed".to_string()));
    }
}
