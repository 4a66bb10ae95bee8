/// Seam to the external profiling engine.
///
/// The accumulation engine, its sketches and its view serialization live
/// outside this crate. The results layer needs exactly one operation from
/// a profile: produce an immutable snapshot of its current state.
pub trait DatasetProfile {
    /// Snapshot type handed back by [`DatasetProfile::view`].
    type View;

    /// Failure type of view production. The results layer never inspects
    /// it and never wraps it.
    type Error;

    fn view(&self) -> Result<Self::View, Self::Error>;
}
