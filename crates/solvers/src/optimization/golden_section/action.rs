/// Control actions an observer may return from a golden section event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// End the search now with [`Status::StoppedByObserver`].
    ///
    /// The solution is the midpoint of the bracket at the time of the event.
    ///
    /// [`Status::StoppedByObserver`]: super::Status::StoppedByObserver
    StopEarly,

    /// Rank the probed point below the other interior point.
    ///
    /// The bracket then shrinks away from the probe whatever its value was.
    /// This is the only way a failed evaluation lets the search continue, and
    /// it can also push the search out of a region where evaluation succeeded.
    AssumeWorse,
}
