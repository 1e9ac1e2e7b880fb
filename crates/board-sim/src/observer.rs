//! Observer trait for progress reporting.

/// Callbacks invoked at key points of a run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — replica progress printer
///
/// ```rust,ignore
/// struct Progress;
///
/// impl BoardingObserver for Progress {
///     fn on_replica_end(&mut self, replica: u32, elapsed_secs: f64) {
///         println!("replica {replica}: boarded in {elapsed_secs:.1} s");
///     }
/// }
/// ```
pub trait BoardingObserver {
    /// Called at the end of each simulation tick.
    ///
    /// `active` is the number of passengers still queued after this tick.
    fn on_tick(&mut self, _tick: u64, _clock_secs: f64, _active: usize) {}

    /// Called when a replica's boarding completes.
    ///
    /// Under the `parallel` feature this fires after the replicas have been
    /// joined, in ascending replica order.
    fn on_replica_end(&mut self, _replica: u32, _elapsed_secs: f64) {}
}

/// A [`BoardingObserver`] that does nothing.  Use when you need to call a
/// run method but don't want progress callbacks.
pub struct NoopObserver;

impl BoardingObserver for NoopObserver {}
