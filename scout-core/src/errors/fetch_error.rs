/// Per-source fetch failures.
///
/// These never abort an orchestrated fetch: the affected source is
/// dropped from the merge and the failure is reported in the outcome.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("fetch deadline exceeded after {waited_ms} ms")]
    DeadlineExceeded { waited_ms: u64 },

    #[error("fetch worker panicked for source {source_name}")]
    WorkerPanicked { source_name: String },
}
