/// Cache layer errors.
///
/// Read/write failures inside a backend are absorbed and logged (a cache
/// miss is always an acceptable answer); only construction-time failures
/// surface, and those trigger the local-backend fallback.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("shared cache backend unavailable: {reason}")]
    BackendUnavailable { reason: String },
}
