/// Vector index errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("index/metadata length mismatch: {vectors} vectors, {metadata} metadata records")]
    ConsistencyFault { vectors: usize, metadata: usize },

    #[error("metadata sidecar missing: {path}")]
    MetadataMissing { path: String },

    #[error("index file missing: {path}")]
    IndexFileMissing { path: String },

    #[error("malformed index file: {reason}")]
    Malformed { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
