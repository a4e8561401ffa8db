use thiserror::Error;

#[derive(Debug,Error)]
pub enum DiagError {
    #[error("invalid circuit description: {0}")]
    Structural(String),
    #[error("component {gate} has unsupported gate kind {kind}")]
    UnsupportedGateKind { gate:String, kind:String },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T,DiagError>;
