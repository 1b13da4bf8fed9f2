use thiserror::Error;

#[derive(Error, Debug)]
pub enum IonScintError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("Distortion map error: {0}")]
    DistortionMap(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type IonScintResult<T> = Result<T, IonScintError>;
