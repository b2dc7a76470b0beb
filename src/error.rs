use thiserror::Error;

/// Errors that can occur while saving a drawing
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("This app does not have permission to save images")]
    PermissionDenied,

    #[error("Invalid drawing name: {0:?}")]
    InvalidName(String),

    #[error("Failed to write drawing: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode drawing as PNG: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Export worker stopped before reporting a result")]
    WorkerDisconnected,
}

/// Errors raised when creating or resizing the drawing surface
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Errors raised while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type SaveResult<T> = Result<T, SaveError>;
