//! Crate-level error types.

use std::fmt;

use crate::camera::CameraConfigError;
use crate::gpu::render_context::RenderContextError;

/// Errors produced by the mira crate.
#[derive(Debug)]
pub enum MiraError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Invalid camera configuration.
    CameraConfig(CameraConfigError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for MiraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::CameraConfig(e) => {
                write!(f, "camera configuration error: {e}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for MiraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::CameraConfig(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for MiraError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<CameraConfigError> for MiraError {
    fn from(e: CameraConfigError) -> Self {
        Self::CameraConfig(e)
    }
}

impl From<std::io::Error> for MiraError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
