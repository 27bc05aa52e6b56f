use thiserror::Error;

/// Reasons a requested game configuration is rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board size {width}x{height} is outside of the supported range")]
    InvalidSize { width: u32, height: u32 },
    #[error("Mine count {mines} does not fit on a board of {capacity} cells")]
    InvalidMineCount { mines: u32, capacity: u32 },
}

/// Errors building a board from an explicit mine layout.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board size is outside of the supported range")]
    InvalidSize,
}

pub type Result<T, E = ConfigError> = core::result::Result<T, E>;
