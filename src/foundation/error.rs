/// Convenience result type used across Trishard.
pub type TrishardResult<T> = Result<T, TrishardError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant other than [`TrishardError::Other`] marks a violated
/// precondition: an invariant broken upstream, not a runtime condition the
/// caller should retry.
#[derive(thiserror::Error, Debug)]
pub enum TrishardError {
    /// Invalid caller-provided data (dimensions, grid step, progress range).
    #[error("validation error: {0}")]
    Validation(String),

    /// A transformed triangle or texture coordinate left its allowed domain.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// The scanline walk broke an internal invariant (iteration cap, bounds).
    #[error("raster error: {0}")]
    Raster(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TrishardError {
    /// Build a [`TrishardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TrishardError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`TrishardError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
