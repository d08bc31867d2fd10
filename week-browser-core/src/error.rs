//! Unified error type definition

use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowserError {
    /// Index is not a registered item
    #[error("Unknown week: {0}")]
    UnknownItem(u32),

    /// Card list has not been built yet
    #[error("No week cards found")]
    NoCards,

    /// A required display surface is not available
    #[error("Required elements not found: {0}")]
    MissingSurface(&'static str),

    /// Viewer reported a failed content load
    #[error("Failed to load week {index} content: {reason}")]
    ContentLoad { index: u32, reason: String },

    /// Registry has no downloadable file for the index
    #[error("No file mapping found for week {0}")]
    NoFileMapping(u32),
}

impl BrowserError {
    /// Whether it is expected behavior (user input, missing mapping), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::UnknownItem(_) | Self::NoCards | Self::NoFileMapping(_) => true,
            Self::MissingSurface(_) | Self::ContentLoad { .. } => false,
        }
    }

    /// Emit this error on the diagnostic channel at the level given by [`Self::is_expected`].
    pub fn report(&self) {
        if self.is_expected() {
            log::warn!("{self}");
        } else {
            log::error!("{self}");
        }
    }
}

/// Core layer Result type alias
pub type BrowserResult<T> = std::result::Result<T, BrowserError>;
