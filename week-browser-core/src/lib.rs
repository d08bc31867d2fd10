//! Week Browser Core Library
//!
//! Platform-independent state machine behind the week browser:
//! - Item registry (week → original file name)
//! - Card list controller (single active card)
//! - Content loader (viewer busy/ready, download control, stale-load guard)
//! - Keyboard navigator and visibility notifier
//!
//! Display surfaces are abstracted through the [`Viewer`] trait so the same
//! session logic drives the terminal front-end and the tests.

pub mod cards;
pub mod error;
pub mod layout;
pub mod loader;
pub mod navigator;
pub mod registry;
pub mod session;
pub mod traits;
pub mod visibility;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use cards::{CardList, CardState, SelectOutcome};
pub use error::{BrowserError, BrowserResult};
pub use layout::{LoadRequest, ResourceLayout};
pub use loader::{Completion, ContentLoader, DownloadControl, ViewerStatus};
pub use navigator::Direction;
pub use session::{Browser, Selection, StartupPhase};
pub use traits::{LoadOutcome, LoadToken, Viewer, ViewerEvent};
pub use visibility::VisibilityNotifier;
