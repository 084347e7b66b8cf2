//! Filesystem conventions for Contao installations
//!
//! Provides normalized path handling, the conventional locations of the
//! legacy bootstrap files, layout detection and the few destructive I/O
//! helpers the installer plugin needs.

pub mod constants;
pub mod error;
pub mod io;
pub mod layout;
pub mod path;

pub use constants::ContaoPath;
pub use error::{Error, Result};
pub use layout::{InstallLayout, LayoutMode};
pub use path::NormalizedPath;
