//! Shared test utilities for the contao-composer workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`install`]: sources of the legacy bootstrap files for Contao 2 and 3
//! - [`project`]: [`project::TestProject`] builder for on-disk installations

pub mod install;
pub mod project;
