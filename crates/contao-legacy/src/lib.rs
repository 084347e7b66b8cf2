//! Reader for the legacy Contao bootstrap files.
//!
//! Contao 2 and 3 keep their version in a constants file and their settings
//! in PHP files that assign to `$GLOBALS['TL_CONFIG']`. Instead of executing
//! those files, this crate parses the small subset of PHP they are written
//! in and exposes the results as [`Constants`] and [`LegacyConfig`].
//!
//! ```
//! use contao_legacy::{LegacyConfig, LegacyDocument};
//!
//! let doc = LegacyDocument::parse(r#"<?php
//! $GLOBALS['TL_CONFIG']['websiteTitle'] = 'Contao Open Source CMS';
//! $GLOBALS['TL_CONFIG']['cacheMode'] = 'both';
//! "#).unwrap();
//!
//! let mut config = LegacyConfig::new();
//! config.apply(&doc);
//! assert_eq!(config.get_str("cacheMode"), Some("both"));
//! ```

pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod value;

pub use config::LegacyConfig;
pub use constants::Constants;
pub use document::LegacyDocument;
pub use error::{Error, Result};
pub use parser::{Statement, StatementKind};
pub use value::{KeySegment, LegacyValue};
