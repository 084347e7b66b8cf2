//! Framework version handling.
//!
//! Contao versions are dotted numbers like `2.11` or `3.5.1`, occasionally
//! followed by a suffix (`3.0.RC1`). They are mapped onto semver by reading
//! the leading numeric components and padding missing ones with zero.
//!
//! # Examples
//!
//! ```
//! use contao_core::version::FrameworkVersion;
//!
//! let v = FrameworkVersion::parse("3.2").unwrap();
//! assert!(v.uses_default_config());
//!
//! let v = FrameworkVersion::parse("2.11").unwrap();
//! assert!(!v.uses_default_config());
//! ```

use std::fmt;

use crate::error::{Error, Result};

/// First major version that ships `system/config/default.php`.
pub const DEFAULT_CONFIG_SINCE_MAJOR: u64 = 3;

/// The version of a Contao installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkVersion {
    version: semver::Version,
    /// The version string as written in the constants file.
    raw: String,
}

impl FrameworkVersion {
    /// Parse a version string.
    ///
    /// Fails if the string does not start with a number.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let mut parts = [0u64; 3];
        let mut count = 0;

        for component in trimmed.split('.').take(3) {
            let digits: String = component.chars().take_while(char::is_ascii_digit).collect();
            if digits.is_empty() {
                break;
            }
            parts[count] = digits.parse().map_err(|_| Error::InvalidVersion {
                version: raw.to_string(),
            })?;
            count += 1;
            if digits.len() != component.len() {
                break;
            }
        }

        if count == 0 {
            return Err(Error::InvalidVersion {
                version: raw.to_string(),
            });
        }

        Ok(Self {
            version: semver::Version::new(parts[0], parts[1], parts[2]),
            raw: trimmed.to_string(),
        })
    }

    /// The normalized semver version.
    pub fn semver(&self) -> &semver::Version {
        &self.version
    }

    pub fn major(&self) -> u64 {
        self.version.major
    }

    /// Return the original version string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether this version is at least `major.0.0`.
    pub fn is_at_least(&self, major: u64) -> bool {
        self.version >= semver::Version::new(major, 0, 0)
    }

    /// Whether the installation is configured through `default.php`
    /// (Contao 3+) rather than `config.php` (Contao 2).
    pub fn uses_default_config(&self) -> bool {
        self.is_at_least(DEFAULT_CONFIG_SINCE_MAJOR)
    }
}

impl fmt::Display for FrameworkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
