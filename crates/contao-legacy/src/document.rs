//! Parsed legacy source files.

use contao_fs::{NormalizedPath, io};

use crate::error::{Error, Result};
use crate::lexer::split_statements;
use crate::parser::{Statement, StatementKind, parse_statement};
use crate::value::LegacyValue;

/// The statements of one legacy PHP file, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LegacyDocument {
    statements: Vec<Statement>,
}

impl LegacyDocument {
    /// Parse legacy PHP source.
    ///
    /// # Example
    ///
    /// ```
    /// use contao_legacy::LegacyDocument;
    ///
    /// let doc = LegacyDocument::parse("<?php define('VERSION', '3.5');").unwrap();
    /// let (name, value) = doc.defines().next().unwrap();
    /// assert_eq!(name, "VERSION");
    /// assert_eq!(value.as_str(), Some("3.5"));
    /// ```
    pub fn parse(source: &str) -> Result<Self> {
        let statements = split_statements(source)?
            .iter()
            .map(parse_statement)
            .collect();
        Ok(Self { statements })
    }

    /// Read and parse the file at `path`.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let source = io::read_text(path)?;
        let document = Self::parse(&source).map_err(|e| Error::File {
            path: path.to_native(),
            source: Box::new(e),
        })?;
        tracing::debug!(
            path = %path,
            statements = document.statements.len(),
            "Parsed legacy file"
        );
        Ok(document)
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Constant definitions in source order.
    pub fn defines(&self) -> impl Iterator<Item = (&str, &LegacyValue)> {
        self.statements.iter().filter_map(|s| match &s.kind {
            StatementKind::Define { name, value } => Some((name.as_str(), value)),
            _ => None,
        })
    }
}
