//! Component name validation and the derived stylesheet token.

use crate::error::{Result, ScaffoldError};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref PASCAL_CASE: Regex = Regex::new(r"^[A-Z][a-zA-Z0-9]*$").unwrap();
}

/// A validated PascalCase component name, e.g. `ExampleButton`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName(String);

impl ComponentName {
    /// Validates a raw command-line value.
    ///
    /// An empty value counts as missing and is reported separately from a value with
    /// the wrong casing.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(ScaffoldError::MissingName);
        }
        if !PASCAL_CASE.is_match(raw) {
            return Err(ScaffoldError::InvalidName(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the kebab-case token used for the stylesheet name and CSS class.
    pub fn style_token(&self) -> StyleToken {
        StyleToken::derive(self)
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase, hyphen separated form of a [`ComponentName`], e.g. `example-button`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleToken(String);

impl StyleToken {
    /// `ExampleButton` -> `-Example-Button` -> `-example-button` -> `example-button`.
    ///
    /// Every uppercase letter starts a new segment, so acronyms split per letter
    /// (`HTMLView` -> `h-t-m-l-view`).
    pub fn derive(name: &ComponentName) -> Self {
        let mut token = String::with_capacity(name.0.len() * 2);
        for c in name.0.chars() {
            if c.is_ascii_uppercase() {
                token.push('-');
            }
            token.push(c.to_ascii_lowercase());
        }

        // A valid name always starts uppercase, hence always with a separator here.
        let token = token.strip_prefix('-').unwrap_or(&token).to_string();
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
