//! Code style configuration
//!
//! This module defines the style knobs a caller supplies per generation:
//! identifier naming convention, indentation unit, and brace placement.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier naming convention for generated helper functions and types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamingConvention {
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
    #[serde(rename = "PascalCase")]
    PascalCase,
}

impl NamingConvention {
    /// Pick the spelling matching this convention from a pre-derived triple.
    pub(crate) fn pick(
        &self,
        snake: &'static str,
        pascal: &'static str,
        camel: &'static str,
    ) -> &'static str {
        match self {
            Self::SnakeCase => snake,
            Self::PascalCase => pascal,
            Self::CamelCase => camel,
        }
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::CamelCase
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CamelCase => "camelCase",
            Self::SnakeCase => "snake_case",
            Self::PascalCase => "PascalCase",
        };
        write!(f, "{name}")
    }
}

impl FromStr for NamingConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camelCase" => Ok(Self::CamelCase),
            "snake_case" => Ok(Self::SnakeCase),
            "PascalCase" => Ok(Self::PascalCase),
            other => Err(format!(
                "unknown naming convention: {other} (expected camelCase, snake_case or PascalCase)"
            )),
        }
    }
}

/// Indentation unit used when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Indentation {
    #[serde(rename = "2spaces")]
    TwoSpaces,
    #[serde(rename = "4spaces")]
    FourSpaces,
    #[serde(rename = "tabs")]
    Tabs,
}

impl Indentation {
    /// The literal unit prepended per indentation level. Four spaces is the
    /// default for anything that is not explicitly two spaces or tabs.
    pub fn indent_unit(&self) -> &'static str {
        match self {
            Self::TwoSpaces => "  ",
            Self::Tabs => "\t",
            Self::FourSpaces => "    ",
        }
    }
}

impl Default for Indentation {
    fn default() -> Self {
        Self::FourSpaces
    }
}

impl fmt::Display for Indentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TwoSpaces => "2spaces",
            Self::FourSpaces => "4spaces",
            Self::Tabs => "tabs",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Indentation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2spaces" => Ok(Self::TwoSpaces),
            "4spaces" => Ok(Self::FourSpaces),
            "tabs" => Ok(Self::Tabs),
            other => Err(format!(
                "unknown indentation: {other} (expected 2spaces, 4spaces or tabs)"
            )),
        }
    }
}

/// Brace placement for the entry-point function.
///
/// Helper functions keep the brace placement baked into their template
/// source; only `int main()` honors this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BraceStyle {
    #[serde(rename = "K&R")]
    KAndR,
    #[serde(rename = "Allman")]
    Allman,
    #[serde(rename = "GNU")]
    Gnu,
}

impl BraceStyle {
    /// Whether the opening brace goes on its own line after the signature.
    pub fn opens_on_new_line(&self) -> bool {
        matches!(self, Self::Allman)
    }
}

impl Default for BraceStyle {
    fn default() -> Self {
        Self::KAndR
    }
}

impl fmt::Display for BraceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::KAndR => "K&R",
            Self::Allman => "Allman",
            Self::Gnu => "GNU",
        };
        write!(f, "{name}")
    }
}

impl FromStr for BraceStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "K&R" | "knr" => Ok(Self::KAndR),
            "Allman" | "allman" => Ok(Self::Allman),
            "GNU" | "gnu" => Ok(Self::Gnu),
            other => Err(format!(
                "unknown brace style: {other} (expected K&R, Allman or GNU)"
            )),
        }
    }
}

/// Complete style configuration for one generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeStyle {
    /// Identifier naming convention
    #[serde(default)]
    pub naming: NamingConvention,

    /// Indentation unit
    #[serde(default)]
    pub indentation: Indentation,

    /// Entry-point brace placement
    #[serde(default)]
    pub brace_style: BraceStyle,

    /// Emit placeholder comments in templates that carry them
    #[serde(default = "default_include_comments")]
    pub include_comments: bool,
}

impl Default for CodeStyle {
    fn default() -> Self {
        Self {
            naming: NamingConvention::default(),
            indentation: Indentation::default(),
            brace_style: BraceStyle::default(),
            include_comments: default_include_comments(),
        }
    }
}

fn default_include_comments() -> bool {
    true
}
