//! Checker configuration that front ends can serialize/deserialize.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::allocate::allocate;
use crate::error::{Error, Result};
use crate::legality::check_legal;
use crate::types::{CanAdd, SlotInput};

/// How a front end renders a [`CanAdd`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `canAddHero: Yes` lines.
    #[default]
    Text,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(Error::Config(format!("unknown output format '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Reject inconsistent placed counts before allocating.
    pub strict: bool,

    /// Output rendering used by the CLI.
    pub output: OutputFormat,
}

impl CheckConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `WARSLOT_STRICT`: `1`/`true`/`yes` or `0`/`false`/`no`
    /// - `WARSLOT_OUTPUT`: `text`, `json` or `yaml`
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CheckConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("WARSLOT_STRICT") {
            if let Some(v) = parse_flag(&s) {
                cfg.strict = v;
            }
        }

        if let Some(s) = lookup("WARSLOT_OUTPUT") {
            if let Ok(v) = s.parse::<OutputFormat>() {
                cfg.output = v;
            }
        }

        cfg
    }

    /// Answer the three "can add" questions under this config.
    pub fn evaluate(&self, input: &SlotInput) -> Result<CanAdd> {
        if self.strict {
            check_legal(input)?;
        }
        Ok(allocate(input))
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
