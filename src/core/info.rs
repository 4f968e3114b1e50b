//! Ordered view of a BEDPE/VCF INFO string.
//!
//! Tokens are kept in their original order, including empty tokens produced by
//! doubled or trailing semicolons, so an unmodified field re-renders byte for byte.

use super::svtype::SvType;
use crate::{error::ConvError, utils::util::Result};
use std::fmt;

pub mod keys {
    pub const SVTYPE: &str = "SVTYPE";
    pub const CIPOS: &str = "CIPOS";
    pub const CIEND: &str = "CIEND";
    pub const CIPOS95: &str = "CIPOS95";
    pub const CIEND95: &str = "CIEND95";
    pub const STRANDS: &str = "STRANDS";
    pub const MATEID: &str = "MATEID";
    pub const EVENT: &str = "EVENT";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoEntry {
    pub key: String,
    pub value: Option<String>,
}

impl InfoEntry {
    pub fn flag(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    pub fn empty() -> Self {
        Self::flag("")
    }

    fn parse(token: &str) -> Self {
        match token.split_once('=') {
            Some((key, value)) => Self {
                key: key.to_string(),
                value: Some(value.to_string()),
            },
            None => Self::flag(token),
        }
    }
}

impl fmt::Display for InfoEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={}", self.key, value),
            None => write!(f, "{}", self.key),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfoField {
    entries: Vec<InfoEntry>,
}

impl InfoField {
    pub fn parse(info: &str) -> Self {
        Self {
            entries: info.split(';').map(InfoEntry::parse).collect(),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        if key.is_empty() {
            return None;
        }
        self.entries.iter().position(|entry| entry.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key)
            .and_then(|idx| self.entries[idx].value.as_deref())
    }

    /// Replaces the value of an existing key; absent keys are not added.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.position(key) {
            Some(idx) => {
                self.entries[idx].value = Some(value.into());
                true
            }
            None => false,
        }
    }

    /// Exchanges the values of two keys when both are present.
    pub fn swap_values(&mut self, a: &str, b: &str) -> bool {
        match (self.position(a), self.position(b)) {
            (Some(i), Some(j)) if i != j => {
                let value_a = self.entries[i].value.take();
                self.entries[i].value = self.entries[j].value.take();
                self.entries[j].value = value_a;
                true
            }
            _ => false,
        }
    }

    pub fn insert_after(&mut self, key: &str, new_entries: Vec<InfoEntry>) -> bool {
        match self.position(key) {
            Some(idx) => {
                self.entries.splice(idx + 1..idx + 1, new_entries);
                true
            }
            None => false,
        }
    }

    pub fn svtype(&self) -> Option<SvType> {
        self.get(keys::SVTYPE).map(|v| SvType::from_u8(v.as_bytes()))
    }

    /// Lower bound of a `lo,hi` confidence interval.
    fn ci_lower(&self, key: &'static str) -> Result<Option<i64>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let lower = value.split(',').next().unwrap_or_default();
        lower
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ConvError::InvalidInteger {
                column: key,
                value: value.to_string(),
            })
    }

    pub fn cipos_lower(&self) -> Result<Option<i64>> {
        self.ci_lower(keys::CIPOS)
    }

    pub fn ciend_lower(&self) -> Result<Option<i64>> {
        self.ci_lower(keys::CIEND)
    }

    pub fn strands(&self) -> Option<&str> {
        self.get(keys::STRANDS)
    }
}

impl fmt::Display for InfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, entry) in self.entries.iter().enumerate() {
            if idx > 0 {
                f.write_str(";")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Flips the orientation pair of every `oo:count` entry, e.g. `+-:4,--:2` -> `-+:4,--:2`.
pub fn reverse_strands(value: &str) -> String {
    value
        .split(',')
        .map(|entry| match entry.split_once(':') {
            Some((orientation, count)) => {
                format!("{}:{}", orientation.chars().rev().collect::<String>(), count)
            }
            None => entry.chars().rev().collect(),
        })
        .collect::<Vec<_>>()
        .join(",")
}
