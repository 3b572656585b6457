//! The attribute lookup table.
//!
//! Loaded once, validated, then shared read-only. The standard table is
//! embedded at compile time; callers may supply their own JSON with the
//! same shape.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::graha::Graha;

const STANDARD_TABLE_JSON: &str = include_str!("../../data/attributes.json");

pub const SIGN_COUNT: usize = 12;
pub const NAKSHATRA_COUNT: usize = 27;
pub const SYLLABLES_PER_NAKSHATRA: usize = 4;
pub const PAYA_BUCKETS: usize = 3;

/// Per-sign attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignAttributes {
    pub name: String,
    pub varna: String,
    pub vashya: String,
    /// Tatva of the sign.
    pub element: String,
    pub lord: Graha,
}

/// Per-nakshatra attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraAttributes {
    pub name: String,
    pub lord: Graha,
    pub yoni: String,
    pub gana: String,
    pub nadi: String,
    /// Name syllable per pada, pada 1 first.
    pub syllables: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayaBucket {
    pub name: String,
    pub nakshatras: Vec<u8>,
}

/// Read-only sign and nakshatra attribute table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeTable {
    signs: Vec<SignAttributes>,
    nakshatras: Vec<NakshatraAttributes>,
    paya: Vec<PayaBucket>,
}

impl AttributeTable {
    /// The embedded standard table.
    pub fn standard() -> Result<Self, VedicError> {
        Self::from_json_str(STANDARD_TABLE_JSON)
    }

    /// Parse and validate a table from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, VedicError> {
        let table: Self = serde_json::from_str(json)
            .map_err(|e| VedicError::DomainTable(format!("parse: {e}")))?;
        table.validate()?;
        Ok(table)
    }

    /// Read, parse and validate a table file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, VedicError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| VedicError::DomainTable(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    /// Shape checks: 12 signs, 27 nakshatras with 4 syllables each, and paya
    /// buckets that cover every nakshatra exactly once.
    pub fn validate(&self) -> Result<(), VedicError> {
        if self.signs.len() != SIGN_COUNT {
            return Err(VedicError::DomainTable(format!(
                "expected {SIGN_COUNT} signs, found {}",
                self.signs.len()
            )));
        }
        if self.nakshatras.len() != NAKSHATRA_COUNT {
            return Err(VedicError::DomainTable(format!(
                "expected {NAKSHATRA_COUNT} nakshatras, found {}",
                self.nakshatras.len()
            )));
        }
        for (i, n) in self.nakshatras.iter().enumerate() {
            if n.syllables.len() != SYLLABLES_PER_NAKSHATRA {
                return Err(VedicError::DomainTable(format!(
                    "nakshatra {i} ({}) has {} syllables",
                    n.name,
                    n.syllables.len()
                )));
            }
        }
        if self.paya.len() != PAYA_BUCKETS {
            return Err(VedicError::DomainTable(format!(
                "expected {PAYA_BUCKETS} paya buckets, found {}",
                self.paya.len()
            )));
        }
        let mut seen = [false; NAKSHATRA_COUNT];
        for bucket in &self.paya {
            for &idx in &bucket.nakshatras {
                let slot = seen.get_mut(idx as usize).ok_or_else(|| {
                    VedicError::DomainTable(format!(
                        "paya {} lists nakshatra {idx} out of range",
                        bucket.name
                    ))
                })?;
                if *slot {
                    return Err(VedicError::DomainTable(format!(
                        "nakshatra {idx} appears in more than one paya bucket"
                    )));
                }
                *slot = true;
            }
        }
        if let Some(missing) = seen.iter().position(|s| !s) {
            return Err(VedicError::DomainTable(format!(
                "nakshatra {missing} has no paya bucket"
            )));
        }
        Ok(())
    }

    pub fn sign(&self, sign_index: u8) -> Result<&SignAttributes, VedicError> {
        self.signs
            .get(sign_index as usize)
            .ok_or_else(|| VedicError::DomainTable(format!("sign index {sign_index} out of range")))
    }

    pub fn nakshatra(&self, nakshatra_index: u8) -> Result<&NakshatraAttributes, VedicError> {
        self.nakshatras.get(nakshatra_index as usize).ok_or_else(|| {
            VedicError::DomainTable(format!("nakshatra index {nakshatra_index} out of range"))
        })
    }

    /// Name syllable for a nakshatra pada (1-based).
    pub fn syllable(&self, nakshatra_index: u8, pada: u8) -> Result<&str, VedicError> {
        let nak = self.nakshatra(nakshatra_index)?;
        pada.checked_sub(1)
            .and_then(|p| nak.syllables.get(p as usize))
            .map(String::as_str)
            .ok_or_else(|| VedicError::DomainTable(format!("pada {pada} out of range")))
    }

    /// Paya bucket name of a nakshatra.
    pub fn paya(&self, nakshatra_index: u8) -> Result<&str, VedicError> {
        self.paya
            .iter()
            .find(|b| b.nakshatras.contains(&nakshatra_index))
            .map(|b| b.name.as_str())
            .ok_or_else(|| {
                VedicError::DomainTable(format!("nakshatra index {nakshatra_index} has no paya"))
            })
    }
}
