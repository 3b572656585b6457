//! Avakhada: birth attributes looked up from the Moon's sign, nakshatra
//! and pada.

pub mod table;

use serde::Serialize;

use crate::error::VedicError;
use crate::graha::Graha;

pub use table::{AttributeTable, NakshatraAttributes, PayaBucket, SignAttributes};

/// Half of a nakshatra: padas 1–2 are Poorva, 3–4 Uttara.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yunja {
    Poorva,
    Uttara,
}

impl Yunja {
    pub fn from_pada(pada: u8) -> Result<Self, VedicError> {
        match pada {
            1 | 2 => Ok(Self::Poorva),
            3 | 4 => Ok(Self::Uttara),
            _ => Err(VedicError::DomainTable(format!("pada {pada} out of range"))),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Poorva => "Poorva",
            Self::Uttara => "Uttara",
        }
    }
}

/// Attribute record for one Moon placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Avakhada {
    pub sign: String,
    pub sign_lord: Graha,
    pub varna: String,
    pub vashya: String,
    pub tatva: String,
    pub nakshatra: String,
    pub nakshatra_lord: Graha,
    pub pada: u8,
    pub yoni: String,
    pub gana: String,
    pub nadi: String,
    pub yunja: Yunja,
    pub naamakshar: String,
    pub paya: String,
}

/// Look up the avakhada record. Fails on any index outside the table.
pub fn avakhada(
    table: &AttributeTable,
    sign_index: u8,
    nakshatra_index: u8,
    pada: u8,
) -> Result<Avakhada, VedicError> {
    let sign = table.sign(sign_index)?;
    let nak = table.nakshatra(nakshatra_index)?;
    Ok(Avakhada {
        sign: sign.name.clone(),
        sign_lord: sign.lord,
        varna: sign.varna.clone(),
        vashya: sign.vashya.clone(),
        tatva: sign.element.clone(),
        nakshatra: nak.name.clone(),
        nakshatra_lord: nak.lord,
        pada,
        yoni: nak.yoni.clone(),
        gana: nak.gana.clone(),
        nadi: nak.nadi.clone(),
        yunja: Yunja::from_pada(pada)?,
        naamakshar: table.syllable(nakshatra_index, pada)?.to_string(),
        paya: table.paya(nakshatra_index)?.to_string(),
    })
}
