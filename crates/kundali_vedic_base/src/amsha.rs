//! Divisional (amsha) charts by equal division of each sign.
//!
//! A sign is cut into `n` parts of 30/n degrees. The part index is counted
//! from a starting sign chosen by the natal sign's modality: movable signs
//! start from themselves, fixed signs from the 9th sign (8 ahead), dual
//! signs from the 5th sign (4 ahead). For n = 9 this is the Navamsha.

use crate::error::VedicError;
use crate::rashi::{Modality, Rashi};

/// Navamsha divisor.
pub const NAVAMSHA: u16 = 9;

/// Largest accepted divisor.
pub const MAX_DIVISOR: u16 = 300;

/// Sign offset from the natal sign where counting starts.
pub const fn start_offset(modality: Modality) -> u8 {
    match modality {
        Modality::Movable => 0,
        Modality::Fixed => 8,
        Modality::Dual => 4,
    }
}

/// Validate a divisor: 1..=[`MAX_DIVISOR`].
pub fn check_divisor(divisor: u16) -> Result<(), VedicError> {
    if divisor == 0 || divisor > MAX_DIVISOR {
        return Err(VedicError::invalid(
            "divisor",
            format!("must be within 1..={MAX_DIVISOR}, got {divisor}"),
        ));
    }
    Ok(())
}

/// 0-based part index of a degree within its sign.
pub fn part_index(degrees_in_sign: f64, divisor: u16) -> u16 {
    let width = 30.0 / divisor as f64;
    ((degrees_in_sign / width).floor().max(0.0) as u16).min(divisor - 1)
}

/// Divisional sign index for a natal sign and degree within it.
pub fn divisional_sign(
    sign_index: u8,
    degrees_in_sign: f64,
    divisor: u16,
) -> Result<u8, VedicError> {
    check_divisor(divisor)?;
    if sign_index > 11 {
        return Err(VedicError::invalid("sign_index", format!("{sign_index} > 11")));
    }
    let start = sign_index as u16 + start_offset(Rashi::from_index(sign_index).modality()) as u16;
    let part = part_index(degrees_in_sign, divisor);
    Ok(((start + part) % 12) as u8)
}

/// Divisional sign index for a sidereal longitude.
pub fn divisional_sign_for_longitude(sidereal_lon_deg: f64, divisor: u16) -> Result<u8, VedicError> {
    let info = crate::rashi::rashi_from_longitude(sidereal_lon_deg);
    divisional_sign(info.rashi_index, info.degrees_in_rashi, divisor)
}
