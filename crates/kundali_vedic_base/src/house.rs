//! Whole-sign houses.

/// House number (1..=12) of a sign counted from a reference sign.
///
/// `((sign − reference) mod 12) + 1`; the reference sign is always house 1.
pub fn whole_sign_house(sign_index: u8, reference_sign_index: u8) -> u8 {
    ((sign_index as i16 - reference_sign_index as i16).rem_euclid(12)) as u8 + 1
}

/// Sign occupying a house counted from a reference sign.
pub fn sign_of_house(house: u8, reference_sign_index: u8) -> u8 {
    ((reference_sign_index as u16 + (house as u16 + 11) % 12) % 12) as u8
}
