//! Solar month named from the Sun's sidereal sign (Tamil calendar).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolarMonth {
    Chithirai,
    Vaikasi,
    Aani,
    Aadi,
    Aavani,
    Purattasi,
    Aippasi,
    Karthigai,
    Margazhi,
    Thai,
    Maasi,
    Panguni,
}

pub const ALL_SOLAR_MONTHS: [SolarMonth; 12] = [
    SolarMonth::Chithirai,
    SolarMonth::Vaikasi,
    SolarMonth::Aani,
    SolarMonth::Aadi,
    SolarMonth::Aavani,
    SolarMonth::Purattasi,
    SolarMonth::Aippasi,
    SolarMonth::Karthigai,
    SolarMonth::Margazhi,
    SolarMonth::Thai,
    SolarMonth::Maasi,
    SolarMonth::Panguni,
];

impl SolarMonth {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chithirai => "Chithirai",
            Self::Vaikasi => "Vaikasi",
            Self::Aani => "Aani",
            Self::Aadi => "Aadi",
            Self::Aavani => "Aavani",
            Self::Purattasi => "Purattasi",
            Self::Aippasi => "Aippasi",
            Self::Karthigai => "Karthigai",
            Self::Margazhi => "Margazhi",
            Self::Thai => "Thai",
            Self::Maasi => "Maasi",
            Self::Panguni => "Panguni",
        }
    }

    /// Month for the Sun's sign index (Mesha = Chithirai).
    pub const fn from_sun_sign(sign_index: u8) -> Self {
        ALL_SOLAR_MONTHS[(sign_index % 12) as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesha_is_chithirai() {
        assert_eq!(SolarMonth::from_sun_sign(0), SolarMonth::Chithirai);
        assert_eq!(SolarMonth::from_sun_sign(2).name(), "Aani");
        assert_eq!(SolarMonth::from_sun_sign(11), SolarMonth::Panguni);
    }
}
