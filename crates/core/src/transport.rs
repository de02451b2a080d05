//! Transport selector: a closed enumeration with fixed ordinals.

use core::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Mode of transport. Ordinals are part of the wire contract.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum TransportKind {
    Car = 1,
    Motorbike = 2,
    Bicycle = 3,
}

/// The value is not the ordinal of any [`TransportKind`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown transport selector: {0:?}")]
pub struct UnknownTransport(pub String);

impl TransportKind {
    pub const ALL: [TransportKind; 3] = [
        TransportKind::Car,
        TransportKind::Motorbike,
        TransportKind::Bicycle,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Name of the selected transport.
///
/// Total over the enumeration. Adding a variant fails to compile here until
/// it is given a name.
pub fn classify(selector: TransportKind) -> &'static str {
    match selector {
        TransportKind::Car => "car",
        TransportKind::Motorbike => "motorbike",
        TransportKind::Bicycle => "bicycle",
    }
}

impl core::fmt::Display for TransportKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(classify(*self))
    }
}

impl TryFrom<u8> for TransportKind {
    type Error = UnknownTransport;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.ordinal() == value)
            .ok_or_else(|| UnknownTransport(value.to_string()))
    }
}

impl FromStr for TransportKind {
    type Err = UnknownTransport;

    /// Parses the canonical decimal ordinal (`"1"`, `"2"`, `"3"`).
    ///
    /// Signs and leading zeros are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.ordinal().to_string() == s)
            .ok_or_else(|| UnknownTransport(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_map_one_to_one() {
        assert_eq!(classify("1".parse().unwrap()), "car");
        assert_eq!(classify("2".parse().unwrap()), "motorbike");
        assert_eq!(classify("3".parse().unwrap()), "bicycle");
    }

    #[test]
    fn classify_is_total_and_injective() {
        let names: std::collections::HashSet<_> =
            TransportKind::ALL.iter().map(|k| classify(*k)).collect();
        assert_eq!(names.len(), TransportKind::ALL.len());
    }

    #[test]
    fn ordinals_round_trip() {
        for kind in TransportKind::ALL {
            assert_eq!(TransportKind::try_from(kind.ordinal()), Ok(kind));
        }
    }

    #[test]
    fn rejects_unknown_selectors() {
        for raw in ["0", "4", "car", "", "-1", "01x", "256", "01", "+2", "003", " 1"] {
            assert!(raw.parse::<TransportKind>().is_err(), "{raw} accepted");
        }
        assert_eq!(TransportKind::try_from(9), Err(UnknownTransport("9".to_string())));
    }

    #[test]
    fn serializes_as_name() {
        let v = serde_json::to_value(TransportKind::Motorbike).unwrap();
        assert_eq!(v, "motorbike");
    }
}
