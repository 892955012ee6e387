use std::{fmt, str::FromStr};

use crate::StateError;

/// One of the seven properties that can fix a state, in the backend's `TPDHSEQ` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyId {
    /// Temperature [K]
    T,
    /// Pressure [Pa]
    P,
    /// Density [kg/m³]
    D,
    /// Enthalpy [J/kg]
    H,
    /// Entropy [J/kg-K]
    S,
    /// Internal energy [J/kg]
    E,
    /// Quality, molar basis
    Q,
}

impl PropertyId {
    /// The full alphabet, indexed by [`PropertyId::index`].
    pub const ALL: [PropertyId; 7] = [
        PropertyId::T,
        PropertyId::P,
        PropertyId::D,
        PropertyId::H,
        PropertyId::S,
        PropertyId::E,
        PropertyId::Q,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn symbol(self) -> char {
        match self {
            PropertyId::T => 'T',
            PropertyId::P => 'P',
            PropertyId::D => 'D',
            PropertyId::H => 'H',
            PropertyId::S => 'S',
            PropertyId::E => 'E',
            PropertyId::Q => 'Q',
        }
    }

    /// Looks up an identifier by its uppercase letter.
    pub fn from_symbol(symbol: char) -> Option<PropertyId> {
        PropertyId::ALL.into_iter().find(|id| id.symbol() == symbol)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for PropertyId {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => PropertyId::from_symbol(c).ok_or_else(|| {
                StateError::InvalidInputShape(format!(
                    "'{s}' is not one of T, P, D, H, S, E, Q"
                ))
            }),
            _ => Err(StateError::InvalidInputShape(format!(
                "'{s}' is not a single-letter property key"
            ))),
        }
    }
}
