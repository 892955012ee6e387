use serde::Serialize;

use crate::{flash_routines::FlashOutput, property::PropertyId};

/// A single equilibrium point.
///
/// Fields hold caller units (Pa, kg/m³, J/kg, J/kg-K) except while a query is in
/// flight, when [`crate::units::to_molar`] has switched them to the backend's
/// molar units (kPa, mol/L, J/mol, J/mol-K).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThermodynamicState {
    /// Temperature [K]
    pub T: f64,
    /// Pressure [Pa]
    pub P: f64,
    /// Vapor quality on a molar basis; outside [0, 1] for single-phase states
    pub Q: f64,
    /// Bulk density [kg/m³]
    pub D: f64,
    /// Density of the liquid phase [kg/m³]
    pub DL: f64,
    /// Density of the vapor phase [kg/m³]
    pub DV: f64,
    /// Liquid-phase mole fraction
    pub X: f64,
    /// Vapor-phase mole fraction
    pub Y: f64,
    /// Bulk mole fraction; 1 for a pure fluid
    pub Z: f64,
    /// Internal energy [J/kg]
    pub E: f64,
    /// Enthalpy [J/kg]
    pub H: f64,
    /// Entropy [J/kg-K]
    pub S: f64,
    /// Isochoric heat capacity [J/kg-K]; undefined for two-phase states
    pub CV: Option<f64>,
    /// Isobaric heat capacity [J/kg-K]; undefined for two-phase states
    pub CP: Option<f64>,
    /// Speed of sound [m/s]
    pub W: f64,
    /// Molar mass [g/mol]
    #[serde(rename = "molarMass")]
    pub molar_mass: f64,
}

impl ThermodynamicState {
    /// A fresh pure-fluid state with nothing solved yet.
    pub fn seed(molar_mass: f64) -> Self {
        Self {
            T: 0.0,
            P: 0.0,
            Q: 0.0,
            D: 0.0,
            DL: 0.0,
            DV: 0.0,
            X: 0.0,
            Y: 0.0,
            Z: 1.0,
            E: 0.0,
            H: 0.0,
            S: 0.0,
            CV: None,
            CP: None,
            W: 0.0,
            molar_mass,
        }
    }

    pub fn get(&self, id: PropertyId) -> f64 {
        match id {
            PropertyId::T => self.T,
            PropertyId::P => self.P,
            PropertyId::D => self.D,
            PropertyId::H => self.H,
            PropertyId::S => self.S,
            PropertyId::E => self.E,
            PropertyId::Q => self.Q,
        }
    }

    pub fn set(&mut self, id: PropertyId, value: f64) {
        let field = match id {
            PropertyId::T => &mut self.T,
            PropertyId::P => &mut self.P,
            PropertyId::D => &mut self.D,
            PropertyId::H => &mut self.H,
            PropertyId::S => &mut self.S,
            PropertyId::E => &mut self.E,
            PropertyId::Q => &mut self.Q,
        };
        *field = value;
    }

    /// Copies a flash result into the state, leaving the two input properties alone.
    pub(crate) fn absorb(&mut self, out: &FlashOutput, inputs: [PropertyId; 2]) {
        for id in PropertyId::ALL {
            if !inputs.contains(&id) {
                self.set(id, out.get(id));
            }
        }
        self.DL = out.Dl;
        self.DV = out.Dv;
        self.X = out.x;
        self.Y = out.y;
        self.CV = out.Cv;
        self.CP = out.Cp;
        self.W = out.w;
    }

    /// Single-phase only when the quality is above 1 or below 0. The boundaries
    /// and an unset (NaN) quality count as two-phase.
    pub fn is_two_phase(&self) -> bool {
        !(self.Q > 1.0 || self.Q < 0.0)
    }
}

/// Transport properties of a single-phase state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SinglePhaseTransport {
    /// Dynamic viscosity [Pa-s]
    pub mu: f64,
    /// Thermal conductivity [W/m-K]
    pub k: f64,
}

/// Per-phase transport properties and heat capacities of a saturated mixture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TwoPhaseTransport {
    /// Liquid viscosity [Pa-s]
    pub muL: f64,
    /// Vapor viscosity [Pa-s]
    pub muV: f64,
    /// Liquid thermal conductivity [W/m-K]
    pub kL: f64,
    /// Vapor thermal conductivity [W/m-K]
    pub kV: f64,
    /// Liquid isobaric heat capacity [J/kg-K]
    pub CPL: f64,
    /// Liquid isochoric heat capacity [J/kg-K]
    pub CVL: f64,
    /// Vapor isobaric heat capacity [J/kg-K]
    pub CPV: f64,
    /// Vapor isochoric heat capacity [J/kg-K]
    pub CVV: f64,
    /// Surface tension [N/m]
    pub sigma: f64,
}

/// Transport block attached to a resolved state, chosen by its quality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TransportProperties {
    SinglePhase(SinglePhaseTransport),
    TwoPhase(TwoPhaseTransport),
}

impl TransportProperties {
    pub fn single_phase(&self) -> Option<&SinglePhaseTransport> {
        match self {
            TransportProperties::SinglePhase(t) => Some(t),
            TransportProperties::TwoPhase(_) => None,
        }
    }

    pub fn two_phase(&self) -> Option<&TwoPhaseTransport> {
        match self {
            TransportProperties::TwoPhase(t) => Some(t),
            TransportProperties::SinglePhase(_) => None,
        }
    }
}

/// The result of a state query.
///
/// Serializes to one flat record: the state's keys followed by either
/// `mu, k` or `muL, muV, kL, kV, CPL, CVL, CPV, CVV, sigma`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatePoint {
    #[serde(flatten)]
    pub state: ThermodynamicState,
    #[serde(flatten)]
    pub transport: TransportProperties,
}

impl StatePoint {
    /// Flattens the state point into a generic JSON object.
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_a_pure_fluid() {
        let state = ThermodynamicState::seed(18.015268);
        assert_eq!((state.X, state.Y, state.Z), (0.0, 0.0, 1.0));
        assert_eq!(state.molar_mass, 18.015268);
        assert!(state.CV.is_none() && state.CP.is_none());
    }

    #[test]
    fn get_and_set_cover_the_alphabet() {
        let mut state = ThermodynamicState::seed(1.0);
        for (i, id) in PropertyId::ALL.into_iter().enumerate() {
            state.set(id, i as f64 + 0.5);
        }
        for (i, id) in PropertyId::ALL.into_iter().enumerate() {
            assert_eq!(state.get(id), i as f64 + 0.5);
        }
    }

    #[test]
    fn absorb_keeps_inputs() {
        let mut state = ThermodynamicState::seed(1.0);
        state.T = 300.0;
        state.H = 1234.0;

        let out = FlashOutput {
            T: -1.0,
            P: 101.325,
            D: 55.0,
            Dl: 55.0,
            Dv: 0.0,
            x: 1.0,
            y: 0.0,
            q: -998.0,
            e: 10.0,
            h: -1.0,
            s: 20.0,
            Cv: Some(74.0),
            Cp: Some(75.0),
            w: 1500.0,
        };
        state.absorb(&out, [PropertyId::T, PropertyId::H]);

        assert_eq!(state.T, 300.0);
        assert_eq!(state.H, 1234.0);
        assert_eq!(state.P, 101.325);
        assert_eq!(state.Q, -998.0);
        assert_eq!(state.CP, Some(75.0));
        assert_eq!(state.W, 1500.0);
    }

    #[test]
    fn phase_boundaries_are_inclusive() {
        let mut state = ThermodynamicState::seed(1.0);
        for (q, two_phase) in [(0.0, true), (1.0, true), (0.5, true), (-0.0001, false), (1.0001, false)] {
            state.Q = q;
            assert_eq!(state.is_two_phase(), two_phase, "Q = {q}");
        }
    }

    #[test]
    fn nan_quality_is_not_single_phase() {
        let mut state = ThermodynamicState::seed(1.0);
        state.Q = f64::NAN;
        assert!(state.is_two_phase());
    }
}
