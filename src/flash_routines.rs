use tracing::debug;

use crate::{
    backend::{BackendResult, PropertyBackend},
    property::PropertyId,
    state::ThermodynamicState,
};

/// Lower-density root for the temperature-energy routines.
pub(crate) const KR_DEFAULT: i32 = 1;

/// Quality on a molar basis (moles vapor/total moles).
pub(crate) const KQ_MOLAR: i32 = 1;

/// Represents the output properties from the flash routines.
///
/// Routines echo their two inputs back in the matching fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FlashOutput {
    /// Temperature [K]
    pub T: f64,
    /// Pressure [kPa]
    pub P: f64,
    /// Density [mol/L]
    pub D: f64,
    /// Molar density of the liquid phase [mol/L]
    pub Dl: f64,
    /// Molar density of the vapor phase [mol/L]
    pub Dv: f64,
    /// Composition of the liquid phase (mole fraction)
    pub x: f64,
    /// Composition of the vapor phase (mole fraction)
    pub y: f64,
    /// Vapor quality on a MOLAR basis (moles of vapor/total moles)
    pub q: f64,
    /// Overall internal energy [J/mol]
    pub e: f64,
    /// Overall enthalpy [J/mol]
    pub h: f64,
    /// Overall entropy [J/mol-K]
    pub s: f64,
    /// Isochoric (constant D) heat capacity [J/mol-K]
    pub Cv: Option<f64>, // Not defined for 2-phase states
    /// Isobaric (constant P) heat capacity [J/mol-K]
    pub Cp: Option<f64>, // Not defined for 2-phase states
    /// Speed of sound [m/s]
    pub w: f64,
}

impl FlashOutput {
    pub fn get(&self, id: PropertyId) -> f64 {
        match id {
            PropertyId::T => self.T,
            PropertyId::P => self.P,
            PropertyId::D => self.D,
            PropertyId::H => self.h,
            PropertyId::S => self.s,
            PropertyId::E => self.e,
            PropertyId::Q => self.q,
        }
    }
}

/// A backend flash routine, named after its inputs in the backend's argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlashRoutine {
    TP,
    TD,
    TH,
    TS,
    TE,
    TQ,
    PD,
    PH,
    PS,
    PE,
    PQ,
    DH,
    DS,
    DE,
    HS,
    /// Serves the (S, E) pair. The backend routine takes energy first, so the
    /// name reads against the `TPDHSEQ` order; kept as the backend spells it.
    ES,
}

impl FlashRoutine {
    /// Every routine the backend provides.
    pub const ALL: [FlashRoutine; 16] = [
        FlashRoutine::TP,
        FlashRoutine::TD,
        FlashRoutine::TH,
        FlashRoutine::TS,
        FlashRoutine::TE,
        FlashRoutine::TQ,
        FlashRoutine::PD,
        FlashRoutine::PH,
        FlashRoutine::PS,
        FlashRoutine::PE,
        FlashRoutine::PQ,
        FlashRoutine::DH,
        FlashRoutine::DS,
        FlashRoutine::DE,
        FlashRoutine::HS,
        FlashRoutine::ES,
    ];

    /// The two input properties, in the order the backend takes them.
    pub const fn inputs(self) -> [PropertyId; 2] {
        use PropertyId::*;
        match self {
            FlashRoutine::TP => [T, P],
            FlashRoutine::TD => [T, D],
            FlashRoutine::TH => [T, H],
            FlashRoutine::TS => [T, S],
            FlashRoutine::TE => [T, E],
            FlashRoutine::TQ => [T, Q],
            FlashRoutine::PD => [P, D],
            FlashRoutine::PH => [P, H],
            FlashRoutine::PS => [P, S],
            FlashRoutine::PE => [P, E],
            FlashRoutine::PQ => [P, Q],
            FlashRoutine::DH => [D, H],
            FlashRoutine::DS => [D, S],
            FlashRoutine::DE => [D, E],
            FlashRoutine::HS => [H, S],
            FlashRoutine::ES => [E, S],
        }
    }

    /// Runs the routine on a molar-unit state and merges its outputs.
    ///
    /// The two input fields are never overwritten.
    pub fn solve<B>(self, backend: &mut B, state: &mut ThermodynamicState) -> BackendResult<()>
    where
        B: PropertyBackend + ?Sized,
    {
        let [a, b] = self.inputs();
        let (va, vb) = (state.get(a), state.get(b));
        let z = state.Z;
        debug!(routine = ?self, a = va, b = vb, "flash");

        let out = match self {
            FlashRoutine::TP => backend.tp_flash(va, vb, z),
            FlashRoutine::TD => backend.td_flash(va, vb, z),
            FlashRoutine::TH => backend.th_flash(va, vb, z, KR_DEFAULT),
            FlashRoutine::TS => backend.ts_flash(va, vb, z, KR_DEFAULT),
            FlashRoutine::TE => backend.te_flash(va, vb, z, KR_DEFAULT),
            FlashRoutine::TQ => backend.tq_flash(va, vb, z, KQ_MOLAR),
            FlashRoutine::PD => backend.pd_flash(va, vb, z),
            FlashRoutine::PH => backend.ph_flash(va, vb, z),
            FlashRoutine::PS => backend.ps_flash(va, vb, z),
            FlashRoutine::PE => backend.pe_flash(va, vb, z),
            FlashRoutine::PQ => backend.pq_flash(va, vb, z, KQ_MOLAR),
            FlashRoutine::DH => backend.dh_flash(va, vb, z),
            FlashRoutine::DS => backend.ds_flash(va, vb, z),
            FlashRoutine::DE => backend.de_flash(va, vb, z),
            FlashRoutine::HS => backend.hs_flash(va, vb, z),
            FlashRoutine::ES => backend.es_flash(va, vb, z),
        }?;

        state.absorb(&out, [a, b]);
        Ok(())
    }
}
