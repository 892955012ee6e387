//! Conversion between the caller's mass-specific units and the backend's molar units.
//!
//! Backend units: temperature K, pressure kPa, density mol/L, energies J/mol,
//! entropy and heat capacities J/(mol-K), speed of sound m/s, viscosity µPa-s,
//! thermal conductivity W/(m-K), surface tension N/m. Molar mass is g/mol.

use crate::state::ThermodynamicState;

/// Pa per kPa.
pub const PA_PER_KPA: f64 = 1e3;

/// Pa-s per µPa-s.
pub const PA_S_PER_MICRO_PA_S: f64 = 1e-6;

/// kg/mol per g/mol; turns J/kg into J/mol when multiplied by the molar mass.
pub const KG_PER_G: f64 = 1e-3;

/// Switches every unit-bearing field to molar units.
///
/// T, Q, X, Y, Z and W carry no mass dimension and are left alone.
pub fn to_molar(state: &mut ThermodynamicState) {
    let energy = state.molar_mass * KG_PER_G;

    state.E *= energy;
    state.H *= energy;
    state.S *= energy;
    state.CV = state.CV.map(|cv| cv * energy);
    state.CP = state.CP.map(|cp| cp * energy);

    // kg/m³ to mol/L; the factors of 1000 in g/kg and L/m³ cancel.
    state.D /= state.molar_mass;
    state.DL /= state.molar_mass;
    state.DV /= state.molar_mass;

    state.P /= PA_PER_KPA;
}

/// Inverse of [`to_molar`] for the same molar mass.
pub fn to_specific(state: &mut ThermodynamicState) {
    let energy = state.molar_mass * KG_PER_G;

    state.E /= energy;
    state.H /= energy;
    state.S /= energy;
    state.CV = state.CV.map(|cv| cv / energy);
    state.CP = state.CP.map(|cp| cp / energy);

    state.D *= state.molar_mass;
    state.DL *= state.molar_mass;
    state.DV *= state.molar_mass;

    state.P *= PA_PER_KPA;
}

/// Molar heat capacity [J/mol-K] to mass-specific [J/kg-K].
pub fn heat_capacity_to_specific(molar: f64, molar_mass: f64) -> f64 {
    molar / (molar_mass * KG_PER_G)
}
