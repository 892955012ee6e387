//! One state query, start to finish.

use tracing::{debug, warn};

use crate::{
    backend::{BackendResult, PropertyBackend},
    dispatch::FlashDispatchTable,
    property::PropertyId,
    state::{
        SinglePhaseTransport, StatePoint, ThermodynamicState, TransportProperties,
        TwoPhaseTransport,
    },
    units::{self, PA_S_PER_MICRO_PA_S},
    StateError,
};

/// Resolves the full state fixed by two property values given in caller units.
///
/// The state is seeded for a pure fluid, converted to molar units, solved by
/// the routine registered for the pair, given its transport block, and
/// converted back. The first backend failure aborts the query.
///
/// # Errors
///
/// - Returns `StateError::UnsupportedCombination` if `a == b` or no routine is
///   registered for the pair.
/// - Returns `StateError::BackendComputationError` with the backend's message if
///   any backend call fails.
pub fn resolve_state<B>(
    backend: &mut B,
    table: &FlashDispatchTable,
    a: PropertyId,
    value_a: f64,
    b: PropertyId,
    value_b: f64,
) -> Result<StatePoint, StateError>
where
    B: PropertyBackend + ?Sized,
{
    if a == b {
        return Err(StateError::unsupported(a, b));
    }
    let routine = table
        .resolve(a, b)
        .ok_or_else(|| StateError::unsupported(a, b))?;

    let run = |backend: &mut B| -> BackendResult<StatePoint> {
        let mut state = ThermodynamicState::seed(0.0);
        state.molar_mass = backend.molar_mass(state.Z)?;
        state.set(a, value_a);
        state.set(b, value_b);

        units::to_molar(&mut state);
        routine.solve(backend, &mut state)?;
        let transport = compute_transport(backend, &state)?;
        units::to_specific(&mut state);

        Ok(StatePoint { state, transport })
    };

    run(backend).map_err(|err| {
        warn!(?routine, code = err.code, message = %err.message, "state query failed");
        StateError::from(err)
    })
}

/// Computes the transport block for a solved, molar-unit state.
///
/// Quality outside [0, 1] means a single phase, evaluated at the bulk density.
/// Otherwise each phase is evaluated at its own density and the surface
/// tension and per-phase heat capacities are added.
pub fn compute_transport<B>(
    backend: &mut B,
    state: &ThermodynamicState,
) -> BackendResult<TransportProperties>
where
    B: PropertyBackend + ?Sized,
{
    if !state.is_two_phase() {
        debug!(q = state.Q, "single-phase transport");
        let trn = backend.transport(state.T, state.D, state.Z)?;
        return Ok(TransportProperties::SinglePhase(SinglePhaseTransport {
            mu: trn.eta * PA_S_PER_MICRO_PA_S,
            k: trn.tcx,
        }));
    }

    debug!(q = state.Q, "two-phase transport");
    let liquid = backend.transport(state.T, state.DL, state.Z)?;
    let vapor = backend.transport(state.T, state.DV, state.Z)?;
    let sigma = backend.surface_tension(state.T, state.DL, state.DV, state.Z)?;
    let cl = backend.heat_capacities(state.T, state.DL, state.Z)?;
    let cv = backend.heat_capacities(state.T, state.DV, state.Z)?;

    let specific = |c: f64| units::heat_capacity_to_specific(c, state.molar_mass);

    Ok(TransportProperties::TwoPhase(TwoPhaseTransport {
        muL: liquid.eta * PA_S_PER_MICRO_PA_S,
        muV: vapor.eta * PA_S_PER_MICRO_PA_S,
        kL: liquid.tcx,
        kV: vapor.tcx,
        CPL: specific(cl.cp),
        CVL: specific(cl.cv),
        CPV: specific(cv.cp),
        CVV: specific(cv.cv),
        sigma,
    }))
}
