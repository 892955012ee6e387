//! The call contract of the property backend.
//!
//! All arguments and results are in the backend's molar units (see
//! [`crate::units`]). Compositions are pure-fluid mole fractions, so `z` is a
//! scalar rather than the backend's fixed-size array.

use std::{
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
};

use thiserror::Error;

use crate::flash_routines::FlashOutput;

/// A nonzero error code reported by the backend, with its message text.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("backend error {code}: {message}")]
pub struct BackendError {
    pub code: i32,
    pub message: String,
}

impl BackendError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

pub type BackendResult<T> = Result<T, BackendError>;

/// Error code for failures raised on our side of the backend boundary.
#[cfg_attr(not(feature = "refprop"), allow(dead_code))]
pub(crate) const LOCAL_ERROR_CODE: i32 = -1;

/// Exclusive ownership of a process-wide backend.
///
/// A library that keeps its loaded fluid in global state can only back one
/// handle at a time; a second handle would switch fluids under the first.
/// The claim is released on drop.
#[cfg_attr(not(feature = "refprop"), allow(dead_code))]
#[derive(Debug)]
pub(crate) struct ProcessClaim {
    flag: &'static AtomicBool,
}

#[cfg_attr(not(feature = "refprop"), allow(dead_code))]
impl ProcessClaim {
    /// # Errors
    ///
    /// - Returns a `BackendError` with `LOCAL_ERROR_CODE` if `flag` is already claimed.
    pub(crate) fn acquire(flag: &'static AtomicBool, backend: &str) -> BackendResult<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                BackendError::new(
                    LOCAL_ERROR_CODE,
                    format!("{backend} is already in use by another handle in this process"),
                )
            })?;
        Ok(Self { flag })
    }
}

impl Drop for ProcessClaim {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Files and reference state handed to the backend's setup routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupRequest {
    /// Fluid name as requested by the caller.
    pub fluid: String,
    /// Path of the `.FLD` fluid definition.
    pub fluid_file: PathBuf,
    /// Path of the binary interaction parameter file.
    pub mixture_file: PathBuf,
    /// Reference state code, e.g. `DEF`.
    pub reference_state: String,
}

/// Transport coefficients at one (T, D) point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportOutput {
    /// Dynamic viscosity [uPa-s].
    pub eta: f64,
    /// Thermal conductivity [W/(m-K)].
    pub tcx: f64,
}

/// Heat capacities at one (T, D) point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatCapacities {
    /// Isochoric heat capacity [J/mol-K].
    pub cv: f64,
    /// Isobaric heat capacity [J/mol-K].
    pub cp: f64,
}

/// One method per flash routine plus the auxiliary routines a state query needs.
///
/// Implementations are stateful: [`PropertyBackend::setup`] selects the fluid
/// every later call computes for.
///
/// The `kr` flag of the temperature-energy routines selects the density root
/// (1 = lower, 2 = higher). The `kq` flag of the quality routines selects the
/// quality basis (1 = molar, 2 = mass).
pub trait PropertyBackend {
    /// Loads a fluid definition and reference state.
    fn setup(&mut self, request: &SetupRequest) -> BackendResult<()>;

    /// Molar mass [g/mol] of the given composition.
    fn molar_mass(&mut self, z: f64) -> BackendResult<f64>;

    fn transport(&mut self, T: f64, D: f64, z: f64) -> BackendResult<TransportOutput>;

    /// Surface tension [N/m] between saturated liquid and vapor.
    fn surface_tension(&mut self, T: f64, Dl: f64, Dv: f64, z: f64) -> BackendResult<f64>;

    fn heat_capacities(&mut self, T: f64, D: f64, z: f64) -> BackendResult<HeatCapacities>;

    fn tp_flash(&mut self, T: f64, P: f64, z: f64) -> BackendResult<FlashOutput>;
    fn td_flash(&mut self, T: f64, D: f64, z: f64) -> BackendResult<FlashOutput>;
    fn th_flash(&mut self, T: f64, h: f64, z: f64, kr: i32) -> BackendResult<FlashOutput>;
    fn ts_flash(&mut self, T: f64, s: f64, z: f64, kr: i32) -> BackendResult<FlashOutput>;
    fn te_flash(&mut self, T: f64, e: f64, z: f64, kr: i32) -> BackendResult<FlashOutput>;
    fn tq_flash(&mut self, T: f64, q: f64, z: f64, kq: i32) -> BackendResult<FlashOutput>;

    fn pd_flash(&mut self, P: f64, D: f64, z: f64) -> BackendResult<FlashOutput>;
    fn ph_flash(&mut self, P: f64, h: f64, z: f64) -> BackendResult<FlashOutput>;
    fn ps_flash(&mut self, P: f64, s: f64, z: f64) -> BackendResult<FlashOutput>;
    fn pe_flash(&mut self, P: f64, e: f64, z: f64) -> BackendResult<FlashOutput>;
    fn pq_flash(&mut self, P: f64, q: f64, z: f64, kq: i32) -> BackendResult<FlashOutput>;

    fn dh_flash(&mut self, D: f64, h: f64, z: f64) -> BackendResult<FlashOutput>;
    fn ds_flash(&mut self, D: f64, s: f64, z: f64) -> BackendResult<FlashOutput>;
    fn de_flash(&mut self, D: f64, e: f64, z: f64) -> BackendResult<FlashOutput>;

    fn hs_flash(&mut self, h: f64, s: f64, z: f64) -> BackendResult<FlashOutput>;
    /// Energy first, then entropy: the backend only ships an `ES` routine.
    fn es_flash(&mut self, e: f64, s: f64, z: f64) -> BackendResult<FlashOutput>;
}
