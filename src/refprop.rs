//! [`PropertyBackend`] over the NIST REFPROP shared library.
//!
//! REFPROP keeps the loaded fluid and its scratch buffers in global state, so
//! every call below takes a process-wide lock first, and the compositions
//! passed in are padded to REFPROP's fixed 20-component arrays.
#![allow(clippy::too_many_arguments)]

pub(crate) mod bindings;
mod flash_routines;
mod setup;
mod transport;
pub(crate) mod utils;

use crate::{
    backend::{
        BackendResult, HeatCapacities, ProcessClaim, PropertyBackend, SetupRequest,
        TransportOutput,
    },
    flash_routines::FlashOutput,
};

/// Handle to the linked REFPROP library.
///
/// REFPROP keeps one loaded fluid for the whole process, so at most one handle
/// exists at a time. Dropping it frees the slot for a new one.
#[derive(Debug)]
pub struct RefpropBackend {
    _claim: ProcessClaim,
}

impl RefpropBackend {
    /// Claims the process's REFPROP instance.
    ///
    /// # Errors
    ///
    /// - Returns a `BackendError` if another `RefpropBackend` is still alive.
    pub fn new() -> BackendResult<Self> {
        Ok(Self {
            _claim: ProcessClaim::acquire(&utils::REFPROP_CLAIMED, "REFPROP")?,
        })
    }
}

impl PropertyBackend for RefpropBackend {
    fn setup(&mut self, request: &SetupRequest) -> BackendResult<()> {
        setup::setup(request)
    }

    fn molar_mass(&mut self, z: f64) -> BackendResult<f64> {
        transport::molar_mass(z)
    }

    fn transport(&mut self, T: f64, D: f64, z: f64) -> BackendResult<TransportOutput> {
        transport::transport_properties(T, D, z)
    }

    fn surface_tension(&mut self, T: f64, Dl: f64, Dv: f64, z: f64) -> BackendResult<f64> {
        transport::surface_tension(T, Dl, Dv, z)
    }

    fn heat_capacities(&mut self, T: f64, D: f64, z: f64) -> BackendResult<HeatCapacities> {
        transport::heat_capacities(T, D, z)
    }

    fn tp_flash(&mut self, T: f64, P: f64, z: f64) -> BackendResult<FlashOutput> {
        flash_routines::tp_flash(T, P, z)
    }

    fn td_flash(&mut self, T: f64, D: f64, z: f64) -> BackendResult<FlashOutput> {
        flash_routines::td_flash(T, D, z)
    }

    fn th_flash(&mut self, T: f64, h: f64, z: f64, kr: i32) -> BackendResult<FlashOutput> {
        flash_routines::th_flash(T, h, z, kr)
    }

    fn ts_flash(&mut self, T: f64, s: f64, z: f64, kr: i32) -> BackendResult<FlashOutput> {
        flash_routines::ts_flash(T, s, z, kr)
    }

    fn te_flash(&mut self, T: f64, e: f64, z: f64, kr: i32) -> BackendResult<FlashOutput> {
        flash_routines::te_flash(T, e, z, kr)
    }

    fn tq_flash(&mut self, T: f64, q: f64, z: f64, kq: i32) -> BackendResult<FlashOutput> {
        flash_routines::tq_flash(T, q, z, kq)
    }

    fn pd_flash(&mut self, P: f64, D: f64, z: f64) -> BackendResult<FlashOutput> {
        flash_routines::pd_flash(P, D, z)
    }

    fn ph_flash(&mut self, P: f64, h: f64, z: f64) -> BackendResult<FlashOutput> {
        flash_routines::ph_flash(P, h, z)
    }

    fn ps_flash(&mut self, P: f64, s: f64, z: f64) -> BackendResult<FlashOutput> {
        flash_routines::ps_flash(P, s, z)
    }

    fn pe_flash(&mut self, P: f64, e: f64, z: f64) -> BackendResult<FlashOutput> {
        flash_routines::pe_flash(P, e, z)
    }

    fn pq_flash(&mut self, P: f64, q: f64, z: f64, kq: i32) -> BackendResult<FlashOutput> {
        flash_routines::pq_flash(P, q, z, kq)
    }

    fn dh_flash(&mut self, D: f64, h: f64, z: f64) -> BackendResult<FlashOutput> {
        flash_routines::dh_flash(D, h, z)
    }

    fn ds_flash(&mut self, D: f64, s: f64, z: f64) -> BackendResult<FlashOutput> {
        flash_routines::ds_flash(D, s, z)
    }

    fn de_flash(&mut self, D: f64, e: f64, z: f64) -> BackendResult<FlashOutput> {
        flash_routines::de_flash(D, e, z)
    }

    fn hs_flash(&mut self, h: f64, s: f64, z: f64) -> BackendResult<FlashOutput> {
        flash_routines::hs_flash(h, s, z)
    }

    fn es_flash(&mut self, e: f64, s: f64, z: f64) -> BackendResult<FlashOutput> {
        flash_routines::es_flash(e, s, z)
    }
}
