mod density_flash;
mod energy_entropy_flash;
mod pressure_flash;
mod temperature_flash;

use std::sync::MutexGuard;

use libc::c_char;

pub(crate) use density_flash::{de_flash, dh_flash, ds_flash};
pub(crate) use energy_entropy_flash::{es_flash, hs_flash};
pub(crate) use pressure_flash::{pd_flash, pe_flash, ph_flash, pq_flash, ps_flash};
pub(crate) use temperature_flash::{td_flash, te_flash, th_flash, tp_flash, tq_flash, ts_flash};

use super::utils::{
    check_refprop_error, composition, defined, message_buffer, CP_UNDEFINED, CV_UNDEFINED,
    HERR_LENGTH, NC_MAX,
};
use crate::{backend::BackendResult, flash_routines::FlashOutput};

/// Argument slots shared by every `*FLSHdll` routine.
///
/// Each routine writes into the subset its signature names; the two inputs
/// are preloaded so they come back out unchanged.
pub(super) struct FlashBuffers {
    pub T: f64,
    pub P: f64,
    pub D: f64,
    pub Dl: f64,
    pub Dv: f64,
    pub z: [f64; NC_MAX],
    pub x: [f64; NC_MAX],
    pub y: [f64; NC_MAX],
    pub q: f64,
    pub e: f64,
    pub h: f64,
    pub s: f64,
    pub Cv: f64,
    pub Cp: f64,
    pub w: f64,
    pub ierr: i32,
    pub herr: Vec<c_char>,
}

impl FlashBuffers {
    pub fn new(z: f64) -> Self {
        Self {
            T: 0.0,
            P: 0.0,
            D: 0.0,
            Dl: 0.0,
            Dv: 0.0,
            z: composition(z),
            x: [0.0; NC_MAX],
            y: [0.0; NC_MAX],
            q: 0.0,
            e: 0.0,
            h: 0.0,
            s: 0.0,
            Cv: CV_UNDEFINED,
            Cp: CP_UNDEFINED,
            w: 0.0,
            ierr: 0,
            herr: message_buffer(),
        }
    }

    pub fn herr_length() -> i32 {
        HERR_LENGTH as i32
    }

    /// Checks the error code, then packages the filled buffers.
    pub fn finish(mut self, guard: &MutexGuard<()>) -> BackendResult<FlashOutput> {
        check_refprop_error(guard, self.ierr, &mut self.herr)?;

        Ok(FlashOutput {
            T: self.T,
            P: self.P,
            D: self.D,
            Dl: self.Dl,
            Dv: self.Dv,
            x: self.x[0],
            y: self.y[0],
            q: self.q,
            e: self.e,
            h: self.h,
            s: self.s,
            Cv: defined(self.Cv),
            Cp: defined(self.Cp),
            w: self.w,
        })
    }
}
