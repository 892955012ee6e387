//! Flash routines with temperature as the first input.
//!
//! # References
//!
//! - [REFPROP Documentation - Flash routines](https://pages.nist.gov/RefProp/documentation.html)

use super::FlashBuffers;
use crate::{
    backend::BackendResult,
    flash_routines::FlashOutput,
    refprop::{bindings, utils::acquire_lock},
};

/// Flash at temperature [K] and pressure [kPa] using `TPFLSHdll`.
pub(crate) fn tp_flash(T: f64, P: f64, z: f64) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.T = T;
    b.P = P;

    unsafe {
        bindings::TPFLSHdll(
            &mut b.T,
            &mut b.P,
            b.z.as_mut_ptr(),
            &mut b.D,
            &mut b.Dl,
            &mut b.Dv,
            b.x.as_mut_ptr(),
            b.y.as_mut_ptr(),
            &mut b.q,
            &mut b.e,
            &mut b.h,
            &mut b.s,
            &mut b.Cv,
            &mut b.Cp,
            &mut b.w,
            &mut b.ierr,
            b.herr.as_mut_ptr(),
            FlashBuffers::herr_length(),
        );
    }

    b.finish(&lock)
}

/// Flash at temperature [K] and density [mol/L] using `TDFLSHdll`.
pub(crate) fn td_flash(T: f64, D: f64, z: f64) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.T = T;
    b.D = D;

    unsafe {
        bindings::TDFLSHdll(
            &mut b.T,
            &mut b.D,
            b.z.as_mut_ptr(),
            &mut b.P,
            &mut b.Dl,
            &mut b.Dv,
            b.x.as_mut_ptr(),
            b.y.as_mut_ptr(),
            &mut b.q,
            &mut b.e,
            &mut b.h,
            &mut b.s,
            &mut b.Cv,
            &mut b.Cp,
            &mut b.w,
            &mut b.ierr,
            b.herr.as_mut_ptr(),
            FlashBuffers::herr_length(),
        );
    }

    b.finish(&lock)
}

/// Performs a flash calculation given temperature and enthalpy using the `THFLSHdll` function.
///
/// Handles both single-phase and two-phase states.
///
/// **Note:** If multiple solutions exist, set `kr = 2` to obtain the higher-density root.
///
/// # Parameters
///
/// - `T`: Temperature [K]
/// - `h`: Enthalpy [J/mol]
/// - `z`: Mole fraction of the pure fluid
/// - `kr`: Root flag, `1` for the lower-density root, `2` for the higher.
///
/// # Errors
///
/// - Returns a `BackendError` with REFPROP's code and message if REFPROP reports an error.
/// - Returns a `BackendError` if the REFPROP mutex is poisoned.
///
/// # References
///
/// - [REFPROP Documentation - THFLSHdll](https://pages.nist.gov/RefProp/documentation.html)
pub(crate) fn th_flash(T: f64, h: f64, z: f64, kr: i32) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.T = T;
    b.h = h;
    let mut kr = kr;

    unsafe {
        bindings::THFLSHdll(
            &mut b.T,
            &mut b.h,
            b.z.as_mut_ptr(),
            &mut kr,
            &mut b.P,
            &mut b.D,
            &mut b.Dl,
            &mut b.Dv,
            b.x.as_mut_ptr(),
            b.y.as_mut_ptr(),
            &mut b.q,
            &mut b.e,
            &mut b.s,
            &mut b.Cv,
            &mut b.Cp,
            &mut b.w,
            &mut b.ierr,
            b.herr.as_mut_ptr(),
            FlashBuffers::herr_length(),
        );
    }

    b.finish(&lock)
}

/// Flash at temperature [K] and entropy [J/mol-K] using `TSFLSHdll`.
pub(crate) fn ts_flash(T: f64, s: f64, z: f64, kr: i32) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.T = T;
    b.s = s;
    let mut kr = kr;

    unsafe {
        bindings::TSFLSHdll(
            &mut b.T,
            &mut b.s,
            b.z.as_mut_ptr(),
            &mut kr,
            &mut b.P,
            &mut b.D,
            &mut b.Dl,
            &mut b.Dv,
            b.x.as_mut_ptr(),
            b.y.as_mut_ptr(),
            &mut b.q,
            &mut b.e,
            &mut b.h,
            &mut b.Cv,
            &mut b.Cp,
            &mut b.w,
            &mut b.ierr,
            b.herr.as_mut_ptr(),
            FlashBuffers::herr_length(),
        );
    }

    b.finish(&lock)
}

/// Flash at temperature [K] and internal energy [J/mol] using `TEFLSHdll`.
pub(crate) fn te_flash(T: f64, e: f64, z: f64, kr: i32) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.T = T;
    b.e = e;
    let mut kr = kr;

    unsafe {
        bindings::TEFLSHdll(
            &mut b.T,
            &mut b.e,
            b.z.as_mut_ptr(),
            &mut kr,
            &mut b.P,
            &mut b.D,
            &mut b.Dl,
            &mut b.Dv,
            b.x.as_mut_ptr(),
            b.y.as_mut_ptr(),
            &mut b.q,
            &mut b.h,
            &mut b.s,
            &mut b.Cv,
            &mut b.Cp,
            &mut b.w,
            &mut b.ierr,
            b.herr.as_mut_ptr(),
            FlashBuffers::herr_length(),
        );
    }

    b.finish(&lock)
}

/// Saturation flash given temperature and vapor quality using the `TQFLSHdll` function.
///
/// Heat capacities are undefined inside the two-phase dome; REFPROP returns its
/// sentinel values and the output carries `None`.
///
/// # Parameters
///
/// - `T`: Temperature [K]
/// - `q`: Vapor quality, 0 for saturated liquid and 1 for saturated vapor
/// - `z`: Mole fraction of the pure fluid
/// - `kq`: Quality basis, `1` molar, `2` mass
///
/// # Errors
///
/// - Returns a `BackendError` with REFPROP's code and message if REFPROP reports an error,
///   e.g. a temperature above the critical point.
/// - Returns a `BackendError` if the REFPROP mutex is poisoned.
///
/// # References
///
/// - [REFPROP Documentation - TQFLSHdll](https://pages.nist.gov/RefProp/documentation.html)
pub(crate) fn tq_flash(T: f64, q: f64, z: f64, kq: i32) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.T = T;
    b.q = q;
    let mut kq = kq;

    unsafe {
        bindings::TQFLSHdll(
            &mut b.T,
            &mut b.q,
            b.z.as_mut_ptr(),
            &mut kq,
            &mut b.P,
            &mut b.D,
            &mut b.Dl,
            &mut b.Dv,
            b.x.as_mut_ptr(),
            b.y.as_mut_ptr(),
            &mut b.e,
            &mut b.h,
            &mut b.s,
            &mut b.Cv,
            &mut b.Cp,
            &mut b.w,
            &mut b.ierr,
            b.herr.as_mut_ptr(),
            FlashBuffers::herr_length(),
        );
    }

    b.finish(&lock)
}
