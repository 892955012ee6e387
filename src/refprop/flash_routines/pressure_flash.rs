use super::FlashBuffers;
use crate::{
    backend::BackendResult,
    flash_routines::FlashOutput,
    refprop::{bindings, utils::acquire_lock},
};

/// Flash at pressure [kPa] and density [mol/L] using `PDFLSHdll`.
pub(crate) fn pd_flash(P: f64, D: f64, z: f64) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.P = P;
    b.D = D;

    unsafe {
        bindings::PDFLSHdll(
            &mut b.P,
            &mut b.D,
            b.z.as_mut_ptr(),
            &mut b.T,
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

/// Flash at pressure [kPa] and enthalpy [J/mol] using `PHFLSHdll`.
///
/// # Errors
///
/// - Returns a `BackendError` with REFPROP's code and message if REFPROP reports an error.
pub(crate) fn ph_flash(P: f64, h: f64, z: f64) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.P = P;
    b.h = h;

    unsafe {
        bindings::PHFLSHdll(
            &mut b.P,
            &mut b.h,
            b.z.as_mut_ptr(),
            &mut b.T,
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

/// Flash at pressure [kPa] and entropy [J/mol-K] using `PSFLSHdll`.
pub(crate) fn ps_flash(P: f64, s: f64, z: f64) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.P = P;
    b.s = s;

    unsafe {
        bindings::PSFLSHdll(
            &mut b.P,
            &mut b.s,
            b.z.as_mut_ptr(),
            &mut b.T,
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

/// Flash at pressure [kPa] and internal energy [J/mol] using `PEFLSHdll`.
pub(crate) fn pe_flash(P: f64, e: f64, z: f64) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.P = P;
    b.e = e;

    unsafe {
        bindings::PEFLSHdll(
            &mut b.P,
            &mut b.e,
            b.z.as_mut_ptr(),
            &mut b.T,
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

/// Saturation flash given pressure and vapor quality using the `PQFLSHdll` function.
///
/// # Parameters
///
/// - `P`: Pressure [kPa]
/// - `q`: Vapor quality, 0 for saturated liquid and 1 for saturated vapor
/// - `z`: Mole fraction of the pure fluid
/// - `kq`: Quality basis, `1` molar, `2` mass
///
/// # Errors
///
/// - Returns a `BackendError` with REFPROP's code and message if REFPROP reports an error.
/// - Returns a `BackendError` if the REFPROP mutex is poisoned.
///
/// # References
///
/// - [REFPROP Documentation - PQFLSHdll](https://pages.nist.gov/RefProp/documentation.html)
pub(crate) fn pq_flash(P: f64, q: f64, z: f64, kq: i32) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.P = P;
    b.q = q;
    let mut kq = kq;

    unsafe {
        bindings::PQFLSHdll(
            &mut b.P,
            &mut b.q,
            b.z.as_mut_ptr(),
            &mut kq,
            &mut b.T,
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
