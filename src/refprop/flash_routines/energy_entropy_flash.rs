use super::FlashBuffers;
use crate::{
    backend::BackendResult,
    flash_routines::FlashOutput,
    refprop::{bindings, utils::acquire_lock},
};

/// Flash at enthalpy [J/mol] and entropy [J/mol-K] using `HSFLSHdll`.
pub(crate) fn hs_flash(h: f64, s: f64, z: f64) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.h = h;
    b.s = s;

    unsafe {
        bindings::HSFLSHdll(
            &mut b.h,
            &mut b.s,
            b.z.as_mut_ptr(),
            &mut b.T,
            &mut b.P,
            &mut b.D,
            &mut b.Dl,
            &mut b.Dv,
            b.x.as_mut_ptr(),
            b.y.as_mut_ptr(),
            &mut b.q,
            &mut b.e,
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

/// Flash at internal energy [J/mol] and entropy [J/mol-K] using `ESFLSHdll`.
pub(crate) fn es_flash(e: f64, s: f64, z: f64) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.e = e;
    b.s = s;

    unsafe {
        bindings::ESFLSHdll(
            &mut b.e,
            &mut b.s,
            b.z.as_mut_ptr(),
            &mut b.T,
            &mut b.P,
            &mut b.D,
            &mut b.Dl,
            &mut b.Dv,
            b.x.as_mut_ptr(),
            b.y.as_mut_ptr(),
            &mut b.q,
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
