use super::FlashBuffers;
use crate::{
    backend::BackendResult,
    flash_routines::FlashOutput,
    refprop::{bindings, utils::acquire_lock},
};

/// Flash at density [mol/L] and enthalpy [J/mol] using `DHFLSHdll`.
pub(crate) fn dh_flash(D: f64, h: f64, z: f64) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.D = D;
    b.h = h;

    unsafe {
        bindings::DHFLSHdll(
            &mut b.D,
            &mut b.h,
            b.z.as_mut_ptr(),
            &mut b.T,
            &mut b.P,
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

/// Flash at density [mol/L] and entropy [J/mol-K] using `DSFLSHdll`.
pub(crate) fn ds_flash(D: f64, s: f64, z: f64) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.D = D;
    b.s = s;

    unsafe {
        bindings::DSFLSHdll(
            &mut b.D,
            &mut b.s,
            b.z.as_mut_ptr(),
            &mut b.T,
            &mut b.P,
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

/// Flash at density [mol/L] and internal energy [J/mol] using `DEFLSHdll`.
pub(crate) fn de_flash(D: f64, e: f64, z: f64) -> BackendResult<FlashOutput> {
    let lock = acquire_lock()?;
    let mut b = FlashBuffers::new(z);
    b.D = D;
    b.e = e;

    unsafe {
        bindings::DEFLSHdll(
            &mut b.D,
            &mut b.e,
            b.z.as_mut_ptr(),
            &mut b.T,
            &mut b.P,
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
