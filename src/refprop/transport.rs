use super::{
    bindings,
    utils::{acquire_lock, check_refprop_error, composition, message_buffer, HERR_LENGTH},
};
use crate::backend::{BackendResult, HeatCapacities, TransportOutput};

/// Molar mass [g/mol] of the loaded fluid using `WMOLdll`.
///
/// REFPROP reports no error code for this call.
///
/// # Errors
///
/// - Returns a `BackendError` if the REFPROP mutex is poisoned.
pub(crate) fn molar_mass(z: f64) -> BackendResult<f64> {
    let _guard = acquire_lock()?;
    let mut z = composition(z);
    let mut wmm: f64 = 0.0;

    unsafe {
        bindings::WMOLdll(z.as_mut_ptr(), &mut wmm);
    }

    Ok(wmm)
}

/// Computes viscosity and thermal conductivity as functions of temperature and density
/// using the `TRNPRPdll` function.
///
/// **Warning:**
///
/// Do NOT call this routine with the bulk density of a two-phase state. Near the
/// phase boundary it may return a metastable state or nonsensical results.
/// A flash reports a two-phase state with a quality between 0 and 1; in that
/// case call it once at the saturated liquid density and once at the saturated
/// vapor density.
///
/// # Parameters
///
/// - `T`: Temperature [K]
/// - `D`: Molar density [mol/L]
/// - `z`: Mole fraction of the pure fluid, normally 1
///
/// # Returns
///
/// - `TransportOutput`: viscosity `eta` [uPa-s] and thermal conductivity `tcx` [W/(m-K)].
///
/// # Errors
///
/// - Returns a `BackendError` with REFPROP's code and message if REFPROP reports an error.
/// - Returns a `BackendError` if the REFPROP mutex is poisoned.
///
/// # References
///
/// - [REFPROP Documentation - TRNPRPdll](https://pages.nist.gov/RefProp/documentation.html)
pub(crate) fn transport_properties(T: f64, D: f64, z: f64) -> BackendResult<TransportOutput> {
    let guard = acquire_lock()?;
    let mut T = T;
    let mut D = D;
    let mut z = composition(z);
    let mut eta: f64 = 0.0;
    let mut tcx: f64 = 0.0;
    let mut ierr: i32 = 0;
    let mut herr = message_buffer();

    unsafe {
        bindings::TRNPRPdll(
            &mut T,
            &mut D,
            z.as_mut_ptr(),
            &mut eta,
            &mut tcx,
            &mut ierr,
            herr.as_mut_ptr(),
            HERR_LENGTH as i32,
        );
    }

    check_refprop_error(&guard, ierr, &mut herr)?;
    Ok(TransportOutput { eta, tcx })
}

/// Surface tension [N/m] between saturated liquid and vapor using `SURTENdll`.
///
/// The liquid and vapor compositions both equal `z` for a pure fluid.
///
/// # Parameters
///
/// - `T`: Temperature [K]
/// - `Dl`: Saturated liquid density [mol/L]
/// - `Dv`: Saturated vapor density [mol/L]
/// - `z`: Mole fraction of the pure fluid
///
/// # Errors
///
/// - Returns a `BackendError` with REFPROP's code and message if REFPROP reports an error,
///   e.g. above the critical temperature.
///
/// # References
///
/// - [REFPROP Documentation - SURTENdll](https://pages.nist.gov/RefProp/documentation.html)
pub(crate) fn surface_tension(T: f64, Dl: f64, Dv: f64, z: f64) -> BackendResult<f64> {
    let guard = acquire_lock()?;
    let mut T = T;
    let mut Dl = Dl;
    let mut Dv = Dv;
    let mut x = composition(z);
    let mut y = composition(z);
    let mut sigma: f64 = 0.0;
    let mut ierr: i32 = 0;
    let mut herr = message_buffer();

    unsafe {
        bindings::SURTENdll(
            &mut T,
            &mut Dl,
            &mut Dv,
            x.as_mut_ptr(),
            y.as_mut_ptr(),
            &mut sigma,
            &mut ierr,
            herr.as_mut_ptr(),
            HERR_LENGTH as i32,
        );
    }

    check_refprop_error(&guard, ierr, &mut herr)?;
    Ok(sigma)
}

/// Isochoric and isobaric heat capacities [J/mol-K] at one (T, D) point using `CVCPdll`.
///
/// Unlike the flash routines this evaluates the given density as a single phase,
/// which is what the per-phase values of a saturated mixture need.
pub(crate) fn heat_capacities(T: f64, D: f64, z: f64) -> BackendResult<HeatCapacities> {
    let _guard = acquire_lock()?;
    let mut T = T;
    let mut D = D;
    let mut z = composition(z);
    let mut cv: f64 = 0.0;
    let mut cp: f64 = 0.0;

    unsafe {
        bindings::CVCPdll(&mut T, &mut D, z.as_mut_ptr(), &mut cv, &mut cp);
    }

    Ok(HeatCapacities { cv, cp })
}
