use tracing::debug;

use super::{
    bindings,
    utils::{acquire_lock, check_refprop_error, message_buffer, string_buffer, HERR_LENGTH},
};
use crate::backend::{BackendResult, SetupRequest};

/// REFPROP's default length for the pipe-separated fluid file list.
const HFILES_LENGTH: usize = 10000;
const HFMIX_LENGTH: usize = 255;
const HRF_LENGTH: usize = 3;

/// Loads one pure fluid with `SETUPdll`.
///
/// # References
///
/// - [REFPROP Documentation - SETUPdll](https://pages.nist.gov/RefProp/documentation.html)
pub(crate) fn setup(request: &SetupRequest) -> BackendResult<()> {
    let guard = acquire_lock()?;

    let mut hfiles = string_buffer(&request.fluid_file.to_string_lossy(), HFILES_LENGTH);
    let mut hfmix = string_buffer(&request.mixture_file.to_string_lossy(), HFMIX_LENGTH);
    let mut hrf = string_buffer(&request.reference_state, HRF_LENGTH);
    let mut herr = message_buffer();
    let mut nc: i32 = 1;
    let mut ierr: i32 = 0;

    debug!(fluid_file = %request.fluid_file.display(), "SETUPdll");

    unsafe {
        bindings::SETUPdll(
            &mut nc,
            hfiles.as_mut_ptr(),
            hfmix.as_mut_ptr(),
            hrf.as_mut_ptr(),
            &mut ierr,
            herr.as_mut_ptr(),
            HFILES_LENGTH as i32,
            HFMIX_LENGTH as i32,
            HRF_LENGTH as i32,
            HERR_LENGTH as i32,
        );
    }

    check_refprop_error(&guard, ierr, &mut herr)
}
