use std::sync::{atomic::AtomicBool, Mutex, MutexGuard, OnceLock};

use libc::c_char;

use super::bindings;
use crate::backend::{BackendError, BackendResult, LOCAL_ERROR_CODE};

static REFPROP_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Set while a `RefpropBackend` exists; REFPROP holds one loaded fluid per process.
pub(crate) static REFPROP_CLAIMED: AtomicBool = AtomicBool::new(false);

/// Maximum number of components in REFPROP's composition arrays.
pub(crate) const NC_MAX: usize = 20;

/// Length of REFPROP's error message buffers.
pub(crate) const HERR_LENGTH: usize = 255;

pub(crate) const CV_UNDEFINED: f64 = -9999990.0;
pub(crate) const CP_UNDEFINED: f64 = -9999980.0;

pub(crate) fn acquire_lock<'a>() -> BackendResult<MutexGuard<'a, ()>> {
    REFPROP_MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .map_err(|_| BackendError::new(LOCAL_ERROR_CODE, "REFPROP mutex was poisoned"))
}

/// A pure-fluid composition padded to REFPROP's array size.
pub(crate) fn composition(z: f64) -> [f64; NC_MAX] {
    let mut buffer = [0.0f64; NC_MAX];
    buffer[0] = z;
    buffer
}

/// A zeroed message buffer with room for a trailing NUL.
pub(crate) fn message_buffer() -> Vec<c_char> {
    vec![0 as c_char; HERR_LENGTH + 1]
}

/// Reads a Fortran string buffer: stops at the first NUL and drops the space padding.
pub(crate) fn buffer_to_string(buffer: &[c_char]) -> String {
    let bytes: Vec<u8> = buffer
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).trim().to_string()
}

/// Copies `value` into a zeroed buffer of `length` characters, truncating if needed.
pub(crate) fn string_buffer(value: &str, length: usize) -> Vec<c_char> {
    let mut buffer = vec![0 as c_char; length + 1];
    for (slot, &byte) in buffer.iter_mut().zip(value.as_bytes().iter().take(length)) {
        *slot = byte as c_char;
    }
    buffer
}

/// Checks the REFPROP error code and turns a nonzero one into a [`BackendError`].
///
/// The routine's own message buffer is used when it holds text; otherwise the
/// message is looked up with `ERRMSGdll`. Requires the lock to still be held.
pub(crate) fn check_refprop_error(
    _guard: &MutexGuard<()>,
    ierr: i32,
    herr: &mut [c_char],
) -> BackendResult<()> {
    if ierr == 0 {
        return Ok(());
    }

    let mut message = buffer_to_string(herr);
    if message.is_empty() {
        let mut code = ierr;
        unsafe {
            bindings::ERRMSGdll(&mut code, herr.as_mut_ptr(), HERR_LENGTH as i32);
        }
        message = buffer_to_string(herr);
    }

    Err(BackendError::new(ierr, message))
}

/// Maps REFPROP's "undefined" heat capacity sentinels to `None`.
pub(crate) fn defined(value: f64) -> Option<f64> {
    if value == CV_UNDEFINED || value == CP_UNDEFINED {
        None
    } else {
        Some(value)
    }
}
