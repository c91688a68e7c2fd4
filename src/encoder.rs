//! Write side: encode-session construction over host callbacks.
//!
//! libopusenc pushes finished Ogg pages through a callback table. The host
//! supplies the actual write implementation (`go_writecallback`); this
//! module owns the table, both trampolines registered in it, the exported
//! constructor, and the encoder parameter setters the host declares.

use libc::{c_int, c_uchar, c_void};

use crate::error::EncoderError;
use crate::handle;
use crate::sys::{self, OggOpusEnc, OpusEncCallbacks};
use crate::util::peek_status;

/// Fixed stream parameters: 48 kHz mono, channel mapping family 0. A scope
/// restriction of this adapter, not a library limit.
const SAMPLE_RATE: sys::opus_int32 = 48000;
const CHANNELS: c_int = 1;
const FAMILY: c_int = 0;

unsafe extern "C" {
    /// Defined by the host. Receives `nbytes` bytes of finished Ogg output
    /// for the stream identified by `user_data`; returns 0 on success,
    /// nonzero to abort the encode.
    fn go_writecallback(user_data: *mut c_void, buf: *const c_uchar, nbytes: c_int) -> c_int;
}

/// Write-side dispatch table. Same lifetime rules as the read-side one:
/// a single static shared by every encoder in the process.
pub(crate) static ENCODER_CALLBACKS: OpusEncCallbacks = OpusEncCallbacks {
    write: Some(write_trampoline),
    close: Some(close_trampoline),
};

/// Relay a libopusenc page write to the host, untouched.
pub(crate) unsafe extern "C" fn write_trampoline(
    user_data: *mut c_void,
    buf: *const c_uchar,
    nbytes: c_int,
) -> c_int {
    unsafe { go_writecallback(user_data, buf, nbytes) }
}

/// Close hook registered with libopusenc. Reports success and releases
/// nothing: the host owns the output sink and tears it down after draining
/// and destroying the encoder. Never dereferences `user_data`, so a null
/// context is fine.
pub(crate) unsafe extern "C" fn close_trampoline(_user_data: *mut c_void) -> c_int {
    0
}

/// Create an encode session that writes through the host's callback.
///
/// # Parameters
///
/// - `p`: opaque host-chosen handle; delivered unchanged as the first
///   argument of every `go_writecallback` invocation for this session
/// - `error`: out-parameter receiving the native status code; forwarded to
///   libopusenc verbatim (may be NULL)
///
/// # Returns
///
/// The native encoder on success, NULL on failure. A fresh empty comments
/// container is allocated here and consumed by the create call.
///
/// # Ownership
///
/// The caller owns the returned encoder and must release it with
/// `ope_encoder_destroy` (after `ope_encoder_drain` if output matters).
///
/// # Safety
///
/// - `error` must be NULL or a valid pointer to an `int`
/// - the host must have defined `go_writecallback`
#[unsafe(no_mangle)]
pub unsafe extern "C" fn my_ope_encoder_create_callback(
    p: usize,
    error: *mut c_int,
) -> *mut OggOpusEnc {
    let comments = unsafe { sys::ope_comments_create() };
    let enc = unsafe {
        sys::ope_encoder_create_callbacks(
            &ENCODER_CALLBACKS,
            handle::to_context(p),
            comments,
            SAMPLE_RATE,
            CHANNELS,
            FAMILY,
            error,
        )
    };
    if enc.is_null() {
        if let Some(code) = unsafe { peek_status(error) } {
            log::error!(
                "ope_encoder_create_callbacks failed: {}",
                EncoderError::from_raw(code)
            );
        }
    }
    enc
}

/// Set the target bitrate in bits per second on a live encoder.
///
/// # Safety
///
/// `enc` must be a valid encoder returned by
/// [`my_ope_encoder_create_callback`].
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn setBitrate(enc: *mut OggOpusEnc, bitrate: u32) -> c_int {
    unsafe {
        sys::ope_encoder_ctl(
            enc,
            sys::OPUS_SET_BITRATE_REQUEST,
            bitrate as sys::opus_int32,
        )
    }
}

/// Set the opus application mode (VoIP, audio, low-delay) on a live
/// encoder.
///
/// # Safety
///
/// `enc` must be a valid encoder returned by
/// [`my_ope_encoder_create_callback`].
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn setApplication(enc: *mut OggOpusEnc, app: u32) -> c_int {
    unsafe {
        sys::ope_encoder_ctl(
            enc,
            sys::OPUS_SET_APPLICATION_REQUEST,
            app as sys::opus_int32,
        )
    }
}

/// Set the encoder complexity (0-10) on a live encoder.
///
/// # Safety
///
/// `enc` must be a valid encoder returned by
/// [`my_ope_encoder_create_callback`].
#[allow(non_snake_case)]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn setComplexity(enc: *mut OggOpusEnc, complexity: u32) -> c_int {
    unsafe {
        sys::ope_encoder_ctl(
            enc,
            sys::OPUS_SET_COMPLEXITY_REQUEST,
            complexity as sys::opus_int32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_registers_write_and_close() {
        assert_eq!(
            ENCODER_CALLBACKS.write,
            Some(write_trampoline as sys::ope_write_func)
        );
        assert_eq!(
            ENCODER_CALLBACKS.close,
            Some(close_trampoline as sys::ope_close_func)
        );
    }

    #[test]
    fn close_reports_success_for_any_context() {
        assert_eq!(unsafe { close_trampoline(std::ptr::null_mut()) }, 0);
        assert_eq!(unsafe { close_trampoline(handle::to_context(0x2000)) }, 0);
        assert_eq!(unsafe { close_trampoline(handle::to_context(usize::MAX)) }, 0);
    }
}
