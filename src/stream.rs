//! Read side: decode-session construction over host callbacks.
//!
//! libopusfile pulls compressed data through a callback table. The host
//! supplies the actual read implementation (`go_readcallback`); this module
//! owns the table, the trampoline registered in it, and the exported
//! constructor the host calls.

use libc::{c_int, c_uchar, c_void};

use crate::error::OpusFileError;
use crate::handle;
use crate::sys::{self, OggOpusFile, OpusFileCallbacks};
use crate::util::peek_status;

unsafe extern "C" {
    /// Defined by the host. Must fill `buf` with at most `nbytes` bytes of
    /// compressed input for the stream identified by `stream`, returning
    /// the byte count (0 at end of stream, negative on error).
    fn go_readcallback(stream: *mut c_void, buf: *mut c_uchar, nbytes: c_int) -> c_int;
}

/// Read-side dispatch table.
///
/// A static so it has one stable address for the whole process and outlives
/// every session that references it; libopusfile only ever reads it, so any
/// number of concurrently open streams share it. The seek/tell/close slots
/// stay empty: the host's streams are unseekable and the host owns their
/// teardown.
pub(crate) static STREAM_CALLBACKS: OpusFileCallbacks = OpusFileCallbacks {
    read: Some(read_trampoline),
    seek: None,
    tell: None,
    close: None,
};

/// Relay a libopusfile read request to the host, untouched.
pub(crate) unsafe extern "C" fn read_trampoline(
    stream: *mut c_void,
    buf: *mut c_uchar,
    nbytes: c_int,
) -> c_int {
    unsafe { go_readcallback(stream, buf, nbytes) }
}

/// Open a decode session that reads through the host's callback.
///
/// # Parameters
///
/// - `p`: opaque host-chosen handle; delivered unchanged as the first
///   argument of every `go_readcallback` invocation for this session
/// - `error`: out-parameter receiving the native status code; forwarded to
///   libopusfile verbatim (may be NULL)
///
/// # Returns
///
/// The native session on success, NULL on failure. libopusfile probes the
/// stream format during this call, so `go_readcallback` may run before it
/// returns.
///
/// # Ownership
///
/// The caller owns the returned session and must release it with
/// `op_free`.
///
/// # Safety
///
/// - `error` must be NULL or a valid pointer to an `int`
/// - the host must have defined `go_readcallback` and be prepared for it to
///   fire during this call
#[unsafe(no_mangle)]
pub unsafe extern "C" fn my_open_callbacks(p: usize, error: *mut c_int) -> *mut OggOpusFile {
    let session = unsafe {
        sys::op_open_callbacks(
            handle::to_context(p),
            &STREAM_CALLBACKS,
            std::ptr::null(),
            0,
            error,
        )
    };
    if session.is_null() {
        if let Some(code) = unsafe { peek_status(error) } {
            log::error!("op_open_callbacks failed: {}", OpusFileError::from_raw(code));
        }
    }
    session
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_registers_only_the_read_slot() {
        assert_eq!(
            STREAM_CALLBACKS.read,
            Some(read_trampoline as sys::op_read_func)
        );
        assert!(STREAM_CALLBACKS.seek.is_none());
        assert!(STREAM_CALLBACKS.tell.is_none());
        assert!(STREAM_CALLBACKS.close.is_none());
    }
}
