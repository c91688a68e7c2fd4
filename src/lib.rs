//! Native callback shims for streaming Opus decode and encode.
//!
//! This crate bridges a managed-runtime host to libopusfile and
//! libopusenc. The native libraries want a `void *` context and a table of
//! C function pointers; the host wants to hand over an opaque integer
//! handle and a pair of its own functions. The shims in here own the two
//! process-wide dispatch tables, relay every callback to the host
//! untouched, and confine the integer-as-pointer context conversion to a
//! single audited spot.
//!
//! # Boundary contract
//!
//! The host must define two functions with C linkage:
//!
//! - `int go_readcallback(void *p, unsigned char *buf, int nbytes)`
//! - `int go_writecallback(void *p, const unsigned char *buf, int nbytes)`
//!
//! `p` is always the handle the host passed at session construction,
//! bit-exact. The host resolves it back to one of its own objects by table
//! lookup, never by dereference.
//!
//! # Thread safety
//!
//! The dispatch tables are immutable statics and safe to share across any
//! number of sessions and threads. The shims hold no per-session state and
//! take no locks; callbacks run synchronously on whichever thread the
//! native library calls from.
//!
//! # Memory management
//!
//! Sessions returned by the constructors are owned by the caller and
//! released through the native libraries (`op_free`,
//! `ope_encoder_destroy`). The dispatch tables are never deallocated. The
//! close hook registered with libopusenc is a deliberate no-op: the host
//! owns its output sinks.
//!
//! # Feature flags
//!
//! - `opusfile` (default): the decode side, links libopusfile
//! - `opusenc` (default): the encode side, links libopusenc

#![allow(clippy::missing_safety_doc)]

mod error;
pub mod handle;
mod sys;
mod util;

#[cfg(feature = "opusenc")]
mod encoder;
#[cfg(feature = "opusfile")]
mod stream;

#[cfg(feature = "opusenc")]
pub use encoder::{my_ope_encoder_create_callback, setApplication, setBitrate, setComplexity};
pub use error::{EncoderError, OpusFileError};
#[cfg(feature = "opusfile")]
pub use stream::my_open_callbacks;

use std::os::raw::c_char;

/// Library version string.
///
/// # Returns
///
/// Static string containing the version (e.g., "0.1.0").
/// Do not free this string.
#[unsafe(no_mangle)]
pub extern "C" fn opus_stream_version() -> *const c_char {
    // Include null terminator in the static string
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}



#[cfg(all(test, feature = "opusfile"))]
mod stream_boundary_tests {
    use super::{handle, host, stream, sys};
    use libc::c_int;

    #[test]
    fn read_trampoline_forwards_context_and_data_unchanged() {
        let h = 0x1000usize;
        host::register_source(h, b"opus bytes".to_vec());

        let mut buf = [0u8; 16];
        let got = unsafe {
            stream::read_trampoline(handle::to_context(h), buf.as_mut_ptr(), buf.len() as c_int)
        };
        assert_eq!(got, 10);
        assert_eq!(&buf[..10], b"opus bytes");

        // Same source, drained: a second read reports end of stream.
        let got = unsafe {
            stream::read_trampoline(handle::to_context(h), buf.as_mut_ptr(), buf.len() as c_int)
        };
        assert_eq!(got, 0);
    }

    #[test]
    fn read_trampoline_reports_unknown_handle_as_error() {
        let mut buf = [0u8; 4];
        let got = unsafe {
            stream::read_trampoline(
                handle::to_context(0x1fff),
                buf.as_mut_ptr(),
                buf.len() as c_int,
            )
        };
        assert!(got < 0);
    }

    #[test]
    fn open_over_empty_source_fails_with_native_code() {
        let h = 0x1100usize;
        host::register_source(h, Vec::new());

        let mut err: c_int = 0;
        let session = unsafe { super::my_open_callbacks(h, &mut err) };
        assert!(session.is_null());
        assert!(err < 0, "expected a native OP_* code, got {err}");
    }

    #[test]
    fn open_over_garbage_rejects_format() {
        let h = 0x1200usize;
        host::register_source(h, vec![0xAB; 8192]);

        let mut err: c_int = 0;
        let session = unsafe { super::my_open_callbacks(h, &mut err) };
        assert!(session.is_null());
        assert_eq!(err, sys::OP_ENOTFORMAT);
    }
}

#[cfg(all(test, feature = "opusenc"))]
mod encoder_boundary_tests {
    use super::{encoder, handle, host, sys};
    use libc::c_int;

    #[test]
    fn write_trampoline_forwards_context_and_data_unchanged() {
        let h = 0x2100usize;
        host::register_sink(h);

        let data = [7u8; 128];
        let got = unsafe {
            encoder::write_trampoline(handle::to_context(h), data.as_ptr(), data.len() as c_int)
        };
        assert_eq!(got, 0);
        assert_eq!(host::sink_contents(h), vec![7u8; 128]);
    }

    #[test]
    fn encoder_delivers_ogg_pages_to_its_own_handle() {
        let h = 0x2000usize;
        host::register_sink(h);

        let mut err: c_int = -1;
        let enc = unsafe { super::my_ope_encoder_create_callback(h, &mut err) };
        assert!(!enc.is_null());
        assert_eq!(err, sys::OPE_OK);

        assert_eq!(unsafe { super::setBitrate(enc, 64_000) }, sys::OPE_OK);
        assert_eq!(unsafe { super::setComplexity(enc, 5) }, sys::OPE_OK);

        // 20 ms of silence at 48 kHz mono, then finalize the stream.
        let pcm = [0.0f32; 960];
        let wrote =
            unsafe { sys::ope_encoder_write_float(enc, pcm.as_ptr(), pcm.len() as c_int) };
        assert_eq!(wrote, sys::OPE_OK);
        assert_eq!(unsafe { sys::ope_encoder_drain(enc) }, sys::OPE_OK);
        unsafe { sys::ope_encoder_destroy(enc) };

        let out = host::sink_contents(h);
        assert!(!out.is_empty());
        assert_eq!(&out[..4], b"OggS");
    }
}
