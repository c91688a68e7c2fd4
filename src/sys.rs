//! Raw declarations for the libopusfile and libopusenc C APIs.
//!
//! Only the entry points and constants this crate actually crosses the
//! boundary with are declared here; the full APIs are much larger. Layouts
//! and signatures follow `<opusfile.h>` and `<opusenc.h>` exactly. Link
//! flags come from the build script's pkg-config probes.

#![allow(non_camel_case_types)]

use libc::{c_int, c_uchar, c_void, size_t};

pub type opus_int32 = i32;
pub type opus_int64 = i64;

/// Opaque decode session (`OggOpusFile *`).
#[repr(C)]
pub struct OggOpusFile {
    _private: [u8; 0],
}

/// Opaque encode session (`OggOpusEnc *`).
#[repr(C)]
pub struct OggOpusEnc {
    _private: [u8; 0],
}

/// Opaque comment/metadata container (`OggOpusComments *`).
#[repr(C)]
pub struct OggOpusComments {
    _private: [u8; 0],
}

pub type op_read_func =
    unsafe extern "C" fn(stream: *mut c_void, ptr: *mut c_uchar, nbytes: c_int) -> c_int;
pub type op_seek_func =
    unsafe extern "C" fn(stream: *mut c_void, offset: opus_int64, whence: c_int) -> c_int;
pub type op_tell_func = unsafe extern "C" fn(stream: *mut c_void) -> opus_int64;
pub type op_close_func = unsafe extern "C" fn(stream: *mut c_void) -> c_int;

/// Callback table consumed by `op_open_callbacks`. Unset slots tell
/// libopusfile the stream is unseekable.
#[repr(C)]
pub struct OpusFileCallbacks {
    pub read: Option<op_read_func>,
    pub seek: Option<op_seek_func>,
    pub tell: Option<op_tell_func>,
    pub close: Option<op_close_func>,
}

pub type ope_write_func =
    unsafe extern "C" fn(user_data: *mut c_void, ptr: *const c_uchar, len: opus_int32) -> c_int;
pub type ope_close_func = unsafe extern "C" fn(user_data: *mut c_void) -> c_int;

/// Callback table consumed by `ope_encoder_create_callbacks`. Both slots
/// are mandatory on the libopusenc side.
#[repr(C)]
pub struct OpusEncCallbacks {
    pub write: Option<ope_write_func>,
    pub close: Option<ope_close_func>,
}

// libopusfile status codes.
pub const OP_FALSE: c_int = -1;
pub const OP_EOF: c_int = -2;
pub const OP_HOLE: c_int = -3;
pub const OP_EREAD: c_int = -128;
pub const OP_EFAULT: c_int = -129;
pub const OP_EIMPL: c_int = -130;
pub const OP_EINVAL: c_int = -131;
pub const OP_ENOTFORMAT: c_int = -132;
pub const OP_EBADHEADER: c_int = -133;
pub const OP_EVERSION: c_int = -134;
pub const OP_ENOTAUDIO: c_int = -135;
pub const OP_EBADPACKET: c_int = -136;
pub const OP_EBADLINK: c_int = -137;
pub const OP_ENOSEEK: c_int = -138;
pub const OP_EBADTIMESTAMP: c_int = -139;

// libopusenc status codes.
pub const OPE_OK: c_int = 0;
pub const OPE_BAD_ARG: c_int = -11;
pub const OPE_INTERNAL_ERROR: c_int = -13;
pub const OPE_UNIMPLEMENTED: c_int = -15;
pub const OPE_ALLOC_FAIL: c_int = -17;
pub const OPE_CANNOT_OPEN: c_int = -30;
pub const OPE_TOO_LATE: c_int = -31;
pub const OPE_INVALID_PICTURE: c_int = -32;
pub const OPE_INVALID_ICON: c_int = -33;
pub const OPE_WRITE_FAIL: c_int = -34;
pub const OPE_CLOSE_FAIL: c_int = -35;

// Generic opus CTL requests accepted by ope_encoder_ctl (from
// <opus_defines.h>; libopusenc forwards them to the underlying encoder).
pub const OPUS_SET_APPLICATION_REQUEST: c_int = 4000;
pub const OPUS_SET_BITRATE_REQUEST: c_int = 4002;
pub const OPUS_SET_COMPLEXITY_REQUEST: c_int = 4010;

#[cfg(feature = "opusfile")]
unsafe extern "C" {
    pub fn op_open_callbacks(
        stream: *mut c_void,
        cb: *const OpusFileCallbacks,
        initial_data: *const c_uchar,
        initial_bytes: size_t,
        error: *mut c_int,
    ) -> *mut OggOpusFile;
    pub fn op_free(of: *mut OggOpusFile);
}

#[cfg(feature = "opusenc")]
unsafe extern "C" {
    pub fn ope_comments_create() -> *mut OggOpusComments;
    pub fn ope_encoder_create_callbacks(
        callbacks: *const OpusEncCallbacks,
        user_data: *mut c_void,
        comments: *mut OggOpusComments,
        rate: opus_int32,
        channels: c_int,
        family: c_int,
        error: *mut c_int,
    ) -> *mut OggOpusEnc;
    pub fn ope_encoder_ctl(enc: *mut OggOpusEnc, request: c_int, ...) -> c_int;
    pub fn ope_encoder_write_float(
        enc: *mut OggOpusEnc,
        pcm: *const f32,
        samples_per_channel: c_int,
    ) -> c_int;
    pub fn ope_encoder_drain(enc: *mut OggOpusEnc) -> c_int;
    pub fn ope_encoder_destroy(enc: *mut OggOpusEnc);
}
