//! Named forms of the native status codes.
//!
//! The adapter never invents or translates errors: the caller-supplied
//! `int *` slot receives whatever the native open/create call wrote, and
//! trampoline return values pass through verbatim. These enums exist so
//! failure paths can be logged with the canonical constant names instead
//! of bare integers. Variant names mirror the headers; `Display` renders
//! the exact constant spelling.

use libc::c_int;
use thiserror::Error;

use crate::sys;

/// libopusfile status codes, as written by `op_open_callbacks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OpusFileError {
    #[error("OP_FALSE")]
    False,
    #[error("OP_EOF")]
    Eof,
    #[error("OP_HOLE")]
    Hole,
    #[error("OP_EREAD")]
    Read,
    #[error("OP_EFAULT")]
    Fault,
    #[error("OP_EIMPL")]
    Impl,
    #[error("OP_EINVAL")]
    Inval,
    #[error("OP_ENOTFORMAT")]
    NotFormat,
    #[error("OP_EBADHEADER")]
    BadHeader,
    #[error("OP_EVERSION")]
    Version,
    #[error("OP_ENOTAUDIO")]
    NotAudio,
    #[error("OP_EBADPACKET")]
    BadPacket,
    #[error("OP_EBADLINK")]
    BadLink,
    #[error("OP_ENOSEEK")]
    NoSeek,
    #[error("OP_EBADTIMESTAMP")]
    BadTimestamp,
    #[error("libopusfile error: {0} (unknown code)")]
    Unknown(c_int),
}

impl OpusFileError {
    /// Classify a raw status code from the error-out slot.
    pub fn from_raw(code: c_int) -> Self {
        match code {
            sys::OP_FALSE => Self::False,
            sys::OP_EOF => Self::Eof,
            sys::OP_HOLE => Self::Hole,
            sys::OP_EREAD => Self::Read,
            sys::OP_EFAULT => Self::Fault,
            sys::OP_EIMPL => Self::Impl,
            sys::OP_EINVAL => Self::Inval,
            sys::OP_ENOTFORMAT => Self::NotFormat,
            sys::OP_EBADHEADER => Self::BadHeader,
            sys::OP_EVERSION => Self::Version,
            sys::OP_ENOTAUDIO => Self::NotAudio,
            sys::OP_EBADPACKET => Self::BadPacket,
            sys::OP_EBADLINK => Self::BadLink,
            sys::OP_ENOSEEK => Self::NoSeek,
            sys::OP_EBADTIMESTAMP => Self::BadTimestamp,
            other => Self::Unknown(other),
        }
    }
}

/// libopusenc status codes, as written by `ope_encoder_create_callbacks`
/// and returned by the encoder CTL setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncoderError {
    #[error("OPE_BAD_ARG")]
    BadArg,
    #[error("OPE_INTERNAL_ERROR")]
    InternalError,
    #[error("OPE_UNIMPLEMENTED")]
    Unimplemented,
    #[error("OPE_ALLOC_FAIL")]
    AllocFail,
    #[error("OPE_CANNOT_OPEN")]
    CannotOpen,
    #[error("OPE_TOO_LATE")]
    TooLate,
    #[error("OPE_INVALID_PICTURE")]
    InvalidPicture,
    #[error("OPE_INVALID_ICON")]
    InvalidIcon,
    #[error("OPE_WRITE_FAIL")]
    WriteFail,
    #[error("OPE_CLOSE_FAIL")]
    CloseFail,
    #[error("libopusenc error: {0} (unknown code)")]
    Unknown(c_int),
}

impl EncoderError {
    /// Classify a raw status code from the error-out slot.
    pub fn from_raw(code: c_int) -> Self {
        match code {
            sys::OPE_BAD_ARG => Self::BadArg,
            sys::OPE_INTERNAL_ERROR => Self::InternalError,
            sys::OPE_UNIMPLEMENTED => Self::Unimplemented,
            sys::OPE_ALLOC_FAIL => Self::AllocFail,
            sys::OPE_CANNOT_OPEN => Self::CannotOpen,
            sys::OPE_TOO_LATE => Self::TooLate,
            sys::OPE_INVALID_PICTURE => Self::InvalidPicture,
            sys::OPE_INVALID_ICON => Self::InvalidIcon,
            sys::OPE_WRITE_FAIL => Self::WriteFail,
            sys::OPE_CLOSE_FAIL => Self::CloseFail,
            other => Self::Unknown(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opusfile_codes_render_canonical_names() {
        assert_eq!(OpusFileError::from_raw(sys::OP_EREAD).to_string(), "OP_EREAD");
        assert_eq!(
            OpusFileError::from_raw(sys::OP_ENOTFORMAT),
            OpusFileError::NotFormat
        );
        assert_eq!(
            OpusFileError::from_raw(-77).to_string(),
            "libopusfile error: -77 (unknown code)"
        );
    }

    #[test]
    fn encoder_codes_render_canonical_names() {
        assert_eq!(
            EncoderError::from_raw(sys::OPE_WRITE_FAIL).to_string(),
            "OPE_WRITE_FAIL"
        );
        assert_eq!(EncoderError::from_raw(sys::OPE_BAD_ARG), EncoderError::BadArg);
        assert_eq!(
            EncoderError::from_raw(-99).to_string(),
            "libopusenc error: -99 (unknown code)"
        );
    }
}
