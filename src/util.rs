//! Helpers for the error-out parameter.

use libc::c_int;

/// Read the status a native call wrote into the caller's error slot.
///
/// The slot is forwarded to the native library verbatim, so the caller may
/// legitimately have passed NULL; in that case there is nothing to report.
///
/// # Safety
///
/// `error` must be null or a valid pointer to a `c_int`.
pub(crate) unsafe fn peek_status(error: *const c_int) -> Option<c_int> {
    unsafe { error.as_ref() }.copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_status_tolerates_null() {
        assert_eq!(unsafe { peek_status(std::ptr::null()) }, None);
    }

    #[test]
    fn peek_status_reads_value() {
        let code: c_int = -132;
        assert_eq!(unsafe { peek_status(&code) }, Some(-132));
    }
}
