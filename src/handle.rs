//! Opaque handle smuggling across the native boundary.
//!
//! The host identifies its streams with pointer-sized integer tokens, not
//! pointers. The native open/create entry points only offer a `void *`
//! context slot, so the token travels through that slot bit-reinterpreted
//! as a pointer. The conversion never allocates and the resulting pointer
//! is never dereferenced on either side; the host reverses it by table
//! lookup. Provenance checkers flag integer-to-pointer casts, which is why
//! the cast lives in exactly this one place, expressed with the strict
//! provenance API that declares the value as non-pointer cargo.

use std::ffi::c_void;

/// Convert a host-chosen handle into the context pointer the native
/// libraries carry.
///
/// The result has no provenance and must never be dereferenced; it exists
/// only to be handed back to the callbacks unchanged.
#[inline]
pub fn to_context(handle: usize) -> *mut c_void {
    std::ptr::without_provenance_mut(handle)
}

/// Recover the handle from a context pointer delivered to a callback.
///
/// Bit-exact inverse of [`to_context`] for every handle value, including 0
/// and `usize::MAX`.
#[inline]
pub fn from_context(context: *mut c_void) -> usize {
    context.addr()
}
