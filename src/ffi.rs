//! C ABI over [`crate::boundary`].
//!
//! The solver allocates the result buffer and hands ownership to the caller,
//! who copies the data out and then returns the buffer through
//! [`tilesolve_release`]. Every call allocates a fresh buffer; nothing is
//! shared between calls.

use std::ptr;
use std::slice;

use crate::board::CELLS;
use crate::boundary::{solve_flat, NO_SOLUTION};

/// Number of entries in the settings buffer: `[algorithm, depth_bound]`.
const SETTINGS_LEN: usize = 2;

/// Solves one puzzle and returns a caller-owned result buffer.
///
/// On return `*size` holds the buffer length. Null board or settings pointers
/// produce the [`NO_SOLUTION`] buffer. Returns null only when `size` is null.
///
/// # Safety
///
/// `initial` and `goal` must each point to 9 readable `i32`s and `settings` to
/// 2, unless null. `size` must be null or valid for writes. The returned
/// buffer must be released exactly once with [`tilesolve_release`].
#[no_mangle]
pub unsafe extern "C" fn tilesolve_solve(
    initial: *const i32,
    goal: *const i32,
    settings: *const i32,
    size: *mut usize,
) -> *mut i32 {
    if size.is_null() {
        return ptr::null_mut();
    }

    let buffer = if initial.is_null() || goal.is_null() || settings.is_null() {
        log::warn!("null input pointer");
        vec![NO_SOLUTION]
    } else {
        // SAFETY: the caller guarantees the lengths documented above
        let (initial, goal, settings) = unsafe {
            (
                slice::from_raw_parts(initial, CELLS),
                slice::from_raw_parts(goal, CELLS),
                slice::from_raw_parts(settings, SETTINGS_LEN),
            )
        };
        solve_flat(initial, goal, settings)
    };

    let buffer = buffer.into_boxed_slice();
    // SAFETY: checked non-null above
    unsafe { *size = buffer.len() };
    Box::into_raw(buffer).cast::<i32>()
}

/// Frees a buffer returned by [`tilesolve_solve`]. Null is a no-op.
///
/// # Safety
///
/// `buffer` and `size` must be exactly what one earlier call to
/// [`tilesolve_solve`] returned, and the buffer must not be used afterwards.
#[no_mangle]
pub unsafe extern "C" fn tilesolve_release(buffer: *mut i32, size: usize) {
    if buffer.is_null() {
        return;
    }
    // SAFETY: the pointer and length came from a boxed slice in tilesolve_solve
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(buffer, size)) });
}
