//! Ordinal case-insensitive string primitives
//!
//! Species names appear with inconsistent capitalization across census rows
//! ("Red Maple", "red maple", "ACER RUBRUM"), so every string comparison in
//! the query layer goes through these helpers. All of them fold ASCII case
//! byte-wise (ordinal), never through locale-aware collation.
//!
//! `eq_ignore_case`, `cmp_ignore_case`, and `hash_ignore_case` agree with each
//! other: two strings compare equal iff they hash identically iff they order
//! as `Equal`.

use std::cmp::Ordering;
use std::hash::Hasher;

/// Ordinal case-insensitive equality.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Ordinal case-insensitive ordering (lowercased byte comparison).
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|b| b.to_ascii_lowercase());
    let b = b.bytes().map(|b| b.to_ascii_lowercase());
    a.cmp(b)
}

/// True when `haystack` contains `needle` as a case-insensitive substring.
///
/// The empty needle matches every haystack, including the empty one.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();

    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }

    haystack
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

/// Feed the case-folded bytes of `s` into a hasher.
///
/// The 0xff terminator keeps adjacent fields prefix-free, the same scheme
/// `str`'s own `Hash` impl uses. Consistent with `eq_ignore_case`: equal
/// strings produce identical hasher input.
pub fn hash_ignore_case<H: Hasher>(s: &str, state: &mut H) {
    for byte in s.bytes() {
        state.write_u8(byte.to_ascii_lowercase());
    }
    state.write_u8(0xff);
}
