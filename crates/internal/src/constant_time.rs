//! Constant-time operations to prevent timing attacks

use subtle::ConstantTimeEq;

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Only the length check short-circuits; lengths are public.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time comparison of two word slices
pub fn ct_eq_words(a: &[u32], b: &[u32]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}
