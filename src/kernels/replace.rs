//! Element-wise replace.
//!
//! Preconditions (destination size, overlap) are checked by the caller; these
//! kernels only write.

/// `dst[i] = if src[i] == old { new } else { src[i] }` for `i < src.len()`.
///
/// Elements of `dst` past `src.len()` are left untouched.
pub(crate) fn replace<T, E>(src: &[T], dst: &mut [T], old: &T, new: &T, eq: &E)
where
    T: Clone,
    E: Fn(&T, &T) -> bool,
{
    debug_assert!(dst.len() >= src.len());
    for (out, x) in dst.iter_mut().zip(src) {
        *out = if eq(x, old) { new.clone() } else { x.clone() };
    }
}

/// Overwrites every element equal to `old` with `new`.
pub(crate) fn replace_in_place<T, E>(buf: &mut [T], old: &T, new: &T, eq: &E)
where
    T: Clone,
    E: Fn(&T, &T) -> bool,
{
    for x in buf.iter_mut() {
        if eq(x, old) {
            *x = new.clone();
        }
    }
}
