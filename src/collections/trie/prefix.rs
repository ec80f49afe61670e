//! Byte-prefix primitives.
//!
//! The two functions here look alike but answer different questions and are not
//! interchangeable: insertion needs to know *how far* a label and a key agree so it
//! can decide where to split, while lookup only needs to know *whether* a label is
//! consumed verbatim and what remains afterwards.

/// Returns the number of leading bytes on which `a` and `b` agree.
///
/// The result never exceeds the shorter of the two lengths. Used by insertion to
/// pick one of the five structural cases.
#[inline]
pub fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

/// Consumes `label` from the front of `input`.
///
/// Returns the remaining tail of `input` if it starts with exactly `label`, and
/// `None` otherwise. An empty label always matches and returns `input` unchanged.
#[inline]
pub fn match_literal<'a>(label: &[u8], input: &'a [u8]) -> Option<&'a [u8]> {
    input.strip_prefix(label)
}
