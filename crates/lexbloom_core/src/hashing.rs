//! Hash expansion: one digest per word, `k` probe positions cut out of it.
//!
//! The digest is the first [`DIGEST_LEN`] bytes of BLAKE3 over the word's UTF-8
//! bytes. Probe `i` reads the two-byte window starting at `(2 * i) mod len`
//! as a big-endian `u16` and reduces it modulo `m`. Once `2 * k` passes the
//! digest length the windows wrap to the front, so with a 16-byte digest probe
//! `i + 8` lands on the same window as probe `i`.
//!
//! A window that would read past the last digest byte is made of that last byte
//! twice. This never happens for an even-length digest; [`window`] still applies
//! the rule so arbitrary digests can be fed to it.
//!
//! Windows are 16 bits wide, so a filter never addresses more than
//! [`WINDOW_SPACE`](crate::consts::WINDOW_SPACE) distinct bits regardless of `m`.

use crate::consts::{DIGEST_LEN, WINDOW_LEN};
use crate::errors::Result;

pub type Digest = [u8; DIGEST_LEN];

pub fn digest(word: &[u8]) -> Digest {
    let h = blake3::hash(word);
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&h.as_bytes()[..DIGEST_LEN]);
    out
}

/// Window `i` of `digest` as a big-endian `u16`.
///
/// # Panics
///
/// Panics if `digest` is empty.
#[inline]
pub fn window(digest: &[u8], i: usize) -> u16 {
    let len = digest.len();
    assert!(len > 0, "window over an empty digest");
    let start = (i % len) * WINDOW_LEN % len;
    let last = len - 1;
    let (hi, lo) = if start < last {
        (digest[start], digest[start + 1])
    } else {
        (digest[last], digest[last])
    };
    u16::from_be_bytes([hi, lo])
}

/// The first `k` windows of `digest`; empty for an empty digest.
pub fn windows_of(digest: &[u8], k: usize) -> impl Iterator<Item = u16> + '_ {
    let k = if digest.is_empty() { 0 } else { k };
    (0..k).map(move |i| window(digest, i))
}

/// Lazily yields the `k` probe positions of `word` in `[0, m)`.
///
/// # Panics
///
/// Panics if `m == 0`.
#[inline]
pub fn probes(word: &[u8], k: usize, m: usize) -> impl Iterator<Item = usize> {
    assert!(m > 0, "probe range must be non-empty");
    let dig = digest(word);
    (0..k).map(move |i| window(&dig, i) as usize % m)
}

/// Probe positions of `word` for a filter of `m` bits and `k` probes.
///
/// # Panics
///
/// Panics if `m == 0`. [`WordFilter`](crate::WordFilter) rejects `m == 0` at
/// construction, so calls made through a filter never hit this.
pub fn expand(word: &str, k: usize, m: usize) -> Vec<usize> {
    probes(word.as_bytes(), k, m).collect()
}

/// Same as [`expand`] for undecoded bytes; fails if they are not UTF-8.
pub fn expand_raw(word: &[u8], k: usize, m: usize) -> Result<Vec<usize>> {
    let word = std::str::from_utf8(word)?;
    Ok(expand(word, k, m))
}
