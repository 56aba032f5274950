//! Fixed-size Bloom filter over caller-normalized words.
//!
//! Words are inserted and queried exactly as given; case folding or trimming
//! is up to the caller. `insert` needs `&mut self` and `query` only `&self`, so
//! sharing a filter across threads goes through a `Mutex` or `RwLock` on the
//! caller's side.

use crate::consts::{MAX_PROBES, WINDOW_SPACE};
use crate::errors::{FilterError, Result};
use crate::hashing;
use tracing::debug;

/// Bit count `m` and probe count `k`, fixed for the lifetime of a filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterParams {
    pub m: usize,
    pub k: usize,
}

impl FilterParams {
    pub fn new(m: usize, k: usize) -> Result<Self> {
        if m == 0 {
            return Err(FilterError::invalid("m", "bit array length must be positive"));
        }
        if k == 0 {
            return Err(FilterError::invalid("k", "probe count must be positive"));
        }
        if k > MAX_PROBES {
            return Err(FilterError::invalid(
                "k",
                format!("probe count {k} exceeds the maximum of {MAX_PROBES}"),
            ));
        }
        Ok(Self { m, k })
    }

    /// Bits a probe can actually land on: `min(m, 2^16)`.
    pub fn addressable_bits(&self) -> usize {
        self.m.min(WINDOW_SPACE)
    }
}

#[inline]
fn byte_len(m: usize) -> usize {
    m.div_ceil(8)
}

#[derive(Clone, Debug)]
pub struct WordFilter {
    params: FilterParams,
    bits: Vec<u8>,
    inserted: u64,
}

impl WordFilter {
    pub fn new(m: usize, k: usize) -> Result<Self> {
        Ok(Self::with_params(FilterParams::new(m, k)?))
    }

    pub fn with_params(params: FilterParams) -> Self {
        let bytes = byte_len(params.m);
        debug!(m = params.m, k = params.k, bytes, "allocating word filter");
        Self { params, bits: vec![0u8; bytes], inserted: 0 }
    }

    #[inline]
    fn probes(&self, word: &[u8]) -> impl Iterator<Item = usize> {
        hashing::probes(word, self.params.k, self.params.m)
    }

    #[inline]
    fn is_set(&self, bit: usize) -> bool {
        (self.bits[bit / 8] & (1u8 << (bit & 7))) != 0
    }

    fn set_probes(&mut self, word: &[u8]) {
        for bit in self.probes(word) {
            self.bits[bit / 8] |= 1u8 << (bit & 7);
        }
        self.inserted += 1;
    }

    pub fn insert(&mut self, word: &str) {
        self.set_probes(word.as_bytes());
    }

    /// `true` means possibly present, `false` means definitely absent.
    pub fn query(&self, word: &str) -> bool {
        self.probes(word.as_bytes()).all(|bit| self.is_set(bit))
    }

    /// Inserts undecoded bytes, rejecting them if they are not UTF-8.
    pub fn insert_raw(&mut self, word: &[u8]) -> Result<()> {
        let word = std::str::from_utf8(word)?;
        self.insert(word);
        Ok(())
    }

    pub fn query_raw(&self, word: &[u8]) -> Result<bool> {
        let word = std::str::from_utf8(word)?;
        Ok(self.query(word))
    }

    pub fn params(&self) -> FilterParams {
        self.params
    }

    pub fn num_bits(&self) -> usize {
        self.params.m
    }

    pub fn num_probes(&self) -> usize {
        self.params.k
    }

    pub fn addressable_bits(&self) -> usize {
        self.params.addressable_bits()
    }

    /// Read-only view of the packed bit array, LSB-first within each byte.
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn bit(&self, idx: usize) -> bool {
        idx < self.params.m && self.is_set(idx)
    }

    pub fn bits_set(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Number of `insert` calls, duplicates included.
    pub fn inserted(&self) -> u64 {
        self.inserted
    }

    pub fn is_empty(&self) -> bool {
        self.inserted == 0
    }

    /// Share of addressable bits currently set.
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.addressable_bits() as f64
    }

    /// Chance that a fresh word hits only set bits, judged from the current fill.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.fill_ratio().powi(self.params.k as i32)
    }

    /// Distinct words implied by the fill: `-(a/k)·ln(1 - X/a)` over `a` addressable bits.
    pub fn estimated_count(&self) -> f64 {
        let x = self.bits_set() as f64;
        let a = self.addressable_bits() as f64;
        let k = self.params.k as f64;
        if x >= a {
            return f64::INFINITY;
        }
        -(a / k) * (1.0 - x / a).ln()
    }

    pub fn size_bytes(&self) -> usize {
        self.bits.len()
    }
}

impl<S: AsRef<str>> Extend<S> for WordFilter {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}
