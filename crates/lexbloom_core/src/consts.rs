// crates/lexbloom_core/src/consts.rs

/// Bytes of the BLAKE3 output kept as the word digest.
pub const DIGEST_LEN: usize = 16;
/// Bytes per probe window (read big-endian).
pub const WINDOW_LEN: usize = 2;
/// Distinct values a single window can take.
pub const WINDOW_SPACE: usize = 1 << (8 * WINDOW_LEN);

/// Upper bound on `k`; past `DIGEST_LEN / WINDOW_LEN` probes only repeat earlier windows anyway.
pub const MAX_PROBES: usize = 64;

pub const DEFAULT_NUM_BITS: usize = 8_000_000;
pub const DEFAULT_NUM_PROBES: usize = 7;

const _: () = { assert!(DIGEST_LEN >= WINDOW_LEN); };
