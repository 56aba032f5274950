//! Closed-form Bloom filter estimates.

/// Expected false-positive rate `(1 - e^(-k·n/m))^k` after `n` distinct inserts.
///
/// Returns `0.0` for an empty filter and `1.0` when `m == 0`.
pub fn false_positive_rate(m: usize, k: usize, n: usize) -> f64 {
    if n == 0 || k == 0 {
        return 0.0;
    }
    if m == 0 {
        return 1.0;
    }
    let (m, k, n) = (m as f64, k as f64, n as f64);
    (1.0 - (-k * n / m).exp()).powf(k)
}

/// Distinct items `n` after which the expected rate reaches `p`, solving the formula above for `n`.
pub fn capacity_for_rate(m: usize, k: usize, p: f64) -> usize {
    if m == 0 || k == 0 || !(p > 0.0 && p < 1.0) {
        return 0;
    }
    let (mf, kf) = (m as f64, k as f64);
    let n = -(mf / kf) * (1.0 - p.powf(1.0 / kf)).ln();
    n.floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_has_no_false_positives() {
        assert_eq!(false_positive_rate(1000, 3, 0), 0.0);
    }

    #[test]
    fn known_values() {
        // m/n = 10, k = 7: textbook ~0.82%
        let p = false_positive_rate(10_000, 7, 1_000);
        assert!((p - 0.008_19).abs() < 1e-4, "p = {p}");
        // reference vocabulary sizing
        let p = false_positive_rate(8_000_000, 7, 235_000);
        assert!(p < 1e-5, "p = {p}");
    }

    #[test]
    fn grows_with_n() {
        let mut prev = 0.0;
        for n in [10, 100, 1_000, 10_000, 100_000] {
            let p = false_positive_rate(65_536, 7, n);
            assert!(p >= prev);
            prev = p;
        }
        assert!(prev > 0.99);
    }

    #[test]
    fn capacity_inverts_rate() {
        let n = capacity_for_rate(65_536, 7, 0.01);
        let p = false_positive_rate(65_536, 7, n);
        assert!(p <= 0.01 && p > 0.009, "n = {n}, p = {p}");
        assert_eq!(capacity_for_rate(65_536, 7, 1.5), 0);
    }
}
