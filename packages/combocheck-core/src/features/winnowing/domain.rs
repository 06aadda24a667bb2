//! Winnowing fingerprints
//!
//! 1. Hash every K-gram of the buffer with the polynomial
//!    `h(s) = s[0]*K^(K-1) + s[1]*K^(K-2) + ... + s[K-1]` over wrapping `u64`
//!    arithmetic, updated by rolling from one K-gram to the next.
//! 2. Slide a window of W consecutive hashes and keep its minimum. The
//!    tracked minimum is emitted when a new hash is strictly smaller, or when
//!    its position falls out of the window and the window is rescanned (the
//!    rightmost minimum wins the rescan).
//!
//! Every window of W consecutive K-grams has its tracked minimum inside it
//! at all times, so every such window contributes at least one value.
//!
//! A buffer of at most K bytes has no sliding to do: its fingerprint is the
//! single hash of the whole buffer.

/// Direct polynomial hash of one K-gram with base `base`
pub fn kgram_hash(gram: &[u8], base: u64) -> u64 {
    gram.iter()
        .fold(0u64, |hash, &symbol| hash.wrapping_mul(base).wrapping_add(symbol as u64))
}

/// Hash of every K-length window of `buffer`, in order.
///
/// Returns `buffer.len() - k + 1` values; empty if the buffer is shorter than `k`.
pub fn kgram_hashes(buffer: &[u8], k: usize) -> Vec<u64> {
    if k == 0 || buffer.len() < k {
        return Vec::new();
    }

    let base = k as u64;
    let lead = (1..k).fold(1u64, |power, _| power.wrapping_mul(base));

    let mut hashes = Vec::with_capacity(buffer.len() - k + 1);
    let mut hash = kgram_hash(&buffer[..k], base);
    hashes.push(hash);

    for start in 1..=buffer.len() - k {
        let outgoing = buffer[start - 1] as u64;
        let incoming = buffer[start + k - 1] as u64;
        hash = hash
            .wrapping_sub(outgoing.wrapping_mul(lead))
            .wrapping_mul(base)
            .wrapping_add(incoming);
        hashes.push(hash);
    }

    hashes
}

/// Position of the rightmost minimum of a non-empty slice
fn rightmost_min(values: &[u64]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate().skip(1) {
        if value <= values[best] {
            best = i;
        }
    }
    best
}

/// Select fingerprint values from a hash sequence with window `w`.
///
/// Fewer than `w` hashes form a single partial window.
pub fn winnow(hashes: &[u64], w: usize) -> Vec<u64> {
    if hashes.is_empty() {
        return Vec::new();
    }
    let w = w.max(1);
    let first_end = w.min(hashes.len());

    let mut selected = Vec::with_capacity(hashes.len() / w + 1);
    let mut min_pos = rightmost_min(&hashes[..first_end]);
    selected.push(hashes[min_pos]);

    for right in first_end..hashes.len() {
        let start = right + 1 - w;
        if min_pos < start {
            min_pos = start + rightmost_min(&hashes[start..=right]);
            selected.push(hashes[min_pos]);
        } else if hashes[right] < hashes[min_pos] {
            min_pos = right;
            selected.push(hashes[min_pos]);
        }
    }

    selected
}

/// Winnowing fingerprint of a buffer with K-gram width `k` and window `w`
pub fn fingerprint(buffer: &[u8], k: usize, w: usize) -> Vec<u64> {
    if buffer.len() <= k {
        return vec![kgram_hash(buffer, k as u64)];
    }
    winnow(&kgram_hashes(buffer, k), w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kgram_hash_polynomial() {
        // 'a'*3^2 + 'b'*3 + 'c' with base K = 3
        assert_eq!(kgram_hash(b"abc", 3), 97 * 9 + 98 * 3 + 99);
        assert_eq!(kgram_hash(b"", 5), 0);
    }

    #[test]
    fn test_rolling_matches_direct() {
        let buffer = b"int main(void) { return sum(a, b) * 42; }";
        for k in 1..8 {
            let rolled = kgram_hashes(buffer, k);
            assert_eq!(rolled.len(), buffer.len() - k + 1);
            for (start, hash) in rolled.iter().enumerate() {
                assert_eq!(*hash, kgram_hash(&buffer[start..start + k], k as u64));
            }
        }
    }

    #[test]
    fn test_rolling_wraps_like_direct() {
        let buffer = vec![0xFFu8; 200];
        let k = 64;
        let rolled = kgram_hashes(&buffer, k);
        assert_eq!(rolled[0], kgram_hash(&buffer[..k], k as u64));
        assert_eq!(rolled[100], kgram_hash(&buffer[100..100 + k], k as u64));
    }

    #[test]
    fn test_short_buffer_is_single_hash() {
        assert_eq!(fingerprint(b"abc", 5, 4), vec![kgram_hash(b"abc", 5)]);
        assert_eq!(fingerprint(b"abcde", 5, 4), vec![kgram_hash(b"abcde", 5)]);
        assert_eq!(fingerprint(b"", 5, 4), vec![0]);
    }

    #[test]
    fn test_winnow_first_window_rightmost_minimum() {
        assert_eq!(winnow(&[5, 1, 3, 1], 4), vec![1]);
    }

    #[test]
    fn test_winnow_strictly_smaller_emits() {
        // window 2: [9,7] -> 7, then 3 < 7 -> 3, then 3 still in window, 8 skipped
        assert_eq!(winnow(&[9, 7, 3, 8], 2), vec![7, 3]);
    }

    #[test]
    fn test_winnow_expired_minimum_rescans_rightmost() {
        // window 3: [1,5,6] -> 1; at index 3 window is [5,6,5]: 1 expired, rightmost 5
        let selected = winnow(&[1, 5, 6, 5, 9], 3);
        assert_eq!(selected, vec![1, 5]);
    }

    #[test]
    fn test_winnow_equal_values_do_not_reemit() {
        assert_eq!(winnow(&[4, 4, 4], 3), vec![4]);
        // position expires, rescan picks the rightmost 4
        assert_eq!(winnow(&[4, 4, 4, 4], 2), vec![4, 4]);
    }

    #[test]
    fn test_winnow_partial_window() {
        assert_eq!(winnow(&[8, 2, 6], 10), vec![2]);
        assert!(winnow(&[], 3).is_empty());
    }

    #[test]
    fn test_identical_buffers_identical_fingerprints() {
        let text = b"for (i = 0; i < n; i++) total += values[i];";
        assert_eq!(fingerprint(text, 5, 4), fingerprint(text, 5, 4));
    }
}
