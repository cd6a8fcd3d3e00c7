//! Popcount implementations with compile-time switching.
//!
//! Two strategies, selected via feature flag:
//!
//! - Default: Uses Rust's `count_ones()`, which lowers to the native
//!   population-count instruction where available
//! - `portable-popcount`: Uses the classic parallel bitwise algorithm
//!   (no reliance on instruction selection)
//!
//! Bits above a vector's logical length never reach these functions; the
//! storage layer keeps its boundary word masked.

/// Popcount a single u64 word.
#[inline(always)]
pub fn popcount_word(word: u64) -> u32 {
    #[cfg(feature = "portable-popcount")]
    {
        popcount_word_portable(word)
    }

    #[cfg(not(feature = "portable-popcount"))]
    {
        word.count_ones()
    }
}

/// Popcount multiple words, returning the total.
#[inline]
pub fn popcount_words(words: &[u64]) -> u32 {
    let mut total = 0u32;
    for &word in words {
        total += popcount_word(word);
    }
    total
}

/// Portable bitwise popcount (no intrinsics).
///
/// Uses the classic parallel bit-counting algorithm.
#[inline(always)]
#[cfg(feature = "portable-popcount")]
fn popcount_word_portable(mut x: u64) -> u32 {
    const M1: u64 = 0x5555_5555_5555_5555; // 01010101...
    const M2: u64 = 0x3333_3333_3333_3333; // 00110011...
    const M4: u64 = 0x0f0f_0f0f_0f0f_0f0f; // 00001111...
    const H01: u64 = 0x0101_0101_0101_0101; // sum helper

    x = x - ((x >> 1) & M1);
    x = (x & M2) + ((x >> 2) & M2);
    x = (x + (x >> 4)) & M4;
    ((x.wrapping_mul(H01)) >> 56) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popcount_word_basic() {
        assert_eq!(popcount_word(0), 0);
        assert_eq!(popcount_word(1), 1);
        assert_eq!(popcount_word(u64::MAX), 64);
        assert_eq!(popcount_word(0xAAAA_AAAA_AAAA_AAAA), 32);
        assert_eq!(popcount_word(0x8000_0000_0000_0001), 2);
    }

    #[test]
    fn test_popcount_words_sums() {
        let words = [0u64, 1, 3, 7, u64::MAX];
        assert_eq!(popcount_words(&words), 70);
        assert_eq!(popcount_words(&[]), 0);
    }

    #[test]
    fn test_popcount_matches_count_ones() {
        let mut x = 0x0123_4567_89AB_CDEFu64;
        for _ in 0..64 {
            assert_eq!(popcount_word(x), x.count_ones());
            x = x.rotate_left(7) ^ 0x9E37_79B9_7F4A_7C15;
        }
    }
}
