//! Seed derivation.
//!
//! Polynomial rolling hash over UTF-16 code units, folded to a signed 32-bit
//! integer at every step, then made non-negative. Not cryptographic.

/// Hash free text into a non-negative seed.
///
/// `h = ((h << 5) - h) + c` with 32-bit wrapping for every UTF-16 unit `c`,
/// returning `|h|`. `i32::MIN` maps to `2147483648`.
pub fn seed_from_text(text: &str) -> u64 {
    let hash = text.encode_utf16().fold(0i32, |h, unit| {
        (h << 5).wrapping_sub(h).wrapping_add(i32::from(unit))
    });
    i64::from(hash).unsigned_abs()
}

/// Concatenate parts in order, then hash.
///
/// Order matters: `["ab", "c"]` and `["a", "bc"]` share a seed, but
/// `["c", "ab"]` does not.
pub fn seed_from_parts<I, S>(parts: I) -> u64
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined: String = parts.into_iter().map(|p| p.as_ref().to_owned()).collect();
    seed_from_text(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_values() {
        assert_eq!(seed_from_text(""), 0);
        assert_eq!(seed_from_text("a"), 97);
        // 97 * 31 + 98
        assert_eq!(seed_from_text("ab"), 3105);
        // Classic String.hashCode of "hello" is 99162322
        assert_eq!(seed_from_text("hello"), 99_162_322);
    }

    #[test]
    fn test_negative_hash_is_folded() {
        // "polygenelubricants".hashCode() == Integer.MIN_VALUE
        assert_eq!(seed_from_text("polygenelubricants"), 2_147_483_648);
    }

    #[test]
    fn test_non_ascii_uses_utf16_units() {
        // U+1F600 is a surrogate pair: 0xD83D, 0xDE00
        let expected = {
            let h = 0xD83Di32;
            (h << 5).wrapping_sub(h).wrapping_add(0xDE00)
        };
        assert_eq!(seed_from_text("😀"), i64::from(expected).unsigned_abs());
    }

    #[test]
    fn test_parts_concatenate_in_order() {
        assert_eq!(seed_from_parts(["ab", "c"]), seed_from_text("abc"));
        assert_eq!(seed_from_parts(["a", "bc"]), seed_from_text("abc"));
        assert_ne!(seed_from_parts(["c", "ab"]), seed_from_text("abc"));
    }

    proptest! {
        #[test]
        fn prop_hash_is_stable(text in ".{0,64}") {
            prop_assert_eq!(seed_from_text(&text), seed_from_text(&text));
        }

        #[test]
        fn prop_seed_fits_in_31_bits_plus_one(text in ".{0,64}") {
            prop_assert!(seed_from_text(&text) <= 2_147_483_648);
        }
    }
}
