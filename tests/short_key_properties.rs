use proptest::prelude::*;
use short_key_mcp_server::domains::short_key::{
    ALPHABET, MIN_LENGTH, ShortKeyError, decode, encode, try_encode,
};

proptest! {
    #[test]
    fn test_decode_inverts_encode(id: u64) {
        prop_assert_eq!(decode(&encode(id)), Ok(id));
    }

    #[test]
    fn test_six_digit_range_stays_six_chars(id in 1u64..60u64.pow(6)) {
        let key = encode(id);
        prop_assert_eq!(key.len(), MIN_LENGTH);
        prop_assert_eq!(decode(&key), Ok(id));
    }

    #[test]
    fn test_encode_uses_only_alphabet(id: u64) {
        let key = encode(id);
        prop_assert!(key.len() >= MIN_LENGTH);
        prop_assert!(key.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_encode_preserves_order_within_fixed_width(a in 0u64..60u64.pow(6), b in 0u64..60u64.pow(6)) {
        // Same-length keys compare like their ids (ASCII order matches digit order)
        prop_assert_eq!(encode(a).cmp(&encode(b)), a.cmp(&b));
    }

    #[test]
    fn test_negative_ids_rejected(id in i64::MIN..0) {
        prop_assert_eq!(try_encode(id), Err(ShortKeyError::InvalidArgument(id)));
    }

    #[test]
    fn test_foreign_character_is_named(prefix in "[0-9A-HJ-Za-km-z]{0,5}", bad in "[^0-9A-HJ-Za-km-z]") {
        let key = format!("{}{}", prefix, bad);
        let expected = bad.chars().next().unwrap();
        prop_assert_eq!(decode(&key), Err(ShortKeyError::InvalidCharacter(expected)));
    }

    #[test]
    fn test_leading_padding_is_ignored(id: u64, pad in 0usize..4) {
        let key = format!("{}{}", "0".repeat(pad), encode(id));
        prop_assert_eq!(decode(&key), Ok(id));
    }
}
