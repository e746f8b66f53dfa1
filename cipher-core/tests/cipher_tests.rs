#![allow(missing_docs)]
use cipher_core::alphabet::normalize;
use cipher_core::hill::{self, HillKey};
use cipher_core::playfair::{self, PlayfairMatrix};
use cipher_core::{
    CipherError, caesar, monoalphabetic, otp, polyalphabetic, rail_fence, row_column,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_caesar_textbook_vector() {
    assert_eq!(caesar::encrypt("HELLO", 3).result, "KHOOR");
    assert_eq!(caesar::decrypt("KHOOR", 3).result, "HELLO");
    assert_eq!(caesar::encrypt("HELLO", 3).key.as_deref(), Some("3"));
}

#[test]
fn test_caesar_identity_and_out_of_range_shifts() {
    assert_eq!(caesar::encrypt("Hello", 0).result, "HELLO");
    assert_eq!(caesar::encrypt("Hello", 26).result, "HELLO");
    assert_eq!(caesar::encrypt("XYZ", 29).result, "ABC");
    assert_eq!(caesar::encrypt("ABC", -3).result, caesar::encrypt("ABC", 23).result);
    assert_eq!(caesar::decrypt(&caesar::encrypt("ABC", i64::MAX).result, i64::MAX).result, "ABC");
}

#[test]
fn test_monoalphabetic_default_key() {
    let encrypted = monoalphabetic::encrypt("hello", monoalphabetic::DEFAULT_KEY);
    assert_eq!(encrypted.result, "ITSSG");
    assert_eq!(
        monoalphabetic::decrypt(&encrypted.result, monoalphabetic::DEFAULT_KEY).result,
        "HELLO"
    );
}

#[test]
fn test_monoalphabetic_identity_key_is_noop() {
    let identity = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    assert_eq!(
        monoalphabetic::encrypt("The quick brown fox", identity).result,
        "THEQUICKBROWNFOX"
    );
}

#[test]
fn test_monoalphabetic_short_key_passes_letters_through() {
    assert_eq!(monoalphabetic::encrypt("ABCD", "qwe").result, "QWED");
    assert_eq!(monoalphabetic::decrypt("QWED", "qwe").result, "ABCD");
}

#[test]
fn test_polyalphabetic_textbook_vector() {
    let encrypted = polyalphabetic::encrypt("Attack at dawn", "LEMON").unwrap();
    assert_eq!(encrypted.result, "LXFOPVEFRNHR");
    assert_eq!(encrypted.key.as_deref(), Some("LEMON"));
    let decrypted = polyalphabetic::decrypt(&encrypted.result, "lemon").unwrap();
    assert_eq!(decrypted.result, "ATTACKATDAWN");
}

#[test]
fn test_polyalphabetic_rejects_empty_keyword() {
    assert!(matches!(
        polyalphabetic::encrypt("HELLO", ""),
        Err(CipherError::InvalidKey(_))
    ));
    assert!(matches!(
        polyalphabetic::decrypt("HELLO", "123 !"),
        Err(CipherError::InvalidKey(_))
    ));
}

#[test]
fn test_playfair_hello() {
    let matrix = PlayfairMatrix::new("PLAYFAIR");
    assert_eq!(matrix.rows()[0], ['P', 'L', 'A', 'Y', 'F']);

    let encrypted = playfair::encrypt("HELLO", "PLAYFAIR").unwrap();
    assert_eq!(encrypted.result, "KGYVRV");
    let decrypted = playfair::decrypt(&encrypted.result, "PLAYFAIR").unwrap();
    assert_eq!(decrypted.result, "HELXLO");
}

#[test]
fn test_playfair_textbook_vector() {
    let key = "playfair example";
    let encrypted = playfair::encrypt("Hide the gold in the tree stump", key).unwrap();
    assert_eq!(encrypted.result, "BMODZBXDNABEKUDMUIXMMOUVIF");
    let decrypted = playfair::decrypt(&encrypted.result, key).unwrap();
    assert_eq!(decrypted.result, "HIDETHEGOLDINTHETREXESTUMP");
}

#[test]
fn test_playfair_decrypt_strips_one_trailing_pad() {
    let encrypted = playfair::encrypt("abc", playfair::DEFAULT_KEY).unwrap();
    assert_eq!(encrypted.result.len(), 4);
    let decrypted = playfair::decrypt(&encrypted.result, playfair::DEFAULT_KEY).unwrap();
    assert_eq!(decrypted.result, "ABC");
}

#[test]
fn test_playfair_decrypt_pads_odd_ciphertext() {
    let decrypted = playfair::decrypt("KGY", "PLAYFAIR").unwrap();
    assert_eq!(decrypted.result.len(), 4);
    assert!(decrypted.result.starts_with("HE"));
}

#[test]
fn test_rail_fence_textbook_vector() {
    let plaintext = "WEAREDISCOVEREDFLEEATONCE";
    let encrypted = rail_fence::encrypt(plaintext, 3);
    assert_eq!(encrypted.result, "WECRLTEERDSOEEFEAOCAIVDEN");
    assert_eq!(encrypted.key.as_deref(), Some("3"));
    assert_eq!(rail_fence::decrypt(&encrypted.result, 3).result, plaintext);
}

#[test]
fn test_rail_fence_clamps_and_handles_empty() {
    assert_eq!(rail_fence::encrypt("", 3).result, "");
    assert_eq!(rail_fence::decrypt("", 3).result, "");
    let clamped = rail_fence::encrypt("ABCDE", 1);
    assert_eq!(clamped.result, "ACEBD");
    assert_eq!(clamped.key.as_deref(), Some("2"));
    assert_eq!(rail_fence::decrypt("ACEBD", 0).result, "ABCDE");
}

#[test]
fn test_rail_fence_round_trip_many_rails() {
    let text = "The quick brown fox jumps over the lazy dog";
    for rails in 2..20 {
        let encrypted = rail_fence::encrypt(text, rails);
        assert_eq!(
            rail_fence::decrypt(&encrypted.result, rails).result,
            normalize(text),
            "rails = {rails}"
        );
    }
}

#[test]
fn test_hill_default_key_round_trip() {
    let encrypted = hill::encrypt("HI", &hill::DEFAULT_KEY).unwrap();
    assert_eq!(encrypted.result, "TC");
    assert_eq!(encrypted.key.as_deref(), Some("[[3,3],[2,5]]"));
    let decrypted = hill::decrypt(&encrypted.result, &hill::DEFAULT_KEY).unwrap();
    assert_eq!(decrypted.result, "HI");
}

#[test]
fn test_hill_pads_odd_length() {
    let encrypted = hill::encrypt("abc", &HillKey::default()).unwrap();
    assert_eq!(encrypted.result.len(), 4);
    let decrypted = hill::decrypt(&encrypted.result, &HillKey::default()).unwrap();
    assert_eq!(decrypted.result, "ABCX");
}

#[test]
fn test_hill_rejects_non_invertible_key() {
    let legacy = HillKey::new([[6, 24], [1, 8]]);
    assert!(!legacy.is_invertible());
    assert_eq!(hill::encrypt("HI", &legacy).unwrap().result, "AT");
    assert_eq!(
        hill::decrypt("AT", &legacy),
        Err(CipherError::NonInvertibleKey { determinant: 24 })
    );
}

#[test]
fn test_otp_round_trip_for_many_seeds() {
    let text = "Attack at dawn!";
    for seed in 0..64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let encrypted = otp::encrypt_with_rng(text, &mut rng);
        let key = encrypted.key.clone().unwrap();
        assert_eq!(key.len(), normalize(text).len());
        assert!(key.chars().all(|c| c.is_ascii_uppercase()));

        let decrypted = otp::decrypt(&encrypted.result, &key).unwrap();
        assert_eq!(decrypted.result, "ATTACKATDAWN", "seed = {seed}");
    }
}

#[test]
fn test_otp_fresh_key_each_call() {
    let first = otp::encrypt("the same message every time");
    let second = otp::encrypt("the same message every time");
    assert_eq!(first.key.as_ref().map(String::len), Some(23));
    assert_ne!(first.key, second.key);
}

#[test]
fn test_otp_known_pad() {
    let encrypted = otp::encrypt_with_key("HELLO", "XMCKL").unwrap();
    assert_eq!(encrypted.result, "EQNVZ");
    assert_eq!(otp::decrypt("EQNVZ", "xmckl").unwrap().result, "HELLO");
}

#[test]
fn test_otp_rejects_pad_of_wrong_length() {
    assert_eq!(
        otp::decrypt("EQNVZ", "XM"),
        Err(CipherError::KeyLengthMismatch {
            expected: 5,
            actual: 2
        })
    );
    assert!(otp::encrypt_with_key("HELLO", "TOOLONGKEY").is_err());
    assert!(otp::decrypt("", "").unwrap().result.is_empty());
}

#[test]
fn test_row_column_reads_columns_in_key_order() {
    let encrypted = row_column::encrypt("SECRETMESSAGE", "3 1 2").unwrap();
    assert_eq!(encrypted.result, "EEEAXCTSGXSRMSE");
    assert_eq!(encrypted.key.as_deref(), Some("3 1 2"));
    let decrypted = row_column::decrypt(&encrypted.result, "3,1,2").unwrap();
    assert_eq!(decrypted.result, "SECRETMESSAGEXX");
}

#[test]
fn test_row_column_identity_key() {
    let encrypted = row_column::encrypt("ABCDEF", "1 2 3").unwrap();
    assert_eq!(encrypted.result, "ADBECF");
    assert_eq!(row_column::decrypt("ADBECF", "1 2 3").unwrap().result, "ABCDEF");
}

#[test]
fn test_row_column_ragged_ciphertext_leaves_gaps() {
    assert_eq!(row_column::decrypt("ABCDE", "1 2 3").unwrap().result, "ACEBD");
}

#[test]
fn test_row_column_rejects_invalid_permutation() {
    for key in ["1 1 2", "", "CIPHER", "0 1 2", "1 3"] {
        assert!(
            matches!(
                row_column::encrypt("SECRET", key),
                Err(CipherError::InvalidPermutation(_))
            ),
            "encrypt accepted {key:?}"
        );
        assert!(
            matches!(
                row_column::decrypt("SECRET", key),
                Err(CipherError::InvalidPermutation(_))
            ),
            "decrypt accepted {key:?}"
        );
    }
}

#[test]
fn test_empty_text_everywhere() {
    assert_eq!(caesar::encrypt("", 3).result, "");
    assert_eq!(polyalphabetic::encrypt("", "KEY").unwrap().result, "");
    assert_eq!(playfair::encrypt("", "KEY").unwrap().result, "");
    assert_eq!(playfair::decrypt("", "KEY").unwrap().result, "");
    assert_eq!(hill::encrypt("", &HillKey::default()).unwrap().result, "");
    assert_eq!(otp::encrypt("").result, "");
    assert_eq!(row_column::encrypt("", "2 1").unwrap().result, "");
    assert_eq!(row_column::decrypt("", "2 1").unwrap().result, "");
}

#[test]
fn test_row_column_rejects_oversized_key_entries() {
    assert!(matches!(
        row_column::encrypt("ABCDEF", "2 1 99999999999999999999"),
        Err(CipherError::InvalidPermutation(_))
    ));
    assert!(matches!(
        row_column::decrypt("BDFACE", "2 1 99999999999999999999"),
        Err(CipherError::InvalidPermutation(_))
    ));
}
