// tests/crypto_tests.rs
mod common;
use common::test_master_key;

use youtube_key_vault::aliases::PlainApiKey;
use youtube_key_vault::consts::IV_HEX_LEN;
use youtube_key_vault::crypto::{decrypt_api_key, encrypt_api_key};
use youtube_key_vault::error::CoreError;
use youtube_key_vault::key_ops::generate_master_key;

#[test]
fn test_encrypt_decrypt_roundtrip() {
    let key = test_master_key();
    let plaintext = PlainApiKey::new("AIzaSyTESTKEY1234567890".to_string());

    let encrypted = encrypt_api_key(&plaintext, &key).unwrap();
    assert_eq!(encrypted.iv.len(), IV_HEX_LEN);
    assert!(!encrypted.ciphertext.is_empty());
    assert!(encrypted.ciphertext.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(encrypted.iv.chars().all(|c| c.is_ascii_hexdigit()));

    let decrypted = decrypt_api_key(&encrypted.ciphertext, &encrypted.iv, &key).unwrap();
    assert_eq!(decrypted.expose_secret(), "AIzaSyTESTKEY1234567890");
}

#[test]
fn test_encryption_is_nondeterministic() {
    let key = test_master_key();
    let plaintext = PlainApiKey::new("AIzaSyTESTKEY1234567890".to_string());

    let first = encrypt_api_key(&plaintext, &key).unwrap();
    let second = encrypt_api_key(&plaintext, &key).unwrap();

    assert_ne!(first.iv, second.iv);
    assert_ne!(first.ciphertext, second.ciphertext);

    // Both still decrypt to the same key
    let a = decrypt_api_key(&first.ciphertext, &first.iv, &key).unwrap();
    let b = decrypt_api_key(&second.ciphertext, &second.iv, &key).unwrap();
    assert_eq!(a.expose_secret(), b.expose_secret());
}

#[test]
fn test_decrypt_fails_with_wrong_master_key() {
    let key = test_master_key();
    let other = generate_master_key();
    let plaintext = PlainApiKey::new("AIzaSyTESTKEY1234567890".to_string());

    let encrypted = encrypt_api_key(&plaintext, &key).unwrap();
    let result = decrypt_api_key(&encrypted.ciphertext, &encrypted.iv, &other);
    assert!(matches!(result, Err(CoreError::Decryption)));
}

#[test]
fn test_decrypt_fails_with_tampered_iv() {
    let key = test_master_key();
    // 15 bytes: a single padded block, so the IV reaches the padding byte
    let plaintext = PlainApiKey::new("AIzaSyTESTKEY12".to_string());

    let encrypted = encrypt_api_key(&plaintext, &key).unwrap();

    let mut iv_bytes = hex::decode(&encrypted.iv).unwrap();
    iv_bytes[15] ^= 0x10;
    let tampered = hex::encode(iv_bytes);

    let result = decrypt_api_key(&encrypted.ciphertext, &tampered, &key);
    assert!(matches!(result, Err(CoreError::Decryption)));
}

#[test]
fn test_decrypt_fails_with_iv_from_other_encryption() {
    let key = test_master_key();
    let plaintext = PlainApiKey::new("AIzaSyTESTKEY1234567890".to_string());

    let first = encrypt_api_key(&plaintext, &key).unwrap();
    let second = encrypt_api_key(&plaintext, &key).unwrap();

    let result = decrypt_api_key(&first.ciphertext, &second.iv, &key);
    assert!(matches!(result, Err(CoreError::Decryption)));
}

#[test]
fn test_decrypt_rejects_malformed_hex_without_panicking() {
    let key = test_master_key();
    let encrypted = encrypt_api_key(&PlainApiKey::new("AIzaSyTESTKEY1234567890".to_string()), &key)
        .unwrap();

    // Odd-length ciphertext hex
    let odd = &encrypted.ciphertext[..encrypted.ciphertext.len() - 1];
    assert!(matches!(
        decrypt_api_key(odd, &encrypted.iv, &key),
        Err(CoreError::Decryption)
    ));

    // Non-hex characters
    assert!(matches!(
        decrypt_api_key("zz11", &encrypted.iv, &key),
        Err(CoreError::Decryption)
    ));

    // IV of the wrong byte length
    assert!(matches!(
        decrypt_api_key(&encrypted.ciphertext, "aabbccdd", &key),
        Err(CoreError::Decryption)
    ));

    // Empty and non-block-aligned ciphertexts
    assert!(matches!(
        decrypt_api_key("", &encrypted.iv, &key),
        Err(CoreError::Decryption)
    ));
    assert!(matches!(
        decrypt_api_key("aabb", &encrypted.iv, &key),
        Err(CoreError::Decryption)
    ));
}

#[test]
fn test_encrypt_rejects_invalid_plaintext() {
    let key = test_master_key();

    assert!(matches!(
        encrypt_api_key(&PlainApiKey::new(String::new()), &key),
        Err(CoreError::InvalidInput(_))
    ));

    assert!(matches!(
        encrypt_api_key(&PlainApiKey::new("AIza\nSy".to_string()), &key),
        Err(CoreError::InvalidInput(_))
    ));

    let oversized = "A".repeat(4096);
    assert!(matches!(
        encrypt_api_key(&PlainApiKey::new(oversized), &key),
        Err(CoreError::InvalidInput(_))
    ));
}

#[test]
fn test_ciphertext_never_contains_plaintext() {
    let key = test_master_key();
    let plaintext = PlainApiKey::new("AIzaSyTESTKEY1234567890".to_string());

    let encrypted = encrypt_api_key(&plaintext, &key).unwrap();
    assert!(!encrypted.ciphertext.contains("AIzaSy"));
    assert!(!encrypted
        .ciphertext
        .contains(&hex::encode("AIzaSyTESTKEY1234567890")));
}
