// src/crypto/decrypt.rs
use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};

use crate::aliases::{MasterKey32, PlainApiKey};
use crate::consts::{AES_BLOCK_LEN, IV_LEN};
use crate::error::CoreError;

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Decrypt a hex (ciphertext, iv) pair → plaintext API key
///
/// Malformed hex, a wrong-length IV, a non-block-aligned ciphertext,
/// padding corruption from a foreign key or IV, and non-UTF-8 output all
/// collapse into `CoreError::Decryption`. Callers treat that as
/// "credential unusable", not as a retryable fault.
pub fn decrypt_api_key(
    ciphertext_hex: &str,
    iv_hex: &str,
    key: &MasterKey32,
) -> Result<PlainApiKey, CoreError> {
    let ciphertext = hex::decode(ciphertext_hex).map_err(|_| CoreError::Decryption)?;
    let iv_bytes = hex::decode(iv_hex).map_err(|_| CoreError::Decryption)?;
    let iv: [u8; IV_LEN] = iv_bytes.try_into().map_err(|_| CoreError::Decryption)?;

    if ciphertext.is_empty() || ciphertext.len() % AES_BLOCK_LEN != 0 {
        return Err(CoreError::Decryption);
    }

    let padded = Aes256CbcDec::new(key.expose_secret().into(), &iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|_| CoreError::Decryption)?;

    // An API key is always valid UTF-8; garbage from a foreign IV or key
    // that happens to survive the padding check dies here instead.
    let api_key = String::from_utf8(padded).map_err(|_| CoreError::Decryption)?;
    Ok(PlainApiKey::new(api_key))
}
