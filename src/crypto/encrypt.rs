// src/crypto/encrypt.rs
use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

use crate::aliases::{MasterKey32, PlainApiKey};
use crate::consts::{IV_LEN, MAX_API_KEY_LEN};
use crate::crypto::EncryptedApiKey;
use crate::error::CoreError;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;

/// Encrypt a plaintext API key → hex (ciphertext, iv) pair
///
/// Draws a fresh random 16-byte IV on every call, so encrypting the same
/// key twice yields different ciphertexts. The plaintext is validated
/// before any cipher state is touched and is never logged.
pub fn encrypt_api_key(
    plaintext: &PlainApiKey,
    key: &MasterKey32,
) -> Result<EncryptedApiKey, CoreError> {
    let api_key = plaintext.expose_secret();
    if api_key.is_empty() {
        return Err(CoreError::InvalidInput("API key must not be empty"));
    }
    if api_key.len() > MAX_API_KEY_LEN {
        return Err(CoreError::InvalidInput("API key is too long"));
    }
    if api_key.chars().any(char::is_control) {
        return Err(CoreError::InvalidInput(
            "API key must not contain control characters",
        ));
    }

    let mut iv = [0u8; IV_LEN];
    rand::rng().fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new(key.expose_secret().into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(api_key.as_bytes());

    Ok(EncryptedApiKey {
        ciphertext: hex::encode(ciphertext),
        iv: hex::encode(iv),
    })
}
