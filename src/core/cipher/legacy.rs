//! Legacy aes256 backend.
//!
//! Reads and writes the 1.x database format: AES-256-CBC with PKCS#7
//! padding, key and IV from OpenSSL's `EVP_BytesToKey` (MD5, one round, no
//! salt), lowercase hex output. Identical plaintexts under the same
//! passphrase produce identical ciphertexts.

use aes::Aes256;
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use md5::{Digest, Md5};
use tracing::trace;
use zeroize::Zeroizing;

use super::Cipher;
use crate::error::{CipherError, Result};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

const KEY_LEN: usize = 32;
const IV_LEN: usize = 16;

/// aes256-cbc backend for 1.x databases
pub struct Legacy;

/// Derive key and IV bytes the way `EVP_BytesToKey(md5, salt = NULL, count = 1)` does.
///
/// `D_i = MD5(D_{i-1} || passphrase)`, concatenated until key and IV are filled.
fn derive_key_iv(passphrase: &[u8]) -> Zeroizing<[u8; KEY_LEN + IV_LEN]> {
    let mut material = Zeroizing::new([0u8; KEY_LEN + IV_LEN]);
    let mut previous: Zeroizing<Vec<u8>> = Zeroizing::new(Vec::new());
    let mut filled = 0;

    while filled < material.len() {
        let mut hasher = Md5::new();
        hasher.update(previous.as_slice());
        hasher.update(passphrase);
        let digest = hasher.finalize();

        let n = (material.len() - filled).min(digest.len());
        material[filled..filled + n].copy_from_slice(&digest[..n]);
        filled += n;
        previous.clear();
        previous.extend_from_slice(&digest);
    }

    material
}

impl Cipher for Legacy {
    fn name(&self) -> &'static str {
        "legacy"
    }

    fn encrypt(&self, plaintext: &str, passphrase: &str) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let material = derive_key_iv(passphrase.as_bytes());
        let (key, iv) = material.split_at(KEY_LEN);
        let encrypted = Aes256CbcEnc::new_from_slices(key, iv)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

        trace!(ciphertext_len = encrypted.len(), "encrypted");

        Ok(hex::encode(encrypted))
    }

    fn decrypt(&self, ciphertext: &str, passphrase: &str) -> Result<String> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let bytes = hex::decode(ciphertext.trim())
            .map_err(|e| CipherError::DecryptionFailed(format!("not a database: {}", e)))?;

        let material = derive_key_iv(passphrase.as_bytes());
        let (key, iv) = material.split_at(KEY_LEN);
        let decrypted = Aes256CbcDec::new_from_slices(key, iv)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?
            .decrypt_padded_vec_mut::<Pkcs7>(&bytes)
            .map_err(|_| CipherError::DecryptionFailed("bad decrypt".to_string()))?;

        trace!(plaintext_len = decrypted.len(), "decrypted");

        String::from_utf8(decrypted)
            .map_err(|e| CipherError::DecryptionFailed(format!("UTF-8 error: {}", e)).into())
    }
}
