//! Age passphrase backend.
//!
//! Wraps age's scrypt recipient: a fresh salt and file key per encryption,
//! ChaCha20-Poly1305 payload, ASCII armor encoding.

use std::io::{Read, Write};

use ::age::scrypt;
use ::age::secrecy::SecretString;
use tracing::trace;

use super::Cipher;
use crate::error::{CipherError, Result};

/// Age-based passphrase backend
pub struct Age;

impl Cipher for Age {
    fn name(&self) -> &'static str {
        "age"
    }

    fn encrypt(&self, plaintext: &str, passphrase: &str) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let encryptor =
            age::Encryptor::with_user_passphrase(SecretString::from(passphrase.to_string()));

        let mut encrypted = Vec::new();
        let mut writer = encryptor
            .wrap_output(age::armor::ArmoredWriter::wrap_output(
                &mut encrypted,
                age::armor::Format::AsciiArmor,
            )?)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        writer.write_all(plaintext.as_bytes())?;
        let armored = writer
            .finish()
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
        armored
            .finish()
            .map_err(|e| CipherError::EncryptionFailed(format!("armor: {}", e)))?;

        trace!(ciphertext_len = encrypted.len(), "encrypted");

        String::from_utf8(encrypted)
            .map_err(|e| CipherError::EncryptionFailed(format!("UTF-8 error: {}", e)).into())
    }

    fn decrypt(&self, ciphertext: &str, passphrase: &str) -> Result<String> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let reader = age::armor::ArmoredReader::new(ciphertext.trim_start().as_bytes());
        let decryptor = age::Decryptor::new(reader)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        let identity = scrypt::Identity::new(SecretString::from(passphrase.to_string()));
        let mut reader = decryptor
            .decrypt(std::iter::once(&identity as &dyn age::Identity))
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        let mut decrypted = Vec::new();
        reader
            .read_to_end(&mut decrypted)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        trace!(plaintext_len = decrypted.len(), "decrypted");

        String::from_utf8(decrypted)
            .map_err(|e| CipherError::DecryptionFailed(format!("UTF-8 error: {}", e)).into())
    }
}
