/// Represents either success(T) or an failure ([`CipherError`])
pub type Result<T> = std::result::Result<T, CipherError>;

/// Represents an error which has occured during content encryption or decryption
#[derive(PartialEq, Eq, Debug, thiserror::Error)]
pub enum CipherError {
    /// the content encryption algorithm is unknown or not provided by the crypto backend
    #[error("Content encryption algorithm {0} is not supported")]
    UnsupportedAlgorithm(String),

    /// the content encryption key does not match the length required by the algorithm
    #[error("Invalid content encryption key length {actual}, expected {expected} bytes")]
    InvalidKeyLength {
        /// required length in bytes
        expected: usize,
        /// length of the provided key in bytes
        actual: usize,
    },

    /// the initialization vector does not match the length required by the algorithm
    #[error("Invalid initialization vector length {actual}, expected {expected} bytes")]
    InvalidIvLength {
        /// required length in bytes
        expected: usize,
        /// length of the provided IV in bytes
        actual: usize,
    },

    /// the crypto backend failed to encrypt
    #[error("Encryption failed")]
    EncryptionFailed,

    /// the crypto backend failed to decrypt already authenticated data, e.g. due to malformed padding
    #[error("Decryption failed")]
    DecryptionFailed,

    /// the authentication tag did not match the cipher text, IV and AAD
    #[error("Invalid authentication tag")]
    AuthenticationFailed,

    /// the random source of the crypto backend failed
    #[error("Failed to generate random bytes")]
    RandomGenerationFailed,
}
