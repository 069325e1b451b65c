//! # JOSE content encryption
//! This library implements the content encryption algorithms of [RFC 7518 5](https://www.rfc-editor.org/rfc/rfc7518.html#section-5),
//! as used by JSON Web Encryption (JWE):
//!
//! - `A128CBC-HS256`, `A192CBC-HS384`, `A256CBC-HS512`: AES-CBC with an HMAC-SHA2 tag, see [RFC 7518 5.2](https://www.rfc-editor.org/rfc/rfc7518.html#section-5.2)
//! - `A128GCM`, `A192GCM`, `A256GCM`: AES-GCM, see [RFC 7518 5.3](https://www.rfc-editor.org/rfc/rfc7518.html#section-5.3)
//!
//! ```
//! use jose_aes::{AesCipher, ContentEncryption, DecryptParams, EncryptParams};
//!
//! let cipher = AesCipher::default();
//! let algorithm: ContentEncryption = "A256GCM".parse().unwrap();
//! let cek = cipher.generate_cek(algorithm).unwrap();
//!
//! let encrypted = cipher
//!     .encrypt(EncryptParams {
//!         algorithm,
//!         cek: &cek,
//!         plain_text: b"Live long and prosper.",
//!         aad: b"protected header",
//!         iv: None,
//!     })
//!     .unwrap();
//!
//! let plain_text = cipher
//!     .decrypt(DecryptParams {
//!         algorithm,
//!         cek: &cek,
//!         cipher_text: &encrypted.cipher_text,
//!         tag: &encrypted.tag,
//!         iv: &encrypted.iv,
//!         aad: b"protected header",
//!     })
//!     .unwrap();
//! assert_eq!(plain_text, b"Live long and prosper.");
//! ```
//!
//! # Optional features
//!
//! The primitives are provided by one of several crypto libraries. Multiple backends may be enabled at the same time,
//! each is usable explicitly via [`AesCipher::new`](cipher::aes_cipher::AesCipher::new). The [`DefaultProvider`] is
//! chosen in the order `rust-crypto`, `openssl`, `ring`. At least one backend has to be enabled.
//!
//! - **`rust-crypto`** *(enabled by default)*: Uses the pure rust implementations of [RustCrypto](https://github.com/RustCrypto),
//!   which allows compilation to Wasm32.
//! - **`openssl`**: Uses the [rust-openssl](https://crates.io/crates/openssl) crate, which provides bindings to OpenSSL.
//!   Per default the OpenSSL library is locally compiled and then statically linked. The build process requires a C compiler,
//!   `perl` (and `perl-core`), and `make`. For further options see the [openssl crate documentation](https://docs.rs/openssl/0.10.55/openssl/).
//! - **`ring`**: Uses the [ring](https://crates.io/crates/ring) library.
//!   AES-CBC and AES-192-GCM are not supported, the `*CBC-HS*` algorithms and `A192GCM` fail with
//!   [`CipherError::UnsupportedAlgorithm`](error::CipherError::UnsupportedAlgorithm).

#![deny(clippy::missing_panics_doc)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
#![warn(
    // missing_docs,
    clippy::doc_markdown,
    clippy::semicolon_if_nothing_returned,
    clippy::single_match_else,
    clippy::inconsistent_struct_constructor,
    clippy::map_unwrap_or,
    clippy::match_same_arms
)]

mod crypto;
#[cfg(test)]
mod util;

/// content ciphers and the façade dispatching between them
pub mod cipher;
/// error definitions
pub mod error;

pub use cipher::{
    AesCipher, CipherOutput, ContentCipher, DecryptParams, EncryptParams, EncryptedContent,
};
pub use crypto::{
    content_encryption::{CipherMode, ContentEncryption, ContentEncryptionParams},
    provider::{CryptoProvider, HashAlgorithm},
    DefaultProvider,
};

#[cfg(feature = "openssl")]
pub use crypto::openssl::OpenSsl;
#[cfg(feature = "ring")]
pub use crypto::ring::Ring;
#[cfg(feature = "rust-crypto")]
pub use crypto::rust_crypto::RustCrypto;

#[cfg(test)]
pub mod test_vectors;
