use std::{fmt, str::FromStr};

use super::provider::HashAlgorithm;
use crate::error::CipherError;

/// Depicts which content encryption algorithm is used for a JWE payload,
/// see [RFC 7518 5.1](https://www.rfc-editor.org/rfc/rfc7518.html#section-5.1)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ContentEncryption {
    /// encryption: AES CBC 128, authentication: HMAC SHA256 truncated to 128 bit
    A128CbcHs256,
    /// encryption: AES CBC 192, authentication: HMAC SHA384 truncated to 192 bit
    A192CbcHs384,
    /// encryption: AES CBC 256, authentication: HMAC SHA512 truncated to 256 bit
    A256CbcHs512,
    /// AES GCM with a 128 bit key
    A128Gcm,
    /// AES GCM with a 192 bit key
    A192Gcm,
    /// AES GCM with a 256 bit key
    A256Gcm,
}

/// The two families of content encryption
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CipherMode {
    /// AES CBC with PKCS#7 padding, authenticated by a truncated HMAC (Encrypt-then-MAC)
    CbcHmac,
    /// AES GCM with a 96 bit IV and a 128 bit tag
    Gcm,
}

/// Length requirements of a content encryption algorithm
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ContentEncryptionParams {
    pub algorithm: ContentEncryption,
    pub mode: CipherMode,
    /// length of the raw AES key
    pub key_len: usize,
    /// length of the content encryption key, for CBC this includes the MAC key
    pub cek_len: usize,
    pub iv_len: usize,
    pub tag_len: usize,
    /// hash of the HMAC authenticating CBC cipher texts, always the one
    /// [`HashAlgorithm::from_key_bits`] selects for `key_len`
    pub hash: Option<HashAlgorithm>,
}

pub type ContentEncryptionParamsRef = &'static ContentEncryptionParams;

pub(crate) const CBC_IV_LEN: usize = 16;
pub(crate) const GCM_IV_LEN: usize = 12;
pub(crate) const GCM_TAG_LEN: usize = 16;

static A128CBC_HS256: ContentEncryptionParams = ContentEncryptionParams {
    algorithm: ContentEncryption::A128CbcHs256,
    mode: CipherMode::CbcHmac,
    key_len: 16,
    cek_len: 32,
    iv_len: CBC_IV_LEN,
    tag_len: 16,
    hash: Some(HashAlgorithm::Sha256),
};

static A192CBC_HS384: ContentEncryptionParams = ContentEncryptionParams {
    algorithm: ContentEncryption::A192CbcHs384,
    mode: CipherMode::CbcHmac,
    key_len: 24,
    cek_len: 48,
    iv_len: CBC_IV_LEN,
    tag_len: 24,
    hash: Some(HashAlgorithm::Sha384),
};

static A256CBC_HS512: ContentEncryptionParams = ContentEncryptionParams {
    algorithm: ContentEncryption::A256CbcHs512,
    mode: CipherMode::CbcHmac,
    key_len: 32,
    cek_len: 64,
    iv_len: CBC_IV_LEN,
    tag_len: 32,
    hash: Some(HashAlgorithm::Sha512),
};

static A128GCM: ContentEncryptionParams = ContentEncryptionParams {
    algorithm: ContentEncryption::A128Gcm,
    mode: CipherMode::Gcm,
    key_len: 16,
    cek_len: 16,
    iv_len: GCM_IV_LEN,
    tag_len: GCM_TAG_LEN,
    hash: None,
};

static A192GCM: ContentEncryptionParams = ContentEncryptionParams {
    algorithm: ContentEncryption::A192Gcm,
    mode: CipherMode::Gcm,
    key_len: 24,
    cek_len: 24,
    iv_len: GCM_IV_LEN,
    tag_len: GCM_TAG_LEN,
    hash: None,
};

static A256GCM: ContentEncryptionParams = ContentEncryptionParams {
    algorithm: ContentEncryption::A256Gcm,
    mode: CipherMode::Gcm,
    key_len: 32,
    cek_len: 32,
    iv_len: GCM_IV_LEN,
    tag_len: GCM_TAG_LEN,
    hash: None,
};

impl From<ContentEncryption> for ContentEncryptionParamsRef {
    fn from(algorithm: ContentEncryption) -> Self {
        match algorithm {
            ContentEncryption::A128CbcHs256 => &A128CBC_HS256,
            ContentEncryption::A192CbcHs384 => &A192CBC_HS384,
            ContentEncryption::A256CbcHs512 => &A256CBC_HS512,
            ContentEncryption::A128Gcm => &A128GCM,
            ContentEncryption::A192Gcm => &A192GCM,
            ContentEncryption::A256Gcm => &A256GCM,
        }
    }
}

impl ContentEncryption {
    /// All supported algorithms, CBC family first
    pub const ALL: [ContentEncryption; 6] = [
        ContentEncryption::A128CbcHs256,
        ContentEncryption::A192CbcHs384,
        ContentEncryption::A256CbcHs512,
        ContentEncryption::A128Gcm,
        ContentEncryption::A192Gcm,
        ContentEncryption::A256Gcm,
    ];

    /// Returns the length requirements of this algorithm
    pub fn params(self) -> ContentEncryptionParamsRef {
        self.into()
    }

    /// The JOSE `enc` header value, e.g. `A128CBC-HS256`
    pub fn as_str(self) -> &'static str {
        match self {
            ContentEncryption::A128CbcHs256 => "A128CBC-HS256",
            ContentEncryption::A192CbcHs384 => "A192CBC-HS384",
            ContentEncryption::A256CbcHs512 => "A256CBC-HS512",
            ContentEncryption::A128Gcm => "A128GCM",
            ContentEncryption::A192Gcm => "A192GCM",
            ContentEncryption::A256Gcm => "A256GCM",
        }
    }

    pub fn mode(self) -> CipherMode {
        self.params().mode
    }

    pub fn cek_byte_length(self) -> usize {
        self.params().cek_len
    }

    pub fn iv_byte_length(self) -> usize {
        self.params().iv_len
    }

    pub fn tag_byte_length(self) -> usize {
        self.params().tag_len
    }
}

impl fmt::Display for ContentEncryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentEncryption {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentEncryption::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| {
                log::debug!("Unknown content encryption algorithm {s}");
                CipherError::UnsupportedAlgorithm(s.to_owned())
            })
    }
}

impl TryFrom<&str> for ContentEncryption {
    type Error = CipherError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
