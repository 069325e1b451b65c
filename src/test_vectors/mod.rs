//! Known answer tests. The CBC `kerckhoffs` vectors are taken from
//! [RFC 7518 Appendix B](https://www.rfc-editor.org/rfc/rfc7518.html#appendix-B),
//! the remaining ones were generated with OpenSSL.

use lazy_static::lazy_static;
use serde::{Deserialize, Deserializer};

use crate::crypto::content_encryption::ContentEncryption;

#[derive(Deserialize, Debug, Clone)]
pub struct ContentEncryptionTest {
    pub name: String,
    #[serde(deserialize_with = "algorithm_from_str")]
    pub enc: ContentEncryption,
    #[serde(deserialize_with = "vec_from_hex_str")]
    pub cek: Vec<u8>,
    #[serde(deserialize_with = "vec_from_hex_str")]
    pub iv: Vec<u8>,
    #[serde(deserialize_with = "vec_from_hex_str")]
    pub plain_text: Vec<u8>,
    #[serde(deserialize_with = "vec_from_hex_str")]
    pub aad: Vec<u8>,
    #[serde(deserialize_with = "vec_from_hex_str")]
    pub cipher_text: Vec<u8>,
    #[serde(deserialize_with = "vec_from_hex_str")]
    pub tag: Vec<u8>,
}

fn vec_from_hex_str<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let hex_str = String::deserialize(deserializer)?;
    hex::decode(hex_str).map_err(serde::de::Error::custom)
}

fn algorithm_from_str<'de, D>(deserializer: D) -> Result<ContentEncryption, D::Error>
where
    D: Deserializer<'de>,
{
    let identifier = String::deserialize(deserializer)?;
    identifier.parse().map_err(serde::de::Error::custom)
}

lazy_static! {
    static ref TEST_VECTORS: Vec<ContentEncryptionTest> = {
        let json = include_str!("content-encryption.json");
        serde_json::from_str(json).expect("Failed to parse test vectors")
    };
}

pub fn get_test_vector(name: &str) -> &'static ContentEncryptionTest {
    TEST_VECTORS
        .iter()
        .find(|v| v.name == name)
        .unwrap_or_else(|| panic!("No test vector named {name}"))
}

pub fn get_test_vectors(
    algorithm: ContentEncryption,
) -> impl Iterator<Item = &'static ContentEncryptionTest> {
    TEST_VECTORS.iter().filter(move |v| v.enc == algorithm)
}
