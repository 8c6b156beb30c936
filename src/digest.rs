//! Digest engine: SHA-256 over the canonical buffer.
//!
//! The raw 32-byte digest is the settlement ID. Hex is only a rendering for
//! text surfaces (logs, JSON, APIs) and is always lowercase without a prefix.

use soroban_sdk::{Bytes, BytesN, Env, String};

use crate::{ContractError, EncodingError};

pub const DIGEST_LEN: usize = 32;

/// SHA-256 via the host. No key, no salt, no truncation.
pub fn digest(env: &Env, canonical: &Bytes) -> BytesN<32> {
    env.crypto().sha256(canonical).into()
}

/// Lowercase hex, no prefix.
pub fn to_hex(id: &[u8; DIGEST_LEN]) -> Result<[u8; DIGEST_LEN * 2], EncodingError> {
    let mut out = [0u8; DIGEST_LEN * 2];
    hex::encode_to_slice(id, &mut out).map_err(|_| EncodingError::MalformedHex)?;
    Ok(out)
}

/// Parses 64 hex digits. Accepts either case so IDs copied out of other
/// systems' logs still parse.
pub fn from_hex(text: &str) -> Result<[u8; DIGEST_LEN], EncodingError> {
    let mut out = [0u8; DIGEST_LEN];
    hex::decode_to_slice(text, &mut out).map_err(|_| EncodingError::MalformedHex)?;
    Ok(out)
}

/// Renders a settlement ID as a host string for text-based interfaces.
pub fn to_hex_string(env: &Env, id: &BytesN<32>) -> Result<String, ContractError> {
    let rendered = to_hex(&id.to_array())?;
    let text = core::str::from_utf8(&rendered).map_err(|_| ContractError::EncodingError)?;
    Ok(String::from_str(env, text))
}
