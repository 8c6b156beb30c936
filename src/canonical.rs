//! Canonical encoder for settlement ID preimages.
//!
//! ## Hash Input Ordering (schema version 1)
//!
//! Fields are serialized in this exact order, always:
//!
//! | Offset    | Field            | Width | Encoding                      |
//! |-----------|------------------|-------|-------------------------------|
//! | 0         | `schema_version` | 4     | u32 big-endian                |
//! | 4         | `remittance_id`  | 8     | u64 big-endian                |
//! | 12        | `sender`         | 44    | XDR account address           |
//! | 56        | `agent`          | 44    | XDR account address           |
//! | 100       | `amount`         | 16    | i128 big-endian, two's compl. |
//! | 116       | `fee`            | 16    | i128 big-endian, two's compl. |
//! | 132       | `expiry`         | 8     | u64 big-endian, zero if None  |
//!
//! No separators between fields. Fixed widths make the layout unambiguous.

use soroban_sdk::{Bytes, Env};

use crate::codec::{encode_address, encode_i128, encode_optional_u64, encode_u32, encode_u64};
use crate::schema::layout_for;
use crate::{EncodingError, FingerprintInput, CANONICAL_LEN};

/// Builds the canonical preimage as a fixed-size array.
///
/// The layout comes from the schema registry, so a version is encodable
/// exactly when it is registered. Every field is encoded before anything is
/// written, so a failure never leaves a partially filled buffer behind.
pub fn encode_canonical_array(
    env: &Env,
    input: &FingerprintInput,
) -> Result<[u8; CANONICAL_LEN], EncodingError> {
    let layout = layout_for(input.schema_version).map_err(|_| EncodingError::UnsupportedSchema)?;
    if !layout.is_contiguous() || layout.canonical_len() != CANONICAL_LEN {
        return Err(EncodingError::UnsupportedSchema);
    }

    let version = encode_u32(input.schema_version);
    let remittance_id = encode_u64(input.remittance_id);
    let sender = encode_address(env, &input.sender)?;
    let agent = encode_address(env, &input.agent)?;
    let amount = encode_i128(input.amount);
    let fee = encode_i128(input.fee);
    let expiry = encode_optional_u64(input.expiry);

    let parts: [&[u8]; 7] = [&version, &remittance_id, &sender, &agent, &amount, &fee, &expiry];
    if layout.fields.len() != parts.len() {
        return Err(EncodingError::UnsupportedSchema);
    }

    let mut buf = [0u8; CANONICAL_LEN];
    for (field, part) in layout.fields.iter().zip(parts) {
        if part.len() != field.width() {
            return Err(EncodingError::UnsupportedSchema);
        }
        buf[field.offset..field.end()].copy_from_slice(part);
    }

    Ok(buf)
}

/// Builds the canonical preimage as host `Bytes`, ready for hashing.
pub fn encode_canonical(env: &Env, input: &FingerprintInput) -> Result<Bytes, EncodingError> {
    let buf = encode_canonical_array(env, input)?;
    Ok(Bytes::from_array(env, &buf))
}
