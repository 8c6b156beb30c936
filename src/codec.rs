//! Field codec: one fixed-width byte mapping per field type.
//!
//! ## Serialization Rules
//!
//! - All integers are big-endian (network byte order)
//! - Signed integers are two's complement
//! - Addresses are the XDR `ScVal::Address` bytes of an account address
//! - Optional fields use 8 zero bytes when None
//!
//! The codec does not enforce business rules such as non-negative amounts.
//! It only guarantees a faithful byte mapping of well-formed values.

use core::num::IntErrorKind;
use core::str::FromStr;

use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Env};

use crate::{EncodingError, ADDRESS_WIDTH};

/// XDR header of an account address: `SCV_ADDRESS`, `SC_ADDRESS_TYPE_ACCOUNT`,
/// `PUBLIC_KEY_TYPE_ED25519`, each a big-endian u32. The 32-byte key follows.
pub const ACCOUNT_XDR_PREFIX: [u8; 12] = [0, 0, 0, 0x12, 0, 0, 0, 0, 0, 0, 0, 0];

pub fn encode_u32(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

pub fn encode_u64(value: u64) -> [u8; 8] {
    value.to_be_bytes()
}

pub fn encode_i128(value: i128) -> [u8; 16] {
    value.to_be_bytes()
}

/// Absent and `Some(0)` both encode as 8 zero bytes.
pub fn encode_optional_u64(value: Option<u64>) -> [u8; 8] {
    encode_u64(value.unwrap_or(0))
}

/// Serialize an Address to its canonical fixed-width form.
///
/// Only account (`G...`) addresses qualify. Contract addresses serialize to
/// 40 bytes under XDR and are rejected rather than padded, so the buffer
/// width never depends on the kind of party involved.
pub fn encode_address(env: &Env, address: &Address) -> Result<[u8; ADDRESS_WIDTH], EncodingError> {
    let xdr = address.clone().to_xdr(env);
    if xdr.len() as usize != ADDRESS_WIDTH {
        return Err(EncodingError::AddressNotCanonical);
    }

    let mut out = [0u8; ADDRESS_WIDTH];
    xdr.copy_into_slice(&mut out);

    if out[..ACCOUNT_XDR_PREFIX.len()] != ACCOUNT_XDR_PREFIX {
        return Err(EncodingError::AddressNotCanonical);
    }
    Ok(out)
}

/// Encodes a decimal i128 as carried by JSON APIs and vector files.
pub fn encode_i128_decimal(text: &str) -> Result<[u8; 16], EncodingError> {
    parse_decimal::<i128>(text).map(encode_i128)
}

/// Encodes a decimal u64 as carried by JSON APIs and vector files.
pub fn encode_u64_decimal(text: &str) -> Result<[u8; 8], EncodingError> {
    parse_decimal::<u64>(text).map(encode_u64)
}

pub(crate) fn parse_decimal<T>(text: &str) -> Result<T, EncodingError>
where
    T: FromStr<Err = core::num::ParseIntError>,
{
    text.parse::<T>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => EncodingError::IntegerOutOfRange,
        _ => EncodingError::MalformedInteger,
    })
}
