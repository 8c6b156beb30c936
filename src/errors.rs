use soroban_sdk::contracterror;

/// Contract error codes with descriptive meanings for debugging.
///
/// Codes are part of the public surface: off-chain verifiers match on the
/// numeric value, so existing discriminants must never be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// A fingerprint field is outside its declared domain.
    /// Cause: sender or agent is not an account address, or a field failed
    /// codec validation while computing a settlement ID.
    InvalidInput = 1,

    /// A value cannot be represented in its fixed-width encoding.
    /// Cause: requesting the canonical payload for a non-canonical address,
    /// or rendering a malformed settlement ID.
    EncodingError = 2,

    /// The requested schema version has no registered layout.
    /// Cause: verifying an ID produced under a layout this build does not know.
    SchemaVersionMismatch = 3,
}

/// Field-level encoding failures raised by the codec and the replica.
///
/// Kept separate from [`ContractError`] so the off-chain replica can report
/// exactly which field rule was broken without an `Env`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EncodingError {
    /// Address is not a 44-byte XDR account address.
    AddressNotCanonical,
    /// Decimal integer does not fit the field width.
    IntegerOutOfRange,
    /// Decimal integer text is empty or contains non-digit characters.
    MalformedInteger,
    /// Hex text is not exactly 64 lowercase or uppercase hex digits.
    MalformedHex,
    /// Input carries a schema version with no registered layout.
    UnsupportedSchema,
}

impl From<EncodingError> for ContractError {
    fn from(err: EncodingError) -> Self {
        match err {
            EncodingError::UnsupportedSchema => ContractError::SchemaVersionMismatch,
            _ => ContractError::EncodingError,
        }
    }
}
