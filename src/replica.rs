//! Off-chain replica of the settlement ID pipeline.
//!
//! Written against the byte layout alone, without the host: no `Env`, no
//! XDR library, no `Bytes`. Banks and reconciliation services link this to
//! compute IDs from raw account keys. It shares no layout or hashing code with
//! the ledger path, so the two can be cross-checked against the vector file
//! as independent implementations.

use sha2::{Digest, Sha256};

use crate::codec::parse_decimal;
use crate::EncodingError;

const LAYOUT_VERSION: u32 = 1;
const KEY_LEN: usize = 32;
const ACCOUNT_LEN: usize = 12 + KEY_LEN;

/// Preimage length: version, id, two accounts, amount, fee, expiry.
pub const PREIMAGE_LEN: usize = 4 + 8 + 2 * ACCOUNT_LEN + 16 + 16 + 8;

/// `ScVal::Address(ScAddress::Account(PublicKey::Ed25519(key)))` in XDR.
fn account_xdr(key: &[u8; KEY_LEN]) -> [u8; ACCOUNT_LEN] {
    let mut out = [0u8; ACCOUNT_LEN];
    out[..4].copy_from_slice(&18u32.to_be_bytes()); // SCV_ADDRESS
    out[4..8].copy_from_slice(&0u32.to_be_bytes()); // SC_ADDRESS_TYPE_ACCOUNT
    out[8..12].copy_from_slice(&0u32.to_be_bytes()); // PUBLIC_KEY_TYPE_ED25519
    out[12..].copy_from_slice(key);
    out
}

/// Fingerprint tuple as held by an off-chain system.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReplicaInput {
    pub schema_version: u32,
    pub remittance_id: u64,
    /// Raw ed25519 key of the sender account
    pub sender_key: [u8; KEY_LEN],
    /// Raw ed25519 key of the agent account
    pub agent_key: [u8; KEY_LEN],
    pub amount: i128,
    pub fee: i128,
    pub expiry: Option<u64>,
}

impl ReplicaInput {
    pub fn new(
        remittance_id: u64,
        sender_key: [u8; KEY_LEN],
        agent_key: [u8; KEY_LEN],
        amount: i128,
        fee: i128,
        expiry: Option<u64>,
    ) -> Self {
        ReplicaInput {
            schema_version: LAYOUT_VERSION,
            remittance_id,
            sender_key,
            agent_key,
            amount,
            fee,
            expiry,
        }
    }

    /// Builds an input from decimal text, as found in JSON records.
    pub fn from_decimal(
        remittance_id: &str,
        sender_key: [u8; KEY_LEN],
        agent_key: [u8; KEY_LEN],
        amount: &str,
        fee: &str,
        expiry: Option<&str>,
    ) -> Result<Self, EncodingError> {
        let expiry = match expiry {
            Some(text) => Some(parse_decimal::<u64>(text)?),
            None => None,
        };
        Ok(ReplicaInput::new(
            parse_decimal::<u64>(remittance_id)?,
            sender_key,
            agent_key,
            parse_decimal::<i128>(amount)?,
            parse_decimal::<i128>(fee)?,
            expiry,
        ))
    }

    /// The exact bytes that get hashed.
    pub fn canonical_bytes(&self) -> Result<[u8; PREIMAGE_LEN], EncodingError> {
        if self.schema_version != LAYOUT_VERSION {
            return Err(EncodingError::UnsupportedSchema);
        }

        let mut out = [0u8; PREIMAGE_LEN];
        out[0..4].copy_from_slice(&self.schema_version.to_be_bytes());
        out[4..12].copy_from_slice(&self.remittance_id.to_be_bytes());
        out[12..56].copy_from_slice(&account_xdr(&self.sender_key));
        out[56..100].copy_from_slice(&account_xdr(&self.agent_key));
        out[100..116].copy_from_slice(&self.amount.to_be_bytes());
        out[116..132].copy_from_slice(&self.fee.to_be_bytes());
        // absent expiry stays zero-filled
        if let Some(expiry) = self.expiry {
            out[132..140].copy_from_slice(&expiry.to_be_bytes());
        }
        Ok(out)
    }

    pub fn settlement_id(&self) -> Result<[u8; 32], EncodingError> {
        if self.schema_version != LAYOUT_VERSION {
            return Err(EncodingError::UnsupportedSchema);
        }

        let mut hasher = Sha256::new();
        hasher.update(self.schema_version.to_be_bytes());
        hasher.update(self.remittance_id.to_be_bytes());
        hasher.update(account_xdr(&self.sender_key));
        hasher.update(account_xdr(&self.agent_key));
        hasher.update(self.amount.to_be_bytes());
        hasher.update(self.fee.to_be_bytes());
        hasher.update(self.expiry.unwrap_or(0).to_be_bytes());

        let result = hasher.finalize();
        let mut id = [0u8; 32];
        id.copy_from_slice(&result);
        Ok(id)
    }

    /// False for any input the replica cannot encode.
    pub fn verify(&self, expected: &[u8; 32]) -> bool {
        matches!(self.settlement_id(), Ok(id) if id == *expected)
    }
}
