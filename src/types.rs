//! Type definitions for the settlement ID contract.

use soroban_sdk::{contracttype, Address};

use crate::SCHEMA_VERSION;

/// The immutable tuple a settlement ID is derived from.
///
/// Assembled by the caller from an already-persisted remittance record.
/// Remittance status is deliberately absent: it changes over the record's
/// lifecycle and must not affect the ID.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FingerprintInput {
    /// Layout generation the ID is computed under
    pub schema_version: u32,
    /// Ledger-assigned remittance counter ID
    pub remittance_id: u64,
    /// Account that funded the remittance
    pub sender: Address,
    /// Account that pays out
    pub agent: Address,
    /// Amount in the smallest currency unit
    pub amount: i128,
    /// Fee in the same unit as `amount`
    pub fee: i128,
    /// Expiry timestamp (seconds since epoch), if any
    pub expiry: Option<u64>,
}

impl FingerprintInput {
    /// Builds an input pinned to the current schema version.
    pub fn v1(
        remittance_id: u64,
        sender: Address,
        agent: Address,
        amount: i128,
        fee: i128,
        expiry: Option<u64>,
    ) -> Self {
        FingerprintInput {
            schema_version: SCHEMA_VERSION,
            remittance_id,
            sender,
            agent,
            amount,
            fee,
            expiry,
        }
    }
}
