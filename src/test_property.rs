//! Property-based tests for settlement ID invariants.
//!
//! These tests validate critical invariants across randomized inputs:
//! - Deterministic results
//! - Sensitivity to every field
//! - Absent expiry equals zero expiry
//! - Fixed buffer and digest lengths
//! - Ledger path and off-chain replica agree
#![cfg(test)]
extern crate std;

use proptest::prelude::*;
use soroban_sdk::xdr::FromXdr;
use soroban_sdk::{Address, Bytes, Env};

use crate::canonical::{encode_canonical, encode_canonical_array};
use crate::codec::{encode_i128, ACCOUNT_XDR_PREFIX};
use crate::digest::digest;
use crate::hashing::compute_settlement_id;
use crate::replica::ReplicaInput;
use crate::schema::LAYOUT_V1;
use crate::{FingerprintInput, ADDRESS_WIDTH, CANONICAL_LEN};

// ============================================================================
// Test Helpers
// ============================================================================

/// Account address for a raw ed25519 key, built through the host's XDR decoder.
fn account_from_key(env: &Env, key: &[u8; 32]) -> Address {
    let mut xdr = [0u8; ADDRESS_WIDTH];
    xdr[..ACCOUNT_XDR_PREFIX.len()].copy_from_slice(&ACCOUNT_XDR_PREFIX);
    xdr[ACCOUNT_XDR_PREFIX.len()..].copy_from_slice(key);
    Address::from_xdr(env, &Bytes::from_array(env, &xdr)).unwrap()
}

#[derive(Clone, Debug)]
struct Fields {
    remittance_id: u64,
    sender: [u8; 32],
    agent: [u8; 32],
    amount: i128,
    fee: i128,
    expiry: Option<u64>,
}

impl Fields {
    fn ledger_id(&self, env: &Env) -> [u8; 32] {
        compute_settlement_id(
            env,
            self.remittance_id,
            &account_from_key(env, &self.sender),
            &account_from_key(env, &self.agent),
            self.amount,
            self.fee,
            self.expiry,
        )
        .unwrap()
        .to_array()
    }

    fn input(&self, env: &Env) -> FingerprintInput {
        FingerprintInput::v1(
            self.remittance_id,
            account_from_key(env, &self.sender),
            account_from_key(env, &self.agent),
            self.amount,
            self.fee,
            self.expiry,
        )
    }

    fn replica(&self) -> ReplicaInput {
        ReplicaInput::new(
            self.remittance_id,
            self.sender,
            self.agent,
            self.amount,
            self.fee,
            self.expiry,
        )
    }
}

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Strategy for full-range fingerprint fields, including negative amounts.
fn fields_strategy() -> impl Strategy<Value = Fields> {
    (
        any::<u64>(),
        any::<[u8; 32]>(),
        any::<[u8; 32]>(),
        any::<i128>(),
        any::<i128>(),
        any::<Option<u64>>(),
    )
        .prop_map(|(remittance_id, sender, agent, amount, fee, expiry)| Fields {
            remittance_id,
            sender,
            agent,
            amount,
            fee,
            expiry,
        })
}

/// Strategy picking which field to perturb (0..6).
fn field_index_strategy() -> impl Strategy<Value = usize> {
    0usize..6usize
}

fn perturb(fields: &Fields, index: usize) -> Fields {
    let mut changed = fields.clone();
    match index {
        0 => changed.remittance_id = fields.remittance_id.wrapping_add(1),
        1 => changed.sender[31] ^= 0x01,
        2 => changed.agent[0] ^= 0x80,
        3 => changed.amount = fields.amount.wrapping_add(1),
        4 => changed.fee = fields.fee.wrapping_sub(1),
        _ => {
            changed.expiry = match fields.expiry {
                None | Some(0) => Some(1),
                Some(t) => Some(t.wrapping_add(1).max(1)),
            }
        }
    }
    changed
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Property: same inputs always give the same ID.
    #[test]
    fn prop_deterministic(fields in fields_strategy()) {
        let env = Env::default();

        prop_assert_eq!(fields.ledger_id(&env), fields.ledger_id(&env));
    }

    /// Property: changing any single field changes the ID.
    #[test]
    fn prop_sensitive_to_every_field(
        fields in fields_strategy(),
        index in field_index_strategy()
    ) {
        let env = Env::default();
        let changed = perturb(&fields, index);

        prop_assert_ne!(fields.ledger_id(&env), changed.ledger_id(&env));
    }

    /// Property: an absent expiry and an explicit zero expiry are the same ID.
    #[test]
    fn prop_expiry_none_equals_zero(fields in fields_strategy()) {
        let env = Env::default();
        let mut none = fields.clone();
        none.expiry = None;
        let mut zero = fields;
        zero.expiry = Some(0);

        prop_assert_eq!(none.ledger_id(&env), zero.ledger_id(&env));
    }

    /// Property: buffer is always 52 + 2W bytes and the digest is 32 bytes.
    #[test]
    fn prop_fixed_lengths(fields in fields_strategy()) {
        let env = Env::default();
        let canonical = encode_canonical(&env, &fields.input(&env)).unwrap();

        prop_assert_eq!(canonical.len() as usize, CANONICAL_LEN);
        prop_assert_eq!(CANONICAL_LEN, 52 + 2 * ADDRESS_WIDTH);
        prop_assert_eq!(digest(&env, &canonical).len(), 32);
    }

    /// Property: the host-backed pipeline and the sha2 replica agree byte for byte.
    #[test]
    fn prop_ledger_matches_replica(fields in fields_strategy()) {
        let env = Env::default();
        let ledger_buf = encode_canonical_array(&env, &fields.input(&env)).unwrap();
        let replica = fields.replica();

        prop_assert_eq!(ledger_buf, replica.canonical_bytes().unwrap());
        prop_assert_eq!(fields.ledger_id(&env), replica.settlement_id().unwrap());
    }

    /// Property: serializing fee before amount yields a different digest.
    #[test]
    fn prop_amount_fee_swap_detected(fields in fields_strategy()) {
        prop_assume!(fields.amount != fields.fee);
        let env = Env::default();
        let canonical = encode_canonical_array(&env, &fields.input(&env)).unwrap();

        let amount = LAYOUT_V1.field("amount").unwrap();
        let fee = LAYOUT_V1.field("fee").unwrap();
        let mut swapped = canonical;
        swapped[amount.offset..amount.end()].copy_from_slice(&encode_i128(fields.fee));
        swapped[fee.offset..fee.end()].copy_from_slice(&encode_i128(fields.amount));

        prop_assert_ne!(
            digest(&env, &Bytes::from_array(&env, &canonical)),
            digest(&env, &Bytes::from_array(&env, &swapped))
        );
    }
}

/// Swapping the serialization order of any two fields must change the digest
/// for a representative input.
#[test]
fn test_any_field_swap_changes_digest() {
    let env = Env::default();
    let fields = Fields {
        remittance_id: 42,
        sender: [0x5a; 32],
        agent: [0xa5; 32],
        amount: 1_000_000_000,
        fee: 30_000_000,
        expiry: Some(1_735_689_600),
    };
    let canonical = encode_canonical_array(&env, &fields.input(&env)).unwrap();
    let reference = digest(&env, &Bytes::from_array(&env, &canonical));

    // Rebuild the buffer with fields i and j exchanged in append order.
    let specs = LAYOUT_V1.fields;
    for i in 0..specs.len() {
        for j in (i + 1)..specs.len() {
            let mut order: std::vec::Vec<usize> = (0..specs.len()).collect();
            order.swap(i, j);

            let mut reordered = std::vec::Vec::with_capacity(CANONICAL_LEN);
            for &k in &order {
                reordered.extend_from_slice(&canonical[specs[k].offset..specs[k].end()]);
            }

            assert_eq!(reordered.len(), CANONICAL_LEN);
            let swapped = digest(&env, &Bytes::from_slice(&env, &reordered));
            assert_ne!(
                swapped, reference,
                "swapping {} and {} went undetected",
                specs[i].name, specs[j].name
            );
        }
    }
}
