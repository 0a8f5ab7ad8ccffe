//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the contract.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key        | Type      | Description                        |
//! |------------|-----------|------------------------------------|
//! | `Owner`    | `Address` | Privileged principal set by `init` |
//! | `RfpCount` | `u64`     | Last assigned RFP id (0 = none)    |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key               | Type        | Description                     |
//! |-------------------|-------------|---------------------------------|
//! | `Entity(address)` | `String`    | Role label of an authorized entity |
//! | `RfpConfig(id)`   | `RfpConfig` | Immutable RFP fields            |
//! | `RfpState(id)`    | `RfpState`  | Mutable RFP status              |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::types::{Rfp, RfpConfig, RfpState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Privileged principal allowed to manage the registry (Instance).
    Owner,
    /// Global RFP id counter (Instance).
    RfpCount,
    /// Role label of an authorized entity (Persistent).
    Entity(Address),
    /// Immutable RFP fields keyed by id (Persistent).
    RfpConfig(u64),
    /// Mutable RFP status keyed by id (Persistent).
    RfpState(u64),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Owner)
}

/// Number of RFPs published so far, which is also the last id handed out.
pub fn get_rfp_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::RfpCount)
        .unwrap_or(0)
}

/// Reads, increments, and stores the RFP counter.
/// Returns the id for the *current* RFP (post-increment value, so ids start at 1).
///
/// Callers must have finished every precondition check before calling this.
pub fn next_rfp_id(env: &Env) -> u64 {
    let next = get_rfp_count(env) + 1;
    env.storage().instance().set(&DataKey::RfpCount, &next);
    next
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

/// Insert or overwrite the role label of `entity`.
pub fn set_entity_role(env: &Env, entity: &Address, role: &String) {
    let key = DataKey::Entity(entity.clone());
    env.storage().persistent().set(&key, role);
    bump_persistent(env, &key);
}

pub fn get_entity_role(env: &Env, entity: &Address) -> Option<String> {
    let key = DataKey::Entity(entity.clone());
    let role: Option<String> = env.storage().persistent().get(&key);
    if role.is_some() {
        bump_persistent(env, &key);
    }
    role
}

/// `true` if `entity` has a registry entry. A hit extends the entry's TTL, so
/// entities that keep publishing stay registered.
pub fn has_entity(env: &Env, entity: &Address) -> bool {
    let key = DataKey::Entity(entity.clone());
    let present = env.storage().persistent().has(&key);
    if present {
        bump_persistent(env, &key);
    }
    present
}

/// Save both the immutable config and the initial state of a new RFP.
pub fn save_rfp(env: &Env, rfp: &Rfp) {
    let config_key = DataKey::RfpConfig(rfp.id);
    let state_key = DataKey::RfpState(rfp.id);

    let config = RfpConfig {
        id: rfp.id,
        title: rfp.title.clone(),
        description: rfp.description.clone(),
        department: rfp.department.clone(),
        budget: rfp.budget,
        deadline: rfp.deadline,
        created_by: rfp.created_by.clone(),
    };

    let state = RfpState {
        status: rfp.status.clone(),
    };

    env.storage().persistent().set(&config_key, &config);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load the full `Rfp` by combining config and state.
/// Returns `None` if the RFP was never published.
pub fn load_rfp(env: &Env, id: u64) -> Option<Rfp> {
    let config = load_rfp_config(env, id)?;
    let state = load_rfp_state(env, id)?;
    Some(Rfp::from_parts(config, state))
}

/// Load only the immutable RFP fields.
pub fn load_rfp_config(env: &Env, id: u64) -> Option<RfpConfig> {
    let key = DataKey::RfpConfig(id);
    let config: Option<RfpConfig> = env.storage().persistent().get(&key);
    if config.is_some() {
        bump_persistent(env, &key);
    }
    config
}

/// Load only the mutable RFP state.
pub fn load_rfp_state(env: &Env, id: u64) -> Option<RfpState> {
    let key = DataKey::RfpState(id);
    let state: Option<RfpState> = env.storage().persistent().get(&key);
    if state.is_some() {
        bump_persistent(env, &key);
    }
    state
}

/// Save only the mutable RFP state (status updates).
pub fn save_rfp_state(env: &Env, id: u64, state: &RfpState) {
    let key = DataKey::RfpState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}
