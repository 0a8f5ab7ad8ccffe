//! # RFP Publication Contract
//!
//! A Soroban contract in which authorized entities publish Requests for
//! Proposal (RFPs) and later change their status. Anyone can read them back.
//!
//! | Phase        | Entry Point(s)                                      |
//! |--------------|-----------------------------------------------------|
//! | Bootstrap    | [`RfpPublication::init`]                            |
//! | Registry     | [`RfpPublication::add_authorized_entity`]           |
//! | Publication  | [`RfpPublication::publish_rfp`]                     |
//! | Lifecycle    | [`RfpPublication::update_rfp_status`]               |
//! | Queries      | `get_rfp`, `rfp_count`, `is_authorized`, `get_entity_role`, `get_owner` |
//!
//! ## Architecture
//!
//! Authorization decisions live in [`registry`]. Storage layout and TTL
//! handling live in [`storage`]. Every mutating entry point takes the acting
//! address as an explicit `caller` argument, requires its signature, and checks
//! all preconditions before writing anything.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, String};

pub mod registry;
mod storage;
mod types;

#[cfg(test)]
mod test_registry;

use storage::{load_rfp, load_rfp_config, next_rfp_id, save_rfp, save_rfp_state};
pub use types::{Rfp, RfpState, STATUS_OPEN};

/// Contract error codes. Discriminants follow HTTP status conventions so that
/// clients can surface them directly.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller lacks the privilege for the call: not the owner (registry
    /// administration), not an authorized entity (publish), or not the
    /// creator of the RFP (status update).
    Forbidden          = 403,
    /// No RFP exists with the given id.
    NotFound           = 404,
    /// `init` was already called.
    AlreadyInitialized = 409,
}

#[contract]
pub struct RfpPublication;

#[contractimpl]
impl RfpPublication {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the contract and set its owner.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls fail with `Error::AlreadyInitialized`.
    pub fn init(env: Env, owner: Address) -> Result<(), Error> {
        owner.require_auth();
        registry::init_owner(&env, &owner)
    }

    // ─────────────────────────────────────────────────────────
    // Authorization registry
    // ─────────────────────────────────────────────────────────

    /// Authorize `entity` to publish RFPs under `role`.
    ///
    /// - `caller` must sign and be the owner, otherwise `Error::Forbidden`.
    /// - Re-adding an entity replaces its role label.
    pub fn add_authorized_entity(
        env: Env,
        caller: Address,
        entity: Address,
        role: String,
    ) -> Result<(), Error> {
        caller.require_auth();
        registry::add_entity(&env, &caller, &entity, &role)
    }

    /// Return `true` if `address` may publish RFPs.
    pub fn is_authorized(env: Env, address: Address) -> bool {
        registry::is_authorized(&env, &address)
    }

    /// Return the role label `address` was authorized under, or `None`.
    pub fn get_entity_role(env: Env, address: Address) -> Option<String> {
        registry::role_of(&env, &address)
    }

    /// Return the owner, or `None` before `init`.
    pub fn get_owner(env: Env) -> Option<Address> {
        storage::get_owner(&env)
    }

    // ─────────────────────────────────────────────────────────
    // RFP ledger
    // ─────────────────────────────────────────────────────────

    /// Publish a new RFP and return its id.
    ///
    /// `caller` must sign and be an authorized entity, otherwise
    /// `Error::Forbidden` and no id is consumed. The record starts in
    /// status `OPEN` with `created_by = caller`.
    pub fn publish_rfp(
        env: Env,
        caller: Address,
        title: String,
        description: String,
        department: String,
        budget: u128,
        deadline: u32,
    ) -> Result<u64, Error> {
        caller.require_auth();
        registry::require_authorized(&env, &caller)?;

        let id = next_rfp_id(&env);

        let rfp = Rfp {
            id,
            title,
            description,
            department,
            budget,
            deadline,
            status: String::from_str(&env, STATUS_OPEN),
            created_by: caller,
        };

        save_rfp(&env, &rfp);
        log!(&env, "rfp published", id, rfp.created_by);
        Ok(id)
    }

    /// Set the status label of RFP `id`.
    ///
    /// - `Error::NotFound` if `id` was never published.
    /// - `Error::Forbidden` if `caller` did not publish it.
    ///
    /// Any label is accepted, and a status may be changed again afterwards.
    pub fn update_rfp_status(
        env: Env,
        caller: Address,
        id: u64,
        status: String,
    ) -> Result<(), Error> {
        caller.require_auth();

        let config = load_rfp_config(&env, id).ok_or(Error::NotFound)?;
        if config.created_by != caller {
            log!(&env, "rfp status update rejected: not the creator", id, caller);
            return Err(Error::Forbidden);
        }

        save_rfp_state(&env, id, &RfpState { status });
        log!(&env, "rfp status updated", id);
        Ok(())
    }

    /// Retrieve an RFP by id, or `None` if it does not exist.
    pub fn get_rfp(env: Env, id: u64) -> Option<Rfp> {
        load_rfp(&env, id)
    }

    /// Number of RFPs published so far. Equal to the most recently assigned id.
    pub fn rfp_count(env: Env) -> u64 {
        storage::get_rfp_count(&env)
    }
}
