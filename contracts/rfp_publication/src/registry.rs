//! # Authorization Registry
//!
//! Decides which addresses may publish RFPs and remembers the role label each
//! one was registered under.
//!
//! | Principal         | May do                                        |
//! |-------------------|-----------------------------------------------|
//! | Owner             | `add_authorized_entity`                       |
//! | Authorized entity | `publish_rfp`                                 |
//! | Anyone            | `get_rfp`, `is_authorized`, `get_entity_role` |
//!
//! The owner is set exactly once by `init`. Registry entries are upserts: adding
//! an address that is already present only replaces its role label. There is no
//! revocation.

use soroban_sdk::{log, Address, Env, String};

use crate::storage;
use crate::Error;

/// Store `owner` as the privileged principal. Fails if an owner already exists.
pub fn init_owner(env: &Env, owner: &Address) -> Result<(), Error> {
    if storage::has_owner(env) {
        return Err(Error::AlreadyInitialized);
    }
    storage::set_owner(env, owner);
    Ok(())
}

/// Succeeds only when `caller` is the stored owner.
///
/// Rejections surface as `Error::Forbidden`, the same code as every other
/// privilege failure. An uninitialised contract has no owner, so every caller
/// is rejected.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    match storage::get_owner(env) {
        Some(owner) if owner == *caller => Ok(()),
        _ => {
            log!(env, "registry: caller is not the owner", caller.clone());
            Err(Error::Forbidden)
        }
    }
}

/// Register `entity` under `role`, or replace its role if already present.
///
/// `caller` must be the owner. Authentication of `caller` is the entry point's job.
pub fn add_entity(
    env: &Env,
    caller: &Address,
    entity: &Address,
    role: &String,
) -> Result<(), Error> {
    require_owner(env, caller)?;
    storage::set_entity_role(env, entity, role);
    log!(env, "registry: entity authorized", entity.clone(), role.clone());
    Ok(())
}

/// `true` iff `address` has a registry entry.
pub fn is_authorized(env: &Env, address: &Address) -> bool {
    storage::has_entity(env, address)
}

/// Role label recorded for `address`, if any.
pub fn role_of(env: &Env, address: &Address) -> Option<String> {
    storage::get_entity_role(env, address)
}

/// Succeeds only when `caller` is an authorized entity.
pub fn require_authorized(env: &Env, caller: &Address) -> Result<(), Error> {
    if is_authorized(env, caller) {
        Ok(())
    } else {
        log!(env, "registry: caller is not an authorized entity", caller.clone());
        Err(Error::Forbidden)
    }
}
