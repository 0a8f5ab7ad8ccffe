//! # Types
//!
//! Record types shared by the registry, the storage layer and the public API.
//!
//! ## Config / State split
//!
//! An [`Rfp`] is stored as two ledger entries:
//!
//! - [`RfpConfig`] — written once by `publish_rfp`; never mutated.
//! - [`RfpState`] — rewritten by `update_rfp_status`.
//!
//! The public API returns the reconstructed [`Rfp`].
//!
//! ## Status
//!
//! Status is an open label rather than a closed enum. Publishing always starts
//! a record at [`STATUS_OPEN`]; after that the creator may set any label,
//! including `OPEN` again:
//!
//! ```text
//! (none) ──publish_rfp──► OPEN ──update_rfp_status──► <any label> ──► ...
//! ```

use soroban_sdk::{contracttype, Address, String};

/// Status label given to every freshly published RFP.
pub const STATUS_OPEN: &str = "OPEN";

/// Immutable part of an RFP, written once at publication.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RfpConfig {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub department: String,
    pub budget: u128,
    pub deadline: u32,
    pub created_by: Address,
}

/// Mutable part of an RFP.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RfpState {
    pub status: String,
}

/// Full on-chain representation of a Request for Proposal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rfp {
    /// Sequential identifier, starting at 1.
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Publishing department, free text.
    pub department: String,
    /// Budget in an opaque unit.
    pub budget: u128,
    /// Target ledger sequence for submissions. Not checked against the current ledger.
    pub deadline: u32,
    /// Current status label.
    pub status: String,
    /// Address that published the RFP; the only address allowed to change `status`.
    pub created_by: Address,
}

impl Rfp {
    pub(crate) fn from_parts(config: RfpConfig, state: RfpState) -> Self {
        Rfp {
            id: config.id,
            title: config.title,
            description: config.description,
            department: config.department,
            budget: config.budget,
            deadline: config.deadline,
            status: state.status,
            created_by: config.created_by,
        }
    }
}
