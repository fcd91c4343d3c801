#![no_std]

mod storage;
mod types;
mod validation;
mod events;
mod roles;
mod pause;
mod blacklist;
mod trusted;
mod rescue;
mod init;
mod ledger;
pub mod token;

// ============================================================================
// CONTRATO PRINCIPAL
// ============================================================================

pub use token::{PermissionedLedger, PermissionedLedgerClient};
pub use trusted::UNLIMITED_ALLOWANCE;
pub use types::*;
