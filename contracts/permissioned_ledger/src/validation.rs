use soroban_sdk::{Address, Env};
use crate::roles;
use crate::storage;
use crate::types::{InitState, LedgerError};

// ============================================================================
// VALIDAÇÕES (todas rodam antes de qualquer escrita)
// ============================================================================

/// Valida se o contrato já passou pelo `initialize`
pub fn require_initialized(env: &Env) -> Result<(), LedgerError> {
    if storage::get_init_state(env) != InitState::Initialized {
        return Err(LedgerError::NotInitialized);
    }
    Ok(())
}

/// Valida se o caller tem o papel raiz
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    roles::check_role(env, &roles::owner_role(env), caller)
}

/// Valida se o contrato não está pausado
pub fn require_not_paused(env: &Env) -> Result<(), LedgerError> {
    if storage::is_paused(env) {
        return Err(LedgerError::ContractPaused);
    }
    Ok(())
}

/// Valida se o caller não está na blacklist
pub fn require_not_blacklisted(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    if storage::is_blacklisted(env, caller) {
        return Err(LedgerError::BlacklistedAccount);
    }
    Ok(())
}

/// Valida se o amount é válido (> 0)
pub fn require_positive_amount(amount: i128) -> Result<(), LedgerError> {
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(())
}

/// Valida se o amount é válido (>= 0)
pub fn require_non_negative_amount(amount: i128) -> Result<(), LedgerError> {
    if amount < 0 {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(())
}

/// Valida se o balance é suficiente
pub fn require_sufficient_balance(env: &Env, addr: &Address, required: i128) -> Result<(), LedgerError> {
    let balance = storage::get_balance(env, addr);
    if balance < required {
        return Err(LedgerError::InsufficientBalance);
    }
    Ok(())
}
