use soroban_sdk::{Address, Env};
use crate::events;
use crate::roles;
use crate::storage;
use crate::trusted;
use crate::types::LedgerError;
use crate::validation;

// ============================================================================
// LEDGER MÍNIMO (bookkeeping SEP-41)
// ============================================================================
//
// Todas as operações aqui são "pausable" e "guarded": checam o pause e a
// blacklist do caller antes de qualquer escrita (CEI).

fn require_guarded(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    validation::require_not_paused(env)?;
    validation::require_not_blacklisted(env, caller)
}

/// Cria novos tokens (apenas MINTER_ROLE).
pub fn mint(env: &Env, caller: &Address, to: &Address, amount: i128) -> Result<(), LedgerError> {
    // === CHECKS ===
    roles::check_role(env, &roles::minter_role(env), caller)?;
    require_guarded(env, caller)?;
    validation::require_positive_amount(amount)?;

    let new_balance = storage::get_balance(env, to)
        .checked_add(amount)
        .ok_or(LedgerError::InvalidAmount)?;
    let new_supply = storage::get_total_supply(env)
        .checked_add(amount)
        .ok_or(LedgerError::InvalidAmount)?;

    // === EFFECTS ===
    storage::set_balance(env, to, new_balance);
    storage::set_total_supply(env, new_supply);

    // === INTERACTIONS ===
    events::emit_mint(env, to, amount);
    Ok(())
}

/// Destrói tokens do próprio saldo do minter.
pub fn burn(env: &Env, caller: &Address, amount: i128) -> Result<(), LedgerError> {
    roles::check_role(env, &roles::minter_role(env), caller)?;
    require_guarded(env, caller)?;
    validation::require_positive_amount(amount)?;
    validation::require_sufficient_balance(env, caller, amount)?;

    let new_balance = storage::get_balance(env, caller)
        .checked_sub(amount)
        .ok_or(LedgerError::InsufficientBalance)?;
    let new_supply = storage::get_total_supply(env)
        .checked_sub(amount)
        .ok_or(LedgerError::InvalidAmount)?;

    storage::set_balance(env, caller, new_balance);
    storage::set_total_supply(env, new_supply);

    events::emit_burn(env, caller, amount);
    Ok(())
}

pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), LedgerError> {
    require_guarded(env, from)?;
    validation::require_positive_amount(amount)?;
    validation::require_sufficient_balance(env, from, amount)?;

    move_balance(env, from, to, amount)?;
    events::emit_transfer(env, from, to, amount);
    Ok(())
}

/// Grava a allowance armazenada; o override de trusted não interfere aqui.
pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) -> Result<(), LedgerError> {
    require_guarded(env, owner)?;
    validation::require_non_negative_amount(amount)?;

    storage::set_stored_allowance(env, owner, spender, amount);
    events::emit_approval(env, owner, spender, amount);
    Ok(())
}

/// Gasta contra a allowance observada. Para spender confiável o valor
/// gravado não é decrementado; uma aprovação de `i128::MAX` comum é.
pub fn transfer_from(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), LedgerError> {
    // === CHECKS ===
    require_guarded(env, spender)?;
    validation::require_positive_amount(amount)?;

    let spender_trusted = trusted::is_trusted_account(env, spender);
    let observed = trusted::effective_allowance(
        storage::get_stored_allowance(env, from, spender),
        spender_trusted,
    );
    if observed < amount {
        return Err(LedgerError::InsufficientAllowance);
    }
    validation::require_sufficient_balance(env, from, amount)?;

    // === EFFECTS ===
    move_balance(env, from, to, amount)?;
    if !spender_trusted {
        storage::set_stored_allowance(env, from, spender, observed - amount);
    }

    // === INTERACTIONS ===
    events::emit_transfer(env, from, to, amount);
    Ok(())
}

fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), LedgerError> {
    if from == to {
        return Ok(());
    }
    let new_from = storage::get_balance(env, from)
        .checked_sub(amount)
        .ok_or(LedgerError::InsufficientBalance)?;
    let new_to = storage::get_balance(env, to)
        .checked_add(amount)
        .ok_or(LedgerError::InvalidAmount)?;

    storage::set_balance(env, from, new_from);
    storage::set_balance(env, to, new_to);
    Ok(())
}
