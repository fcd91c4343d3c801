use soroban_sdk::{log, Address, Env};
use crate::events;
use crate::storage;
use crate::types::LedgerError;
use crate::validation;

// ============================================================================
// PAUSE GATE
// ============================================================================
//
// Unpaused <-> Paused. Só o pauser transiciona, e a autorização é checada
// antes do estado: um não-pauser sempre recebe `Unauthorized`.

/// Valida se o caller é o pauser configurado
pub fn require_pauser(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    match storage::get_pauser(env) {
        Some(pauser) if pauser == *caller => Ok(()),
        _ => Err(LedgerError::Unauthorized),
    }
}

pub fn pause(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    require_pauser(env, caller)?;
    if storage::is_paused(env) {
        return Err(LedgerError::AlreadyPaused);
    }

    storage::set_paused(env, true);
    events::emit_pause(env, caller);
    log!(env, "ledger paused", caller.clone());
    Ok(())
}

pub fn unpause(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    require_pauser(env, caller)?;
    if !storage::is_paused(env) {
        return Err(LedgerError::AlreadyUnpaused);
    }

    storage::set_paused(env, false);
    events::emit_unpause(env, caller);
    log!(env, "ledger unpaused", caller.clone());
    Ok(())
}

/// Troca o pauser (apenas owner). Repetir o mesmo endereço não emite evento.
pub fn update_pauser(env: &Env, caller: &Address, new_pauser: &Address) -> Result<(), LedgerError> {
    validation::require_owner(env, caller)?;
    set_pauser_unchecked(env, new_pauser);
    Ok(())
}

pub(crate) fn set_pauser_unchecked(env: &Env, new_pauser: &Address) {
    if storage::get_pauser(env).as_ref() == Some(new_pauser) {
        return;
    }
    storage::set_pauser(env, new_pauser);
    events::emit_pauser_changed(env, new_pauser);
}
