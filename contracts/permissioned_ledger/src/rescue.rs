use crate::events;
use crate::storage;
use crate::types::LedgerError;
use crate::validation;
use soroban_sdk::{log, token, Address, Env}; // Importa 'token' do SDK

// ============================================================================
// RESCUE - RECUPERAÇÃO DE ATIVOS ENVIADOS POR ENGANO
// ============================================================================
//
// Não passa pelo pause nem pela blacklist: só move ativos externos para fora
// do contrato, nunca saldos internos do ledger.

/// Valida se o caller é o rescuer configurado
pub fn require_rescuer(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    match storage::get_rescuer(env) {
        Some(rescuer) if rescuer == *caller => Ok(()),
        _ => Err(LedgerError::Unauthorized),
    }
}

/// Recupera tokens (USDC, XLM, etc) presos no contrato para `recipient`.
pub fn rescue(
    env: &Env,
    caller: &Address,
    asset: &Address,
    recipient: &Address,
    amount: i128,
) -> Result<(), LedgerError> {
    // 1. Verifica a capability
    require_rescuer(env, caller)?;
    validation::require_non_negative_amount(amount)?;

    // 2. Cliente do token externo; saldo conferido antes da transferência
    let this = env.current_contract_address();
    if *asset == this {
        return Err(LedgerError::InvalidAsset);
    }
    let client = token::Client::new(env, asset);
    if client.balance(&this) < amount {
        return Err(LedgerError::InsufficientBalance);
    }

    // 3. Transfere do contrato (self) para o destinatário
    client.transfer(&this, recipient, &amount);

    // 4. Evento
    events::emit_rescued(env, asset, recipient, amount);
    log!(env, "assets rescued", asset.clone(), recipient.clone(), amount);

    Ok(())
}

/// Troca o rescuer (apenas owner). Repetir o mesmo endereço não emite evento.
pub fn update_rescuer(env: &Env, caller: &Address, new_rescuer: &Address) -> Result<(), LedgerError> {
    validation::require_owner(env, caller)?;
    set_rescuer_unchecked(env, new_rescuer);
    Ok(())
}

pub(crate) fn set_rescuer_unchecked(env: &Env, new_rescuer: &Address) {
    if storage::get_rescuer(env).as_ref() == Some(new_rescuer) {
        return;
    }
    storage::set_rescuer(env, new_rescuer);
    events::emit_rescuer_changed(env, new_rescuer);
}
