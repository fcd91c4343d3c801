use soroban_sdk::{log, Env};
use crate::blacklist;
use crate::events;
use crate::pause;
use crate::rescue;
use crate::roles;
use crate::storage;
use crate::trusted;
use crate::types::{InitConfig, InitState, Layer, LedgerError};

// ============================================================================
// SEQUENCIADOR DE INICIALIZAÇÃO
// ============================================================================
//
// Camadas, da base ao topo:
//   AccessControl <- Pausable <- Blacklistable <- Rescuable <- TrustedAllowance <- Ledger
//
// Cada camada tem um inicializador "chained" (pai primeiro, depois a própria
// camada) e um "unchained" (só a própria camada). Nenhum deles é exportado:
// fora de um `initialize` em andamento todos falham com `NotInitializing`.

/// Ponto de entrada único. Roda a cadeia inteira exatamente uma vez.
pub fn initialize(env: &Env, config: &InitConfig) -> Result<(), LedgerError> {
    if storage::get_init_state(env) != InitState::Uninitialized {
        return Err(LedgerError::AlreadyInitialized);
    }

    storage::set_init_state(env, InitState::Initializing);
    init_ledger(env, config)?;
    storage::set_init_state(env, InitState::Initialized);

    events::emit_initialized(env, &config.owner);
    log!(env, "ledger initialized", config.owner.clone());
    Ok(())
}

fn only_initializing(env: &Env) -> Result<(), LedgerError> {
    if storage::get_init_state(env) != InitState::Initializing {
        return Err(LedgerError::NotInitializing);
    }
    Ok(())
}

/// Marca a camada como `Initializing`. Uma camada nunca é revisitada.
fn begin_layer(env: &Env, layer: Layer) -> Result<(), LedgerError> {
    only_initializing(env)?;
    if storage::get_layer_state(env, layer) != InitState::Uninitialized {
        return Err(LedgerError::AlreadyInitialized);
    }
    storage::set_layer_state(env, layer, InitState::Initializing);
    Ok(())
}

fn finish_layer(env: &Env, layer: Layer) {
    storage::set_layer_state(env, layer, InitState::Initialized);
}

// ============================================================================
// ACCESS CONTROL (base, sem pai)
// ============================================================================

pub(crate) fn init_access_control(env: &Env, config: &InitConfig) -> Result<(), LedgerError> {
    only_initializing(env)?;
    init_access_control_unchained(env, config)
}

pub(crate) fn init_access_control_unchained(env: &Env, config: &InitConfig) -> Result<(), LedgerError> {
    begin_layer(env, Layer::AccessControl)?;
    roles::grant_unchecked(env, &roles::owner_role(env), &config.owner, &config.owner);
    finish_layer(env, Layer::AccessControl);
    Ok(())
}

// ============================================================================
// PAUSABLE
// ============================================================================

pub(crate) fn init_pausable(env: &Env, config: &InitConfig) -> Result<(), LedgerError> {
    only_initializing(env)?;
    init_access_control(env, config)?;
    init_pausable_unchained(env, config)
}

pub(crate) fn init_pausable_unchained(env: &Env, config: &InitConfig) -> Result<(), LedgerError> {
    begin_layer(env, Layer::Pausable)?;
    pause::set_pauser_unchecked(env, &config.pauser);
    storage::set_paused(env, false);
    finish_layer(env, Layer::Pausable);
    Ok(())
}

// ============================================================================
// BLACKLISTABLE
// ============================================================================

pub(crate) fn init_blacklistable(env: &Env, config: &InitConfig) -> Result<(), LedgerError> {
    only_initializing(env)?;
    init_pausable(env, config)?;
    init_blacklistable_unchained(env, config)
}

pub(crate) fn init_blacklistable_unchained(env: &Env, config: &InitConfig) -> Result<(), LedgerError> {
    begin_layer(env, Layer::Blacklistable)?;
    blacklist::set_blacklister_unchecked(env, &config.blacklister);
    finish_layer(env, Layer::Blacklistable);
    Ok(())
}

// ============================================================================
// RESCUABLE
// ============================================================================

pub(crate) fn init_rescuable(env: &Env, config: &InitConfig) -> Result<(), LedgerError> {
    only_initializing(env)?;
    init_blacklistable(env, config)?;
    init_rescuable_unchained(env, config)
}

pub(crate) fn init_rescuable_unchained(env: &Env, config: &InitConfig) -> Result<(), LedgerError> {
    begin_layer(env, Layer::Rescuable)?;
    rescue::set_rescuer_unchecked(env, &config.rescuer);
    finish_layer(env, Layer::Rescuable);
    Ok(())
}

// ============================================================================
// TRUSTED ALLOWANCE
// ============================================================================

pub(crate) fn init_trusted_allowance(env: &Env, config: &InitConfig) -> Result<(), LedgerError> {
    only_initializing(env)?;
    init_rescuable(env, config)?;
    init_trusted_allowance_unchained(env, config)
}

pub(crate) fn init_trusted_allowance_unchained(
    env: &Env,
    config: &InitConfig,
) -> Result<(), LedgerError> {
    begin_layer(env, Layer::TrustedAllowance)?;
    // Endereço repetido na lista aborta a inicialização inteira
    for account in config.trusted.iter() {
        trusted::configure_unchecked(env, &account, true)?;
    }
    finish_layer(env, Layer::TrustedAllowance);
    Ok(())
}

// ============================================================================
// LEDGER (topo)
// ============================================================================

pub(crate) fn init_ledger(env: &Env, config: &InitConfig) -> Result<(), LedgerError> {
    only_initializing(env)?;
    init_trusted_allowance(env, config)?;
    init_ledger_unchained(env, config)
}

pub(crate) fn init_ledger_unchained(env: &Env, config: &InitConfig) -> Result<(), LedgerError> {
    begin_layer(env, Layer::Ledger)?;
    let minter = roles::minter_role(env);
    roles::set_role_admin_unchecked(env, &minter, &roles::owner_role(env));
    if let Some(account) = &config.minter {
        roles::grant_unchecked(env, &minter, account, &config.owner);
    }
    storage::set_total_supply(env, 0);
    finish_layer(env, Layer::Ledger);
    Ok(())
}
