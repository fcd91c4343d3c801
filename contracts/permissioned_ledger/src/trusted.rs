use soroban_sdk::{log, Address, Env};
use crate::events;
use crate::storage;
use crate::types::LedgerError;
use crate::validation;

// ============================================================================
// TRUSTED ALLOWANCE OVERRIDE
// ============================================================================
//
// Spenders confiáveis enxergam allowance ilimitada. O override é aplicado só na
// leitura: o valor armazenado nunca é tocado e reaparece ao remover a confiança.

/// Valor observado para spenders confiáveis.
pub const UNLIMITED_ALLOWANCE: i128 = i128::MAX;

pub fn is_trusted_account(env: &Env, account: &Address) -> bool {
    storage::is_trusted(env, account)
}

/// Configura a confiança de `account` (apenas owner).
/// Diferente dos setters de capability, repetir o valor atual é erro.
pub fn configure_trusted_account(
    env: &Env,
    caller: &Address,
    account: &Address,
    trusted: bool,
) -> Result<(), LedgerError> {
    validation::require_owner(env, caller)?;
    configure_unchecked(env, account, trusted)
}

pub(crate) fn configure_unchecked(
    env: &Env,
    account: &Address,
    trusted: bool,
) -> Result<(), LedgerError> {
    if storage::is_trusted(env, account) == trusted {
        return Err(LedgerError::AlreadyConfigured);
    }

    storage::set_trusted(env, account, trusted);
    events::emit_trusted_configured(env, account, trusted);
    log!(env, "trusted account configured", account.clone(), trusted);
    Ok(())
}

/// Transformação pura de leitura sobre o valor armazenado.
pub fn effective_allowance(stored: i128, spender_trusted: bool) -> i128 {
    if spender_trusted {
        UNLIMITED_ALLOWANCE
    } else {
        stored
    }
}

pub fn allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let stored = storage::get_stored_allowance(env, owner, spender);
    effective_allowance(stored, storage::is_trusted(env, spender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles;
    use crate::token::PermissionedLedger;
    use soroban_sdk::testutils::Address as _;

    #[test]
    fn test_effective_allowance() {
        assert_eq!(effective_allowance(100, false), 100);
        assert_eq!(effective_allowance(100, true), UNLIMITED_ALLOWANCE);
        assert_eq!(effective_allowance(0, true), UNLIMITED_ALLOWANCE);
    }

    #[test]
    fn test_override_never_touches_storage() {
        let env = Env::default();
        let contract_id = env.register_contract(None, PermissionedLedger);
        let owner = Address::generate(&env);
        let holder = Address::generate(&env);
        let spender = Address::generate(&env);
        env.as_contract(&contract_id, || {
            roles::grant_unchecked(&env, &roles::owner_role(&env), &owner, &owner);
            storage::set_stored_allowance(&env, &holder, &spender, 100);

            configure_trusted_account(&env, &owner, &spender, true).unwrap();
            assert!(is_trusted_account(&env, &spender));
            assert_eq!(allowance(&env, &holder, &spender), UNLIMITED_ALLOWANCE);
            assert_eq!(storage::get_stored_allowance(&env, &holder, &spender), 100);

            // approve enquanto confiável: grava, mas não aparece
            storage::set_stored_allowance(&env, &holder, &spender, 7);
            assert_eq!(allowance(&env, &holder, &spender), UNLIMITED_ALLOWANCE);

            configure_trusted_account(&env, &owner, &spender, false).unwrap();
            assert_eq!(allowance(&env, &holder, &spender), 7);
        });
    }

    #[test]
    fn test_redundant_configuration_is_rejected() {
        let env = Env::default();
        let contract_id = env.register_contract(None, PermissionedLedger);
        let owner = Address::generate(&env);
        let spender = Address::generate(&env);
        env.as_contract(&contract_id, || {
            roles::grant_unchecked(&env, &roles::owner_role(&env), &owner, &owner);

            assert_eq!(
                configure_trusted_account(&env, &owner, &spender, false),
                Err(LedgerError::AlreadyConfigured)
            );
            configure_trusted_account(&env, &owner, &spender, true).unwrap();
            assert_eq!(
                configure_trusted_account(&env, &owner, &spender, true),
                Err(LedgerError::AlreadyConfigured)
            );
            assert_eq!(
                configure_trusted_account(&env, &spender, &spender, false),
                Err(LedgerError::Unauthorized)
            );
        });
    }
}
