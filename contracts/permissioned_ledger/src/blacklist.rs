use soroban_sdk::{log, Address, Env};
use crate::events;
use crate::storage;
use crate::types::LedgerError;
use crate::validation;

// ============================================================================
// BLACKLIST GATE
// ============================================================================

/// Valida se o caller é o blacklister configurado
pub fn require_blacklister(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    match storage::get_blacklister(env) {
        Some(blacklister) if blacklister == *caller => Ok(()),
        _ => Err(LedgerError::Unauthorized),
    }
}

pub fn blacklist(env: &Env, caller: &Address, account: &Address) -> Result<(), LedgerError> {
    require_blacklister(env, caller)?;
    if storage::is_blacklisted(env, account) {
        return Ok(());
    }

    storage::set_blacklisted(env, account, true);
    events::emit_blacklisted(env, account);
    Ok(())
}

pub fn un_blacklist(env: &Env, caller: &Address, account: &Address) -> Result<(), LedgerError> {
    require_blacklister(env, caller)?;
    if !storage::is_blacklisted(env, account) {
        return Ok(());
    }

    storage::set_blacklisted(env, account, false);
    events::emit_unblacklisted(env, account);
    Ok(())
}

/// Qualquer conta pode se colocar na blacklist. Não existe o caminho inverso.
pub fn self_blacklist(env: &Env, caller: &Address) {
    if storage::is_blacklisted(env, caller) {
        return;
    }

    storage::set_blacklisted(env, caller, true);
    events::emit_blacklisted(env, caller);
    events::emit_self_blacklisted(env, caller);
    log!(env, "account self-blacklisted", caller.clone());
}

/// Troca o blacklister (apenas owner). Repetir o mesmo endereço não emite evento.
pub fn update_blacklister(
    env: &Env,
    caller: &Address,
    new_blacklister: &Address,
) -> Result<(), LedgerError> {
    validation::require_owner(env, caller)?;
    set_blacklister_unchecked(env, new_blacklister);
    Ok(())
}

pub(crate) fn set_blacklister_unchecked(env: &Env, new_blacklister: &Address) {
    if storage::get_blacklister(env).as_ref() == Some(new_blacklister) {
        return;
    }
    storage::set_blacklister(env, new_blacklister);
    events::emit_blacklister_changed(env, new_blacklister);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles;
    use crate::token::PermissionedLedger;
    use soroban_sdk::testutils::{Address as _, Events as _};
    use soroban_sdk::{symbol_short, Symbol, TryFromVal};

    fn setup(env: &Env) -> (Address, Address, Address) {
        let contract_id = env.register_contract(None, PermissionedLedger);
        let owner = Address::generate(env);
        let blacklister = Address::generate(env);
        env.as_contract(&contract_id, || {
            roles::grant_unchecked(env, &roles::owner_role(env), &owner, &owner);
            set_blacklister_unchecked(env, &blacklister);
        });
        (contract_id, owner, blacklister)
    }

    // Conta eventos cujo primeiro tópico é `topic`
    fn count_topic(env: &Env, topic: Symbol) -> u32 {
        let mut n = 0;
        for (_, topics, _) in env.events().all().iter() {
            if let Some(first) = topics.get(0) {
                if Symbol::try_from_val(env, &first).ok() == Some(topic.clone()) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn test_blacklist_requires_blacklister() {
        let env = Env::default();
        let (contract_id, owner, _) = setup(&env);
        let user = Address::generate(&env);
        env.as_contract(&contract_id, || {
            assert_eq!(blacklist(&env, &owner, &user), Err(LedgerError::Unauthorized));
            assert_eq!(un_blacklist(&env, &owner, &user), Err(LedgerError::Unauthorized));
            assert!(!storage::is_blacklisted(&env, &user));
        });
    }

    #[test]
    fn test_blacklist_round_trip_is_idempotent() {
        let env = Env::default();
        let (contract_id, _, blacklister) = setup(&env);
        let user = Address::generate(&env);
        env.as_contract(&contract_id, || {
            blacklist(&env, &blacklister, &user).unwrap();
            blacklist(&env, &blacklister, &user).unwrap();
            assert!(storage::is_blacklisted(&env, &user));
            assert_eq!(count_topic(&env, symbol_short!("blklst")), 1);

            un_blacklist(&env, &blacklister, &user).unwrap();
            un_blacklist(&env, &blacklister, &user).unwrap();
            assert!(!storage::is_blacklisted(&env, &user));
            assert_eq!(count_topic(&env, symbol_short!("unblklst")), 1);
        });
    }

    #[test]
    fn test_self_blacklist_emits_both_once() {
        let env = Env::default();
        let (contract_id, _, _) = setup(&env);
        let user = Address::generate(&env);
        env.as_contract(&contract_id, || {
            self_blacklist(&env, &user);
            assert!(storage::is_blacklisted(&env, &user));
            assert_eq!(count_topic(&env, symbol_short!("blklst")), 1);
            assert_eq!(count_topic(&env, symbol_short!("self_bl")), 1);

            self_blacklist(&env, &user);
            assert!(storage::is_blacklisted(&env, &user));
            assert_eq!(count_topic(&env, symbol_short!("blklst")), 1);
            assert_eq!(count_topic(&env, symbol_short!("self_bl")), 1);
        });
    }

    #[test]
    fn test_self_blacklist_without_blacklister() {
        let env = Env::default();
        let contract_id = env.register_contract(None, PermissionedLedger);
        let user = Address::generate(&env);
        env.as_contract(&contract_id, || {
            assert_eq!(storage::get_blacklister(&env), None);
            self_blacklist(&env, &user);
            assert!(storage::is_blacklisted(&env, &user));
        });
    }

    #[test]
    fn test_update_blacklister_is_idempotent() {
        let env = Env::default();
        let (contract_id, owner, blacklister) = setup(&env);
        let next = Address::generate(&env);
        env.as_contract(&contract_id, || {
            let before = count_topic(&env, symbol_short!("blklister"));
            update_blacklister(&env, &owner, &blacklister).unwrap();
            assert_eq!(count_topic(&env, symbol_short!("blklister")), before);

            update_blacklister(&env, &owner, &next).unwrap();
            update_blacklister(&env, &owner, &next).unwrap();
            assert_eq!(count_topic(&env, symbol_short!("blklister")), before + 1);
            assert_eq!(storage::get_blacklister(&env), Some(next.clone()));
            assert_eq!(
                update_blacklister(&env, &blacklister, &owner),
                Err(LedgerError::Unauthorized)
            );
        });
    }
}
