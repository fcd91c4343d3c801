use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};
use crate::blacklist;
use crate::init;
use crate::ledger;
use crate::pause;
use crate::rescue;
use crate::roles;
use crate::storage;
use crate::trusted;
use crate::types::{InitConfig, InitState, LedgerError};
use crate::validation;

//
// CONTRATO PRINCIPAL - PERMISSIONED LEDGER
//
// Toda entrada mutável segue a mesma ordem:
//   1. contrato inicializado
//   2. auth do caller (host)
//   3. papéis / pause / blacklist, conforme a operação
//   4. efeitos e eventos

#[contract]
pub struct PermissionedLedger;

/// Checks comuns às entradas mutáveis.
fn enter(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    validation::require_initialized(env)?;
    caller.require_auth();
    storage::bump_critical_storage(env);
    Ok(())
}

#[contractimpl]
impl PermissionedLedger {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa todas as camadas, em ordem, uma única vez.
    ///
    /// # Erros
    /// - `AlreadyInitialized`: Se o contrato já foi inicializado
    pub fn initialize(env: Env, config: InitConfig) -> Result<(), LedgerError> {
        // estado antes da auth: um segundo initialize nunca depende de quem assina
        if storage::get_init_state(&env) != InitState::Uninitialized {
            return Err(LedgerError::AlreadyInitialized);
        }
        config.owner.require_auth();
        storage::bump_critical_storage(&env);
        init::initialize(&env, &config)
    }

    /// Estado do sequenciador de inicialização.
    pub fn init_state(env: Env) -> InitState {
        storage::get_init_state(&env)
    }

    //
    // PAPÉIS (RBAC)
    //

    pub fn owner_role(env: Env) -> BytesN<32> {
        roles::owner_role(&env)
    }

    pub fn minter_role(env: Env) -> BytesN<32> {
        roles::minter_role(&env)
    }

    pub fn has_role(env: Env, role: BytesN<32>, account: Address) -> bool {
        roles::has_role(&env, &role, &account)
    }

    pub fn get_role_admin(env: Env, role: BytesN<32>) -> BytesN<32> {
        roles::get_role_admin(&env, &role)
    }

    /// Concede `role` a `account`. O caller precisa do papel admin de `role`.
    pub fn grant_role(
        env: Env,
        caller: Address,
        role: BytesN<32>,
        account: Address,
    ) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        roles::grant_role(&env, &caller, &role, &account)
    }

    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: BytesN<32>,
        account: Address,
    ) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        roles::revoke_role(&env, &caller, &role, &account)
    }

    /// # Erros
    /// - `InvalidSelfTarget`: Se `account` não for o próprio caller
    pub fn renounce_role(
        env: Env,
        caller: Address,
        role: BytesN<32>,
        account: Address,
    ) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        roles::renounce_role(&env, &caller, &role, &account)
    }

    pub fn set_role_admin(
        env: Env,
        caller: Address,
        role: BytesN<32>,
        admin_role: BytesN<32>,
    ) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        roles::set_role_admin(&env, &caller, &role, &admin_role)
    }

    //
    // PAUSA
    //

    pub fn pause(env: Env, caller: Address) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        pause::pause(&env, &caller)
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        pause::unpause(&env, &caller)
    }

    pub fn update_pauser(env: Env, caller: Address, new_pauser: Address) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        pause::update_pauser(&env, &caller, &new_pauser)
    }

    pub fn pauser(env: Env) -> Option<Address> {
        storage::get_pauser(&env)
    }

    /// Verifica se o contrato está pausado.
    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    //
    // BLACKLIST
    //

    pub fn blacklist(env: Env, caller: Address, account: Address) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        blacklist::blacklist(&env, &caller, &account)
    }

    pub fn un_blacklist(env: Env, caller: Address, account: Address) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        blacklist::un_blacklist(&env, &caller, &account)
    }

    /// Qualquer conta pode se bloquear; não há auto-desbloqueio.
    pub fn self_blacklist(env: Env, caller: Address) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        blacklist::self_blacklist(&env, &caller);
        Ok(())
    }

    pub fn update_blacklister(
        env: Env,
        caller: Address,
        new_blacklister: Address,
    ) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        blacklist::update_blacklister(&env, &caller, &new_blacklister)
    }

    pub fn blacklister(env: Env) -> Option<Address> {
        storage::get_blacklister(&env)
    }

    /// Verifica se um endereço está na blacklist.
    pub fn is_blacklisted(env: Env, account: Address) -> bool {
        storage::is_blacklisted(&env, &account)
    }

    //
    // TRUSTED ACCOUNTS
    //

    /// # Erros
    /// - `AlreadyConfigured`: Se a conta já está no estado pedido
    pub fn configure_trusted_account(
        env: Env,
        caller: Address,
        account: Address,
        trusted: bool,
    ) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        trusted::configure_trusted_account(&env, &caller, &account, trusted)
    }

    pub fn is_trusted_account(env: Env, account: Address) -> bool {
        trusted::is_trusted_account(&env, &account)
    }

    /// Allowance observada: ilimitada para spenders confiáveis.
    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        trusted::allowance(&env, &owner, &spender)
    }

    //
    // RESCUE
    //

    /// Move `amount` de `asset` do saldo do contrato para `recipient`.
    /// Funciona mesmo pausado e com o rescuer na blacklist.
    pub fn rescue(
        env: Env,
        caller: Address,
        asset: Address,
        recipient: Address,
        amount: i128,
    ) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        rescue::rescue(&env, &caller, &asset, &recipient, amount)
    }

    pub fn update_rescuer(env: Env, caller: Address, new_rescuer: Address) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        rescue::update_rescuer(&env, &caller, &new_rescuer)
    }

    pub fn rescuer(env: Env) -> Option<Address> {
        storage::get_rescuer(&env)
    }

    //
    // LEDGER (SEP-41)
    //

    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        ledger::mint(&env, &caller, &to, amount)
    }

    pub fn burn(env: Env, caller: Address, amount: i128) -> Result<(), LedgerError> {
        enter(&env, &caller)?;
        ledger::burn(&env, &caller, amount)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), LedgerError> {
        enter(&env, &from)?;
        ledger::transfer(&env, &from, &to, amount)
    }

    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), LedgerError> {
        enter(&env, &owner)?;
        ledger::approve(&env, &owner, &spender, amount)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), LedgerError> {
        enter(&env, &spender)?;
        ledger::transfer_from(&env, &spender, &from, &to, amount)
    }

    /// Retorna o balance de um endereço.
    pub fn balance(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    /// Retorna o supply total.
    pub fn total_supply(env: Env) -> i128 {
        storage::get_total_supply(&env)
    }
}

//
// TESTES UNITÁRIOS
//

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::Vec;

    // Helper para criar um cliente do contrato já inicializado
    fn create_client(env: &Env) -> (PermissionedLedgerClient, InitConfig) {
        let contract_id = env.register_contract(None, PermissionedLedger);
        let client = PermissionedLedgerClient::new(env, &contract_id);
        let config = InitConfig {
            owner: Address::generate(env),
            pauser: Address::generate(env),
            blacklister: Address::generate(env),
            rescuer: Address::generate(env),
            minter: Some(Address::generate(env)),
            trusted: Vec::new(env),
        };
        client.initialize(&config);
        (client, config)
    }

    #[test]
    fn test_initialize() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, config) = create_client(&env);

        assert_eq!(client.init_state(), InitState::Initialized);
        assert!(client.has_role(&client.owner_role(), &config.owner));
        assert_eq!(client.pauser(), Some(config.pauser));
        assert_eq!(client.blacklister(), Some(config.blacklister));
        assert_eq!(client.rescuer(), Some(config.rescuer));
        assert!(!client.is_paused());
        assert_eq!(client.total_supply(), 0);
    }

    #[test]
    fn test_mutations_rejected_before_initialize() {
        let env = Env::default();
        env.mock_all_auths();
        let contract_id = env.register_contract(None, PermissionedLedger);
        let client = PermissionedLedgerClient::new(&env, &contract_id);
        let user = Address::generate(&env);

        assert_eq!(client.init_state(), InitState::Uninitialized);
        assert_eq!(client.try_pause(&user), Err(Ok(LedgerError::NotInitialized)));
        assert_eq!(client.try_self_blacklist(&user), Err(Ok(LedgerError::NotInitialized)));
        assert_eq!(
            client.try_grant_role(&user, &client.owner_role(), &user),
            Err(Ok(LedgerError::NotInitialized))
        );
        // consultas puras sempre respondem
        assert!(!client.has_role(&client.owner_role(), &user));
        assert_eq!(client.allowance(&user, &user), 0);
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1)")] // AlreadyInitialized
    fn test_cannot_initialize_twice() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, config) = create_client(&env);
        client.initialize(&config);
    }

    #[test]
    fn test_mint_and_transfer() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, config) = create_client(&env);
        let minter = config.minter.unwrap();
        let user = Address::generate(&env);

        client.mint(&minter, &minter, &1_000);
        client.transfer(&minter, &user, &400);
        assert_eq!(client.balance(&minter), 600);
        assert_eq!(client.balance(&user), 400);
        assert_eq!(client.total_supply(), 1_000);

        client.burn(&minter, &600);
        assert_eq!(client.total_supply(), 400);
    }

    #[test]
    fn test_transfer_to_self_keeps_balance() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, config) = create_client(&env);
        let minter = config.minter.unwrap();

        client.mint(&minter, &minter, &50);
        client.transfer(&minter, &minter, &50);
        assert_eq!(client.balance(&minter), 50);
    }
}
