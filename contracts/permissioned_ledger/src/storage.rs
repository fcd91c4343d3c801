use soroban_sdk::{symbol_short, Address, BytesN, Env, IntoVal, Val};
use crate::types::{InitState, Layer, Role};

// ============================================================================
// CONSTANTES
// ============================================================================

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

/// Faz bump do TTL de storage crítico (capabilities, paused, init, supply)
pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

/// Faz bump de uma entrada persistente recém-escrita.
fn bump_persistent<K: IntoVal<Env, Val>>(env: &Env, key: &K) {
    env.storage().persistent().extend_ttl(
        key,
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

// ============================================================================
// INICIALIZAÇÃO
// ============================================================================

pub fn get_init_state(env: &Env) -> InitState {
    env.storage()
        .instance()
        .get(&symbol_short!("init"))
        .unwrap_or(InitState::Uninitialized)
}

pub fn set_init_state(env: &Env, state: InitState) {
    env.storage().instance().set(&symbol_short!("init"), &state);
}

pub fn get_layer_state(env: &Env, layer: Layer) -> InitState {
    let key = (symbol_short!("layer"), layer);
    env.storage()
        .instance()
        .get(&key)
        .unwrap_or(InitState::Uninitialized)
}

pub fn set_layer_state(env: &Env, layer: Layer, state: InitState) {
    let key = (symbol_short!("layer"), layer);
    env.storage().instance().set(&key, &state);
}

// ============================================================================
// PAPÉIS (RBAC)
// ============================================================================

pub fn has_role(env: &Env, role: &Role, account: &Address) -> bool {
    let key = (symbol_short!("role"), role.clone(), account.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(false)
}

pub fn set_role_member(env: &Env, role: &Role, account: &Address, member: bool) {
    let key = (symbol_short!("role"), role.clone(), account.clone());
    if member {
        env.storage().persistent().set(&key, &true);
        bump_persistent(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

/// Admin registrado para `role`, se houver.
pub fn get_role_admin(env: &Env, role: &Role) -> Option<Role> {
    let key = (symbol_short!("role_adm"), role.clone());
    env.storage().persistent().get::<_, BytesN<32>>(&key)
}

pub fn set_role_admin(env: &Env, role: &Role, admin_role: &Role) {
    let key = (symbol_short!("role_adm"), role.clone());
    env.storage().persistent().set(&key, admin_role);
    bump_persistent(env, &key);
}

// ============================================================================
// CAPABILITIES (pauser / blacklister / rescuer)
// ============================================================================

pub fn get_pauser(env: &Env) -> Option<Address> {
    env.storage().instance().get(&symbol_short!("pauser"))
}

pub fn set_pauser(env: &Env, pauser: &Address) {
    env.storage().instance().set(&symbol_short!("pauser"), pauser);
}

pub fn get_blacklister(env: &Env) -> Option<Address> {
    env.storage().instance().get(&symbol_short!("blklister"))
}

pub fn set_blacklister(env: &Env, blacklister: &Address) {
    env.storage().instance().set(&symbol_short!("blklister"), blacklister);
}

pub fn get_rescuer(env: &Env) -> Option<Address> {
    env.storage().instance().get(&symbol_short!("rescuer"))
}

pub fn set_rescuer(env: &Env, rescuer: &Address) {
    env.storage().instance().set(&symbol_short!("rescuer"), rescuer);
}

// ============================================================================
// PAUSED
// ============================================================================

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("paused"))
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&symbol_short!("paused"), &paused);
}

// ============================================================================
// BLACKLIST
// ============================================================================

pub fn is_blacklisted(env: &Env, addr: &Address) -> bool {
    let key = (symbol_short!("blacklist"), addr.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(false)
}

pub fn set_blacklisted(env: &Env, addr: &Address, blacklisted: bool) {
    let key = (symbol_short!("blacklist"), addr.clone());
    if blacklisted {
        env.storage().persistent().set(&key, &true);
        bump_persistent(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// ============================================================================
// TRUSTED ACCOUNTS
// ============================================================================

pub fn is_trusted(env: &Env, addr: &Address) -> bool {
    let key = (symbol_short!("trusted"), addr.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(false)
}

pub fn set_trusted(env: &Env, addr: &Address, trusted: bool) {
    let key = (symbol_short!("trusted"), addr.clone());
    if trusted {
        env.storage().persistent().set(&key, &true);
        bump_persistent(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// ============================================================================
// ALLOWANCE (valor armazenado, sem override)
// ============================================================================

pub fn get_stored_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let key = (symbol_short!("allow"), owner.clone(), spender.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_stored_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = (symbol_short!("allow"), owner.clone(), spender.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

// ============================================================================
// BALANCE / TOTAL SUPPLY
// ============================================================================

pub fn get_balance(env: &Env, addr: &Address) -> i128 {
    let key = (symbol_short!("balance"), addr.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, addr: &Address, amount: i128) {
    let key = (symbol_short!("balance"), addr.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("supply"))
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&symbol_short!("supply"), &amount);
}
