use soroban_sdk::{log, Address, Bytes, BytesN, Env};
use crate::events;
use crate::storage;
use crate::types::{LedgerError, Role};

// ============================================================================
// REGISTRO DE PAPÉIS (RBAC)
// ============================================================================
//
// Cada papel tem exatamente um papel admin. O papel raiz (OWNER_ROLE, chave
// zero) administra a si mesmo; papéis nunca configurados respondem com o raiz.
// O grafo admin-de-admin é livre: ciclos não são detectados.

/// Papel raiz: chave de 32 bytes zerados.
pub fn owner_role(env: &Env) -> Role {
    BytesN::from_array(env, &[0u8; 32])
}

/// Papel de emissão do ledger.
pub fn minter_role(env: &Env) -> Role {
    role_from_name(env, b"MINTER_ROLE")
}

/// Deriva o identificador de um papel a partir do nome (keccak256).
pub fn role_from_name(env: &Env, name: &[u8]) -> Role {
    env.crypto().keccak256(&Bytes::from_slice(env, name)).into()
}

pub fn has_role(env: &Env, role: &Role, account: &Address) -> bool {
    storage::has_role(env, role, account)
}

pub fn get_role_admin(env: &Env, role: &Role) -> Role {
    storage::get_role_admin(env, role).unwrap_or_else(|| owner_role(env))
}

/// Falha com `Unauthorized` se `account` não tem `role`.
pub fn check_role(env: &Env, role: &Role, account: &Address) -> Result<(), LedgerError> {
    if !has_role(env, role, account) {
        return Err(LedgerError::Unauthorized);
    }
    Ok(())
}

// ============================================================================
// MUTAÇÕES AUTORIZADAS
// ============================================================================

pub fn grant_role(
    env: &Env,
    caller: &Address,
    role: &Role,
    account: &Address,
) -> Result<(), LedgerError> {
    check_role(env, &get_role_admin(env, role), caller)?;
    grant_unchecked(env, role, account, caller);
    Ok(())
}

pub fn revoke_role(
    env: &Env,
    caller: &Address,
    role: &Role,
    account: &Address,
) -> Result<(), LedgerError> {
    check_role(env, &get_role_admin(env, role), caller)?;
    revoke_unchecked(env, role, account, caller);
    Ok(())
}

/// Auto-revogação: só vale para a própria conta do caller.
pub fn renounce_role(
    env: &Env,
    caller: &Address,
    role: &Role,
    account: &Address,
) -> Result<(), LedgerError> {
    if caller != account {
        return Err(LedgerError::InvalidSelfTarget);
    }
    revoke_unchecked(env, role, account, caller);
    Ok(())
}

/// Troca o admin de `role`. Exige o papel raiz; o admin do raiz é fixo.
pub fn set_role_admin(
    env: &Env,
    caller: &Address,
    role: &Role,
    admin_role: &Role,
) -> Result<(), LedgerError> {
    let owner = owner_role(env);
    check_role(env, &owner, caller)?;
    if *role == owner {
        return Err(LedgerError::RootRoleAdminFixed);
    }
    set_role_admin_unchecked(env, role, admin_role);
    Ok(())
}

// ============================================================================
// MUTAÇÕES INTERNAS (sem checagem de autorização)
// ============================================================================

/// Retorna `true` se a associação mudou.
pub(crate) fn grant_unchecked(env: &Env, role: &Role, account: &Address, sender: &Address) -> bool {
    if storage::has_role(env, role, account) {
        return false;
    }
    storage::set_role_member(env, role, account, true);
    events::emit_role_granted(env, role, account, sender);
    log!(env, "role granted", account.clone(), sender.clone());
    true
}

pub(crate) fn revoke_unchecked(env: &Env, role: &Role, account: &Address, sender: &Address) -> bool {
    if !storage::has_role(env, role, account) {
        return false;
    }
    storage::set_role_member(env, role, account, false);
    events::emit_role_revoked(env, role, account, sender);
    log!(env, "role revoked", account.clone(), sender.clone());
    true
}

pub(crate) fn set_role_admin_unchecked(env: &Env, role: &Role, admin_role: &Role) {
    let previous = get_role_admin(env, role);
    if previous == *admin_role {
        return;
    }
    storage::set_role_admin(env, role, admin_role);
    events::emit_role_admin_changed(env, role, &previous, admin_role);
}
