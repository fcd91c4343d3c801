use soroban_sdk::{symbol_short, Address, Env};
use crate::types::Role;

//
// EVENTOS DE CONTROLE DE ACESSO
//

pub fn emit_role_granted(env: &Env, role: &Role, account: &Address, sender: &Address) {
    env.events().publish(
        (symbol_short!("role_grnt"), role.clone(), account.clone()),
        sender.clone(),
    );
}

pub fn emit_role_revoked(env: &Env, role: &Role, account: &Address, sender: &Address) {
    env.events().publish(
        (symbol_short!("role_rvk"), role.clone(), account.clone()),
        sender.clone(),
    );
}

pub fn emit_role_admin_changed(env: &Env, role: &Role, previous: &Role, new_admin: &Role) {
    env.events().publish(
        (symbol_short!("role_adm"), role.clone()),
        (previous.clone(), new_admin.clone()),
    );
}

//
// CAPABILITIES
//

pub fn emit_pauser_changed(env: &Env, pauser: &Address) {
    env.events().publish(
        (symbol_short!("pauser"),),
        pauser.clone(),
    );
}

pub fn emit_blacklister_changed(env: &Env, blacklister: &Address) {
    env.events().publish(
        (symbol_short!("blklister"),),
        blacklister.clone(),
    );
}

pub fn emit_rescuer_changed(env: &Env, rescuer: &Address) {
    env.events().publish(
        (symbol_short!("rescuer"),),
        rescuer.clone(),
    );
}

//
// PAUSA
//

pub fn emit_pause(env: &Env, caller: &Address) {
    env.events().publish(
        (symbol_short!("pause"),),
        caller.clone(),
    );
}

pub fn emit_unpause(env: &Env, caller: &Address) {
    env.events().publish(
        (symbol_short!("unpause"),),
        caller.clone(),
    );
}

//
// BLACKLIST
//

pub fn emit_blacklisted(env: &Env, addr: &Address) {
    env.events().publish(
        (symbol_short!("blklst"), addr.clone()),
        (),
    );
}

pub fn emit_unblacklisted(env: &Env, addr: &Address) {
    env.events().publish(
        (symbol_short!("unblklst"), addr.clone()),
        (),
    );
}

// Sempre acompanha um `blklst` do mesmo endereço
pub fn emit_self_blacklisted(env: &Env, addr: &Address) {
    env.events().publish(
        (symbol_short!("self_bl"), addr.clone()),
        (),
    );
}

//
// TRUSTED / RESCUE / INIT
//

pub fn emit_trusted_configured(env: &Env, addr: &Address, trusted: bool) {
    env.events().publish(
        (symbol_short!("trusted"), addr.clone()),
        trusted,
    );
}

pub fn emit_rescued(env: &Env, asset: &Address, recipient: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("rescue"), asset.clone(), recipient.clone()),
        amount,
    );
}

pub fn emit_initialized(env: &Env, owner: &Address) {
    env.events().publish(
        (symbol_short!("init"),),
        owner.clone(),
    );
}

//
// LEDGER (SEP-41)
//

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("transfer"), from.clone(), to.clone()),
        amount,
    );
}

pub fn emit_mint(env: &Env, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("mint"), to.clone()),
        amount,
    );
}

pub fn emit_burn(env: &Env, from: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("burn"), from.clone()),
        amount,
    );
}

pub fn emit_approval(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("approve"), owner.clone(), spender.clone()),
        amount,
    );
}
