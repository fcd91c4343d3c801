use soroban_sdk::{contracterror, contracttype, Address, BytesN, Vec};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================

/// Códigos de erro estáveis: nunca renumerar, clientes dependem do `u32`.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    AlreadyInitialized = 1,
    NotInitializing = 2,
    Unauthorized = 3,
    InvalidSelfTarget = 4,
    ContractPaused = 5,
    AlreadyPaused = 6,
    AlreadyUnpaused = 7,
    BlacklistedAccount = 8,
    AlreadyConfigured = 9,
    InsufficientBalance = 10,

    // Chamada mutável antes do `initialize`
    NotInitialized = 11,
    InvalidAmount = 12,
    InsufficientAllowance = 13,
    // O admin do papel raiz é sempre ele mesmo
    RootRoleAdminFixed = 14,
    // Rescue do próprio ledger (reentrada)
    InvalidAsset = 15,
}

// ============================================================================
// PAPÉIS
// ============================================================================

/// Identificador opaco de papel (keccak256 do nome; o papel raiz é zero).
pub type Role = BytesN<32>;

// ============================================================================
// INICIALIZAÇÃO
// ============================================================================

/// Estado de inicialização, tanto do composto quanto de cada camada.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum InitState {
    Uninitialized = 0,
    Initializing = 1,
    Initialized = 2,
}

/// Camadas do contrato, da base (sem pai) até o topo.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Layer {
    AccessControl = 0,
    Pausable = 1,
    Blacklistable = 2,
    Rescuable = 3,
    TrustedAllowance = 4,
    Ledger = 5,
}

/// Configuração aplicada uma única vez pelo `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitConfig {
    /// Recebe o papel raiz (OWNER_ROLE).
    pub owner: Address,
    pub pauser: Address,
    pub blacklister: Address,
    pub rescuer: Address,
    /// Se presente, recebe o MINTER_ROLE já na inicialização.
    pub minter: Option<Address>,
    /// Spenders confiáveis desde o deploy.
    pub trusted: Vec<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_values_are_stable() {
        assert_eq!(LedgerError::AlreadyInitialized as u32, 1);
        assert_eq!(LedgerError::NotInitializing as u32, 2);
        assert_eq!(LedgerError::InsufficientBalance as u32, 10);
        assert_eq!(LedgerError::RootRoleAdminFixed as u32, 14);
        assert_eq!(LedgerError::InvalidAsset as u32, 15);
    }

    #[test]
    fn test_init_state_ordering() {
        assert!(InitState::Uninitialized < InitState::Initializing);
        assert!(InitState::Initializing < InitState::Initialized);
    }
}
