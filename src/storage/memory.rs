use tracing::debug;

use crate::domain::{Cents, STARTING_BALANCE};

use super::BalanceStore;

/// In-process balance store. The value lives as long as the store does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStore {
    balance: Cents,
}

impl MemoryStore {
    /// Create a store holding the default starting balance (1000.00).
    pub fn new() -> Self {
        Self::with_balance(STARTING_BALANCE)
    }

    /// Create a store holding the given opening balance.
    pub fn with_balance(balance: Cents) -> Self {
        Self { balance }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceStore for MemoryStore {
    fn read_balance(&self) -> Cents {
        debug!(balance = self.balance, "read balance");
        self.balance
    }

    fn write_balance(&mut self, balance: Cents) {
        debug!(old = self.balance, new = balance, "write balance");
        self.balance = balance;
    }
}
