mod memory;

pub use memory::*;

use crate::domain::Cents;

/// Holds the authoritative balance for a single account.
///
/// Writes are unconditional: any value is accepted, including negative ones.
/// Enforcing business rules is up to the caller.
pub trait BalanceStore {
    /// Return the current balance.
    fn read_balance(&self) -> Cents;

    /// Overwrite the current balance.
    fn write_balance(&mut self, balance: Cents);
}
