use tracing::{info, warn};

use crate::domain::{Cents, format_cents, parse_cents};
use crate::storage::BalanceStore;

use super::{CreditError, DebitError};

/// Application service enforcing the credit/debit rules for a single account.
/// This is the primary interface for any client (menu, tests, etc.).
///
/// Every operation reads the store before mutating it, so the service never
/// works from a stale copy of the balance.
pub struct AccountService<S> {
    store: S,
}

impl<S: BalanceStore> AccountService<S> {
    /// Create a new account service owning the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Get the current balance.
    pub fn view_balance(&self) -> Cents {
        self.store.read_balance()
    }

    /// Add `amount` to the balance and return the new balance.
    ///
    /// Zero and negative amounts are accepted as-is.
    pub fn credit(&mut self, amount: Cents) -> Result<Cents, CreditError> {
        let balance = self.store.read_balance();
        let Some(new_balance) = balance.checked_add(amount) else {
            warn!(balance, amount, "credit rejected: overflow");
            return Err(CreditError::Overflow);
        };

        self.store.write_balance(new_balance);
        info!(
            amount = %format_cents(amount),
            balance = %format_cents(new_balance),
            "account credited"
        );
        Ok(new_balance)
    }

    /// Subtract `amount` from the balance and return the new balance.
    ///
    /// The debit only applies when `amount` does not exceed the current
    /// balance; otherwise nothing is written.
    pub fn debit(&mut self, amount: Cents) -> Result<Cents, DebitError> {
        let balance = self.store.read_balance();
        if amount > balance {
            warn!(
                balance = %format_cents(balance),
                requested = %format_cents(amount),
                "debit rejected: insufficient funds"
            );
            return Err(DebitError::InsufficientFunds {
                balance,
                requested: amount,
            });
        }

        let Some(new_balance) = balance.checked_sub(amount) else {
            warn!(balance, amount, "debit rejected: overflow");
            return Err(DebitError::Overflow);
        };

        self.store.write_balance(new_balance);
        info!(
            amount = %format_cents(amount),
            balance = %format_cents(new_balance),
            "account debited"
        );
        Ok(new_balance)
    }

    /// Parse raw user input and credit it. Unparseable input never touches the store.
    pub fn credit_raw(&mut self, input: &str) -> Result<Cents, CreditError> {
        let amount = parse_cents(input).map_err(|e| {
            warn!(input, error = %e, "credit rejected: invalid amount");
            CreditError::InvalidAmount(input.trim().to_string())
        })?;
        self.credit(amount)
    }

    /// Parse raw user input and debit it. Unparseable input never touches the store.
    pub fn debit_raw(&mut self, input: &str) -> Result<Cents, DebitError> {
        let amount = parse_cents(input).map_err(|e| {
            warn!(input, error = %e, "debit rejected: invalid amount");
            DebitError::InvalidAmount(input.trim().to_string())
        })?;
        self.debit(amount)
    }
}
