use thiserror::Error;

use crate::domain::Cents;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreditError {
    #[error("Invalid amount entered.")]
    InvalidAmount(String),

    #[error("Credit would overflow the balance")]
    Overflow,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DebitError {
    #[error("Invalid amount entered.")]
    InvalidAmount(String),

    #[error("Insufficient funds for this debit.")]
    InsufficientFunds { balance: Cents, requested: Cents },

    #[error("Debit would overflow the balance")]
    Overflow,
}
