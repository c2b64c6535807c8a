// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::cell::Cell;

use tally::{AccountService, BalanceStore, Cents};

/// Store that records how many times it was read and written.
#[derive(Debug, Default)]
pub struct CountingStore {
    balance: Cents,
    reads: Cell<usize>,
    writes: usize,
}

impl CountingStore {
    pub fn with_balance(balance: Cents) -> Self {
        Self {
            balance,
            ..Self::default()
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Current balance without counting it as a read.
    pub fn peek(&self) -> Cents {
        self.balance
    }
}

impl BalanceStore for CountingStore {
    fn read_balance(&self) -> Cents {
        self.reads.set(self.reads.get() + 1);
        self.balance
    }

    fn write_balance(&mut self, balance: Cents) {
        self.writes += 1;
        self.balance = balance;
    }
}

/// Helper to create a service over a counting store
pub fn counting_service(balance: Cents) -> AccountService<CountingStore> {
    AccountService::new(CountingStore::with_balance(balance))
}

/// Balances and amounts exercised by the property-style tests
pub const SAMPLE_BALANCES: [Cents; 6] = [0, 1, 100_000, 115_050, 99_999_999, -5_000];
pub const SAMPLE_AMOUNTS: [Cents; 6] = [0, 1, 5_000, 25_050, 100_000, 500_000];
