use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::application::{AccountService, CreditError, DebitError};
use crate::domain::{Cents, format_cents};
use crate::storage::BalanceStore;

const RULE_WIDTH: usize = 32;

/// A selection from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewBalance,
    Credit,
    Debit,
    Exit,
    /// Anything that is not 1-4. Re-displays the menu.
    Invalid,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<u8>() {
            Ok(1) => MenuChoice::ViewBalance,
            Ok(2) => MenuChoice::Credit,
            Ok(3) => MenuChoice::Debit,
            Ok(4) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}

pub fn render_view(balance: Cents) -> String {
    format!("Current balance: {}", format_cents(balance))
}

pub fn render_credit(result: &Result<Cents, CreditError>) -> String {
    match result {
        Ok(balance) => format!("Amount credited. New balance: {}", format_cents(*balance)),
        Err(e) => e.to_string(),
    }
}

pub fn render_debit(result: &Result<Cents, DebitError>) -> String {
    match result {
        Ok(balance) => format!("Amount debited. New balance: {}", format_cents(*balance)),
        Err(e) => e.to_string(),
    }
}

/// Interactive menu loop over an account service.
///
/// Input and output are generic so the loop can be driven from a script or a test.
pub struct Menu<R, W, S> {
    input: R,
    output: W,
    service: AccountService<S>,
    running: bool,
}

impl<R: BufRead, W: Write, S: BalanceStore> Menu<R, W, S> {
    pub fn new(input: R, output: W, service: AccountService<S>) -> Self {
        Self {
            input,
            output,
            service,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn into_parts(self) -> (W, AccountService<S>) {
        (self.output, self.service)
    }

    /// Run until the user picks Exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        while self.running {
            self.display_menu()?;
            let choice = match self.read_line()? {
                Some(line) => MenuChoice::parse(&line),
                None => {
                    tracing::debug!("end of input, leaving menu");
                    MenuChoice::Exit
                }
            };
            self.handle_choice(choice)?;
        }

        writeln!(self.output, "Exiting the program. Goodbye!")?;
        self.output.flush().context("Failed to flush output")?;
        Ok(())
    }

    pub fn display_menu(&mut self) -> Result<()> {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "Account Management System")?;
        writeln!(self.output, "1. View Balance")?;
        writeln!(self.output, "2. Credit Account")?;
        writeln!(self.output, "3. Debit Account")?;
        writeln!(self.output, "4. Exit")?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "Enter your choice (1-4): ")?;
        self.output.flush().context("Failed to flush output")?;
        Ok(())
    }

    pub fn handle_choice(&mut self, choice: MenuChoice) -> Result<()> {
        tracing::debug!(?choice, "menu selection");
        match choice {
            MenuChoice::ViewBalance => {
                let balance = self.service.view_balance();
                writeln!(self.output, "{}", render_view(balance))?;
            }
            MenuChoice::Credit => {
                let input = self.prompt("Enter credit amount: ")?;
                let result = self.service.credit_raw(&input);
                writeln!(self.output, "{}", render_credit(&result))?;
            }
            MenuChoice::Debit => {
                let input = self.prompt("Enter debit amount: ")?;
                let result = self.service.debit_raw(&input);
                writeln!(self.output, "{}", render_debit(&result))?;
            }
            MenuChoice::Exit => self.running = false,
            MenuChoice::Invalid => {
                writeln!(self.output, "Invalid choice, please select 1-4.")?;
            }
        }
        Ok(())
    }

    /// Print `message` without a newline and read the answer.
    /// End of input yields an empty answer, which fails to parse as an amount.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush().context("Failed to flush output")?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        Ok((read > 0).then_some(line))
    }
}
