// Application layer - business rules on top of the balance store.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
