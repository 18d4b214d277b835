//! Request handlers

pub mod health;
pub mod sessions;
pub mod participants;
pub mod expenses;
pub mod balances;
pub mod bills;
