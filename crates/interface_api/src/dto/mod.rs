//! Request and response bodies

pub mod session;
pub mod ledger;
pub mod bill;
