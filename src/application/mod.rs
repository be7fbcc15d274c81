// Application layer - turns raw user input into ledger operations.
// The ledger itself stays free of string parsing.

pub mod error;
pub mod form;

pub use error::*;
pub use form::*;
