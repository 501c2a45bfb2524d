//! The main error type for the crate. There is exactly one failure condition
//! in this library, so the enum is short and sweet.

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// Tried to add or subtract two `Money` values that do not share a
    /// currency. The operation is refused outright, nothing is computed.
    #[error("cannot combine money values of different currencies")]
    DifferentCurrency,
}

pub type Result<T> = std::result::Result<T, Error>;
