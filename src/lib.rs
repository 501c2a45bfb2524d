//! This library holds a small set of value types for representing money:
//! a [`Currency`] describing a denomination and a [`Money`] pairing an
//! amount with one. Arithmetic on `Money` is currency-aware: adding dollars
//! to yen is an error, not a number.
//!
//! Everything here is an immutable value. Operations hand back new values
//! and never touch their operands, so sharing instances across threads is
//! safe by construction. There is no exchange-rate logic, no locale
//! handling, and no I/O of any kind.

pub mod error;
mod models;

pub use crate::models::{
    currency::{Currency, CurrencyBuilder},
    money::Money,
};
