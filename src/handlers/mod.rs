//! HTTP handlers, one module per resource plus dice rolling.

pub mod campaign;
pub mod character;
pub mod dice;
pub mod monster;
pub mod session;
