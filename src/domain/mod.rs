//! Domain entities and the ports they are reached through.
//!
//! The factory in the application layer only ever talks to the traits in
//! [`ports`]; concrete repositories live in the infrastructure layer.

pub mod channel;
pub mod inflector;
pub mod locale;
pub mod payment_method;
pub mod ports;
