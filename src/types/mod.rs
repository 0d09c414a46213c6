//! Re-export types

mod separator;
pub use separator::Separator;

mod mac;
pub use mac::{decode, encode, MacAddr, Notation};
