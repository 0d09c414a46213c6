//! # ethaddr
//! EUI-48 hardware addresses: converting them to and from text, and asking
//! the OS which one an interface has.

pub mod error;
pub use error::{Error, Result};

pub mod ether;

mod interface;
pub use interface::{
    get_hardware_address, get_hardware_address_from, HardwareAddressSource, IfRequest,
    SiocgifhwaddrSource, IFNAMSIZ, IFREQ_LEN,
};

mod types;
pub use types::{decode, encode, MacAddr, Notation, Separator};
