//! Deals with mac addresses and their EUI-48 text form

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use super::Separator;
use crate::ether::ETH_ALEN;
use crate::{Error, Result};

lazy_static! {
    static ref COLON_FORM: Regex = Regex::new(r"^([0-9A-Fa-f]{2}:){5}[0-9A-Fa-f]{2}$").unwrap();
    static ref HYPHEN_FORM: Regex = Regex::new(r"^([0-9A-Fa-f]{2}-){5}[0-9A-Fa-f]{2}$").unwrap();
}

/// A 48-bit hardware address, most significant octet first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MacAddr([u8; 6]);

impl MacAddr {
    pub const LEN: usize = ETH_ALEN;

    /// Length of the text form, six octets of two digits and five separators
    pub const TEXT_LEN: usize = 17;

    pub fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Lower case hex octets joined by `separator`
    pub fn to_eui48(&self, separator: Separator) -> String {
        let mut text = String::with_capacity(Self::TEXT_LEN);
        for (index, octet) in self.0.iter().enumerate() {
            if index > 0 {
                text.push(separator.as_char());
            }
            text.push_str(&format!("{octet:02x}"));
        }
        text
    }
}

impl From<[u8; 6]> for MacAddr {
    fn from(value: [u8; 6]) -> Self {
        Self(value)
    }
}

impl From<MacAddr> for [u8; 6] {
    fn from(value: MacAddr) -> Self {
        value.0
    }
}

impl TryFrom<&[u8]> for MacAddr {
    type Error = Error;

    fn try_from(value: &[u8]) -> std::result::Result<Self, Self::Error> {
        let bytes: [u8; 6] = value
            .try_into()
            .map_err(|_| Error::InvalidLength(value.len()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_eui48(Separator::Colon))
    }
}

impl FromStr for MacAddr {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        decode(s)
    }
}

/// Which of the two EUI-48 notations a string is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Colon,
    Hyphen,
    Invalid,
}

impl Notation {
    /// The colon pattern is tried first, but a string can only ever match one
    pub fn classify(text: &str) -> Self {
        if COLON_FORM.is_match(text) {
            Self::Colon
        } else if HYPHEN_FORM.is_match(text) {
            Self::Hyphen
        } else {
            Self::Invalid
        }
    }

    pub fn separator(&self) -> Option<Separator> {
        match self {
            Self::Colon => Some(Separator::Colon),
            Self::Hyphen => Some(Separator::Hyphen),
            Self::Invalid => None,
        }
    }
}

/// Convert the raw bytes of an address into its EUI-48 string
pub fn encode(address: &[u8], separator: char) -> Result<String> {
    let address = MacAddr::try_from(address)?;
    let separator = Separator::try_from(separator)?;
    Ok(address.to_eui48(separator))
}

/// Convert an EUI-48 string, `:` or `-` separated in any case, into an address
pub fn decode(text: &str) -> Result<MacAddr> {
    let separator = Notation::classify(text)
        .separator()
        .ok_or_else(|| Error::InvalidFormat(text.to_owned()))?;

    let mut bytes = [0u8; MacAddr::LEN];
    for (byte, octet) in bytes.iter_mut().zip(text.split(separator.as_char())) {
        *byte = u8::from_str_radix(octet, 16)
            .map_err(|_| Error::InvalidFormat(text.to_owned()))?;
    }

    Ok(MacAddr(bytes))
}
