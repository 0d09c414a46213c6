use crate::Error;

/// The character joining the octets of an EUI-48 string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// `aa:bb:cc:dd:ee:ff`
    #[default]
    Colon,
    /// `AA-BB-CC-DD-EE-FF`
    Hyphen,
}

impl Separator {
    pub const COLON: char = ':';
    pub const HYPHEN: char = '-';

    pub fn as_char(&self) -> char {
        match self {
            Self::Colon => Self::COLON,
            Self::Hyphen => Self::HYPHEN,
        }
    }
}

impl TryFrom<char> for Separator {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            Self::COLON => Ok(Self::Colon),
            Self::HYPHEN => Ok(Self::Hyphen),
            value => Err(Error::InvalidSeparator(value)),
        }
    }
}

impl From<Separator> for char {
    fn from(value: Separator) -> Self {
        value.as_char()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_colon_and_hyphen_are_accepted() {
        assert_eq!(Separator::try_from(':').unwrap(), Separator::Colon);
        assert_eq!(Separator::try_from('-').unwrap(), Separator::Hyphen);

        for bad in [';', '.', ' ', '_'] {
            match Separator::try_from(bad) {
                Err(Error::InvalidSeparator(c)) => assert_eq!(c, bad),
                other => panic!("unexpected {other:?}"),
            }
        }
    }
}
