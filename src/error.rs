//! Our custom error handler that we use to wrap errors and give them a more
//! readable error message

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A hardware address must be exactly [crate::ether::ETH_ALEN] bytes
    #[error("invalid hardware address length {0}, expected 6 octets")]
    InvalidLength(usize),

    /// Only ':' and '-' may join the octets of an EUI-48 string
    #[error("invalid separator {0:?}, expected ':' or '-'")]
    InvalidSeparator(char),

    /// The text is not six hex octets joined by one uniform separator
    #[error("invalid EUI-48 address format: {0:?}")]
    InvalidFormat(String),

    /// The OS reported no device with this name (ENODEV)
    #[error("interface {interface:?} not found")]
    InterfaceNotFound {
        interface: String,
        source: std::io::Error,
    },

    /// The process lacks the rights for the control request
    #[error("permission denied querying interface {interface:?}")]
    PermissionDenied {
        interface: String,
        source: std::io::Error,
    },

    /// Any other rejection by the OS, including failing to open the socket
    #[error("failed to query interface {interface:?}")]
    IoFailure {
        interface: String,
        source: std::io::Error,
    },
}

impl Error {
    /// Sort an [std::io::Error] from the interface query into our variants,
    /// keeping the OS error untouched as the source
    pub(crate) fn from_query(interface: &str, source: std::io::Error) -> Self {
        let interface = interface.to_owned();

        match (source.raw_os_error(), source.kind()) {
            (Some(libc::ENODEV), _) | (_, std::io::ErrorKind::NotFound) => {
                Self::InterfaceNotFound { interface, source }
            }
            (Some(libc::EPERM), _) | (_, std::io::ErrorKind::PermissionDenied) => {
                Self::PermissionDenied { interface, source }
            }
            _ => Self::IoFailure { interface, source },
        }
    }
}

/// Our custom Error type, we wrap all library errors inside our [Error]
pub type Result<T> = std::result::Result<T, self::Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn enodev_is_interface_not_found() {
        let err = Error::from_query("eth9", io::Error::from_raw_os_error(libc::ENODEV));
        match err {
            Error::InterfaceNotFound { interface, source } => {
                assert_eq!(interface, "eth9");
                assert_eq!(source.raw_os_error(), Some(libc::ENODEV));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn eperm_and_eacces_are_permission_denied() {
        for errno in [libc::EPERM, libc::EACCES] {
            let err = Error::from_query("eth0", io::Error::from_raw_os_error(errno));
            assert!(matches!(err, Error::PermissionDenied { .. }), "{errno}");
        }
    }

    #[test]
    fn other_errors_are_io_failures() {
        let err = Error::from_query("eth0", io::Error::from_raw_os_error(libc::EINVAL));
        assert!(matches!(err, Error::IoFailure { .. }));

        let err = Error::from_query("eth0", io::Error::from(io::ErrorKind::Unsupported));
        assert!(matches!(err, Error::IoFailure { .. }));
    }

    #[test]
    fn os_error_is_kept_as_source() {
        use std::error::Error as _;

        let err = Error::from_query("eth0", io::Error::from_raw_os_error(libc::EINVAL));
        let source = err.source().expect("source");
        assert_eq!(
            source.to_string(),
            io::Error::from_raw_os_error(libc::EINVAL).to_string()
        );
    }
}
