//! Ask the OS for the hardware address bound to a named interface

use std::io;

use log::{debug, warn};

use crate::{Error, MacAddr, Result};

/// Size of the request buffer handed to the OS, larger than any `struct ifreq`
pub const IFREQ_LEN: usize = 256;

/// Width of the name field including its NUL terminator
pub const IFNAMSIZ: usize = 16;

/// The hardware address follows the name field and the 2 byte `sa_family`
const HWADDR_OFFSET: usize = IFNAMSIZ + 2;

/// Raw `struct ifreq` bytes going to and coming back from the OS
pub type IfRequest = [u8; IFREQ_LEN];

/// Anything that can answer a SIOCGIFHWADDR style request, filling in the
/// buffer it was given
#[cfg_attr(test, mockall::automock)]
pub trait HardwareAddressSource: Send + Sync {
    fn query(&self, request: IfRequest) -> io::Result<IfRequest>;
}

/// Issues the request as an ioctl on a throwaway datagram socket
#[derive(Debug, Default, Clone, Copy)]
pub struct SiocgifhwaddrSource;

#[cfg(target_os = "linux")]
impl HardwareAddressSource for SiocgifhwaddrSource {
    fn query(&self, mut request: IfRequest) -> io::Result<IfRequest> {
        use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};

        // SAFETY: plain socket(2), the descriptor is checked before use
        let fd = unsafe { libc::socket(libc::AF_INET, libc::SOCK_DGRAM | libc::SOCK_CLOEXEC, 0) };
        if fd < 0 {
            return Err(io::Error::last_os_error());
        }
        // SAFETY: fd was just opened and nothing else owns it; dropping
        // `socket` closes it on every path out of this function
        let socket = unsafe { OwnedFd::from_raw_fd(fd) };

        // SAFETY: the kernel reads and writes at most a `struct ifreq`,
        // which fits in IFREQ_LEN bytes
        let ret = unsafe {
            libc::ioctl(
                socket.as_raw_fd(),
                libc::SIOCGIFHWADDR,
                request.as_mut_ptr(),
            )
        };
        if ret < 0 {
            return Err(io::Error::last_os_error());
        }

        Ok(request)
    }
}

#[cfg(not(target_os = "linux"))]
impl HardwareAddressSource for SiocgifhwaddrSource {
    fn query(&self, _request: IfRequest) -> io::Result<IfRequest> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "SIOCGIFHWADDR is only available on Linux",
        ))
    }
}

/// Build the request buffer: the interface name, NUL padded. Names longer
/// than IFNAMSIZ - 1 bytes are cut, as the kernel would only see that much.
fn request_for(interface: &str) -> IfRequest {
    let name = interface.as_bytes();
    let significant = &name[..name.len().min(IFNAMSIZ - 1)];

    if significant.len() < name.len() {
        warn!(
            "Interface name {:?} is longer than {} bytes, querying {:?}",
            interface,
            IFNAMSIZ - 1,
            String::from_utf8_lossy(significant)
        );
    }

    let mut request = [0u8; IFREQ_LEN];
    request[..significant.len()].copy_from_slice(significant);
    request
}

/// Look up `interface` through `source`
pub fn get_hardware_address_from<S>(source: &S, interface: &str) -> Result<MacAddr>
where
    S: HardwareAddressSource + ?Sized,
{
    debug!("Querying hardware address of {:?}", interface);

    let response = source
        .query(request_for(interface))
        .map_err(|e| Error::from_query(interface, e))?;

    let address =
        MacAddr::try_from(&response[HWADDR_OFFSET..HWADDR_OFFSET + MacAddr::LEN])?;

    debug!("{:?} has hardware address {}", interface, address);
    Ok(address)
}

/// Get the hardware address of `interface` from the OS
pub fn get_hardware_address(interface: &str) -> Result<MacAddr> {
    get_hardware_address_from(&SiocgifhwaddrSource, interface)
}
