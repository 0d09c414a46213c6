//! Global definitions for the IEEE 802.3 Ethernet interface, as found in
//! linux/if_ether.h

/// Octets in one ethernet addr
pub const ETH_ALEN: usize = 6;
/// Octets in ethernet type field
pub const ETH_TLEN: usize = 2;
/// Total octets in header
pub const ETH_HLEN: usize = 14;
/// Min. octets in frame sans FCS
pub const ETH_ZLEN: usize = 60;
/// Max. octets in payload
pub const ETH_DATA_LEN: usize = 1500;
/// Max. octets in frame sans FCS
pub const ETH_FRAME_LEN: usize = 1514;

/// Every packet (be careful!!!)
pub const ETH_P_ALL: u16 = 0x0003;
/// Internet Protocol packet
pub const ETH_P_IP: u16 = 0x0800;
/// Address Resolution packet
pub const ETH_P_ARP: u16 = 0x0806;
/// Local Experimental Ethertype 1
pub const ETH_P_802_EX1: u16 = 0x88B5;
/// Local Experimental Ethertype 2
pub const ETH_P_802_EX2: u16 = 0x88B6;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_two_addresses_and_a_type() {
        assert_eq!(ETH_HLEN, 2 * ETH_ALEN + ETH_TLEN);
        assert_eq!(ETH_FRAME_LEN, ETH_HLEN + ETH_DATA_LEN);
    }
}
