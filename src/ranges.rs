//! Well-known IPv4 ranges, built once on first use.

use crate::models::{Address, Network};

lazy_static::lazy_static! {
    /// 224.0.0.0/4
    pub static ref MULTICAST: Network = Network::must_parse("224.0.0.0/4");
    /// SSDP multicast group.
    pub static ref SSDP: Address = Address::must_parse("239.255.255.250");
    /// 10.0.0.0/8
    pub static ref PRIVATE_10: Network = Network::must_parse("10.0.0.0/8");
    /// 172.16.0.0/12
    pub static ref PRIVATE_172: Network = Network::must_parse("172.16.0.0/12");
    /// 192.168.0.0/16
    pub static ref PRIVATE_192: Network = Network::must_parse("192.168.0.0/16");
    /// All private ranges.
    pub static ref PRIVATE: [Network; 3] = [*PRIVATE_10, *PRIVATE_172, *PRIVATE_192];
}
