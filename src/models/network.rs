//! CIDR network: an anchor address paired with a mask.
//!
//! The anchor is kept exactly as given (`10.0.0.7/24` stays `10.0.0.7/24`);
//! the network and broadcast addresses are derived on demand.

use super::mask::MAX_LENGTH;
use super::{Address, Mask};
use crate::error::{parse_decimal, Malformed, Result, VipError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An IPv4 address and network mask in CIDR notation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Network {
    /// The anchor address, not necessarily the network address.
    pub address: Address,
    /// The subnet mask.
    pub mask: Mask,
}

/// Alias for [`Network`].
pub type Cidr = Network;

/// A list of networks.
pub type Networks = Vec<Network>;

impl Network {
    /// 0.0.0.0/0
    pub const EMPTY: Network = Network {
        address: Address::EMPTY,
        mask: Mask::ZERO,
    };

    pub const fn new(address: Address, mask: Mask) -> Network {
        Network { address, mask }
    }

    /// Create a network from four octets and a prefix length.
    pub fn from_octets(a: u8, b: u8, c: u8, d: u8, bits: u8) -> Result<Network> {
        Ok(Network::new(Address::from_octets(a, b, c, d), Mask::new(bits)?))
    }

    /// Parse CIDR text such as `"10.1.1.17/28"`.
    ///
    /// # Errors
    /// * [`VipError::MalformedNetwork`] when there is no `/`, or the prefix
    ///   length is not a number or is above 32 ("value out of range").
    /// * [`VipError::MalformedAddress`] when the address part is malformed.
    pub fn parse(cidr: &str) -> Result<Network> {
        let (ip, bits) = cidr
            .split_once('/')
            .ok_or_else(|| VipError::network(cidr, Malformed::ExpectedCidr))?;
        let address = Address::parse(ip)?;
        let bits = parse_decimal(bits).map_err(|reason| VipError::network(cidr, reason))?;
        if bits > MAX_LENGTH {
            return Err(VipError::network(cidr, Malformed::OutOfRange));
        }
        Ok(Network::new(address, Mask::new(bits)?))
    }

    /// Parse CIDR text and require the anchor to be a host of the network,
    /// i.e. neither its network nor its broadcast address.
    ///
    /// # Errors
    /// Any [`Network::parse`] error, or [`VipError::NotAHost`].
    pub fn parse_host(cidr: &str) -> Result<Network> {
        let nw = Network::parse(cidr)?;
        if !nw.is_host(nw.address) {
            log::debug!("Rejecting {nw}: anchor is not a host address");
            return Err(VipError::NotAHost(cidr.to_string()));
        }
        Ok(nw)
    }

    /// Parse CIDR text known to be valid, such as a compiled-in literal.
    ///
    /// # Panics
    /// On any parse failure. Never use this for untrusted input.
    pub fn must_parse(cidr: &str) -> Network {
        Network::parse(cidr).unwrap_or_else(|e| panic!("invalid network literal: {e}"))
    }

    /// The anchor with all host bits cleared.
    /// For example 10.0.0.7/24 returns 10.0.0.0.
    pub fn network_address(&self) -> Address {
        Address::from(self.address.to_u32() & self.mask.bitmask())
    }

    /// The anchor with all host bits set.
    /// For example 10.0.0.7/24 returns 10.0.0.255.
    pub fn broadcast_address(&self) -> Address {
        Address::from(self.address.to_u32() | !self.mask.bitmask())
    }

    /// A /32 has no distinct network address, so this is always false there.
    pub fn is_network_address(&self, ip: Address) -> bool {
        self.mask != Mask::HOST && self.network_address() == ip
    }

    /// A /32 has no distinct broadcast address, so this is always false there.
    pub fn is_broadcast_address(&self, ip: Address) -> bool {
        self.mask != Mask::HOST && self.broadcast_address() == ip
    }

    /// Whether `ip` is neither the network nor the broadcast address.
    /// Every address is a host of a /32.
    ///
    /// Membership is not checked; combine with [`Network::contains`].
    pub fn is_host(&self, ip: Address) -> bool {
        self.mask == Mask::HOST || (!self.is_network_address(ip) && !self.is_broadcast_address(ip))
    }

    /// Whether `ip` shares this network's prefix.
    pub fn contains(&self, ip: Address) -> bool {
        self.network_address() == Address::from(ip.to_u32() & self.mask.bitmask())
    }

    /// Number of addresses in the network, 2^32 for a /0.
    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask.prefix_len())
    }

    /// Convert from a std (address, mask) pair.
    ///
    /// A mask that is not a contiguous prefix falls back to /32.
    pub fn from_std(ip: Ipv4Addr, mask: Ipv4Addr) -> Network {
        let mask = Mask::try_from(mask).unwrap_or_else(|_| {
            log::warn!("Mask {mask} is not a contiguous prefix, using /32 for {ip}");
            Mask::HOST
        });
        Network::new(Address::from(ip), mask)
    }

    /// Convert to a std (network address, mask) pair.
    ///
    /// The anchor is reduced to the network address.
    pub fn to_std(&self) -> (Ipv4Addr, Ipv4Addr) {
        (self.network_address().into(), self.mask.into())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.mask)
    }
}

impl FromStr for Network {
    type Err = VipError;

    fn from_str(s: &str) -> Result<Network> {
        Network::parse(s)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::parse(&s).map_err(de::Error::custom)
    }
}
