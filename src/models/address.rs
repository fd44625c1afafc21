//! IPv4 address value type.
//!
//! Provides [`Address`], a 32-bit IPv4 address stored big-endian in a `u32`.
//! Every bit pattern is valid; 0.0.0.0 is the "unset" sentinel and
//! 255.255.255.255 the maximum.

use super::quad::{quad_join, quad_spread};
use super::{Mask, Network};
use crate::error::{parse_decimal, Malformed, Result, VipError};
use crate::ranges;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// A single IPv4 address.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(u32);

impl Address {
    /// 0.0.0.0
    pub const EMPTY: Address = Address(0);
    /// 255.255.255.255
    pub const MAX: Address = Address(u32::MAX);

    /// Parse an IPv4 dotted-quad such as `"10.0.0.1"`.
    ///
    /// # Errors
    /// [`VipError::MalformedAddress`] when the text does not have four
    /// components, a component is not a decimal number, or a component is
    /// above 255 ("value out of range").
    pub fn parse(text: &str) -> Result<Address> {
        let parts: Vec<&str> = text.splitn(4, '.').collect();
        if parts.len() != 4 {
            return Err(VipError::address(text, Malformed::ExpectedDottedQuad));
        }
        let mut octets = [0u8; 4];
        for (octet, part) in octets.iter_mut().zip(parts) {
            *octet = parse_decimal(part).map_err(|reason| VipError::address(text, reason))?;
        }
        Ok(Address::from_bytes(octets))
    }

    /// Parse a dotted-quad known to be valid, such as a compiled-in literal.
    ///
    /// # Panics
    /// On any parse failure. Never use this for untrusted input.
    pub fn must_parse(text: &str) -> Address {
        Address::parse(text).unwrap_or_else(|e| panic!("invalid address literal: {e}"))
    }

    /// Compose an address from its four octets, most significant first.
    pub const fn from_octets(a: u8, b: u8, c: u8, d: u8) -> Address {
        Address(quad_join(a, b, c, d))
    }

    /// Compose an address from a 4-byte array.
    pub const fn from_bytes(b: [u8; 4]) -> Address {
        Address::from_octets(b[0], b[1], b[2], b[3])
    }

    /// The four octets, most significant first.
    pub const fn octets(self) -> [u8; 4] {
        quad_spread(self.0)
    }

    /// The address as a plain integer.
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self == Address::EMPTY
    }

    /// Move `delta` addresses away from this one.
    ///
    /// Saturates at [`Address::EMPTY`] and [`Address::MAX`] instead of wrapping.
    pub fn offset(self, delta: i64) -> Address {
        let n = i64::from(self.0).saturating_add(delta);
        if n < 0 {
            Address::EMPTY
        } else if n > i64::from(u32::MAX) {
            Address::MAX
        } else {
            Address(n as u32)
        }
    }

    /// The address after this one (saturating).
    pub fn next(self) -> Address {
        self.offset(1)
    }

    /// The address before this one (saturating).
    pub fn prev(self) -> Address {
        self.offset(-1)
    }

    /// True for addresses in 224.0.0.0/4.
    pub fn is_multicast(self) -> bool {
        ranges::MULTICAST.contains(self)
    }

    /// True for the SSDP multicast group 239.255.255.250.
    pub fn is_ssdp(self) -> bool {
        self == *ranges::SSDP
    }

    /// True for addresses in 10/8, 172.16/12 or 192.168/16.
    pub fn is_private(self) -> bool {
        ranges::PRIVATE.iter().any(|nw| nw.contains(self))
    }

    /// Pair this address with a prefix length. The address is kept as the
    /// anchor; it is not reduced to the network address.
    pub fn with_prefix(self, bits: u8) -> Result<Network> {
        Ok(Network::new(self, Mask::new(bits)?))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl FromStr for Address {
    type Err = VipError;

    fn from_str(s: &str) -> Result<Address> {
        Address::parse(s)
    }
}

impl From<u32> for Address {
    fn from(n: u32) -> Address {
        Address(n)
    }
}

impl From<Address> for u32 {
    fn from(ip: Address) -> u32 {
        ip.0
    }
}

impl From<[u8; 4]> for Address {
    fn from(b: [u8; 4]) -> Address {
        Address::from_bytes(b)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Address {
        Address::from_bytes(ip.octets())
    }
}

impl From<Address> for Ipv4Addr {
    fn from(ip: Address) -> Ipv4Addr {
        Ipv4Addr::from(ip.octets())
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::parse(&s).map_err(de::Error::custom)
    }
}
