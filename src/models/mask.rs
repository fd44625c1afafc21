//! Subnet mask as a prefix length.

use super::quad::{quad_join, quad_spread};
use super::Address;
use crate::error::{parse_decimal, Malformed, Result, VipError};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum prefix length of an IPv4 mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// A contiguous-high-bits subnet mask, stored as its prefix length (0-32).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mask(u8);

impl Mask {
    /// /0, the all-zero mask.
    pub const ZERO: Mask = Mask(0);
    /// /32, a single host.
    pub const HOST: Mask = Mask(MAX_LENGTH);

    /// Create a mask from a prefix length.
    ///
    /// # Errors
    /// [`VipError::PrefixOutOfRange`] when `bits` is above 32.
    pub fn new(bits: u8) -> Result<Mask> {
        if bits > MAX_LENGTH {
            Err(VipError::PrefixOutOfRange(bits))
        } else {
            Ok(Mask(bits))
        }
    }

    pub const fn prefix_len(self) -> u8 {
        self.0
    }

    /// The mask as a 32-bit pattern, e.g. /24 is `0xFFFFFF00`.
    pub const fn bitmask(self) -> u32 {
        if self.0 == 0 {
            // a shift by 32 would overflow
            0
        } else {
            u32::MAX << (MAX_LENGTH - self.0)
        }
    }

    /// Lowercase hex of the bit pattern, without leading zeros.
    pub fn hex(self) -> String {
        format!("{:x}", self.bitmask())
    }

    /// The bit pattern as an address, e.g. /24 is 255.255.255.0.
    pub fn to_address(self) -> Address {
        Address::from(self.bitmask())
    }

    /// The bit pattern as four octets.
    pub fn to_bytes(self) -> [u8; 4] {
        quad_spread(self.bitmask())
    }

    /// Decode a 4-byte mask such as `[255, 255, 255, 0]`.
    ///
    /// Every prefix length from 0 to 32 is tried against the pattern.
    ///
    /// # Errors
    /// [`VipError::InvalidMask`] when the pattern is not a contiguous run of
    /// high bits.
    pub fn decode(b: [u8; 4]) -> Result<Mask> {
        let target = quad_join(b[0], b[1], b[2], b[3]);
        (0..=MAX_LENGTH)
            .map(Mask)
            .find(|m| m.bitmask() == target)
            .ok_or(VipError::InvalidMask)
    }

    /// Decode a mask from a byte slice, which must be exactly 4 bytes long.
    pub fn from_slice(b: &[u8]) -> Result<Mask> {
        let quad: [u8; 4] = b.try_into().map_err(|_| VipError::InvalidMask)?;
        Mask::decode(quad)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Mask {
    type Err = VipError;

    /// Parse a decimal prefix length such as `"24"`.
    fn from_str(s: &str) -> Result<Mask> {
        let bits = parse_decimal(s).map_err(|reason| VipError::network(s, reason))?;
        if bits > MAX_LENGTH {
            return Err(VipError::network(s, Malformed::OutOfRange));
        }
        Ok(Mask(bits))
    }
}

impl TryFrom<Ipv4Addr> for Mask {
    type Error = VipError;

    fn try_from(mask: Ipv4Addr) -> Result<Mask> {
        Mask::decode(mask.octets())
    }
}

impl From<Mask> for Ipv4Addr {
    fn from(m: Mask) -> Ipv4Addr {
        Ipv4Addr::from(m.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmask() {
        assert_eq!(Mask::ZERO.bitmask(), 0x00000000);
        assert_eq!(Mask::new(8).unwrap().bitmask(), 0xFF000000);
        assert_eq!(Mask::new(16).unwrap().bitmask(), 0xFFFF0000);
        assert_eq!(
            format!("{:b}", Mask::new(24).unwrap().bitmask()),
            "11111111111111111111111100000000"
        );
        assert_eq!(Mask::HOST.bitmask(), 0xFFFFFFFF);
    }

    #[test]
    fn test_new_out_of_range() {
        assert_eq!(Mask::new(33), Err(VipError::PrefixOutOfRange(33)));
        assert!(Mask::new(32).is_ok());
    }

    #[test]
    fn test_display_and_hex() {
        let m = Mask::new(24).unwrap();
        assert_eq!(m.to_string(), "24");
        assert_eq!(m.hex(), "ffffff00");
        assert_eq!(Mask::ZERO.hex(), "0");
        assert_eq!(m.to_address().to_string(), "255.255.255.0");
        assert_eq!(Mask::new(12).unwrap().to_address().to_string(), "255.240.0.0");
    }

    #[test]
    fn test_decode() {
        let m = Mask::decode([255, 255, 255, 0]).unwrap();
        assert_eq!(m.prefix_len(), 24);
        assert_eq!(Mask::decode([0, 0, 0, 0]).unwrap(), Mask::ZERO);
        assert_eq!(Mask::decode([255, 255, 255, 255]).unwrap(), Mask::HOST);
    }

    #[test]
    fn test_decode_round_trip() {
        for bits in 0..=MAX_LENGTH {
            let m = Mask::new(bits).unwrap();
            assert_eq!(Mask::decode(m.to_bytes()).unwrap(), m, "/{bits}");
        }
    }

    #[test]
    fn test_decode_non_contiguous() {
        for b in [
            [255, 0, 255, 0],
            [0, 0, 0, 1],
            [255, 255, 255, 238],
            [127, 255, 255, 255],
            [255, 255, 0, 255],
        ] {
            assert_eq!(Mask::decode(b), Err(VipError::InvalidMask), "{b:?}");
        }
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(Mask::from_slice(&[255, 255, 0, 0]).unwrap().prefix_len(), 16);
        assert_eq!(Mask::from_slice(&[255, 255, 0]), Err(VipError::InvalidMask));
        assert_eq!(
            Mask::from_slice(&[255, 255, 0, 0, 0]),
            Err(VipError::InvalidMask)
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("0".parse::<Mask>().unwrap(), Mask::ZERO);
        assert_eq!("32".parse::<Mask>().unwrap(), Mask::HOST);
        let err = "33".parse::<Mask>().unwrap_err();
        assert!(err.to_string().contains("value out of range"));
        assert!("x".parse::<Mask>().is_err());
    }

    #[test]
    fn test_std_interop() {
        let m = Mask::try_from(Ipv4Addr::new(255, 255, 252, 0)).unwrap();
        assert_eq!(m.prefix_len(), 22);
        assert_eq!(Ipv4Addr::from(m), Ipv4Addr::new(255, 255, 252, 0));
        assert!(Mask::try_from(Ipv4Addr::new(255, 0, 255, 0)).is_err());
    }
}
