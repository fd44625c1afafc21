//! IPv4 address, subnet mask and CIDR network value types.
//!
//! All types are small `Copy` values with no shared state:
//! - [`Address`] parses and formats dotted-quads and does saturating arithmetic
//! - [`Mask`] converts between prefix lengths and bit patterns
//! - [`Network`] answers network/broadcast/host/containment questions
//!
//! # Examples
//! ```
//! use vip::{Address, Network};
//!
//! let nw: Network = "10.1.1.17/28".parse().unwrap();
//! assert_eq!(nw.network_address().to_string(), "10.1.1.16");
//! assert_eq!(nw.broadcast_address().to_string(), "10.1.1.31");
//! assert!(nw.contains(Address::from_octets(10, 1, 1, 19)));
//! assert_eq!(nw.size(), 16);
//! ```

pub mod error;
pub mod models;
pub mod ranges;

pub use error::{Malformed, Result, VipError};
pub use models::{Address, Cidr, Mask, Network, Networks};
