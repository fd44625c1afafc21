//! IPv4 value types.
//!
//! - [`Address`] - a single IPv4 address
//! - [`Mask`] - a subnet mask held as its prefix length
//! - [`Network`] - an anchor address with a mask, in CIDR notation

mod address;
mod mask;
mod network;
mod quad;

// Re-export public types
pub use address::Address;
pub use mask::{Mask, MAX_LENGTH};
pub use network::{Cidr, Network, Networks};
pub use quad::{quad_join, quad_spread};
