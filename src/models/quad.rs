//! Big-endian packing of four octets into a `u32`.

/// Join four octets, most significant first.
pub const fn quad_join(a: u8, b: u8, c: u8, d: u8) -> u32 {
    ((a as u32) << 24) | ((b as u32) << 16) | ((c as u32) << 8) | (d as u32)
}

/// Split a `u32` into four octets, most significant first.
pub const fn quad_spread(n: u32) -> [u8; 4] {
    [(n >> 24) as u8, (n >> 16) as u8, (n >> 8) as u8, n as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_join() {
        assert_eq!(quad_join(0, 0, 0, 0), 0);
        assert_eq!(quad_join(10, 1, 2, 3), 0x0A010203);
        assert_eq!(quad_join(255, 255, 255, 255), u32::MAX);
    }

    #[test]
    fn test_quad_spread() {
        assert_eq!(quad_spread(0xC0A80101), [192, 168, 1, 1]);
        assert_eq!(quad_spread(quad_join(1, 2, 3, 4)), [1, 2, 3, 4]);
    }
}
