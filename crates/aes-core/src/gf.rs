//! Arithmetic in GF(2^8) modulo the AES polynomial `x^8 + x^4 + x^3 + x + 1`.
//!
//! Everything here is `const fn` so the substitution tables can be derived at
//! compile time.

/// Low byte of the reduction polynomial (`0x11b` without the `x^8` term).
const REDUCTION: u8 = 0x1b;

/// Multiplies `byte` by `x`, reducing modulo the AES polynomial.
#[inline]
pub(crate) const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Carry-less product of `a` and `b`, reduced into the field.
pub(crate) const fn gf_multiply(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Multiplicative inverse, computed as `a^254`. Zero maps to zero.
pub(crate) const fn gf_inverse(a: u8) -> u8 {
    // a^254 = a^(2+4+8+16+32+64+128); square-and-multiply over those bits.
    let mut square = gf_multiply(a, a);
    let mut result = 1u8;
    let mut bit = 1;
    while bit < 8 {
        result = gf_multiply(result, square);
        square = gf_multiply(square, square);
        bit += 1;
    }
    // 0^254 falls out as 0 without special casing.
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xtime_matches_fips_example() {
        // FIPS-197 section 4.2.1: {57} * {02} = {ae}, {ae} * {02} = {47}
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
    }

    #[test]
    fn multiply_matches_fips_example() {
        assert_eq!(gf_multiply(0x57, 0x83), 0xc1);
        assert_eq!(gf_multiply(0x57, 0x13), 0xfe);
    }

    #[test]
    fn multiply_is_commutative_with_identity_and_zero() {
        for a in 0..=255u8 {
            assert_eq!(gf_multiply(a, 1), a);
            assert_eq!(gf_multiply(a, 0), 0);
            for b in [0x02, 0x03, 0x09, 0x0b, 0x0d, 0x0e, 0xff] {
                assert_eq!(gf_multiply(a, b), gf_multiply(b, a));
            }
        }
    }

    #[test]
    fn inverse_of_every_nonzero_element() {
        assert_eq!(gf_inverse(0), 0);
        assert_eq!(gf_inverse(1), 1);
        assert_eq!(gf_inverse(0x53), 0xca);
        for a in 1..=255u8 {
            assert_eq!(gf_multiply(a, gf_inverse(a)), 1, "a = {a:#04x}");
        }
    }
}
