use std::f64::consts::LOG10_2;

use num::BigUint;
use num_traits::Float;

/// A binary floating-point format, described by its `<float.h>` parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatFormat {
    /// Storage size in bytes, padding included.
    pub size: u8,
    pub mant_dig: u32,
    pub min_exp: i32,
    pub max_exp: i32,
}

impl FloatFormat {
    pub const RADIX: u32 = 2;

    pub const BINARY32: Self = Self {
        size: 4,
        mant_dig: 24,
        min_exp: -125,
        max_exp: 128,
    };
    pub const BINARY64: Self = Self {
        size: 8,
        mant_dig: 53,
        min_exp: -1021,
        max_exp: 1024,
    };
    pub const X87_EXTENDED: Self = Self {
        size: 16,
        mant_dig: 64,
        min_exp: -16381,
        max_exp: 16384,
    };
    pub const BINARY128: Self = Self {
        size: 16,
        mant_dig: 113,
        min_exp: -16381,
        max_exp: 16384,
    };

    pub const fn stored_in(self, size: u8) -> Self {
        Self { size, ..self }
    }

    /**
     * Reads the format of a host floating-point type from its extreme values.
     */
    pub fn of<F: Float>() -> Self {
        let (max_mantissa, max_exponent, _) = F::max_value().integer_decode();
        let (_, min_exponent, _) = F::min_positive_value().integer_decode();
        let mant_dig = u64::BITS - max_mantissa.leading_zeros();
        Self {
            size: std::mem::size_of::<F>() as u8,
            mant_dig,
            min_exp: min_exponent as i32 + mant_dig as i32,
            max_exp: max_exponent as i32 + mant_dig as i32,
        }
    }

    pub fn min(&self) -> Binary {
        Binary::new(1, self.min_exp - 1)
    }

    pub fn true_min(&self) -> Binary {
        Binary::new(1, self.min_exp - self.mant_dig as i32)
    }

    pub fn max(&self) -> Binary {
        Binary::new(
            (1u128 << self.mant_dig) - 1,
            self.max_exp - self.mant_dig as i32,
        )
    }

    pub fn epsilon(&self) -> Binary {
        Binary::new(1, 1 - self.mant_dig as i32)
    }

    pub fn dig(&self) -> i32 {
        ((self.mant_dig - 1) as f64 * LOG10_2).floor() as i32
    }

    pub fn min_10_exp(&self) -> i32 {
        self.min().decimal_exponent() + 1
    }

    pub fn max_10_exp(&self) -> i32 {
        self.max().decimal_exponent()
    }

    /**
     * Number of decimal digits needed to print any value of this format and read
     * it back unchanged.
     */
    pub fn decimal_dig(&self) -> i32 {
        (1.0 + self.mant_dig as f64 * LOG10_2).ceil() as i32
    }
}

/// An exact value `mantissa * 2^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binary {
    pub mantissa: u128,
    pub exponent: i32,
}

impl Binary {
    pub fn new(mantissa: u128, exponent: i32) -> Self {
        Self { mantissa, exponent }
    }

    /**
     * Every significant decimal digit of the value, along with the power of ten
     * of the first one.
     */
    fn decimal(&self) -> (String, i32) {
        if self.mantissa == 0 {
            return ("0".to_string(), 0);
        }
        let mantissa = BigUint::from(self.mantissa);
        let (n, scale) = if self.exponent >= 0 {
            (mantissa << self.exponent as usize, 0)
        } else {
            // m * 2^-k == m * 5^k * 10^-k
            let k = self.exponent.unsigned_abs();
            (mantissa * BigUint::from(5u32).pow(k), self.exponent)
        };
        let digits = n.to_str_radix(10);
        let exp10 = digits.len() as i32 - 1 + scale;
        (digits, exp10)
    }

    pub fn decimal_exponent(&self) -> i32 {
        self.decimal().1
    }

    /**
     * Renders the value the way `printf("%#.*g", precision, x)` does.
     */
    pub fn to_general(&self, precision: usize) -> String {
        let precision = precision.max(1);
        let (digits, mut exp10) = self.decimal();
        let digits = digits.as_bytes();

        let mut kept: Vec<u8> = digits.iter().take(precision).map(|d| d - b'0').collect();
        kept.resize(precision, 0);
        let rest = &digits[precision.min(digits.len())..];
        if rounds_up(rest, kept[precision - 1]) && increment(&mut kept) {
            kept.insert(0, 1);
            kept.pop();
            exp10 += 1;
        }
        let kept: String = kept.iter().map(|d| char::from(b'0' + d)).collect();

        if exp10 < -4 || exp10 >= precision as i32 {
            let sign = if exp10 < 0 { '-' } else { '+' };
            format!(
                "{}.{}e{}{:02}",
                &kept[..1],
                &kept[1..],
                sign,
                exp10.unsigned_abs()
            )
        } else if exp10 >= 0 {
            let point = exp10 as usize + 1;
            format!("{}.{}", &kept[..point], &kept[point..])
        } else {
            let zeros = "0".repeat((-exp10 - 1) as usize);
            format!("0.{}{}", zeros, kept)
        }
    }

    /**
     * Renders the value the way `printf("%#a", x)` does, normalized so that the
     * leading hex digit is always `1`.
     */
    pub fn to_hex(&self) -> String {
        if self.mantissa == 0 {
            return "0x0.p+0".to_string();
        }
        let width = u128::BITS - self.mantissa.leading_zeros();
        let exponent = self.exponent + width as i32 - 1;

        let mut fraction = self.mantissa & !(1u128 << (width - 1));
        let mut fraction_bits = width - 1;
        let pad = (4 - fraction_bits % 4) % 4;
        fraction <<= pad;
        fraction_bits += pad;

        let mut hex = if fraction_bits == 0 {
            String::new()
        } else {
            format!("{:0w$x}", fraction, w = (fraction_bits / 4) as usize)
        };
        while hex.ends_with('0') {
            hex.pop();
        }
        format!("0x1.{}p{:+}", hex, exponent)
    }
}

/// Round half to even on the exact digit tail.
fn rounds_up(rest: &[u8], last_kept: u8) -> bool {
    match rest.split_first() {
        None => false,
        Some((&first, tail)) => match first.cmp(&b'5') {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => tail.iter().any(|&d| d != b'0') || last_kept % 2 == 1,
        },
    }
}

/// Adds one to a decimal digit string, returning the carry out of the top digit.
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    true
}
