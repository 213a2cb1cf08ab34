use lazy_static::lazy_static;

use crate::{
    ctype::CType,
    float::{Binary, FloatFormat},
    machine,
};

lazy_static! {
    pub static ref HOST: Environment = Environment::host();
}

/// The C view of one target: type sizes, float formats and a few environment
/// macros that cannot be derived from those.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub char_bit: u32,
    /// `None` if the target has no boolean type distinct from the integers.
    pub bool_size: Option<u8>,
    pub char_signed: bool,
    pub short_size: u8,
    pub int_size: u8,
    pub long_size: u8,
    pub llong_size: u8,
    pub intmax_size: u8,
    pub ptr_size: u8,
    /// Whether the POSIX `ssize_t` exists.
    pub has_ssize: bool,
    pub float: FloatFormat,
    pub double: FloatFormat,
    pub long_double: Option<FloatFormat>,
    pub mb_len_max: Option<i32>,
    pub flt_rounds: Option<i32>,
    pub flt_eval_method: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Signed(i128),
    Unsigned(u128),
    Real(Binary),
}

/// A limit macro after expansion: its value and the type of the expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant {
    pub value: Value,
    pub t: CType,
}

impl Environment {
    pub fn host() -> Self {
        Self {
            char_bit: machine::CHAR_BIT,
            bool_size: Some(machine::BOOL_SIZE),
            char_signed: machine::CHAR_SIGNED,
            short_size: machine::SHORT_SIZE,
            int_size: machine::INT_SIZE,
            long_size: machine::LONG_SIZE,
            llong_size: machine::LLONG_SIZE,
            intmax_size: machine::INTMAX_SIZE,
            ptr_size: machine::PTR_SIZE,
            has_ssize: machine::HAS_SSIZE,
            float: FloatFormat::of::<f32>(),
            double: FloatFormat::of::<f64>(),
            long_double: machine::LDOUBLE_FORMAT,
            mb_len_max: machine::MB_LEN_MAX,
            // Rust only rounds to nearest and never widens intermediate results.
            flt_rounds: Some(1),
            flt_eval_method: Some(0),
        }
    }

    pub fn bool_type(&self) -> Option<CType> {
        self.bool_size.map(CType::Bool)
    }

    pub fn char_type(&self) -> CType {
        CType::Int(1, self.char_signed)
    }

    pub fn short_type(&self, signed: bool) -> CType {
        CType::Int(self.short_size, signed)
    }

    pub fn int_type(&self, signed: bool) -> CType {
        CType::Int(self.int_size, signed)
    }

    pub fn long_type(&self, signed: bool) -> CType {
        CType::Int(self.long_size, signed)
    }

    pub fn llong_type(&self, signed: bool) -> CType {
        CType::Int(self.llong_size, signed)
    }

    pub fn intmax_type(&self, signed: bool) -> CType {
        CType::Int(self.intmax_size, signed)
    }

    pub fn ptr_type(&self, signed: bool) -> CType {
        CType::Int(self.ptr_size, signed)
    }

    /**
     * Widest floating-point format the target knows about.
     */
    pub fn widest_float(&self) -> FloatFormat {
        self.long_double.unwrap_or(self.double)
    }

    /**
     * Expands a `<limits.h>`, `<float.h>` or `<stdbool.h>` macro.
     *
     * Returns `None` if the target does not define it.
     */
    pub fn lookup(&self, symbol: &str) -> Option<Constant> {
        let int = self.int_type(true);
        let constant = match symbol {
            "CHAR_BIT" => self.int_constant(self.char_bit as i128),
            "true" => {
                self.bool_size?;
                self.int_constant(1)
            }
            "false" => {
                self.bool_size?;
                self.int_constant(0)
            }

            "SCHAR_MIN" => self.min_of(CType::Int(1, true)),
            "SHRT_MIN" => self.min_of(self.short_type(true)),
            "INT_MIN" => self.min_of(int),
            "LONG_MIN" => self.min_of(self.long_type(true)),
            "LLONG_MIN" => self.min_of(self.llong_type(true)),

            "SCHAR_MAX" => self.max_of(CType::Int(1, true)),
            "SHRT_MAX" => self.max_of(self.short_type(true)),
            "INT_MAX" => self.max_of(int),
            "LONG_MAX" => self.max_of(self.long_type(true)),
            "LLONG_MAX" => self.max_of(self.llong_type(true)),

            "UCHAR_MAX" => self.max_of(CType::Int(1, false)),
            "USHRT_MAX" => self.max_of(self.short_type(false)),
            "UINT_MAX" => self.max_of(self.int_type(false)),
            "ULONG_MAX" => self.max_of(self.long_type(false)),
            "ULLONG_MAX" => self.max_of(self.llong_type(false)),

            "CHAR_MIN" => self.min_of(self.char_type()),
            "CHAR_MAX" => self.max_of(self.char_type()),
            "MB_LEN_MAX" => self.int_constant(self.mb_len_max? as i128),

            "FLT_ROUNDS" => self.int_constant(self.flt_rounds? as i128),
            "FLT_EVAL_METHOD" => self.int_constant(self.flt_eval_method? as i128),
            "FLT_RADIX" => self.int_constant(FloatFormat::RADIX as i128),
            "DECIMAL_DIG" => self.int_constant(self.widest_float().decimal_dig() as i128),

            _ => return self.lookup_float(symbol),
        };
        Some(constant)
    }

    /**
     * The `FLT_`, `DBL_` and `LDBL_` macros share their suffixes.
     */
    fn lookup_float(&self, symbol: &str) -> Option<Constant> {
        let (format, suffix) = if let Some(suffix) = symbol.strip_prefix("FLT_") {
            (self.float, suffix)
        } else if let Some(suffix) = symbol.strip_prefix("DBL_") {
            (self.double, suffix)
        } else if let Some(suffix) = symbol.strip_prefix("LDBL_") {
            (self.long_double?, suffix)
        } else {
            return None;
        };
        let real = |value: Binary| Constant {
            value: Value::Real(value),
            t: CType::Float(format.size),
        };
        let constant = match suffix {
            "MIN" => real(format.min()),
            "TRUE_MIN" => real(format.true_min()),
            "MAX" => real(format.max()),
            "EPSILON" => real(format.epsilon()),
            "DIG" => self.int_constant(format.dig() as i128),
            "MANT_DIG" => self.int_constant(format.mant_dig as i128),
            "MIN_EXP" => self.int_constant(format.min_exp as i128),
            "MIN_10_EXP" => self.int_constant(format.min_10_exp() as i128),
            "MAX_EXP" => self.int_constant(format.max_exp as i128),
            "MAX_10_EXP" => self.int_constant(format.max_10_exp() as i128),
            _ => return None,
        };
        Some(constant)
    }

    fn int_constant(&self, value: i128) -> Constant {
        Constant {
            value: Value::Signed(value),
            t: self.int_type(true),
        }
    }

    /**
     * The macro has the promoted type, so `SCHAR_MIN` is an `int`.
     */
    fn min_of(&self, t: CType) -> Constant {
        let value = t.int_min(self.char_bit).unwrap_or_default();
        Constant {
            value: Value::Signed(value),
            t: t.promote(self.int_size),
        }
    }

    fn max_of(&self, t: CType) -> Constant {
        let max = t.int_max(self.char_bit).unwrap_or_default();
        let promoted = t.promote(self.int_size);
        let value = match promoted {
            CType::Int(_, true) => Value::Signed(max as i128),
            _ => Value::Unsigned(max),
        };
        Constant { value, t: promoted }
    }
}
