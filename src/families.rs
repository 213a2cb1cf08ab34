use bitflags::bitflags;
use tracing::debug;

use crate::environment::Environment;

bitflags! {
    pub struct Families: u32 {
        const CHAR_BIT = 1 << 0;
        const BOOL = 1 << 1;
        const SIGNED_MIN = 1 << 2;
        const SIGNED_MAX = 1 << 3;
        const UNSIGNED_MAX = 1 << 4;
        const CHAR_MIN = 1 << 5;
        const CHAR_MAX = 1 << 6;
        const MB_LEN_MAX = 1 << 7;
        const FLOAT_MIN = 1 << 8;
        const FLOAT_TRUE_MIN = 1 << 9;
        const FLOAT_MAX = 1 << 10;
        const FLT_ROUNDS = 1 << 11;
        const FLT_EVAL_METHOD = 1 << 12;
        const FLT_RADIX = 1 << 13;
        const FLOAT_DIG = 1 << 14;
        const FLOAT_EPSILON = 1 << 15;
        const FLOAT_MANT_DIG = 1 << 16;
        const FLOAT_MIN_EXP = 1 << 17;
        const FLOAT_MIN_10_EXP = 1 << 18;
        const FLOAT_MAX_EXP = 1 << 19;
        const FLOAT_MAX_10_EXP = 1 << 20;
        const DECIMAL_DIG = 1 << 21;
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Standard {
    C89,
    C99,
    C11,
}

impl Standard {
    /**
     * Trailing comment marking constants newer than C89.
     */
    pub fn annotation(&self) -> &'static str {
        match self {
            Standard::C89 => "",
            Standard::C99 => " /*C99*/",
            Standard::C11 => " /*C11*/",
        }
    }
}

/// Limit constants describing one property across related types.
pub struct Family {
    pub flag: Families,
    pub symbols: &'static [&'static str],
    pub standard: Standard,
    pub about: &'static [&'static str],
}

pub static FAMILIES: &[Family] = &[
    Family {
        flag: Families::CHAR_BIT,
        symbols: &["CHAR_BIT"],
        standard: Standard::C89,
        about: &["size of the char type in bits (at least 8 bits)"],
    },
    Family {
        flag: Families::BOOL,
        symbols: &["true", "false"],
        standard: Standard::C99,
        about: &["values of both boolean states"],
    },
    Family {
        flag: Families::SIGNED_MIN,
        symbols: &["SCHAR_MIN", "SHRT_MIN", "INT_MIN", "LONG_MIN", "LLONG_MIN"],
        standard: Standard::C99,
        about: &[
            "minimum possible value of signed integer types: signed char, signed short, signed",
            "int, signed long, signed long long",
        ],
    },
    Family {
        flag: Families::SIGNED_MAX,
        symbols: &["SCHAR_MAX", "SHRT_MAX", "INT_MAX", "LONG_MAX", "LLONG_MAX"],
        standard: Standard::C99,
        about: &[
            "maximum possible value of signed integer types: signed char, signed short, signed",
            "int, signed long, signed long long",
        ],
    },
    Family {
        flag: Families::UNSIGNED_MAX,
        symbols: &["UCHAR_MAX", "USHRT_MAX", "UINT_MAX", "ULONG_MAX", "ULLONG_MAX"],
        standard: Standard::C99,
        about: &[
            "maximum possible value of unsigned integer types: unsigned char, unsigned short,",
            "unsigned int, unsigned long, unsigned long long",
        ],
    },
    Family {
        flag: Families::CHAR_MIN,
        symbols: &["CHAR_MIN"],
        standard: Standard::C89,
        about: &["minimum possible value of char"],
    },
    Family {
        flag: Families::CHAR_MAX,
        symbols: &["CHAR_MAX"],
        standard: Standard::C89,
        about: &["maximum possible value of char"],
    },
    Family {
        flag: Families::MB_LEN_MAX,
        symbols: &["MB_LEN_MAX"],
        standard: Standard::C89,
        about: &["maximum number of bytes in a multibyte character"],
    },
    Family {
        flag: Families::FLOAT_MIN,
        symbols: &["FLT_MIN", "DBL_MIN", "LDBL_MIN"],
        standard: Standard::C89,
        about: &["minimum normalized positive value of float, double, long double respectively"],
    },
    Family {
        flag: Families::FLOAT_TRUE_MIN,
        symbols: &["FLT_TRUE_MIN", "DBL_TRUE_MIN", "LDBL_TRUE_MIN"],
        standard: Standard::C11,
        about: &["minimum positive value of float, double, long double respectively"],
    },
    Family {
        flag: Families::FLOAT_MAX,
        symbols: &["FLT_MAX", "DBL_MAX", "LDBL_MAX"],
        standard: Standard::C89,
        about: &["maximum finite value of float, double, long double, respectively"],
    },
    Family {
        flag: Families::FLT_ROUNDS,
        symbols: &["FLT_ROUNDS"],
        standard: Standard::C89,
        about: &["rounding mode for floating-point operations"],
    },
    Family {
        flag: Families::FLT_EVAL_METHOD,
        symbols: &["FLT_EVAL_METHOD"],
        standard: Standard::C99,
        about: &["evaluation method of expressions involving different floating-point types"],
    },
    Family {
        flag: Families::FLT_RADIX,
        symbols: &["FLT_RADIX"],
        standard: Standard::C89,
        about: &["radix of the exponent in the floating-point types"],
    },
    Family {
        flag: Families::FLOAT_DIG,
        symbols: &["FLT_DIG", "DBL_DIG", "LDBL_DIG"],
        standard: Standard::C89,
        about: &[
            "number of decimal digits that can be represented without losing precision by float,",
            "double, long double, respectively",
        ],
    },
    Family {
        flag: Families::FLOAT_EPSILON,
        symbols: &["FLT_EPSILON", "DBL_EPSILON", "LDBL_EPSILON"],
        standard: Standard::C89,
        about: &[
            "difference between 1.0 and the next representable value of float, double, long",
            "double, respectively",
        ],
    },
    Family {
        flag: Families::FLOAT_MANT_DIG,
        symbols: &["FLT_MANT_DIG", "DBL_MANT_DIG", "LDBL_MANT_DIG"],
        standard: Standard::C89,
        about: &[
            "number of FLT_RADIX-base digits in the floating-point significand for types float,",
            "double, long double, respectively",
        ],
    },
    Family {
        flag: Families::FLOAT_MIN_EXP,
        symbols: &["FLT_MIN_EXP", "DBL_MIN_EXP", "LDBL_MIN_EXP"],
        standard: Standard::C89,
        about: &[
            "minimum negative integer such that FLT_RADIX raised to a power one less than that",
            "number is a normalized float, double, long double, respectively",
        ],
    },
    Family {
        flag: Families::FLOAT_MIN_10_EXP,
        symbols: &["FLT_MIN_10_EXP", "DBL_MIN_10_EXP", "LDBL_MIN_10_EXP"],
        standard: Standard::C89,
        about: &[
            "minimum negative integer such that 10 raised to that power is a normalized float,",
            "double, long double, respectively",
        ],
    },
    Family {
        flag: Families::FLOAT_MAX_EXP,
        symbols: &["FLT_MAX_EXP", "DBL_MAX_EXP", "LDBL_MAX_EXP"],
        standard: Standard::C89,
        about: &[
            "maximum positive integer such that FLT_RADIX raised to a power one less than that",
            "number is a normalized float, double, long double, respectively",
        ],
    },
    Family {
        flag: Families::FLOAT_MAX_10_EXP,
        symbols: &["FLT_MAX_10_EXP", "DBL_MAX_10_EXP", "LDBL_MAX_10_EXP"],
        standard: Standard::C89,
        about: &[
            "maximum positive integer such that 10 raised to that power is a normalized float,",
            "double, long double, respectively",
        ],
    },
    Family {
        flag: Families::DECIMAL_DIG,
        symbols: &["DECIMAL_DIG"],
        standard: Standard::C99,
        about: &[
            "minimum number of decimal digits such that any number of the widest supported",
            "floating-point type can be represented in decimal with a precision of DECIMAL_DIG",
            "digits and read back in the original floating-point type without changing its value.",
            "DECIMAL_DIG is at least 10.",
        ],
    },
];

impl Family {
    pub fn is_defined(&self, env: &Environment) -> bool {
        self.symbols.iter().all(|s| env.lookup(s).is_some())
    }
}

/**
 * Finds the families whose every member is defined by the environment.
 *
 * A family with a single missing member is left out as a whole.
 */
pub fn detect(env: &Environment) -> Families {
    let mut available = Families::empty();
    for family in FAMILIES {
        if family.is_defined(env) {
            available.insert(family.flag);
        } else {
            debug!(family = ?family.flag, "constant family is not defined");
        }
    }
    available
}
