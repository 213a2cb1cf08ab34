use crate::environment::HOST;
use crate::families::{self, Families, Standard, FAMILIES};
use crate::machine;

use super::util::*;

fn float_families() -> Families {
    Families::FLOAT_MIN
        | Families::FLOAT_TRUE_MIN
        | Families::FLOAT_MAX
        | Families::FLOAT_DIG
        | Families::FLOAT_EPSILON
        | Families::FLOAT_MANT_DIG
        | Families::FLOAT_MIN_EXP
        | Families::FLOAT_MIN_10_EXP
        | Families::FLOAT_MAX_EXP
        | Families::FLOAT_MAX_10_EXP
}

#[test]
fn test_table_covers_every_flag() {
    let mut seen = Families::empty();
    for family in FAMILIES {
        assert!(!seen.intersects(family.flag));
        assert!(!family.symbols.is_empty());
        assert!(!family.about.is_empty());
        seen.insert(family.flag);
    }
    assert_eq!(seen, Families::all());
}

#[test]
fn test_family_sizes() {
    for family in FAMILIES {
        let expected = match family.flag {
            Families::SIGNED_MIN | Families::SIGNED_MAX | Families::UNSIGNED_MAX => 5,
            Families::BOOL => 2,
            f if float_families().contains(f) => 3,
            _ => 1,
        };
        assert_eq!(family.symbols.len(), expected, "{:?}", family.flag);
    }
}

#[test]
fn test_detect_host() {
    let available = families::detect(&HOST);
    assert_eq!(
        available.contains(Families::MB_LEN_MAX),
        machine::MB_LEN_MAX.is_some()
    );
    assert!(available.contains(Families::SIGNED_MIN | Families::UNSIGNED_MAX | Families::BOOL));
    assert!(available.contains(Families::FLT_RADIX | Families::DECIMAL_DIG));
    assert_eq!(
        available.contains(float_families()),
        HOST.long_double.is_some()
    );
}

#[test]
fn test_detect_without_long_double() {
    // FLT_ and DBL_ are defined, but one missing member drops the whole family
    let env = ccpu();
    assert!(env.lookup("FLT_EPSILON").is_some());
    assert!(env.lookup("DBL_EPSILON").is_some());
    assert_eq!(families::detect(&env), Families::all() - float_families());
}

#[test]
fn test_detect_without_bool() {
    let available = families::detect(&dsp());
    assert!(!available.contains(Families::BOOL));
    assert!(available.contains(float_families()));
}

#[test]
fn test_annotation() {
    assert_eq!(Standard::C89.annotation(), "");
    assert_eq!(Standard::C99.annotation(), " /*C99*/");
    assert_eq!(Standard::C11.annotation(), " /*C11*/");
}
