use std::ffi::{c_char, c_double, c_float, c_int, c_long, c_longlong, c_short};
use std::mem::size_of;

use crate::float::FloatFormat;

pub const CHAR_BIT: u32 = c_char::BITS;
pub const CHAR_SIGNED: bool = c_char::MIN != 0;
pub const BOOL_SIZE: u8 = size_of::<bool>() as u8;
pub const SHORT_SIZE: u8 = size_of::<c_short>() as u8;
pub const INT_SIZE: u8 = size_of::<c_int>() as u8;
pub const LONG_SIZE: u8 = size_of::<c_long>() as u8;
pub const LLONG_SIZE: u8 = size_of::<c_longlong>() as u8;
pub const FLOAT_SIZE: u8 = size_of::<c_float>() as u8;
pub const DOUBLE_SIZE: u8 = size_of::<c_double>() as u8;
// intmax_t is 64 bits on every target std supports.
pub const INTMAX_SIZE: u8 = size_of::<i64>() as u8;
pub const PTR_SIZE: u8 = size_of::<usize>() as u8;

/// Rust has no `long double`, so its format comes from the platform ABI.
pub const LDOUBLE_FORMAT: Option<FloatFormat> = long_double_format();

/// `MB_LEN_MAX` belongs to the C library, not the compiler.
pub const MB_LEN_MAX: Option<i32> = mb_len_max();

/// `ssize_t` is POSIX, not ISO C.
pub const HAS_SSIZE: bool = cfg!(unix);

const_assert!(CHAR_BIT >= 8);
const_assert!(SHORT_SIZE >= 2);
const_assert!(INT_SIZE >= 2);
const_assert!(LONG_SIZE >= 4);
const_assert!(LLONG_SIZE >= 8);

const_assert!(SHORT_SIZE <= INT_SIZE);
const_assert!(INT_SIZE <= LONG_SIZE);
const_assert!(LONG_SIZE <= LLONG_SIZE);
const_assert!(FLOAT_SIZE == FloatFormat::BINARY32.size);
const_assert!(DOUBLE_SIZE == FloatFormat::BINARY64.size);

const fn long_double_format() -> Option<FloatFormat> {
    if cfg!(target_env = "msvc") || cfg!(target_arch = "arm") {
        Some(FloatFormat::BINARY64)
    } else if cfg!(target_arch = "x86_64") {
        Some(FloatFormat::X87_EXTENDED)
    } else if cfg!(all(target_arch = "x86", target_os = "linux")) {
        Some(FloatFormat::X87_EXTENDED.stored_in(12))
    } else if cfg!(all(target_arch = "aarch64", target_vendor = "apple")) {
        Some(FloatFormat::BINARY64)
    } else if cfg!(all(
        any(target_arch = "aarch64", target_arch = "riscv64"),
        any(target_os = "linux", target_os = "android")
    )) {
        Some(FloatFormat::BINARY128)
    } else {
        None
    }
}

const fn mb_len_max() -> Option<i32> {
    if cfg!(windows) {
        // MSVCRT and UCRT, mingw included
        Some(5)
    } else if cfg!(target_vendor = "apple") {
        Some(6)
    } else if cfg!(target_env = "gnu") {
        Some(16)
    } else if cfg!(target_env = "musl") {
        Some(4)
    } else {
        None
    }
}
