use std::fmt::Formatter;
use std::io::Write;

use tracing::debug;

use crate::{
    cmdline::Cli,
    ctype::CType,
    environment::{Constant, Environment, Value},
    error::ReportError,
    families::{self, Families, Standard, FAMILIES},
    layout::{emit_right_aligned, Layout},
};

pub const SIZES_TITLE: &str = "PRIMITIVE DATA TYPE SIZES";
pub const CONSTANTS_TITLE: &str = "TYPE-RELATED CONSTANTS";

/// Significant digits of floating-point limits, as `%g` prints them.
const GENERAL_PRECISION: usize = 6;

/// One line of the sizes report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub name: &'static str,
    pub size: u32,
    pub bits: u32,
}

impl TypeDescriptor {
    pub fn new(name: &'static str, t: CType, env: &Environment) -> Self {
        Self {
            name,
            size: t.sizeof(),
            bits: t.bits(env.char_bit),
        }
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}: {} bytes ({} bits)", self.name, self.size, self.bits)
    }
}

/// One line of the constants report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitDescriptor {
    pub symbol: &'static str,
    pub decimal: String,
    pub alternate: String,
    pub bits: u32,
    pub standard: Standard,
}

impl LimitDescriptor {
    pub fn new(
        symbol: &'static str,
        constant: Constant,
        standard: Standard,
        env: &Environment,
    ) -> Self {
        let bits = constant.t.bits(env.char_bit);
        let (decimal, alternate) = match constant.value {
            Value::Signed(v) => (v.to_string(), bit_pattern(v as u128, bits)),
            Value::Unsigned(v) => (v.to_string(), bit_pattern(v, bits)),
            Value::Real(v) => (v.to_general(GENERAL_PRECISION), v.to_hex()),
        };
        Self {
            symbol,
            decimal,
            alternate,
            bits,
            standard,
        }
    }

    pub fn render(&self, layout: &Layout) -> String {
        format!(
            "{:>sw$} [ {:>dw$} | {:<aw$} ({:>3}-bit)]{}",
            self.symbol,
            self.decimal,
            self.alternate,
            self.bits,
            self.standard.annotation(),
            sw = layout.symbol_width,
            dw = layout.decimal_width,
            aw = layout.alternate_width,
        )
    }
}

/**
 * `%#x` of the value truncated to `bits`. Like printf, zero gets no prefix.
 */
fn bit_pattern(value: u128, bits: u32) -> String {
    let pattern = if bits >= u128::BITS {
        value
    } else {
        value & ((1u128 << bits) - 1)
    };
    if pattern == 0 {
        "0".to_string()
    } else {
        format!("{:#x}", pattern)
    }
}

/**
 * The sizes report lines, grouped and ordered from `char` up to the pointer-sized
 * types. Booleans come first when the target has them.
 */
pub fn type_groups(env: &Environment, available: Families) -> Vec<Vec<TypeDescriptor>> {
    let mut groups: Vec<Vec<(&'static str, CType)>> = Vec::new();

    if let Some(b) = env.bool_type().filter(|_| available.contains(Families::BOOL)) {
        groups.push(vec![("_Bool", b), ("bool", b)]);
    }
    groups.push(vec![
        ("char", env.char_type()),
        ("signed char", CType::Int(1, true)),
        ("unsigned char", CType::Int(1, false)),
    ]);

    let short = env.short_type(true);
    let ushort = env.short_type(false);
    groups.push(vec![
        ("short", short),
        ("short int", short),
        ("signed short", short),
        ("signed short int", short),
    ]);
    groups.push(vec![("unsigned short", ushort), ("unsigned short int", ushort)]);

    let int = env.int_type(true);
    let uint = env.int_type(false);
    groups.push(vec![("int", int), ("signed", int), ("signed int", int)]);
    groups.push(vec![("unsigned", uint), ("unsigned int", uint)]);

    let long = env.long_type(true);
    let ulong = env.long_type(false);
    groups.push(vec![
        ("long", long),
        ("long int", long),
        ("signed long", long),
        ("signed long int", long),
    ]);
    groups.push(vec![("unsigned long", ulong), ("unsigned long int", ulong)]);

    let llong = env.llong_type(true);
    let ullong = env.llong_type(false);
    groups.push(vec![
        ("long long", llong),
        ("long long int", llong),
        ("signed long long", llong),
        ("signed long long int", llong),
    ]);
    groups.push(vec![
        ("unsigned long long", ullong),
        ("unsigned long long int", ullong),
    ]);

    groups.push(vec![("float", CType::Float(env.float.size))]);
    let mut doubles = vec![("double", CType::Float(env.double.size))];
    if let Some(ld) = env.long_double {
        doubles.push(("long double", CType::Float(ld.size)));
    }
    groups.push(doubles);

    groups.push(vec![
        ("intmax_t", env.intmax_type(true)),
        ("uintmax_t", env.intmax_type(false)),
    ]);
    let mut sizes = vec![("size_t", env.ptr_type(false))];
    if env.has_ssize {
        sizes.push(("ssize_t", env.ptr_type(true)));
    }
    groups.push(sizes);
    groups.push(vec![
        ("intptr_t", env.ptr_type(true)),
        ("uintptr_t", env.ptr_type(false)),
        ("ptrdiff_t", env.ptr_type(true)),
    ]);

    groups
        .into_iter()
        .map(|group| {
            group
                .into_iter()
                .map(|(name, t)| TypeDescriptor::new(name, t, env))
                .collect()
        })
        .collect()
}

pub fn render_sizes<W: Write>(
    out: &mut W,
    env: &Environment,
    available: Families,
    layout: &Layout,
) -> Result<(), ReportError> {
    let minor = layout.minor_rule();

    layout.write_banner(out, SIZES_TITLE)?;
    writeln!(out)?;
    for group in type_groups(env, available) {
        writeln!(out, "{}", minor)?;
        for t in &group {
            emit_right_aligned(out, layout.line_width, t)?;
        }
    }
    writeln!(out, "{}", minor)?;
    Ok(())
}

pub fn render_constants<W: Write>(
    out: &mut W,
    env: &Environment,
    available: Families,
    layout: &Layout,
) -> Result<(), ReportError> {
    let major = layout.major_rule();
    let minor = layout.minor_rule();

    layout.write_banner(out, CONSTANTS_TITLE)?;
    for family in FAMILIES.iter().filter(|f| available.contains(f.flag)) {
        let lines: Option<Vec<LimitDescriptor>> = family
            .symbols
            .iter()
            .map(|&s| {
                env.lookup(s)
                    .map(|c| LimitDescriptor::new(s, c, family.standard, env))
            })
            .collect();
        let lines = match lines {
            Some(lines) => lines,
            None => continue,
        };

        writeln!(out)?;
        writeln!(out, "{}", major)?;
        for line in &lines {
            writeln!(out, "{}", line.render(layout))?;
        }
        writeln!(out, "{}", minor)?;
        for about in family.about {
            writeln!(out, "\t{}", about)?;
        }
        writeln!(out, "{}", major)?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn run<W: Write>(
    out: &mut W,
    env: &Environment,
    cli: &Cli,
    layout: &Layout,
) -> Result<(), ReportError> {
    let available = families::detect(env);
    debug!(?available, "detected constant families");

    render_sizes(out, env, available, layout)?;
    if cli.show_constants {
        render_constants(out, env, available, layout)?;
    }
    out.flush()?;
    Ok(())
}
