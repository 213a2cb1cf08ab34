use crate::cmdline::Cli;
use crate::environment::Environment;
use crate::families::{self, Families};
use crate::float::FloatFormat;
use crate::layout::Layout;
use crate::report;

/**
 * A 16-bit machine with an unsigned `char` and no `long double` format.
 */
pub fn ccpu() -> Environment {
    Environment {
        char_bit: 8,
        bool_size: Some(1),
        char_signed: false,
        short_size: 2,
        int_size: 2,
        long_size: 4,
        llong_size: 8,
        intmax_size: 8,
        ptr_size: 2,
        has_ssize: true,
        float: FloatFormat::BINARY32,
        double: FloatFormat::BINARY64,
        long_double: None,
        mb_len_max: Some(1),
        flt_rounds: Some(1),
        flt_eval_method: Some(0),
    }
}

/**
 * A word-addressed DSP where every type, `char` included, is 16 bits wide.
 */
pub fn dsp() -> Environment {
    Environment {
        char_bit: 16,
        bool_size: None,
        char_signed: true,
        short_size: 1,
        int_size: 1,
        long_size: 2,
        llong_size: 4,
        intmax_size: 4,
        ptr_size: 1,
        has_ssize: false,
        float: FloatFormat::BINARY32.stored_in(2),
        double: FloatFormat::BINARY32.stored_in(2),
        long_double: Some(FloatFormat::BINARY32.stored_in(2)),
        mb_len_max: Some(1),
        flt_rounds: Some(1),
        flt_eval_method: Some(0),
    }
}

pub fn run(env: &Environment, args: &[&str]) -> String {
    let cli = Cli::from_args(args.iter());
    let mut out = Vec::new();
    report::run(&mut out, env, &cli, &Layout::default()).unwrap();
    String::from_utf8(out).unwrap()
}

pub fn constants(env: &Environment, available: Families) -> String {
    let mut out = Vec::new();
    report::render_constants(&mut out, env, available, &Layout::default()).unwrap();
    String::from_utf8(out).unwrap()
}

pub fn sizes(env: &Environment) -> String {
    let mut out = Vec::new();
    report::render_sizes(&mut out, env, families::detect(env), &Layout::default()).unwrap();
    String::from_utf8(out).unwrap()
}

/**
 * Constant lines of every block in a constants report. A block opens with a blank
 * line and a `=` rule and its constants end at the `-` rule.
 */
pub fn blocks(output: &str) -> Vec<Vec<String>> {
    let layout = Layout::default();
    let major = layout.major_rule();
    let minor = layout.minor_rule();
    let lines: Vec<&str> = output.lines().collect();

    let mut result = Vec::new();
    let mut i = 0;
    while i + 1 < lines.len() {
        if lines[i].is_empty() && lines[i + 1] == major {
            let block: Vec<String> = lines[i + 2..]
                .iter()
                .take_while(|l| **l != minor)
                .map(|l| l.to_string())
                .collect();
            i += 2 + block.len();
            result.push(block);
        } else {
            i += 1;
        }
    }
    result
}

pub fn symbol_of(line: &str) -> &str {
    line.trim_start().split(' ').next().unwrap()
}
