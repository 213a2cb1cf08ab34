use assert_cmd::Command;

pub const LINE_WIDTH: usize = 100;

pub fn run(args: &[&str]) -> String {
    let output = Command::cargo_bin("ctypes")
        .unwrap()
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap()
}

pub fn major_rule() -> String {
    "=".repeat(LINE_WIDTH)
}

pub fn minor_rule() -> String {
    "-".repeat(LINE_WIDTH)
}

/**
 * Constant lines of each family block in a constants report.
 */
pub fn blocks(output: &str) -> Vec<Vec<String>> {
    let major = major_rule();
    let minor = minor_rule();
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

/**
 * Splits `name: N bytes (M bits)` into its numbers.
 */
pub fn parse_size_line(line: &str) -> Option<(String, u32, u32)> {
    let (name, rest) = line.trim_start().rsplit_once(": ")?;
    let (size, rest) = rest.split_once(" bytes (")?;
    let bits = rest.strip_suffix(" bits)")?;
    Some((name.to_string(), size.parse().ok()?, bits.parse().ok()?))
}
