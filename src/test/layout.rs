use crate::layout::{emit_right_aligned, repchar, Layout};

fn emit(width: usize, record: &str) -> String {
    let mut out = Vec::new();
    emit_right_aligned(&mut out, width, record).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_repchar() {
    assert_eq!(repchar('=', 5), "=====");
    assert_eq!(repchar('-', 0), "");
    assert_eq!(repchar('-', 100).len(), 100);
}

#[test]
fn test_right_aligned() {
    assert_eq!(emit(10, "abc"), "       abc\n");
    assert_eq!(emit(3, "abc"), "abc\n");
}

#[test]
fn test_right_aligned_overflow() {
    assert_eq!(emit(2, "abcdef"), "abcdef\n");
    assert_eq!(emit(0, ""), "\n");
}

#[test]
fn test_banner() {
    let layout = Layout {
        line_width: 12,
        ..Layout::default()
    };
    let mut out = Vec::new();
    layout.write_banner(&mut out, "TITLE").unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "============\n     TITLE\n============\n"
    );
}
