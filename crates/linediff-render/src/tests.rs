use super::*;

fn line(kind: SegmentKind, content: &str, line_break: bool) -> RenderedLine {
    RenderedLine::new(kind, content, line_break)
}

const PAIRS: &[(&str, &str)] = &[
    ("", ""),
    ("", "x\ny\n"),
    ("x\ny\n", ""),
    ("a\nb\n", "a\nc\n"),
    ("a \n", "a\n"),
    ("a", "a\n"),
    ("a\n", "a"),
    ("a\nb\nc", "a\nb\nc"),
    ("one\ntwo\nthree\n", "zero\none\nthree\nfour\n"),
    ("\n\n\n", "\n"),
    ("a\r\nb\r\n", "a\nb\n"),
    ("fn main() {\n    println!(\"hi\");\n}\n", "fn main() {\n    println!(\"hello\");\n    return;\n}\n"),
    ("same\nsame\nsame\n", "same\nother\nsame\n"),
    ("trailing", "trailing\nmore"),
    ("x\ry\n", "x\rz\n"),
    ("a\rb\nc\n", "a\rb\nd\n"),
];

#[test]
fn test_both_empty() {
    assert!(diff_segments("", "").is_empty());
    assert!(render("", "").is_empty());
    assert_eq!(to_text(&render("", "")), "");
}

#[test]
fn test_identical_is_single_unchanged_segment() {
    let text = "alpha\nbeta\ngamma\n";
    let segments = diff_segments(text, text);
    assert_eq!(segments, vec![DiffSegment::new(SegmentKind::Unchanged, text)]);
}

#[test]
fn test_identical_renders_one_unchanged_line_per_line() {
    for text in ["a\nb\nc\n", "a\nb\nc", "\n", "x\n\ny\n", "single"] {
        let lines = render(text, text);
        assert_eq!(lines.len(), DocumentText::from(text).line_count(), "{text:?}");
        assert!(lines.iter().all(|l| l.kind == SegmentKind::Unchanged));
    }
}

#[test]
fn test_old_empty_is_single_added_segment() {
    let segments = diff_segments("", "x\ny\n");
    assert_eq!(segments, vec![DiffSegment::new(SegmentKind::Added, "x\ny\n")]);
}

#[test]
fn test_new_empty_is_single_removed_segment() {
    let segments = diff_segments("x\ny\n", "");
    assert_eq!(segments, vec![DiffSegment::new(SegmentKind::Removed, "x\ny\n")]);
}

#[test]
fn test_added_lines_from_empty() {
    assert_eq!(
        render("", "x\ny\n"),
        vec![
            line(SegmentKind::Added, "x", true),
            line(SegmentKind::Added, "y", true),
        ]
    );
}

#[test]
fn test_single_line_change() {
    assert_eq!(
        render("a\nb\n", "a\nc\n"),
        vec![
            line(SegmentKind::Unchanged, "a", true),
            line(SegmentKind::Removed, "b", true),
            line(SegmentKind::Added, "c", true),
        ]
    );
    assert_eq!(to_text(&render("a\nb\n", "a\nc\n")), "  a\n- b\n+ c\n");
}

#[test]
fn test_trailing_whitespace_is_significant() {
    assert_eq!(
        render("a \n", "a\n"),
        vec![
            line(SegmentKind::Removed, "a ", true),
            line(SegmentKind::Added, "a", true),
        ]
    );
}

#[test]
fn test_terminator_only_change_is_detected() {
    let segments = diff_segments("a", "a\n");
    assert_eq!(
        segments,
        vec![
            DiffSegment::new(SegmentKind::Removed, "a"),
            DiffSegment::new(SegmentKind::Added, "a\n"),
        ]
    );
    assert_eq!(
        render("a", "a\n"),
        vec![
            line(SegmentKind::Removed, "a", false),
            line(SegmentKind::Added, "a", true),
        ]
    );
}

#[test]
fn test_unterminated_last_line_keeps_no_break() {
    let lines = render("a\nb", "a\nb");
    assert_eq!(
        lines,
        vec![
            line(SegmentKind::Unchanged, "a", true),
            line(SegmentKind::Unchanged, "b", false),
        ]
    );
    assert_eq!(to_text(&lines), "  a\n  b");
}

#[test]
fn test_trailing_break_adds_no_empty_line() {
    let segment = DiffSegment::new(SegmentKind::Added, "x\ny\n");
    let lines = render_segment(&segment);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| !l.content.is_empty()));
}

#[test]
fn test_blank_lines_survive() {
    let lines = render_segment(&DiffSegment::new(SegmentKind::Unchanged, "a\n\nb\n"));
    let contents: Vec<&str> = lines.iter().map(|l| l.content.as_str()).collect();
    assert_eq!(contents, vec!["a", "", "b"]);

    let lines = render_segment(&DiffSegment::new(SegmentKind::Unchanged, "\n"));
    assert_eq!(lines, vec![line(SegmentKind::Unchanged, "", true)]);
}

#[test]
fn test_lone_carriage_return_does_not_end_a_line() {
    assert_eq!(
        diff_segments("x\ry\n", "x\rz\n"),
        vec![
            DiffSegment::new(SegmentKind::Removed, "x\ry\n"),
            DiffSegment::new(SegmentKind::Added, "x\rz\n"),
        ]
    );
    assert_eq!(
        render("a\rb\nc\n", "a\rb\nd\n"),
        vec![
            line(SegmentKind::Unchanged, "a\rb", true),
            line(SegmentKind::Removed, "c", true),
            line(SegmentKind::Added, "d", true),
        ]
    );
}

#[test]
fn test_only_last_line_of_a_document_is_unterminated() {
    for (old, new) in PAIRS {
        let lines = render(old, new);
        for (i, current) in lines.iter().enumerate() {
            if current.line_break {
                continue;
            }
            let later = &lines[i + 1..];
            if current.kind.in_old() {
                assert!(
                    !later.iter().any(|l| l.kind.in_old()),
                    "unterminated old line {current:?} before the end in {old:?} -> {new:?}"
                );
            }
            if current.kind.in_new() {
                assert!(
                    !later.iter().any(|l| l.kind.in_new()),
                    "unterminated new line {current:?} before the end in {old:?} -> {new:?}"
                );
            }
        }
    }
}

#[test]
fn test_write_styled_marks_only_the_end() {
    let lines = render("x\ry\n", "x\rz\n");
    let options = StyleOptions {
        newline_marker: true,
        ..StyleOptions::default()
    };
    let mut out = Vec::new();
    write_styled(&mut out, &lines, &options).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out, "- x\ry\n+ x\rz\n");
    assert!(!out.contains(NO_NEWLINE_MARKER));
}

#[test]
fn test_reconstruction() {
    for (old, new) in PAIRS {
        let segments = diff_segments(old, new);
        assert_eq!(reconstruct_old(&segments), *old, "old side of {old:?} -> {new:?}");
        assert_eq!(reconstruct_new(&segments), *new, "new side of {old:?} -> {new:?}");
    }
}

#[test]
fn test_segments_are_maximal() {
    for (old, new) in PAIRS {
        let segments = diff_segments(old, new);
        assert!(segments.iter().all(|s| !s.text.is_empty()));
        for pair in segments.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind, "{old:?} -> {new:?}");
        }
    }
}

#[test]
fn test_render_is_repeatable() {
    for (old, new) in PAIRS {
        assert_eq!(render(old, new), render(old, new));
    }
}

#[test]
fn test_render_from_many_threads() {
    let (old, new) = PAIRS[8];
    let expected = render(old, new);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| render(old, new))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_prefixes() {
    assert_eq!(SegmentKind::Unchanged.prefix(), "  ");
    assert_eq!(SegmentKind::Added.prefix(), "+ ");
    assert_eq!(SegmentKind::Removed.prefix(), "- ");

    let lines = render("old\n", "new\n");
    assert!(lines.iter().all(|l| l.prefix == l.kind.prefix()));
    assert_eq!(lines[0].display_text(), "- old");
}

#[test]
fn test_write_styled_plain_with_marker() {
    let lines = render("a", "a\n");
    let options = StyleOptions {
        color: false,
        newline_marker: true,
        ..StyleOptions::default()
    };
    let mut out = Vec::new();
    write_styled(&mut out, &lines, &options).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("- a\n{}\n+ a\n", NO_NEWLINE_MARKER)
    );
}

#[test]
fn test_write_styled_without_marker() {
    let lines = render("a\nb", "a\nb");
    let mut out = Vec::new();
    write_styled(&mut out, &lines, &StyleOptions::default()).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "  a\n  b\n");
}

#[test]
fn test_write_styled_color() {
    let lines = render("a\n", "b\n");
    let options = StyleOptions {
        color: true,
        ..StyleOptions::default()
    };
    let mut out = Vec::new();
    write_styled(&mut out, &lines, &options).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("\u{1b}["));
    assert!(out.contains("- a"));
    assert!(out.contains("+ b"));
}

#[test]
fn test_stats() {
    let stats = DiffStats::from_lines(&render("a\nb\nc\n", "a\nx\ny\nc\n"));
    assert_eq!(
        stats,
        DiffStats {
            unchanged: 2,
            added: 2,
            removed: 1,
        }
    );
    assert!(!stats.is_identical());
    assert_eq!(stats.summary(), "2 added, 1 removed, 2 unchanged");

    assert!(DiffStats::from_lines(&render("a\n", "a\n")).is_identical());
}

#[test]
fn test_rendered_line_json() {
    let value = serde_json::to_value(line(SegmentKind::Added, "x", true)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "kind": "added",
            "prefix": "+ ",
            "content": "x",
            "line_break": true,
        })
    );
}

#[test]
fn test_document_text() {
    let doc = DocumentText::from("a\nb\n".to_string());
    assert_eq!(doc.as_str(), "a\nb\n");
    assert_eq!(doc.line_count(), 2);
    assert!(!doc.is_empty());
    assert!(DocumentText::from("").is_empty());
    assert_eq!(DocumentText::from("").line_count(), 0);
}
