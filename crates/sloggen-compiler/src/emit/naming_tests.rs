use super::naming::{go_to_upper, level_const, quote, slog_constructor};

#[test]
fn typed_constructors() {
    let cases = [
        ("string", "String"),
        ("int", "Int"),
        ("int64", "Int64"),
        ("uint64", "Uint64"),
        ("float64", "Float64"),
        ("bool", "Bool"),
        ("time.Time", "Time"),
        ("time.Duration", "Duration"),
    ];
    for (typ, ctor) in cases {
        assert_eq!(slog_constructor(typ), ctor, "{typ}");
    }
}

#[test]
fn constructor_match_ignores_case() {
    assert_eq!(slog_constructor("INT64"), "Int64");
    assert_eq!(slog_constructor("time.duration"), "Duration");
    // Only the `time.` qualifier is stripped.
    assert_eq!(slog_constructor("Duration"), "Duration");
}

#[test]
fn other_types_use_any() {
    for typ in ["error", "any", "int32", "uint", "[]string", "*time.Time", "mypkg.Time"] {
        assert_eq!(slog_constructor(typ), "Any", "{typ}");
    }
}

#[test]
fn level_constant_names() {
    assert_eq!(level_const("trace"), "LevelTrace");
    assert_eq!(level_const("very_verbose"), "LevelVeryVerbose");
    assert_eq!(level_const("ALERT"), "LevelALERT");
}

#[test]
fn quoted_literals() {
    insta::assert_snapshot!(quote("request_id"), @r#""request_id""#);
    insta::assert_snapshot!(quote(r#"say "hi"\n"#), @r#""say \"hi\"\\n""#);
    assert_eq!(quote("a\tb\n"), r#""a\tb\n""#);
    assert_eq!(quote("\u{1}"), r#""\u0001""#);
}

#[test]
fn upper_case_matches_go_simple_mapping() {
    assert_eq!(go_to_upper("trace"), "TRACE");
    assert_eq!(go_to_upper("straße"), "STRAßE");
    assert_eq!(go_to_upper("ǆ"), "Ǆ");
    assert_eq!(go_to_upper("ﬁx"), "ﬁX");
    assert_eq!(go_to_upper("\u{1F80}"), "\u{1F88}");
    assert_eq!(go_to_upper("\u{1FB3}"), "\u{1FBC}");
    assert_eq!(go_to_upper("\u{1F88}"), "\u{1F88}");
}
