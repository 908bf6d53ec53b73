use super::SyntaxError;
use super::syntax::{check_import, check_package, check_type, is_identifier, is_keyword};

#[test]
fn identifiers() {
    for ident in ["x", "_x", "Foo", "LevelTrace", "été", "a1"] {
        assert!(is_identifier(ident), "{ident}");
    }
    // Go letters are category L and digits are category Nd.
    for ident in ["ǅx", "x٣", "Ωmega"] {
        assert!(is_identifier(ident), "{ident}");
    }
    for ident in ["", "1x", "foo-bar", "foo.bar", "a b", "func", "type", "x²", "Ⅻ", "e\u{301}"] {
        assert!(!is_identifier(ident), "{ident}");
    }
}

#[test]
fn keywords() {
    assert!(is_keyword("chan"));
    assert!(is_keyword("fallthrough"));
    assert!(!is_keyword("any"));
    assert!(!is_keyword("string"));
}

#[test]
fn package_names() {
    assert!(check_package("slogx").is_ok());
    assert!(check_package("main").is_ok());
    assert_eq!(
        check_package("_"),
        Err(SyntaxError::InvalidPackage("_".to_string()))
    );
    assert!(check_package("my-pkg").is_err());
}

#[test]
fn import_paths() {
    for path in ["log/slog", "time", "github.com/go-simpler/sloggen", "gopkg.in/yaml.v3"] {
        assert!(check_import(path).is_ok(), "{path}");
    }
    for path in ["", "a b", "a\"b", "a\\b", "a\tb", "a{b}"] {
        assert_eq!(
            check_import(path),
            Err(SyntaxError::InvalidImport(path.to_string())),
            "{path:?}"
        );
    }
}

#[test]
fn accepted_types() {
    let types = [
        "int",
        "error",
        "any",
        "time.Time",
        "*User",
        "[]string",
        "[]*time.Time",
        "[4]byte",
        "map[string]any",
        "map[string][]int",
        "chan int",
        "<-chan error",
        "chan<- struct{}",
        "interface{}",
        "Pair[int, string]",
        "pkg.Set[pkg.Key]",
        "[N]int",
        "[pkg.Size]byte",
        "func()",
        "func() error",
        "func(int, string) (bool, error)",
        "func(ctx context.Context, args ...any)",
        "func(a, b int) func() int",
        "interface{ String() string }",
        "interface{ Read(p []byte) (n int, err error); Close() error }",
        "interface{ ~int | ~string }",
        "interface{ fmt.Stringer }",
        "struct{ X int }",
        "struct{ X, Y int; Name string `json:\"name\"` }",
        "struct{ *bytes.Buffer }",
        "map[string]struct{}",
    ];
    for typ in types {
        assert!(check_type("key", typ).is_ok(), "{typ}");
    }
}

#[test]
fn rejected_types() {
    let types = [
        "",
        " int",
        "int ",
        "func(",
        "func() {",
        "a.b.c",
        "map[string",
        "[-1]int",
        "interface{ String() string",
        "struct{ X int; }}",
        "struct{ X int `tag }",
        "[]",
        "Pair[int,",
        "string; var x int",
    ];
    for typ in types {
        assert_eq!(
            check_type("key", typ),
            Err(SyntaxError::InvalidType {
                key: "key".to_string(),
                typ: typ.to_string(),
            }),
            "{typ:?}"
        );
    }
}

#[test]
fn deeply_nested_type_is_rejected() {
    let typ = format!("{}int", "*".repeat(64));
    assert!(check_type("key", &typ).is_err());

    let typ = format!("{}int", "*".repeat(8));
    assert!(check_type("key", &typ).is_ok());
}
