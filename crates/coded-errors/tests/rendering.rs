use std::error::Error;

use coded_errors::{DecoratedError, Verbosity, define_codes, get_code, is, md};

define_codes! {
    pub enum StoreCode {
        NotFound => ("NOT_FOUND", "resource missing"),
        Unavailable => ("UNAVAILABLE", "store unavailable"),
    }
}

// Authored independently of StoreCode, agreeing on NotFound.
define_codes! {
    pub enum ApiCode {
        NotFound => ("NOT_FOUND", "resource missing"),
        Gone => ("NOT_FOUND", "resource was deleted"),
    }
}

#[inline(never)]
fn lookup(key: &str) -> DecoratedError {
    let err = DecoratedError::new(
        StoreCode::NotFound,
        md!["key" => key.to_string(), "shard" => 3, "cached" => false],
    );
    std::hint::black_box(err)
}

#[test]
fn short_rendering_is_code_and_message() {
    let err = lookup("users/7");
    assert_eq!(format!("{err}"), "NOT_FOUND: resource missing");
    assert_eq!(err.render(Verbosity::Short), "NOT_FOUND: resource missing");
}

#[test]
fn short_rendering_hides_operator_details() {
    let err = lookup("users/7");
    let short = err.to_string();
    assert!(!short.contains(&err.id().to_string()));
    assert!(!short.contains("metadata"));
    assert!(!short.contains("users/7"));
    assert!(!short.contains("call stack"));
}

#[test]
fn verbose_lists_all_metadata_in_order() {
    let err = lookup("users/7");
    let verbose = format!("{err:?}");
    assert_eq!(verbose.matches("metadata:").count(), 1);
    assert!(verbose.ends_with(
        r#"metadata: [{"key": users/7},{"shard": 3},{"cached": false}]"#
    ));
    assert!(verbose.contains(&format!("\n\tid: {}\n", err.id())));
    assert!(!verbose.contains("call stack"));
}

#[test]
fn structurally_equal_codes_match_across_types() {
    let err = lookup("a");
    assert!(is(&err, &StoreCode::NotFound));
    assert!(is(&err, &ApiCode::NotFound));
    assert!(!is(&err, &ApiCode::Gone));
    assert!(!is(&err, &StoreCode::Unavailable));
}

#[test]
fn get_code_only_recognises_decorated_errors() {
    let io = std::io::Error::other("boom");
    assert!(get_code(&io).is_none());

    let fmt_err = std::fmt::Error;
    assert!(get_code(&fmt_err).is_none());

    let err = lookup("a");
    assert_eq!(get_code(&err).map(|c| c.message()), Some("resource missing"));
}

#[test]
fn identifiers_are_unique_per_instance() {
    let a = DecoratedError::new(StoreCode::NotFound, md![]);
    let b = DecoratedError::new(StoreCode::NotFound, md![]);
    assert_ne!(a.id(), b.id());
    assert!(is(&a, &StoreCode::NotFound));
    assert!(is(&b, &StoreCode::NotFound));
}

#[test]
fn wrapping_an_external_error_shows_it_once_with_one_stack() {
    let err = DecoratedError::wrap(
        std::io::Error::other("disk full"),
        StoreCode::Unavailable,
        md![],
    );
    let detailed = format!("{err:#?}");
    assert!(detailed.contains("wrapped error: disk full"));
    assert_eq!(detailed.matches("call stack:").count(), 1);
    assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("disk full"));
}

#[test]
fn wrapping_a_decorated_error_prints_a_single_stack() {
    let inner = lookup("users/7");
    let inner_id = inner.id();
    let err = DecoratedError::wrap(inner, StoreCode::Unavailable, md!["retry" => 2]);

    let detailed = format!("{err:#?}");
    assert_eq!(detailed.matches("call stack").count(), 1);
    assert!(detailed.contains(&format!("wrapped error: NOT_FOUND: resource missing\n\tid: {inner_id}")));
    assert!(detailed.contains(r#"{"key": users/7}"#));
}

#[test]
fn new_without_cause_has_no_wrapped_section() {
    let detailed = format!("{:#?}", lookup("a"));
    assert!(!detailed.contains("wrapped error:"));
    assert!(detailed.contains("\n\tcall stack:\n"));
}

#[test]
fn call_stack_starts_at_the_application_frame() {
    let err = lookup("a");
    let frames = err.call_stack().frames();
    assert!(frames[0].function.ends_with("lookup"), "{:?}", frames[0]);
    assert!(
        frames[0]
            .file
            .as_deref()
            .is_some_and(|p| p.ends_with("rendering.rs"))
    );
}

#[test]
fn compact_rendering_drops_file_and_line() {
    let err = lookup("a");
    let compact = format!("{err:-#?}");
    assert!(!compact.contains("call stack:"));

    let (_, stack) = compact
        .split_once("\n\tcall stack (compacted):\n")
        .expect("compacted section");
    assert!(!stack.is_empty());
    for line in stack.lines() {
        assert!(line.starts_with('\t') && !line.starts_with("\t\t"), "{line:?}");
        assert!(!line.contains(".rs:"), "{line:?}");
    }
    assert_eq!(err.render(Verbosity::Compact), compact);
}

#[test]
fn unsupported_format_specs_render_nothing() {
    let err = lookup("a");
    let entry = err.metadata().iter().next().expect("an entry");
    let stack = err.call_stack();

    for out in [
        format!("{err:x}"),
        format!("{err:o}"),
        format!("{err:e}"),
        format!("{entry}"),
        format!("{entry:X}"),
        format!("{}", err.metadata()),
        format!("{:b}", err.metadata()),
        format!("{stack}"),
        format!("{stack:x}"),
    ] {
        assert_eq!(out, "");
    }
}

#[test]
fn verbosity_from_config_string() {
    let err = lookup("a");
    let level: Verbosity = "detailed".parse().expect("valid level");
    assert_eq!(err.render(level), format!("{err:#?}"));
}
