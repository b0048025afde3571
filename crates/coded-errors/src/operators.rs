use std::error::Error;

use crate::code::{Code, same_code};
use crate::error::DecoratedError;

/// `true` if `err` is a [`DecoratedError`] whose code is the same code as
/// `code` (see [`same_code`]).
///
/// Only `err` itself is inspected, not its `source()` chain.
pub fn is(err: &(dyn Error + 'static), code: &dyn Code) -> bool {
    err.downcast_ref::<DecoratedError>()
        .is_some_and(|decorated| same_code(decorated.code(), code))
}

/// The code of `err` if it is a [`DecoratedError`], `None` otherwise.
pub fn get_code<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a dyn Code> {
    err.downcast_ref::<DecoratedError>()
        .map(DecoratedError::code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::md;

    struct TestCode;
    impl Code for TestCode {
        fn name(&self) -> &str {
            "TestCode"
        }
        fn message(&self) -> &str {
            "a test code error has happened"
        }
    }

    // A distinct type agreeing with TestCode on both strings.
    struct SimilarTestCode(#[allow(dead_code)] bool);
    impl Code for SimilarTestCode {
        fn name(&self) -> &str {
            "TestCode"
        }
        fn message(&self) -> &str {
            "a test code error has happened"
        }
    }

    struct DifferentTestCode;
    impl Code for DifferentTestCode {
        fn name(&self) -> &str {
            "DifferentError"
        }
        fn message(&self) -> &str {
            "this is a different error"
        }
    }

    #[test]
    fn is_exactly_the_same_code() {
        let err = DecoratedError::new(TestCode, md![]);
        assert!(is(&err, &TestCode));
    }

    #[test]
    fn is_a_similar_code() {
        let err = DecoratedError::new(TestCode, md![]);
        assert!(is(&err, &SimilarTestCode(false)));
    }

    #[test]
    fn is_not_a_different_code() {
        let err = DecoratedError::new(TestCode, md![]);
        assert!(!is(&err, &DifferentTestCode));
    }

    #[test]
    fn external_errors_never_match() {
        let err = std::io::Error::other("some error");
        assert!(!is(&err, &TestCode));
        assert!(get_code(&err).is_none());
    }

    #[test]
    fn wrapped_codes_are_not_searched() {
        let inner = DecoratedError::new(DifferentTestCode, md![]);
        let err = DecoratedError::wrap(inner, TestCode, md![]);
        assert!(!is(&err, &DifferentTestCode));
        assert!(is(&err, &TestCode));
    }

    #[test]
    fn get_code_returns_stored_code() {
        let err = DecoratedError::new(TestCode, md![]);
        let code = get_code(&err).expect("decorated error has a code");
        assert_eq!(code.name(), "TestCode");
        assert_eq!(code.message(), "a test code error has happened");
    }

    #[test]
    fn works_through_boxed_errors() {
        let boxed: Box<dyn Error + Send + Sync> = Box::new(DecoratedError::new(TestCode, md![]));
        assert!(is(&*boxed, &TestCode));
        assert!(get_code(&*boxed).is_some());
    }
}
