use std::error::Error;

use crate::call_stack::CallStack;
use crate::code::Code;
use crate::error::{DecoratedError, Wrapped};
use crate::metadata::{Metadata, MetadataEntry};

/// Extension trait for `Result` turning any error into a [`DecoratedError`]
/// at the point it crosses into code that returns coded errors.
///
/// Behaves exactly like [`DecoratedError::wrap`]: the recorded call stack
/// starts at the caller of the helper, and a decorated error being wrapped
/// loses its own stack.
///
/// Example
/// ```rust
/// use coded_errors::{ResultExt, define_codes, md};
///
/// define_codes! {
///     pub enum ConfigCode {
///         Unreadable => ("CONFIG_UNREADABLE", "configuration could not be read"),
///     }
/// }
///
/// let path = "/does/not/exist.toml";
/// let err = std::fs::read_to_string(path)
///     .wrap_code(ConfigCode::Unreadable, md!["path" => path])
///     .unwrap_err();
/// assert!(coded_errors::is(&err, &ConfigCode::Unreadable));
/// assert!(err.wrapped().is_some());
/// ```
pub trait ResultExt<T> {
    /// Wrap the error, if any, with `code` and `metadata`.
    fn wrap_code<C>(
        self,
        code: C,
        metadata: impl IntoIterator<Item = MetadataEntry>,
    ) -> Result<T, DecoratedError>
    where
        C: Code + 'static;

    /// Like [`ResultExt::wrap_code`], building the metadata only on error.
    fn wrap_code_with<C, F>(self, code: C, metadata: F) -> Result<T, DecoratedError>
    where
        C: Code + 'static,
        F: FnOnce() -> Metadata;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Box<dyn Error + Send + Sync>>,
{
    #[inline(never)]
    fn wrap_code<C>(
        self,
        code: C,
        metadata: impl IntoIterator<Item = MetadataEntry>,
    ) -> Result<T, DecoratedError>
    where
        C: Code + 'static,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(DecoratedError::assemble(
                Box::new(code),
                metadata.into_iter().collect(),
                Some(Wrapped::from_boxed(err.into())),
                CallStack::capture(1),
            )),
        }
    }

    #[inline(never)]
    fn wrap_code_with<C, F>(self, code: C, metadata: F) -> Result<T, DecoratedError>
    where
        C: Code + 'static,
        F: FnOnce() -> Metadata,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(DecoratedError::assemble(
                Box::new(code),
                metadata(),
                Some(Wrapped::from_boxed(err.into())),
                CallStack::capture(1),
            )),
        }
    }
}
