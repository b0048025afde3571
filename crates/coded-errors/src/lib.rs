//! coded-errors: errors identified by codes
//!
//! Libraries and services often need to recognise the errors coming out of
//! their dependencies, to roll something back or to show users a specific
//! message. Sentinel values cannot carry per-instance information, and a
//! dedicated type per error means a lot of boilerplate that every team
//! repeats. Here an error is identified by a [`Code`] instead: any type
//! with a symbolic name and a static message, compared by those two strings
//! rather than by type (see [`same_code`]).
//!
//! Errors are for users, but they must be useful to operators and
//! maintainers too. A [`DecoratedError`] carries:
//!
//! 1. The code and its message, precise enough for users and documentable.
//! 2. A unique id per instance, which users can quote to support and
//!    operators can use to correlate log entries.
//! 3. Metadata: the input values and state that explain the circumstances.
//! 4. The call stack at construction time.
//! 5. The original error, when a third party error is wrapped.
//!
//! Users should only ever see the first item; the rest is for the systems
//! where operators look (logs, traces), which is why the amount of detail is
//! chosen when the error is formatted.
//!
//! Printing
//! ```text
//! {}      TestCode: a test code error has happened
//!
//! {:?}    TestCode: a test code error has happened
//!             id: a0d2dbe9-4aa9-47d2-9630-2cde8a3b1a0b
//!             metadata: [{"var1": a string},{"var2": 10}]
//!
//! {:#?}   TestCode: a test code error has happened
//!             id: a0d2dbe9-4aa9-47d2-9630-2cde8a3b1a0b
//!             metadata: [{"var1": a string},{"var2": 10}]
//!             wrapped error: some external error
//!             call stack:
//!             app::storage::load
//!                     src/storage.rs:23
//!             app::main
//!                     src/main.rs:8
//!
//! {:-#?}  ...
//!             call stack (compacted):
//!             app::storage::load
//!             app::main
//! ```
//! Any other format spec prints nothing. [`DecoratedError::render`] takes a
//! [`Verbosity`] for callers that pick the level at runtime.
//!
//! When an error is wrapped by another `DecoratedError`, only the outermost
//! keeps its call stack, so a chain prints one stack.
//!
//! Quick start
//! ```rust
//! use coded_errors::{DecoratedError, define_codes, get_code, is, md};
//!
//! define_codes! {
//!     pub enum StorageCode {
//!         NotFound => ("NOT_FOUND", "resource missing"),
//!         Unavailable => ("UNAVAILABLE", "storage backend unavailable"),
//!     }
//! }
//!
//! fn load(key: &str) -> Result<Vec<u8>, DecoratedError> {
//!     Err(DecoratedError::new(StorageCode::NotFound, md!["key" => key.to_string()]))
//! }
//!
//! let err = load("users/7").unwrap_err();
//! assert_eq!(err.to_string(), "NOT_FOUND: resource missing");
//! assert!(is(&err, &StorageCode::NotFound));
//! assert_eq!(get_code(&err).map(|c| c.name()), Some("NOT_FOUND"));
//!
//! let outer = DecoratedError::wrap(err, StorageCode::Unavailable, md![]);
//! assert_eq!(format!("{outer:#?}").matches("call stack").count(), 1);
//! ```
//!
//! Features
//! - tracing: trace events on construction and [`DecoratedError::emit_tracing`].
//! - serde: `Serialize`/`Deserialize` for [`Verbosity`].

#[macro_use]
mod render;
mod call_stack;
mod code;
mod error;
mod id;
mod macros;
mod metadata;
mod operators;
mod result_ext;

// public exports
pub use call_stack::{CallStack, Frame};
pub use code::{Code, same_code};
pub use error::DecoratedError;
pub use metadata::{Metadata, MetadataEntry};
pub use operators::{get_code, is};
pub use render::{ParseVerbosityError, Verbosity};
pub use result_ext::ResultExt;

/// Convenience Result alias.
pub type Result<T, E = DecoratedError> = std::result::Result<T, E>;
