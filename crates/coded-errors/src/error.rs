use std::error::Error;
use std::fmt;

use uuid::Uuid;

use crate::call_stack::CallStack;
use crate::code::Code;
use crate::metadata::{Metadata, MetadataEntry};
use crate::render::Verbosity;

/// An error identified by a [`Code`], decorated with a unique id, metadata,
/// an optional wrapped cause and the call stack of its construction.
///
/// Values are immutable once built. Wrapping creates a new value.
///
/// # Rendering
///
/// | Spec      | Output                                                    |
/// |-----------|-----------------------------------------------------------|
/// | `{}`      | `CODE: message`                                           |
/// | `{:?}`    | the above, plus id and metadata                           |
/// | `{:#?}`   | the above, plus wrapped error and call stack              |
/// | `{:-#?}`  | the above, with the call stack reduced to function names  |
///
/// Any other spec (`{:x}`, `{:e}`, ...) renders nothing.
pub struct DecoratedError {
    code: Box<dyn Code>,
    id: Uuid,
    metadata: Metadata,
    wrapped: Option<Wrapped>,
    call_stack: CallStack,
}

/// The cause stored by [`DecoratedError::wrap`].
pub(crate) enum Wrapped {
    /// Another decorated error; its call stack is always empty.
    Decorated(Box<DecoratedError>),
    External(Box<dyn Error + Send + Sync>),
}

impl Wrapped {
    pub(crate) fn from_boxed(inner: Box<dyn Error + Send + Sync>) -> Self {
        match inner.downcast::<DecoratedError>() {
            Ok(decorated) => Wrapped::Decorated(Box::new(decorated.without_call_stack())),
            Err(external) => Wrapped::External(external),
        }
    }

    fn as_error(&self) -> &(dyn Error + 'static) {
        match self {
            Wrapped::Decorated(decorated) => &**decorated,
            Wrapped::External(external) => &**external,
        }
    }
}

// ── Constructors ──────────────────────────────────────────────────

impl DecoratedError {
    /// Create an error with `code` and `metadata`, capturing the call stack
    /// of the caller.
    ///
    /// ```
    /// use coded_errors::{DecoratedError, define_codes, md};
    ///
    /// define_codes! {
    ///     pub enum StoreCode {
    ///         NotFound => ("NOT_FOUND", "resource missing"),
    ///     }
    /// }
    ///
    /// let err = DecoratedError::new(StoreCode::NotFound, md!["key" => "users/7"]);
    /// assert_eq!(err.to_string(), "NOT_FOUND: resource missing");
    /// ```
    #[inline(never)]
    pub fn new<C>(code: C, metadata: impl IntoIterator<Item = MetadataEntry>) -> Self
    where
        C: Code + 'static,
    {
        Self::assemble(
            Box::new(code),
            metadata.into_iter().collect(),
            None,
            CallStack::capture(1),
        )
    }

    /// Like [`DecoratedError::new`], additionally keeping `inner` as the
    /// wrapped cause.
    ///
    /// When `inner` is itself a `DecoratedError` it is stored without its
    /// call stack, so a chain prints a single stack. Any other error is
    /// stored unchanged.
    #[inline(never)]
    pub fn wrap<C>(
        inner: impl Into<Box<dyn Error + Send + Sync>>,
        code: C,
        metadata: impl IntoIterator<Item = MetadataEntry>,
    ) -> Self
    where
        C: Code + 'static,
    {
        Self::assemble(
            Box::new(code),
            metadata.into_iter().collect(),
            Some(Wrapped::from_boxed(inner.into())),
            CallStack::capture(1),
        )
    }

    pub(crate) fn assemble(
        code: Box<dyn Code>,
        metadata: Metadata,
        wrapped: Option<Wrapped>,
        call_stack: CallStack,
    ) -> Self {
        let id = crate::id::generate();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            code = code.name(),
            %id,
            wrapped = wrapped.is_some(),
            frames = call_stack.len(),
            "decorated error constructed"
        );

        Self {
            code,
            id,
            metadata,
            wrapped,
            call_stack,
        }
    }

    fn without_call_stack(self) -> Self {
        Self {
            call_stack: CallStack::default(),
            ..self
        }
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl DecoratedError {
    pub fn code(&self) -> &dyn Code {
        self.code.as_ref()
    }

    /// Unique id of this error instance, nil if no random source was
    /// available when it was built.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Empty for an error that was wrapped by another decorated error.
    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    pub fn wrapped(&self) -> Option<&(dyn Error + 'static)> {
        self.wrapped.as_ref().map(Wrapped::as_error)
    }

    /// Render at the given verbosity, see the type level docs.
    pub fn render(&self, verbosity: Verbosity) -> String {
        match verbosity {
            Verbosity::Short => format!("{self}"),
            Verbosity::Verbose => format!("{self:?}"),
            Verbosity::Detailed => format!("{self:#?}"),
            Verbosity::Compact => format!("{self:-#?}"),
        }
    }

    /// Emit one tracing event at `level` carrying the code and id as fields
    /// and the rendering at `verbosity` as the message.
    #[cfg(feature = "tracing")]
    pub fn emit_tracing(&self, level: tracing::Level, verbosity: Verbosity) {
        use tracing::{Level, event};

        let code = self.code.name();
        let id = self.id;
        let rendered = self.render(verbosity);
        match level {
            Level::ERROR => event!(Level::ERROR, code, %id, "{rendered}"),
            Level::WARN => event!(Level::WARN, code, %id, "{rendered}"),
            Level::INFO => event!(Level::INFO, code, %id, "{rendered}"),
            Level::DEBUG => event!(Level::DEBUG, code, %id, "{rendered}"),
            Level::TRACE => event!(Level::TRACE, code, %id, "{rendered}"),
        }
    }
}

// ── Formatting ────────────────────────────────────────────────────

impl fmt::Display for DecoratedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.name(), self.code.message())
    }
}

impl fmt::Debug for DecoratedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}\n\tid: {}\n\tmetadata: {:?}",
            self.code.name(),
            self.code.message(),
            self.id,
            self.metadata
        )?;
        if !f.alternate() {
            return Ok(());
        }

        if let Some(wrapped) = &self.wrapped {
            f.write_str("\n\twrapped error: ")?;
            // Same formatter, so nested decorated errors keep the level.
            match wrapped {
                Wrapped::Decorated(decorated) => fmt::Debug::fmt(decorated, f)?,
                Wrapped::External(external) => fmt::Display::fmt(external, f)?,
            }
        }

        if self.call_stack.is_empty() {
            return Ok(());
        }

        if f.sign_minus() {
            write!(f, "\n\tcall stack (compacted):\n{:-?}", self.call_stack)
        } else {
            write!(f, "\n\tcall stack:\n{:?}", self.call_stack)
        }
    }
}

silent_fmt!(DecoratedError: LowerHex, UpperHex, Octal, Binary, LowerExp, UpperExp);

impl Error for DecoratedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.wrapped()
    }
}

impl From<DecoratedError> for std::io::Error {
    fn from(err: DecoratedError) -> Self {
        std::io::Error::other(err)
    }
}
