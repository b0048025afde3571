//! Verbosity levels for presenting a [`crate::DecoratedError`].
//!
//! The same error is shown to different audiences:
//! - Short: code and message, safe for end users
//! - Verbose: adds the instance id and metadata, for support correspondence
//! - Detailed: adds the wrapped cause and the full call stack, for operators
//! - Compact: like Detailed, with function names only in the call stack
//!
//! Each level maps onto a `format!` spec, see [`Verbosity::level`].
use std::fmt;
use std::str::FromStr;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Verbosity {
    /// `{}`
    #[default]
    Short,
    /// `{:?}`
    Verbose,
    /// `{:#?}`
    Detailed,
    /// `{:-#?}`
    Compact,
}

impl Verbosity {
    pub const ALL: [Verbosity; 4] = [
        Verbosity::Short,
        Verbosity::Verbose,
        Verbosity::Detailed,
        Verbosity::Compact,
    ];

    /// Numeric level, 1 (least information) to 4.
    pub fn level(self) -> u8 {
        match self {
            Verbosity::Short => 1,
            Verbosity::Verbose => 2,
            Verbosity::Detailed => 3,
            Verbosity::Compact => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verbosity::Short => "short",
            Verbosity::Verbose => "verbose",
            Verbosity::Detailed => "detailed",
            Verbosity::Compact => "compact",
        }
    }

    /// Whether the wrapped cause and call stack are part of the output.
    pub fn includes_call_stack(self) -> bool {
        matches!(self, Verbosity::Detailed | Verbosity::Compact)
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseVerbosityError {
    #[error("unknown verbosity `{0}`, expected one of: short, verbose, detailed, compact")]
    Unknown(String),
}

impl FromStr for Verbosity {
    type Err = ParseVerbosityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Verbosity::Short),
            "verbose" => Ok(Verbosity::Verbose),
            "detailed" | "detail" => Ok(Verbosity::Detailed),
            "compact" => Ok(Verbosity::Compact),
            _ => Err(ParseVerbosityError::Unknown(s.to_string())),
        }
    }
}

/// Implements the listed `std::fmt` traits as writing nothing.
///
/// Formatting one of this crate's values with a spec it does not support
/// yields an empty string instead of a partial dump.
macro_rules! silent_fmt {
    ($ty:ty: $($fmt_trait:ident),+ $(,)?) => {
        $(
            impl ::std::fmt::$fmt_trait for $ty {
                fn fmt(&self, _f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    Ok(())
                }
            }
        )+
    };
}
