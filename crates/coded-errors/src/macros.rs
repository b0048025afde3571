/// Build a [`Metadata`](crate::Metadata) collection, preserving order.
///
/// ```
/// use coded_errors::md;
///
/// let md = md!["user" => "ivan", "attempt" => 3];
/// assert_eq!(format!("{md:?}"), r#"[{"user": ivan},{"attempt": 3}]"#);
/// assert!(md![].is_empty());
/// ```
#[macro_export]
macro_rules! md {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::Metadata::from_entries(::std::vec![
            $( $crate::MetadataEntry::new($key, $value) ),*
        ])
    };
}

/// Declare a fieldless enum of error codes and implement [`Code`](crate::Code)
/// for it.
///
/// ```
/// use coded_errors::{Code, define_codes};
///
/// define_codes! {
///     /// Storage layer failures.
///     #[non_exhaustive]
///     pub enum StorageCode {
///         NotFound => ("NOT_FOUND", "resource missing"),
///         /// The volume is out of space.
///         DiskFull => ("DISK_FULL", "no space left on device"),
///     }
/// }
///
/// assert_eq!(StorageCode::DiskFull.name(), "DISK_FULL");
/// assert_eq!(StorageCode::NotFound.message(), "resource missing");
/// ```
#[macro_export]
macro_rules! define_codes {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => ($code_name:literal, $message:literal)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::Code for $name {
            fn name(&self) -> &str {
                match self {
                    $( $name::$variant => $code_name, )+
                }
            }

            fn message(&self) -> &str {
                match self {
                    $( $name::$variant => $message, )+
                }
            }
        }
    };
}
