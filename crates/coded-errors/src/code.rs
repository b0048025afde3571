/// The contract every error code satisfies.
///
/// A code is a short symbolic `name` (e.g. `NOT_FOUND`) plus a static,
/// human readable `message`. Any domain can implement it for its own enum
/// or newtype; see [`crate::define_codes!`] for the common case.
///
/// Two codes are the same code when both strings match, see [`same_code`].
pub trait Code: Send + Sync {
    fn name(&self) -> &str;
    fn message(&self) -> &str;
}

/// Structural code equality: equal `name` and equal `message`.
///
/// The concrete types are never compared, so independently defined code
/// sets that agree on both strings are treated as the same code. This also
/// means two unrelated codes that happen to share name and message collide.
pub fn same_code(a: &dyn Code, b: &dyn Code) -> bool {
    a.name() == b.name() && a.message() == b.message()
}

impl<C: Code + ?Sized> Code for &C {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn message(&self) -> &str {
        (**self).message()
    }
}

impl<C: Code + ?Sized> Code for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn message(&self) -> &str {
        (**self).message()
    }
}
