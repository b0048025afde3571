use rand::RngCore;
use rand::rngs::OsRng;
use uuid::Uuid;

/// A random (v4) id for a new error instance.
pub(crate) fn generate() -> Uuid {
    from_rng(&mut OsRng)
}

/// Building an error must not fail because the random source did, so a
/// failure yields the nil id instead.
pub(crate) fn from_rng(rng: &mut impl RngCore) -> Uuid {
    let mut bytes = [0u8; 16];
    match rng.try_fill_bytes(&mut bytes) {
        Ok(()) => uuid::Builder::from_random_bytes(bytes).into_uuid(),
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, "random source unavailable, using nil error id");
            Uuid::nil()
        }
    }
}
