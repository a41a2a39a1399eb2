//! Wall-clock milliseconds for note ids and RNG seeding.

/// Milliseconds since the Unix epoch.
///
/// Uses `Date.now()` in the browser and the system clock during SSR.
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ms = js_sys::Date::now().max(0.0) as u64;
        ms
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}
