// src/utils/app_time.rs
// std::time::Instant panics on wasm32, so the browser build goes through web_time.

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> AppInstant {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
pub fn now() -> AppInstant {
    web_time::Instant::now()
}

/// Seconds elapsed since `since`, as used by the UI animations.
pub fn secs_since(since: AppInstant) -> f32 {
    now().saturating_duration_since(since).as_secs_f32()
}

/// Opacity of a card `delay` seconds into a staggered entrance that lasts
/// `duration` seconds per card. Clamped to `0.0..=1.0`.
pub fn reveal_alpha(elapsed: f32, delay: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    ((elapsed - delay) / duration).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_alpha_ramps_after_delay() {
        assert_eq!(reveal_alpha(0.0, 0.14, 0.6), 0.0);
        assert!((reveal_alpha(0.44, 0.14, 0.6) - 0.5).abs() < 1e-5);
        assert_eq!(reveal_alpha(5.0, 0.14, 0.6), 1.0);
        assert_eq!(reveal_alpha(0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn secs_since_now_is_small() {
        let start = now();
        assert!(secs_since(start) < 1.0);
    }
}
