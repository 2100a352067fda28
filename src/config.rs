/// How long the intro overlay stays up before the page is revealed.
pub const INTRO_OVERLAY_MS: u32 = 1_000;

/// Scroll offset in pixels past which the top nav switches to its condensed
/// style.
pub const NAV_SCROLL_THRESHOLD_PX: f64 = 50.0;
