//! Scroll-reveal styling for cards entering the viewport.

pub const REVEAL_SELECTOR: &str = ".link-card, .value-card, .program-card";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Inline style applied before the element is first seen.
pub const HIDDEN_STYLE: [(&str, &str); 3] = [
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];

/// Inline style the element animates to once seen.
pub const RESTING_STYLE: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];
