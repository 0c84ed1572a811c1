//! Markup helpers shared by the renderers.

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// CSS `animation-delay` for the card at `index`, 50ms apart.
pub fn stagger_delay(index: usize) -> String {
    let seconds = (index * 5) as f64 / 100.0;
    format!("{seconds}s")
}

/// What a lazily loaded image turns into when its source cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFallback {
    /// Hide the image and show the initials avatar that follows it.
    Avatar,
    /// Hide the image's whole container.
    HideContainer,
}

impl ImageFallback {
    pub const ATTRIBUTE: &'static str = "data-fallback";

    pub fn as_attr(&self) -> &'static str {
        match self {
            ImageFallback::Avatar => "avatar",
            ImageFallback::HideContainer => "hide-container",
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "avatar" => Some(ImageFallback::Avatar),
            "hide-container" => Some(ImageFallback::HideContainer),
            _ => None,
        }
    }
}

/// Attributes that make an element open the lightbox when clicked.
pub const LIGHTBOX_SRC_ATTR: &str = "data-lightbox-src";
pub const LIGHTBOX_TITLE_ATTR: &str = "data-lightbox-title";

pub fn lightbox_attrs(src: &str, title: &str) -> String {
    format!(
        r#"{LIGHTBOX_SRC_ATTR}="{}" {LIGHTBOX_TITLE_ATTR}="{}""#,
        escape(src),
        escape(title)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_and_quotes() {
        assert_eq!(
            escape(r#"<b>"Dean's" & co</b>"#),
            "&lt;b&gt;&quot;Dean&#39;s&quot; &amp; co&lt;/b&gt;"
        );
    }

    #[test]
    fn stagger_delay_is_fifty_millis_per_card() {
        assert_eq!(stagger_delay(0), "0s");
        assert_eq!(stagger_delay(1), "0.05s");
        assert_eq!(stagger_delay(3), "0.15s");
        assert_eq!(stagger_delay(20), "1s");
    }

    #[test]
    fn fallback_attr_round_trips() {
        for fallback in [ImageFallback::Avatar, ImageFallback::HideContainer] {
            assert_eq!(ImageFallback::from_attr(fallback.as_attr()), Some(fallback));
        }
        assert_eq!(ImageFallback::from_attr("retry"), None);
    }
}
