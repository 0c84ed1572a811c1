//! Lightbox viewer state: current image, zoom, and the download/share helpers.

use crate::toast::Notice;
use serde::Serialize;

const MIN_ZOOM_TENTHS: u8 = 10;
const MAX_ZOOM_TENTHS: u8 = 30;
const CLICK_ZOOM_TENTHS: u8 = 20;

/// Zoom factor kept in tenths so repeated wheel steps never drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomState {
    tenths: u8,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            tenths: MIN_ZOOM_TENTHS,
        }
    }
}

impl ZoomState {
    pub fn scale(&self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    /// Wheel up (negative delta) zooms in, anything else zooms out.
    pub fn wheel(&mut self, delta_y: f64) {
        self.tenths = if delta_y < 0.0 {
            (self.tenths + 1).min(MAX_ZOOM_TENTHS)
        } else {
            self.tenths.saturating_sub(1).max(MIN_ZOOM_TENTHS)
        };
    }

    /// Any zoom resets to 1x; 1x jumps to 2x.
    pub fn click(&mut self) {
        self.tenths = if self.tenths > MIN_ZOOM_TENTHS {
            MIN_ZOOM_TENTHS
        } else {
            CLICK_ZOOM_TENTHS
        };
    }

    pub fn reset(&mut self) {
        self.tenths = MIN_ZOOM_TENTHS;
    }

    pub fn transform(&self) -> String {
        format!("scale({})", self.scale())
    }

    pub fn cursor(&self) -> &'static str {
        if self.tenths > MIN_ZOOM_TENTHS {
            "zoom-out"
        } else {
            "zoom-in"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxItem {
    pub src: String,
    pub title: String,
}

#[derive(Debug, Default)]
pub struct Lightbox {
    item: Option<LightboxItem>,
    open: bool,
    zoom: ZoomState,
}

impl Lightbox {
    pub fn open(&mut self, src: &str, title: &str) {
        self.item = Some(LightboxItem {
            src: src.to_owned(),
            title: title.to_owned(),
        });
        self.open = true;
    }

    /// Close and reset zoom. The last item stays available to download/share.
    pub fn close(&mut self) {
        self.open = false;
        self.zoom.reset();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn item(&self) -> Option<&LightboxItem> {
        self.item.as_ref()
    }

    pub fn zoom(&self) -> ZoomState {
        self.zoom
    }

    pub fn wheel(&mut self, delta_y: f64) -> ZoomState {
        self.zoom.wheel(delta_y);
        self.zoom
    }

    pub fn click(&mut self) -> ZoomState {
        self.zoom.click();
        self.zoom
    }
}

/// File name offered when saving `title`: non-alphanumerics become `_`, lower case, `.jpg`.
pub fn download_filename(title: &str) -> String {
    let stem: String = title
        .encode_utf16()
        .map(|unit| match u8::try_from(unit) {
            Ok(byte) if byte.is_ascii_alphanumeric() => char::from(byte.to_ascii_lowercase()),
            _ => '_',
        })
        .collect();
    format!("{stem}.jpg")
}

/// Absolute URL for an asset path relative to the site origin.
pub fn absolute_url(origin: &str, src: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        return src.to_owned();
    }
    format!("{}/{}", origin.trim_end_matches('/'), src.trim_start_matches('/'))
}

/// Payload handed to the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn for_item(item: &LightboxItem, origin: &str) -> Self {
        Self {
            title: item.title.clone(),
            text: format!("Check out this image: {}", item.title),
            url: absolute_url(origin, &item.src),
        }
    }
}

/// How a share attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    CopyFailed,
}

impl ShareOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            ShareOutcome::Shared => Notice::Shared,
            ShareOutcome::Copied => Notice::UrlCopied,
            ShareOutcome::CopyFailed => Notice::CopyFailed,
        }
    }
}
