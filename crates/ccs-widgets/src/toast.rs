//! Transient notices. Only one toast is ever on screen.

pub const TOAST_VISIBLE_MS: u32 = 3000;
/// Delay before adding the `show` class, so the enter transition runs.
pub const TOAST_SHOW_DELAY_MS: u32 = 10;
/// Time the exit transition gets before the element is removed.
pub const TOAST_FADE_MS: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Downloaded,
    Shared,
    UrlCopied,
    CopyFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::Downloaded => "Image downloaded successfully!",
            Notice::Shared => "Shared successfully!",
            Notice::UrlCopied => "Image URL copied to clipboard!",
            Notice::CopyFailed => "Failed to copy URL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// Tracks which toast currently owns the screen.
///
/// Timers scheduled for a replaced toast carry its old id and are ignored.
#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<(ToastId, Notice)>,
    next_id: u64,
}

impl ToastSlot {
    /// Show `notice`, returning its id and the id of the toast it replaced.
    pub fn show(&mut self, notice: Notice) -> (ToastId, Option<ToastId>) {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        let replaced = self.current.replace((id, notice)).map(|(old, _)| old);
        (id, replaced)
    }

    /// Clear the slot if `id` still owns it.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        match self.current {
            Some((current, _)) if current == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.current.map(|(_, notice)| notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_toast_replaces_existing_one() {
        let mut slot = ToastSlot::default();
        let (first, replaced) = slot.show(Notice::Downloaded);
        assert_eq!(replaced, None);

        let (second, replaced) = slot.show(Notice::UrlCopied);
        assert_eq!(replaced, Some(first));
        assert_eq!(slot.current(), Some(Notice::UrlCopied));

        // The first toast's timer fires late and must not touch the new one.
        assert!(!slot.dismiss(first));
        assert_eq!(slot.current(), Some(Notice::UrlCopied));
        assert!(slot.dismiss(second));
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn messages_match_user_copy() {
        assert_eq!(Notice::Shared.message(), "Shared successfully!");
        assert_eq!(Notice::CopyFailed.message(), "Failed to copy URL");
    }
}
