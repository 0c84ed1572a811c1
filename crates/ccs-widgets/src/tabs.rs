//! Program tabs with a remembered selection, and grouped accordions.

use anyhow::Result;
use ccs_storage::{KeyValueStore, load_preference, save_preference};
use ccs_types::SELECTED_TAB_KEY;
use tracing::debug;

/// A row of tabs where exactly one is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    ids: Vec<String>,
    active: Option<usize>,
}

impl TabSet {
    /// `default_active` is the tab the markup marks active, if any.
    pub fn new(ids: Vec<String>, default_active: Option<usize>) -> Self {
        let active = default_active.filter(|i| *i < ids.len());
        Self { ids, active }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active.map(|i| self.ids[i].as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    /// Apply the remembered tab. Unknown or missing ids leave the default in place.
    pub fn restore<S: KeyValueStore + ?Sized>(&mut self, store: &S) -> bool {
        let Some(saved) = load_preference(store, SELECTED_TAB_KEY) else {
            return false;
        };
        match self.position(&saved) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => {
                debug!(saved, "remembered tab no longer exists");
                false
            }
        }
    }

    /// Activate `id` and remember it. Returns `Ok(false)` for an unknown id.
    ///
    /// The tab switches even when persisting fails; the error is returned for logging.
    pub fn select<S: KeyValueStore + ?Sized>(&mut self, store: &S, id: &str) -> Result<bool> {
        let Some(index) = self.position(id) else {
            return Ok(false);
        };
        self.active = Some(index);
        save_preference(store, SELECTED_TAB_KEY, id)?;
        Ok(true)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|t| t == id)
    }
}

/// Accordion items sharing one container. At most one stays open after a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionGroup {
    open: Vec<bool>,
}

impl AccordionGroup {
    /// Build from the current open flags of each item, in document order.
    pub fn from_states(open: Vec<bool>) -> Self {
        Self { open }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open.iter().position(|o| *o)
    }

    /// Open `index` and close the rest, or close everything if it was already open.
    pub fn toggle(&mut self, index: usize) {
        let was_open = self.is_open(index);
        self.open.iter_mut().for_each(|o| *o = false);
        if !was_open
            && let Some(slot) = self.open.get_mut(index)
        {
            *slot = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccs_storage::MemoryStore;

    fn tabs() -> TabSet {
        TabSet::new(vec!["T1".into(), "T2".into(), "T3".into()], Some(0))
    }

    #[test]
    fn selected_tab_survives_reload() -> Result<()> {
        let store = MemoryStore::new();
        let mut first_visit = tabs();
        assert!(first_visit.select(&store, "T2")?);

        let mut reloaded = tabs();
        assert_eq!(reloaded.active_id(), Some("T1"));
        assert!(reloaded.restore(&store));
        assert_eq!(reloaded.active_id(), Some("T2"));
        Ok(())
    }

    #[test]
    fn stale_saved_tab_keeps_markup_default() -> Result<()> {
        let store = MemoryStore::new();
        store.set(SELECTED_TAB_KEY, "retired-program")?;
        let mut set = tabs();
        assert!(!set.restore(&store));
        assert_eq!(set.active_id(), Some("T1"));
        Ok(())
    }

    #[test]
    fn exactly_one_tab_is_active() -> Result<()> {
        let store = MemoryStore::new();
        let mut set = tabs();
        set.select(&store, "T3")?;
        let active: Vec<&String> = set.ids().iter().filter(|id| set.is_active(id)).collect();
        assert_eq!(active, vec!["T3"]);
        Ok(())
    }

    #[test]
    fn unknown_tab_is_not_selected_or_saved() -> Result<()> {
        let store = MemoryStore::new();
        let mut set = tabs();
        assert!(!set.select(&store, "T9")?);
        assert_eq!(set.active_id(), Some("T1"));
        assert_eq!(store.get(SELECTED_TAB_KEY)?, None);
        Ok(())
    }

    #[test]
    fn out_of_range_default_means_no_active_tab() {
        let set = TabSet::new(vec!["T1".into()], Some(4));
        assert_eq!(set.active_id(), None);
    }

    #[test]
    fn accordion_opens_one_and_closes_siblings() {
        let mut group = AccordionGroup::from_states(vec![true, false, false]);
        group.toggle(2);
        assert_eq!(group.open_index(), Some(2));
        assert!(!group.is_open(0));
    }

    #[test]
    fn accordion_click_on_open_item_closes_everything() {
        let mut group = AccordionGroup::from_states(vec![false, true, false]);
        group.toggle(1);
        assert_eq!(group.open_index(), None);
    }

    #[test]
    fn accordion_normalises_multiple_open_items() {
        let mut group = AccordionGroup::from_states(vec![true, true, false]);
        group.toggle(0);
        assert_eq!(group.open_index(), None);
        assert_eq!(group.len(), 3);
    }
}
