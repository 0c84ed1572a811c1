//! Program tabs and accordions.

use crate::dom;
use crate::state;
use ccs_widgets::tabs::{AccordionGroup, TabSet};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

pub fn init() -> Result<(), JsValue> {
    let buttons = dom::query_all(".tab-btn[data-tab]");
    if buttons.is_empty() {
        return Ok(());
    }

    let ids = buttons
        .iter()
        .map(|b| b.get_attribute("data-tab").unwrap_or_default())
        .collect();
    let default_active = buttons.iter().position(|b| dom::has_class(b, "active"));
    let mut tabs = TabSet::new(ids, default_active);

    let store = state::store();
    if tabs.restore(&*store) {
        show_active(&buttons, &tabs);
    }

    let tabs = Rc::new(RefCell::new(tabs));
    let buttons = Rc::new(buttons);
    for button in buttons.iter() {
        let id = button.get_attribute("data-tab").unwrap_or_default();
        let tabs = tabs.clone();
        let all = buttons.clone();
        let store = store.clone();
        dom::listen(button, "click", move |_: MouseEvent| {
            let mut tabs = tabs.borrow_mut();
            match tabs.select(&*store, &id) {
                Ok(true) => show_active(&all, &tabs),
                Ok(false) => {}
                Err(err) => {
                    show_active(&all, &tabs);
                    gloo_console::warn!(format!("{err:#}"));
                }
            }
        })?;
    }
    Ok(())
}

fn show_active(buttons: &[Element], tabs: &TabSet) {
    for button in buttons {
        let id = button.get_attribute("data-tab").unwrap_or_default();
        dom::toggle_class(button, "active", tabs.is_active(&id));
    }
    for pane in dom::query_all(".tab-pane") {
        dom::toggle_class(&pane, "active", tabs.is_active(&pane.id()));
    }
}

/// Open the accordion item headed by `button`, closing its siblings in the
/// same `.programs-grid`. Clicking the open item closes it.
pub fn toggle_accordion(button: &Element) {
    let group_buttons = match button.closest(".programs-grid").ok().flatten() {
        Some(grid) => dom::query_all_within(&grid, ".accordion-toggle"),
        None => vec![button.clone()],
    };
    let Some(index) = group_buttons.iter().position(|b| b == button) else {
        return;
    };

    let contents: Vec<Option<Element>> = group_buttons
        .iter()
        .map(|b| b.next_element_sibling())
        .collect();
    let mut group = AccordionGroup::from_states(
        contents
            .iter()
            .map(|c| c.as_ref().is_some_and(|c| dom::has_class(c, "active")))
            .collect(),
    );
    group.toggle(index);

    for (i, (toggle, content)) in group_buttons.iter().zip(&contents).enumerate() {
        let open = group.is_open(i);
        dom::toggle_class(toggle, "active", open);
        if let Some(content) = content {
            dom::toggle_class(content, "active", open);
        }
    }
}
