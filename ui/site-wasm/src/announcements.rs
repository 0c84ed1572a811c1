//! Announcements feed with remembered category filter.

use crate::dom;
use crate::lazy_load;
use crate::lightbox;
use crate::state;
use ccs_content::announcements::{load_filter, parse_filter, render_feed, save_filter};
use ccs_content::datasets::announcements;
use ccs_types::CategoryFilter;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

fn render(container: &Element, filter: CategoryFilter) {
    container.set_inner_html(&render_feed(announcements(), filter));
    lazy_load::arm();
}

fn mark_active(tabs: &[Element], filter: CategoryFilter) {
    for tab in tabs {
        let category = tab.get_attribute("data-category").unwrap_or_default();
        dom::toggle_class(tab, "active", category == filter.as_str());
    }
}

pub fn init() -> Result<(), JsValue> {
    let Some(container) = dom::by_id("announcementsContainer") else {
        return Ok(());
    };
    let store = state::store();

    let filter = load_filter(&*store);
    render(&container, filter);

    let tabs = Rc::new(dom::query_all(".filter-tab[data-category]"));
    mark_active(&tabs, filter);

    for tab in tabs.iter() {
        let raw = tab.get_attribute("data-category").unwrap_or_default();
        let all = tabs.clone();
        let container = container.clone();
        let store = store.clone();
        dom::listen(tab, "click", move |_: MouseEvent| {
            let filter = match parse_filter(&raw) {
                Ok(filter) => filter,
                Err(err) => {
                    gloo_console::warn!(err.to_string());
                    return;
                }
            };
            mark_active(&all, filter);
            render(&container, filter);
            if let Err(err) = save_filter(&*store, filter) {
                gloo_console::warn!(format!("{err:#}"));
            }
        })?;
    }

    dom::listen(&container, "click", |e: MouseEvent| lightbox::open_from_event(&e))?;
    Ok(())
}
