//! Faculty directory page.

use crate::dom;
use crate::lazy_load;
use crate::lightbox;
use crate::state;
use ccs_content::datasets::faculty_roster;
use ccs_content::faculty::{FacultyQuery, filter_faculty, render_faculty};
use ccs_widgets::debounce::Debouncer;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, MouseEvent};

#[derive(Clone)]
struct Directory {
    grid: Element,
    count: Option<Element>,
    placeholder: Option<Element>,
    search: Option<HtmlInputElement>,
    department: Option<HtmlSelectElement>,
    rank: Option<HtmlSelectElement>,
}

impl Directory {
    fn bind() -> Option<Self> {
        Some(Self {
            grid: dom::by_id("facultyGrid")?,
            count: dom::by_id("facultyCount"),
            placeholder: dom::by_id("noResults"),
            search: dom::by_id_typed("facultySearch"),
            department: dom::by_id_typed("departmentFilter"),
            rank: dom::by_id_typed("rankFilter"),
        })
    }

    fn query(&self) -> FacultyQuery {
        FacultyQuery {
            search: self.search.as_ref().map(|s| s.value()).unwrap_or_default(),
            department: self.department.as_ref().map(|s| s.value()).unwrap_or_default(),
            rank: self.rank.as_ref().map(|s| s.value()).unwrap_or_default(),
        }
    }

    fn render(&self) {
        let visible = filter_faculty(faculty_roster(), &self.query());
        let view = render_faculty(&visible);

        self.grid.set_inner_html(&view.grid_html);
        if let Some(count) = &self.count {
            dom::set_text(count, &view.count_label);
        }
        if let Some(placeholder) = &self.placeholder {
            let display = if view.show_placeholder { "block" } else { "none" };
            dom::set_style(placeholder, "display", display);
        }
        lazy_load::arm();
    }
}

pub fn init() -> Result<(), JsValue> {
    let Some(dir) = Directory::bind() else {
        return Ok(());
    };
    dir.render();

    if let Some(search) = &dir.search {
        let debouncer = Rc::new(RefCell::new(Debouncer::default()));
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
        let delay = state::config().search_debounce_ms;
        let dir = dir.clone();
        dom::listen(search, "input", move |_: web_sys::Event| {
            let ticket = debouncer.borrow_mut().schedule();
            let debouncer = debouncer.clone();
            let dir = dir.clone();
            // Replacing the handle cancels the previous timer.
            *pending.borrow_mut() = Some(Timeout::new(delay, move || {
                if debouncer.borrow_mut().fire(ticket) {
                    dir.render();
                }
            }));
        })?;
    }

    for select in [&dir.department, &dir.rank].into_iter().flatten() {
        let dir = dir.clone();
        dom::listen(select, "change", move |_: web_sys::Event| dir.render())?;
    }

    dom::listen(&dir.grid, "click", |e: MouseEvent| lightbox::open_from_event(&e))?;
    Ok(())
}
