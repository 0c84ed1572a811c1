//! Announcement feed: category filter, date ordering, card rendering, and the
//! remembered filter choice.

use crate::ContentError;
use crate::html::{ImageFallback, escape, lightbox_attrs, stagger_delay};
use ccs_storage::{KeyValueStore, load_preference, save_preference};
use ccs_types::{ANNOUNCEMENT_FILTER_KEY, Announcement, CategoryFilter};
use chrono::NaiveDate;
use std::fmt::Write;
use tracing::debug;

/// Announcements passing `filter`, newest first. Same-day items keep feed order.
pub fn filter_announcements(feed: &[Announcement], filter: CategoryFilter) -> Vec<&Announcement> {
    let mut visible: Vec<&Announcement> = feed.iter().filter(|a| filter.matches(a.category)).collect();
    // `sort_by` is stable, which keeps ties in feed order.
    visible.sort_by(|a, b| b.date.cmp(&a.date));
    visible
}

/// Long-form US date, e.g. "February 15, 2024".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn render_announcements(items: &[&Announcement]) -> String {
    let mut out = String::new();
    for (index, item) in items.iter().enumerate() {
        render_card(&mut out, index, item);
    }
    out
}

/// Filter, sort and render the feed in one step.
pub fn render_feed(feed: &[Announcement], filter: CategoryFilter) -> String {
    let visible = filter_announcements(feed, filter);
    debug!(filter = filter.as_str(), visible = visible.len(), "announcements rendered");
    render_announcements(&visible)
}

fn render_card(out: &mut String, index: usize, item: &Announcement) {
    let title = escape(&item.title);
    let category = item.category.as_str();
    let image_block = match item.image.as_deref() {
        Some(src) if !src.is_empty() => format!(
            r#"
  <div class="announcement-image-container" {lightbox}>
    <img data-src="{src}" alt="{title}" class="announcement-image lazy-load" {fallback_attr}="{fallback}">
    <div class="image-badge">{category}</div>
  </div>"#,
            lightbox = lightbox_attrs(src, &item.title),
            src = escape(src),
            fallback_attr = ImageFallback::ATTRIBUTE,
            fallback = ImageFallback::HideContainer.as_attr(),
        ),
        _ => String::new(),
    };

    let _ = write!(
        out,
        r#"
<div class="announcement-card" style="animation-delay: {delay}">{image_block}
  <div class="announcement-header">
    <div>
      <h3 class="announcement-title">{title}</h3>
      <div class="announcement-meta">
        <span class="announcement-date">📅 {date}</span>
        <span class="announcement-location">📍 {location}</span>
      </div>
    </div>
    <span class="announcement-category category-{category}">{category}</span>
  </div>
  <p class="announcement-content">{content}</p>
</div>"#,
        delay = stagger_delay(index),
        date = format_long_date(item.date),
        location = escape(&item.location),
        content = escape(&item.content),
    );
}

/// Parse a `data-category` value from a filter tab.
pub fn parse_filter(raw: &str) -> Result<CategoryFilter, ContentError> {
    Ok(raw.parse::<CategoryFilter>()?)
}

/// The remembered filter, or `All` when nothing usable is saved.
pub fn load_filter<S: KeyValueStore + ?Sized>(store: &S) -> CategoryFilter {
    let Some(saved) = load_preference(store, ANNOUNCEMENT_FILTER_KEY) else {
        return CategoryFilter::All;
    };
    parse_filter(&saved).unwrap_or_else(|err| {
        debug!(error = %err, "ignoring saved announcement filter");
        CategoryFilter::All
    })
}

pub fn save_filter<S: KeyValueStore + ?Sized>(store: &S, filter: CategoryFilter) -> anyhow::Result<()> {
    save_preference(store, ANNOUNCEMENT_FILTER_KEY, filter.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::announcements;
    use ccs_storage::MemoryStore;
    use ccs_types::Category;

    fn ids(items: &[&Announcement]) -> Vec<u32> {
        items.iter().map(|a| a.id).collect()
    }

    fn item(id: u32, date: &str, category: Category, image: Option<&str>) -> Announcement {
        Announcement {
            id,
            title: format!("Item {id}"),
            date: date.parse().unwrap(),
            category,
            location: "Room 101".to_owned(),
            content: "Details.".to_owned(),
            image: image.map(str::to_owned),
        }
    }

    #[test]
    fn all_filter_is_whole_feed_newest_first() {
        let visible = filter_announcements(announcements(), CategoryFilter::All);
        assert_eq!(ids(&visible), vec![6, 2, 8, 5, 3, 7, 4, 1]);
        assert!(visible.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn category_filter_keeps_only_that_category() {
        for category in Category::ALL {
            let visible = filter_announcements(announcements(), CategoryFilter::Only(category));
            let expected: Vec<&Announcement> = {
                let mut subset: Vec<&Announcement> = announcements()
                    .iter()
                    .filter(|a| a.category == category)
                    .collect();
                subset.sort_by(|a, b| b.date.cmp(&a.date));
                subset
            };
            assert_eq!(visible, expected);
        }
        let events = filter_announcements(announcements(), CategoryFilter::Only(Category::Event));
        assert_eq!(ids(&events), vec![6, 2, 5]);
    }

    #[test]
    fn same_day_items_keep_feed_order() {
        let feed = vec![
            item(1, "2024-05-01", Category::Event, None),
            item(2, "2024-06-01", Category::Event, None),
            item(3, "2024-05-01", Category::Event, None),
            item(4, "2024-05-01", Category::Event, None),
        ];
        let visible = filter_announcements(&feed, CategoryFilter::All);
        assert_eq!(ids(&visible), vec![2, 1, 3, 4]);
    }

    #[test]
    fn long_date_has_no_zero_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_long_date(date), "March 5, 2024");
    }

    #[test]
    fn card_without_image_omits_image_block() {
        let feed = vec![item(1, "2024-05-01", Category::Deadline, None)];
        let html = render_feed(&feed, CategoryFilter::All);
        assert!(!html.contains("announcement-image-container"));
        assert!(!html.contains("lazy-load"));
        assert!(html.contains(r#"<span class="announcement-category category-deadline">deadline</span>"#));
        assert!(html.contains("📅 May 1, 2024"));
    }

    #[test]
    fn card_with_image_is_lazy_and_opens_lightbox() {
        let html = render_feed(announcements(), CategoryFilter::Only(Category::Academic));
        assert!(html.contains(r#"data-src="images/events/enrollment.png""#));
        assert!(html.contains(r#"data-fallback="hide-container""#));
        assert!(html.contains(r#"data-lightbox-title="Enrollment for Second Semester Now Open""#));
        assert!(html.contains(r#"<div class="image-badge">academic</div>"#));
        assert!(html.contains("registrar&#39;s office"));
        assert!(html.contains("📅 February 15, 2024"));
    }

    #[test]
    fn empty_filter_result_renders_nothing() {
        let feed = vec![item(1, "2024-05-01", Category::Event, None)];
        assert_eq!(render_feed(&feed, CategoryFilter::Only(Category::Seminar)), "");
    }

    #[test]
    fn saved_filter_survives_reload() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        assert_eq!(load_filter(&store), CategoryFilter::All);
        save_filter(&store, CategoryFilter::Only(Category::Seminar))?;
        assert_eq!(load_filter(&store), CategoryFilter::Only(Category::Seminar));
        Ok(())
    }

    #[test]
    fn unknown_saved_filter_falls_back_to_all() -> anyhow::Result<()> {
        let store = MemoryStore::new();
        store.set(ANNOUNCEMENT_FILTER_KEY, "workshop")?;
        assert_eq!(load_filter(&store), CategoryFilter::All);
        Ok(())
    }

    #[test]
    fn parse_filter_reports_unknown_category() {
        let err = parse_filter("news").unwrap_err();
        assert_eq!(err.to_string(), "unknown announcement category: news");
    }
}
