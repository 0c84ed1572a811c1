//! Faculty directory: search/filter and card rendering.

use crate::html::{ImageFallback, escape, lightbox_attrs, stagger_delay};
use ccs_types::FacultyMember;
use std::fmt::Write;
use tracing::debug;

/// Current state of the directory controls. Empty fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacultyQuery {
    pub search: String,
    pub department: String,
    pub rank: String,
}

impl FacultyQuery {
    pub fn matches(&self, member: &FacultyMember) -> bool {
        self.matches_search(member)
            && (self.department.is_empty() || member.department == self.department)
            && (self.rank.is_empty() || member.rank == self.rank)
    }

    fn matches_search(&self, member: &FacultyMember) -> bool {
        let term = self.search.to_lowercase();
        member.name.to_lowercase().contains(&term)
            || member.department.to_lowercase().contains(&term)
            || member
                .expertise
                .iter()
                .any(|tag| tag.to_lowercase().contains(&term))
    }
}

/// Members of `roster` matching `query`, in roster order.
pub fn filter_faculty<'a>(roster: &'a [FacultyMember], query: &FacultyQuery) -> Vec<&'a FacultyMember> {
    let visible: Vec<&FacultyMember> = roster.iter().filter(|m| query.matches(m)).collect();
    debug!(
        search = %query.search,
        department = %query.department,
        rank = %query.rank,
        visible = visible.len(),
        "faculty filtered"
    );
    visible
}

/// First character of every space-separated part of `name`.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|part| part.chars().next())
        .collect()
}

pub fn count_label(count: usize) -> String {
    match count {
        0 => "No faculty members found".to_owned(),
        1 => "Showing 1 faculty member".to_owned(),
        n => format!("Showing {n} faculty members"),
    }
}

/// Everything the directory shows for one filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacultyView {
    pub grid_html: String,
    pub count_label: String,
    pub show_placeholder: bool,
}

pub fn render_faculty(members: &[&FacultyMember]) -> FacultyView {
    let mut grid_html = String::new();
    for (index, member) in members.iter().enumerate() {
        render_card(&mut grid_html, index, member);
    }
    FacultyView {
        grid_html,
        count_label: count_label(members.len()),
        show_placeholder: members.is_empty(),
    }
}

fn render_card(out: &mut String, index: usize, member: &FacultyMember) {
    let name = escape(&member.name);
    let expertise: String = member
        .expertise
        .iter()
        .map(|tag| format!(r#"<span class="expertise-tag">{}</span>"#, escape(tag)))
        .collect();

    let _ = write!(
        out,
        r#"
<div class="faculty-card" style="animation-delay: {delay}">
  <div class="faculty-image-container">
    <img data-src="{image}" alt="{name}" class="faculty-image lazy-load" {fallback_attr}="{fallback}">
    <div class="faculty-avatar" style="display: none;">{initials}</div>
    <div class="image-overlay" {lightbox}>
      <span class="zoom-icon">🔍</span>
    </div>
  </div>
  <div class="faculty-name">{name}</div>
  <div class="faculty-rank">{rank}</div>
  <div class="faculty-department">{department}</div>
  <div class="faculty-expertise">{expertise}</div>
  <div class="faculty-email">{email}</div>
</div>"#,
        delay = stagger_delay(index),
        image = escape(&member.image),
        fallback_attr = ImageFallback::ATTRIBUTE,
        fallback = ImageFallback::Avatar.as_attr(),
        initials = escape(&initials(&member.name)),
        lightbox = lightbox_attrs(&member.image, &member.name),
        rank = escape(&member.rank),
        department = escape(&member.department),
        email = escape(&member.email),
    );
}
