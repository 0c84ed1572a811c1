//! Department content: the embedded faculty roster and announcement feed,
//! the filters over them, and their pure markup renderers.
//!
//! Nothing here touches the DOM. Renderers return markup strings that the
//! browser layer assigns to `innerHTML`.

pub mod announcements;
pub mod datasets;
pub mod faculty;
pub mod html;

use ccs_types::UnknownCategory;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to parse {dataset} dataset: {source}")]
    Dataset {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
}
