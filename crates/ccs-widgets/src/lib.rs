//! Browser-independent state for the site's interactive widgets.
//!
//! Each widget owns its state explicitly so the browser layer can hold it in a
//! closure and the logic can be exercised without a DOM.

pub mod config;
pub mod counter;
pub mod debounce;
pub mod lightbox;
pub mod nav;
pub mod reveal;
pub mod tabs;
pub mod toast;
