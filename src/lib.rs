//! docfold: heading-delimited document sectioning with collapsible disclosure.
//!
//! A document is cut into [`Section`]s at its heading lines by [`sectionize`].
//! A [`DisclosureSession`] then decides, for one rendering of that document, which
//! sections are shown in full and which are collapsed until the user expands them.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod disclosure;
pub mod document;
pub mod error;
pub mod formats;
pub mod logging;
pub mod render;
pub mod section;
pub mod sectioner;
pub mod ui;

pub use disclosure::{DisclosurePolicy, DisclosureSession, DisclosureState, Visibility};
pub use error::{Error, Result};
pub use section::Section;
pub use sectioner::sectionize;
