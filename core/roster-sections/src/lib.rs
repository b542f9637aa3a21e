//! Alphabetical sectioning and incremental list updates for Roster.
//!
//! # Components
//!
//! - **Sectioning**: [`group_into_sections`] groups a flat list into titled
//!   sections, sorted by title, with stable order inside each section
//! - **Layout**: [`SectionLayout`] maps flat indices to [`RowPath`]s
//! - **Diff**: [`apply_change_set`] turns a store [`ChangeSet`] into
//!   section/row operations for a list widget
//! - **Presenter**: [`ListPresenter`] observes a repository, keeps the visible
//!   sections current, and drives a [`ListView`]
//!
//! The sections are always recomputed from the new flat list. The row
//! operations only describe how to animate from the old sections to the new.
//!
//! Everything here runs on the thread that owns the store.
//!
//! [`ChangeSet`]: roster_store::ChangeSet

mod diff;
mod error;
mod layout;
mod presenter;
mod section;

pub use diff::{apply_change_set, BoundsPolicy, RowUpdate, SectionUpdate};
pub use error::{SectionError, SectionResult};
pub use layout::{RowPath, SectionLayout};
pub use presenter::{ListPresenter, ListView, PresenterConfig};
pub use section::{flatten, group_into_sections, section_records, section_titles, Section};
