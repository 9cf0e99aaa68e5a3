//! Profile Composer Module
//!
//! Turns a fetched school profile document into a themed, ordered page.
//!
//! ## Pipeline
//! 1. Layout - normalize section settings, gate visibility, stable sort
//! 2. Theme - per-section accent from section, global, or brand default
//! 3. Templates - configured variant name, or the section default
//! 4. Sections - one pure renderer per section kind
//! 5. Generator - wrap sections, build hero and contact views

pub mod generator;
pub mod layout;
pub mod sections;
pub mod templates;
pub mod theme;
pub mod utils;
pub mod view_models;

pub use generator::{ComposeOptions, ComposedProfile, ProfileComposer};
pub use layout::{resolve_sections, SectionDescriptor, SectionKey};
pub use utils::goal_fields::GoalsOptions;
