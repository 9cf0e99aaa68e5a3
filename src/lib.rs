//! School Profile Rust Implementation
//!
//! Server-rendered school profile pages composed from a per-school
//! configuration document.
//!
//! - `profile/`: document model with lenient deserialization; backend
//!   client, cache and loading service (feature `api`)
//! - `composer/`: section ordering, visibility, templates, theming and
//!   the per-section HTML renderers
//! - `config`: environment configuration
//! - `api_server`, `web/`: axum router, JSON API and htmx pages (feature `api`)

pub mod composer;
pub mod config;
pub mod profile;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use composer::{
    resolve_sections, ComposeOptions, ComposedProfile, GoalsOptions, ProfileComposer,
    SectionDescriptor, SectionKey,
};
pub use config::SiteConfig;
pub use profile::Profile;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
