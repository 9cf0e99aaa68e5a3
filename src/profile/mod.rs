//! School Profile Module
//!
//! The profile document model and, with the `api` feature, the backend
//! client, the process-wide cache and the cached loading service.

pub mod de;
pub mod types;

#[cfg(feature = "api")]
pub mod cache;
#[cfg(feature = "api")]
pub mod client;
#[cfg(feature = "api")]
pub mod service;

pub use types::{
    Address, AddressParts, AdmissionInfo, Contact, Facility, GoalDetails, GoalEntry, Layout,
    Profile, SectionConfig, SocialLink, Statement, StatementDetails, ThemeColors,
};

#[cfg(feature = "api")]
pub use cache::ProfileCache;
#[cfg(feature = "api")]
pub use client::{parse_envelope, FetchError, ProfileClient};
#[cfg(feature = "api")]
pub use service::ProfileService;
