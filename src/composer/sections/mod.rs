//! Profile Section Renderers
//!
//! Each module renders one section kind in one of its template variants.
//! Renderers are pure: `(payload, variant, accent) -> Option<html>`, with
//! `None` meaning there is nothing to show.
//!
//! ## Sections
//! 1. Statement - mission and vision (one renderer, two payloads)
//! 2. Goals - bare-string or structured goals with icons
//! 3. Facilities - named facilities with optional images
//! 4. Admission - open admission window, process, requirements, fees

pub mod s1_statement;
pub mod s2_goals;
pub mod s3_facilities;
pub mod s4_admission;

use crate::composer::layout::{SectionDescriptor, SectionKey};
use crate::composer::utils::goal_fields::GoalsOptions;
use crate::composer::utils::html::esc;
use crate::profile::Profile;

/// Everything a section renderer may read.
pub struct RenderContext<'a> {
    pub profile: &'a Profile,
    pub descriptor: &'a SectionDescriptor,
    pub accent: &'a str,
    pub goals: &'a GoalsOptions,
}

/// Renderer output plus the variant that was actually used.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBlock {
    pub template: &'static str,
    pub html: String,
}

pub type SectionRenderer = fn(&RenderContext) -> Option<RenderedBlock>;

/// Renderer table, one entry per catalog key.
const RENDERERS: [(SectionKey, SectionRenderer); 5] = [
    (SectionKey::Mission, s1_statement::render_mission),
    (SectionKey::Vision, s1_statement::render_vision),
    (SectionKey::Goals, s2_goals::render_section),
    (SectionKey::Facilities, s3_facilities::render_section),
    (SectionKey::Admission, s4_admission::render_section),
];

pub fn renderer_for(key: SectionKey) -> SectionRenderer {
    RENDERERS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, renderer)| *renderer)
        .unwrap_or(render_nothing)
}

fn render_nothing(_: &RenderContext) -> Option<RenderedBlock> {
    None
}

/// Section heading tinted with the accent color.
pub(crate) fn heading_html(text: &str, accent: &str) -> String {
    format!(
        "<h2 class=\"section-heading\" style=\"color: {}\">{}</h2>",
        accent,
        esc(text)
    )
}
