//! Profile Composer
//!
//! Composition root: resolves the section list, picks each section's accent
//! color, dispatches to the section renderer and wraps the output.
//!
//! Public API (consumed by api_server.rs and the page handlers):
//! - ProfileComposer::new(ComposeOptions) -> Self
//! - ProfileComposer::compose(&Profile) -> ComposedProfile
//! - ComposedProfile::render_body() -> Result<String, askama::Error>

use askama::Template;
use crate::composer::layout::{resolve_sections, SectionDescriptor};
use crate::composer::sections::{renderer_for, RenderContext};
use crate::composer::theme::{resolve_accent, ThemeRole};
use crate::composer::utils::goal_fields::GoalsOptions;
use crate::composer::view_models::{ContactView, HeroView, RenderedSection};
use crate::profile::Profile;

/// Caller-level rendering options.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    pub goals: GoalsOptions,
}

/// Everything the page body needs, in display order.
#[derive(Debug, Clone)]
pub struct ComposedProfile {
    pub hero: HeroView,
    pub sections: Vec<RenderedSection>,
    pub contact: ContactView,
}

#[derive(Template)]
#[template(path = "partials/profile_body.html")]
struct ProfileBodyTemplate<'a> {
    hero: &'a HeroView,
    sections: &'a [RenderedSection],
    contact: &'a ContactView,
}

impl ComposedProfile {
    /// Hero, sections and contact footer as one HTML fragment.
    pub fn render_body(&self) -> Result<String, askama::Error> {
        ProfileBodyTemplate {
            hero: &self.hero,
            sections: &self.sections,
            contact: &self.contact,
        }
        .render()
    }
}

/// Stateless apart from its options; safe to share across requests.
#[derive(Debug, Clone, Default)]
pub struct ProfileComposer {
    options: ComposeOptions,
}

impl ProfileComposer {
    pub fn new(options: ComposeOptions) -> Self {
        Self { options }
    }

    /// Visible sections in page order, without rendering them.
    pub fn sections(&self, profile: &Profile) -> Vec<SectionDescriptor> {
        resolve_sections(profile, &self.options.goals)
    }

    /// Compose a full profile. Pure: the same profile always yields the
    /// same output.
    pub fn compose(&self, profile: &Profile) -> ComposedProfile {
        let sections = self
            .sections(profile)
            .iter()
            .filter_map(|descriptor| self.render_section(profile, descriptor))
            .collect();

        let page_accent = resolve_accent(None, profile.global_theme(), ThemeRole::Primary);
        ComposedProfile {
            hero: HeroView::from_profile(profile, &page_accent),
            sections,
            contact: ContactView::from_profile(profile, &page_accent),
        }
    }

    fn render_section(
        &self,
        profile: &Profile,
        descriptor: &SectionDescriptor,
    ) -> Option<RenderedSection> {
        let key = descriptor.key;
        let accent = resolve_accent(
            descriptor.theme.as_ref(),
            profile.global_theme(),
            key.theme_role(),
        );
        let ctx = RenderContext {
            profile,
            descriptor,
            accent: &accent,
            goals: &self.options.goals,
        };
        let block = renderer_for(key)(&ctx)?;

        let html = format!(
            "<section id=\"{key}\" class=\"profile-section profile-section--{key}\" \
             data-template=\"{template}\" data-order=\"{order}\">\n{body}\n</section>",
            key = key.as_str(),
            template = block.template,
            order = descriptor.order,
            body = block.html,
        );

        Some(RenderedSection {
            key,
            template: block.template,
            order: descriptor.order,
            accent,
            html,
        })
    }
}
