//! S4: Admission
//!
//! Only rendered while admission is open. Shows the application window,
//! the process (Markdown), the requirements list and fees.
//!
//! Templates: banner (default), card, split, minimal

use crate::composer::layout::SectionKey;
use crate::composer::sections::{heading_html, RenderContext, RenderedBlock};
use crate::composer::templates::{AdmissionTemplate, TemplateVariant};
use crate::composer::utils::dates::admission_window;
use crate::composer::utils::html::{esc, markdown};
use crate::profile::AdmissionInfo;

const OPEN_BADGE: &str = "Admissions Open";

type AdmissionLayout = fn(&AdmissionInfo, &str) -> String;

fn layout_for(template: AdmissionTemplate) -> AdmissionLayout {
    match template {
        AdmissionTemplate::Banner => banner,
        AdmissionTemplate::Card => card,
        AdmissionTemplate::Split => split,
        AdmissionTemplate::Minimal => minimal,
    }
}

/// Render admission details; `None` unless admission is open.
pub fn render(info: &AdmissionInfo, template: AdmissionTemplate, accent: &str) -> Option<String> {
    if !info.is_open() {
        return None;
    }
    Some(layout_for(template)(info, accent))
}

pub(crate) fn render_section(ctx: &RenderContext) -> Option<RenderedBlock> {
    let template = AdmissionTemplate::resolve(Some(ctx.descriptor.template.as_str()));
    let info = ctx.profile.admission_info.as_ref()?;
    let html = render(info, template, ctx.accent)?;
    Some(RenderedBlock { template: template.name(), html })
}

fn badge_html(accent: &str) -> String {
    format!(
        "<span class=\"admission__badge\" style=\"background: {}; color: #ffffff\">{}</span>",
        accent, OPEN_BADGE
    )
}

fn window_html(info: &AdmissionInfo) -> String {
    admission_window(info.start_date.as_deref(), info.end_date.as_deref())
        .map(|window| format!("<p class=\"admission__window\">{}</p>", esc(&window)))
        .unwrap_or_default()
}

fn details_html(info: &AdmissionInfo) -> String {
    let mut html = String::new();

    if let Some(process) = info.process.as_deref().filter(|p| !p.trim().is_empty()) {
        html.push_str("<div class=\"admission__process\">\n<h3>Application Process</h3>\n");
        html.push_str(&markdown(process));
        html.push_str("</div>\n");
    }

    let requirements: Vec<&str> = info
        .requirements
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .collect();
    if !requirements.is_empty() {
        html.push_str("<div class=\"admission__requirements\">\n<h3>Requirements</h3>\n<ul>\n");
        for requirement in requirements {
            html.push_str(&format!("<li>{}</li>\n", esc(requirement)));
        }
        html.push_str("</ul>\n</div>\n");
    }

    if let Some(fees) = info.fees.as_deref().filter(|f| !f.trim().is_empty()) {
        html.push_str(&format!(
            "<p class=\"admission__fees\"><strong>Fees:</strong> {}</p>\n",
            esc(fees)
        ));
    }

    html
}

fn banner(info: &AdmissionInfo, accent: &str) -> String {
    format!(
        "<div class=\"admission admission--banner\" style=\"border-left: 6px solid {accent}\">\n\
         <div class=\"admission__header\">{badge}\n<h2 class=\"section-heading\">{heading}</h2>\n{window}</div>\n\
         <div class=\"admission__details\">\n{details}</div>\n\
         <a class=\"admission__cta\" href=\"#contact\" style=\"background: {accent}; color: #ffffff\">Contact Admissions</a>\n\
         </div>",
        accent = accent,
        badge = badge_html(accent),
        heading = esc(SectionKey::Admission.heading()),
        window = window_html(info),
        details = details_html(info),
    )
}

fn card(info: &AdmissionInfo, accent: &str) -> String {
    format!(
        "<div class=\"admission admission--card\">\n\
         <div class=\"admission__card\" style=\"border-top: 4px solid {accent}\">\n\
         {heading}\n{badge}\n{window}\n{details}</div>\n</div>",
        accent = accent,
        heading = heading_html(SectionKey::Admission.heading(), accent),
        badge = badge_html(accent),
        window = window_html(info),
        details = details_html(info),
    )
}

fn split(info: &AdmissionInfo, accent: &str) -> String {
    format!(
        "<div class=\"admission admission--split\">\n\
         <div class=\"admission__aside\" style=\"background: {accent}; color: #ffffff\">\n\
         <h2 class=\"section-heading\">{heading}</h2>\n<p class=\"admission__status\">{badge}</p>\n{window}</div>\n\
         <div class=\"admission__details\">\n{details}</div>\n</div>",
        accent = accent,
        heading = esc(SectionKey::Admission.heading()),
        badge = OPEN_BADGE,
        window = window_html(info),
        details = details_html(info),
    )
}

fn minimal(info: &AdmissionInfo, accent: &str) -> String {
    format!(
        "<div class=\"admission admission--minimal\">\n\
         <h2 class=\"section-heading\" style=\"border-bottom: 2px solid {accent}\">{heading}</h2>\n\
         {window}\n{details}</div>",
        accent = accent,
        heading = esc(SectionKey::Admission.heading()),
        window = window_html(info),
        details = details_html(info),
    )
}
