//! S1: Mission and Vision statements
//!
//! Both sections carry the same payload shape and share these layouts. They
//! differ only in heading and theme role (vision uses the secondary color).
//!
//! Templates: card (default), banner, split, minimal

use crate::composer::sections::{heading_html, RenderContext, RenderedBlock};
use crate::composer::templates::{StatementTemplate, TemplateVariant};
use crate::composer::utils::html::{esc, paragraphs, safe_url};
use crate::profile::Statement;

/// Display fields of a statement, resolved once for every layout.
pub struct StatementView<'a> {
    pub heading: &'a str,
    pub title: Option<&'a str>,
    pub text: &'a str,
    pub image: Option<String>,
}

type StatementLayout = fn(&StatementView, &str) -> String;

fn layout_for(template: StatementTemplate) -> StatementLayout {
    match template {
        StatementTemplate::Card => card,
        StatementTemplate::Banner => banner,
        StatementTemplate::Split => split,
        StatementTemplate::Minimal => minimal,
    }
}

/// Render a mission/vision statement; `None` when there is no text.
pub fn render(
    statement: Option<&Statement>,
    heading: &str,
    template: StatementTemplate,
    accent: &str,
) -> Option<String> {
    let statement = statement?;
    let view = StatementView {
        heading,
        title: statement.title(),
        text: statement.text()?,
        image: statement.image().and_then(safe_url),
    };
    Some(layout_for(template)(&view, accent))
}

pub(crate) fn render_mission(ctx: &RenderContext) -> Option<RenderedBlock> {
    render_statement(ctx, ctx.profile.mission.as_ref())
}

pub(crate) fn render_vision(ctx: &RenderContext) -> Option<RenderedBlock> {
    render_statement(ctx, ctx.profile.vision.as_ref())
}

fn render_statement(ctx: &RenderContext, statement: Option<&Statement>) -> Option<RenderedBlock> {
    let template = StatementTemplate::resolve(Some(ctx.descriptor.template.as_str()));
    let html = render(statement, ctx.descriptor.key.heading(), template, ctx.accent)?;
    Some(RenderedBlock { template: template.name(), html })
}

fn title_html(view: &StatementView) -> String {
    view.title
        .map(|t| format!("<h3 class=\"statement__title\">{}</h3>\n", esc(t)))
        .unwrap_or_default()
}

fn card(view: &StatementView, accent: &str) -> String {
    format!(
        "<div class=\"statement statement--card\">\n\
         <div class=\"statement__card\" style=\"border-top: 4px solid {accent}\">\n\
         {heading}\n{title}<div class=\"statement__text\">{text}</div>\n\
         </div>\n</div>",
        accent = accent,
        heading = heading_html(view.heading, accent),
        title = title_html(view),
        text = paragraphs(view.text),
    )
}

fn banner(view: &StatementView, accent: &str) -> String {
    format!(
        "<div class=\"statement statement--banner\" style=\"background: {accent}; color: #ffffff\">\n\
         <h2 class=\"section-heading\">{heading}</h2>\n{title}\
         <blockquote class=\"statement__text\">{text}</blockquote>\n</div>",
        accent = accent,
        heading = esc(view.heading),
        title = title_html(view),
        text = paragraphs(view.text),
    )
}

fn split(view: &StatementView, accent: &str) -> String {
    let aside = match &view.image {
        Some(src) => format!(
            "<img class=\"statement__image\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            src,
            esc(view.heading)
        ),
        None => format!(
            "<div class=\"statement__panel\" style=\"background: {}; color: #ffffff\"><span>{}</span></div>",
            accent,
            esc(view.heading)
        ),
    };
    format!(
        "<div class=\"statement statement--split\">\n\
         <div class=\"statement__aside\">{aside}</div>\n\
         <div class=\"statement__body\">\n{heading}\n{title}<div class=\"statement__text\">{text}</div>\n</div>\n\
         </div>",
        aside = aside,
        heading = heading_html(view.heading, accent),
        title = title_html(view),
        text = paragraphs(view.text),
    )
}

fn minimal(view: &StatementView, accent: &str) -> String {
    format!(
        "<div class=\"statement statement--minimal\">\n\
         <h2 class=\"section-heading\" style=\"border-bottom: 2px solid {accent}\">{heading}</h2>\n\
         {title}<div class=\"statement__text\">{text}</div>\n</div>",
        accent = accent,
        heading = esc(view.heading),
        title = title_html(view),
        text = paragraphs(view.text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn statement(value: serde_json::Value) -> Statement {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_absent_or_blank_renders_nothing() {
        assert_eq!(render(None, "Our Mission", StatementTemplate::Card, "#000"), None);
        let blank = statement(json!({"title": "Only a title"}));
        assert_eq!(render(Some(&blank), "Our Mission", StatementTemplate::Card, "#000"), None);
    }

    #[test]
    fn test_each_layout_renders_escaped_text() {
        let s = statement(json!({"title": "Why we teach", "text": "Kids & <curiosity>"}));
        for &template in StatementTemplate::VARIANTS {
            let html = render(Some(&s), "Our Mission", template, "#1d4ed8").unwrap();
            assert!(html.contains(&format!("statement--{}", template.name())));
            assert!(html.contains("Kids &amp; &lt;curiosity&gt;"));
            assert!(html.contains("Why we teach"));
            assert!(html.contains("Our Mission"));
        }
    }

    #[test]
    fn test_accent_is_applied() {
        let s = statement(json!("Lead with care"));
        let html = render(Some(&s), "Our Vision", StatementTemplate::Banner, "#0f766e").unwrap();
        assert!(html.contains("background: #0f766e"));
    }

    #[test]
    fn test_split_uses_image_when_safe() {
        let with_image =
            statement(json!({"text": "Grow", "image": "https://cdn.school.edu/campus.jpg"}));
        let html =
            render(Some(&with_image), "Our Mission", StatementTemplate::Split, "#000").unwrap();
        assert!(html.contains("<img class=\"statement__image\""));

        let bad_image = statement(json!({"text": "Grow", "image": "javascript:alert(1)"}));
        let html =
            render(Some(&bad_image), "Our Mission", StatementTemplate::Split, "#000").unwrap();
        assert!(!html.contains("<img"));
        assert!(html.contains("statement__panel"));
    }
}
