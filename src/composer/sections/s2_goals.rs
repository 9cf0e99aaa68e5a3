//! S2: Goals
//!
//! Goals are prepared once (`prepare_goals`: filter, cap, stable sort,
//! title/description/icon derivation) and every layout below renders the
//! same `GoalView` list. Layouts only differ in markup.
//!
//! Templates: grid (default), list, timeline, cards

use crate::composer::layout::SectionKey;
use crate::composer::sections::{heading_html, RenderContext, RenderedBlock};
use crate::composer::templates::{GoalsTemplate, TemplateVariant};
use crate::composer::utils::goal_fields::{prepare_goals, GoalView};
use crate::composer::utils::html::{esc, svg_icon};
use crate::composer::utils::icons::GoalIcon;

type GoalsLayout = fn(&[GoalView], &str) -> String;

fn layout_for(template: GoalsTemplate) -> GoalsLayout {
    match template {
        GoalsTemplate::Grid => grid,
        GoalsTemplate::List => list,
        GoalsTemplate::Timeline => timeline,
        GoalsTemplate::Cards => cards,
    }
}

/// Render prepared goals; `None` for an empty list.
pub fn render(goals: &[GoalView], template: GoalsTemplate, accent: &str) -> Option<String> {
    if goals.is_empty() {
        return None;
    }
    Some(format!(
        "<div class=\"goals-section\">\n{}\n{}\n</div>",
        heading_html(SectionKey::Goals.heading(), accent),
        layout_for(template)(goals, accent)
    ))
}

pub(crate) fn render_section(ctx: &RenderContext) -> Option<RenderedBlock> {
    let template = GoalsTemplate::resolve(Some(ctx.descriptor.template.as_str()));
    let goals = prepare_goals(&ctx.profile.goals, ctx.goals);
    let html = render(&goals, template, ctx.accent)?;
    Some(RenderedBlock { template: template.name(), html })
}

/// Icon slot: emoji glyph, named SVG, or the position number.
pub fn icon_html(icon: &GoalIcon, accent: &str) -> String {
    match icon {
        GoalIcon::Emoji(glyph) => format!(
            "<span class=\"goal__icon goal__icon--emoji\" aria-hidden=\"true\">{}</span>",
            esc(glyph)
        ),
        GoalIcon::Named(named) => format!(
            "<span class=\"goal__icon goal__icon--svg\" style=\"color: {}\">{}</span>",
            accent,
            svg_icon(named.svg_path(), "icon")
        ),
        GoalIcon::Position(position) => format!(
            "<span class=\"goal__icon goal__icon--number\" style=\"background: {}; color: #ffffff\">{}</span>",
            accent, position
        ),
    }
}

fn body_html(goal: &GoalView) -> String {
    let mut html = format!("<h3 class=\"goal__title\">{}</h3>", esc(&goal.title));
    if let Some(description) = &goal.description {
        html.push_str(&format!("<p class=\"goal__description\">{}</p>", esc(description)));
    }
    html
}

fn grid(goals: &[GoalView], accent: &str) -> String {
    let items: Vec<String> = goals
        .iter()
        .map(|goal| {
            format!(
                "<article class=\"goal\">{}<div class=\"goal__body\">{}</div></article>",
                icon_html(&goal.icon, accent),
                body_html(goal)
            )
        })
        .collect();
    format!("<div class=\"goals goals--grid\">\n{}\n</div>", items.join("\n"))
}

fn list(goals: &[GoalView], accent: &str) -> String {
    let items: Vec<String> = goals
        .iter()
        .map(|goal| {
            format!(
                "<li class=\"goal\">{}<div class=\"goal__body\">{}</div></li>",
                icon_html(&goal.icon, accent),
                body_html(goal)
            )
        })
        .collect();
    format!("<ul class=\"goals goals--list\">\n{}\n</ul>", items.join("\n"))
}

fn timeline(goals: &[GoalView], accent: &str) -> String {
    let items: Vec<String> = goals
        .iter()
        .map(|goal| {
            format!(
                "<li class=\"goal goal--milestone\">\
                 <div class=\"goal__marker\">{}</div>\
                 <div class=\"goal__body\">{}</div></li>",
                icon_html(&goal.icon, accent),
                body_html(goal)
            )
        })
        .collect();
    format!(
        "<ol class=\"goals goals--timeline\" style=\"border-left: 3px solid {}\">\n{}\n</ol>",
        accent,
        items.join("\n")
    )
}

fn cards(goals: &[GoalView], accent: &str) -> String {
    let items: Vec<String> = goals
        .iter()
        .map(|goal| {
            format!(
                "<article class=\"goal goal--card\" style=\"border-top: 4px solid {}\">\
                 <header class=\"goal__header\">{}</header>\
                 <div class=\"goal__body\">{}</div></article>",
                accent,
                icon_html(&goal.icon, accent),
                body_html(goal)
            )
        })
        .collect();
    format!("<div class=\"goals goals--cards\">\n{}\n</div>", items.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::utils::goal_fields::GoalsOptions;
    use crate::profile::GoalEntry;
    use serde_json::json;

    fn views(value: serde_json::Value) -> Vec<GoalView> {
        let goals: Vec<GoalEntry> = serde_json::from_value(value).unwrap();
        prepare_goals(&goals, &GoalsOptions::default())
    }

    #[test]
    fn test_empty_goals_render_nothing() {
        assert_eq!(render(&[], GoalsTemplate::Grid, "#000"), None);
    }

    #[test]
    fn test_icon_tiers_in_markup() {
        let goals = views(json!([
            {"title": "Launch", "icon": "🚀"},
            {"title": "Aim", "icon": "rocket"},
            {"title": "Fruit", "icon": "banana"},
            "Plain"
        ]));
        let html = render(&goals, GoalsTemplate::Grid, "#1d4ed8").unwrap();
        assert!(html.contains("goal__icon--emoji\" aria-hidden=\"true\">🚀</span>"));
        assert!(html.contains("goal__icon--svg"));
        assert!(html.contains(">3</span>"));
        assert!(html.contains(">4</span>"));
        assert_eq!(html.matches("goal__icon--number").count(), 2);
    }

    #[test]
    fn test_all_layouts_share_derivation() {
        let goals = views(json!([
            "Be kind",
            {"title": "Read", "text": "Twenty minutes a day"},
            42
        ]));
        for &template in GoalsTemplate::VARIANTS {
            let html = render(&goals, template, "#1d4ed8").unwrap();
            assert!(html.contains(&format!("goals--{}", template.name())), "{:?}", template);
            assert!(html.contains("<h3 class=\"goal__title\">Be kind</h3>"));
            assert!(html.contains("<p class=\"goal__description\">Twenty minutes a day</p>"));
            assert!(html.contains("<h3 class=\"goal__title\">Goal</h3>"));
            assert_eq!(html.matches("goal__description").count(), 1);
        }
    }

    #[test]
    fn test_titles_are_escaped() {
        let goals = views(json!(["<script>alert(1)</script>"]));
        let html = render(&goals, GoalsTemplate::List, "#000").unwrap();
        assert!(!html.contains("<script>"));
    }
}
