//! Goal field accessors.
//!
//! Goals arrive as bare strings (legacy content) or structured objects.
//! Every goal layout reads titles, descriptions, icons and order through
//! these functions and nothing else, so both shapes behave identically.

use serde_json::Value;

use crate::composer::utils::icons::{resolve_goal_icon, GoalIcon};
use crate::profile::GoalEntry;

/// Placeholder title for entries with nothing displayable.
pub const PLACEHOLDER_TITLE: &str = "Goal";

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

pub fn title_of(goal: &GoalEntry) -> &str {
    match goal {
        GoalEntry::Text(text) => non_blank(Some(text)).unwrap_or(PLACEHOLDER_TITLE),
        GoalEntry::Detailed(details) => non_blank(details.title.as_deref())
            .or_else(|| non_blank(details.text.as_deref()))
            .unwrap_or(PLACEHOLDER_TITLE),
        GoalEntry::Other(_) => PLACEHOLDER_TITLE,
    }
}

/// `description`, else `text` when a separate `title` already took the
/// heading. The string form never has one.
pub fn description_of(goal: &GoalEntry) -> Option<&str> {
    match goal {
        GoalEntry::Detailed(details) => non_blank(details.description.as_deref()).or_else(|| {
            non_blank(details.title.as_deref()).and(non_blank(details.text.as_deref()))
        }),
        _ => None,
    }
}

pub fn icon_of(goal: &GoalEntry) -> Option<&str> {
    match goal {
        GoalEntry::Detailed(details) => non_blank(details.icon.as_deref()),
        _ => None,
    }
}

/// Absent order counts as 0 for both shapes.
pub fn order_of(goal: &GoalEntry) -> i64 {
    match goal {
        GoalEntry::Detailed(details) => details.order.unwrap_or(0),
        _ => 0,
    }
}

/// Caller-level goal filtering, applied before ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalsOptions {
    /// Keep only goals that carry an icon.
    pub icons_only: bool,
    /// Hard cap on the number of goals shown.
    pub max_items: Option<usize>,
}

/// Display-ready goal shared by every goal layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalView {
    pub position: usize,
    pub title: String,
    pub description: Option<String>,
    pub icon: GoalIcon,
}

fn is_droppable(goal: &GoalEntry) -> bool {
    match goal {
        GoalEntry::Text(text) => text.trim().is_empty(),
        GoalEntry::Other(Value::Null) => true,
        _ => false,
    }
}

/// Drop empty entries, apply the options, stable-sort by order, then
/// derive the display fields with 1-based positions.
pub fn prepare_goals(goals: &[GoalEntry], options: &GoalsOptions) -> Vec<GoalView> {
    let mut kept: Vec<&GoalEntry> = goals
        .iter()
        .filter(|goal| !is_droppable(goal))
        .filter(|goal| !options.icons_only || icon_of(goal).is_some())
        .collect();
    if let Some(max) = options.max_items {
        kept.truncate(max);
    }
    kept.sort_by_key(|goal| order_of(goal));

    kept.into_iter()
        .enumerate()
        .map(|(index, goal)| {
            let position = index + 1;
            GoalView {
                position,
                title: title_of(goal).to_string(),
                description: description_of(goal).map(str::to_string),
                icon: resolve_goal_icon(icon_of(goal), position),
            }
        })
        .collect()
}
