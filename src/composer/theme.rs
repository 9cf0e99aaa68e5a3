//! Accent color resolution.

use serde::Serialize;

use crate::composer::utils::html::is_safe_color;
use crate::profile::ThemeColors;

pub const DEFAULT_PRIMARY_COLOR: &str = "#1d4ed8";
pub const DEFAULT_SECONDARY_COLOR: &str = "#0f766e";

/// Which theme color a section draws its accent from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeRole {
    Primary,
    Secondary,
}

impl ThemeRole {
    fn pick(self, colors: &ThemeColors) -> Option<&str> {
        match self {
            ThemeRole::Primary => colors.primary_color.as_deref(),
            ThemeRole::Secondary => colors.secondary_color.as_deref(),
        }
    }

    fn brand_default(self) -> &'static str {
        match self {
            ThemeRole::Primary => DEFAULT_PRIMARY_COLOR,
            ThemeRole::Secondary => DEFAULT_SECONDARY_COLOR,
        }
    }
}

/// Section override, then the global theme, then the brand default.
/// Values that are not plain CSS colors are skipped.
pub fn resolve_accent(
    section: Option<&ThemeColors>,
    global: Option<&ThemeColors>,
    role: ThemeRole,
) -> String {
    [section, global]
        .into_iter()
        .flatten()
        .filter_map(|colors| role.pick(colors))
        .map(str::trim)
        .find(|color| is_safe_color(color))
        .unwrap_or(role.brand_default())
        .to_string()
}
