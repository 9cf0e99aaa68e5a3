//! Section ordering and visibility.
//!
//! The raw `layout.sections` map is sparse and authored by hand. It is first
//! normalized into one fully populated `SectionSettings` per catalog key,
//! then filtered (visibility + content) and stable-sorted by order. Every
//! later stage works on that total list.

use serde::Serialize;

use crate::composer::templates::{
    AdmissionTemplate, FacilitiesTemplate, GoalsTemplate, StatementTemplate, TemplateVariant,
};
use crate::composer::theme::ThemeRole;
use crate::composer::utils::goal_fields::{prepare_goals, GoalsOptions};
use crate::profile::{Profile, ThemeColors};

/// The fixed catalog of profile sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Mission,
    Vision,
    Goals,
    Facilities,
    Admission,
}

impl SectionKey {
    /// Catalog order; also the tie-break order for equal `order` values.
    pub const CATALOG: [SectionKey; 5] = [
        SectionKey::Mission,
        SectionKey::Vision,
        SectionKey::Goals,
        SectionKey::Facilities,
        SectionKey::Admission,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Mission => "mission",
            SectionKey::Vision => "vision",
            SectionKey::Goals => "goals",
            SectionKey::Facilities => "facilities",
            SectionKey::Admission => "admission",
        }
    }

    /// Gaps are placeholders for section kinds not in the catalog.
    pub fn default_order(self) -> i64 {
        match self {
            SectionKey::Mission => 1,
            SectionKey::Vision => 2,
            SectionKey::Goals => 3,
            SectionKey::Facilities => 4,
            SectionKey::Admission => 8,
        }
    }

    pub fn default_template(self) -> &'static str {
        match self {
            SectionKey::Mission | SectionKey::Vision => StatementTemplate::DEFAULT.name(),
            SectionKey::Goals => GoalsTemplate::DEFAULT.name(),
            SectionKey::Facilities => FacilitiesTemplate::DEFAULT.name(),
            SectionKey::Admission => AdmissionTemplate::DEFAULT.name(),
        }
    }

    /// Vision takes the secondary color so it reads apart from mission.
    pub fn theme_role(self) -> ThemeRole {
        match self {
            SectionKey::Vision => ThemeRole::Secondary,
            _ => ThemeRole::Primary,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            SectionKey::Mission => "Our Mission",
            SectionKey::Vision => "Our Vision",
            SectionKey::Goals => "Our Goals",
            SectionKey::Facilities => "Facilities",
            SectionKey::Admission => "Admissions",
        }
    }
}

/// A catalog key with every setting filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSettings {
    pub key: SectionKey,
    pub order: i64,
    pub show: bool,
    pub template: String,
    pub theme: Option<ThemeColors>,
}

/// A section that will be rendered, in page order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionDescriptor {
    pub key: SectionKey,
    pub template: String,
    pub order: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeColors>,
}

/// One settings entry per catalog key, in catalog order.
///
/// Admission visibility also requires `admissionInfo.isOpen == true`.
pub fn normalize_sections(profile: &Profile) -> Vec<SectionSettings> {
    SectionKey::CATALOG
        .iter()
        .map(|&key| {
            let config = profile.section_config(key.as_str());
            let mut show = config.and_then(|c| c.show) != Some(false);
            if key == SectionKey::Admission {
                show = show && profile.admission_info.as_ref().is_some_and(|a| a.is_open());
            }
            SectionSettings {
                key,
                order: config.and_then(|c| c.order).unwrap_or(key.default_order()),
                show,
                template: config
                    .and_then(|c| c.template.clone())
                    .unwrap_or_else(|| key.default_template().to_string()),
                theme: config.and_then(|c| c.theme.clone()),
            }
        })
        .collect()
}

/// Whether the profile carries anything to show for `key`.
pub fn has_content(key: SectionKey, profile: &Profile, goals: &GoalsOptions) -> bool {
    match key {
        SectionKey::Mission => profile.mission.as_ref().is_some_and(|m| m.has_content()),
        SectionKey::Vision => profile.vision.as_ref().is_some_and(|v| v.has_content()),
        SectionKey::Goals => !prepare_goals(&profile.goals, goals).is_empty(),
        SectionKey::Facilities => !profile.facilities.is_empty(),
        SectionKey::Admission => profile.admission_info.is_some(),
    }
}

/// Visible sections with content, ascending by order.
pub fn resolve_sections(profile: &Profile, goals: &GoalsOptions) -> Vec<SectionDescriptor> {
    let mut visible: Vec<SectionDescriptor> = normalize_sections(profile)
        .into_iter()
        .filter(|settings| {
            let keep = settings.show && has_content(settings.key, profile, goals);
            if !keep {
                tracing::debug!(
                    "Omitting section '{}' (show: {})",
                    settings.key.as_str(),
                    settings.show
                );
            }
            keep
        })
        .map(|settings| SectionDescriptor {
            key: settings.key,
            template: settings.template,
            order: settings.order,
            theme: settings.theme,
        })
        .collect();

    // sort_by_key is stable: equal orders keep catalog order
    visible.sort_by_key(|descriptor| descriptor.order);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn profile(value: Value) -> Profile {
        serde_json::from_value(value).unwrap()
    }

    fn full_content() -> Value {
        json!({
            "mission": "Nurture curious minds",
            "vision": "A school for every child",
            "goals": ["Be kind", {"title": "Excel", "icon": "star"}],
            "facilities": [{"name": "Library", "description": "12,000 books"}],
            "admissionInfo": {"isOpen": true, "requirements": ["Birth certificate"]}
        })
    }

    fn with_layout(layout: Value) -> Profile {
        let mut doc = full_content();
        doc["layout"] = layout;
        profile(doc)
    }

    fn keys(descriptors: &[SectionDescriptor]) -> Vec<SectionKey> {
        descriptors.iter().map(|d| d.key).collect()
    }

    #[test]
    fn test_defaults_without_layout() {
        let sections = resolve_sections(&profile(full_content()), &GoalsOptions::default());
        assert_eq!(keys(&sections), SectionKey::CATALOG.to_vec());
        let templates: Vec<&str> = sections.iter().map(|d| d.template.as_str()).collect();
        assert_eq!(templates, vec!["card", "card", "grid", "grid", "banner"]);
        let orders: Vec<i64> = sections.iter().map(|d| d.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 8]);
    }

    #[test]
    fn test_configured_order() {
        let p = with_layout(json!({"sections": {
            "facilities": {"order": 1},
            "mission": {"order": 2},
            "goals": {"order": 3},
            "vision": {"show": false},
            "admission": {"show": false}
        }}));
        let sections = resolve_sections(&p, &GoalsOptions::default());
        assert_eq!(
            keys(&sections),
            vec![SectionKey::Facilities, SectionKey::Mission, SectionKey::Goals]
        );
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let p = with_layout(json!({"sections": {
            "vision": {"order": 2},
            "mission": {"order": 2},
            "admission": {"order": 0}
        }}));
        let sections = resolve_sections(&p, &GoalsOptions::default());
        assert_eq!(
            keys(&sections),
            vec![
                SectionKey::Admission,
                SectionKey::Mission,
                SectionKey::Vision,
                SectionKey::Goals,
                SectionKey::Facilities
            ]
        );
    }

    #[test]
    fn test_show_false_hides_section_with_content() {
        let p = with_layout(json!({"sections": {"goals": {"show": false}}}));
        let sections = resolve_sections(&p, &GoalsOptions::default());
        assert!(!keys(&sections).contains(&SectionKey::Goals));
        assert_eq!(sections.len(), 4);
    }

    #[test]
    fn test_admission_requires_open_window() {
        let mut doc = full_content();
        doc["admissionInfo"]["isOpen"] = json!(false);
        doc["layout"] = json!({"sections": {"admission": {"show": true}}});
        let sections = resolve_sections(&profile(doc), &GoalsOptions::default());
        assert!(!keys(&sections).contains(&SectionKey::Admission));

        let mut doc = full_content();
        doc["admissionInfo"] = json!({"requirements": ["Photo"]});
        let sections = resolve_sections(&profile(doc), &GoalsOptions::default());
        assert!(!keys(&sections).contains(&SectionKey::Admission));
    }

    #[test]
    fn test_empty_content_is_omitted() {
        let mut doc = full_content();
        doc["facilities"] = json!([]);
        doc["goals"] = json!([null, ""]);
        doc["layout"] = json!({"sections": {"facilities": {"show": true}}});
        let sections = resolve_sections(&profile(doc), &GoalsOptions::default());
        assert_eq!(
            keys(&sections),
            vec![SectionKey::Mission, SectionKey::Vision, SectionKey::Admission]
        );

        let bare = profile(json!({"name": "Empty School"}));
        let empty = resolve_sections(&bare, &GoalsOptions::default());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_goals_filtered_to_nothing_are_omitted() {
        let p = profile(json!({"goals": ["No icon here"]}));
        let options = GoalsOptions { icons_only: true, max_items: None };
        assert!(resolve_sections(&p, &options).is_empty());
        assert_eq!(
            keys(&resolve_sections(&p, &GoalsOptions::default())),
            vec![SectionKey::Goals]
        );
    }

    #[test]
    fn test_unknown_config_keys_are_ignored() {
        let p = with_layout(json!({"sections": {"gallery": {"order": 0, "show": true}}}));
        let sections = resolve_sections(&p, &GoalsOptions::default());
        assert_eq!(keys(&sections), SectionKey::CATALOG.to_vec());
    }

    #[test]
    fn test_settings_are_total() {
        let settings = normalize_sections(&profile(json!({})));
        assert_eq!(settings.len(), SectionKey::CATALOG.len());
        // admission is hidden without admission info, everything else defaults to visible
        let shown: Vec<bool> = settings.iter().map(|s| s.show).collect();
        assert_eq!(shown, vec![true, true, true, true, false]);
    }
}
