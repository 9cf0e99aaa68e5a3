//! School profile document model.
//!
//! Shape of the JSON document served by the school backend. Every field is
//! optional or defaulted: a partially filled profile must still produce a
//! complete page, so deserialization is lenient throughout (see `de`).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::profile::de::{
    lenient_bool, lenient_i64, lenient_list, lenient_map, lenient_option, lenient_string,
    lenient_string_list,
};

/// Root configuration/content document for one school.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub hero_image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub established: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub established_year: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub contact: Option<Contact>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default, deserialize_with = "social_links")]
    pub social_media: Vec<SocialLink>,

    #[serde(default, deserialize_with = "lenient_option")]
    pub layout: Option<Layout>,

    #[serde(default)]
    pub mission: Option<Statement>,
    #[serde(default)]
    pub vision: Option<Statement>,
    #[serde(default, deserialize_with = "goal_list")]
    pub goals: Vec<GoalEntry>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub facilities: Vec<Facility>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub admission_info: Option<AdmissionInfo>,
}

impl Profile {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Our School")
    }

    /// `heroImage`, falling back to `coverImage`.
    pub fn hero_image_url(&self) -> Option<&str> {
        self.hero_image.as_deref().or(self.cover_image.as_deref())
    }

    /// `established`, falling back to `establishedYear`.
    pub fn established_label(&self) -> Option<&str> {
        self.established.as_deref().or(self.established_year.as_deref())
    }

    pub fn global_theme(&self) -> Option<&ThemeColors> {
        self.layout.as_ref().and_then(|l| l.global_theme.as_ref())
    }

    pub fn section_config(&self, key: &str) -> Option<&SectionConfig> {
        self.layout.as_ref().and_then(|l| l.sections.get(key))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub website: Option<String>,
}

/// Postal address, either a single free-text line or structured parts.
#[derive(Debug, Clone, PartialEq)]
pub enum Address {
    Line(String),
    Parts(AddressParts),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "AddressFields")]
pub struct AddressParts {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// Wire form of `AddressParts`; the postal code has three spellings.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressFields {
    #[serde(default, deserialize_with = "lenient_string")]
    street: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    city: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    state: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    postal_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    zip: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pincode: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    country: Option<String>,
}

impl From<AddressFields> for AddressParts {
    fn from(fields: AddressFields) -> Self {
        Self {
            street: fields.street,
            city: fields.city,
            state: fields.state,
            postal_code: fields.postal_code.or(fields.zip).or(fields.pincode),
            country: fields.country,
        }
    }
}

impl Address {
    /// Single display line, parts joined with ", ".
    pub fn display_line(&self) -> Option<String> {
        match self {
            Address::Line(line) => Some(line.trim().to_string()).filter(|l| !l.is_empty()),
            Address::Parts(parts) => {
                let mut locality = [parts.city.as_deref(), parts.state.as_deref()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join(", ");
                if let Some(code) = &parts.postal_code {
                    if !locality.is_empty() {
                        locality.push(' ');
                    }
                    locality.push_str(code);
                }
                let joined: Vec<&str> = [
                    parts.street.as_deref(),
                    Some(locality.as_str()).filter(|l| !l.is_empty()),
                    parts.country.as_deref(),
                ]
                .into_iter()
                .flatten()
                .collect();
                (!joined.is_empty()).then(|| joined.join(", "))
            }
        }
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Anything that is neither a string nor an object reads as an empty line
        Ok(match Value::deserialize(deserializer)? {
            Value::String(line) => Address::Line(line),
            value @ Value::Object(_) => {
                Address::Parts(serde_json::from_value(value).unwrap_or_default())
            }
            _ => Address::Line(String::new()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// Accepts `[{platform, url}]` or the map form `{"facebook": "https://..."}`.
fn social_links<'de, D>(deserializer: D) -> Result<Vec<SocialLink>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value::<SocialLink>(item).ok())
            .filter(|link| !link.url.trim().is_empty())
            .collect(),
        Some(Value::Object(entries)) => entries
            .into_iter()
            .filter_map(|(platform, url)| match url {
                Value::String(url) if !url.trim().is_empty() => Some(SocialLink { platform, url }),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

// ============================================================================
// Layout configuration
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(default, deserialize_with = "lenient_map")]
    pub sections: HashMap<String, SectionConfig>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub global_theme: Option<ThemeColors>,
}

/// Per-section `{order, show, template}` triple plus an optional theme.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SectionConfig {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub order: Option<i64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub show: Option<bool>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub template: Option<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub theme: Option<ThemeColors>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
}

// ============================================================================
// Content payloads
// ============================================================================

/// Mission or vision payload: a bare statement or a titled one.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Text(String),
    Detailed(StatementDetails),
    Other(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatementDetails {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub statement: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
}

impl Statement {
    pub fn text(&self) -> Option<&str> {
        let text = match self {
            Statement::Text(text) => Some(text.as_str()),
            Statement::Detailed(details) => {
                details
                    .text
                    .as_deref()
                    .or(details.statement.as_deref())
                    .or(details.description.as_deref())
            }
            Statement::Other(_) => None,
        };
        text.map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Statement::Detailed(details) => details.title.as_deref(),
            _ => None,
        }
    }

    pub fn image(&self) -> Option<&str> {
        match self {
            Statement::Detailed(details) => details.image.as_deref(),
            _ => None,
        }
    }

    pub fn has_content(&self) -> bool {
        self.text().is_some()
    }
}

impl<'de> Deserialize<'de> for Statement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => Statement::Text(text),
            value @ Value::Object(_) => match serde_json::from_value(value.clone()) {
                Ok(details) => Statement::Detailed(details),
                Err(_) => Statement::Other(value),
            },
            other => Statement::Other(other),
        })
    }
}

/// One entry of `profile.goals`.
///
/// Legacy content stores goals as bare strings; newer content uses objects.
/// Anything else is kept as `Other` and renders with a placeholder title.
#[derive(Debug, Clone, PartialEq)]
pub enum GoalEntry {
    Text(String),
    Detailed(GoalDetails),
    Other(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GoalDetails {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub order: Option<i64>,
}

impl<'de> Deserialize<'de> for GoalEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => GoalEntry::Text(text),
            value @ Value::Object(_) => match serde_json::from_value(value.clone()) {
                Ok(details) => GoalEntry::Detailed(details),
                Err(_) => GoalEntry::Other(value),
            },
            other => GoalEntry::Other(other),
        })
    }
}

fn goal_list<'de, D>(deserializer: D) -> Result<Vec<GoalEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "FacilityFields")]
pub struct Facility {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// Wire form of `Facility`; older content uses `title` and `imageUrl`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityFields {
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    image: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    image_url: Option<String>,
}

impl From<FacilityFields> for Facility {
    fn from(fields: FacilityFields) -> Self {
        Self {
            name: fields.name.or(fields.title),
            description: fields.description,
            image: fields.image.or(fields.image_url),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionInfo {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub is_open: Option<bool>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub process: Option<String>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub fees: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_date: Option<String>,
}

impl AdmissionInfo {
    /// Only a literal `isOpen: true` opens the admission window.
    pub fn is_open(&self) -> bool {
        self.is_open == Some(true)
    }
}
