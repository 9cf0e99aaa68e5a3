//! View Models for the profile page
//!
//! Plain data handed to the askama templates. URLs are stored raw but
//! already checked against the scheme allow-list; askama escapes them.

use serde::Serialize;

use crate::composer::layout::SectionKey;
use crate::composer::utils::html::{checked_url, svg_icon};
use crate::composer::utils::icons::SocialPlatform;
use crate::profile::Profile;

// ============================================================================
// Hero
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct HeroView {
    pub name: String,
    pub tagline: Option<String>,
    pub logo_url: Option<String>,
    pub image_url: Option<String>,
    pub established: Option<String>,
    pub accent: String,
}

impl HeroView {
    pub fn from_profile(profile: &Profile, accent: &str) -> Self {
        Self {
            name: profile.display_name().to_string(),
            tagline: non_blank(profile.tagline.as_deref()),
            logo_url: profile.logo.as_deref().and_then(checked_url).map(String::from),
            image_url: profile.hero_image_url().and_then(checked_url).map(String::from),
            established: non_blank(profile.established_label()),
            accent: accent.to_string(),
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

/// One composed section, ready for the page body.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedSection {
    pub key: SectionKey,
    pub template: &'static str,
    pub order: i64,
    pub accent: String,
    /// Full `<section>` element.
    pub html: String,
}

// ============================================================================
// Contact footer
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SocialLinkView {
    pub label: &'static str,
    pub platform: String,
    pub url: String,
    #[serde(skip)]
    pub icon_svg: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactView {
    pub school_name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub phone_href: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub social: Vec<SocialLinkView>,
    pub accent: String,
}

impl ContactView {
    pub fn from_profile(profile: &Profile, accent: &str) -> Self {
        let contact = profile.contact.as_ref();
        let phone = non_blank(contact.and_then(|c| c.phone.as_deref()));
        let phone_href = phone.as_deref().and_then(tel_href);
        let email = non_blank(contact.and_then(|c| c.email.as_deref()))
            .filter(|e| e.contains('@') && !e.contains(char::is_whitespace));
        let website = contact
            .and_then(|c| c.website.as_deref())
            .and_then(checked_url)
            .map(String::from);

        let social = profile
            .social_media
            .iter()
            .filter_map(|link| {
                let url = checked_url(&link.url)?;
                let platform = SocialPlatform::resolve(&link.platform);
                Some(SocialLinkView {
                    label: platform.label(),
                    platform: link.platform.trim().to_string(),
                    url: url.to_string(),
                    icon_svg: svg_icon(platform.svg_path(), "social-icon"),
                })
            })
            .collect();

        Self {
            school_name: profile.display_name().to_string(),
            address: profile.address.as_ref().and_then(|a| a.display_line()),
            phone,
            phone_href,
            email,
            website,
            social,
            accent: accent.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.address.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.website.is_none()
            && self.social.is_empty()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(String::from)
}

/// `tel:` link keeping only digits and a leading `+`.
fn tel_href(phone: &str) -> Option<String> {
    let mut digits = String::with_capacity(phone.len());
    for (i, c) in phone.trim().chars().enumerate() {
        if c.is_ascii_digit() || (c == '+' && i == 0) {
            digits.push(c);
        }
    }
    digits
        .chars()
        .any(|c| c.is_ascii_digit())
        .then(|| format!("tel:{}", digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn profile(value: serde_json::Value) -> Profile {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_tel_href() {
        assert_eq!(tel_href("+1 (555) 010-2000").as_deref(), Some("tel:+15550102000"));
        assert_eq!(tel_href("ask at front desk"), None);
    }

    #[test]
    fn test_contact_view_filters_unsafe_links() {
        let p = profile(json!({
            "name": "Riverside Academy",
            "contact": {"phone": "555 0100", "email": "office@riverside.edu", "website": "javascript:void(0)"},
            "socialMedia": [
                {"platform": "Facebook", "url": "https://facebook.com/riverside"},
                {"platform": "X", "url": "https://x.com/riverside"},
                {"platform": "Blog", "url": "data:text/html,hi"}
            ]
        }));
        let view = ContactView::from_profile(&p, "#1d4ed8");
        assert_eq!(view.website, None);
        assert_eq!(view.phone_href.as_deref(), Some("tel:5550100"));
        assert_eq!(view.social.len(), 2);
        assert_eq!(view.social[1].label, SocialPlatform::Twitter.label());
        assert!(view.social[0].icon_svg.starts_with("<svg"));
        assert!(!view.is_empty());
    }

    #[test]
    fn test_hero_view_defaults() {
        let view = HeroView::from_profile(&profile(json!({"tagline": "  "})), "#000");
        assert_eq!(view.name, "Our School");
        assert_eq!(view.tagline, None);
        assert_eq!(view.logo_url, None);
    }
}
