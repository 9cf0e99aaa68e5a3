//! Icon resolution for goals and social links.

/// Unicode blocks treated as emoji when a goal icon is checked.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F000, 0x1F02F), // Mahjong tiles
    (0x1F0A0, 0x1F0FF), // Playing cards
    (0x1F100, 0x1F1FF), // Enclosed alphanumerics, regional indicators
    (0x1F200, 0x1F2FF), // Enclosed ideographic supplement
    (0x1F300, 0x1F5FF), // Misc symbols and pictographs
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F680, 0x1F6FF), // Transport and map
    (0x1F900, 0x1F9FF), // Supplemental symbols and pictographs
    (0x1FA70, 0x1FAFF), // Symbols and pictographs extended-A
    (0x2600, 0x26FF),   // Misc symbols
    (0x2700, 0x27BF),   // Dingbats
    (0x2B00, 0x2BFF),   // Misc symbols and arrows (star, circles)
];

pub fn contains_emoji(text: &str) -> bool {
    text.chars().any(|c| {
        let code = c as u32;
        EMOJI_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&code))
    })
}

/// Named vector icons a goal may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedIcon {
    Target,
    Star,
    Rocket,
    Lightbulb,
    Trophy,
}

impl NamedIcon {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "target" => Some(NamedIcon::Target),
            "star" => Some(NamedIcon::Star),
            "rocket" => Some(NamedIcon::Rocket),
            "lightbulb" => Some(NamedIcon::Lightbulb),
            "trophy" => Some(NamedIcon::Trophy),
            _ => None,
        }
    }

    pub fn svg_path(&self) -> &'static str {
        match self {
            NamedIcon::Target => r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/>"#,
            NamedIcon::Star => r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#,
            NamedIcon::Rocket => r#"<path d="M4.5 16.5c-1.5 1.26-2 5-2 5s3.74-.5 5-2c.71-.84.7-2.13-.09-2.91a2.18 2.18 0 0 0-2.91-.09z"/><path d="m12 15-3-3a22 22 0 0 1 2-3.95A12.88 12.88 0 0 1 22 2c0 2.72-.78 7.5-6 11a22.35 22.35 0 0 1-4 2z"/><path d="M9 12H4s.55-3.03 2-4c1.62-1.08 5 0 5 0"/><path d="M12 15v5s3.03-.55 4-2c1.08-1.62 0-5 0-5"/>"#,
            NamedIcon::Lightbulb => r#"<path d="M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5"/><path d="M9 18h6"/><path d="M10 22h4"/>"#,
            NamedIcon::Trophy => r#"<path d="M6 9H4.5a2.5 2.5 0 0 1 0-5H6"/><path d="M18 9h1.5a2.5 2.5 0 0 0 0-5H18"/><path d="M4 22h16"/><path d="M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22"/><path d="M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22"/><path d="M18 2H6v7a6 6 0 0 0 12 0V2Z"/>"#,
        }
    }
}

/// What a goal shows in its icon slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalIcon {
    /// Emoji glyph, rendered verbatim.
    Emoji(String),
    Named(NamedIcon),
    /// 1-based position of the goal in the rendered list.
    Position(usize),
}

/// Emoji first, then a known icon name, then the position number.
pub fn resolve_goal_icon(icon: Option<&str>, position: usize) -> GoalIcon {
    let Some(icon) = icon.map(str::trim).filter(|i| !i.is_empty()) else {
        return GoalIcon::Position(position);
    };
    if contains_emoji(icon) {
        GoalIcon::Emoji(icon.to_string())
    } else if let Some(named) = NamedIcon::from_name(icon) {
        GoalIcon::Named(named)
    } else {
        GoalIcon::Position(position)
    }
}

// ============================================================================
// Social platforms
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPlatform {
    Facebook,
    Twitter,
    Instagram,
    LinkedIn,
    YouTube,
    Link,
}

impl SocialPlatform {
    /// Case-insensitive substring match; first hit wins, unknown names get
    /// the generic link icon.
    pub fn resolve(platform: &str) -> Self {
        let name = platform.trim().to_lowercase();
        if name.contains("facebook") {
            SocialPlatform::Facebook
        } else if name.contains("twitter") || name == "x" || name.contains("x.com") {
            SocialPlatform::Twitter
        } else if name.contains("instagram") {
            SocialPlatform::Instagram
        } else if name.contains("linkedin") {
            SocialPlatform::LinkedIn
        } else if name.contains("youtube") {
            SocialPlatform::YouTube
        } else {
            SocialPlatform::Link
        }
    }

    pub fn svg_path(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => r#"<path d="M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"/>"#,
            SocialPlatform::Twitter => r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#,
            SocialPlatform::Instagram => r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#,
            SocialPlatform::LinkedIn => r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#,
            SocialPlatform::YouTube => r#"<path d="M2.5 17a24.12 24.12 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.56 49.56 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.12 24.12 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.55 49.55 0 0 1-16.2 0A2 2 0 0 1 2.5 17"/><path d="m10 15 5-3-5-3z"/>"#,
            SocialPlatform::Link => r#"<path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"/><path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"/>"#,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::Twitter => "X (Twitter)",
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::YouTube => "YouTube",
            SocialPlatform::Link => "Link",
        }
    }
}
