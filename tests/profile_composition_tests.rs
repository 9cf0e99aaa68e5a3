//! Profile Composition Integration Tests
//!
//! Full profile documents through `ProfileComposer`: section order,
//! visibility, template fallback, goal shapes and icons.

use school_profile_rust::composer::sections::s2_goals;
use school_profile_rust::composer::templates::{GoalsTemplate, TemplateVariant};
use school_profile_rust::composer::utils::{prepare_goals, GoalIcon, NamedIcon};
use school_profile_rust::{GoalsOptions, Profile, ProfileComposer, SectionKey};
use serde_json::{json, Value};

fn profile(value: Value) -> Profile {
    serde_json::from_value(value).expect("profile should deserialize")
}

/// A complete profile with content in every section and no layout.
fn riverside() -> Value {
    json!({
        "id": "riverside",
        "name": "Riverside Academy",
        "tagline": "Curiosity every day",
        "established": 1962,
        "contact": {"phone": "+1 555 0100", "email": "office@riverside.edu", "website": "https://riverside.edu"},
        "address": {"street": "12 River Rd", "city": "Springfield", "state": "IL", "postalCode": "62701"},
        "socialMedia": {"facebook": "https://facebook.com/riverside", "youtube": "https://youtube.com/@riverside"},
        "mission": {"title": "Why we exist", "text": "Every learner known by name."},
        "vision": "A community of lifelong learners.",
        "goals": [
            "Literacy for all",
            {"title": "STEM excellence", "description": "Robotics from grade 3", "icon": "rocket"},
            {"title": "Wellbeing", "icon": "💚"}
        ],
        "facilities": [
            {"name": "Library", "description": "20,000 volumes"},
            {"name": "Science Lab", "image": "https://cdn.riverside.edu/lab.jpg"}
        ],
        "admissionInfo": {
            "isOpen": true,
            "process": "Submit the online form.",
            "requirements": ["Birth certificate"],
            "startDate": "2026-01-05",
            "endDate": "2026-03-31"
        }
    })
}

fn keys(p: &Profile) -> Vec<SectionKey> {
    ProfileComposer::default()
        .compose(p)
        .sections
        .iter()
        .map(|s| s.key)
        .collect()
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[test]
fn test_no_layout_renders_all_sections_with_defaults() {
    let composed = ProfileComposer::default().compose(&profile(riverside()));

    let summary: Vec<(SectionKey, &str, i64)> = composed
        .sections
        .iter()
        .map(|s| (s.key, s.template, s.order))
        .collect();
    assert_eq!(
        summary,
        vec![
            (SectionKey::Mission, "card", 1),
            (SectionKey::Vision, "card", 2),
            (SectionKey::Goals, "grid", 3),
            (SectionKey::Facilities, "grid", 4),
            (SectionKey::Admission, "banner", 8),
        ]
    );

    let body = composed.render_body().unwrap();
    assert!(body.contains("Riverside Academy"));
    assert!(body.contains("Established 1962"));
    assert!(body.contains("12 River Rd, Springfield, IL 62701"));
    assert!(body.contains("January 5, 2026 to March 31, 2026"));

    let mission = body.find("id=\"mission\"").unwrap();
    let admission = body.find("id=\"admission\"").unwrap();
    assert!(mission < admission);
}

#[test]
fn test_hidden_goals_leave_four_sections() {
    let mut doc = riverside();
    doc["layout"] = json!({"sections": {"goals": {"show": false}}});
    let p = profile(doc);

    assert_eq!(
        keys(&p),
        vec![
            SectionKey::Mission,
            SectionKey::Vision,
            SectionKey::Facilities,
            SectionKey::Admission
        ]
    );
    let body = ProfileComposer::default().compose(&p).render_body().unwrap();
    assert!(!body.contains("id=\"goals\""));
    assert!(!body.contains("STEM excellence"));
}

#[test]
fn test_redundant_field_spellings_still_render_every_section() {
    let p = profile(json!({
        "_id": "65f0c2",
        "id": "65f0c2",
        "name": "Hillside School",
        "heroImage": "https://cdn.hillside.edu/hero.jpg",
        "coverImage": "https://cdn.hillside.edu/cover.jpg",
        "mission": {"text": "Teach well", "statement": "Teach well"},
        "vision": {"statement": "Every child thrives"},
        "goals": ["Read daily"],
        "facilities": [
            {"name": "Library", "title": "Main Library"},
            {
                "title": "Pool",
                "image": "https://cdn.hillside.edu/pool-front.jpg",
                "imageUrl": "https://cdn.hillside.edu/pool-side.jpg"
            }
        ],
        "admissionInfo": {"isOpen": true}
    }));
    assert_eq!(
        keys(&p),
        vec![
            SectionKey::Mission,
            SectionKey::Vision,
            SectionKey::Goals,
            SectionKey::Facilities,
            SectionKey::Admission
        ]
    );

    let composed = ProfileComposer::default().compose(&p);
    assert_eq!(
        composed.hero.image_url.as_deref(),
        Some("https://cdn.hillside.edu/hero.jpg")
    );
    let body = composed.render_body().unwrap();
    assert!(body.contains("Teach well"));
    assert!(body.contains("Every child thrives"));
    assert!(body.contains("Library"));
    assert!(!body.contains("Main Library"));
    assert!(body.contains("Pool"));
    assert!(body.contains("pool-front.jpg"));
    assert!(!body.contains("pool-side.jpg"));
}

// ============================================================================
// Ordering and visibility
// ============================================================================

#[test]
fn test_configured_order_and_ties() {
    let mut doc = riverside();
    doc["layout"] = json!({"sections": {
        "admission": {"order": "0"},
        "facilities": {"order": 2},
        "vision": {"order": 2.0}
    }});
    assert_eq!(
        keys(&profile(doc)),
        vec![
            SectionKey::Admission,
            SectionKey::Mission,
            SectionKey::Vision,
            SectionKey::Facilities,
            SectionKey::Goals
        ]
    );
}

#[test]
fn test_visibility_gating() {
    let mut doc = riverside();
    doc["layout"] = json!({"sections": {"mission": {"show": "false"}, "vision": {"show": false}}});
    doc["admissionInfo"]["isOpen"] = json!(false);
    // only literal false hides a section
    assert_eq!(
        keys(&profile(doc)),
        vec![SectionKey::Mission, SectionKey::Goals, SectionKey::Facilities]
    );
}

#[test]
fn test_empty_content_is_omitted_without_error() {
    let p = profile(json!({
        "name": "Bare School",
        "mission": {"title": "No text"},
        "vision": "   ",
        "goals": [],
        "facilities": null,
        "layout": {"sections": {"goals": {"show": true}, "facilities": {"show": true}}}
    }));
    let composed = ProfileComposer::default().compose(&p);
    assert!(composed.sections.is_empty());
    let body = composed.render_body().unwrap();
    assert!(body.contains("Bare School"));
}

// ============================================================================
// Templates
// ============================================================================

#[test]
fn test_unknown_template_falls_back_to_default() {
    let mut doc = riverside();
    doc["layout"] = json!({"sections": {
        "goals": {"template": "hexagons"},
        "facilities": {"template": "Carousel"},
        "admission": {"template": ""}
    }});
    let composed = ProfileComposer::default().compose(&profile(doc));
    let templates: Vec<(SectionKey, &str)> =
        composed.sections.iter().map(|s| (s.key, s.template)).collect();
    assert!(templates.contains(&(SectionKey::Goals, "grid")));
    assert!(templates.contains(&(SectionKey::Facilities, "carousel")));
    assert!(templates.contains(&(SectionKey::Admission, "banner")));
}

#[test]
fn test_template_resolution_is_idempotent() {
    for requested in ["timeline", "TIMELINE", "bogus", "", "  list "] {
        let once = GoalsTemplate::resolve(Some(requested));
        let twice = GoalsTemplate::resolve(Some(once.name()));
        assert_eq!(once, twice, "requested {:?}", requested);
    }
}

// ============================================================================
// Goals
// ============================================================================

#[test]
fn test_goal_shapes_render_identically() {
    let bare: Vec<school_profile_rust::profile::GoalEntry> =
        serde_json::from_value(json!(["Be curious"])).unwrap();
    let titled: Vec<school_profile_rust::profile::GoalEntry> =
        serde_json::from_value(json!([{"title": "Be curious"}])).unwrap();
    let options = GoalsOptions::default();

    for &template in GoalsTemplate::VARIANTS {
        let a = s2_goals::render(&prepare_goals(&bare, &options), template, "#1d4ed8");
        let b = s2_goals::render(&prepare_goals(&titled, &options), template, "#1d4ed8");
        assert_eq!(a, b, "{:?}", template);
    }
}

#[test]
fn test_goal_icon_tiers() {
    let goals: Vec<school_profile_rust::profile::GoalEntry> = serde_json::from_value(json!([
        {"title": "A", "icon": "🎯"},
        {"title": "B", "icon": "Trophy"},
        {"title": "C", "icon": "not-an-icon"},
        {"title": "D"}
    ]))
    .unwrap();
    let icons: Vec<GoalIcon> = prepare_goals(&goals, &GoalsOptions::default())
        .into_iter()
        .map(|g| g.icon)
        .collect();
    assert_eq!(
        icons,
        vec![
            GoalIcon::Emoji("🎯".to_string()),
            GoalIcon::Named(NamedIcon::Trophy),
            GoalIcon::Position(3),
            GoalIcon::Position(4),
        ]
    );
}

#[test]
fn test_goal_options_apply_through_composer() {
    use school_profile_rust::ComposeOptions;

    let composer = ProfileComposer::new(ComposeOptions {
        goals: GoalsOptions { icons_only: true, max_items: Some(1) },
    });
    let composed = composer.compose(&profile(riverside()));
    let goals = composed
        .sections
        .iter()
        .find(|s| s.key == SectionKey::Goals)
        .unwrap();
    assert!(goals.html.contains("STEM excellence"));
    assert!(!goals.html.contains("Wellbeing"));
    assert!(!goals.html.contains("Literacy for all"));
}

// ============================================================================
// Theme and contact
// ============================================================================

#[test]
fn test_unsafe_theme_color_is_ignored() {
    let mut doc = riverside();
    doc["layout"] = json!({
        "globalTheme": {"primaryColor": "#0a0a0a"},
        "sections": {"mission": {"theme": {"primaryColor": "red;background:url(x)"}}}
    });
    let composed = ProfileComposer::default().compose(&profile(doc));
    let mission = &composed.sections[0];
    assert_eq!(mission.key, SectionKey::Mission);
    assert_eq!(mission.accent, "#0a0a0a");
    assert!(!mission.html.contains("url(x)"));
}

#[test]
fn test_contact_footer_social_links() {
    let body = ProfileComposer::default()
        .compose(&profile(riverside()))
        .render_body()
        .unwrap();
    assert!(body.contains("id=\"contact\""));
    assert!(body.contains("tel:+15550100"));
    assert_eq!(body.matches("class=\"social-icon\"").count(), 2);
}
