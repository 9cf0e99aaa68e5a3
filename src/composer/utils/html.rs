//! HTML building helpers shared by the section renderers.

use askama_escape::{escape, Html};
use pulldown_cmark::{html, Event, Options, Parser};

/// Escape text for use in element content or a quoted attribute.
pub fn esc(text: &str) -> String {
    escape(text, Html).to_string()
}

/// Accept only URLs that cannot smuggle script: http(s), mailto, tel,
/// site-relative paths and fragment links. Returned unescaped.
pub fn checked_url(url: &str) -> Option<&str> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    let lower = url.to_ascii_lowercase();
    let allowed = ["https://", "http://", "mailto:", "tel:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
        || (url.starts_with('/') && !url.starts_with("//"))
        || url.starts_with('#');
    allowed.then_some(url)
}

/// `checked_url`, escaped for an attribute value.
pub fn safe_url(url: &str) -> Option<String> {
    checked_url(url).map(esc)
}

/// CSS color check for values interpolated into `style` attributes.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` and plain named colors.
pub fn is_safe_color(color: &str) -> bool {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    !color.is_empty() && color.len() <= 32 && color.chars().all(|c| c.is_ascii_alphabetic())
}

/// Inline SVG in the 24x24 stroke style used for every icon on the page.
pub fn svg_icon(paths: &str, class: &str) -> String {
    format!(
        "<svg class=\"{}\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 24 24\" fill=\"none\" \
         stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\" \
         aria-hidden=\"true\">{}</svg>",
        esc(class),
        paths
    )
}

/// Render staff-authored Markdown. Raw HTML in the source is shown as text.
pub fn markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::with_capacity(text.len() * 2);
    html::push_html(&mut out, parser);
    out
}

/// Paragraph-split plain text: blank lines separate paragraphs.
pub fn paragraphs(text: &str) -> String {
    text.split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", esc(p).replace('\n', "<br>")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        let escaped = esc("<b>\"Tom\" & 'Jerry'</b>");
        assert!(escaped.starts_with("&lt;b&gt;&quot;Tom&quot; &amp; "));
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('\''));
    }

    #[test]
    fn test_safe_url() {
        assert!(safe_url("https://school.edu/a?b=1&c=2").unwrap().ends_with("b=1&amp;c=2"));
        assert!(safe_url("/images/lab.jpg").is_some());
        assert_eq!(
            safe_url("mailto:office@school.edu").as_deref(),
            Some("mailto:office@school.edu")
        );
        assert_eq!(safe_url("#contact").as_deref(), Some("#contact"));
        assert_eq!(safe_url("javascript:alert(1)"), None);
        assert_eq!(safe_url("//evil.example/x.js"), None);
        assert_eq!(safe_url("  "), None);
        assert_eq!(checked_url(" https://a.b/?x=1&y=2 "), Some("https://a.b/?x=1&y=2"));
    }

    #[test]
    fn test_colors() {
        assert!(is_safe_color("#1d4ed8"));
        assert!(is_safe_color("#fff"));
        assert!(is_safe_color("teal"));
        assert!(!is_safe_color("#12345"));
        assert!(!is_safe_color("red; background:url(x)"));
        assert!(!is_safe_color(""));
    }

    #[test]
    fn test_markdown_neutralizes_raw_html() {
        let out = markdown("1. Apply online\n2. Visit **campus**\n\n<script>alert(1)</script>");
        assert!(out.contains("<ol>"));
        assert!(out.contains("<strong>campus</strong>"));
        assert!(!out.contains("<script>"));
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(paragraphs("One\nline\n\nTwo"), "<p>One<br>line</p>\n<p>Two</p>");
        assert_eq!(paragraphs("   "), "");
    }
}
