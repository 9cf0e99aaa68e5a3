//! S3: Facilities
//!
//! Rendered in array order; the list has no ordering field of its own.
//!
//! Templates: grid (default), carousel, masonry, list

use crate::composer::layout::SectionKey;
use crate::composer::sections::{heading_html, RenderContext, RenderedBlock};
use crate::composer::templates::{FacilitiesTemplate, TemplateVariant};
use crate::composer::utils::html::{esc, safe_url};
use crate::profile::Facility;

const UNNAMED_FACILITY: &str = "Facility";

type FacilitiesLayout = fn(&[Facility], &str) -> String;

fn layout_for(template: FacilitiesTemplate) -> FacilitiesLayout {
    match template {
        FacilitiesTemplate::Grid => grid,
        FacilitiesTemplate::Carousel => carousel,
        FacilitiesTemplate::Masonry => masonry,
        FacilitiesTemplate::List => list,
    }
}

pub fn render(
    facilities: &[Facility],
    template: FacilitiesTemplate,
    accent: &str,
) -> Option<String> {
    if facilities.is_empty() {
        return None;
    }
    Some(format!(
        "<div class=\"facilities-section\">\n{}\n{}\n</div>",
        heading_html(SectionKey::Facilities.heading(), accent),
        layout_for(template)(facilities, accent)
    ))
}

pub(crate) fn render_section(ctx: &RenderContext) -> Option<RenderedBlock> {
    let template = FacilitiesTemplate::resolve(Some(ctx.descriptor.template.as_str()));
    let html = render(&ctx.profile.facilities, template, ctx.accent)?;
    Some(RenderedBlock { template: template.name(), html })
}

fn name_of(facility: &Facility) -> &str {
    facility
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(UNNAMED_FACILITY)
}

fn image_html(facility: &Facility, class: &str) -> String {
    match facility.image.as_deref().and_then(safe_url) {
        Some(src) => format!(
            "<img class=\"{}\" src=\"{}\" alt=\"{}\" loading=\"lazy\">",
            class,
            src,
            esc(name_of(facility))
        ),
        None => String::new(),
    }
}

fn text_html(facility: &Facility) -> String {
    let mut html = format!("<h3 class=\"facility__name\">{}</h3>", esc(name_of(facility)));
    if let Some(description) = facility.description.as_deref() {
        html.push_str(&format!("<p class=\"facility__description\">{}</p>", esc(description)));
    }
    html
}

fn grid(facilities: &[Facility], accent: &str) -> String {
    let items: Vec<String> = facilities
        .iter()
        .map(|facility| {
            format!(
                "<article class=\"facility\" style=\"border-bottom: 3px solid {}\">{}<div class=\"facility__body\">{}</div></article>",
                accent,
                image_html(facility, "facility__image"),
                text_html(facility)
            )
        })
        .collect();
    format!("<div class=\"facilities facilities--grid\">\n{}\n</div>", items.join("\n"))
}

fn carousel(facilities: &[Facility], accent: &str) -> String {
    let items: Vec<String> = facilities
        .iter()
        .enumerate()
        .map(|(index, facility)| {
            format!(
                "<li class=\"facility carousel__slide\" aria-label=\"{} of {}\">{}<div class=\"facility__body\">{}</div></li>",
                index + 1,
                facilities.len(),
                image_html(facility, "facility__image"),
                text_html(facility)
            )
        })
        .collect();
    format!(
        "<div class=\"facilities facilities--carousel\" role=\"region\" aria-roledescription=\"carousel\" \
         aria-label=\"Facilities\" tabindex=\"0\" style=\"scrollbar-color: {} transparent\">\n\
         <ul class=\"carousel__track\">\n{}\n</ul>\n</div>",
        accent,
        items.join("\n")
    )
}

fn masonry(facilities: &[Facility], _accent: &str) -> String {
    let items: Vec<String> = facilities
        .iter()
        .map(|facility| {
            format!(
                "<figure class=\"facility facility--tile\">{}<figcaption>{}</figcaption></figure>",
                image_html(facility, "facility__image"),
                text_html(facility)
            )
        })
        .collect();
    format!("<div class=\"facilities facilities--masonry\">\n{}\n</div>", items.join("\n"))
}

fn list(facilities: &[Facility], accent: &str) -> String {
    let items: Vec<String> = facilities
        .iter()
        .map(|facility| {
            format!(
                "<li class=\"facility\" style=\"border-left: 4px solid {}\">{}<div class=\"facility__body\">{}</div></li>",
                accent,
                image_html(facility, "facility__thumb"),
                text_html(facility)
            )
        })
        .collect();
    format!("<ul class=\"facilities facilities--list\">\n{}\n</ul>", items.join("\n"))
}
