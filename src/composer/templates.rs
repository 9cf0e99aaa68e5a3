//! Template variant resolution.
//!
//! Each section kind has a fixed set of layout variants and a default.
//! Configured names are authored by non-developers, so an unknown name is
//! never an error: it resolves to the section default.

/// A section's closed set of layout variants.
pub trait TemplateVariant: Copy + Eq + std::fmt::Debug + 'static {
    const VARIANTS: &'static [Self];
    const DEFAULT: Self;

    fn name(self) -> &'static str;

    /// Known name (trimmed, ASCII case ignored) or the default.
    fn resolve(requested: Option<&str>) -> Self {
        let Some(requested) = requested.map(str::trim).filter(|r| !r.is_empty()) else {
            return Self::DEFAULT;
        };
        match Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.name().eq_ignore_ascii_case(requested))
        {
            Some(variant) => variant,
            None => {
                tracing::debug!(
                    "Unknown template '{}', using default '{}'",
                    requested,
                    Self::DEFAULT.name()
                );
                Self::DEFAULT
            }
        }
    }
}

/// Mission and vision layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementTemplate {
    Card,
    Banner,
    Split,
    Minimal,
}

impl TemplateVariant for StatementTemplate {
    const VARIANTS: &'static [Self] = &[Self::Card, Self::Banner, Self::Split, Self::Minimal];
    const DEFAULT: Self = Self::Card;

    fn name(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Banner => "banner",
            Self::Split => "split",
            Self::Minimal => "minimal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalsTemplate {
    Grid,
    List,
    Timeline,
    Cards,
}

impl TemplateVariant for GoalsTemplate {
    const VARIANTS: &'static [Self] = &[Self::Grid, Self::List, Self::Timeline, Self::Cards];
    const DEFAULT: Self = Self::Grid;

    fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::List => "list",
            Self::Timeline => "timeline",
            Self::Cards => "cards",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacilitiesTemplate {
    Grid,
    Carousel,
    Masonry,
    List,
}

impl TemplateVariant for FacilitiesTemplate {
    const VARIANTS: &'static [Self] = &[Self::Grid, Self::Carousel, Self::Masonry, Self::List];
    const DEFAULT: Self = Self::Grid;

    fn name(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Carousel => "carousel",
            Self::Masonry => "masonry",
            Self::List => "list",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionTemplate {
    Banner,
    Card,
    Split,
    Minimal,
}

impl TemplateVariant for AdmissionTemplate {
    const VARIANTS: &'static [Self] = &[Self::Banner, Self::Card, Self::Split, Self::Minimal];
    const DEFAULT: Self = Self::Banner;

    fn name(self) -> &'static str {
        match self {
            Self::Banner => "banner",
            Self::Card => "card",
            Self::Split => "split",
            Self::Minimal => "minimal",
        }
    }
}
