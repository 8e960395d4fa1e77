//! Block Schema & Variant Registry
//!
//! The closed set of block types and the fields each one carries. Both the
//! factory and the renderer key off [`BlockKind`]; form generation in the
//! admin uses [`fields_for`] to know which inputs to draw.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::block::{Block, BlockId};
use crate::error::Error;

/// Registered block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    /// Hero banner with headline and calls to action
    Hero,
    /// Grid of feature cards
    FeatureGrid,
    /// Customer quote
    Testimonial,
    /// Row of customer or partner logos
    LogoCloud,
    /// Key figures
    Metrics,
    /// Free-form Markdown content
    RichText,
    /// Question and answer list
    Faq,
    /// Pricing plans
    PriceTable,
    /// Feature comparison matrix
    Comparison,
    /// Lead capture form
    ContactForm,
    /// Image or video
    Media,
}

impl BlockKind {
    /// Every registered kind, in palette order
    pub const ALL: [BlockKind; 11] = [
        Self::Hero,
        Self::FeatureGrid,
        Self::Testimonial,
        Self::LogoCloud,
        Self::Metrics,
        Self::RichText,
        Self::Faq,
        Self::PriceTable,
        Self::Comparison,
        Self::ContactForm,
        Self::Media,
    ];

    /// Get the stored type tag
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::FeatureGrid => "featureGrid",
            Self::Testimonial => "testimonial",
            Self::LogoCloud => "logoCloud",
            Self::Metrics => "metrics",
            Self::RichText => "richText",
            Self::Faq => "faq",
            Self::PriceTable => "priceTable",
            Self::Comparison => "comparison",
            Self::ContactForm => "contactForm",
            Self::Media => "media",
        }
    }

    /// Human readable name for the palette
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hero => "Hero",
            Self::FeatureGrid => "Feature grid",
            Self::Testimonial => "Testimonial",
            Self::LogoCloud => "Logo cloud",
            Self::Metrics => "Metrics",
            Self::RichText => "Rich text",
            Self::Faq => "FAQ",
            Self::PriceTable => "Price table",
            Self::Comparison => "Comparison",
            Self::ContactForm => "Contact form",
            Self::Media => "Media",
        }
    }

    /// Field layout for this kind
    #[must_use]
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            Self::Hero => HERO_FIELDS,
            Self::FeatureGrid => FEATURE_GRID_FIELDS,
            Self::Testimonial => TESTIMONIAL_FIELDS,
            Self::LogoCloud => LOGO_CLOUD_FIELDS,
            Self::Metrics => METRICS_FIELDS,
            Self::RichText => RICH_TEXT_FIELDS,
            Self::Faq => FAQ_FIELDS,
            Self::PriceTable => PRICE_TABLE_FIELDS,
            Self::Comparison => COMPARISON_FIELDS,
            Self::ContactForm => CONTACT_FORM_FIELDS,
            Self::Media => MEDIA_FIELDS,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::invalid_block(format!("unregistered block type: {s}")))
    }
}

/// Input kind of a payload field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Single line of plain text
    Text,
    /// Markdown source
    Markdown,
    /// Link or asset URL
    Url,
    /// List of structured items
    List,
    /// Call to action (`label` + `href`)
    Cta,
    /// Boolean toggle
    Flag,
}

/// One payload field of a block kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Stored field name
    pub name: &'static str,
    /// Input kind
    pub kind: FieldKind,
    /// Whether the block is meaningless without it
    pub required: bool,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    /// Check whether a stored value counts as filled in for this field
    #[must_use]
    pub fn is_filled(&self, value: Option<&Value>) -> bool {
        match (self.kind, value) {
            (_, None | Some(Value::Null)) => false,
            (FieldKind::Text | FieldKind::Markdown | FieldKind::Url, Some(v)) => {
                v.as_str().is_some_and(|s| !s.trim().is_empty())
            }
            (FieldKind::List, Some(v)) => v.as_array().is_some_and(|a| !a.is_empty()),
            (FieldKind::Cta, Some(v)) => v
                .get("label")
                .and_then(Value::as_str)
                .is_some_and(|s| !s.trim().is_empty()),
            (FieldKind::Flag, Some(v)) => v.is_boolean(),
        }
    }
}

use FieldKind::{Cta, Flag, List, Markdown, Text, Url};

const HERO_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("eyebrow", Text),
    FieldSpec::required("headline", Text),
    FieldSpec::optional("subcopy", Text),
    FieldSpec::optional("primaryCTA", Cta),
    FieldSpec::optional("secondaryCTA", Cta),
    FieldSpec::optional("badges", List),
    FieldSpec::optional("image", Url),
];

const FEATURE_GRID_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("eyebrow", Text),
    FieldSpec::optional("title", Text),
    FieldSpec::optional("subcopy", Text),
    FieldSpec::required("items", List),
];

const TESTIMONIAL_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("quote", Text),
    FieldSpec::required("author", Text),
    FieldSpec::optional("role", Text),
    FieldSpec::optional("company", Text),
    FieldSpec::optional("avatar", Url),
];

const LOGO_CLOUD_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("title", Text),
    FieldSpec::required("brands", List),
];

const METRICS_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("title", Text),
    FieldSpec::required("items", List),
];

const RICH_TEXT_FIELDS: &[FieldSpec] = &[FieldSpec::required("content", Markdown)];

const FAQ_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("title", Text),
    FieldSpec::required("items", List),
];

const PRICE_TABLE_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("title", Text),
    FieldSpec::optional("subcopy", Text),
    FieldSpec::required("items", List),
];

const COMPARISON_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("title", Text),
    FieldSpec::required("columns", List),
    FieldSpec::required("items", List),
];

const CONTACT_FORM_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("title", Text),
    FieldSpec::optional("subcopy", Text),
    FieldSpec::required("fields", List),
    FieldSpec::required("cta", Cta),
    FieldSpec::optional("successMessage", Text),
];

const MEDIA_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("title", Text),
    FieldSpec::required("url", Url),
    FieldSpec::optional("alt", Text),
    FieldSpec::optional("caption", Text),
    FieldSpec::optional("kind", Text),
    FieldSpec::optional("autoplay", Flag),
];

/// Check whether a type tag is registered
#[must_use]
pub fn is_valid_type(type_name: &str) -> bool {
    type_name.parse::<BlockKind>().is_ok()
}

/// Field layout for a type tag, `None` if the tag is unregistered
#[must_use]
pub fn fields_for(type_name: &str) -> Option<&'static [FieldSpec]> {
    type_name.parse::<BlockKind>().ok().map(|kind| kind.fields())
}

/// Violation severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// The block renders with visible gaps
    Error,
    /// The block renders, but not as intended
    Warning,
}

/// A field-level problem found by [`validate`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    /// Offending block
    pub block_id: BlockId,
    /// Block type tag
    pub block_type: String,
    /// Offending field (`type` for unregistered kinds)
    pub field: String,
    /// Severity
    pub severity: Severity,
    /// Human readable message
    pub message: String,
}

/// Report required fields left empty and unregistered block types
///
/// Never blocks rendering; the admin and the `check` command surface these
/// so editors can fix content before publishing.
#[must_use]
pub fn validate(block: &Block) -> Vec<FieldViolation> {
    let block_type = block.type_name().to_string();

    let Some(kind) = block.kind() else {
        return vec![FieldViolation {
            block_id: block.id.clone(),
            block_type: block_type.clone(),
            field: "type".to_string(),
            severity: Severity::Warning,
            message: format!("block type '{block_type}' has no renderer"),
        }];
    };

    let record = Value::from(block.clone());
    kind.fields()
        .iter()
        .filter(|spec| spec.required && !spec.is_filled(record.get(spec.name)))
        .map(|spec| FieldViolation {
            block_id: block.id.clone(),
            block_type: block_type.clone(),
            field: spec.name.to_string(),
            severity: Severity::Error,
            message: format!("required field '{}' is empty", spec.name),
        })
        .collect()
}

/// Validate a whole sequence, in order
#[must_use]
pub fn validate_all<'a>(blocks: impl IntoIterator<Item = &'a Block>) -> Vec<FieldViolation> {
    blocks.into_iter().flat_map(validate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockContent, HeroBlock, RichTextBlock};

    #[test]
    fn test_kind_round_trips_through_tag() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.as_str().parse::<BlockKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_is_valid_type() {
        assert!(is_valid_type("hero"));
        assert!(is_valid_type("featureGrid"));
        assert!(!is_valid_type("feature_grid"));
        assert!(!is_valid_type("unregisteredXyz"));
    }

    #[test]
    fn test_fields_for() {
        let fields = fields_for("hero").unwrap();
        let headline = fields.iter().find(|f| f.name == "headline").unwrap();
        assert!(headline.required);
        assert_eq!(headline.kind, FieldKind::Text);

        assert!(fields_for("carousel").is_none());
    }

    #[test]
    fn test_every_kind_has_a_required_field() {
        for kind in BlockKind::ALL {
            assert!(
                kind.fields().iter().any(|f| f.required),
                "{kind} has no required field"
            );
        }
    }

    #[test]
    fn test_is_filled() {
        let text = FieldSpec::required("headline", FieldKind::Text);
        assert!(!text.is_filled(None));
        assert!(!text.is_filled(Some(&Value::String("   ".into()))));
        assert!(text.is_filled(Some(&Value::String("Hi".into()))));

        let cta = FieldSpec::required("cta", FieldKind::Cta);
        assert!(!cta.is_filled(Some(&serde_json::json!({"label": ""}))));
        assert!(cta.is_filled(Some(&serde_json::json!({"label": "Go", "href": "/"}))));
    }

    #[test]
    fn test_validate_reports_empty_required_field() {
        let block = Block::new(
            "b1",
            BlockContent::Hero(HeroBlock {
                headline: " ".to_string(),
                ..HeroBlock::default()
            }),
        );
        let violations = validate(&block);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "headline");
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn test_validate_accepts_filled_block() {
        let block = Block::new(
            "b1",
            BlockContent::RichText(RichTextBlock {
                content: "Hello".to_string(),
                ..RichTextBlock::default()
            }),
        );
        assert!(validate(&block).is_empty());
    }

    #[test]
    fn test_validate_warns_on_unknown_type() {
        let block = Block::new(
            "b1",
            BlockContent::Unknown {
                type_name: "carousel".to_string(),
                fields: serde_json::Map::new(),
            },
        );
        let violations = validate(&block);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert_eq!(violations[0].field, "type");
    }
}
