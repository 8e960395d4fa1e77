//! Canonical Block Types
//!
//! A [`Block`] is the single in-memory shape of page content. Stored records
//! use the flat JSON form (`type`, `id`, `visible`, `className` and payload
//! fields side by side); the envelope form used by older page saves is only
//! ever seen by [`crate::normalize`].

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::schema::BlockKind;

/// Stable block identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Generate a fresh identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Borrow the identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A typed unit of page content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Block {
    /// Unique block ID, never reassigned
    pub id: BlockId,

    /// Hidden blocks stay in storage but are skipped at render
    pub visible: bool,

    /// Free-form styling hook
    pub class_name: Option<String>,

    /// Type tag and payload
    pub content: BlockContent,
}

impl Block {
    /// Create a visible block
    #[must_use]
    pub fn new(id: impl Into<BlockId>, content: BlockContent) -> Self {
        Self {
            id: id.into(),
            visible: true,
            class_name: None,
            content,
        }
    }

    /// Set the styling hook
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Hide or show the block
    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Stored type tag
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.content.type_name()
    }

    /// Registered kind, `None` for unknown types
    #[must_use]
    pub fn kind(&self) -> Option<BlockKind> {
        self.content.kind()
    }

    /// Flatten into the canonical stored record
    #[must_use]
    pub fn into_record(self) -> Map<String, Value> {
        let mut record = self.content.into_fields();
        record.insert("id".to_string(), Value::String(self.id.0));
        record.insert("visible".to_string(), Value::Bool(self.visible));
        if let Some(class_name) = self.class_name {
            record.insert("className".to_string(), Value::String(class_name));
        }
        record
    }
}

/// Keys owned by [`Block`] or the sequence rather than by the payload
const IDENTITY_KEYS: [&str; 5] = ["id", "type", "visible", "className", "order"];

impl TryFrom<Value> for Block {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        let Value::Object(mut record) = value else {
            return Err(Error::invalid_block("block record is not an object"));
        };

        let type_name = match record.remove("type") {
            Some(Value::String(s)) if !s.is_empty() => s,
            _ => return Err(Error::invalid_block("missing type")),
        };
        let id = match record.remove("id") {
            Some(Value::String(s)) if !s.is_empty() => BlockId(s),
            Some(Value::Number(n)) => BlockId(n.to_string()),
            _ => return Err(Error::invalid_block(format!("{type_name} block without id"))),
        };
        let visible = record
            .remove("visible")
            .and_then(|v| v.as_bool())
            .unwrap_or(true);
        let class_name = match record.remove("className") {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        };

        // Position belongs to the sequence, not the block
        record.remove("order");
        // Older saves store unset optionals as explicit nulls
        record.retain(|_, v| !v.is_null());

        let content = BlockContent::from_fields(type_name, record);
        Ok(Self {
            id,
            visible,
            class_name,
            content,
        })
    }
}

impl From<Block> for Value {
    fn from(block: Block) -> Self {
        Value::Object(block.into_record())
    }
}

/// Block payload, one variant per registered kind
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    /// Hero banner
    Hero(HeroBlock),
    /// Feature grid
    FeatureGrid(FeatureGridBlock),
    /// Testimonial
    Testimonial(TestimonialBlock),
    /// Logo cloud
    LogoCloud(LogoCloudBlock),
    /// Metrics
    Metrics(MetricsBlock),
    /// Rich text
    RichText(RichTextBlock),
    /// FAQ
    Faq(FaqBlock),
    /// Price table
    PriceTable(PriceTableBlock),
    /// Comparison matrix
    Comparison(ComparisonBlock),
    /// Contact form
    ContactForm(ContactFormBlock),
    /// Media
    Media(MediaBlock),
    /// Type stored before its view shipped; fields are kept verbatim
    Unknown {
        /// Stored type tag
        type_name: String,
        /// Payload fields
        fields: Map<String, Value>,
    },
}

impl BlockContent {
    /// Stored type tag
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Unknown { type_name, .. } => type_name,
            known => known.kind().map_or("", |kind| kind.as_str()),
        }
    }

    /// Registered kind, `None` for [`BlockContent::Unknown`]
    #[must_use]
    pub fn kind(&self) -> Option<BlockKind> {
        Some(match self {
            Self::Hero(_) => BlockKind::Hero,
            Self::FeatureGrid(_) => BlockKind::FeatureGrid,
            Self::Testimonial(_) => BlockKind::Testimonial,
            Self::LogoCloud(_) => BlockKind::LogoCloud,
            Self::Metrics(_) => BlockKind::Metrics,
            Self::RichText(_) => BlockKind::RichText,
            Self::Faq(_) => BlockKind::Faq,
            Self::PriceTable(_) => BlockKind::PriceTable,
            Self::Comparison(_) => BlockKind::Comparison,
            Self::ContactForm(_) => BlockKind::ContactForm,
            Self::Media(_) => BlockKind::Media,
            Self::Unknown { .. } => return None,
        })
    }

    /// Build a payload from stored fields (identity keys already removed)
    ///
    /// Fields whose stored shape does not fit the typed payload are kept
    /// verbatim in the payload's `extra` map, so a drifted record still
    /// renders what it can and is written back unchanged.
    #[must_use]
    pub fn from_fields(type_name: String, fields: Map<String, Value>) -> Self {
        let Ok(kind) = type_name.parse::<BlockKind>() else {
            return Self::Unknown { type_name, fields };
        };
        match kind {
            BlockKind::Hero => Self::Hero(lenient_payload(kind, fields)),
            BlockKind::FeatureGrid => Self::FeatureGrid(lenient_payload(kind, fields)),
            BlockKind::Testimonial => Self::Testimonial(lenient_payload(kind, fields)),
            BlockKind::LogoCloud => Self::LogoCloud(lenient_payload(kind, fields)),
            BlockKind::Metrics => Self::Metrics(lenient_payload(kind, fields)),
            BlockKind::RichText => Self::RichText(lenient_payload(kind, fields)),
            BlockKind::Faq => Self::Faq(lenient_payload(kind, fields)),
            BlockKind::PriceTable => Self::PriceTable(lenient_payload(kind, fields)),
            BlockKind::Comparison => Self::Comparison(lenient_payload(kind, fields)),
            BlockKind::ContactForm => Self::ContactForm(lenient_payload(kind, fields)),
            BlockKind::Media => Self::Media(lenient_payload(kind, fields)),
        }
    }

    /// Build a payload, rejecting fields whose shape does not fit the type
    pub fn from_fields_strict(type_name: String, fields: Map<String, Value>) -> Result<Self> {
        let Ok(kind) = type_name.parse::<BlockKind>() else {
            return Ok(Self::Unknown { type_name, fields });
        };

        let value = Value::Object(fields);
        Ok(match kind {
            BlockKind::Hero => Self::Hero(payload(kind, value)?),
            BlockKind::FeatureGrid => Self::FeatureGrid(payload(kind, value)?),
            BlockKind::Testimonial => Self::Testimonial(payload(kind, value)?),
            BlockKind::LogoCloud => Self::LogoCloud(payload(kind, value)?),
            BlockKind::Metrics => Self::Metrics(payload(kind, value)?),
            BlockKind::RichText => Self::RichText(payload(kind, value)?),
            BlockKind::Faq => Self::Faq(payload(kind, value)?),
            BlockKind::PriceTable => Self::PriceTable(payload(kind, value)?),
            BlockKind::Comparison => Self::Comparison(payload(kind, value)?),
            BlockKind::ContactForm => Self::ContactForm(payload(kind, value)?),
            BlockKind::Media => Self::Media(payload(kind, value)?),
        })
    }

    /// Flatten into stored fields, including `type`
    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        let type_name = self.type_name().to_string();
        let mut fields = match self {
            Self::Hero(p) => object(&p),
            Self::FeatureGrid(p) => object(&p),
            Self::Testimonial(p) => object(&p),
            Self::LogoCloud(p) => object(&p),
            Self::Metrics(p) => object(&p),
            Self::RichText(p) => object(&p),
            Self::Faq(p) => object(&p),
            Self::PriceTable(p) => object(&p),
            Self::Comparison(p) => object(&p),
            Self::ContactForm(p) => object(&p),
            Self::Media(p) => object(&p),
            Self::Unknown { mut fields, .. } => {
                for key in IDENTITY_KEYS {
                    fields.remove(key);
                }
                fields
            }
        };
        fields.insert("type".to_string(), Value::String(type_name));
        fields
    }
}

/// Typed payload with a catch-all for unmodelled fields
trait Payload: DeserializeOwned + Default {
    fn extra_mut(&mut self) -> &mut Map<String, Value>;
}

macro_rules! impl_payload {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Payload for $ty {
                fn extra_mut(&mut self) -> &mut Map<String, Value> {
                    &mut self.extra
                }
            }
        )*
    };
}

impl_payload!(
    HeroBlock,
    FeatureGridBlock,
    TestimonialBlock,
    LogoCloudBlock,
    MetricsBlock,
    RichTextBlock,
    FaqBlock,
    PriceTableBlock,
    ComparisonBlock,
    ContactFormBlock,
    MediaBlock,
);

fn payload<T: DeserializeOwned>(kind: BlockKind, value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::invalid_block(format!("{kind}: {e}")))
}

/// Deserialize field by field, keeping every field that does not fit
fn lenient_payload<T: Payload>(kind: BlockKind, fields: Map<String, Value>) -> T {
    let error = match serde_json::from_value::<T>(Value::Object(fields.clone())) {
        Ok(payload) => return payload,
        Err(e) => e,
    };

    let mut accepted = Map::new();
    let mut kept = Map::new();
    for (key, value) in fields {
        let mut trial = accepted.clone();
        trial.insert(key.clone(), value.clone());
        if serde_json::from_value::<T>(Value::Object(trial)).is_ok() {
            accepted.insert(key, value);
        } else {
            kept.insert(key, value);
        }
    }
    warn!(
        block_type = %kind,
        fields = ?kept.keys().collect::<Vec<_>>(),
        error = %error,
        "keeping mismatched block fields verbatim"
    );

    let mut payload = match serde_json::from_value::<T>(Value::Object(accepted.clone())) {
        Ok(payload) => payload,
        Err(_) => {
            kept.extend(accepted);
            T::default()
        }
    };
    // Kept fields are serialized after the typed ones and win on save
    payload.extra_mut().extend(kept);
    payload
}

fn object<T: Serialize>(payload: &T) -> Map<String, Value> {
    match serde_json::to_value(payload) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Accept numbers and booleans where a display string is expected
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

fn is_false(value: &bool) -> bool {
    !*value
}

// ============================================================================
// Shared payload parts
// ============================================================================

/// Call to action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cta {
    /// Button label
    pub label: String,
    /// Link target
    pub href: String,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cta {
    /// Create a call to action
    #[must_use]
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            extra: Map::new(),
        }
    }
}

// ============================================================================
// Payloads
// ============================================================================

/// Hero banner payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroBlock {
    /// Small line above the headline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    /// Main headline
    pub headline: String,
    /// Supporting copy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcopy: Option<String>,
    /// Primary call to action
    #[serde(rename = "primaryCTA", skip_serializing_if = "Option::is_none")]
    pub primary_cta: Option<Cta>,
    /// Secondary call to action
    #[serde(rename = "secondaryCTA", skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<Cta>,
    /// Short trust badges
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
    /// Background or side image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One feature card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    /// Card title
    pub title: String,
    /// Card body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Icon name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Feature grid payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureGridBlock {
    /// Small line above the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    /// Section title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Supporting copy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcopy: Option<String>,
    /// Feature cards
    pub items: Vec<FeatureItem>,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Testimonial payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialBlock {
    /// Quote text
    pub quote: String,
    /// Person quoted
    pub author: String,
    /// Job title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Company name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Portrait URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One logo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    /// Brand name, used as alt text
    pub name: String,
    /// Logo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Link target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Logo cloud payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoCloudBlock {
    /// Section title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Logos
    pub brands: Vec<Brand>,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One key figure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metric {
    /// Figure as displayed ("99.9%", "24/7")
    #[serde(deserialize_with = "lenient_string")]
    pub value: String,
    /// What the figure measures
    pub label: String,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Metrics payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsBlock {
    /// Section title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Figures
    pub items: Vec<Metric>,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Rich text payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RichTextBlock {
    /// Markdown source
    pub content: String,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One FAQ entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    /// Question
    pub question: String,
    /// Answer, Markdown
    pub answer: String,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// FAQ payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqBlock {
    /// Section title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Entries
    pub items: Vec<FaqItem>,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One pricing plan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricePlan {
    /// Plan name
    pub name: String,
    /// Price as displayed
    #[serde(deserialize_with = "lenient_string")]
    pub price: String,
    /// Billing period ("month", "project")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// Short pitch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Included features
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    /// Signup call to action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<Cta>,
    /// Visually emphasised plan
    #[serde(skip_serializing_if = "is_false")]
    pub highlighted: bool,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Price table payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTableBlock {
    /// Section title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Supporting copy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcopy: Option<String>,
    /// Plans
    pub items: Vec<PricePlan>,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One comparison row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonRow {
    /// Row label
    pub label: String,
    /// One cell per column
    pub values: Vec<String>,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Comparison payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonBlock {
    /// Section title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Column headers
    pub columns: Vec<String>,
    /// Rows
    pub items: Vec<ComparisonRow>,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One form input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormField {
    /// Submitted field name
    pub name: String,
    /// Visible label
    pub label: String,
    /// HTML input type; `textarea` renders a text area
    pub input: String,
    /// Whether the field must be filled in
    #[serde(skip_serializing_if = "is_false")]
    pub required: bool,
    /// Placeholder text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FormField {
    /// Create a form field
    #[must_use]
    pub fn new(name: &str, label: &str, input: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            input: input.to_string(),
            required,
            placeholder: None,
            extra: Map::new(),
        }
    }
}

/// Contact form payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactFormBlock {
    /// Section title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Supporting copy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcopy: Option<String>,
    /// Inputs
    pub fields: Vec<FormField>,
    /// Submit button
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<Cta>,
    /// Message shown once a lead is captured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_message: Option<String>,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Media kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Still image
    #[default]
    Image,
    /// Video file
    Video,
}

/// Media payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaBlock {
    /// Heading above the asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Asset URL
    pub url: String,
    /// Alternative text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Caption under the asset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Image or video
    pub kind: MediaKind,
    /// Autoplay videos (muted)
    #[serde(skip_serializing_if = "is_false")]
    pub autoplay: bool,
    /// Stored fields not modelled above, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
