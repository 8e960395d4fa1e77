//! Block Factory
//!
//! Produces the block inserted when an editor drops a palette entry onto the
//! canvas. Every registered kind starts with placeholder copy in its required
//! fields so the new block is visible on the next render.

use serde_json::Map;
use tracing::warn;

use crate::block::{
    Block, BlockContent, BlockId, Brand, ComparisonBlock, ComparisonRow, ContactFormBlock, Cta,
    FaqBlock, FaqItem, FeatureGridBlock, FeatureItem, FormField, HeroBlock, LogoCloudBlock,
    MediaBlock, MediaKind, Metric, MetricsBlock, PricePlan, PriceTableBlock, RichTextBlock,
    TestimonialBlock,
};
use crate::schema::BlockKind;

/// Create a new block of the given type with a fresh ID
///
/// Unregistered types yield a bare block of that tag so the palette can
/// still insert it; the renderer shows it as a placeholder.
#[must_use]
pub fn create_block(type_name: &str) -> Block {
    let content = match type_name.parse::<BlockKind>() {
        Ok(kind) => default_content(kind),
        Err(_) => {
            warn!(block_type = type_name, "creating block of unregistered type");
            BlockContent::Unknown {
                type_name: type_name.to_string(),
                fields: Map::new(),
            }
        }
    };
    Block::new(BlockId::generate(), content)
}

/// Placeholder payload for a registered kind
#[must_use]
pub fn default_content(kind: BlockKind) -> BlockContent {
    match kind {
        BlockKind::Hero => BlockContent::Hero(HeroBlock {
            eyebrow: Some("New".to_string()),
            headline: "Your headline here".to_string(),
            subcopy: Some("Explain the value of your offer in one or two sentences.".to_string()),
            primary_cta: Some(Cta::new("Get started", "#contact")),
            ..HeroBlock::default()
        }),
        BlockKind::FeatureGrid => BlockContent::FeatureGrid(FeatureGridBlock {
            title: Some("Features".to_string()),
            items: (1..=3)
                .map(|n| FeatureItem {
                    title: format!("Feature {n}"),
                    description: Some("Describe this feature.".to_string()),
                    ..FeatureItem::default()
                })
                .collect(),
            ..FeatureGridBlock::default()
        }),
        BlockKind::Testimonial => BlockContent::Testimonial(TestimonialBlock {
            quote: "Working with this team changed how we ship.".to_string(),
            author: "Customer name".to_string(),
            role: Some("Role".to_string()),
            company: Some("Company".to_string()),
            avatar: None,
            ..TestimonialBlock::default()
        }),
        BlockKind::LogoCloud => BlockContent::LogoCloud(LogoCloudBlock {
            title: Some("Trusted by".to_string()),
            brands: (1..=3)
                .map(|n| Brand {
                    name: format!("Brand {n}"),
                    ..Brand::default()
                })
                .collect(),
            ..LogoCloudBlock::default()
        }),
        BlockKind::Metrics => BlockContent::Metrics(MetricsBlock {
            title: None,
            items: [("100+", "Projects"), ("98%", "Satisfaction"), ("24/7", "Support")]
                .into_iter()
                .map(|(value, label)| Metric {
                    value: value.to_string(),
                    label: label.to_string(),
                    ..Metric::default()
                })
                .collect(),
            ..MetricsBlock::default()
        }),
        BlockKind::RichText => BlockContent::RichText(RichTextBlock {
            content: "Start writing here.".to_string(),
            ..RichTextBlock::default()
        }),
        BlockKind::Faq => BlockContent::Faq(FaqBlock {
            title: Some("Frequently asked questions".to_string()),
            items: (1..=2)
                .map(|n| FaqItem {
                    question: format!("Question {n}?"),
                    answer: "Answer.".to_string(),
                    ..FaqItem::default()
                })
                .collect(),
            ..FaqBlock::default()
        }),
        BlockKind::PriceTable => BlockContent::PriceTable(PriceTableBlock {
            title: Some("Pricing".to_string()),
            subcopy: None,
            items: vec![
                PricePlan {
                    name: "Starter".to_string(),
                    price: "$0".to_string(),
                    period: Some("month".to_string()),
                    features: vec!["Feature A".to_string()],
                    cta: Some(Cta::new("Choose Starter", "#contact")),
                    ..PricePlan::default()
                },
                PricePlan {
                    name: "Pro".to_string(),
                    price: "$49".to_string(),
                    period: Some("month".to_string()),
                    features: vec!["Feature A".to_string(), "Feature B".to_string()],
                    cta: Some(Cta::new("Choose Pro", "#contact")),
                    highlighted: true,
                    ..PricePlan::default()
                },
            ],
            ..PriceTableBlock::default()
        }),
        BlockKind::Comparison => BlockContent::Comparison(ComparisonBlock {
            title: Some("Compare".to_string()),
            columns: vec!["Us".to_string(), "Them".to_string()],
            items: vec![
                ComparisonRow {
                    label: "Criterion 1".to_string(),
                    values: vec!["Yes".to_string(), "No".to_string()],
                    ..ComparisonRow::default()
                },
                ComparisonRow {
                    label: "Criterion 2".to_string(),
                    values: vec!["Yes".to_string(), "Partial".to_string()],
                    ..ComparisonRow::default()
                },
            ],
            ..ComparisonBlock::default()
        }),
        BlockKind::ContactForm => BlockContent::ContactForm(ContactFormBlock {
            title: Some("Get in touch".to_string()),
            subcopy: None,
            fields: vec![
                FormField::new("name", "Name", "text", true),
                FormField::new("email", "Email", "email", true),
                FormField::new("message", "Message", "textarea", false),
            ],
            cta: Some(Cta::new("Send", "")),
            success_message: Some("Thanks, we'll be in touch.".to_string()),
            ..ContactFormBlock::default()
        }),
        BlockKind::Media => BlockContent::Media(MediaBlock {
            title: Some("Showcase".to_string()),
            url: "https://placehold.co/1200x675".to_string(),
            alt: Some("Placeholder image".to_string()),
            kind: MediaKind::Image,
            ..MediaBlock::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::has_non_empty_content;
    use crate::schema::validate;
    use serde_json::Value;

    #[test]
    fn test_every_kind_satisfies_its_schema() {
        for kind in BlockKind::ALL {
            let block = create_block(kind.as_str());
            assert_eq!(block.kind(), Some(kind));
            assert!(block.visible);
            assert!(
                validate(&block).is_empty(),
                "{kind} default violates schema: {:?}",
                validate(&block)
            );
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let a = create_block("hero");
        let b = create_block("hero");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_feature_grid_has_three_items() {
        match create_block("featureGrid").content {
            BlockContent::FeatureGrid(grid) => assert_eq!(grid.items.len(), 3),
            other => panic!("Expected feature grid, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_count_as_content() {
        for kind in BlockKind::ALL {
            let record = Value::from(create_block(kind.as_str()));
            assert!(has_non_empty_content(&record), "{kind} default looks empty");
        }
    }

    #[test]
    fn test_unregistered_type_is_minimal() {
        let block = create_block("carousel");
        assert_eq!(block.type_name(), "carousel");
        assert!(block.kind().is_none());
        match block.content {
            BlockContent::Unknown { fields, .. } => assert!(fields.is_empty()),
            other => panic!("Expected unknown, got {other:?}"),
        }
    }
}
