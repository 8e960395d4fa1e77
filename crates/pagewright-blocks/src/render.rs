//! Block Rendering
//!
//! Turns canonical blocks into HTML sections. Dispatch is an exhaustive
//! match over [`BlockContent`]; types without a view fall through to a
//! visible placeholder so editors notice them while authoring. A block with
//! missing optional fields renders without them rather than failing.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::block::{
    Block, BlockContent, ComparisonBlock, ContactFormBlock, Cta, FaqBlock, FeatureGridBlock,
    HeroBlock, LogoCloudBlock, MediaBlock, MediaKind, MetricsBlock, PriceTableBlock,
    TestimonialBlock,
};
use crate::normalize::{normalize_page, PlacedBlock};

/// Renderer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Render placeholders for unimplemented block types
    pub show_placeholders: bool,
    /// Base CSS class of every section
    pub section_class: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_placeholders: true,
            section_class: "pw-block".to_string(),
        }
    }
}

/// Renderer for block sequences
#[derive(Debug, Clone, Default)]
pub struct PageRenderer {
    options: RenderOptions,
}

/// Rendered block output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedBlock {
    /// Block ID
    pub block_id: String,
    /// Block type tag
    pub block_type: String,
    /// Rendered HTML section
    pub html: String,
    /// Whether this is a placeholder for an unimplemented type
    pub placeholder: bool,
}

/// Rendered page output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    /// Rendered sections, in page order
    pub blocks: Vec<RenderedBlock>,
    /// Stored records dropped as unrecoverable
    pub skipped: usize,
    /// Blocks hidden by their `visible` flag
    pub hidden: usize,
}

impl RenderedPage {
    /// Concatenated HTML of all sections
    #[must_use]
    pub fn html(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.html.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of placeholder sections
    #[must_use]
    pub fn placeholder_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.placeholder).count()
    }
}

impl PageRenderer {
    /// Create a renderer with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given settings
    #[must_use]
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Current settings
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Normalize, order and render a stored block list
    #[must_use]
    pub fn render_records(&self, records: &[Value]) -> RenderedPage {
        let placed = normalize_page(records);
        let mut page = self.render_page(&placed);
        page.skipped = records.len() - placed.len();
        page
    }

    /// Render normalized blocks in their placed order
    #[must_use]
    pub fn render_page(&self, placed: &[PlacedBlock]) -> RenderedPage {
        let blocks: Vec<Block> = placed.iter().map(|p| p.block.clone()).collect();
        self.render_blocks(&blocks)
    }

    /// Render blocks that are already in page order
    #[must_use]
    pub fn render_blocks(&self, blocks: &[Block]) -> RenderedPage {
        let mut page = RenderedPage::default();
        for block in blocks {
            if !block.visible {
                page.hidden += 1;
                continue;
            }
            let rendered = self.render_block(block);
            if rendered.placeholder && !self.options.show_placeholders {
                debug!(block_type = %rendered.block_type, "placeholder suppressed");
                continue;
            }
            page.blocks.push(rendered);
        }
        page
    }

    /// Render a single block, ignoring its `visible` flag
    #[must_use]
    pub fn render_block(&self, block: &Block) -> RenderedBlock {
        let body = match &block.content {
            BlockContent::Hero(hero) => render_hero(hero),
            BlockContent::FeatureGrid(grid) => render_feature_grid(grid),
            BlockContent::Testimonial(testimonial) => render_testimonial(testimonial),
            BlockContent::LogoCloud(cloud) => render_logo_cloud(cloud),
            BlockContent::Metrics(metrics) => render_metrics(metrics),
            BlockContent::RichText(rich) => {
                format!(r#"<div class="prose">{}</div>"#, render_markdown(&rich.content))
            }
            BlockContent::Faq(faq) => render_faq(faq),
            BlockContent::PriceTable(table) => render_price_table(table),
            BlockContent::Comparison(comparison) => render_comparison(comparison),
            BlockContent::ContactForm(form) => render_contact_form(form, block.id.as_str()),
            BlockContent::Media(media) => render_media(media),
            BlockContent::Unknown { type_name, .. } => {
                return self.placeholder(block, type_name);
            }
        };

        RenderedBlock {
            block_id: block.id.to_string(),
            block_type: block.type_name().to_string(),
            html: self.section(block, &body),
            placeholder: false,
        }
    }

    fn section(&self, block: &Block, body: &str) -> String {
        let base = &self.options.section_class;
        let mut classes = format!("{base} {base}--{}", block.type_name());
        if let Some(extra) = &block.class_name {
            classes.push(' ');
            classes.push_str(extra);
        }
        format!(
            r#"<section class="{}" data-block-id="{}">{}</section>"#,
            html_escape(&classes),
            html_escape(block.id.as_str()),
            body
        )
    }

    fn placeholder(&self, block: &Block, type_name: &str) -> RenderedBlock {
        let base = &self.options.section_class;
        RenderedBlock {
            block_id: block.id.to_string(),
            block_type: type_name.to_string(),
            html: format!(
                r#"<section class="{} {}--placeholder" data-block-id="{}" data-block-type="{}"><p>Block type "{}" is not implemented yet.</p></section>"#,
                html_escape(base),
                html_escape(base),
                html_escape(block.id.as_str()),
                html_escape(type_name),
                html_escape(type_name)
            ),
            placeholder: true,
        }
    }
}

/// Render Markdown to HTML
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Raw HTML shows as text; unsafe link targets are neutralized
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) if !is_safe_url(&dest_url) => Event::Start(Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

/// Escape HTML special characters
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Whether a stored URL may be emitted into `href` or `src`
///
/// Relative references pass, as do `http`, `https`, `mailto` and `tel`.
#[must_use]
pub fn is_safe_url(url: &str) -> bool {
    let url = url.trim();
    let scheme_end = url.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(index) if url[index..].starts_with(':') => {
            let scheme = url[..index].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto" | "tel")
        }
        _ => true,
    }
}

/// Escaped URL for an attribute, `#` when the scheme is not allowed
fn safe_url(url: &str) -> String {
    if is_safe_url(url) {
        html_escape(url)
    } else {
        debug!(url, "dropping unsafe URL");
        "#".to_string()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn push_heading(html: &mut String, eyebrow: &Option<String>, title: &Option<String>) {
    if let Some(eyebrow) = non_blank(eyebrow) {
        html.push_str(&format!(r#"<p class="eyebrow">{}</p>"#, html_escape(eyebrow)));
    }
    if let Some(title) = non_blank(title) {
        html.push_str(&format!("<h2>{}</h2>", html_escape(title)));
    }
}

fn push_subcopy(html: &mut String, subcopy: &Option<String>) {
    if let Some(subcopy) = non_blank(subcopy) {
        html.push_str(&format!(r#"<p class="subcopy">{}</p>"#, html_escape(subcopy)));
    }
}

fn cta_link(cta: &Option<Cta>, class: &str) -> Option<String> {
    let cta = cta.as_ref().filter(|c| !c.label.trim().is_empty())?;
    let href = if cta.href.is_empty() { "#" } else { &cta.href };
    Some(format!(
        r#"<a class="{}" href="{}">{}</a>"#,
        class,
        safe_url(href),
        html_escape(&cta.label)
    ))
}

fn render_hero(hero: &HeroBlock) -> String {
    let mut html = String::new();
    if let Some(eyebrow) = non_blank(&hero.eyebrow) {
        html.push_str(&format!(r#"<p class="eyebrow">{}</p>"#, html_escape(eyebrow)));
    }
    html.push_str(&format!("<h1>{}</h1>", html_escape(&hero.headline)));
    push_subcopy(&mut html, &hero.subcopy);

    let ctas: Vec<String> = [
        cta_link(&hero.primary_cta, "cta cta--primary"),
        cta_link(&hero.secondary_cta, "cta cta--secondary"),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !ctas.is_empty() {
        html.push_str(&format!(r#"<div class="actions">{}</div>"#, ctas.concat()));
    }

    if !hero.badges.is_empty() {
        html.push_str(r#"<ul class="badges">"#);
        for badge in &hero.badges {
            html.push_str(&format!("<li>{}</li>", html_escape(badge)));
        }
        html.push_str("</ul>");
    }
    if let Some(image) = non_blank(&hero.image) {
        html.push_str(&format!(
            r#"<img src="{}" alt="" class="hero-image" loading="eager" />"#,
            safe_url(image)
        ));
    }
    html
}

fn render_feature_grid(grid: &FeatureGridBlock) -> String {
    let mut html = String::new();
    push_heading(&mut html, &grid.eyebrow, &grid.title);
    push_subcopy(&mut html, &grid.subcopy);

    html.push_str(r#"<div class="grid">"#);
    for item in &grid.items {
        html.push_str(r#"<article class="feature">"#);
        if let Some(icon) = non_blank(&item.icon) {
            html.push_str(&format!(
                r#"<span class="icon" data-icon="{}"></span>"#,
                html_escape(icon)
            ));
        }
        html.push_str(&format!("<h3>{}</h3>", html_escape(&item.title)));
        if let Some(description) = non_blank(&item.description) {
            html.push_str(&format!("<p>{}</p>", html_escape(description)));
        }
        html.push_str("</article>");
    }
    html.push_str("</div>");
    html
}

fn render_testimonial(testimonial: &TestimonialBlock) -> String {
    let mut html = format!(
        "<figure><blockquote><p>{}</p></blockquote><figcaption>",
        html_escape(&testimonial.quote)
    );
    if let Some(avatar) = non_blank(&testimonial.avatar) {
        html.push_str(&format!(
            r#"<img src="{}" alt="{}" class="avatar" loading="lazy" />"#,
            safe_url(avatar),
            html_escape(&testimonial.author)
        ));
    }
    html.push_str(&format!(
        r#"<span class="author">{}</span>"#,
        html_escape(&testimonial.author)
    ));

    let affiliation: Vec<&str> = [non_blank(&testimonial.role), non_blank(&testimonial.company)]
        .into_iter()
        .flatten()
        .collect();
    if !affiliation.is_empty() {
        html.push_str(&format!(
            r#"<span class="affiliation">{}</span>"#,
            html_escape(&affiliation.join(", "))
        ));
    }
    html.push_str("</figcaption></figure>");
    html
}

fn render_logo_cloud(cloud: &LogoCloudBlock) -> String {
    let mut html = String::new();
    push_heading(&mut html, &None, &cloud.title);

    html.push_str(r#"<ul class="logos">"#);
    for brand in &cloud.brands {
        let inner = match non_blank(&brand.logo) {
            Some(logo) => format!(
                r#"<img src="{}" alt="{}" loading="lazy" />"#,
                safe_url(logo),
                html_escape(&brand.name)
            ),
            None => html_escape(&brand.name),
        };
        match non_blank(&brand.href) {
            Some(href) => html.push_str(&format!(
                r#"<li><a href="{}">{}</a></li>"#,
                safe_url(href),
                inner
            )),
            None => html.push_str(&format!("<li>{inner}</li>")),
        }
    }
    html.push_str("</ul>");
    html
}

fn render_metrics(metrics: &MetricsBlock) -> String {
    let mut html = String::new();
    push_heading(&mut html, &None, &metrics.title);

    html.push_str(r#"<dl class="metrics">"#);
    for metric in &metrics.items {
        html.push_str(&format!(
            r#"<div class="metric"><dt>{}</dt><dd>{}</dd></div>"#,
            html_escape(&metric.label),
            html_escape(&metric.value)
        ));
    }
    html.push_str("</dl>");
    html
}

fn render_faq(faq: &FaqBlock) -> String {
    let mut html = String::new();
    push_heading(&mut html, &None, &faq.title);

    for item in &faq.items {
        html.push_str(&format!(
            "<details><summary>{}</summary>{}</details>",
            html_escape(&item.question),
            render_markdown(&item.answer)
        ));
    }
    html
}

fn render_price_table(table: &PriceTableBlock) -> String {
    let mut html = String::new();
    push_heading(&mut html, &None, &table.title);
    push_subcopy(&mut html, &table.subcopy);

    html.push_str(r#"<div class="plans">"#);
    for plan in &table.items {
        let class = if plan.highlighted {
            "plan plan--highlighted"
        } else {
            "plan"
        };
        html.push_str(&format!(
            r#"<article class="{}"><h3>{}</h3><p class="price">{}"#,
            class,
            html_escape(&plan.name),
            html_escape(&plan.price)
        ));
        if let Some(period) = non_blank(&plan.period) {
            html.push_str(&format!(r#"<span class="period">/{}</span>"#, html_escape(period)));
        }
        html.push_str("</p>");
        if let Some(description) = non_blank(&plan.description) {
            html.push_str(&format!("<p>{}</p>", html_escape(description)));
        }
        if !plan.features.is_empty() {
            html.push_str("<ul>");
            for feature in &plan.features {
                html.push_str(&format!("<li>{}</li>", html_escape(feature)));
            }
            html.push_str("</ul>");
        }
        if let Some(link) = cta_link(&plan.cta, "cta") {
            html.push_str(&link);
        }
        html.push_str("</article>");
    }
    html.push_str("</div>");
    html
}

fn render_comparison(comparison: &ComparisonBlock) -> String {
    let mut html = String::new();
    push_heading(&mut html, &None, &comparison.title);

    html.push_str("<table><thead><tr><th></th>");
    for column in &comparison.columns {
        html.push_str(&format!("<th>{}</th>", html_escape(column)));
    }
    html.push_str("</tr></thead><tbody>");
    for row in &comparison.items {
        html.push_str(&format!("<tr><th>{}</th>", html_escape(&row.label)));
        // Short rows are padded so every column gets a cell
        for index in 0..comparison.columns.len().max(row.values.len()) {
            let cell = row.values.get(index).map_or("", String::as_str);
            html.push_str(&format!("<td>{}</td>", html_escape(cell)));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    html
}

fn render_contact_form(form: &ContactFormBlock, block_id: &str) -> String {
    let mut html = String::new();
    push_heading(&mut html, &None, &form.title);
    push_subcopy(&mut html, &form.subcopy);

    html.push_str(&format!(
        r#"<form method="post" data-form-id="{}">"#,
        html_escape(block_id)
    ));
    for field in &form.fields {
        let name = html_escape(&field.name);
        let required = if field.required { " required" } else { "" };
        let placeholder = non_blank(&field.placeholder)
            .map(|p| format!(r#" placeholder="{}""#, html_escape(p)))
            .unwrap_or_default();
        html.push_str(&format!(
            r#"<label for="{}-{}">{}</label>"#,
            html_escape(block_id),
            name,
            html_escape(&field.label)
        ));
        if field.input == "textarea" {
            html.push_str(&format!(
                r#"<textarea id="{}-{}" name="{}"{}{}></textarea>"#,
                html_escape(block_id),
                name,
                name,
                placeholder,
                required
            ));
        } else {
            let input = if field.input.is_empty() {
                "text"
            } else {
                &field.input
            };
            html.push_str(&format!(
                r#"<input id="{}-{}" name="{}" type="{}"{}{} />"#,
                html_escape(block_id),
                name,
                name,
                html_escape(input),
                placeholder,
                required
            ));
        }
    }
    let submit = form
        .cta
        .as_ref()
        .map(|c| c.label.trim())
        .filter(|label| !label.is_empty())
        .unwrap_or("Send");
    html.push_str(&format!(
        r#"<button type="submit">{}</button></form>"#,
        html_escape(submit)
    ));
    if let Some(message) = non_blank(&form.success_message) {
        html.push_str(&format!(
            r#"<p class="form-success" hidden>{}</p>"#,
            html_escape(message)
        ));
    }
    html
}

fn render_media(media: &MediaBlock) -> String {
    let mut html = String::new();
    push_heading(&mut html, &None, &media.title);

    html.push_str("<figure>");
    let alt = media.alt.as_deref().unwrap_or_default();
    match media.kind {
        MediaKind::Image => html.push_str(&format!(
            r#"<img src="{}" alt="{}" loading="lazy" />"#,
            safe_url(&media.url),
            html_escape(alt)
        )),
        MediaKind::Video => {
            let autoplay = if media.autoplay {
                " autoplay muted loop playsinline"
            } else {
                " controls"
            };
            html.push_str(&format!(
                r#"<video src="{}" aria-label="{}"{}></video>"#,
                safe_url(&media.url),
                html_escape(alt),
                autoplay
            ));
        }
    }
    if let Some(caption) = non_blank(&media.caption) {
        html.push_str(&format!("<figcaption>{}</figcaption>", html_escape(caption)));
    }
    html.push_str("</figure>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{RichTextBlock, TestimonialBlock};
    use crate::factory::create_block;
    use crate::schema::BlockKind;
    use serde_json::json;

    fn block(record: Value) -> Block {
        Block::try_from(record).unwrap()
    }

    #[test]
    fn test_render_markdown() {
        let html = render_markdown("# Hello\n\nWorld");
        assert!(html.contains("<h1>"));
        assert!(html.contains("World"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_every_kind_renders() {
        let renderer = PageRenderer::new();
        for kind in BlockKind::ALL {
            let rendered = renderer.render_block(&create_block(kind.as_str()));
            assert!(!rendered.placeholder, "{kind} rendered as placeholder");
            assert_eq!(rendered.block_type, kind.as_str());
            assert!(rendered.html.contains(&format!("pw-block--{}", kind.as_str())));
        }
    }

    #[test]
    fn test_hero_without_cta_omits_actions() {
        let renderer = PageRenderer::new();
        let rendered =
            renderer.render_block(&block(json!({"id": "h", "type": "hero", "headline": "Hi"})));
        assert!(rendered.html.contains("<h1>Hi</h1>"));
        assert!(!rendered.html.contains("actions"));
        assert!(!rendered.html.contains("eyebrow"));
    }

    #[test]
    fn test_markdown_raw_html_is_text() {
        let html = render_markdown("Hi <script>alert(1)</script>\n\n<iframe src=\"x\"></iframe>");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<iframe"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_markdown_unsafe_links_are_neutralized() {
        let html = render_markdown("[a](javascript:alert(1)) ![b](data:text/html,x) [c](/docs)");
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("data:"));
        assert!(html.contains(r#"href="/docs""#));
    }

    #[test]
    fn test_is_safe_url() {
        assert!(is_safe_url("/start"));
        assert!(is_safe_url("#contact"));
        assert!(is_safe_url("pricing?plan=pro"));
        assert!(is_safe_url("https://example.com/a:b"));
        assert!(is_safe_url("mailto:hi@example.com"));
        assert!(is_safe_url("TEL:+100"));
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("  JavaScript:alert(1)"));
        assert!(!is_safe_url("data:image/svg+xml,<svg/>"));
        assert!(!is_safe_url("vbscript:x"));
    }

    #[test]
    fn test_block_urls_are_checked() {
        let renderer = PageRenderer::new();
        let hero = renderer.render_block(&block(json!({
            "id": "h",
            "type": "hero",
            "headline": "Hi",
            "image": "javascript:alert(1)",
            "primaryCTA": {"label": "Go", "href": "javascript:alert(1)"}
        })));
        assert!(!hero.html.contains("javascript:"));
        assert!(hero.html.contains(r##"href="#""##));

        let media = renderer.render_block(&block(json!({
            "id": "m",
            "type": "media",
            "url": "data:text/html,x"
        })));
        assert!(!media.html.contains("data:"));

        let logos = renderer.render_block(&block(json!({
            "id": "l",
            "type": "logoCloud",
            "brands": [{"name": "Acme", "href": "https://acme.test", "logo": "vbscript:x"}]
        })));
        assert!(logos.html.contains(r#"href="https://acme.test""#));
        assert!(!logos.html.contains("vbscript:"));
    }

    #[test]
    fn test_hero_escapes_content() {
        let renderer = PageRenderer::new();
        let rendered = renderer.render_block(&block(json!({
            "id": "h",
            "type": "hero",
            "headline": "<b>Bold</b>",
            "primaryCTA": {"label": "Go", "href": "/start?a=1&b=2"}
        })));
        assert!(rendered.html.contains("&lt;b&gt;Bold&lt;/b&gt;"));
        assert!(rendered.html.contains(r#"href="/start?a=1&amp;b=2""#));
    }

    #[test]
    fn test_unknown_type_renders_placeholder() {
        let renderer = PageRenderer::new();
        let rendered = renderer.render_block(&block(json!({"id": "u", "type": "unregisteredXyz"})));
        assert!(rendered.placeholder);
        assert!(rendered.html.contains("unregisteredXyz"));
    }

    #[test]
    fn test_placeholders_can_be_suppressed() {
        let renderer = PageRenderer::with_options(RenderOptions {
            show_placeholders: false,
            ..RenderOptions::default()
        });
        let page = renderer.render_blocks(&[
            block(json!({"id": "u", "type": "carousel"})),
            block(json!({"id": "r", "type": "richText", "content": "Kept"})),
        ]);
        assert_eq!(page.blocks.len(), 1);
        assert_eq!(page.blocks[0].block_id, "r");
    }

    #[test]
    fn test_invisible_blocks_are_skipped() {
        let renderer = PageRenderer::new();
        let hidden = Block::new(
            "hidden",
            BlockContent::RichText(RichTextBlock {
                content: "secret".to_string(),
                ..RichTextBlock::default()
            }),
        )
        .with_visible(false);
        let page = renderer.render_blocks(&[hidden]);
        assert!(page.blocks.is_empty());
        assert_eq!(page.hidden, 1);
        assert!(!page.html().contains("secret"));
    }

    #[test]
    fn test_class_name_is_appended() {
        let renderer = PageRenderer::new();
        let rendered = renderer.render_block(
            &Block::new(
                "t",
                BlockContent::Testimonial(TestimonialBlock {
                    quote: "Great".to_string(),
                    author: "Ada".to_string(),
                    ..TestimonialBlock::default()
                }),
            )
            .with_class_name("bg-dark"),
        );
        assert!(rendered
            .html
            .contains(r#"class="pw-block pw-block--testimonial bg-dark""#));
        assert!(!rendered.html.contains("affiliation"));
    }

    #[test]
    fn test_comparison_pads_short_rows() {
        let renderer = PageRenderer::new();
        let rendered = renderer.render_block(&block(json!({
            "id": "c",
            "type": "comparison",
            "columns": ["A", "B", "C"],
            "items": [{"label": "Row", "values": ["1"]}]
        })));
        assert_eq!(rendered.html.matches("<td>").count(), 3);
    }

    #[test]
    fn test_render_records_orders_and_counts() {
        let renderer = PageRenderer::new();
        let page = renderer.render_records(&[
            json!({"id": "1", "type": "hero", "order": 1, "data": {"headline": "Welcome"}}),
            json!({"id": "2", "type": "hero", "order": 0, "data": {"headline": "First"}}),
            json!({"foo": "bar"}),
        ]);

        assert_eq!(page.skipped, 1);
        let ids: Vec<&str> = page.blocks.iter().map(|b| b.block_id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
        let html = page.html();
        assert!(html.find("First").unwrap() < html.find("Welcome").unwrap());
    }
}
