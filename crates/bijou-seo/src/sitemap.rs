//! sitemap.xml generation.
//!
//! Combines the static storefront routes with the dynamic product and
//! category URLs, each with its crawl priority.

use bijou_commerce::prelude::{Category, Product};
use chrono::{DateTime, NaiveDate, Utc};

/// Change frequency hint for crawlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

/// One sitemap URL entry.
#[derive(Debug, Clone)]
pub struct UrlEntry {
    /// Absolute URL.
    pub loc: String,
    /// Last modification date.
    pub lastmod: Option<NaiveDate>,
    /// Change frequency hint.
    pub changefreq: Option<ChangeFreq>,
    /// Crawl priority (0.0 - 1.0).
    pub priority: Option<f32>,
}

impl UrlEntry {
    /// Create an entry with just a location.
    pub fn new(loc: impl Into<String>) -> Self {
        Self {
            loc: loc.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }

    /// Set the crawl priority.
    pub fn with_priority(mut self, priority: f32) -> Self {
        self.priority = Some(priority.clamp(0.0, 1.0));
        self
    }

    /// Set the change frequency.
    pub fn with_changefreq(mut self, freq: ChangeFreq) -> Self {
        self.changefreq = Some(freq);
        self
    }

    /// Set the last modification date.
    pub fn with_lastmod(mut self, date: NaiveDate) -> Self {
        self.lastmod = Some(date);
        self
    }
}

/// A sitemap under construction.
#[derive(Debug, Clone)]
pub struct Sitemap {
    base_url: String,
    entries: Vec<UrlEntry>,
}

impl Sitemap {
    /// Create an empty sitemap for a site.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            entries: Vec::new(),
        }
    }

    /// Add a prepared entry.
    pub fn add(&mut self, entry: UrlEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    /// Add a static route by path.
    pub fn add_static(&mut self, path: &str, priority: f32) -> &mut Self {
        let entry = UrlEntry::new(format!("{}{}", self.base_url, path))
            .with_priority(priority)
            .with_changefreq(ChangeFreq::Weekly);
        self.add(entry)
    }

    /// Add a product page.
    pub fn add_product(&mut self, product: &Product) -> &mut Self {
        let mut entry = UrlEntry::new(format!("{}/produits/{}", self.base_url, product.slug))
            .with_priority(0.8)
            .with_changefreq(ChangeFreq::Daily);
        if let Some(date) = date_from_timestamp(product.updated_at) {
            entry = entry.with_lastmod(date);
        }
        self.add(entry)
    }

    /// Add a category listing page.
    pub fn add_category(&mut self, category: &Category) -> &mut Self {
        let entry = UrlEntry::new(format!("{}/categories/{}", self.base_url, category.slug))
            .with_priority(0.6)
            .with_changefreq(ChangeFreq::Weekly);
        self.add(entry)
    }

    /// Number of entries so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sitemap has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as sitemap.xml content.
    pub fn render(&self) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
        for entry in &self.entries {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(&entry.loc)));
            if let Some(date) = entry.lastmod {
                xml.push_str(&format!("    <lastmod>{}</lastmod>\n", date.format("%Y-%m-%d")));
            }
            if let Some(freq) = entry.changefreq {
                xml.push_str(&format!("    <changefreq>{}</changefreq>\n", freq.as_str()));
            }
            if let Some(priority) = entry.priority {
                xml.push_str(&format!("    <priority>{:.1}</priority>\n", priority));
            }
            xml.push_str("  </url>\n");
        }
        xml.push_str("</urlset>\n");
        xml
    }
}

fn date_from_timestamp(unix_seconds: i64) -> Option<NaiveDate> {
    if unix_seconds <= 0 {
        return None;
    }
    DateTime::<Utc>::from_timestamp(unix_seconds, 0).map(|dt| dt.date_naive())
}

fn xml_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
