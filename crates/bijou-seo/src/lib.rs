//! SEO artifacts for the Bijou storefront.
//!
//! Emits the crawler-facing outputs the pages embed or serve: Schema.org
//! JSON-LD blocks, `robots.txt`, and `sitemap.xml`.

pub mod jsonld;
pub mod robots;
pub mod sitemap;

pub use jsonld::{script_tag, SiteInfo};
pub use robots::RobotsConfig;
pub use sitemap::{ChangeFreq, Sitemap, UrlEntry};
