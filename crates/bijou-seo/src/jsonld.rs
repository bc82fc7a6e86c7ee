//! Schema.org JSON-LD generators.
//!
//! Each function returns a `serde_json::Value` ready to be embedded with
//! [`script_tag`] as a `<script type="application/ld+json">` block.

use bijou_commerce::prelude::{Category, Product};
use serde_json::{json, Map, Value};

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Site-wide identity used by the Organization and WebSite schemas.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    /// Site/brand name.
    pub name: String,
    /// Canonical site URL.
    pub url: String,
    /// Logo URL.
    pub logo_url: Option<String>,
    /// Short description.
    pub description: Option<String>,
    /// Social profile URLs (sameAs).
    pub same_as: Vec<String>,
}

impl SiteInfo {
    /// Create site info with just name and URL.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            logo_url: None,
            description: None,
            same_as: Vec::new(),
        }
    }
}

/// Render a schema as an embeddable script tag.
///
/// `<` is escaped as a unicode sequence inside the JSON so content containing
/// `</script>` cannot terminate the block early.
pub fn script_tag(schema: &Value) -> String {
    let payload = schema.to_string().replace('<', "\\u003c");
    format!(
        "<script type=\"application/ld+json\">{}</script>",
        payload
    )
}

/// Organization schema.
pub fn organization(site: &SiteInfo) -> Value {
    let mut node = base_node("Organization");
    node.insert("name".to_string(), json!(site.name));
    node.insert("url".to_string(), json!(site.url));
    if let Some(logo) = &site.logo_url {
        node.insert("logo".to_string(), json!(logo));
    }
    if let Some(description) = &site.description {
        node.insert("description".to_string(), json!(description));
    }
    if !site.same_as.is_empty() {
        node.insert("sameAs".to_string(), json!(site.same_as));
    }
    Value::Object(node)
}

/// WebSite schema, with a SearchAction when the site exposes search.
pub fn web_site(site: &SiteInfo, search_url_template: Option<&str>) -> Value {
    let mut node = base_node("WebSite");
    node.insert("name".to_string(), json!(site.name));
    node.insert("url".to_string(), json!(site.url));
    if let Some(template) = search_url_template {
        node.insert(
            "potentialAction".to_string(),
            json!({
                "@type": "SearchAction",
                "target": template,
                "query-input": "required name=search_term_string",
            }),
        );
    }
    Value::Object(node)
}

/// Product schema with an Offer reflecting price and availability.
pub fn product(site: &SiteInfo, item: &Product, brand: Option<&str>, currency: &str) -> Value {
    let availability = if item.available {
        "https://schema.org/InStock"
    } else {
        "https://schema.org/OutOfStock"
    };
    let product_url = format!("{}/produits/{}", site.url.trim_end_matches('/'), item.slug);

    let mut node = base_node("Product");
    node.insert("name".to_string(), json!(item.name));
    node.insert("sku".to_string(), json!(item.sku));
    node.insert("url".to_string(), json!(product_url));
    if let Some(description) = item.short_description.as_ref().or(item.description.as_ref()) {
        node.insert("description".to_string(), json!(description));
    }
    if !item.images.is_empty() {
        node.insert("image".to_string(), json!(item.images));
    }
    if let Some(brand) = brand {
        node.insert(
            "brand".to_string(),
            json!({"@type": "Brand", "name": brand}),
        );
    }
    node.insert(
        "offers".to_string(),
        json!({
            "@type": "Offer",
            "url": product_url,
            "price": format!("{:.2}", item.price),
            "priceCurrency": currency,
            "availability": availability,
        }),
    );
    Value::Object(node)
}

/// CollectionPage schema for a category listing.
pub fn collection_page(site: &SiteInfo, category: &Category, products: &[Product]) -> Value {
    let base = site.url.trim_end_matches('/');
    let elements: Vec<Value> = products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "url": format!("{}/produits/{}", base, p.slug),
                "name": p.name,
            })
        })
        .collect();

    let mut node = base_node("CollectionPage");
    node.insert("name".to_string(), json!(category.name));
    node.insert(
        "url".to_string(),
        json!(format!("{}/categories/{}", base, category.slug)),
    );
    if let Some(description) = &category.description {
        node.insert("description".to_string(), json!(description));
    }
    node.insert(
        "mainEntity".to_string(),
        json!({
            "@type": "ItemList",
            "numberOfItems": products.len(),
            "itemListElement": elements,
        }),
    );
    Value::Object(node)
}

/// BreadcrumbList schema from (name, url) pairs, root first.
pub fn breadcrumbs(items: &[(String, String)]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, (name, url))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": url,
            })
        })
        .collect();

    let mut node = base_node("BreadcrumbList");
    node.insert("itemListElement".to_string(), json!(elements));
    Value::Object(node)
}

fn base_node(schema_type: &str) -> Map<String, Value> {
    let mut node = Map::new();
    node.insert("@context".to_string(), json!(SCHEMA_CONTEXT));
    node.insert("@type".to_string(), json!(schema_type));
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use bijou_commerce::ids::CategoryId;

    fn site() -> SiteInfo {
        SiteInfo::new("Bijou", "https://bijou.example")
    }

    fn sample_product() -> Product {
        let mut p = Product::new("BR-18K-01", "Bracelet Or 18K", "bracelet-or-18k");
        p.price = 1234.56;
        p.images.push("https://cdn.example.com/br.jpg".to_string());
        p
    }

    #[test]
    fn test_organization_schema() {
        let mut info = site();
        info.logo_url = Some("https://bijou.example/logo.png".to_string());
        let schema = organization(&info);

        assert_eq!(schema["@context"], "https://schema.org");
        assert_eq!(schema["@type"], "Organization");
        assert_eq!(schema["logo"], "https://bijou.example/logo.png");
    }

    #[test]
    fn test_web_site_search_action() {
        let schema = web_site(&site(), Some("https://bijou.example/recherche?q={search_term_string}"));
        assert_eq!(schema["potentialAction"]["@type"], "SearchAction");

        let plain = web_site(&site(), None);
        assert!(plain.get("potentialAction").is_none());
    }

    #[test]
    fn test_product_schema_availability() {
        let mut item = sample_product();
        let schema = product(&site(), &item, Some("Bijou"), "EUR");
        assert_eq!(schema["offers"]["availability"], "https://schema.org/InStock");
        assert_eq!(schema["offers"]["price"], "1234.56");
        assert_eq!(schema["brand"]["name"], "Bijou");

        item.available = false;
        let schema = product(&site(), &item, None, "EUR");
        assert_eq!(schema["offers"]["availability"], "https://schema.org/OutOfStock");
        assert!(schema.get("brand").is_none());
    }

    #[test]
    fn test_collection_page_lists_products() {
        let category = Category::new(CategoryId::new("bracelets"), "Bracelets", "bracelets");
        let schema = collection_page(&site(), &category, &[sample_product()]);

        assert_eq!(schema["@type"], "CollectionPage");
        assert_eq!(schema["mainEntity"]["numberOfItems"], 1);
        assert_eq!(
            schema["mainEntity"]["itemListElement"][0]["url"],
            "https://bijou.example/produits/bracelet-or-18k"
        );
    }

    #[test]
    fn test_breadcrumbs_positions() {
        let schema = breadcrumbs(&[
            ("Accueil".to_string(), "https://bijou.example/".to_string()),
            ("Bracelets".to_string(), "https://bijou.example/categories/bracelets".to_string()),
        ]);

        assert_eq!(schema["itemListElement"][0]["position"], 1);
        assert_eq!(schema["itemListElement"][1]["position"], 2);
        assert_eq!(schema["itemListElement"][1]["name"], "Bracelets");
    }

    #[test]
    fn test_script_tag_wrapping() {
        let tag = script_tag(&organization(&site()));
        assert!(tag.starts_with("<script type=\"application/ld+json\">"));
        assert!(tag.ends_with("</script>"));
        assert!(tag.contains("\"@type\":\"Organization\""));
    }

    #[test]
    fn test_script_tag_escapes_embedded_close_tag() {
        let mut item = sample_product();
        item.description = Some("Superbe bracelet</script><script>alert(1)".to_string());
        let tag = script_tag(&product(&site(), &item, None, "EUR"));

        // Only the wrapper's own closing tag survives.
        assert_eq!(tag.matches("</script>").count(), 1);
        assert!(tag.ends_with("</script>"));
        assert!(tag.contains("\\u003c/script>"));
    }
}
