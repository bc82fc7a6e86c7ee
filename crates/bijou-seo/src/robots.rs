//! robots.txt generation.

/// Crawl rules for the storefront.
#[derive(Debug, Clone)]
pub struct RobotsConfig {
    /// User-agent the rules apply to.
    pub user_agent: String,
    /// Explicitly allowed paths.
    pub allow: Vec<String>,
    /// Disallowed paths.
    pub disallow: Vec<String>,
    /// Absolute sitemap URL.
    pub sitemap_url: Option<String>,
}

impl Default for RobotsConfig {
    /// Default rules: crawl the catalog, keep crawlers out of the private
    /// account, checkout, and company-administration areas.
    fn default() -> Self {
        Self {
            user_agent: "*".to_string(),
            allow: vec!["/".to_string()],
            disallow: vec![
                "/compte".to_string(),
                "/commande".to_string(),
                "/panier".to_string(),
                "/devis".to_string(),
                "/entreprise".to_string(),
                "/api/".to_string(),
            ],
            sitemap_url: None,
        }
    }
}

impl RobotsConfig {
    /// Set the sitemap URL.
    pub fn with_sitemap(mut self, url: impl Into<String>) -> Self {
        self.sitemap_url = Some(url.into());
        self
    }

    /// Render as robots.txt content.
    pub fn render(&self) -> String {
        let mut lines = vec![format!("User-agent: {}", self.user_agent)];
        for path in &self.allow {
            lines.push(format!("Allow: {}", path));
        }
        for path in &self.disallow {
            lines.push(format!("Disallow: {}", path));
        }
        if let Some(url) = &self.sitemap_url {
            lines.push(String::new());
            lines.push(format!("Sitemap: {}", url));
        }
        lines.push(String::new());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let robots = RobotsConfig::default().render();

        assert!(robots.starts_with("User-agent: *"));
        assert!(robots.contains("Allow: /"));
        assert!(robots.contains("Disallow: /compte"));
        assert!(robots.contains("Disallow: /panier"));
        assert!(!robots.contains("Sitemap:"));
    }

    #[test]
    fn test_sitemap_line() {
        let robots = RobotsConfig::default()
            .with_sitemap("https://bijou.example/sitemap.xml")
            .render();
        assert!(robots.contains("Sitemap: https://bijou.example/sitemap.xml"));
    }
}
