//! Normalization helpers for raw backend values.

use serde_json::Value;

/// Coerce a raw price field (number or noisy string) to a plain number.
///
/// String prices are stripped down to digits and separators; the last
/// separator is taken as the decimal point, earlier ones as thousands
/// separators, so `"1 234,56 €"` becomes `1234.56`. Unparsable values
/// normalize to zero.
pub fn parse_price(raw: &Value) -> f64 {
    match raw {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(0.0),
        Value::String(s) => parse_price_str(s),
        _ => 0.0,
    }
}

fn parse_price_str(s: &str) -> f64 {
    let kept: Vec<char> = s
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();

    let decimal_at = kept
        .iter()
        .rposition(|c| matches!(c, '.' | ','));

    let mut normalized = String::with_capacity(kept.len());
    for (i, c) in kept.iter().enumerate() {
        match c {
            '.' | ',' => {
                if Some(i) == decimal_at {
                    normalized.push('.');
                }
            }
            _ => normalized.push(*c),
        }
    }

    normalized
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .unwrap_or(0.0)
}

/// Derive a URL slug from a display name.
///
/// Lowercases, folds diacritics to ASCII, collapses non-alphanumeric runs to
/// single hyphens, and trims leading/trailing hyphens.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match fold_diacritic(c) {
            Some(folded) => {
                for f in folded.chars() {
                    push_slug_char(&mut out, f);
                }
            }
            None => push_slug_char(&mut out, c),
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}

fn push_slug_char(out: &mut String, c: char) {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_alphanumeric() {
        out.push(c);
    } else if !out.is_empty() && !out.ends_with('-') {
        out.push('-');
    }
}

fn fold_diacritic(c: char) -> Option<&'static str> {
    Some(match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "a",
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => "e",
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => "i",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => "o",
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => "u",
        'ç' | 'Ç' => "c",
        'ñ' | 'Ñ' => "n",
        'ý' | 'ÿ' => "y",
        'æ' | 'Æ' => "ae",
        'œ' | 'Œ' => "oe",
        'ß' => "ss",
        _ => return None,
    })
}

/// Derive a slug from a product name, falling back to the SKU.
pub fn slug_for(name: Option<&str>, sku: &str) -> String {
    if let Some(name) = name {
        let slug = slugify(name);
        if !slug.is_empty() {
            return slug;
        }
    }
    slugify(sku)
}

/// Derive purchasability from raw availability signals.
///
/// First matching rule wins: explicitly inactive, explicitly out of stock,
/// then a known non-positive quantity; otherwise the product is available.
pub fn derive_availability(
    is_active: Option<bool>,
    stock_status: Option<&str>,
    quantity: Option<i64>,
) -> bool {
    if is_active == Some(false) {
        return false;
    }
    if let Some(status) = stock_status {
        if matches!(
            status.trim().to_ascii_lowercase().as_str(),
            "outofstock" | "out_of_stock" | "out-of-stock"
        ) {
            return false;
        }
    }
    if let Some(q) = quantity {
        if q <= 0 {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_price_numbers() {
        assert_eq!(parse_price(&json!(129.9)), 129.9);
        assert_eq!(parse_price(&json!(45)), 45.0);
    }

    #[test]
    fn test_parse_price_noisy_strings() {
        assert_eq!(parse_price(&json!("1 234,56 €")), 1234.56);
        assert_eq!(parse_price(&json!("€ 89,00")), 89.0);
        assert_eq!(parse_price(&json!("1.234,56")), 1234.56);
        assert_eq!(parse_price(&json!("129.90")), 129.9);
    }

    #[test]
    fn test_parse_price_unparsable_is_zero() {
        assert_eq!(parse_price(&json!("sur devis")), 0.0);
        assert_eq!(parse_price(&json!("")), 0.0);
        assert_eq!(parse_price(&json!(null)), 0.0);
        assert_eq!(parse_price(&json!({"amount": 10})), 0.0);
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Bracelet Or 18K"), "bracelet-or-18k");
    }

    #[test]
    fn test_slugify_diacritics_and_runs() {
        assert_eq!(slugify("Collier Émeraude & Saphir"), "collier-emeraude-saphir");
        assert_eq!(slugify("  Bague -- Cœur  "), "bague-coeur");
    }

    #[test]
    fn test_slugify_trims_hyphens() {
        assert_eq!(slugify("!!promo!!"), "promo");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn test_slug_for_falls_back_to_sku() {
        assert_eq!(slug_for(Some("Bracelet Or 18K"), "BR-18K-01"), "bracelet-or-18k");
        assert_eq!(slug_for(None, "BR-18K-01"), "br-18k-01");
        assert_eq!(slug_for(Some(""), "BR-18K-01"), "br-18k-01");
    }

    #[test]
    fn test_availability_priority() {
        // Explicitly inactive wins over positive stock.
        assert!(!derive_availability(Some(false), Some("instock"), Some(10)));
        // Explicit out-of-stock wins over positive quantity.
        assert!(!derive_availability(None, Some("outofstock"), Some(10)));
        // Non-positive quantity with no flags.
        assert!(!derive_availability(None, None, Some(0)));
        assert!(!derive_availability(None, None, Some(-3)));
        // Positive quantity with no negative flags.
        assert!(derive_availability(None, None, Some(5)));
        // No signals at all defaults to available.
        assert!(derive_availability(None, None, None));
    }
}
