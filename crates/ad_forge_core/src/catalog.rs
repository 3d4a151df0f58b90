//! Static product catalog mapping assistant product names to backend SKUs.

/// Product names understood by the assistant paired with the SKU the forge
/// backend expects.
pub const PRODUCT_SKUS: &[(&str, &str)] = &[
    ("GalaxyS24Ultra", "PROD-S24ULTRA"),
    ("NeoQLED8KTV", "PROD-QN900D-TV"),
    ("BespokeAIWasher", "PROD-WW12T504DAB"),
];

/// Resolve the backend SKU for a product name. Matching is exact.
pub fn lookup_sku(product_name: &str) -> Option<&'static str> {
    PRODUCT_SKUS
        .iter()
        .find(|(name, _)| *name == product_name)
        .map(|(_, sku)| *sku)
}

pub fn known_products() -> impl Iterator<Item = &'static str> {
    PRODUCT_SKUS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_catalog_entry() {
        assert_eq!(lookup_sku("GalaxyS24Ultra"), Some("PROD-S24ULTRA"));
        assert_eq!(lookup_sku("NeoQLED8KTV"), Some("PROD-QN900D-TV"));
        assert_eq!(lookup_sku("BespokeAIWasher"), Some("PROD-WW12T504DAB"));
    }

    #[test]
    fn unknown_and_case_mismatched_names_do_not_resolve() {
        assert_eq!(lookup_sku("GalaxyZFold6"), None);
        assert_eq!(lookup_sku("galaxys24ultra"), None);
        assert_eq!(lookup_sku(""), None);
    }

    #[test]
    fn known_products_follow_catalog_order() {
        let names: Vec<_> = known_products().collect();
        assert_eq!(
            names,
            vec!["GalaxyS24Ultra", "NeoQLED8KTV", "BespokeAIWasher"]
        );
    }
}
