//! Catalog data - the fixed list of synthetic products

/// Placeholder images, cycled over the catalog with wraparound
pub const IMAGE_URLS: [&str; 10] = [
    "https://via.placeholder.com/150?text=Product+1",
    "https://via.placeholder.com/150?text=Product+2",
    "https://via.placeholder.com/150?text=Product+3",
    "https://via.placeholder.com/150?text=Product+4",
    "https://via.placeholder.com/150?text=Product+5",
    "https://via.placeholder.com/150?text=Product+6",
    "https://via.placeholder.com/150?text=Product+7",
    "https://via.placeholder.com/150?text=Product+8",
    "https://via.placeholder.com/150?text=Product+9",
    "https://via.placeholder.com/150?text=Product+10",
];

/// Number of items in the catalog
pub const CATALOG_SIZE: usize = 10;

/// Price step per catalog position, in dollars
const PRICE_STEP: usize = 5;

/// A synthetic product record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// Unique within the catalog
    pub id: String,
    pub title: String,
    /// Pre-formatted label, e.g. "$15"
    pub price: String,
    pub image: String,
}

impl CatalogItem {
    /// Build the item at 1-indexed `position`
    fn at(position: usize) -> Self {
        Self {
            id: position.to_string(),
            title: format!("Item {}", position),
            price: format!("${}", position * PRICE_STEP),
            image: IMAGE_URLS[(position - 1) % IMAGE_URLS.len()].to_string(),
        }
    }
}

/// Display fields of one item, handed to the detail screen by value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailParams {
    pub title: String,
    pub price: String,
    pub image: String,
}

impl From<&CatalogItem> for DetailParams {
    fn from(item: &CatalogItem) -> Self {
        Self {
            title: item.title.clone(),
            price: item.price.clone(),
            image: item.image.clone(),
        }
    }
}

/// Build the catalog
///
/// Pure function of the constants above: every call yields the same items
/// in the same order.
pub fn build_catalog() -> Vec<CatalogItem> {
    (1..=CATALOG_SIZE).map(CatalogItem::at).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_ten_items() {
        assert_eq!(build_catalog().len(), 10);
    }

    #[test]
    fn test_catalog_item_fields() {
        let items = build_catalog();
        for (index, item) in items.iter().enumerate() {
            let i = index + 1;
            assert_eq!(item.id, i.to_string());
            assert_eq!(item.title, format!("Item {}", i));
            assert_eq!(item.price, format!("${}", 5 * i));
            assert_eq!(item.image, IMAGE_URLS[(i - 1) % 10]);
        }
    }

    #[test]
    fn test_catalog_spot_values() {
        let items = build_catalog();
        assert_eq!(items[0].price, "$5");
        assert_eq!(items[9].title, "Item 10");
        assert_eq!(items[9].price, "$50");
        assert_eq!(
            items[9].image,
            "https://via.placeholder.com/150?text=Product+10"
        );
    }

    #[test]
    fn test_catalog_ids_unique() {
        let items = build_catalog();
        let mut ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_catalog_is_deterministic() {
        assert_eq!(build_catalog(), build_catalog());
    }

    #[test]
    fn test_detail_params_copy_display_fields() {
        let items = build_catalog();
        let params = DetailParams::from(&items[2]);
        assert_eq!(params.title, "Item 3");
        assert_eq!(params.price, "$15");
        assert_eq!(params.image, IMAGE_URLS[2]);
    }
}
