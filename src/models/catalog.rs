// ABOUTME: Fixed configuration catalogs: personalities, product categories, visitor buckets, goals
// These are static tables injected into the relevant panels, decoupled from rendering.

use super::profile::Personality;

/// Catalog entry for a selectable assistant persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalityInfo {
    /// Stable key sent over the wire.
    pub key: &'static str,
    pub display_name: &'static str,
    /// Avatar image reference.
    pub image: &'static str,
    pub description: &'static str,
}

impl PersonalityInfo {
    /// Materialize the catalog entry as the wire/domain type.
    pub fn to_personality(&self) -> Personality {
        Personality {
            name: self.key.to_string(),
            display_name: self.display_name.to_string(),
            image: self.image.to_string(),
        }
    }
}

/// The fixed set of personas a store may enable (at most three at a time).
pub const PERSONALITY_CATALOG: &[PersonalityInfo] = &[
    PersonalityInfo {
        key: "TRUMP",
        display_name: "Donald Trump",
        image: "avatars/trump.webp",
        description: "Confident, direct businessman style",
    },
    PersonalityInfo {
        key: "MUSK",
        display_name: "Elon Musk",
        image: "avatars/musk.webp",
        description: "Innovative, direct communication style",
    },
    PersonalityInfo {
        key: "OBAMA",
        display_name: "Barack Obama",
        image: "avatars/obama.webp",
        description: "Measured, inspirational communication",
    },
    PersonalityInfo {
        key: "RONALDO",
        display_name: "Cristiano Ronaldo",
        image: "avatars/ronaldo.webp",
        description: "Motivational, performance-driven tone",
    },
    PersonalityInfo {
        key: "VITALIK",
        display_name: "Vitalik Buterin",
        image: "avatars/vitalik.webp",
        description: "Technical, blockchain-focused perspective",
    },
];

/// Look up a persona catalog entry by its wire key.
pub fn personality_by_key(key: &str) -> Option<&'static PersonalityInfo> {
    PERSONALITY_CATALOG.iter().find(|p| p.key == key)
}

/// One selectable product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductCategory {
    pub key: &'static str,
    pub label: &'static str,
}

/// Display grouping for the category picker.
#[derive(Debug, Clone, Copy)]
pub struct CategoryGroup {
    pub name: &'static str,
    pub items: &'static [ProductCategory],
}

/// Product categories grouped the way the onboarding picker presents them.
pub const PRODUCT_CATEGORY_GROUPS: &[CategoryGroup] = &[
    CategoryGroup {
        name: "Popular Categories",
        items: &[
            ProductCategory { key: "electronics", label: "Electronics" },
            ProductCategory { key: "apparel", label: "Apparel" },
            ProductCategory { key: "beauty", label: "Beauty & Skincare" },
            ProductCategory { key: "home", label: "Home & Garden" },
        ],
    },
    CategoryGroup {
        name: "Specialty Products",
        items: &[
            ProductCategory { key: "jewelry", label: "Jewelry" },
            ProductCategory { key: "medical", label: "Medical & Rx" },
            ProductCategory { key: "health", label: "Health & Wellness" },
            ProductCategory { key: "arts", label: "Arts & Crafts" },
        ],
    },
    CategoryGroup {
        name: "Other Categories",
        items: &[
            ProductCategory { key: "auto", label: "Auto" },
            ProductCategory { key: "baby", label: "Baby Products" },
            ProductCategory { key: "games", label: "Games & Media" },
            ProductCategory { key: "sports", label: "Sports Outdoor" },
            ProductCategory { key: "pets", label: "Products for Pets" },
            ProductCategory { key: "toys", label: "Toys" },
            ProductCategory { key: "food", label: "Food & Grocery" },
            ProductCategory { key: "books", label: "Books" },
            ProductCategory { key: "other", label: "Other" },
        ],
    },
];

/// Flat iterator over every product category across all display groups.
pub fn all_product_categories() -> impl Iterator<Item = &'static ProductCategory> {
    PRODUCT_CATEGORY_GROUPS.iter().flat_map(|g| g.items.iter())
}

/// Monthly-visitor buckets offered on the company step.
pub const VISITOR_BUCKETS: &[&str] = &[
    "Below 10,000",
    "10,000 - 25,000",
    "25,000 - 50,000",
    "50,000 - 100,000",
    "100,000 - 200,000",
    "Above 200,000",
];

/// A selectable primary goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalOption {
    pub value: &'static str,
    pub description: &'static str,
}

/// The two goals offered on the goal step.
pub const PRIMARY_GOALS: &[GoalOption] = &[
    GoalOption {
        value: "Increase sales",
        description: "Optimize your store to convert more visitors into paying customers",
    },
    GoalOption {
        value: "Reduce support tickets",
        description: "Streamline customer experience to minimize support requests",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lookup_by_key() {
        let musk = personality_by_key("MUSK").unwrap();
        assert_eq!(musk.display_name, "Elon Musk");
        assert!(personality_by_key("UNKNOWN").is_none());
    }

    #[test]
    fn seventeen_product_categories() {
        assert_eq!(all_product_categories().count(), 17);
    }

    #[test]
    fn category_keys_are_unique() {
        let mut keys: Vec<_> = all_product_categories().map(|c| c.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 17);
    }

    #[test]
    fn six_visitor_buckets_two_goals() {
        assert_eq!(VISITOR_BUCKETS.len(), 6);
        assert_eq!(PRIMARY_GOALS.len(), 2);
    }
}
