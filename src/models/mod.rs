// ABOUTME: Domain models for the merchant console: store profile, cues, personalities, catalogs

pub mod catalog;
pub mod profile;

pub use catalog::{
    all_product_categories, personality_by_key, CategoryGroup, GoalOption, PersonalityInfo,
    ProductCategory, PERSONALITY_CATALOG, PRIMARY_GOALS, PRODUCT_CATEGORY_GROUPS, VISITOR_BUCKETS,
};
pub use profile::{Cue, Personality, StoreProfile};
