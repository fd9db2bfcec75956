// ABOUTME: Storefront aggregator API boundary: client, wire types, and error taxonomy
// Every inconsistent response envelope is normalized here before panel logic sees it.

pub mod client;
pub mod error;
pub mod types;

pub use client::{StoreApi, StorefrontClient};
pub use error::ApiError;
pub use types::{Envelope, OnboardingReceipt, OnboardingSubmission, SellerRecord};
