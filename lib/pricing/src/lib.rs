//! # rfpmatch Pricing
//!
//! Rule-based quotation engine.
//!
//! Consumes the matched-product list from the matching engine, groups by
//! SKU, applies volume and customer-tier discounts, layers in
//! implementation, maintenance, and training service lines, and produces a
//! total with payment terms. All monetary math runs on fixed-point
//! [`rfpmatch_core::Money`] values.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rfpmatch_core::Catalog;
//! use rfpmatch_pricing::{CustomerTier, PricingEngine};
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(Catalog::load("data/product_catalog.json").unwrap());
//! let engine = PricingEngine::new(catalog);
//! let quote = engine.calculate(&[], CustomerTier::Sme);
//! println!("total: {}", quote.total);
//! ```

pub mod engine;
pub mod rules;

pub use engine::{
    PriceLineItem, PricingEngine, PricingResult, TierDiscount, IMPLEMENTATION_SKU,
    MAINTENANCE_SKU, TRAINING_SKU,
};
pub use rules::{CustomerTier, PricingRules, VolumeBreak};
