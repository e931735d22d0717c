//! Quotation roll-up
//!
//! The roll-up is sequential and order-dependent: maintenance is computed
//! on the subtotal including implementation, and the tier discount on the
//! subtotal including maintenance and training. Reordering the steps
//! changes the total, so they must stay exactly as written.

use crate::rules::{CustomerTier, PricingRules};
use rfpmatch_core::{Catalog, Money};
use rfpmatch_matching::MatchCandidate;
use serde::Serialize;
use std::sync::Arc;

pub const IMPLEMENTATION_SKU: &str = "SERV-IMP";
pub const MAINTENANCE_SKU: &str = "MAINT-ANNUAL";
pub const TRAINING_SKU: &str = "TRAIN-ENTERPRISE";

/// One quoted line, either a catalog product or a synthetic service line
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PriceLineItem {
    pub sku: String,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub discount_percent: u32,
    /// `unit_price x quantity`, post-discount
    pub extended_price: Money,
    pub category: String,
}

/// The single tier discount applied to the full running subtotal
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TierDiscount {
    pub label: String,
    pub percent: u32,
    pub amount: Money,
}

/// Full output of one pricing run
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PricingResult {
    pub line_items: Vec<PriceLineItem>,
    pub subtotal: Money,
    pub tier_discount: TierDiscount,
    pub total: Money,
    pub payment_terms: String,
    pub validity: String,
    pub competitive_positioning: String,
    pub customer_tier: CustomerTier,
}

/// Rule-based pricing engine over the shared read-only catalog
pub struct PricingEngine {
    catalog: Arc<Catalog>,
    rules: PricingRules,
}

impl PricingEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            rules: PricingRules::default(),
        }
    }

    #[must_use]
    pub fn with_rules(mut self, rules: PricingRules) -> Self {
        self.rules = rules;
        self
    }

    /// Price the matched products for a customer tier.
    ///
    /// Zero matched products is valid: the implementation and maintenance
    /// lines compute on a zero product subtotal, training stays a fixed
    /// cost, and the result is still a well-formed quotation.
    pub fn calculate(&self, matches: &[MatchCandidate], tier: CustomerTier) -> PricingResult {
        let mut line_items = Vec::new();
        let mut subtotal = Money::ZERO;

        // 1. Group matches by SKU, first-seen order; quantity = occurrences
        let mut quantities: Vec<(&str, u32)> = Vec::new();
        for candidate in matches {
            match quantities
                .iter_mut()
                .find(|(sku, _)| *sku == candidate.sku.as_str())
            {
                Some((_, count)) => *count += 1,
                None => quantities.push((candidate.sku.as_str(), 1)),
            }
        }

        // 2. Product lines with volume discount
        for (sku, quantity) in quantities {
            let Some(product) = self.catalog.find_by_sku(sku) else {
                continue; // matches against SKUs no longer in the catalog are dropped
            };

            let discount = self.rules.volume_discount(quantity);
            let unit_price = product.base_price.percent(100 - discount);
            let extended_price = unit_price.times(quantity);

            line_items.push(PriceLineItem {
                sku: product.sku.clone(),
                name: product.name.clone(),
                quantity,
                unit_price,
                discount_percent: discount,
                extended_price,
                category: product.category.clone(),
            });

            subtotal += extended_price;
        }

        // 3. Implementation services: 25% of the product subtotal, billed
        //    as whole hours at the services rate
        let implementation_cost = subtotal.percent(self.rules.implementation_percent);
        let implementation_hours =
            implementation_cost.whole_units_of(self.rules.services_rate) as u32;
        line_items.push(PriceLineItem {
            sku: IMPLEMENTATION_SKU.to_string(),
            name: "Implementation & Deployment Services".to_string(),
            quantity: implementation_hours,
            unit_price: self.rules.services_rate,
            discount_percent: 0,
            extended_price: implementation_cost,
            category: "Services".to_string(),
        });
        subtotal += implementation_cost;

        // 4. Annual maintenance: 18% of the subtotal including implementation
        let maintenance_cost = subtotal.percent(self.rules.maintenance_percent);
        line_items.push(PriceLineItem {
            sku: MAINTENANCE_SKU.to_string(),
            name: "Annual Maintenance & Support (First Year)".to_string(),
            quantity: 1,
            unit_price: maintenance_cost,
            discount_percent: 0,
            extended_price: maintenance_cost,
            category: "Support".to_string(),
        });
        subtotal += maintenance_cost;

        // 5. Training: fixed hours at the services rate, discounted
        let training_cost = self
            .rules
            .services_rate
            .times(self.rules.training_hours)
            .percent(100 - self.rules.training_discount_percent);
        line_items.push(PriceLineItem {
            sku: TRAINING_SKU.to_string(),
            name: format!("Enterprise User Training ({} hours)", self.rules.training_hours),
            quantity: self.rules.training_hours,
            unit_price: self.rules.services_rate,
            discount_percent: self.rules.training_discount_percent,
            extended_price: training_cost,
            category: "Training".to_string(),
        });
        subtotal += training_cost;

        // 6. Tier discount on the full running subtotal
        let percent = tier.discount_percent();
        let amount = subtotal.percent(percent);
        let total = subtotal - amount;

        PricingResult {
            line_items,
            subtotal,
            tier_discount: TierDiscount {
                label: format!("{} Discount", tier.label()),
                percent,
                amount,
            },
            total,
            payment_terms: payment_terms(total).to_string(),
            validity: "90 days from proposal date".to_string(),
            competitive_positioning: competitive_positioning(total).to_string(),
            customer_tier: tier,
        }
    }
}

/// Payment terms by total-value bracket; the largest deals get the most
/// milestone-split terms.
fn payment_terms(total: Money) -> &'static str {
    if total > Money::from_major(10_000_000) {
        "30% advance, 40% on delivery, 30% after UAT"
    } else if total > Money::from_major(5_000_000) {
        "40% advance, 60% on delivery"
    } else {
        "50% advance, 50% on delivery"
    }
}

/// Market positioning label by total-value bracket
fn competitive_positioning(total: Money) -> &'static str {
    if total > Money::from_major(50_000_000) {
        "Premium enterprise solution with comprehensive support and customization"
    } else if total > Money::from_major(10_000_000) {
        "Competitively priced for large enterprise deployments with strong ROI"
    } else if total > Money::from_major(5_000_000) {
        "Value-optimized solution balancing features and cost for mid-market"
    } else {
        "Cost-effective solution for SME digital transformation"
    }
}
