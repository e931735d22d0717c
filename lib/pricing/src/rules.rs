//! Pricing rule tables
//!
//! Discount percentages and service rates are policy constants, kept as
//! data so they can be tuned without touching the roll-up logic.

use rfpmatch_core::Money;
use serde::{Deserialize, Serialize};

/// Customer-size classification governing the final tier discount
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CustomerTier {
    /// Large corporations
    Enterprise,
    /// Medium businesses
    Midmarket,
    /// Small businesses
    Sme,
}

impl CustomerTier {
    #[must_use]
    pub fn discount_percent(self) -> u32 {
        match self {
            CustomerTier::Enterprise => 15,
            CustomerTier::Midmarket => 10,
            CustomerTier::Sme => 5,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CustomerTier::Enterprise => "Enterprise",
            CustomerTier::Midmarket => "Midmarket",
            CustomerTier::Sme => "Sme",
        }
    }
}

/// One step of the volume discount function
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VolumeBreak {
    pub min_units: u32,
    pub discount_percent: u32,
}

/// Full rule set for one pricing run
#[derive(Debug, Clone)]
pub struct PricingRules {
    /// Volume breaks in ascending `min_units` order; the highest threshold
    /// met wins
    pub volume_breaks: Vec<VolumeBreak>,
    /// Hourly rate for consulting services
    pub services_rate: Money,
    /// Implementation services as a percentage of the product subtotal
    pub implementation_percent: u32,
    /// Annual maintenance as a percentage of the running subtotal
    pub maintenance_percent: u32,
    /// Fixed training engagement size
    pub training_hours: u32,
    /// Discount applied to the training line
    pub training_discount_percent: u32,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            volume_breaks: vec![
                VolumeBreak { min_units: 5, discount_percent: 10 },
                VolumeBreak { min_units: 20, discount_percent: 20 },
                VolumeBreak { min_units: 50, discount_percent: 30 },
            ],
            services_rate: Money::from_major(25_000),
            implementation_percent: 25,
            maintenance_percent: 18,
            training_hours: 50,
            training_discount_percent: 30,
        }
    }
}

impl PricingRules {
    /// Volume discount for a quantity: the highest threshold met wins.
    #[must_use]
    pub fn volume_discount(&self, quantity: u32) -> u32 {
        self.volume_breaks
            .iter()
            .filter(|brk| quantity >= brk.min_units)
            .map(|brk| brk.discount_percent)
            .max()
            .unwrap_or(0)
    }
}
