//! Price estimates for wall work, by painted area and quality tier.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Quality tier a quote is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Basic,
    Standard,
    Premium,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Basic => "basic",
            Tier::Standard => "standard",
            Tier::Premium => "premium",
        }
    }

    /// Price per square meter, in rubles.
    pub fn base_price(self) -> f64 {
        match self {
            Tier::Basic => 1500.0,
            Tier::Standard => 3500.0,
            Tier::Premium => 7000.0,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tier::Basic => "Простое художественное оформление",
            Tier::Standard => "Детализированная работа с элементами",
            Tier::Premium => "Премиальная работа с максимальной детализацией",
        }
    }
}

impl FromStr for Tier {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Tier::Basic),
            "standard" => Ok(Tier::Standard),
            "premium" => Ok(Tier::Premium),
            _ => Err(PricingError::InvalidTier),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    InvalidTier,
    InvalidArea,
}

impl std::fmt::Display for PricingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingError::InvalidTier => write!(f, "Invalid tier"),
            PricingError::InvalidArea => write!(f, "Invalid area"),
        }
    }
}

impl std::error::Error for PricingError {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub base_price_per_m2: f64,
    pub area: f64,
    pub subtotal: f64,
    /// Discount label in percent: 0, 5 or 10.
    pub discount: u8,
    pub total: f64,
    pub tier_description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub price: f64,
    pub breakdown: PriceBreakdown,
    pub tier: Tier,
    pub area: f64,
}

/// Volume discount for an area, as (percent label, multiplier).
/// Band edges belong to the lower band.
pub fn discount_for(area: f64) -> (u8, f64) {
    if area > 50.0 {
        (10, 0.9)
    } else if area > 20.0 {
        (5, 0.95)
    } else {
        (0, 1.0)
    }
}

/// Compute a quote. Zero area is a valid (free) quote; negative or
/// non-finite area, or an area too large to price, is rejected.
pub fn calculate(area: f64, tier: Tier) -> Result<PriceQuote, PricingError> {
    if !area.is_finite() || area < 0.0 {
        return Err(PricingError::InvalidArea);
    }
    // -0.0 passes the check above; echo it back as 0.
    let area = if area == 0.0 { 0.0 } else { area };

    let base = tier.base_price();
    let subtotal = base * area;
    if !subtotal.is_finite() {
        return Err(PricingError::InvalidArea);
    }
    let (discount, multiplier) = discount_for(area);
    let total = subtotal * multiplier;

    Ok(PriceQuote {
        price: total,
        breakdown: PriceBreakdown {
            base_price_per_m2: base,
            area,
            subtotal,
            discount,
            total,
            tier_description: tier.description(),
        },
        tier,
        area,
    })
}

/// Parse the tier label first, then price the area.
pub fn quote(area: f64, tier: &str) -> Result<PriceQuote, PricingError> {
    let tier: Tier = tier.parse()?;
    calculate(area, tier)
}
