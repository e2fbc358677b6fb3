//! Pricing strategies over product elements.

use rust_decimal::Decimal;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{PricingRule, ProductElement, CLEARANCE_TAG, DISCOUNT_PCT_KEY};

/// Apply the percentage discount from metadata, if any.
pub fn metadata_discount(element: &ProductElement) -> DomainResult<Decimal> {
    let price = apply_discount(element, element.price)?;
    Ok(price.round_dp(2))
}

/// Halve clearance items, then apply the metadata discount.
pub fn tag_rules(element: &ProductElement) -> DomainResult<Decimal> {
    let mut price = element.price;
    if element.has_tag(CLEARANCE_TAG) {
        price = price
            .checked_mul(Decimal::new(5, 1))
            .ok_or_else(|| overflow(element))?;
    }
    let price = apply_discount(element, price)?;
    Ok(price.round_dp(2))
}

/// Price an element with the selected rule.
pub fn price_with(rule: PricingRule, element: &ProductElement) -> DomainResult<Decimal> {
    match rule {
        PricingRule::Metadata => element.accept(metadata_discount),
        PricingRule::Tags => element.accept(tag_rules),
    }
}

fn apply_discount(element: &ProductElement, price: Decimal) -> DomainResult<Decimal> {
    let Some(raw) = element.metadata.get(DISCOUNT_PCT_KEY) else {
        return Ok(price);
    };

    let pct: Decimal = raw.trim().parse().map_err(|_| DomainError::InvalidMetadata {
        key: DISCOUNT_PCT_KEY.to_string(),
        value: raw.clone(),
    })?;

    if pct.is_zero() {
        return Ok(price);
    }
    pct.checked_div(Decimal::ONE_HUNDRED)
        .and_then(|fraction| Decimal::ONE.checked_sub(fraction))
        .and_then(|factor| price.checked_mul(factor))
        .ok_or_else(|| overflow(element))
}

fn overflow(element: &ProductElement) -> DomainError {
    DomainError::PriceOverflow {
        sku: element.sku.clone(),
    }
}
