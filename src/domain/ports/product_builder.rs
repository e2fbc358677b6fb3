//! Product builder port.

use rust_decimal::Decimal;

use crate::domain::models::CatalogProduct;

/// Step-wise construction of catalog products.
pub trait ProductBuilder {
    /// Discard all parts set so far.
    fn reset(&mut self);

    fn set_name(&mut self, name: &str);

    fn set_price(&mut self, price: Decimal);

    fn set_metadata(&mut self, key: &str, value: &str);

    /// Produce a product from the current parts and reset the builder.
    fn build(&mut self) -> CatalogProduct;
}
