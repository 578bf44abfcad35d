//! Entity construction.
//!
//! Factories build values from already-parsed primitives. They never look at
//! the store, so existence checks stay with the caller.

use joinery_foundation::Decimal;

use crate::company::Company;
use crate::furniture::{Chair, Furniture, Table};

/// Builds companies and furniture from primitive parameters.
pub trait EntityFactory {
    /// Builds a company with no furniture.
    fn create_company(&self, name: &str, registration_number: &str) -> Company;

    /// Builds a table.
    fn create_table(
        &self,
        model: &str,
        material: &str,
        price: Decimal,
        height: Decimal,
        length: Decimal,
        width: Decimal,
    ) -> Furniture;

    /// Builds a chair.
    fn create_chair(
        &self,
        model: &str,
        material: &str,
        price: Decimal,
        height: Decimal,
        legs: u32,
    ) -> Furniture;
}

/// The factory used unless another is supplied.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultFactory;

impl EntityFactory for DefaultFactory {
    fn create_company(&self, name: &str, registration_number: &str) -> Company {
        Company::new(name, registration_number)
    }

    fn create_table(
        &self,
        model: &str,
        material: &str,
        price: Decimal,
        height: Decimal,
        length: Decimal,
        width: Decimal,
    ) -> Furniture {
        Table::new(model, material, price, height, length, width).into()
    }

    fn create_chair(
        &self,
        model: &str,
        material: &str,
        price: Decimal,
        height: Decimal,
        legs: u32,
    ) -> Furniture {
        Chair::new(model, material, price, height, legs).into()
    }
}
