//! The in-memory store of companies and furniture.
//!
//! Both maps are persistent (`im`), so cloning a `Store` is O(1) and yields
//! an independent snapshot.

use im::HashMap;

use joinery_foundation::{Error, Result};

use crate::company::Company;
use crate::furniture::Furniture;

/// Name→company and model→furniture mappings.
///
/// Invariants: every company key equals that company's name; every furniture
/// key equals that furniture's model; every member model of every company is
/// a key in the furniture map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Store {
    companies: HashMap<String, Company>,
    furniture: HashMap<String, Furniture>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if a company with this name exists.
    #[must_use]
    pub fn contains_company(&self, name: &str) -> bool {
        self.companies.contains_key(name)
    }

    /// Returns true if furniture with this model exists.
    #[must_use]
    pub fn contains_furniture(&self, model: &str) -> bool {
        self.furniture.contains_key(model)
    }

    /// Registers a company under its name.
    ///
    /// # Errors
    ///
    /// Returns `CompanyExists` if the name is taken; the store is unchanged.
    pub fn insert_company(&mut self, company: Company) -> Result<()> {
        if self.contains_company(company.name()) {
            return Err(Error::company_exists(company.name()));
        }
        self.companies.insert(company.name().to_string(), company);
        Ok(())
    }

    /// Registers furniture under its model.
    ///
    /// # Errors
    ///
    /// Returns `FurnitureExists` if the model is taken; the store is unchanged.
    pub fn insert_furniture(&mut self, furniture: Furniture) -> Result<()> {
        if self.contains_furniture(furniture.model()) {
            return Err(Error::furniture_exists(furniture.model()));
        }
        self.furniture
            .insert(furniture.model().to_string(), furniture);
        Ok(())
    }

    /// Looks up a company by name.
    #[must_use]
    pub fn company(&self, name: &str) -> Option<&Company> {
        self.companies.get(name)
    }

    /// Looks up furniture by model.
    #[must_use]
    pub fn furniture(&self, model: &str) -> Option<&Furniture> {
        self.furniture.get(model)
    }

    /// Adds existing furniture to an existing company.
    ///
    /// # Errors
    ///
    /// Returns `CompanyNotFound` or `FurnitureNotFound`, checked in that order.
    pub fn attach(&mut self, company: &str, model: &str) -> Result<()> {
        let (company, furniture) = self.resolve(company, model)?;
        company.add(furniture);
        Ok(())
    }

    /// Removes furniture from a company.
    ///
    /// Returns whether a membership was actually removed; detaching a
    /// non-member is not an error.
    ///
    /// # Errors
    ///
    /// Returns `CompanyNotFound` or `FurnitureNotFound`, checked in that order.
    pub fn detach(&mut self, company: &str, model: &str) -> Result<bool> {
        let (company, furniture) = self.resolve(company, model)?;
        Ok(company.remove(furniture))
    }

    fn resolve(&mut self, company: &str, model: &str) -> Result<(&mut Company, &Furniture)> {
        let company = self
            .companies
            .get_mut(company)
            .ok_or_else(|| Error::company_not_found(company))?;
        let furniture = self
            .furniture
            .get(model)
            .ok_or_else(|| Error::furniture_not_found(model))?;
        Ok((company, furniture))
    }

    /// Number of registered companies.
    #[must_use]
    pub fn company_count(&self) -> usize {
        self.companies.len()
    }

    /// Number of registered furniture models.
    #[must_use]
    pub fn furniture_count(&self) -> usize {
        self.furniture.len()
    }

    /// Iterates over all companies in no particular order.
    pub fn companies(&self) -> impl Iterator<Item = &Company> {
        self.companies.values()
    }

    /// Iterates over all furniture in no particular order.
    pub fn all_furniture(&self) -> impl Iterator<Item = &Furniture> {
        self.furniture.values()
    }
}
