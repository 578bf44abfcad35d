//! Companies and their furniture membership.
//!
//! A company does not own furniture. It keeps an ordered list of model keys
//! pointing into the [`Store`]'s furniture map; lookups and catalog rendering
//! resolve those keys against the store.

use std::fmt::Write as _;

use im::Vector;

use crate::furniture::Furniture;
use crate::store::Store;

/// A furniture manufacturer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Company {
    name: String,
    registration_number: String,
    /// Member models in the order they were added. Duplicates allowed.
    members: Vector<String>,
}

impl Company {
    /// Creates a company with no furniture.
    #[must_use]
    pub fn new(name: impl Into<String>, registration_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registration_number: registration_number.into(),
            members: Vector::new(),
        }
    }

    /// The unique company name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The registration number.
    #[must_use]
    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    /// Appends a furniture reference. Adding the same model twice lists it twice.
    ///
    /// Only the store changes membership, so every member stays resolvable.
    pub(crate) fn add(&mut self, furniture: &Furniture) {
        self.members.push_back(furniture.model().to_string());
    }

    /// Removes the first reference to this furniture's model.
    ///
    /// Returns `false` (and changes nothing) if it was not a member.
    pub(crate) fn remove(&mut self, furniture: &Furniture) -> bool {
        match self.members.iter().position(|m| m == furniture.model()) {
            Some(index) => {
                self.members.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns true if the model is a member.
    #[must_use]
    pub fn contains(&self, model: &str) -> bool {
        self.members.iter().any(|m| m == model)
    }

    /// Finds a member by model, resolving it against the store.
    #[must_use]
    pub fn find<'s>(&self, model: &str, store: &'s Store) -> Option<&'s Furniture> {
        if self.contains(model) {
            store.furniture(model)
        } else {
            None
        }
    }

    /// Member models in insertion order.
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Number of member references.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the company lists no furniture.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Renders the catalog: a header line followed by one line per member.
    ///
    /// The header counts the entries actually listed.
    ///
    /// ```text
    /// Ikea - 123 - 2 furnitures
    /// Type: Table, Model: T1, ...
    /// Type: Chair, Model: C1, ...
    /// ```
    #[must_use]
    pub fn catalog(&self, store: &Store) -> String {
        let listed: Vec<&Furniture> = self
            .members()
            .filter_map(|model| store.furniture(model))
            .collect();

        let mut out = format!("{} - {} - ", self.name, self.registration_number);
        match listed.len() {
            0 => out.push_str("no furnitures"),
            1 => out.push_str("1 furniture"),
            n => {
                let _ = write!(out, "{n} furnitures");
            }
        }

        for furniture in listed {
            out.push('\n');
            let _ = write!(out, "{furniture}");
        }

        out
    }
}
