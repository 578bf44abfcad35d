//! Success result lines.
//!
//! Failure lines are the `Display` form of
//! [`joinery_foundation::ErrorKind`]; together they form the full set of
//! result templates a test harness may assert on.

/// `Company <name> created`
#[must_use]
pub fn company_created(name: &str) -> String {
    format!("Company {name} created")
}

/// `Table <model> created`
#[must_use]
pub fn table_created(model: &str) -> String {
    format!("Table {model} created")
}

/// `Chair <model> created`
#[must_use]
pub fn chair_created(model: &str) -> String {
    format!("Chair {model} created")
}

/// `Furniture <model> added to company <company>`
#[must_use]
pub fn furniture_added(model: &str, company: &str) -> String {
    format!("Furniture {model} added to company {company}")
}

/// `Furniture <model> removed from company <company>`
#[must_use]
pub fn furniture_removed(model: &str, company: &str) -> String {
    format!("Furniture {model} removed from company {company}")
}
