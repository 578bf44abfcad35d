//! Furniture variants and their rendered layout.
//!
//! Furniture is immutable once built. Both variants share the same leading
//! fields (type, model, material, price, height) and append their own
//! dimensions, so a rendered line always starts the same way:
//!
//! ```text
//! Type: Table, Model: T1, Material: Wood, Price: 99.99, Height: 75, Length: 120, Width: 60, Area: 7200
//! Type: Chair, Model: C1, Material: Oak, Price: 49.50, Height: 45, Legs: 4
//! ```

use std::fmt;

use joinery_foundation::Decimal;

/// Which variant a piece of furniture is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FurnitureKind {
    /// A table.
    Table,
    /// A chair.
    Chair,
}

impl fmt::Display for FurnitureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "Table"),
            Self::Chair => write!(f, "Chair"),
        }
    }
}

/// A table with a rectangular top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    model: String,
    material: String,
    price: Decimal,
    height: Decimal,
    length: Decimal,
    width: Decimal,
}

impl Table {
    /// Creates a new table.
    #[must_use]
    pub fn new(
        model: impl Into<String>,
        material: impl Into<String>,
        price: Decimal,
        height: Decimal,
        length: Decimal,
        width: Decimal,
    ) -> Self {
        Self {
            model: model.into(),
            material: material.into(),
            price,
            height,
            length,
            width,
        }
    }

    /// Length of the top.
    #[must_use]
    pub const fn length(&self) -> Decimal {
        self.length
    }

    /// Width of the top.
    #[must_use]
    pub const fn width(&self) -> Decimal {
        self.width
    }

    /// Surface area of the top (`length * width`), saturating on overflow.
    #[must_use]
    pub fn area(&self) -> Decimal {
        self.length.saturating_mul(self.width)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_common(
            f,
            FurnitureKind::Table,
            &self.model,
            &self.material,
            self.price,
            self.height,
        )?;
        write!(
            f,
            ", Length: {}, Width: {}, Area: {}",
            self.length,
            self.width,
            self.area()
        )
    }
}

/// A chair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chair {
    model: String,
    material: String,
    price: Decimal,
    height: Decimal,
    legs: u32,
}

impl Chair {
    /// Creates a new chair.
    #[must_use]
    pub fn new(
        model: impl Into<String>,
        material: impl Into<String>,
        price: Decimal,
        height: Decimal,
        legs: u32,
    ) -> Self {
        Self {
            model: model.into(),
            material: material.into(),
            price,
            height,
            legs,
        }
    }

    /// Number of legs.
    #[must_use]
    pub const fn legs(&self) -> u32 {
        self.legs
    }
}

impl fmt::Display for Chair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_common(
            f,
            FurnitureKind::Chair,
            &self.model,
            &self.material,
            self.price,
            self.height,
        )?;
        write!(f, ", Legs: {}", self.legs)
    }
}

fn write_common(
    f: &mut fmt::Formatter<'_>,
    kind: FurnitureKind,
    model: &str,
    material: &str,
    price: Decimal,
    height: Decimal,
) -> fmt::Result {
    write!(
        f,
        "Type: {kind}, Model: {model}, Material: {material}, Price: {price}, Height: {height}"
    )
}

/// A piece of furniture, keyed by its model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Furniture {
    /// A table.
    Table(Table),
    /// A chair.
    Chair(Chair),
}

impl Furniture {
    /// The unique model identifier.
    #[must_use]
    pub fn model(&self) -> &str {
        match self {
            Self::Table(t) => &t.model,
            Self::Chair(c) => &c.model,
        }
    }

    /// The material it is made of.
    #[must_use]
    pub fn material(&self) -> &str {
        match self {
            Self::Table(t) => &t.material,
            Self::Chair(c) => &c.material,
        }
    }

    /// The price.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        match self {
            Self::Table(t) => t.price,
            Self::Chair(c) => c.price,
        }
    }

    /// The height.
    #[must_use]
    pub const fn height(&self) -> Decimal {
        match self {
            Self::Table(t) => t.height,
            Self::Chair(c) => c.height,
        }
    }

    /// Which variant this is.
    #[must_use]
    pub const fn kind(&self) -> FurnitureKind {
        match self {
            Self::Table(_) => FurnitureKind::Table,
            Self::Chair(_) => FurnitureKind::Chair,
        }
    }
}

impl fmt::Display for Furniture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table(t) => fmt::Display::fmt(t, f),
            Self::Chair(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl From<Table> for Furniture {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

impl From<Chair> for Furniture {
    fn from(chair: Chair) -> Self {
        Self::Chair(chair)
    }
}
