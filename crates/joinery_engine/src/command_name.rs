//! The fixed set of command names the engine dispatches on.

use std::fmt;
use std::str::FromStr;

use joinery_foundation::Error;

/// A recognized command name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandName {
    /// `CreateCompany <name> <registrationNumber>`
    CreateCompany,
    /// `AddFurnitureToCompany <company> <model>`
    AddFurnitureToCompany,
    /// `RemoveFurnitureFromCompany <company> <model>`
    RemoveFurnitureFromCompany,
    /// `FindFurnitureFromCompany <company> <model>`
    FindFurnitureFromCompany,
    /// `ShowCompanyCatalog <company>`
    ShowCompanyCatalog,
    /// `CreateTable <model> <material> <price> <height> <length> <width>`
    CreateTable,
    /// `CreateChair <model> <material> <price> <height> <legs>`
    CreateChair,
}

impl CommandName {
    /// Every command name, in documentation order.
    pub const ALL: [Self; 7] = [
        Self::CreateCompany,
        Self::AddFurnitureToCompany,
        Self::RemoveFurnitureFromCompany,
        Self::FindFurnitureFromCompany,
        Self::ShowCompanyCatalog,
        Self::CreateTable,
        Self::CreateChair,
    ];

    /// The name as written on a command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreateCompany => "CreateCompany",
            Self::AddFurnitureToCompany => "AddFurnitureToCompany",
            Self::RemoveFurnitureFromCompany => "RemoveFurnitureFromCompany",
            Self::FindFurnitureFromCompany => "FindFurnitureFromCompany",
            Self::ShowCompanyCatalog => "ShowCompanyCatalog",
            Self::CreateTable => "CreateTable",
            Self::CreateChair => "CreateChair",
        }
    }

    /// Number of positional parameters the operation reads.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::ShowCompanyCatalog => 1,
            Self::CreateCompany
            | Self::AddFurnitureToCompany
            | Self::RemoveFurnitureFromCompany
            | Self::FindFurnitureFromCompany => 2,
            Self::CreateChair => 5,
            Self::CreateTable => 6,
        }
    }

    /// A usage line, e.g. `ShowCompanyCatalog <company>`.
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::CreateCompany => "CreateCompany <name> <registrationNumber>",
            Self::AddFurnitureToCompany => "AddFurnitureToCompany <company> <model>",
            Self::RemoveFurnitureFromCompany => "RemoveFurnitureFromCompany <company> <model>",
            Self::FindFurnitureFromCompany => "FindFurnitureFromCompany <company> <model>",
            Self::ShowCompanyCatalog => "ShowCompanyCatalog <company>",
            Self::CreateTable => {
                "CreateTable <model> <material> <price> <height> <length> <width>"
            }
            Self::CreateChair => "CreateChair <model> <material> <price> <height> <legs>",
        }
    }
}

impl FromStr for CommandName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| Error::unknown_command(s))
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
