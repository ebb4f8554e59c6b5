use crate::shared::entity::{Entity, ID};

/// A `Company` that has not been persisted yet and therefore has no `ID`
#[derive(Debug, Clone, PartialEq)]
pub struct NewCompany {
    pub name: String,
    /// Historical stock prices, oldest first
    pub stock_prices: Vec<f64>,
}

impl NewCompany {
    pub fn new(name: String, stock_prices: Vec<f64>) -> Self {
        Self { name, stock_prices }
    }

    /// Turns this into a persisted `Company` once the store has assigned an `ID`
    pub fn with_id(self, id: ID) -> Company {
        Company {
            id,
            name: self.name,
            stock_prices: self.stock_prices,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub id: ID,
    pub name: String,
    pub stock_prices: Vec<f64>,
}

impl Company {
    /// Drops the `ID`, e.g. when a record has to be stored under a new one
    pub fn into_new(self) -> NewCompany {
        NewCompany {
            name: self.name,
            stock_prices: self.stock_prices,
        }
    }
}

impl Entity for Company {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// Input to a company repository `save`.
///
/// `Unsaved` is inserted with a newly generated `ID`, `Saved` replaces
/// the stored record with the same `ID`.
#[derive(Debug, Clone, PartialEq)]
pub enum CompanyRecord {
    Unsaved(NewCompany),
    Saved(Company),
}

impl From<NewCompany> for CompanyRecord {
    fn from(company: NewCompany) -> Self {
        Self::Unsaved(company)
    }
}

impl From<Company> for CompanyRecord {
    fn from(company: Company) -> Self {
        Self::Saved(company)
    }
}
