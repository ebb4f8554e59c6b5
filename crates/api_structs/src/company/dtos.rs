use company_stocks_domain::{Company, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDTO {
    pub id: ID,
    pub name: String,
    pub stock_prices: Vec<f64>,
}

impl CompanyDTO {
    pub fn new(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            stock_prices: company.stock_prices,
        }
    }
}
