use crate::dtos::CompanyDTO;
use company_stocks_domain::Company;
use serde::{Deserialize, Serialize};

pub mod create_company {
    use super::*;
    use company_stocks_domain::ID;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// Only set when an already stored `Company` should be replaced
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub id: Option<ID>,
        /// Missing and `null` both mean empty
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub stock_prices: Option<Vec<f64>>,
    }

    pub type APIResponse = CompanyDTO;
}

pub mod get_companies {
    use super::*;

    pub type APIResponse = Vec<CompanyDTO>;

    pub fn new_response(companies: Vec<Company>) -> APIResponse {
        companies.into_iter().map(CompanyDTO::new).collect()
    }
}
