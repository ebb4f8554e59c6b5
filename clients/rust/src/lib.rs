mod base;
mod company;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use company::CompanyClient;
pub use company::{CreateCompanyInput, SaveCompanyInput};
pub use company_stocks_domain::ID;
use std::sync::Arc;

// Domain
pub use company_stocks_api_structs::dtos::CompanyDTO as Company;

/// Company Stocks Server SDK
///
/// The SDK contains methods for interacting with the Company Stocks server
/// API.
#[derive(Clone)]
pub struct StocksSDK {
    pub company: CompanyClient,
}

impl StocksSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let company = CompanyClient::new(base);

        Self { company }
    }
}
