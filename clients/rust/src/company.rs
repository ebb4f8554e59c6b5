use crate::{APIResponse, BaseClient, ID};
use company_stocks_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CompanyClient {
    base: Arc<BaseClient>,
}

pub struct CreateCompanyInput {
    pub name: String,
    pub stock_prices: Vec<f64>,
}

pub struct SaveCompanyInput {
    pub company_id: ID,
    pub name: String,
    pub stock_prices: Vec<f64>,
}

impl CompanyClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_all(&self) -> APIResponse<get_companies::APIResponse> {
        self.base.get("companies".into(), StatusCode::OK).await
    }

    pub async fn create(
        &self,
        input: CreateCompanyInput,
    ) -> APIResponse<create_company::APIResponse> {
        let body = create_company::RequestBody {
            id: None,
            name: Some(input.name),
            stock_prices: Some(input.stock_prices),
        };
        self.base
            .post(body, "companies".into(), StatusCode::CREATED)
            .await
    }

    /// Replaces the stored `Company` with the given id
    pub async fn save(&self, input: SaveCompanyInput) -> APIResponse<create_company::APIResponse> {
        let body = create_company::RequestBody {
            id: Some(input.company_id),
            name: Some(input.name),
            stock_prices: Some(input.stock_prices),
        };
        self.base
            .post(body, "companies".into(), StatusCode::CREATED)
            .await
    }
}
