use crate::{
    error::StocksError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use company_stocks_api_structs::create_company::*;
use company_stocks_domain::{Company, CompanyRecord, NewCompany, ID};
use company_stocks_infra::StocksContext;

pub async fn create_company_controller(
    body_params: web::Json<RequestBody>,
    ctx: web::Data<StocksContext>,
) -> Result<HttpResponse, StocksError> {
    let body = body_params.0;
    let usecase = CreateCompanyUseCase {
        id: body.id,
        name: body.name.unwrap_or_default(),
        stock_prices: body.stock_prices.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|company| HttpResponse::Created().json(APIResponse::new(company)))
        .map_err(StocksError::from)
}

#[derive(Debug)]
struct CreateCompanyUseCase {
    pub id: Option<ID>,
    pub name: String,
    pub stock_prices: Vec<f64>,
}

#[derive(Debug)]
enum UseCaseError {
    Storage,
}

impl From<UseCaseError> for StocksError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Storage => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateCompanyUseCase {
    type Response = Company;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCompany";

    async fn execute(&mut self, ctx: &StocksContext) -> Result<Self::Response, Self::Error> {
        let company = NewCompany::new(self.name.clone(), self.stock_prices.clone());
        let record: CompanyRecord = match self.id {
            Some(id) => company.with_id(id).into(),
            None => company.into(),
        };

        ctx.repos
            .companies
            .save(record)
            .await
            .map_err(|_| UseCaseError::Storage)
    }
}
