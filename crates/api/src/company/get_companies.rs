use crate::{
    error::StocksError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use company_stocks_api_structs::get_companies::*;
use company_stocks_domain::Company;
use company_stocks_infra::StocksContext;

pub async fn get_companies_controller(
    ctx: web::Data<StocksContext>,
) -> Result<HttpResponse, StocksError> {
    let usecase = GetCompaniesUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|companies| HttpResponse::Ok().json(new_response(companies)))
        .map_err(StocksError::from)
}

#[derive(Debug)]
struct GetCompaniesUseCase {}

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
impl UseCase for GetCompaniesUseCase {
    type Response = Vec<Company>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCompanies";

    async fn execute(&mut self, ctx: &StocksContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .companies
            .find_all()
            .await
            .map_err(|_| UseCaseError::Storage)
    }
}
