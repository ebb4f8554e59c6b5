use super::ICompanyRepo;
use company_stocks_domain::{Company, CompanyRecord, NewCompany};
use sqlx::{FromRow, PgPool};
use tracing::{error, info};

pub struct PostgresCompanyRepo {
    pool: PgPool,
}

impl PostgresCompanyRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, company: &NewCompany) -> anyhow::Result<Company> {
        let res = sqlx::query_as::<_, CompanyRaw>(
            r#"
            INSERT INTO companies(name, stock_prices)
            VALUES($1, $2)
            RETURNING company_id, name, stock_prices
            "#,
        )
        .bind(&company.name)
        .bind(company.stock_prices.as_slice())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert company: {:?}. DB returned error: {:?}",
                company, e
            );
            e
        })?;
        Ok(res.into())
    }

    async fn update(&self, company: &Company) -> anyhow::Result<Option<Company>> {
        let res = sqlx::query_as::<_, CompanyRaw>(
            r#"
            UPDATE companies
            SET name = $2,
            stock_prices = $3
            WHERE company_id = $1
            RETURNING company_id, name, stock_prices
            "#,
        )
        .bind(company.id.inner())
        .bind(&company.name)
        .bind(company.stock_prices.as_slice())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to save company: {:?}. DB returned error: {:?}",
                company, e
            );
            e
        })?;
        Ok(res.map(|company| company.into()))
    }
}

#[derive(Debug, FromRow)]
struct CompanyRaw {
    company_id: i64,
    name: String,
    stock_prices: Vec<f64>,
}

impl From<CompanyRaw> for Company {
    fn from(e: CompanyRaw) -> Self {
        Self {
            id: e.company_id.into(),
            name: e.name,
            stock_prices: e.stock_prices,
        }
    }
}

#[async_trait::async_trait]
impl ICompanyRepo for PostgresCompanyRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Company>> {
        let companies = sqlx::query_as::<_, CompanyRaw>(
            r#"
            SELECT company_id, name, stock_prices FROM companies
            ORDER BY company_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Find all companies failed. DB returned error: {:?}", e);
            e
        })?;

        Ok(companies.into_iter().map(|c| c.into()).collect())
    }

    async fn save(&self, company: CompanyRecord) -> anyhow::Result<Company> {
        match company {
            CompanyRecord::Unsaved(company) => self.insert(&company).await,
            CompanyRecord::Saved(company) => match self.update(&company).await? {
                Some(updated) => Ok(updated),
                None => {
                    info!(
                        "No company with id: {} to replace, inserting it with a new id.",
                        company.id
                    );
                    self.insert(&company.into_new()).await
                }
            },
        }
    }
}
