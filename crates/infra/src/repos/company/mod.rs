mod inmemory;
mod postgres;

use company_stocks_domain::{Company, CompanyRecord};
pub use inmemory::InMemoryCompanyRepo;
pub use postgres::PostgresCompanyRepo;

#[async_trait::async_trait]
pub trait ICompanyRepo: Send + Sync {
    /// Every stored `Company`, ordered by id
    async fn find_all(&self) -> anyhow::Result<Vec<Company>>;
    /// Inserts an unsaved `Company` or replaces the stored one with the same id.
    /// Returns the `Company` as it was persisted.
    async fn save(&self, company: CompanyRecord) -> anyhow::Result<Company>;
}

#[cfg(test)]
mod tests {
    use crate::{setup_context, StocksContext};
    use company_stocks_domain::{Company, CompanyRecord, NewCompany, ID};
    use futures::future::join_all;
    use std::collections::HashSet;

    /// Creates inmemory and postgres context when DATABASE_URL is set,
    /// otherwise it will create two inmemory
    async fn create_contexts() -> Vec<StocksContext> {
        vec![
            StocksContext::create_inmemory(),
            setup_context().await.expect("To setup context"),
        ]
    }

    fn find_by_id(companies: &[Company], id: &ID) -> Option<Company> {
        companies.iter().find(|c| c.id == *id).cloned()
    }

    #[tokio::test]
    async fn find_all_on_empty_store() {
        let ctx = StocksContext::create_inmemory();
        let companies = ctx.repos.companies.find_all().await.unwrap();
        assert!(companies.is_empty());
    }

    #[tokio::test]
    async fn save_and_find_all() {
        for ctx in create_contexts().await {
            let acme = NewCompany::new("Acme".into(), vec![1.5, 2.25, 3.0]);
            let globex = NewCompany::new("Globex".into(), vec![]);

            // Insert
            let saved_acme = ctx
                .repos
                .companies
                .save(acme.clone().into())
                .await
                .expect("To save company");
            let saved_globex = ctx
                .repos
                .companies
                .save(globex.clone().into())
                .await
                .expect("To save company");
            assert_ne!(saved_acme.id, saved_globex.id);
            assert_eq!(saved_acme, acme.with_id(saved_acme.id));
            assert_eq!(saved_globex, globex.with_id(saved_globex.id));

            // Find
            let companies = ctx.repos.companies.find_all().await.unwrap();
            assert_eq!(find_by_id(&companies, &saved_acme.id), Some(saved_acme));
            assert_eq!(find_by_id(&companies, &saved_globex.id), Some(saved_globex));
        }
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let ctx = StocksContext::create_inmemory();
        for name in &["a", "b", "c"] {
            ctx.repos
                .companies
                .save(NewCompany::new(name.to_string(), vec![]).into())
                .await
                .unwrap();
        }
        let companies = ctx.repos.companies.find_all().await.unwrap();
        let ids = companies.iter().map(|c| c.id.inner()).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn update() {
        for ctx in create_contexts().await {
            let mut company = ctx
                .repos
                .companies
                .save(NewCompany::new("Initech".into(), vec![10.0]).into())
                .await
                .unwrap();

            company.name = "Initrode".into();
            company.stock_prices.push(10.5);

            // Save
            let saved = ctx
                .repos
                .companies
                .save(CompanyRecord::Saved(company.clone()))
                .await
                .unwrap();
            assert_eq!(saved, company);

            // Find
            let companies = ctx.repos.companies.find_all().await.unwrap();
            assert_eq!(find_by_id(&companies, &company.id), Some(company.clone()));
            assert_eq!(
                companies.iter().filter(|c| c.id == company.id).count(),
                1
            );
        }
    }

    #[tokio::test]
    async fn save_with_unknown_id_inserts_with_new_id() {
        let ctx = StocksContext::create_inmemory();
        let company = NewCompany::new("Umbrella".into(), vec![4.0]).with_id(ID::from(1000));

        let saved = ctx
            .repos
            .companies
            .save(CompanyRecord::Saved(company.clone()))
            .await
            .unwrap();
        assert_ne!(saved.id, company.id);
        assert_eq!(saved.name, company.name);
        assert_eq!(saved.stock_prices, company.stock_prices);

        let companies = ctx.repos.companies.find_all().await.unwrap();
        assert_eq!(companies, vec![saved]);
    }

    #[tokio::test]
    async fn concurrent_saves_get_unique_ids() {
        for ctx in create_contexts().await {
            let saves = (0..50).map(|i| {
                let repo = ctx.repos.companies.clone();
                async move {
                    repo.save(NewCompany::new(format!("Company {}", i), vec![i as f64]).into())
                        .await
                }
            });
            let ids = join_all(saves)
                .await
                .into_iter()
                .map(|res| res.expect("To save company").id)
                .collect::<HashSet<_>>();
            assert_eq!(ids.len(), 50);
        }
    }
}
