use super::ICompanyRepo;
use crate::repos::shared::inmemory_repo::*;
use company_stocks_domain::{Company, CompanyRecord, NewCompany, ID};
use std::sync::atomic::{AtomicI64, Ordering};

pub struct InMemoryCompanyRepo {
    companies: std::sync::Mutex<Vec<Company>>,
    sequence: AtomicI64,
}

impl InMemoryCompanyRepo {
    pub fn new() -> Self {
        Self {
            companies: std::sync::Mutex::new(Vec::new()),
            sequence: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> ID {
        ID::from(self.sequence.fetch_add(1, Ordering::SeqCst))
    }

    fn insert_new(&self, company: NewCompany) -> anyhow::Result<Company> {
        let company = company.with_id(self.next_id());
        insert(&company, &self.companies)?;
        Ok(company)
    }
}

#[async_trait::async_trait]
impl ICompanyRepo for InMemoryCompanyRepo {
    async fn find_all(&self) -> anyhow::Result<Vec<Company>> {
        let mut companies = find_all(&self.companies)?;
        companies.sort_by_key(|company| company.id);
        Ok(companies)
    }

    async fn save(&self, company: CompanyRecord) -> anyhow::Result<Company> {
        match company {
            CompanyRecord::Unsaved(company) => self.insert_new(company),
            CompanyRecord::Saved(company) => {
                if save(&company, &self.companies)? {
                    Ok(company)
                } else {
                    self.insert_new(company.into_new())
                }
            }
        }
    }
}
