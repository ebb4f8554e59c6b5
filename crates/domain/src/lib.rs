mod company;
mod shared;

pub use company::{Company, CompanyRecord, NewCompany};
pub use shared::entity::{Entity, ID};
