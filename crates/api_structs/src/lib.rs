mod company;

pub mod dtos {
    pub use crate::company::dtos::*;
}

pub use crate::company::api::*;
