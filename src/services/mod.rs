pub mod erp;
pub mod quotation_service;

pub use quotation_service::*;
