// Document Backend Module
// Exports the REST client for the CRM/ERP system that owns Deal, Company
// and Quotation records.

pub mod backend_client;

pub use backend_client::{doctype, BackendClient, BackendError, Privilege};
