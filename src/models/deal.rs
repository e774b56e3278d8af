use serde::{Deserialize, Serialize};

/// A CRM Deal as served by the document backend. Read-only here: the bridge
/// never mutates deals, it only maps them into quotations.
///
/// `organization` and `customer` are both optional on the CRM side; a deal
/// with neither cannot be quoted (see `QuotationError::MissingLinkage`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub customer: Option<String>,
}
