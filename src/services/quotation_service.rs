use chrono::{Duration, NaiveDate, Utc};
use thiserror::Error;

use crate::models::deal::Deal;
use crate::models::quotation::{NewQuotation, QuotationTo};
use crate::services::erp::{doctype, BackendClient, BackendError, Privilege};

/// How long a quotation stays valid after its transaction date.
const VALIDITY_DAYS: i64 = 30;

#[derive(Error, Debug)]
pub enum QuotationError {
    #[error("company {0} does not exist or access is denied")]
    CompanyNotFound(String),

    #[error("deal must be linked to an organization or a customer")]
    MissingLinkage,

    #[error("failed to create quotation: {0}")]
    Backend(#[from] BackendError),
}

/// Maps CRM deals onto ERP quotations pinned to a specific company.
///
/// The backend session is injected explicitly; the service holds no ambient
/// connection or permission state of its own.
pub struct QuotationService {
    backend: BackendClient,
}

impl QuotationService {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }

    /// Create a quotation from a deal, forcing the given company.
    ///
    /// Fails before any write when the company does not exist or the deal
    /// carries no party linkage. The insert and the commit are the last two
    /// steps, so no partially created quotation is ever visible to other
    /// sessions. Nothing is retried; the first failure aborts the call.
    pub async fn create_for_company(
        &self,
        deal_name: &str,
        company: &str,
        privilege: Privilege,
    ) -> Result<String, QuotationError> {
        if !self.backend.exists(doctype::COMPANY, company).await? {
            return Err(QuotationError::CompanyNotFound(company.to_string()));
        }

        let deal = self.backend.get_deal(deal_name).await?;

        let today = Utc::now().date_naive();
        let quotation = build_quotation(&deal, company, today)?;

        let quotation_name = self.backend.insert_quotation(&quotation, privilege).await?;
        self.backend.commit().await?;

        tracing::info!(
            deal = %deal_name,
            company = %company,
            quotation = %quotation_name,
            "Quotation created from deal"
        );

        Ok(quotation_name)
    }
}

/// Pure field mapping from a deal to a new quotation document.
///
/// A deal with a customer is quoted to that customer even when an
/// organization is also linked; only customer-less deals fall back to
/// quoting the organization as a lead.
pub fn build_quotation(
    deal: &Deal,
    company: &str,
    today: NaiveDate,
) -> Result<NewQuotation, QuotationError> {
    let (quotation_to, customer, party_name) = match (&deal.customer, &deal.organization) {
        (Some(customer), _) => (QuotationTo::Customer, Some(customer.clone()), None),
        (None, Some(organization)) => (QuotationTo::Lead, None, Some(organization.clone())),
        (None, None) => return Err(QuotationError::MissingLinkage),
    };

    Ok(NewQuotation {
        company: company.to_string(),
        quotation_to,
        customer,
        party_name,
        crm_deal: deal.name.clone(),
        title: format!("Quotation for Deal: {} ({})", deal.title, company),
        transaction_date: today,
        valid_till: today + Duration::days(VALIDITY_DAYS),
        // TODO: map deal product rows into quotation items once the CRM
        // exposes them; quotations currently go out without item lines.
        items: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(customer: Option<&str>, organization: Option<&str>) -> Deal {
        Deal {
            name: "DEAL-001".to_string(),
            title: "Enterprise rollout".to_string(),
            organization: organization.map(String::from),
            customer: customer.map(String::from),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 4).unwrap()
    }

    #[test]
    fn test_customer_deal_maps_to_customer_quotation() {
        let quotation = build_quotation(&deal(Some("CUST-100"), None), "C2", today()).unwrap();

        assert_eq!(quotation.quotation_to, QuotationTo::Customer);
        assert_eq!(quotation.customer.as_deref(), Some("CUST-100"));
        assert_eq!(quotation.party_name, None);
        assert_eq!(quotation.company, "C2");
        assert_eq!(quotation.crm_deal, "DEAL-001");
    }

    #[test]
    fn test_customer_wins_over_organization() {
        let quotation =
            build_quotation(&deal(Some("CUST-100"), Some("ORG-9")), "C2", today()).unwrap();

        assert_eq!(quotation.quotation_to, QuotationTo::Customer);
        assert_eq!(quotation.customer.as_deref(), Some("CUST-100"));
        assert_eq!(quotation.party_name, None);
    }

    #[test]
    fn test_organization_only_deal_maps_to_lead_quotation() {
        let quotation = build_quotation(&deal(None, Some("ORG-9")), "C1", today()).unwrap();

        assert_eq!(quotation.quotation_to, QuotationTo::Lead);
        assert_eq!(quotation.party_name.as_deref(), Some("ORG-9"));
        assert_eq!(quotation.customer, None);
    }

    #[test]
    fn test_unlinked_deal_is_rejected() {
        let err = build_quotation(&deal(None, None), "C1", today()).unwrap_err();
        assert!(matches!(err, QuotationError::MissingLinkage));
    }

    #[test]
    fn test_title_names_deal_and_company() {
        let quotation = build_quotation(&deal(Some("CUST-100"), None), "C2", today()).unwrap();
        assert_eq!(quotation.title, "Quotation for Deal: Enterprise rollout (C2)");
    }

    #[test]
    fn test_validity_is_thirty_days_after_transaction_date() {
        let quotation = build_quotation(&deal(Some("CUST-100"), None), "C2", today()).unwrap();

        assert_eq!(quotation.transaction_date, today());
        assert_eq!(
            quotation.valid_till - quotation.transaction_date,
            Duration::days(30)
        );
    }

    #[test]
    fn test_item_lines_start_empty() {
        let quotation = build_quotation(&deal(Some("CUST-100"), None), "C2", today()).unwrap();
        assert!(quotation.items.is_empty());
    }
}
