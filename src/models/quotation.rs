use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Party mode of a quotation. The backend distinguishes fully onboarded
/// customers from not-yet-converted leads; the discriminator decides which
/// party field carries the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotationTo {
    Customer,
    Lead,
}

/// One quotation item line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationItem {
    pub item_code: String,
    pub qty: f64,
    pub rate: f64,
}

/// A quotation document to be inserted into the backend.
///
/// Exactly one of `customer`/`party_name` is set, matching `quotation_to`:
/// `Customer` carries `customer`, `Lead` carries `party_name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuotation {
    pub company: String,
    pub quotation_to: QuotationTo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_name: Option<String>,
    /// Back-reference to the CRM deal this quotation was created from.
    pub crm_deal: String,
    pub title: String,
    pub transaction_date: NaiveDate,
    pub valid_till: NaiveDate,
    pub items: Vec<QuotationItem>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuotationRequest {
    #[validate(length(min = 1, message = "deal_name is required"))]
    pub deal_name: String,
    #[validate(length(min = 1, message = "company is required"))]
    pub company: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuotationCreated {
    pub quotation_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_quotation_serializes_without_party_name() {
        let quotation = NewQuotation {
            company: "C2".to_string(),
            quotation_to: QuotationTo::Customer,
            customer: Some("CUST-100".to_string()),
            party_name: None,
            crm_deal: "DEAL-001".to_string(),
            title: "Quotation for Deal: Test (C2)".to_string(),
            transaction_date: NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
            valid_till: NaiveDate::from_ymd_opt(2026, 9, 3).unwrap(),
            items: vec![],
        };

        let json = serde_json::to_value(&quotation).unwrap();
        assert_eq!(json["quotation_to"], "Customer");
        assert_eq!(json["customer"], "CUST-100");
        assert!(json.get("party_name").is_none());
        assert_eq!(json["transaction_date"], "2026-08-04");
        assert_eq!(json["items"], serde_json::json!([]));
    }

    #[test]
    fn test_lead_quotation_serializes_without_customer() {
        let quotation = NewQuotation {
            company: "C1".to_string(),
            quotation_to: QuotationTo::Lead,
            customer: None,
            party_name: Some("ORG-9".to_string()),
            crm_deal: "DEAL-002".to_string(),
            title: "Quotation for Deal: Test (C1)".to_string(),
            transaction_date: NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
            valid_till: NaiveDate::from_ymd_opt(2026, 9, 3).unwrap(),
            items: vec![],
        };

        let json = serde_json::to_value(&quotation).unwrap();
        assert_eq!(json["quotation_to"], "Lead");
        assert_eq!(json["party_name"], "ORG-9");
        assert!(json.get("customer").is_none());
    }
}
