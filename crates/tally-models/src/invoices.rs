//! Invoice record as read by the public invoice page.
//!
//! The record is owned by the invoicing flow of the dashboard; this service
//! only reads it. The template descriptor is stored as JSON next to the
//! invoice and decides the paper format the page is laid out for.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::ids::{CustomerId, InvoiceId, TeamId};

/// Invoice lifecycle status (Postgres enum `invoice_status`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "invoice_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Unpaid,
    Overdue,
    Paid,
    Canceled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Unpaid => "unpaid",
            Self::Overdue => "overdue",
            Self::Paid => "paid",
            Self::Canceled => "canceled",
        }
    }
}

/// Paper format of an invoice template.
///
/// Only the string `"letter"` is recognised; every other stored value,
/// including `null`, numbers and unknown strings, is laid out as A4.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    Letter,
    #[default]
    A4,
}

impl<'de> Deserialize<'de> for PaperSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value.as_str() {
            Some("letter") => Ok(Self::Letter),
            _ => Ok(Self::A4),
        }
    }
}

/// Rendered page size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageDimensions {
    pub width: u32,
    pub height: u32,
}

impl PaperSize {
    pub const LETTER_DIMENSIONS: PageDimensions = PageDimensions {
        width: 816,
        height: 1056,
    };

    pub const A4_DIMENSIONS: PageDimensions = PageDimensions {
        width: 595,
        height: 842,
    };

    pub fn dimensions(&self) -> PageDimensions {
        match self {
            Self::Letter => Self::LETTER_DIMENSIONS,
            Self::A4 => Self::A4_DIMENSIONS,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::A4 => "a4",
        }
    }
}

/// Template descriptor stored with each invoice.
///
/// Missing keys fall back to the defaults, so templates saved by older
/// versions of the editor still render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct InvoiceTemplate {
    pub size: PaperSize,
    pub title: String,
    /// `chrono` strftime pattern used for issue and due dates.
    pub date_format: String,
    pub include_vat: bool,
    pub include_tax: bool,
    pub include_discount: bool,
    pub customer_label: String,
    pub from_label: String,
    pub invoice_no_label: String,
    pub issue_date_label: String,
    pub due_date_label: String,
    pub description_label: String,
    pub quantity_label: String,
    pub price_label: String,
    pub total_label: String,
    pub vat_label: String,
    pub tax_label: String,
    pub discount_label: String,
    pub payment_label: String,
    pub note_label: String,
}

impl Default for InvoiceTemplate {
    fn default() -> Self {
        Self {
            size: PaperSize::default(),
            title: "Invoice".to_string(),
            date_format: "%d/%m/%Y".to_string(),
            include_vat: true,
            include_tax: true,
            include_discount: false,
            customer_label: "To".to_string(),
            from_label: "From".to_string(),
            invoice_no_label: "Invoice No".to_string(),
            issue_date_label: "Issue Date".to_string(),
            due_date_label: "Due Date".to_string(),
            description_label: "Description".to_string(),
            quantity_label: "Quantity".to_string(),
            price_label: "Price".to_string(),
            total_label: "Total".to_string(),
            vat_label: "VAT".to_string(),
            tax_label: "Tax".to_string(),
            discount_label: "Discount".to_string(),
            payment_label: "Payment Details".to_string(),
            note_label: "Note".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LineItem {
    pub name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub price: f64,
}

impl LineItem {
    pub fn total(&self) -> f64 {
        self.quantity * self.price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub website: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Invoice {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub currency: String,
    pub issue_date: Option<DateTime<Utc>>,
    pub due_date: Option<DateTime<Utc>>,
    pub line_items: Vec<LineItem>,
    pub amount: f64,
    pub vat: Option<f64>,
    pub tax: Option<f64>,
    pub discount: Option<f64>,
    pub from_details: Option<String>,
    pub customer_details: Option<String>,
    pub payment_details: Option<String>,
    pub note: Option<String>,
    /// Free-text customer name typed on the invoice; wins over the relation.
    pub customer_name: Option<String>,
    pub customer: Option<Customer>,
    pub team: Team,
    pub template: InvoiceTemplate,
}

impl Invoice {
    /// Name shown in the page header: the typed name, else the customer's.
    pub fn display_customer_name(&self) -> Option<&str> {
        non_empty(self.customer_name.as_deref())
            .or_else(|| non_empty(self.customer.as_ref().map(|c| c.name.as_str())))
    }

    pub fn customer_website(&self) -> Option<&str> {
        non_empty(self.customer.as_ref().and_then(|c| c.website.as_deref()))
    }

    pub fn dimensions(&self) -> PageDimensions {
        self.template.size.dimensions()
    }

    pub fn subtotal(&self) -> f64 {
        self.line_items.iter().map(LineItem::total).sum()
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_invoice() -> Invoice {
        Invoice {
            id: InvoiceId::from_u128(1),
            invoice_number: "INV-0001".to_string(),
            status: InvoiceStatus::Unpaid,
            currency: "USD".to_string(),
            issue_date: None,
            due_date: None,
            line_items: vec![
                LineItem {
                    name: "Design".to_string(),
                    quantity: 2.0,
                    price: 100.0,
                },
                LineItem {
                    name: "Hosting".to_string(),
                    quantity: 1.0,
                    price: 25.5,
                },
            ],
            amount: 225.5,
            vat: None,
            tax: None,
            discount: None,
            from_details: None,
            customer_details: None,
            payment_details: None,
            note: None,
            customer_name: None,
            customer: Some(Customer {
                id: CustomerId::from_u128(2),
                name: "Acme".to_string(),
                website: Some("acme.test".to_string()),
                email: None,
            }),
            team: Team {
                id: TeamId::from_u128(3),
                name: "Studio".to_string(),
            },
            template: InvoiceTemplate::default(),
        }
    }

    #[test]
    fn test_letter_dimensions() {
        let dims = PaperSize::Letter.dimensions();
        assert_eq!((dims.width, dims.height), (816, 1056));
    }

    #[test]
    fn test_a4_dimensions() {
        let dims = PaperSize::A4.dimensions();
        assert_eq!((dims.width, dims.height), (595, 842));
    }

    #[test]
    fn test_unknown_size_deserializes_as_a4() {
        let size: PaperSize = serde_json::from_str("\"legal\"").unwrap();
        assert_eq!(size, PaperSize::A4);

        let size: PaperSize = serde_json::from_str("\"letter\"").unwrap();
        assert_eq!(size, PaperSize::Letter);
    }

    #[test]
    fn test_non_string_size_deserializes_as_a4() {
        for raw in [
            r#"{"size":null}"#,
            r#"{"size":5}"#,
            r#"{"size":{"w":1}}"#,
            r#"{"size":"Letter"}"#,
        ] {
            let template: InvoiceTemplate = serde_json::from_str(raw).unwrap();
            assert_eq!(template.size, PaperSize::A4, "{raw}");
            assert_eq!(template.size.dimensions(), PaperSize::A4_DIMENSIONS);
        }

        let template: InvoiceTemplate = serde_json::from_str("{}").unwrap();
        assert_eq!(template.size, PaperSize::A4);
    }

    #[test]
    fn test_template_defaults_fill_missing_keys() {
        let template: InvoiceTemplate =
            serde_json::from_str(r#"{"size":"letter","title":"Faktura"}"#).unwrap();

        assert_eq!(template.size, PaperSize::Letter);
        assert_eq!(template.title, "Faktura");
        assert_eq!(template.due_date_label, "Due Date");
    }

    #[test]
    fn test_display_customer_name_prefers_typed_name() {
        let mut invoice = sample_invoice();
        assert_eq!(invoice.display_customer_name(), Some("Acme"));

        invoice.customer_name = Some("Acme Holdings AB".to_string());
        assert_eq!(invoice.display_customer_name(), Some("Acme Holdings AB"));

        invoice.customer_name = Some(String::new());
        assert_eq!(invoice.display_customer_name(), Some("Acme"));

        invoice.customer = None;
        assert_eq!(invoice.display_customer_name(), None);
    }

    #[test]
    fn test_subtotal() {
        assert_eq!(sample_invoice().subtotal(), 225.5);
    }

    #[test]
    fn test_status_as_str_matches_serde() {
        for status in [
            InvoiceStatus::Draft,
            InvoiceStatus::Unpaid,
            InvoiceStatus::Overdue,
            InvoiceStatus::Paid,
            InvoiceStatus::Canceled,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }
}
