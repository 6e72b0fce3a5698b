//! Document metadata for public invoice pages.
//!
//! Invoice pages are private documents reachable by link only. Whatever the
//! outcome of the lookup, the metadata tells crawlers not to index the page
//! and not to follow its links.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::invoices::Invoice;

/// Title used for every failed lookup: bad token, missing invoice or a
/// backend error. The cases are deliberately indistinguishable.
pub const INVALID_INVOICE_TITLE: &str = "Invalid Invoice";

/// Robots directives (`<meta name="robots">`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Robots {
    pub const NONE: Self = Self {
        index: false,
        follow: false,
    };

    /// Renders the directive string, e.g. `noindex, nofollow`.
    pub fn directive(&self) -> String {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        format!("{index}, {follow}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageMetadata {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub robots: Robots,
}

impl PageMetadata {
    pub fn for_invoice(invoice: &Invoice) -> Self {
        let customer = invoice
            .customer
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("Customer");

        Self {
            title: format!("Invoice {} | {}", invoice.invoice_number, invoice.team.name),
            description: Some(format!("Invoice for {customer}")),
            robots: Robots::NONE,
        }
    }

    pub fn invalid_invoice() -> Self {
        Self {
            title: INVALID_INVOICE_TITLE.to_string(),
            description: None,
            robots: Robots::NONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{CustomerId, InvoiceId, TeamId};
    use crate::invoices::{Customer, InvoiceStatus, InvoiceTemplate, Team};

    fn invoice(customer: Option<Customer>) -> Invoice {
        Invoice {
            id: InvoiceId::new(),
            invoice_number: "INV-042".to_string(),
            status: InvoiceStatus::Paid,
            currency: "SEK".to_string(),
            issue_date: None,
            due_date: None,
            line_items: Vec::new(),
            amount: 0.0,
            vat: None,
            tax: None,
            discount: None,
            from_details: None,
            customer_details: None,
            payment_details: None,
            note: None,
            customer_name: Some("Typed Name".to_string()),
            customer,
            team: Team {
                id: TeamId::new(),
                name: "Midnight Studio".to_string(),
            },
            template: InvoiceTemplate::default(),
        }
    }

    #[test]
    fn test_title_and_description() {
        let meta = PageMetadata::for_invoice(&invoice(Some(Customer {
            id: CustomerId::new(),
            name: "Acme".to_string(),
            website: None,
            email: None,
        })));

        assert_eq!(meta.title, "Invoice INV-042 | Midnight Studio");
        assert_eq!(meta.description.as_deref(), Some("Invoice for Acme"));
        assert_eq!(meta.robots, Robots::NONE);
    }

    #[test]
    fn test_description_ignores_typed_customer_name() {
        // The description reads the customer relation only.
        let meta = PageMetadata::for_invoice(&invoice(None));
        assert_eq!(meta.description.as_deref(), Some("Invoice for Customer"));
    }

    #[test]
    fn test_empty_customer_name_falls_back() {
        let meta = PageMetadata::for_invoice(&invoice(Some(Customer {
            id: CustomerId::new(),
            name: String::new(),
            website: None,
            email: None,
        })));
        assert_eq!(meta.description.as_deref(), Some("Invoice for Customer"));
    }

    #[test]
    fn test_whitespace_customer_name_is_kept() {
        let meta = PageMetadata::for_invoice(&invoice(Some(Customer {
            id: CustomerId::new(),
            name: "  ".to_string(),
            website: None,
            email: None,
        })));
        assert_eq!(meta.description.as_deref(), Some("Invoice for   "));
    }

    #[test]
    fn test_invalid_invoice() {
        let meta = PageMetadata::invalid_invoice();
        assert_eq!(meta.title, "Invalid Invoice");
        assert!(meta.description.is_none());
        assert!(!meta.robots.index);
        assert!(!meta.robots.follow);
    }

    #[test]
    fn test_robots_directive() {
        assert_eq!(Robots::NONE.directive(), "noindex, nofollow");
        assert_eq!(
            Robots {
                index: true,
                follow: false
            }
            .directive(),
            "index, nofollow"
        );
    }
}
