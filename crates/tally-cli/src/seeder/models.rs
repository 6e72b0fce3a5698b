//! Seed data shapes and seeding configuration.

use tally_models::{CustomerId, InvoiceId, InvoiceStatus, InvoiceTemplate, LineItem};

/// Seed data for creating a team.
pub struct TeamSeed {
    pub name: String,
}

/// Seed data for creating a customer.
pub struct CustomerSeed {
    pub name: String,
    pub website: Option<String>,
    pub email: String,
}

/// Seed data for creating an invoice.
pub struct InvoiceSeed {
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub currency: String,
    pub customer_id: Option<CustomerId>,
    pub customer_name: Option<String>,
    pub line_items: Vec<LineItem>,
    pub amount: f64,
    pub vat: Option<f64>,
    pub template: InvoiceTemplate,
    pub due_in_days: i64,
    pub note: Option<String>,
}

/// An inserted invoice, as reported back to the CLI.
#[derive(Debug, Clone)]
pub struct SeededInvoice {
    pub id: InvoiceId,
    pub invoice_number: String,
}

#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub invoices: usize,
    pub customers: usize,
}

impl SeedConfig {
    pub fn new(invoices: usize) -> Self {
        Self {
            invoices,
            customers: 3,
        }
    }

    pub fn with_customers(mut self, customers: usize) -> Self {
        self.customers = customers.max(1);
        self
    }
}
