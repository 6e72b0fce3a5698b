//! # Tally Models
//!
//! Domain types for the public invoice page.
//!
//! - [`ids`]: strongly-typed ID newtypes
//! - [`invoices`]: the invoice record as read by the page, with its customer,
//!   team and template descriptor
//! - [`metadata`]: document metadata (title, description, robots directives)
//!
//! Every type here is read-only from this service's point of view; invoices
//! are created and edited by the dashboard's invoicing flow.

pub mod ids;
pub mod invoices;
pub mod metadata;

pub use ids::{CustomerId, InvoiceId, TeamId};
pub use invoices::{
    Customer, Invoice, InvoiceStatus, InvoiceTemplate, LineItem, PageDimensions, PaperSize, Team,
};
pub use metadata::{INVALID_INVOICE_TITLE, PageMetadata, Robots};
