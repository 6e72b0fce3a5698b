//! Invoice lookup.
//!
//! The public page reads one invoice together with its customer and team.
//! [`InvoiceRepository`] is the seam between the page and the database so the
//! page can be served from another store (tests use an in-memory one).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, types::Json};
use tracing::{debug, error, instrument};

use tally_core::AppError;
use tally_models::{
    Customer, CustomerId, Invoice, InvoiceId, InvoiceStatus, InvoiceTemplate, LineItem, Team,
    TeamId,
};

#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Loads an invoice by id. `Ok(None)` when no such invoice exists.
    async fn get_invoice(&self, id: InvoiceId) -> Result<Option<Invoice>, AppError>;
}

#[derive(Clone, Debug)]
pub struct PgInvoiceRepository {
    db: PgPool,
}

impl PgInvoiceRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

/// Flat row of the invoice query; customer and team columns are prefixed.
#[derive(Debug, FromRow)]
struct InvoiceRow {
    id: InvoiceId,
    invoice_number: String,
    status: InvoiceStatus,
    currency: String,
    issue_date: Option<DateTime<Utc>>,
    due_date: Option<DateTime<Utc>>,
    line_items: Json<Vec<LineItem>>,
    amount: f64,
    vat: Option<f64>,
    tax: Option<f64>,
    discount: Option<f64>,
    from_details: Option<String>,
    customer_details: Option<String>,
    payment_details: Option<String>,
    note: Option<String>,
    customer_name: Option<String>,
    template: Json<InvoiceTemplate>,
    customer_id: Option<CustomerId>,
    customer_relation_name: Option<String>,
    customer_website: Option<String>,
    customer_email: Option<String>,
    team_id: TeamId,
    team_name: String,
}

impl From<InvoiceRow> for Invoice {
    fn from(row: InvoiceRow) -> Self {
        let customer = match (row.customer_id, row.customer_relation_name) {
            (Some(id), Some(name)) => Some(Customer {
                id,
                name,
                website: row.customer_website,
                email: row.customer_email,
            }),
            _ => None,
        };

        Invoice {
            id: row.id,
            invoice_number: row.invoice_number,
            status: row.status,
            currency: row.currency,
            issue_date: row.issue_date,
            due_date: row.due_date,
            line_items: row.line_items.0,
            amount: row.amount,
            vat: row.vat,
            tax: row.tax,
            discount: row.discount,
            from_details: row.from_details,
            customer_details: row.customer_details,
            payment_details: row.payment_details,
            note: row.note,
            customer_name: row.customer_name,
            customer,
            team: Team {
                id: row.team_id,
                name: row.team_name,
            },
            template: row.template.0,
        }
    }
}

const INVOICE_QUERY: &str = r#"
    SELECT
        i.id, i.invoice_number, i.status, i.currency, i.issue_date, i.due_date,
        i.line_items,
        i.amount::float8 AS amount,
        i.vat::float8 AS vat,
        i.tax::float8 AS tax,
        i.discount::float8 AS discount,
        i.from_details, i.customer_details, i.payment_details, i.note,
        i.customer_name, i.template,
        c.id AS customer_id,
        c.name AS customer_relation_name,
        c.website AS customer_website,
        c.email AS customer_email,
        t.id AS team_id,
        t.name AS team_name
    FROM invoices i
    JOIN teams t ON t.id = i.team_id
    LEFT JOIN customers c ON c.id = i.customer_id
    WHERE i.id = $1
"#;

#[async_trait]
impl InvoiceRepository for PgInvoiceRepository {
    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "invoices"))]
    async fn get_invoice(&self, id: InvoiceId) -> Result<Option<Invoice>, AppError> {
        let row = sqlx::query_as::<_, InvoiceRow>(INVOICE_QUERY)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .map_err(|e| {
                error!(invoice.id = %id, error = %e, "Database error fetching invoice");
                AppError::database(e)
            })?;

        debug!(invoice.id = %id, found = row.is_some(), "Invoice query finished");

        Ok(row.map(Invoice::from))
    }
}
