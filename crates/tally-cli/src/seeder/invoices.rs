//! Team, customer and invoice seeding.

use fake::faker::company::en::{Buzzword, CompanyName};
use fake::faker::internet::en::{DomainSuffix, SafeEmail};
use fake::faker::lorem::en::Sentence;
use fake::{Fake, Faker};
use sqlx::PgPool;
use sqlx::types::Json;
use std::time::Instant;
use uuid::Uuid;

use tally_models::{CustomerId, InvoiceId, InvoiceStatus, InvoiceTemplate, LineItem, PaperSize, TeamId};

use super::models::{CustomerSeed, InvoiceSeed, SeededInvoice, TeamSeed};

const STATUSES: [InvoiceStatus; 5] = [
    InvoiceStatus::Draft,
    InvoiceStatus::Unpaid,
    InvoiceStatus::Overdue,
    InvoiceStatus::Paid,
    InvoiceStatus::Canceled,
];

const CURRENCIES: [&str; 3] = ["USD", "EUR", "SEK"];

pub fn generate_team() -> TeamSeed {
    TeamSeed {
        name: CompanyName().fake(),
    }
}

pub fn generate_customers(count: usize) -> Vec<CustomerSeed> {
    (0..count)
        .map(|_| {
            let name: String = CompanyName().fake();
            let slug: String = name
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            let suffix: String = DomainSuffix().fake();

            CustomerSeed {
                website: Faker
                    .fake::<bool>()
                    .then(|| format!("{}.{}", slug, suffix)),
                email: SafeEmail().fake(),
                name,
            }
        })
        .collect()
}

/// Generates invoices spread over the given customers.
///
/// Every third invoice uses the letter template; the others keep the A4
/// default. Every fourth one carries a typed customer name instead of
/// relying on the customer relation.
pub fn generate_invoices(
    customer_ids: &[CustomerId],
    customers: &[CustomerSeed],
    count: usize,
) -> Vec<InvoiceSeed> {
    (0..count)
        .map(|idx| {
            let customer = (!customer_ids.is_empty()).then(|| idx % customer_ids.len());

            let line_items: Vec<LineItem> = (0..(1..5).fake::<usize>())
                .map(|_| LineItem {
                    name: Buzzword().fake(),
                    quantity: (1..10).fake::<u32>() as f64,
                    price: ((1_000..50_000).fake::<u32>() as f64) / 100.0,
                })
                .collect();
            let amount = line_items.iter().map(LineItem::total).sum::<f64>();

            let template = InvoiceTemplate {
                size: if idx % 3 == 0 {
                    PaperSize::Letter
                } else {
                    PaperSize::A4
                },
                ..InvoiceTemplate::default()
            };

            InvoiceSeed {
                invoice_number: format!("INV-{:04}", idx + 1),
                status: STATUSES[idx % STATUSES.len()],
                currency: CURRENCIES[idx % CURRENCIES.len()].to_string(),
                customer_id: customer.map(|c| customer_ids[c]),
                customer_name: match customer {
                    Some(c) if idx % 4 == 0 => customers.get(c).map(|c| format!("{} (billing)", c.name)),
                    _ => None,
                },
                vat: template.include_vat.then(|| (amount * 0.25 * 100.0).round() / 100.0),
                line_items,
                amount,
                template,
                due_in_days: (7..45).fake(),
                note: Faker.fake::<bool>().then(|| Sentence(4..10).fake()),
            }
        })
        .collect()
}

pub async fn insert_team(db: &PgPool, team: &TeamSeed) -> Result<TeamId, Box<dyn std::error::Error>> {
    let id = sqlx::query_scalar::<_, Uuid>("INSERT INTO teams (name) VALUES ($1) RETURNING id")
        .bind(&team.name)
        .fetch_one(db)
        .await?;

    Ok(TeamId::from(id))
}

pub async fn insert_customers(
    db: &PgPool,
    team_id: TeamId,
    customers: &[CustomerSeed],
) -> Result<Vec<CustomerId>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(customers.len());

    for customer in customers {
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO customers (team_id, name, website, email)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(team_id)
        .bind(&customer.name)
        .bind(&customer.website)
        .bind(&customer.email)
        .fetch_one(&mut *tx)
        .await?;

        ids.push(CustomerId::from(id));
    }

    tx.commit().await?;
    Ok(ids)
}

pub async fn insert_invoices(
    db: &PgPool,
    team_id: TeamId,
    invoices: &[InvoiceSeed],
) -> Result<Vec<SeededInvoice>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;
    let mut seeded = Vec::with_capacity(invoices.len());
    let now = chrono::Utc::now();

    for invoice in invoices {
        // Amounts are NUMERIC columns; the float8 casts let sqlx bind f64.
        let id = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO invoices (
                team_id, customer_id, invoice_number, status, currency,
                issue_date, due_date, line_items, amount, vat,
                customer_name, note, template
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9::float8, $10::float8, $11, $12, $13)
             ON CONFLICT (team_id, invoice_number) DO NOTHING
             RETURNING id",
        )
        .bind(team_id)
        .bind(invoice.customer_id)
        .bind(&invoice.invoice_number)
        .bind(invoice.status)
        .bind(&invoice.currency)
        .bind(now)
        .bind(now + chrono::Duration::days(invoice.due_in_days))
        .bind(Json(&invoice.line_items))
        .bind(invoice.amount)
        .bind(invoice.vat)
        .bind(&invoice.customer_name)
        .bind(&invoice.note)
        .bind(Json(&invoice.template))
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(id) = id {
            seeded.push(SeededInvoice {
                id: InvoiceId::from(id),
                invoice_number: invoice.invoice_number.clone(),
            });
        }
    }

    tx.commit().await?;
    Ok(seeded)
}

/// Deletes every team; customers and invoices cascade.
pub async fn clear_all(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing seeded data...");

    let result = sqlx::query("DELETE FROM teams")
        .execute(db)
        .await?
        .rows_affected();

    println!("   ✓ Deleted {} teams in {:?}", result, start_time.elapsed());

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_customers() {
        let customers = generate_customers(4);
        assert_eq!(customers.len(), 4);
        assert!(customers.iter().all(|c| !c.name.is_empty()));
        assert!(customers.iter().all(|c| c.email.contains('@')));
    }

    #[test]
    fn test_generate_invoices() {
        let customers = generate_customers(2);
        let ids = vec![CustomerId::new(), CustomerId::new()];
        let invoices = generate_invoices(&ids, &customers, 6);

        assert_eq!(invoices.len(), 6);
        assert_eq!(invoices[0].invoice_number, "INV-0001");
        assert_eq!(invoices[0].template.size, PaperSize::Letter);
        assert_eq!(invoices[1].template.size, PaperSize::A4);
        assert_eq!(invoices[1].customer_id, Some(ids[1]));

        for invoice in &invoices {
            assert!(!invoice.line_items.is_empty());
            let sum: f64 = invoice.line_items.iter().map(LineItem::total).sum();
            assert_eq!(invoice.amount, sum);
        }
    }

    #[test]
    fn test_generate_invoices_without_customers() {
        let invoices = generate_invoices(&[], &[], 2);
        assert!(invoices.iter().all(|i| i.customer_id.is_none()));
        assert!(invoices.iter().all(|i| i.customer_name.is_none()));
    }
}
