//! Database seeding for local development.
//!
//! Creates one fake team with a handful of customers and invoices, then
//! returns the invoice ids so the caller can mint public links for them.

mod invoices;
mod models;

use std::time::Instant;

use sqlx::PgPool;

pub use invoices::{
    clear_all, generate_customers, generate_invoices, generate_team, insert_customers,
    insert_invoices, insert_team,
};
pub use models::{CustomerSeed, InvoiceSeed, SeedConfig, SeededInvoice, TeamSeed};

/// Seeds a team, its customers and invoices in one go.
pub async fn seed_all(
    db: &PgPool,
    config: SeedConfig,
) -> Result<Vec<SeededInvoice>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "🌱 Seeding 1 team, {} customers and {} invoices...",
        config.customers, config.invoices
    );

    let team = generate_team();
    let team_id = insert_team(db, &team).await?;
    println!("   ✓ Created team \"{}\"", team.name);

    let customers = generate_customers(config.customers);
    let customer_ids = insert_customers(db, team_id, &customers).await?;
    println!("   ✓ Created {} customers", customer_ids.len());

    let invoices = generate_invoices(&customer_ids, &customers, config.invoices);
    let seeded = insert_invoices(db, team_id, &invoices).await?;
    println!("   ✓ Created {} invoices", seeded.len());

    println!("\n✅ Seeding finished in {:?}", start_time.elapsed());

    Ok(seeded)
}
