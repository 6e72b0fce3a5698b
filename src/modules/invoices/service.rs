use tracing::{debug, info, instrument, warn};

use tally_auth::verify_invoice_token;
use tally_config::InvoiceTokenConfig;
use tally_core::AppError;
use tally_models::{Invoice, InvoiceId, PageMetadata};

use crate::metrics::track_invoice_lookup;

use super::repository::InvoiceRepository;

pub struct InvoiceService;

impl InvoiceService {
    /// Verifies a link token and loads the invoice it points to.
    ///
    /// The error status tells the three failure kinds apart for logging
    /// (401 bad token, 404 unknown invoice, 5xx backend error); callers on
    /// the public surface must not expose that difference.
    #[instrument(skip(repository, config, token))]
    pub async fn get_by_token(
        repository: &dyn InvoiceRepository,
        config: &InvoiceTokenConfig,
        token: &str,
    ) -> Result<Invoice, AppError> {
        let claims = verify_invoice_token(token, config).inspect_err(|e| {
            debug!(error = %e, "Invoice token rejected");
            track_invoice_lookup("invalid_token");
        })?;

        let id = InvoiceId::from(claims.id);

        match repository.get_invoice(id).await {
            Ok(Some(invoice)) => {
                info!(invoice.id = %id, invoice.number = %invoice.invoice_number, "Invoice resolved");
                track_invoice_lookup("found");
                Ok(invoice)
            }
            Ok(None) => {
                debug!(invoice.id = %id, "Token verified but invoice does not exist");
                track_invoice_lookup("not_found");
                Err(AppError::not_found(anyhow::anyhow!("Invoice not found")))
            }
            Err(e) => {
                warn!(invoice.id = %id, error = %e, "Invoice lookup failed");
                track_invoice_lookup("error");
                Err(e)
            }
        }
    }

    /// Document metadata for the invoice behind `token`.
    ///
    /// Runs its own lookup. Every failure yields the `Invalid Invoice`
    /// metadata; indexing is disallowed either way.
    pub async fn resolve_metadata(
        repository: &dyn InvoiceRepository,
        config: &InvoiceTokenConfig,
        token: &str,
    ) -> PageMetadata {
        match Self::get_by_token(repository, config, token).await {
            Ok(invoice) => PageMetadata::for_invoice(&invoice),
            Err(_) => PageMetadata::invalid_invoice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::http::StatusCode;
    use tally_auth::sign_invoice_token;
    use tally_models::{InvoiceStatus, InvoiceTemplate, Team, TeamId};
    use uuid::Uuid;

    struct SingleInvoice(Invoice);

    #[async_trait]
    impl InvoiceRepository for SingleInvoice {
        async fn get_invoice(&self, id: InvoiceId) -> Result<Option<Invoice>, AppError> {
            Ok((self.0.id == id).then(|| self.0.clone()))
        }
    }

    struct Broken;

    #[async_trait]
    impl InvoiceRepository for Broken {
        async fn get_invoice(&self, _id: InvoiceId) -> Result<Option<Invoice>, AppError> {
            Err(AppError::internal_error("connection reset"))
        }
    }

    fn config() -> InvoiceTokenConfig {
        InvoiceTokenConfig {
            secret: "service_test_secret".to_string(),
            expiry: None,
        }
    }

    fn invoice() -> Invoice {
        Invoice {
            id: InvoiceId::from_u128(7),
            invoice_number: "INV-0007".to_string(),
            status: InvoiceStatus::Unpaid,
            currency: "EUR".to_string(),
            issue_date: None,
            due_date: None,
            line_items: Vec::new(),
            amount: 10.0,
            vat: None,
            tax: None,
            discount: None,
            from_details: None,
            customer_details: None,
            payment_details: None,
            note: None,
            customer_name: None,
            customer: None,
            team: Team {
                id: TeamId::from_u128(1),
                name: "Northwind".to_string(),
            },
            template: InvoiceTemplate::default(),
        }
    }

    #[tokio::test]
    async fn test_get_by_token_found() {
        let repo = SingleInvoice(invoice());
        let token = sign_invoice_token(invoice().id.into_inner(), &config()).unwrap();

        let found = InvoiceService::get_by_token(&repo, &config(), &token)
            .await
            .unwrap();
        assert_eq!(found.invoice_number, "INV-0007");
    }

    #[tokio::test]
    async fn test_failure_statuses() {
        let repo = SingleInvoice(invoice());

        let err = InvoiceService::get_by_token(&repo, &config(), "bogus")
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);

        let token = sign_invoice_token(Uuid::new_v4(), &config()).unwrap();
        let err = InvoiceService::get_by_token(&repo, &config(), &token)
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let token = sign_invoice_token(invoice().id.into_inner(), &config()).unwrap();
        let err = InvoiceService::get_by_token(&Broken, &config(), &token)
            .await
            .unwrap_err();
        assert!(err.status.is_server_error());
    }

    #[tokio::test]
    async fn test_metadata_collapses_failures() {
        let repo = SingleInvoice(invoice());
        let unknown = sign_invoice_token(Uuid::new_v4(), &config()).unwrap();
        let known = sign_invoice_token(invoice().id.into_inner(), &config()).unwrap();

        let invalid = InvoiceService::resolve_metadata(&repo, &config(), "bogus").await;
        let missing = InvoiceService::resolve_metadata(&repo, &config(), &unknown).await;
        let broken = InvoiceService::resolve_metadata(&Broken, &config(), &known).await;

        assert_eq!(invalid, PageMetadata::invalid_invoice());
        assert_eq!(missing, invalid);
        assert_eq!(broken, invalid);

        let ok = InvoiceService::resolve_metadata(&repo, &config(), &known).await;
        assert_eq!(ok.title, "Invoice INV-0007 | Northwind");
        assert_eq!(ok.description.as_deref(), Some("Invoice for Customer"));
    }
}
