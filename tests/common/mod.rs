#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use fake::Fake;
use fake::faker::company::en::{Buzzword, CompanyName};
use fake::faker::lorem::en::Sentence;
use http_body_util::BodyExt;
use tally::modules::invoices::repository::InvoiceRepository;
use tally::router::init_router;
use tally::state::AppState;
use tally_auth::{create_session_token, sign_invoice_token};
use tally_config::{
    BetaFailurePolicy, CorsConfig, GateConfig, I18nConfig, InvoiceTokenConfig, ServerConfig,
    SessionConfig,
};
use tally_core::AppError;
use tally_edge_config::{EdgeConfigError, EdgeConfigStore, MemoryEdgeConfig};
use tally_models::{
    Customer, CustomerId, Invoice, InvoiceId, InvoiceStatus, InvoiceTemplate, LineItem, PaperSize,
    Team, TeamId,
};

pub const BETA_USER: &str = "user-beta";
pub const OTHER_USER: &str = "user-waiting";

/// Invoices held in memory, keyed by id.
#[derive(Default)]
pub struct MemoryInvoices {
    invoices: HashMap<InvoiceId, Invoice>,
}

impl MemoryInvoices {
    pub fn with(invoices: impl IntoIterator<Item = Invoice>) -> Self {
        Self {
            invoices: invoices.into_iter().map(|i| (i.id, i)).collect(),
        }
    }
}

#[async_trait]
impl InvoiceRepository for MemoryInvoices {
    async fn get_invoice(&self, id: InvoiceId) -> Result<Option<Invoice>, AppError> {
        Ok(self.invoices.get(&id).cloned())
    }
}

/// Every lookup fails as if the database were down.
pub struct FailingInvoices;

#[async_trait]
impl InvoiceRepository for FailingInvoices {
    async fn get_invoice(&self, _id: InvoiceId) -> Result<Option<Invoice>, AppError> {
        Err(AppError::internal_error("connection refused"))
    }
}

/// Edge config store that cannot be reached.
pub struct UnreachableEdgeConfig;

#[async_trait]
impl EdgeConfigStore for UnreachableEdgeConfig {
    async fn get_list(&self, _key: &str) -> Result<Option<Vec<String>>, EdgeConfigError> {
        Err(EdgeConfigError::Unavailable("timed out".to_string()))
    }

    async fn set_list(&self, _key: &str, _values: &[String]) -> Result<(), EdgeConfigError> {
        Err(EdgeConfigError::Unavailable("timed out".to_string()))
    }
}

pub fn token_config() -> InvoiceTokenConfig {
    InvoiceTokenConfig {
        secret: "test-invoice-secret".to_string(),
        expiry: None,
    }
}

pub fn session_config() -> SessionConfig {
    SessionConfig {
        secret: "test-session-secret".to_string(),
        cookie_name: "sb-access-token".to_string(),
    }
}

pub fn beta_store() -> Arc<dyn EdgeConfigStore> {
    Arc::new(MemoryEdgeConfig::with_list("beta", [BETA_USER]))
}

pub fn test_state(
    invoices: Arc<dyn InvoiceRepository>,
    edge_config: Arc<dyn EdgeConfigStore>,
) -> AppState {
    AppState {
        invoices,
        edge_config,
        token_config: token_config(),
        session_config: session_config(),
        i18n_config: I18nConfig::default(),
        gate_config: GateConfig::default(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3001".to_string()],
        },
        server_config: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3001,
            public_url: "http://localhost:3001".to_string(),
            static_dir: "static".to_string(),
        },
        metrics: None,
    }
}

pub fn test_app(invoices: Vec<Invoice>) -> axum::Router {
    init_router(test_state(
        Arc::new(MemoryInvoices::with(invoices)),
        beta_store(),
    ))
}

pub fn test_app_with_policy(policy: BetaFailurePolicy) -> axum::Router {
    let mut state = test_state(
        Arc::new(MemoryInvoices::default()),
        Arc::new(UnreachableEdgeConfig),
    );
    state.gate_config.failure_policy = policy;
    init_router(state)
}

pub fn fake_invoice(size: PaperSize) -> Invoice {
    let company: String = CompanyName().fake();
    let customer: String = CompanyName().fake();
    let item: String = Buzzword().fake();
    let note: String = Sentence(3..8).fake();

    Invoice {
        id: InvoiceId::new(),
        invoice_number: format!("INV-{:04}", (1..9999).fake::<u32>()),
        status: InvoiceStatus::Unpaid,
        currency: "USD".to_string(),
        issue_date: None,
        due_date: None,
        line_items: vec![LineItem {
            name: item,
            quantity: 2.0,
            price: 150.0,
        }],
        amount: 300.0,
        vat: None,
        tax: None,
        discount: None,
        from_details: Some(company.clone()),
        customer_details: None,
        payment_details: None,
        note: Some(note),
        customer_name: None,
        customer: Some(Customer {
            id: CustomerId::new(),
            name: customer,
            website: None,
            email: None,
        }),
        team: Team {
            id: TeamId::new(),
            name: company,
        },
        template: InvoiceTemplate {
            size,
            ..InvoiceTemplate::default()
        },
    }
}

pub fn invoice_token(invoice: &Invoice) -> String {
    sign_invoice_token(invoice.id.0, &token_config()).unwrap()
}

pub fn session_cookie(user_id: &str) -> String {
    let config = session_config();
    let token = create_session_token(user_id, Some("someone@example.com"), 3600, &config).unwrap();
    format!("{}={}", config.cookie_name, token)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("cookie", cookie)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
