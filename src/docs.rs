use utoipa::OpenApi;

use tally_models::{PageMetadata, Robots};

use crate::modules::health::controller::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health_check,
        crate::modules::invoices::controller::get_invoice_metadata,
    ),
    components(
        schemas(
            HealthResponse,
            PageMetadata,
            Robots,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Invoices", description = "Public invoice metadata")
    ),
    info(
        title = "Tally API",
        version = "0.1.0",
        description = "Public invoice metadata and service endpoints. Invoice pages themselves are served as HTML under `/{locale}/i/{token}`.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
