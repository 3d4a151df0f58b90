use std::fmt::Display;

use ad_forge_core::contract::{build_forge_request, MarketingContext, Product};
use ad_forge_core::envelope::ResultEnvelope;
use ad_forge_core::event::{decode_create_ad_event, CreateAdEvent, EventError};
use serde_json::Value;
use tracing::{error, info, warn};

use crate::adapters::forge_backend::ForgeBackend;

const COMPONENT: &str = "create_ad";

/// Start an ad generation job for `product` and report the outcome.
///
/// Exactly one backend call is made. Backend errors never escape: they are
/// folded into a failed envelope. A product without a catalog SKU is still
/// forwarded, with the `sku` field left out of the request.
pub fn create_ad_forge_ad(
    product: Product,
    marketing: MarketingContext,
    backend: &impl ForgeBackend,
) -> ResultEnvelope {
    let request = build_forge_request(&product, &marketing);
    let product_name = product.display_name();

    if request.sku.is_none() {
        warn!(
            component = COMPONENT,
            event = "sku_unresolved",
            product = %product_name,
            "no SKU mapped for product; forwarding request without one"
        );
    }

    info!(
        component = COMPONENT,
        event = "forge_submit",
        product = %product_name,
        sku = ?request.sku,
        language = %request.language
    );

    match backend.submit_job(&request) {
        Ok(accepted) => {
            let job_label = accepted.job_label();
            info!(
                component = COMPONENT,
                event = "forge_accepted",
                product = %product_name,
                job_id = %job_label,
                status = ?accepted.status
            );
            ResultEnvelope::started(product, marketing, &job_label)
        }
        Err(err) => {
            error!(
                component = COMPONENT,
                event = "forge_failed",
                product = %product_name,
                error = %err
            );
            ResultEnvelope::failed(product, marketing, &err)
        }
    }
}

/// Decode a raw create-ad event and run it against a backend built on demand.
///
/// A payload that does not decode is returned as an error for the host to
/// report, and no backend is built. A backend that cannot be built becomes a
/// failed envelope, the same as a failed submit.
pub fn handle_create_ad_event<B, E>(
    event: Value,
    build_backend: impl FnOnce() -> Result<B, E>,
) -> Result<ResultEnvelope, EventError>
where
    B: ForgeBackend,
    E: Display,
{
    let CreateAdEvent {
        product,
        marketing_context,
    } = decode_create_ad_event(event)?;

    match build_backend() {
        Ok(backend) => Ok(create_ad_forge_ad(product, marketing_context, &backend)),
        Err(err) => {
            error!(
                component = COMPONENT,
                event = "backend_unavailable",
                product = %product.display_name(),
                error = %err
            );
            Ok(ResultEnvelope::failed(product, marketing_context, &err))
        }
    }
}
