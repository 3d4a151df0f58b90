use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::contract::{MarketingContext, Product};

/// Two-shape result handed back to the assistant host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultEnvelope {
    pub success: bool,
    pub message: String,
    pub product: Product,
    pub context: MarketingContext,
}

impl ResultEnvelope {
    pub fn started(product: Product, context: MarketingContext, job_label: &str) -> Self {
        let message = format!(
            "Successfully started Ad-Forge job {job_label} for the {}",
            product.display_name()
        );
        Self {
            success: true,
            message,
            product,
            context,
        }
    }

    pub fn failed(product: Product, context: MarketingContext, error: &dyn Display) -> Self {
        Self {
            success: false,
            message: format!("Failed to create advertisement: {error}"),
            product,
            context,
        }
    }
}
