//! Payment methods page route handler.
//!
//! Display only. Payment collection is delegated to the gateway at order
//! time; nothing here validates a UPI ID or moves money.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use tracing::instrument;

/// A UPI app option shown on the payment methods page.
pub struct UpiOption {
    pub name: &'static str,
    pub description: &'static str,
}

/// The UPI apps on display, in the order they appear on the page.
fn upi_options() -> Vec<UpiOption> {
    vec![
        UpiOption {
            name: "GPay",
            description: "Pay with Google Pay",
        },
        UpiOption {
            name: "PhonePe",
            description: "Pay with PhonePe",
        },
        UpiOption {
            name: "Paytm",
            description: "Pay with Paytm",
        },
    ]
}

/// Payment methods page template.
///
/// The manual UPI ID entry lives in the template itself alongside these
/// options.
#[derive(Template, WebTemplate)]
#[template(path = "payment/methods.html")]
pub struct PaymentMethodsTemplate {
    pub options: Vec<UpiOption>,
}

/// Display the UPI payment options.
#[instrument]
pub async fn methods() -> impl IntoResponse {
    PaymentMethodsTemplate {
        options: upi_options(),
    }
}
