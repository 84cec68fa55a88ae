//! Checkout configuration.
//!
//! Every endpoint and store url the form talks to is read from the environment
//! once, in the binary, and handed to the [controller](crate::checkout::CheckoutForm)
//! at construction. Nothing in the library reads the environment by itself.

use envconfig::Envconfig;
use std::time::Duration;

/// Configuration values required by the checkout form.
#[derive(Envconfig, Clone, Debug)]
pub struct CheckoutConfig {
    /// Order-processing webhook that records the simulated outcome
    /// Example: "https://shop.example/webhook/payment/process"
    pub reporting_endpoint: String,

    /// Base url of the store the user returns to
    /// Example: "https://shop.example"
    pub store_base_url: String,

    /// Path appended to the store base after a successful payment
    #[envconfig(default = "/profile")]
    pub success_path: String,

    /// Path appended to the store base after a declined payment
    #[envconfig(default = "/cart")]
    pub failure_path: String,

    /// Delay before navigating away from the success view
    #[envconfig(default = "2000")]
    pub success_redirect_delay_ms: u64,

    /// Suffix shown next to the amount
    #[envconfig(default = "₸")]
    pub currency_symbol: String,
}

impl CheckoutConfig {
    /// Builds a config with the default paths, delay and currency
    pub fn new(reporting_endpoint: impl Into<String>, store_base_url: impl Into<String>) -> Self {
        Self {
            reporting_endpoint: reporting_endpoint.into(),
            store_base_url: store_base_url.into(),
            success_path: "/profile".into(),
            failure_path: "/cart".into(),
            success_redirect_delay_ms: crate::consts::SUCCESS_REDIRECT_DELAY.as_millis() as u64,
            currency_symbol: "₸".into(),
        }
    }

    fn store_url(&self, path: &str) -> String {
        format!(
            "{base}/{path}",
            base = self.store_base_url.trim_end_matches('/'),
            path = path.trim_start_matches('/')
        )
    }

    /// Destination after a successful payment when the link carried no `returnUrl`
    pub fn success_url(&self) -> String {
        self.store_url(&self.success_path)
    }

    /// Destination after a declined payment
    pub fn failure_url(&self) -> String {
        self.store_url(&self.failure_path)
    }

    pub fn success_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.success_redirect_delay_ms)
    }
}
