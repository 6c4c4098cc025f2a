use std::time::Duration;

use log::{debug, error};
use reqwest::Client;

use crate::{config::Config, sources::PricingError};

/// Raw text access to the data source.
///
/// Implementations never fail towards the caller: any transport problem is
/// logged and surfaces as an empty body.
pub trait Transport {
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = String> + Send;

    fn submit(
        &self,
        url: &str,
        fields: &[(&str, &str)],
    ) -> impl std::future::Future<Output = String> + Send;
}

#[derive(Clone)]
pub struct HttpTransport {
    req_client: Client,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self, PricingError> {
        let client = match reqwest::ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to build http client: {:?}", e);
                return Err(PricingError::InternalError(e.to_string()));
            }
        };

        Ok(Self { req_client: client })
    }
}

async fn read_body(url: &str, req: reqwest::RequestBuilder) -> String {
    let res = match req.send().await {
        Ok(res) => res,
        Err(e) => {
            error!("Failed to send request to {}: {:?}", url, e);
            return String::new();
        }
    };

    if !res.status().is_success() {
        error!("Request to {} failed with status {}", url, res.status());
        return String::new();
    }

    match res.text().await {
        Ok(body) => {
            debug!("Received {} bytes from {}", body.len(), url);
            body
        }
        Err(e) => {
            error!("Failed to read response body from {}: {:?}", url, e);
            String::new()
        }
    }
}

impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> String {
        read_body(url, self.req_client.get(url)).await
    }

    async fn submit(&self, url: &str, fields: &[(&str, &str)]) -> String {
        read_body(url, self.req_client.post(url).form(fields)).await
    }
}
