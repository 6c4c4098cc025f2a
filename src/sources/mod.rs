pub mod inara;

use thiserror::Error;

use self::inara::types::Record;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("commodity {0:?} not found in catalog")]
    CommodityNotFound(String),
    #[error("reference system {0:?} not found")]
    SystemNotFound(String),
    #[error("failed to parse commodity catalog: {0}")]
    CatalogParse(String),
    #[error("invalid landing pad size {0:?}")]
    InvalidPad(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("internal error: {0}")]
    InternalError(String),
}

pub trait PriceSource {
    /// Lists every station trading `commodity` around `reference_system`
    fn get_records(
        &self,
        commodity: &str,
        reference_system: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Record>, PricingError>> + Send;
}
