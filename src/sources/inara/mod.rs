use std::sync::{Arc, LazyLock};

use log::{debug, info, warn};
use regex::Regex;

use self::{
    catalog::{parse_catalog, Catalog},
    rows::parse_records,
    types::Record,
};
use super::{PriceSource, PricingError};
use crate::transport::Transport;

pub mod catalog;
pub mod rows;
pub mod types;

static REF_SYSTEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"refid2=(\d+)").unwrap());

/// Price source backed by the inara.cz commodity search
pub struct Inara<T> {
    transport: T,
    base_url: String,
    catalog: Arc<Catalog>,
}

impl<T: Transport + Sync> Inara<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self::with_catalog(transport, base_url, Arc::new(Catalog::new()))
    }

    /// Builds a source that shares an already existing commodity catalog
    pub fn with_catalog(transport: T, base_url: &str, catalog: Arc<Catalog>) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_owned(),
            catalog,
        }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    fn listing_url(&self) -> String {
        format!("{}/commodity/", self.base_url)
    }

    fn goods_url(&self, commodity_id: u32, ref_system_id: u32) -> String {
        format!(
            "{}/ajaxaction.php?act=goodsdata&refname=sellmax&refid={}&refid2={}",
            self.base_url, commodity_id, ref_system_id
        )
    }

    /// Fetches the commodity listing and reads every known commodity from it
    pub async fn load_catalog(&self) -> Result<Vec<(u32, String)>, PricingError> {
        let html = self.transport.fetch(&self.listing_url()).await;

        parse_catalog(&html)
    }

    /// Returns the site id of a commodity, loading the catalog on first use
    pub async fn resolve_commodity_id(&self, name: &str) -> Result<Option<u32>, PricingError> {
        self.catalog.lookup(name, || self.load_catalog()).await
    }

    /// Runs the commodity search for `system_name` and picks the reference
    /// system id out of the result links
    pub async fn resolve_reference_system_id(
        &self,
        commodity_id: u32,
        system_name: &str,
    ) -> Option<u32> {
        let commodity_id = commodity_id.to_string();
        let page = self
            .transport
            .submit(
                &self.listing_url(),
                &[
                    ("formact", "SEARCH_COMMODITIES"),
                    ("searchcommodity", commodity_id.as_str()),
                    ("searchcommoditysystem", system_name),
                ],
            )
            .await;

        let id = REF_SYSTEM
            .captures(&page)
            .and_then(|c| c[1].parse::<u32>().ok())
            .filter(|id| *id != 0);

        if id.is_none() {
            debug!("No reference system id in search result for {}", system_name);
        }

        id
    }

    /// Fetches the goods table for a commodity around a reference system
    pub async fn extract_records(&self, commodity_id: u32, ref_system_id: u32) -> Vec<Record> {
        let html = self
            .transport
            .fetch(&self.goods_url(commodity_id, ref_system_id))
            .await;

        parse_records(&html)
    }
}

impl<T: Transport + Sync> PriceSource for Inara<T> {
    async fn get_records(
        &self,
        commodity: &str,
        reference_system: &str,
    ) -> Result<Vec<Record>, PricingError> {
        let Some(commodity_id) = self.resolve_commodity_id(commodity).await? else {
            warn!("Unknown commodity {}", commodity);
            return Err(PricingError::CommodityNotFound(commodity.to_owned()));
        };

        let Some(ref_system_id) = self
            .resolve_reference_system_id(commodity_id, reference_system)
            .await
        else {
            warn!("Unknown reference system {}", reference_system);
            return Err(PricingError::SystemNotFound(reference_system.to_owned()));
        };

        let records = self.extract_records(commodity_id, ref_system_id).await;
        info!(
            "Found {} stations for {} near {}",
            records.len(),
            commodity,
            reference_system
        );

        Ok(records)
    }
}
