use std::{collections::HashMap, future::Future, sync::LazyLock};

use log::{info, warn};
use regex::Regex;
use tokio::sync::OnceCell;

use crate::{normalize::clean_text, sources::PricingError};

static SELECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<select\b[^>]*name="searchcommodity"[^>]*>(.*?)</select>"#).unwrap()
});
static OPTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<option\b[^>]*value="(\d+)"[^>]*>(.*?)</option>"#).unwrap()
});

/// Commodity name to id lookup table, loaded at most once.
///
/// The first lookup fetches and parses the commodity listing; concurrent
/// callers wait for that load instead of starting their own. A failed load
/// leaves the catalog empty so the next lookup tries again. Once populated
/// it is never refreshed.
#[derive(Debug, Default)]
pub struct Catalog {
    ids: OnceCell<HashMap<String, u32>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.ids.initialized()
    }

    /// Looks up a commodity by its display name, ignoring case.
    ///
    /// `load` is only invoked when the catalog hasn't been populated yet.
    pub async fn lookup<F, Fut>(&self, name: &str, load: F) -> Result<Option<u32>, PricingError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<(u32, String)>, PricingError>>,
    {
        let ids = self
            .ids
            .get_or_try_init(|| async move {
                let entries = load().await?;
                info!("Loaded {} commodities into the catalog", entries.len());

                Ok::<_, PricingError>(
                    entries
                        .into_iter()
                        .map(|(id, name)| (name.to_lowercase(), id))
                        .collect(),
                )
            })
            .await?;

        Ok(ids.get(&name.to_lowercase()).copied())
    }
}

/// Extracts `(id, name)` pairs from the commodity selector on the listing page
pub fn parse_catalog(html: &str) -> Result<Vec<(u32, String)>, PricingError> {
    let Some(select) = SELECT.captures(html) else {
        warn!("Commodity selector not found in listing page");
        return Err(PricingError::CatalogParse(
            "commodity selector not found".to_owned(),
        ));
    };

    let entries: Vec<(u32, String)> = OPTION
        .captures_iter(&select[1])
        .filter_map(|option| {
            // placeholder entries such as "Select commodity" carry id 0
            let id = option[1].parse::<u32>().ok().filter(|id| *id != 0)?;
            Some((id, clean_text(&option[2])))
        })
        .collect();

    if entries.is_empty() {
        warn!("Commodity selector has no options");
        return Err(PricingError::CatalogParse(
            "commodity selector has no options".to_owned(),
        ));
    }

    Ok(entries)
}
