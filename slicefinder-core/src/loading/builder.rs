//! Builds the place catalog from the candidate store and places service.

use std::time::Duration;

use futures::future::try_join_all;
use log::{info, warn};
use tokio::time::timeout;

use super::config::FinderConfig;
use crate::Error;
use crate::catalog::LocationCatalog;
use crate::model::PlaceRecord;
use crate::sources::{CandidateStore, PlaceSource};

/// Resolve every candidate id into a full place record and keep the ones
/// currently open.
///
/// Lookups run concurrently and are joined as one batch: each call gets its
/// own deadline, and any failure fails the whole build rather than silently
/// dropping a candidate.
///
/// # Errors
///
/// Returns an error if the candidate list cannot be fetched, or any lookup
/// fails or times out.
pub async fn build_catalog<S, P>(
    config: &FinderConfig,
    store: &S,
    places: &P,
) -> Result<LocationCatalog, Error>
where
    S: CandidateStore,
    P: PlaceSource,
{
    let ids = store.candidate_ids().await?;
    info!("Resolving {} candidate places", ids.len());

    let deadline = config.lookup_timeout();
    let lookups = ids.iter().map(|id| lookup_with_deadline(places, id, deadline));
    let records = try_join_all(lookups).await?;

    let total = records.len();
    let open: Vec<PlaceRecord> = records.into_iter().filter(|p| p.open_now).collect();
    if open.len() < total {
        info!("Filtered {} closed places out of {total}", total - open.len());
    }
    if open.is_empty() {
        warn!("No candidate places are currently open");
    }

    Ok(LocationCatalog::new(open))
}

async fn lookup_with_deadline<P: PlaceSource>(
    places: &P,
    place_id: &str,
    deadline: Duration,
) -> Result<PlaceRecord, Error> {
    match timeout(deadline, places.lookup_place(place_id)).await {
        Ok(result) => result,
        Err(_) => Err(Error::ServiceError(format!(
            "lookup of {place_id} timed out"
        ))),
    }
}
