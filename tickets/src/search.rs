//! The search pipeline: fetch records for a resolved query and decode them.

use crate::domain::CategoryFilter;
use crate::query::{DecodeOutcome, QueryError, TicketQuery, TicketSource, TrainRecordDecoder};
use crate::stations::StationDirectory;

/// Fetch and decode the trains for a query.
///
/// Records that fail to decode are skipped and reported in the outcome;
/// only a failed fetch is an error.
pub async fn search<S: TicketSource>(
    source: &S,
    directory: &StationDirectory,
    query: &TicketQuery,
    filter: &CategoryFilter,
) -> Result<DecodeOutcome, QueryError> {
    let records = source.fetch_records(query).await?;
    let outcome = TrainRecordDecoder::new(directory, filter).decode_all(&records);

    if !outcome.skipped.is_empty() {
        tracing::warn!(
            skipped = outcome.skipped.len(),
            total = records.len(),
            "some train records could not be decoded"
        );
    }
    tracing::debug!(shown = outcome.entries.len(), total = records.len(), "search complete");

    Ok(outcome)
}
