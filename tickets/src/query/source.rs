//! Where train records come from.

use std::future::Future;
use std::path::Path;

use super::client::{QueryClient, TicketQuery};
use super::error::QueryError;
use super::types::parse_response;

/// Provider of raw train records for a query.
///
/// This abstraction lets the search pipeline run against the live endpoint
/// or a saved response.
pub trait TicketSource {
    /// Fetch the raw `|`-delimited records for a query.
    fn fetch_records(
        &self,
        query: &TicketQuery,
    ) -> impl Future<Output = Result<Vec<String>, QueryError>>;
}

impl TicketSource for QueryClient {
    fn fetch_records(
        &self,
        query: &TicketQuery,
    ) -> impl Future<Output = Result<Vec<String>, QueryError>> {
        QueryClient::fetch_records(self, query)
    }
}

/// Serves the records of a saved query response.
///
/// Useful for working offline: the same records are returned whatever the
/// query.
#[derive(Debug, Clone)]
pub struct ReplayTicketSource {
    records: Vec<String>,
}

impl ReplayTicketSource {
    /// Load a response body saved from the query endpoint.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, QueryError> {
        let path = path.as_ref();
        let body = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| QueryError::Replay {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            records: parse_response(&body)?,
        })
    }

    /// Serve a fixed list of records.
    pub fn from_records(records: Vec<String>) -> Self {
        Self { records }
    }
}

impl TicketSource for ReplayTicketSource {
    async fn fetch_records(&self, query: &TicketQuery) -> Result<Vec<String>, QueryError> {
        tracing::debug!(from = %query.from, to = %query.to, date = %query.date, "replaying saved response");
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Telecode, TravelDate};
    use chrono::NaiveDate;

    fn query() -> TicketQuery {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        TicketQuery {
            date: TravelDate::parse("2024-03-20", today).unwrap(),
            from: Telecode::parse("BJP").unwrap(),
            to: Telecode::parse("SHH").unwrap(),
        }
    }

    #[tokio::test]
    async fn replays_saved_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");
        std::fs::write(&path, r#"{"data": {"result": ["x|y", "z"]}}"#).unwrap();

        let source = ReplayTicketSource::from_file(&path).await.unwrap();
        let records = source.fetch_records(&query()).await.unwrap();
        assert_eq!(records, vec!["x|y".to_string(), "z".to_string()]);
    }

    #[tokio::test]
    async fn missing_file_is_replay_error() {
        let err = ReplayTicketSource::from_file("/nonexistent/response.json")
            .await
            .unwrap_err();
        assert!(matches!(err, QueryError::Replay { .. }));
    }

    #[tokio::test]
    async fn malformed_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");
        std::fs::write(&path, r#"{"data": null}"#).unwrap();

        let err = ReplayTicketSource::from_file(&path).await.unwrap_err();
        assert!(matches!(err, QueryError::Json { .. }));
    }
}
