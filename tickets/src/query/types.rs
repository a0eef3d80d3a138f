//! Ticket query response DTOs.
//!
//! Only the parts of the response this tool reads are modelled. The service
//! sends many more fields (status flags, a telecode → name map, messages),
//! which serde ignores.

use serde::Deserialize;

use super::error::QueryError;

/// Top-level response from the ticket query endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub data: QueryData,
}

/// The `data` object of a query response.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryData {
    /// One `|`-delimited record per train.
    pub result: Vec<String>,
}

/// Extract the raw train records from a response body.
pub fn parse_response(body: &str) -> Result<Vec<String>, QueryError> {
    let response: QueryResponse = serde_json::from_str(body).map_err(|e| QueryError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })?;

    Ok(response.data.result)
}
