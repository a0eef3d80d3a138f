//! Ticket query HTTP client.

use crate::domain::{InputError, Telecode, TravelDate};
use crate::stations::StationDirectory;

use super::error::QueryError;
use super::types::parse_response;

/// Default ticket query endpoint.
const DEFAULT_BASE_URL: &str = "https://kyfw.12306.cn/otn/leftTicket/queryX";

/// Default passenger type.
const DEFAULT_PURPOSE_CODE: &str = "ADULT";

/// Configuration for the query client.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Query endpoint URL
    pub base_url: String,
    /// Passenger type sent as `purpose_codes`
    pub purpose_code: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Skip TLS certificate verification
    pub accept_invalid_certs: bool,
}

impl QueryConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            purpose_code: DEFAULT_PURPOSE_CODE.to_string(),
            timeout_secs: 30,
            accept_invalid_certs: true,
        }
    }

    /// Set a custom endpoint URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the passenger type.
    pub fn with_purpose_code(mut self, code: impl Into<String>) -> Self {
        self.purpose_code = code.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Enable or disable TLS certificate verification.
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A resolved query: travel date and both station telecodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketQuery {
    pub date: TravelDate,
    pub from: Telecode,
    pub to: Telecode,
}

impl TicketQuery {
    /// Resolve station names through the directory.
    pub fn resolve(
        directory: &StationDirectory,
        from: &str,
        to: &str,
        date: TravelDate,
    ) -> Result<Self, InputError> {
        let from = directory
            .resolve(from)
            .ok_or_else(|| InputError::StationNotFound(from.to_string()))?;
        let to = directory
            .resolve(to)
            .ok_or_else(|| InputError::StationNotFound(to.to_string()))?;

        Ok(Self {
            date,
            from: from.clone(),
            to: to.clone(),
        })
    }
}

/// Client for the ticket query endpoint.
#[derive(Debug, Clone)]
pub struct QueryClient {
    http: reqwest::Client,
    base_url: String,
    purpose_code: String,
}

impl QueryClient {
    pub fn new(config: QueryConfig) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            purpose_code: config.purpose_code,
        })
    }

    /// Build the GET request for a query without sending it.
    pub fn build_request(&self, query: &TicketQuery) -> Result<reqwest::Request, QueryError> {
        let request = self
            .http
            .get(&self.base_url)
            .query(&[
                ("leftTicketDTO.train_date", query.date.to_string()),
                ("leftTicketDTO.from_station", query.from.to_string()),
                ("leftTicketDTO.to_station", query.to.to_string()),
                ("purpose_codes", self.purpose_code.clone()),
            ])
            .build()?;

        Ok(request)
    }

    /// Fetch the raw train records for a query.
    pub async fn fetch_records(&self, query: &TicketQuery) -> Result<Vec<String>, QueryError> {
        let request = self.build_request(query)?;
        tracing::debug!(url = %request.url(), "querying tickets");

        let response = self.http.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QueryError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let records = parse_response(&body)?;
        tracing::debug!(count = records.len(), "received train records");

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn directory() -> StationDirectory {
        StationDirectory::from_feed("北京|BJP 上海|SHH")
    }

    fn date() -> TravelDate {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        TravelDate::parse("2024-10-01", today).unwrap()
    }

    #[test]
    fn config_defaults() {
        let config = QueryConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.purpose_code, "ADULT");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn config_builder() {
        let config = QueryConfig::new()
            .with_base_url("http://localhost:8080/query")
            .with_purpose_code("0X00")
            .with_timeout(10)
            .with_accept_invalid_certs(false);
        assert_eq!(config.base_url, "http://localhost:8080/query");
        assert_eq!(config.purpose_code, "0X00");
        assert_eq!(config.timeout_secs, 10);
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn resolve_query() {
        let query = TicketQuery::resolve(&directory(), "北京", "上海", date()).unwrap();
        assert_eq!(query.from.as_str(), "BJP");
        assert_eq!(query.to.as_str(), "SHH");
    }

    #[test]
    fn resolve_unknown_station() {
        let err = TicketQuery::resolve(&directory(), "北京", "火星", date()).unwrap_err();
        assert_eq!(err, InputError::StationNotFound("火星".into()));

        let err = TicketQuery::resolve(&directory(), "", "上海", date()).unwrap_err();
        assert_eq!(err, InputError::StationNotFound("".into()));
    }

    #[test]
    fn request_url() {
        let client = QueryClient::new(QueryConfig::new()).unwrap();
        let query = TicketQuery::resolve(&directory(), "北京", "上海", date()).unwrap();
        let request = client.build_request(&query).unwrap();

        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(
            request.url().as_str(),
            "https://kyfw.12306.cn/otn/leftTicket/queryX?\
             leftTicketDTO.train_date=2024-10-01&\
             leftTicketDTO.from_station=BJP&\
             leftTicketDTO.to_station=SHH&\
             purpose_codes=ADULT"
        );
    }
}
