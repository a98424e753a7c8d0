//! HTTP client for the next-move statistics service.
//!
//! One logical request per distinct query key: concurrent fetches for the
//! same key attach to the shared in-flight response instead of issuing a
//! duplicate call. Transient failures retry with exponential backoff up to a
//! fixed budget.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use reqwest::Client;
use serde::Deserialize;

use go_core::Coord;

use crate::config::ExplorerConfig;
use crate::error::ExplorerError;
use crate::ranker::NextMoveStat;

type FetchResult = Result<Arc<Vec<NextMoveStat>>, ExplorerError>;
type SharedFetch = Shared<BoxFuture<'static, FetchResult>>;

/// Wire form of one next-move record.
#[derive(Debug, Deserialize)]
struct RawNextMove {
    #[serde(rename = "move")]
    mv: String,
    count: i64,
    #[serde(rename = "winRate", default)]
    win_rate: Option<f64>,
}

/// The service reports "no data" and some failures as a message object
/// instead of an array.
#[derive(Debug, Deserialize)]
struct ServiceMessage {
    message: String,
}

const NO_DATA_MESSAGE: &str = "No data found";

#[derive(Debug)]
enum ParsedBody {
    Stats(Vec<NextMoveStat>),
    NoData,
    /// Well-formed service-side failure report; treated as transient.
    ServiceError(String),
}

pub struct NextMoveClient {
    http: Client,
    base_url: String,
    retry_attempts: u32,
    retry_backoff: Duration,
    in_flight: Mutex<HashMap<String, SharedFetch>>,
}

impl NextMoveClient {
    pub fn new(config: &ExplorerConfig) -> Self {
        let http = Client::builder()
            .user_agent("bGoExplorer/1.0")
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap();

        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            retry_attempts: config.retry_attempts.max(1),
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Fetch raw next-move statistics for an encoded query key.
    ///
    /// Coalesces with any in-flight request for the same key; every awaiter
    /// receives the same result.
    pub async fn fetch(&self, key: &str) -> FetchResult {
        let shared = {
            let mut in_flight = self.in_flight.lock().unwrap();
            match in_flight.get(key) {
                Some(existing) => existing.clone(),
                None => {
                    let fut = fetch_with_retry(
                        self.http.clone(),
                        format!("{}/nextmove/{}", self.base_url, key),
                        self.retry_attempts,
                        self.retry_backoff,
                    )
                    .boxed()
                    .shared();
                    in_flight.insert(key.to_string(), fut.clone());
                    fut
                }
            }
        };

        let result = shared.clone().await;

        // First awaiter through clears the slot. ptr_eq keeps a newer
        // in-flight request for the same key from being evicted by a slow one.
        let mut in_flight = self.in_flight.lock().unwrap();
        if in_flight.get(key).is_some_and(|f| f.ptr_eq(&shared)) {
            in_flight.remove(key);
        }

        result
    }
}

async fn fetch_with_retry(
    http: Client,
    url: String,
    attempts: u32,
    backoff: Duration,
) -> FetchResult {
    let mut last_reason = String::new();

    for attempt in 1..=attempts {
        if attempt > 1 {
            let wait = backoff * 2u32.pow((attempt - 2).min(6));
            tracing::warn!(
                "retrying {url} in {wait:?} (attempt {attempt}/{attempts}): {last_reason}"
            );
            tokio::time::sleep(wait).await;
        }

        let resp = match http.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                last_reason = format!("request error: {e}");
                continue;
            }
        };

        let status = resp.status();
        if status.is_server_error() {
            last_reason = format!("HTTP {status}");
            continue;
        }
        if !status.is_success() {
            return Err(ExplorerError::QueryUnavailable {
                attempts: attempt,
                reason: format!("HTTP {status}"),
            });
        }

        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                last_reason = format!("body read error: {e}");
                continue;
            }
        };

        match parse_body(&body)? {
            ParsedBody::Stats(stats) => return Ok(Arc::new(stats)),
            ParsedBody::NoData => return Ok(Arc::new(Vec::new())),
            ParsedBody::ServiceError(message) => {
                last_reason = format!("service error: {message}");
            }
        }
    }

    Err(ExplorerError::QueryUnavailable {
        attempts,
        reason: last_reason,
    })
}

/// Parse a response body against the query contract.
///
/// Contract violations fail as `MalformedResponse` without salvaging any
/// partially-valid entries.
fn parse_body(body: &str) -> Result<ParsedBody, ExplorerError> {
    if let Ok(raw) = serde_json::from_str::<Vec<RawNextMove>>(body) {
        let mut stats = Vec::with_capacity(raw.len());
        for entry in raw {
            let coord = Coord::parse(&entry.mv).map_err(|e| {
                ExplorerError::MalformedResponse(format!("bad move token: {e}"))
            })?;
            if entry.count < 0 {
                return Err(ExplorerError::MalformedResponse(format!(
                    "negative count {} for move {coord}",
                    entry.count
                )));
            }
            if let Some(rate) = entry.win_rate {
                if !(0.0..=1.0).contains(&rate) {
                    return Err(ExplorerError::MalformedResponse(format!(
                        "win rate {rate} out of range for move {coord}"
                    )));
                }
            }
            stats.push(NextMoveStat {
                coord,
                play_count: entry.count as u64,
                win_rate: entry.win_rate,
            });
        }
        return Ok(ParsedBody::Stats(stats));
    }

    if let Ok(msg) = serde_json::from_str::<ServiceMessage>(body) {
        if msg.message == NO_DATA_MESSAGE {
            return Ok(ParsedBody::NoData);
        }
        return Ok(ParsedBody::ServiceError(msg.message));
    }

    let preview: String = body.chars().take(120).collect();
    tracing::error!("malformed next-move response: {preview}");
    Err(ExplorerError::MalformedResponse(preview))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(body: &str) -> Vec<NextMoveStat> {
        match parse_body(body).unwrap() {
            ParsedBody::Stats(stats) => stats,
            _ => panic!("expected stats"),
        }
    }

    #[test]
    fn test_parse_stats_array() {
        let parsed = stats(
            r#"[{"move": "dd", "count": 500, "winRate": 0.53},
                {"move": "ce", "count": 375, "winRate": null},
                {"move": "qf", "count": 153}]"#,
        );
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].coord.to_string(), "dd");
        assert_eq!(parsed[0].play_count, 500);
        assert_eq!(parsed[0].win_rate, Some(0.53));
        assert_eq!(parsed[1].win_rate, None);
        assert_eq!(parsed[2].win_rate, None);
    }

    #[test]
    fn test_parse_empty_array() {
        assert!(stats("[]").is_empty());
    }

    #[test]
    fn test_no_data_message_is_empty() {
        match parse_body(r#"{"message": "No data found"}"#).unwrap() {
            ParsedBody::NoData => {}
            _ => panic!("expected no-data"),
        }
    }

    #[test]
    fn test_other_message_is_service_error() {
        match parse_body(r#"{"message": "Error while accessing database!"}"#).unwrap() {
            ParsedBody::ServiceError(m) => assert!(m.contains("database")),
            _ => panic!("expected service error"),
        }
    }

    #[test]
    fn test_bad_move_token_is_malformed() {
        let err = parse_body(r#"[{"move": "zz", "count": 3}]"#).unwrap_err();
        assert!(matches!(err, ExplorerError::MalformedResponse(_)));
    }

    #[test]
    fn test_negative_count_is_malformed() {
        let err = parse_body(r#"[{"move": "dd", "count": -1}]"#).unwrap_err();
        assert!(matches!(err, ExplorerError::MalformedResponse(_)));
    }

    #[test]
    fn test_out_of_range_rate_is_malformed() {
        let err = parse_body(r#"[{"move": "dd", "count": 1, "winRate": 1.5}]"#).unwrap_err();
        assert!(matches!(err, ExplorerError::MalformedResponse(_)));
    }

    #[test]
    fn test_garbage_body_is_malformed() {
        let err = parse_body("<html>502</html>").unwrap_err();
        assert!(matches!(err, ExplorerError::MalformedResponse(_)));
    }

    #[test]
    fn test_partial_garbage_never_salvaged() {
        // One good entry, one bad: the whole payload is rejected.
        let err =
            parse_body(r#"[{"move": "dd", "count": 5}, {"move": "x", "count": 1}]"#).unwrap_err();
        assert!(matches!(err, ExplorerError::MalformedResponse(_)));
    }
}
