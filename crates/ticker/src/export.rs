//! Output projections: structured JSON and flat CSV.

use serde_json::{json, Map, Value};

use crate::aggregate::AggregatedPrices;
use crate::error::TickerError;
use crate::types::FetchOutcome;

/// JSON projection: one entry per symbol.
///
/// Success: `{"usdt.p": "<price>", "ts": <epoch-ms or null>}`.
/// Failure: `{"error": "<message>", "usdt.p": null}`.
pub fn to_json(prices: &AggregatedPrices) -> Value {
    let mut map = Map::new();

    for outcome in prices.results() {
        let entry = match outcome {
            FetchOutcome::Price { price, ts, .. } => json!({
                "usdt.p": price,
                "ts": ts,
            }),
            FetchOutcome::Failed { error, .. } => json!({
                "error": error,
                "usdt.p": Value::Null,
            }),
        };
        map.insert(outcome.symbol().to_string(), entry);
    }

    Value::Object(map)
}

/// CSV projection: header plus exactly one row per requested symbol, in
/// request order, with empty cells where price/timestamp are absent.
///
/// Upstream failure never makes this fail; a failed symbol degrades to an
/// empty row. The only error source is the CSV writer itself.
pub fn to_csv(prices: &AggregatedPrices) -> Result<String, TickerError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["symbol", "usdt.p", "ts"])?;

    for outcome in prices.results() {
        match outcome {
            FetchOutcome::Price { symbol, price, ts } => {
                let ts = ts.map(|t| t.to_string()).unwrap_or_default();
                writer.write_record([symbol.as_str(), price.as_str(), ts.as_str()])?;
            }
            FetchOutcome::Failed { symbol, .. } => {
                writer.write_record([symbol.as_str(), "", ""])?;
            }
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TickerError::Csv(e.into_error().into()))?;
    String::from_utf8(bytes).map_err(|e| TickerError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_prices() -> AggregatedPrices {
        AggregatedPrices::from_results(vec![
            FetchOutcome::Price {
                symbol: "BTCUSDT".to_string(),
                price: "65000.10".to_string(),
                ts: Some(1_700_000_000_000),
            },
            FetchOutcome::Failed {
                symbol: "FAKE".to_string(),
                error: "no lastPrice".to_string(),
            },
            FetchOutcome::Price {
                symbol: "ETHUSDT".to_string(),
                price: "3500.00".to_string(),
                ts: None,
            },
        ])
    }

    #[test]
    fn test_json_success_and_failure_shapes() {
        let value = to_json(&mixed_prices());

        assert_eq!(value["BTCUSDT"]["usdt.p"], "65000.10");
        assert_eq!(value["BTCUSDT"]["ts"], 1_700_000_000_000i64);

        assert_eq!(value["FAKE"]["error"], "no lastPrice");
        assert!(value["FAKE"]["usdt.p"].is_null());

        assert_eq!(value["ETHUSDT"]["usdt.p"], "3500.00");
        assert!(value["ETHUSDT"]["ts"].is_null());
    }

    #[test]
    fn test_json_empty_request_is_empty_object() {
        let value = to_json(&AggregatedPrices::default());
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_csv_row_per_requested_symbol() {
        let csv = to_csv(&mixed_prices()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "symbol,usdt.p,ts");
        assert_eq!(lines[1], "BTCUSDT,65000.10,1700000000000");
        assert_eq!(lines[2], "FAKE,,");
        assert_eq!(lines[3], "ETHUSDT,3500.00,");
    }

    #[test]
    fn test_csv_total_failure_degrades_to_empty_cells() {
        let prices = AggregatedPrices::from_results(vec![
            FetchOutcome::Failed {
                symbol: "FAKE1".to_string(),
                error: "down".to_string(),
            },
            FetchOutcome::Failed {
                symbol: "FAKE2".to_string(),
                error: "down".to_string(),
            },
        ]);

        let csv = to_csv(&prices).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "FAKE1,,");
        assert_eq!(lines[2], "FAKE2,,");
    }

    #[test]
    fn test_csv_header_only_for_empty_request() {
        let csv = to_csv(&AggregatedPrices::default()).unwrap();
        assert_eq!(csv.lines().collect::<Vec<_>>(), vec!["symbol,usdt.p,ts"]);
    }
}
