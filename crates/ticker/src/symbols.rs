//! Symbol list resolution.

/// Resolve a caller-supplied comma-separated symbol list.
///
/// A blank query falls back to the configured defaults. Otherwise each piece
/// is trimmed, empties are dropped and the rest uppercased, preserving order
/// and duplicates. No validation against known instruments happens here;
/// unknown symbols surface downstream as fetch failures.
///
/// Note the edge: `","` is not blank, so it resolves to an explicitly-empty
/// list rather than the defaults.
pub fn resolve_symbols(raw: &str, defaults: &[String]) -> Vec<String> {
    if raw.trim().is_empty() {
        return defaults.to_vec();
    }

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Vec<String> {
        ["BTCUSDT", "ETHUSDT", "SOLUSDT", "DOGEUSDT", "XRPUSDT"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_blank_query_falls_back_to_defaults() {
        assert_eq!(resolve_symbols("", &defaults()), defaults());
        assert_eq!(resolve_symbols("   ", &defaults()), defaults());
    }

    #[test]
    fn test_trims_uppercases_and_drops_empties() {
        assert_eq!(
            resolve_symbols("btcusdt, ethusdt ,, ", &defaults()),
            vec!["BTCUSDT", "ETHUSDT"]
        );
    }

    #[test]
    fn test_preserves_order_and_duplicates() {
        assert_eq!(
            resolve_symbols("ethusdt,btcusdt,ethusdt", &defaults()),
            vec!["ETHUSDT", "BTCUSDT", "ETHUSDT"]
        );
    }

    #[test]
    fn test_comma_only_is_explicitly_empty() {
        assert!(resolve_symbols(",", &defaults()).is_empty());
        assert!(resolve_symbols(" , ", &defaults()).is_empty());
    }
}
