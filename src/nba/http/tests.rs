//! Unit tests for HTTP client functionality

use super::*;
use crate::StatsError;

#[cfg(test)]
mod http_tests {
    use super::*;

    #[test]
    fn test_stats_base_url_constant() {
        assert_eq!(STATS_BASE_URL, "https://stats.nba.com/stats");
    }

    #[test]
    fn test_default_headers() {
        let headers = default_headers().unwrap();

        assert_eq!(headers.get("referer").unwrap(), "https://www.nba.com/");
        assert_eq!(headers.get("origin").unwrap(), "https://www.nba.com");
        assert_eq!(headers.get("x-nba-stats-origin").unwrap(), "stats");
        assert_eq!(headers.get("x-nba-stats-token").unwrap(), "true");
        assert!(headers.contains_key("accept"));
    }

    #[test]
    fn test_endpoint_url_joins_cleanly() {
        let client = StatsClient::new("http://localhost:8080/stats/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/stats");
        assert_eq!(
            client.endpoint_url("leaguehustlestatsplayer"),
            "http://localhost:8080/stats/leaguehustlestatsplayer"
        );
        assert_eq!(
            client.endpoint_url("/scoreboardv2"),
            "http://localhost:8080/stats/scoreboardv2"
        );
    }

    #[test]
    fn test_from_env_override_and_default() {
        std::env::set_var(BASE_URL_ENV_VAR, "http://127.0.0.1:1/stats");
        let client = StatsClient::from_env().unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:1/stats");

        std::env::remove_var(BASE_URL_ENV_VAR);
        let client = StatsClient::from_env().unwrap();
        assert_eq!(client.base_url(), STATS_BASE_URL);
    }

    #[tokio::test]
    async fn test_transport_failure_is_http_error() {
        // Port 9 (discard) is closed on test machines; the connect fails fast.
        let client = StatsClient::new("http://127.0.0.1:9/stats").unwrap();
        let params = vec![("LeagueID".to_string(), "00".to_string())];

        match client.get_json("scoreboardv2", &params).await {
            Err(StatsError::Http(_)) => (),
            other => panic!("Expected Http error, got {:?}", other),
        }
    }
}
