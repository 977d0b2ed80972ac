//! Unit tests for response normalization

use super::*;
use serde_json::json;

#[cfg(test)]
mod normalize_tests {
    use super::*;

    #[test]
    fn test_headers_and_rows_become_records() {
        let response = json!({
            "resultSets": [
                { "name": "LeagueDashPtStats", "headers": ["A", "B"], "rowSet": [[1, 2], [3, 4]] }
            ]
        });

        let records = records_from_response(&response, 0).unwrap();
        let as_values: Vec<Value> = records.into_iter().map(Value::Object).collect();
        assert_eq!(as_values, vec![json!({"A": 1, "B": 2}), json!({"A": 3, "B": 4})]);
    }

    #[test]
    fn test_record_keeps_header_order() {
        let response = json!({
            "resultSets": [{ "headers": ["Z", "A", "M"], "rowSet": [["z", "a", "m"]] }]
        });

        let records = records_from_response(&response, 0).unwrap();
        let keys: Vec<&str> = records[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_selects_by_index() {
        let response = json!({
            "resultSets": [
                { "headers": ["A"], "rowSet": [[1]] },
                { "headers": ["B"], "rowSet": [[2], [3]] }
            ]
        });

        let records = records_from_response(&response, 1).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["B"], json!(3));
    }

    #[test]
    fn test_single_result_set_object() {
        let response = json!({
            "resultSet": { "headers": ["PLAYER_ID"], "rowSet": [[203999]] }
        });

        let records = records_from_response(&response, 0).unwrap();
        assert_eq!(records[0]["PLAYER_ID"], json!(203999));
    }

    #[test]
    fn test_empty_row_set() {
        let response = json!({ "resultSets": [{ "headers": ["A"], "rowSet": [] }] });
        assert!(records_from_response(&response, 0).unwrap().is_empty());
    }

    #[test]
    fn test_missing_result_set_is_malformed() {
        let response = json!({ "resultSets": [{ "headers": ["A"], "rowSet": [] }] });

        match records_from_response(&response, 2) {
            Err(StatsError::MalformedResponse { message }) => {
                assert!(message.contains("result set 2"));
            }
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }

        assert!(matches!(
            records_from_response(&json!({"message": "oops"}), 0),
            Err(StatsError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_row_length_mismatch_is_malformed() {
        let response = json!({
            "resultSets": [{ "headers": ["A", "B"], "rowSet": [[1, 2], [3]] }]
        });

        match records_from_response(&response, 0) {
            Err(StatsError::MalformedResponse { message }) => {
                assert!(message.contains("row 1 has 1 cells for 2 headers"));
            }
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_headers_or_rows_is_malformed() {
        let no_headers = json!({ "resultSets": [{ "rowSet": [] }] });
        let no_rows = json!({ "resultSets": [{ "headers": ["A"] }] });

        assert!(records_from_response(&no_headers, 0).is_err());
        assert!(records_from_response(&no_rows, 0).is_err());
    }

    #[test]
    fn test_named_set_lookup() {
        let response = json!({
            "resultSets": [
                { "name": "GameHeader", "headers": ["GAME_ID"], "rowSet": [["0021900900"]] },
                { "name": "LineScore", "headers": ["TEAM_ID"], "rowSet": [[1], [2]] }
            ]
        });

        let games = records_from_named_set(&response, "GameHeader").unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0]["GAME_ID"], json!("0021900900"));

        assert!(records_from_named_set(&response, "Standings").is_err());
    }
}
