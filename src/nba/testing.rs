//! In-memory [`StatsApi`] with canned responses, for tests.
//!
//! Compiled for unit tests and with the `test-utils` feature (integration tests
//! enable it through the crate's own dev-dependency entry).

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::nba::http::{Params, StatsApi};
use crate::{Result, StatsError};

struct Route {
    endpoint: String,
    required: Params,
    response: Value,
}

impl Route {
    fn matches(&self, endpoint: &str, params: &[(String, String)]) -> bool {
        self.endpoint == endpoint
            && self
                .required
                .iter()
                .all(|(k, v)| params.iter().any(|(pk, pv)| pk == k && pv == v))
    }
}

/// Answers each request with the first registered route whose endpoint matches
/// and whose listed parameters are all present with the same values.
#[derive(Default)]
pub struct FakeStatsApi {
    routes: Vec<Route>,
    calls: Mutex<Vec<(String, Params)>>,
}

impl FakeStatsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, endpoint: &str, required: &[(&str, &str)], response: Value) -> Self {
        self.routes.push(Route {
            endpoint: endpoint.to_string(),
            required: required
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            response,
        });
        self
    }

    /// Every request seen so far, in order.
    pub fn calls(&self) -> Vec<(String, Params)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Requests made to one endpoint.
    pub fn calls_to(&self, endpoint: &str) -> Vec<Params> {
        self.calls()
            .into_iter()
            .filter(|(e, _)| e == endpoint)
            .map(|(_, p)| p)
            .collect()
    }
}

impl StatsApi for FakeStatsApi {
    async fn get_json(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((endpoint.to_string(), params.to_vec()));
        }
        self.routes
            .iter()
            .find(|r| r.matches(endpoint, params))
            .map(|r| r.response.clone())
            .ok_or_else(|| StatsError::InvalidParameter {
                message: format!("no canned response for {} {:?}", endpoint, params),
            })
    }
}

/// `{"resultSets": [{"name", "headers", "rowSet"}]}` with one set.
pub fn result_set(name: &str, headers: &[&str], rows: Vec<Value>) -> Value {
    json!({
        "resource": name,
        "resultSets": [{ "name": name, "headers": headers, "rowSet": rows }]
    })
}

/// Scoreboard with one `GameHeader` row per `(game_id, home_team, visitor_team)`.
pub fn scoreboard(games: &[(&str, u64, u64)]) -> Value {
    let rows = games
        .iter()
        .map(|(game_id, home, visitor)| json!([game_id, home, visitor, "Final"]))
        .collect();
    result_set(
        "GameHeader",
        &["GAME_ID", "HOME_TEAM_ID", "VISITOR_TEAM_ID", "GAME_STATUS_TEXT"],
        rows,
    )
}

/// Player game log with one line per `(player_id, team_id)`.
pub fn player_game_log(lines: &[(u64, u64)]) -> Value {
    let rows = lines
        .iter()
        .map(|(player, team)| json!([player, team]))
        .collect();
    result_set("LeagueGameLog", &["PLAYER_ID", "TEAM_ID"], rows)
}
