//! Season information encoded in game ids.
//!
//! Game ids are ten digits, `00TYYNNNNN`:
//!
//! | chars | meaning                                                       |
//! |-------|---------------------------------------------------------------|
//! | 0–1   | league (`00` = NBA)                                           |
//! | 2     | season type: 1 pre season, 2 regular, 3 all star, 4 playoffs, 5 play-in |
//! | 3–4   | last two digits of the year the season starts in              |
//! | 5–9   | game sequence                                                 |
//!
//! Two-digit years from 46 upward are 19xx (the league's first season was 1946-47).

use crate::cli::types::{GameId, Season, SeasonType};
use crate::{Result, StatsError};

const GAME_ID_LEN: usize = 10;
const FIRST_SEASON_YY: u16 = 46;

fn invalid(game_id: &GameId, reason: impl Into<String>) -> StatsError {
    StatsError::InvalidGameId {
        game_id: game_id.to_string(),
        reason: reason.into(),
    }
}

fn digits(game_id: &GameId) -> Result<&[u8]> {
    let bytes = game_id.as_str().as_bytes();
    if bytes.len() != GAME_ID_LEN || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(invalid(game_id, "expected 10 digits"));
    }
    Ok(bytes)
}

/// `0021900001` → `2019-20`, `0029900001` → `1999-00`.
pub fn season_from_game_id(game_id: &GameId) -> Result<Season> {
    let d = digits(game_id)?;
    let yy = u16::from(d[3] - b'0') * 10 + u16::from(d[4] - b'0');
    let start_year = if yy >= FIRST_SEASON_YY { 1900 + yy } else { 2000 + yy };
    Ok(Season::from_start_year(start_year))
}

/// `0021900001` → Regular Season, `0041900101` → Playoffs.
pub fn season_type_from_game_id(game_id: &GameId) -> Result<SeasonType> {
    match digits(game_id)?[2] {
        b'1' => Ok(SeasonType::PreSeason),
        b'2' => Ok(SeasonType::RegularSeason),
        b'3' => Ok(SeasonType::AllStar),
        b'4' => Ok(SeasonType::Playoffs),
        b'5' => Ok(SeasonType::PlayIn),
        other => Err(invalid(
            game_id,
            format!("unknown season type code {}", other as char),
        )),
    }
}

/// Both halves at once.
pub fn season_context(game_id: &GameId) -> Result<(Season, SeasonType)> {
    Ok((season_from_game_id(game_id)?, season_type_from_game_id(game_id)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gid(s: &str) -> GameId {
        GameId(s.to_string())
    }

    #[test]
    fn test_season_from_game_id() {
        assert_eq!(season_from_game_id(&gid("0021900001")).unwrap().as_str(), "2019-20");
        assert_eq!(season_from_game_id(&gid("0029900001")).unwrap().as_str(), "1999-00");
        assert_eq!(season_from_game_id(&gid("0020900001")).unwrap().as_str(), "2009-10");
        assert_eq!(season_from_game_id(&gid("0024600001")).unwrap().as_str(), "1946-47");
        assert_eq!(season_from_game_id(&gid("0020000001")).unwrap().as_str(), "2000-01");
    }

    #[test]
    fn test_season_type_from_game_id() {
        let cases = [
            ("0011900001", SeasonType::PreSeason),
            ("0021900001", SeasonType::RegularSeason),
            ("0031900001", SeasonType::AllStar),
            ("0041900101", SeasonType::Playoffs),
            ("0051900111", SeasonType::PlayIn),
        ];
        for (id, expected) in cases {
            assert_eq!(season_type_from_game_id(&gid(id)).unwrap(), expected, "{}", id);
        }
    }

    #[test]
    fn test_unknown_season_type_code() {
        match season_type_from_game_id(&gid("0061900001")) {
            Err(StatsError::InvalidGameId { reason, .. }) => {
                assert!(reason.contains("unknown season type code 6"));
            }
            other => panic!("Expected InvalidGameId, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_game_ids() {
        for bad in ["", "21900001", "00219000011", "00219O0001", "abcdefghij"] {
            assert!(season_from_game_id(&gid(bad)).is_err(), "{:?}", bad);
            assert!(season_type_from_game_id(&gid(bad)).is_err(), "{:?}", bad);
        }
    }

    #[test]
    fn test_season_context() {
        let (season, season_type) = season_context(&gid("0041900101")).unwrap();
        assert_eq!(season.as_str(), "2019-20");
        assert_eq!(season_type, SeasonType::Playoffs);
    }
}
