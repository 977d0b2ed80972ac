//! Client side of the `stats.nba.com` API: requests, parameter sets,
//! response normalization and the per-date lookups built on them.

pub mod fetch;
pub mod game_id;
pub mod http;
pub mod normalize;
pub mod params;
pub mod resolver;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use fetch::{fetch_category_stats, StatQuery};
pub use http::{StatsApi, StatsClient};
pub use normalize::{records_from_response, StatRecord};
pub use resolver::{resolve_date, DateMaps};
