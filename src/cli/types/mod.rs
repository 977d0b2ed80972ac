//! Type-safe wrappers and enums for NBA stats data.

pub mod category;
pub mod ids;
pub mod policy;
pub mod time;

pub use category::{BoxscoreMeasure, EntityType, StatCategory, TrackingMeasure};
pub use ids::{GameId, PlayerId, TeamId};
pub use policy::{GapPolicy, MissingTeamPolicy};
pub use time::{season_label, GameDate, Season, SeasonType};
