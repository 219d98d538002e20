use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

#[cfg(feature = "database")]
use sea_orm::entity::prelude::*;

/// The kind of study space a room provides
///
/// Stored and serialized by its upper-case name, e.g. `QUIET_ROOM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString)]
#[cfg_attr(feature = "database", derive(EnumIter, DeriveActiveEnum))]
#[cfg_attr(
    feature = "database",
    sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    /// Silent individual study
    #[cfg_attr(feature = "database", sea_orm(string_value = "QUIET_ROOM"))]
    QuietRoom,
    /// Group work, talking allowed
    #[cfg_attr(feature = "database", sea_orm(string_value = "DISCUSSION_ROOM"))]
    DiscussionRoom,
    /// Lab with stations and equipment
    #[cfg_attr(feature = "database", sea_orm(string_value = "LABORATORY_ROOM"))]
    LaboratoryRoom,
}
