//! Seat entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "seats")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub screen_id: i64,
    pub seat_row: i32,
    pub seat_number: i32,
    pub seat_code: String,

    /// Seat status: AVAILABLE, BLOCKED, BOOKED
    pub status: String,

    #[sea_orm(nullable)]
    pub held_by_user_id: Option<i64>,

    #[sea_orm(nullable)]
    pub hold_expires_at: Option<DateTimeUtc>,

    #[sea_orm(nullable)]
    pub booking_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::screen::Entity",
        from = "Column::ScreenId",
        to = "super::screen::Column::Id"
    )]
    Screen,
}

impl Related<super::screen::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Screen.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
