use sea_orm::entity::prelude::*;

/// Vehicle registered under a driver profile.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "vehicles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub driver_id: Uuid,
    #[sea_orm(unique)]
    pub license_plate: String,
    pub model: Option<String>,
    pub color: Option<String>,
    pub year: Option<i16>,
    pub is_active: bool,
    pub registered_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::driver_profiles::Entity",
        from = "Column::DriverId",
        to = "super::driver_profiles::Column::DriverId"
    )]
    DriverProfile,
}

impl Related<super::driver_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DriverProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
