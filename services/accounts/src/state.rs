use sea_orm::DatabaseConnection;

use crate::infra::db::{DbDriverProfileRepository, DbUserRepository, DbVehicleRepository};

/// Shared application state. Owns the database handle and vends repositories;
/// connection lifecycle (pooling, shutdown) belongs to the caller.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn users(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn driver_profiles(&self) -> DbDriverProfileRepository {
        DbDriverProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn vehicles(&self) -> DbVehicleRepository {
        DbVehicleRepository {
            db: self.db.clone(),
        }
    }
}
