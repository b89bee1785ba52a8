use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::VehicleRepository;
use crate::domain::types::Vehicle;
use crate::error::AccountsError;

// ── RegisterVehicle ──────────────────────────────────────────────────────────

pub struct RegisterVehicleInput {
    pub license_plate: String,
    pub model: Option<String>,
    pub color: Option<String>,
    pub year: Option<i16>,
}

/// Register a vehicle under a driver profile. New vehicles start inactive;
/// activation is a separate patch.
pub struct RegisterVehicleUseCase<R: VehicleRepository> {
    pub repo: R,
}

impl<R: VehicleRepository> RegisterVehicleUseCase<R> {
    pub async fn execute(
        &self,
        driver_id: Uuid,
        input: RegisterVehicleInput,
    ) -> Result<Vehicle, AccountsError> {
        let now = Utc::now();
        let vehicle = Vehicle {
            id: Uuid::now_v7(),
            driver_id,
            license_plate: input.license_plate,
            model: input.model,
            color: input.color,
            year: input.year,
            is_active: false,
            registered_at: now,
            updated_at: now,
        };
        self.repo.create(&vehicle).await
    }
}
