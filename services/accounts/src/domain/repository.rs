#![allow(async_fn_in_trait)]

use uuid::Uuid;

use rideway_domain::pagination::PageRequest;

use crate::domain::types::{
    DriverProfile, DriverProfilePatch, User, UserPatch, Vehicle, VehiclePatch,
};
use crate::error::AccountsError;

/// Repository for user accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountsError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountsError>;
    async fn list(&self, page: PageRequest) -> Result<Vec<User>, AccountsError>;

    /// Persist a new passenger account. Uniqueness rejections (email, phone,
    /// firebase uid) surface as `UniqueViolation`.
    async fn create_passenger(&self, user: &User) -> Result<User, AccountsError>;

    /// Persist a new driver account and its profile in one transaction.
    /// Either both rows commit or neither does.
    async fn create_driver(
        &self,
        user: &User,
        profile: &DriverProfile,
    ) -> Result<User, AccountsError>;

    /// Apply a sparse patch. Returns `None` when no such user exists.
    async fn update(&self, id: Uuid, patch: &UserPatch) -> Result<Option<User>, AccountsError>;

    /// Delete a user, returning its prior state. The store cascades the
    /// delete to the driver profile and its vehicles.
    async fn delete(&self, id: Uuid) -> Result<Option<User>, AccountsError>;
}

/// Repository for driver profiles.
pub trait DriverProfileRepository: Send + Sync {
    /// Attach a profile to the user named by `profile.user_id` and force that
    /// user's role to driver, in one transaction. Returns `None` without
    /// committing anything when the user does not exist.
    async fn attach(
        &self,
        profile: &DriverProfile,
    ) -> Result<Option<DriverProfile>, AccountsError>;

    async fn find_by_id(&self, driver_id: Uuid) -> Result<Option<DriverProfile>, AccountsError>;
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<DriverProfile>, AccountsError>;

    async fn update(
        &self,
        driver_id: Uuid,
        patch: &DriverProfilePatch,
    ) -> Result<Option<DriverProfile>, AccountsError>;

    /// Delete a profile, returning its prior state. Vehicles cascade; the
    /// owning user keeps the driver role (see DESIGN.md).
    async fn delete(&self, driver_id: Uuid) -> Result<Option<DriverProfile>, AccountsError>;
}

/// Repository for vehicles.
pub trait VehicleRepository: Send + Sync {
    /// Persist a new vehicle. The referenced `driver_id` is not pre-checked;
    /// a dangling reference comes back as `ForeignKeyViolation`.
    async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle, AccountsError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AccountsError>;
    async fn list_by_driver(
        &self,
        driver_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Vehicle>, AccountsError>;

    async fn update(
        &self,
        id: Uuid,
        patch: &VehiclePatch,
    ) -> Result<Option<Vehicle>, AccountsError>;
    async fn delete(&self, id: Uuid) -> Result<Option<Vehicle>, AccountsError>;
}
