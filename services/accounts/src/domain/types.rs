use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use rideway_domain::driver::ApprovalStatus;
use rideway_domain::user::Role;

/// Rider or driver account. Root of the ownership tree: deleting a user
/// cascades to its driver profile and that profile's vehicles.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub firebase_uid: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
    pub full_name: String,
    pub role: Role,
    pub is_verified: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Driver record, 1:1 with a user. `driver_id` is its own identifier,
/// distinct from the owning `user_id`.
#[derive(Debug, Clone)]
pub struct DriverProfile {
    pub driver_id: Uuid,
    pub user_id: Uuid,
    pub license_number: String,
    pub license_expiry: Option<NaiveDate>,
    pub approval_status: ApprovalStatus,
    pub rating_avg: Decimal,
    pub total_trips: i32,
    pub profile_photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Vehicle registered under a driver profile.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: Uuid,
    pub driver_id: Uuid,
    pub license_plate: String,
    pub model: Option<String>,
    pub color: Option<String>,
    pub year: Option<i16>,
    pub is_active: bool,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sparse update for a user. Fields left as `None` are not written; a set
/// field overwrites exactly. Clearing a nullable column is not expressible.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub firebase_uid: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub full_name: Option<String>,
    pub role: Option<Role>,
    pub is_verified: Option<bool>,
    pub is_active: Option<bool>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.firebase_uid.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.full_name.is_none()
            && self.role.is_none()
            && self.is_verified.is_none()
            && self.is_active.is_none()
    }
}

/// Sparse update for a driver profile.
#[derive(Debug, Clone, Default)]
pub struct DriverProfilePatch {
    pub license_number: Option<String>,
    pub license_expiry: Option<NaiveDate>,
    pub approval_status: Option<ApprovalStatus>,
    pub rating_avg: Option<Decimal>,
    pub total_trips: Option<i32>,
    pub profile_photo_url: Option<String>,
}

impl DriverProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.license_number.is_none()
            && self.license_expiry.is_none()
            && self.approval_status.is_none()
            && self.rating_avg.is_none()
            && self.total_trips.is_none()
            && self.profile_photo_url.is_none()
    }
}

/// Sparse update for a vehicle.
#[derive(Debug, Clone, Default)]
pub struct VehiclePatch {
    pub license_plate: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub year: Option<i16>,
    pub is_active: Option<bool>,
}

impl VehiclePatch {
    pub fn is_empty(&self) -> bool {
        self.license_plate.is_none()
            && self.model.is_none()
            && self.color.is_none()
            && self.year.is_none()
            && self.is_active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_report_default_patches_as_empty() {
        assert!(UserPatch::default().is_empty());
        assert!(DriverProfilePatch::default().is_empty());
        assert!(VehiclePatch::default().is_empty());
    }

    #[test]
    fn should_report_patch_with_any_field_as_non_empty() {
        let patch = UserPatch {
            full_name: Some("New Name".into()),
            ..Default::default()
        };
        assert!(!patch.is_empty());

        let patch = DriverProfilePatch {
            approval_status: Some(ApprovalStatus::Approved),
            ..Default::default()
        };
        assert!(!patch.is_empty());

        let patch = VehiclePatch {
            is_active: Some(true),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
