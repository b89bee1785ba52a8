use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use rideway_domain::driver::ApprovalStatus;

use crate::domain::repository::DriverProfileRepository;
use crate::domain::types::DriverProfile;
use crate::error::AccountsError;

// ── AttachDriverProfile ──────────────────────────────────────────────────────

pub struct AttachDriverProfileInput {
    pub license_number: String,
    pub license_expiry: Option<NaiveDate>,
    pub profile_photo_url: Option<String>,
}

/// Attach a driver profile to an existing user, promoting the user to the
/// driver role. Returns `None` (nothing committed) when the user is absent.
pub struct AttachDriverProfileUseCase<R: DriverProfileRepository> {
    pub repo: R,
}

impl<R: DriverProfileRepository> AttachDriverProfileUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: AttachDriverProfileInput,
    ) -> Result<Option<DriverProfile>, AccountsError> {
        let now = Utc::now();
        let profile = DriverProfile {
            driver_id: Uuid::now_v7(),
            user_id,
            license_number: input.license_number,
            license_expiry: input.license_expiry,
            approval_status: ApprovalStatus::Pending,
            rating_avg: Decimal::ZERO,
            total_trips: 0,
            profile_photo_url: input.profile_photo_url,
            created_at: now,
            updated_at: now,
        };
        self.repo.attach(&profile).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::types::DriverProfilePatch;

    /// Mock that accepts the attach only for one known user id.
    struct MockProfileRepo {
        known_user: Uuid,
        attached: Mutex<Option<DriverProfile>>,
    }

    impl DriverProfileRepository for MockProfileRepo {
        async fn attach(
            &self,
            profile: &DriverProfile,
        ) -> Result<Option<DriverProfile>, AccountsError> {
            if profile.user_id != self.known_user {
                return Ok(None);
            }
            *self.attached.lock().unwrap() = Some(profile.clone());
            Ok(Some(profile.clone()))
        }
        async fn find_by_id(
            &self,
            _driver_id: Uuid,
        ) -> Result<Option<DriverProfile>, AccountsError> {
            Ok(None)
        }
        async fn find_by_user(
            &self,
            _user_id: Uuid,
        ) -> Result<Option<DriverProfile>, AccountsError> {
            Ok(self.attached.lock().unwrap().clone())
        }
        async fn update(
            &self,
            _driver_id: Uuid,
            _patch: &DriverProfilePatch,
        ) -> Result<Option<DriverProfile>, AccountsError> {
            Ok(None)
        }
        async fn delete(&self, _driver_id: Uuid) -> Result<Option<DriverProfile>, AccountsError> {
            Ok(None)
        }
    }

    fn input() -> AttachDriverProfileInput {
        AttachDriverProfileInput {
            license_number: "LIC1".into(),
            license_expiry: None,
            profile_photo_url: None,
        }
    }

    #[tokio::test]
    async fn should_attach_pending_profile_to_known_user() {
        let user_id = Uuid::now_v7();
        let usecase = AttachDriverProfileUseCase {
            repo: MockProfileRepo {
                known_user: user_id,
                attached: Mutex::new(None),
            },
        };
        let profile = usecase.execute(user_id, input()).await.unwrap().unwrap();

        assert_eq!(profile.user_id, user_id);
        assert_eq!(profile.approval_status, ApprovalStatus::Pending);
        assert_eq!(profile.rating_avg, Decimal::ZERO);
        assert_eq!(profile.total_trips, 0);
    }

    #[tokio::test]
    async fn should_pass_through_absent_user_as_none() {
        let usecase = AttachDriverProfileUseCase {
            repo: MockProfileRepo {
                known_user: Uuid::now_v7(),
                attached: Mutex::new(None),
            },
        };
        let result = usecase.execute(Uuid::now_v7(), input()).await.unwrap();
        assert!(result.is_none());
        assert!(usecase.repo.attached.lock().unwrap().is_none());
    }
}
