use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use rideway_domain::driver::ApprovalStatus;
use rideway_domain::user::Role;

use crate::domain::repository::UserRepository;
use crate::domain::types::{DriverProfile, User};
use crate::error::AccountsError;

// ── RegisterPassenger ────────────────────────────────────────────────────────

pub struct RegisterPassengerInput {
    pub email: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub firebase_uid: Option<String>,
}

/// Create a passenger account. The role is fixed here; the input cannot
/// request anything else.
pub struct RegisterPassengerUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> RegisterPassengerUseCase<R> {
    pub async fn execute(&self, input: RegisterPassengerInput) -> Result<User, AccountsError> {
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            firebase_uid: input.firebase_uid,
            email: input.email,
            phone_number: input.phone_number,
            full_name: input.full_name,
            role: Role::Passenger,
            is_verified: false,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.repo.create_passenger(&user).await
    }
}

// ── SignupDriver ─────────────────────────────────────────────────────────────

pub struct DriverSignupInput {
    pub email: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub firebase_uid: Option<String>,
    pub license_number: String,
    pub license_expiry: Option<NaiveDate>,
}

/// Create a complete driver account: one user (role driver) plus its driver
/// profile, committed atomically by the repository.
pub struct SignupDriverUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> SignupDriverUseCase<R> {
    pub async fn execute(&self, input: DriverSignupInput) -> Result<User, AccountsError> {
        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            firebase_uid: input.firebase_uid,
            email: input.email,
            phone_number: input.phone_number,
            full_name: input.full_name,
            role: Role::Driver,
            is_verified: false,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        let profile = DriverProfile {
            driver_id: Uuid::now_v7(),
            user_id: user.id,
            license_number: input.license_number,
            license_expiry: input.license_expiry,
            approval_status: ApprovalStatus::Pending,
            rating_avg: Decimal::ZERO,
            total_trips: 0,
            profile_photo_url: None,
            created_at: now,
            updated_at: now,
        };
        self.repo.create_driver(&user, &profile).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use rideway_domain::pagination::PageRequest;

    use super::*;
    use crate::domain::types::UserPatch;

    #[derive(Default)]
    struct MockUserRepo {
        created_user: Mutex<Option<User>>,
        created_profile: Mutex<Option<DriverProfile>>,
    }

    impl UserRepository for MockUserRepo {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>, AccountsError> {
            Ok(None)
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, AccountsError> {
            Ok(None)
        }
        async fn list(&self, _page: PageRequest) -> Result<Vec<User>, AccountsError> {
            Ok(vec![])
        }
        async fn create_passenger(&self, user: &User) -> Result<User, AccountsError> {
            *self.created_user.lock().unwrap() = Some(user.clone());
            Ok(user.clone())
        }
        async fn create_driver(
            &self,
            user: &User,
            profile: &DriverProfile,
        ) -> Result<User, AccountsError> {
            *self.created_user.lock().unwrap() = Some(user.clone());
            *self.created_profile.lock().unwrap() = Some(profile.clone());
            Ok(user.clone())
        }
        async fn update(
            &self,
            _id: Uuid,
            _patch: &UserPatch,
        ) -> Result<Option<User>, AccountsError> {
            Ok(None)
        }
        async fn delete(&self, _id: Uuid) -> Result<Option<User>, AccountsError> {
            Ok(None)
        }
    }

    #[tokio::test]
    async fn should_force_passenger_role_on_registration() {
        let usecase = RegisterPassengerUseCase {
            repo: MockUserRepo::default(),
        };
        let created = usecase
            .execute(RegisterPassengerInput {
                email: "a@x.com".into(),
                full_name: "Alice".into(),
                phone_number: None,
                firebase_uid: Some("fb-1".into()),
            })
            .await
            .unwrap();

        assert_eq!(created.role, Role::Passenger);
        assert!(!created.is_verified);
        assert!(created.is_active);

        let persisted = usecase.repo.created_user.lock().unwrap().clone().unwrap();
        assert_eq!(persisted.email, "a@x.com");
        assert_eq!(persisted.firebase_uid.as_deref(), Some("fb-1"));
    }

    #[tokio::test]
    async fn should_build_linked_profile_for_driver_signup() {
        let usecase = SignupDriverUseCase {
            repo: MockUserRepo::default(),
        };
        let created = usecase
            .execute(DriverSignupInput {
                email: "d@x.com".into(),
                full_name: "Dan".into(),
                phone_number: Some("+84900000001".into()),
                firebase_uid: None,
                license_number: "LIC1".into(),
                license_expiry: None,
            })
            .await
            .unwrap();

        assert_eq!(created.role, Role::Driver);

        let profile = usecase
            .repo
            .created_profile
            .lock()
            .unwrap()
            .clone()
            .unwrap();
        assert_eq!(profile.user_id, created.id);
        assert_ne!(profile.driver_id, created.id);
        assert_eq!(profile.license_number, "LIC1");
        assert_eq!(profile.approval_status, ApprovalStatus::Pending);
        assert_eq!(profile.rating_avg, Decimal::ZERO);
        assert_eq!(profile.total_trips, 0);
    }

    #[tokio::test]
    async fn should_generate_distinct_user_ids() {
        let usecase = RegisterPassengerUseCase {
            repo: MockUserRepo::default(),
        };
        let input = |email: &str| RegisterPassengerInput {
            email: email.into(),
            full_name: "Alice".into(),
            phone_number: None,
            firebase_uid: None,
        };
        let first = usecase.execute(input("a@x.com")).await.unwrap();
        let second = usecase.execute(input("b@x.com")).await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
