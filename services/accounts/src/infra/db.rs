use anyhow::{Context as _, anyhow};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use rideway_accounts_schema::{driver_profiles, users, vehicles};
use rideway_domain::driver::ApprovalStatus;
use rideway_domain::pagination::PageRequest;
use rideway_domain::user::Role;

use crate::domain::repository::{DriverProfileRepository, UserRepository, VehicleRepository};
use crate::domain::types::{
    DriverProfile, DriverProfilePatch, User, UserPatch, Vehicle, VehiclePatch,
};
use crate::error::AccountsError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountsError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountsError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<User>, AccountsError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list users")?;
        models.into_iter().map(user_from_model).collect()
    }

    async fn create_passenger(&self, user: &User) -> Result<User, AccountsError> {
        let model = user_active_model(user)
            .insert(&self.db)
            .await
            .map_err(|e| AccountsError::from_db(e, "create passenger"))?;
        user_from_model(model)
    }

    async fn create_driver(
        &self,
        user: &User,
        profile: &DriverProfile,
    ) -> Result<User, AccountsError> {
        use sea_orm::TransactionTrait;

        let user = user.clone();
        let profile = profile.clone();
        let model = self
            .db
            .transaction::<_, users::Model, AccountsError>(|txn| {
                Box::pin(async move {
                    let created = user_active_model(&user)
                        .insert(txn)
                        .await
                        .map_err(|e| AccountsError::from_db(e, "driver signup: insert user"))?;
                    profile_active_model(&profile)
                        .insert(txn)
                        .await
                        .map_err(|e| AccountsError::from_db(e, "driver signup: insert profile"))?;
                    Ok(created)
                })
            })
            .await
            .map_err(|e| AccountsError::from_txn(e, "driver signup"))?;

        tracing::info!(user_id = %model.id, "driver signup committed");
        user_from_model(model)
    }

    async fn update(&self, id: Uuid, patch: &UserPatch) -> Result<Option<User>, AccountsError> {
        let Some(existing) = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user for update")?
        else {
            return Ok(None);
        };
        if patch.is_empty() {
            return user_from_model(existing).map(Some);
        }

        let mut am = existing.into_active_model();
        if let Some(ref v) = patch.firebase_uid {
            am.firebase_uid = Set(Some(v.clone()));
        }
        if let Some(ref v) = patch.email {
            am.email = Set(v.clone());
        }
        if let Some(ref v) = patch.phone_number {
            am.phone_number = Set(Some(v.clone()));
        }
        if let Some(ref v) = patch.full_name {
            am.full_name = Set(v.clone());
        }
        if let Some(role) = patch.role {
            am.role = Set(role.as_str().to_owned());
        }
        if let Some(v) = patch.is_verified {
            am.is_verified = Set(v);
        }
        if let Some(v) = patch.is_active {
            am.is_active = Set(v);
        }
        am.updated_at = Set(Utc::now());

        let updated = am
            .update(&self.db)
            .await
            .map_err(|e| AccountsError::from_db(e, "update user"))?;
        user_from_model(updated).map(Some)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<User>, AccountsError> {
        let Some(existing) = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user for delete")?
        else {
            return Ok(None);
        };
        users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        tracing::debug!(user_id = %id, "user deleted");
        user_from_model(existing).map(Some)
    }
}

fn user_active_model(user: &User) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(user.id),
        firebase_uid: Set(user.firebase_uid.clone()),
        email: Set(user.email.clone()),
        phone_number: Set(user.phone_number.clone()),
        full_name: Set(user.full_name.clone()),
        role: Set(user.role.as_str().to_owned()),
        is_verified: Set(user.is_verified),
        is_active: Set(user.is_active),
        created_at: Set(user.created_at),
        updated_at: Set(user.updated_at),
    }
}

fn user_from_model(model: users::Model) -> Result<User, AccountsError> {
    let role =
        Role::from_name(&model.role).ok_or_else(|| anyhow!("unknown role value: {}", model.role))?;
    Ok(User {
        id: model.id,
        firebase_uid: model.firebase_uid,
        email: model.email,
        phone_number: model.phone_number,
        full_name: model.full_name,
        role,
        is_verified: model.is_verified,
        is_active: model.is_active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Driver profile repository ────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDriverProfileRepository {
    pub db: DatabaseConnection,
}

impl DriverProfileRepository for DbDriverProfileRepository {
    async fn attach(
        &self,
        profile: &DriverProfile,
    ) -> Result<Option<DriverProfile>, AccountsError> {
        use sea_orm::TransactionTrait;

        let profile = profile.clone();
        let model = self
            .db
            .transaction::<_, Option<driver_profiles::Model>, AccountsError>(|txn| {
                Box::pin(async move {
                    let Some(owner) = users::Entity::find_by_id(profile.user_id)
                        .one(txn)
                        .await
                        .context("attach profile: find user")?
                    else {
                        return Ok(None);
                    };

                    let created = profile_active_model(&profile)
                        .insert(txn)
                        .await
                        .map_err(|e| AccountsError::from_db(e, "attach profile: insert"))?;

                    // Promotion is unconditional; a user that is already a
                    // driver keeps the role.
                    let mut owner = owner.into_active_model();
                    owner.role = Set(Role::Driver.as_str().to_owned());
                    owner.updated_at = Set(Utc::now());
                    owner
                        .update(txn)
                        .await
                        .map_err(|e| AccountsError::from_db(e, "attach profile: promote role"))?;

                    Ok(Some(created))
                })
            })
            .await
            .map_err(|e| AccountsError::from_txn(e, "attach driver profile"))?;

        match model {
            Some(created) => {
                tracing::info!(
                    driver_id = %created.driver_id,
                    user_id = %created.user_id,
                    "driver profile attached"
                );
                profile_from_model(created).map(Some)
            }
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, driver_id: Uuid) -> Result<Option<DriverProfile>, AccountsError> {
        let model = driver_profiles::Entity::find_by_id(driver_id)
            .one(&self.db)
            .await
            .context("find driver profile by id")?;
        model.map(profile_from_model).transpose()
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<DriverProfile>, AccountsError> {
        let model = driver_profiles::Entity::find()
            .filter(driver_profiles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find driver profile by user")?;
        model.map(profile_from_model).transpose()
    }

    async fn update(
        &self,
        driver_id: Uuid,
        patch: &DriverProfilePatch,
    ) -> Result<Option<DriverProfile>, AccountsError> {
        let Some(existing) = driver_profiles::Entity::find_by_id(driver_id)
            .one(&self.db)
            .await
            .context("find driver profile for update")?
        else {
            return Ok(None);
        };
        if patch.is_empty() {
            return profile_from_model(existing).map(Some);
        }

        let mut am = existing.into_active_model();
        if let Some(ref v) = patch.license_number {
            am.license_number = Set(v.clone());
        }
        if let Some(v) = patch.license_expiry {
            am.license_expiry = Set(Some(v));
        }
        if let Some(status) = patch.approval_status {
            am.approval_status = Set(status.as_str().to_owned());
        }
        if let Some(v) = patch.rating_avg {
            am.rating_avg = Set(v);
        }
        if let Some(v) = patch.total_trips {
            am.total_trips = Set(v);
        }
        if let Some(ref v) = patch.profile_photo_url {
            am.profile_photo_url = Set(Some(v.clone()));
        }
        am.updated_at = Set(Utc::now());

        let updated = am
            .update(&self.db)
            .await
            .map_err(|e| AccountsError::from_db(e, "update driver profile"))?;
        profile_from_model(updated).map(Some)
    }

    async fn delete(&self, driver_id: Uuid) -> Result<Option<DriverProfile>, AccountsError> {
        let Some(existing) = driver_profiles::Entity::find_by_id(driver_id)
            .one(&self.db)
            .await
            .context("find driver profile for delete")?
        else {
            return Ok(None);
        };
        driver_profiles::Entity::delete_by_id(driver_id)
            .exec(&self.db)
            .await
            .context("delete driver profile")?;
        tracing::debug!(driver_id = %driver_id, "driver profile deleted");
        profile_from_model(existing).map(Some)
    }
}

fn profile_active_model(profile: &DriverProfile) -> driver_profiles::ActiveModel {
    driver_profiles::ActiveModel {
        driver_id: Set(profile.driver_id),
        user_id: Set(profile.user_id),
        license_number: Set(profile.license_number.clone()),
        license_expiry: Set(profile.license_expiry),
        approval_status: Set(profile.approval_status.as_str().to_owned()),
        rating_avg: Set(profile.rating_avg),
        total_trips: Set(profile.total_trips),
        profile_photo_url: Set(profile.profile_photo_url.clone()),
        created_at: Set(profile.created_at),
        updated_at: Set(profile.updated_at),
    }
}

fn profile_from_model(model: driver_profiles::Model) -> Result<DriverProfile, AccountsError> {
    let approval_status = ApprovalStatus::from_name(&model.approval_status)
        .ok_or_else(|| anyhow!("unknown approval status: {}", model.approval_status))?;
    Ok(DriverProfile {
        driver_id: model.driver_id,
        user_id: model.user_id,
        license_number: model.license_number,
        license_expiry: model.license_expiry,
        approval_status,
        rating_avg: model.rating_avg,
        total_trips: model.total_trips,
        profile_photo_url: model.profile_photo_url,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Vehicle repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVehicleRepository {
    pub db: DatabaseConnection,
}

impl VehicleRepository for DbVehicleRepository {
    async fn create(&self, vehicle: &Vehicle) -> Result<Vehicle, AccountsError> {
        // No existence check on driver_id; the foreign key rejects dangling
        // references.
        let model = vehicle_active_model(vehicle)
            .insert(&self.db)
            .await
            .map_err(|e| AccountsError::from_db(e, "create vehicle"))?;
        Ok(vehicle_from_model(model))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AccountsError> {
        let model = vehicles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find vehicle by id")?;
        Ok(model.map(vehicle_from_model))
    }

    async fn list_by_driver(
        &self,
        driver_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Vehicle>, AccountsError> {
        let models = vehicles::Entity::find()
            .filter(vehicles::Column::DriverId.eq(driver_id))
            .order_by_asc(vehicles::Column::RegisteredAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list vehicles by driver")?;
        Ok(models.into_iter().map(vehicle_from_model).collect())
    }

    async fn update(
        &self,
        id: Uuid,
        patch: &VehiclePatch,
    ) -> Result<Option<Vehicle>, AccountsError> {
        let Some(existing) = vehicles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find vehicle for update")?
        else {
            return Ok(None);
        };
        if patch.is_empty() {
            return Ok(Some(vehicle_from_model(existing)));
        }

        let mut am = existing.into_active_model();
        if let Some(ref v) = patch.license_plate {
            am.license_plate = Set(v.clone());
        }
        if let Some(ref v) = patch.model {
            am.model = Set(Some(v.clone()));
        }
        if let Some(ref v) = patch.color {
            am.color = Set(Some(v.clone()));
        }
        if let Some(v) = patch.year {
            am.year = Set(Some(v));
        }
        if let Some(v) = patch.is_active {
            am.is_active = Set(v);
        }
        am.updated_at = Set(Utc::now());

        let updated = am
            .update(&self.db)
            .await
            .map_err(|e| AccountsError::from_db(e, "update vehicle"))?;
        Ok(Some(vehicle_from_model(updated)))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Vehicle>, AccountsError> {
        let Some(existing) = vehicles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find vehicle for delete")?
        else {
            return Ok(None);
        };
        vehicles::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete vehicle")?;
        tracing::debug!(vehicle_id = %id, "vehicle deleted");
        Ok(Some(vehicle_from_model(existing)))
    }
}

fn vehicle_active_model(vehicle: &Vehicle) -> vehicles::ActiveModel {
    vehicles::ActiveModel {
        id: Set(vehicle.id),
        driver_id: Set(vehicle.driver_id),
        license_plate: Set(vehicle.license_plate.clone()),
        model: Set(vehicle.model.clone()),
        color: Set(vehicle.color.clone()),
        year: Set(vehicle.year),
        is_active: Set(vehicle.is_active),
        registered_at: Set(vehicle.registered_at),
        updated_at: Set(vehicle.updated_at),
    }
}

fn vehicle_from_model(model: vehicles::Model) -> Vehicle {
    Vehicle {
        id: model.id,
        driver_id: model.driver_id,
        license_plate: model.license_plate,
        model: model.model,
        color: model.color,
        year: model.year,
        is_active: model.is_active,
        registered_at: model.registered_at,
        updated_at: model.updated_at,
    }
}
