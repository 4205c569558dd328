//! Store traits
//!
//! Handlers only ever see these traits, so the backing collection can be
//! swapped (SQLite in production, doubles in tests).

use async_trait::async_trait;

use crate::error::DbError;
use crate::models::{NewUser, NewVehicle, User, Vehicle, VehicleFilter};

/// Credential collection keyed by username
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by its unique username
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DbError>;

    /// Insert a user, failing with [`DbError::Duplicate`] if the username is taken
    async fn insert_user(&self, user: NewUser) -> Result<User, DbError>;

    /// Count stored users
    async fn count_users(&self) -> Result<i64, DbError>;
}

/// Vehicle collection keyed by numeric id
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// List vehicles in insertion order, applying equality filters
    async fn list_vehicles(&self, filter: &VehicleFilter) -> Result<Vec<Vehicle>, DbError>;

    /// Find a vehicle by id
    async fn find_vehicle(&self, id: i64) -> Result<Option<Vehicle>, DbError>;

    /// Insert a vehicle under the next id (max + 1, or 1 when empty)
    async fn insert_vehicle(&self, vehicle: NewVehicle) -> Result<Vehicle, DbError>;

    /// Delete a vehicle, returning whether it existed
    async fn delete_vehicle(&self, id: i64) -> Result<bool, DbError>;

    /// Count stored vehicles
    async fn count_vehicles(&self) -> Result<i64, DbError>;
}
