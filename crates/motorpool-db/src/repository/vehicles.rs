//! Vehicle operations

use async_trait::async_trait;
use sqlx::Row;
use tracing::debug;

use crate::error::DbError;
use crate::models::{NewVehicle, Vehicle, VehicleFilter};
use crate::repository::Database;
use crate::store::VehicleStore;

#[async_trait]
impl VehicleStore for Database {
    async fn list_vehicles(&self, filter: &VehicleFilter) -> Result<Vec<Vehicle>, DbError> {
        let mut conditions = Vec::new();
        let mut params: Vec<&str> = Vec::new();

        if let Some(brand) = &filter.brand {
            conditions.push("brand = ?");
            params.push(brand);
        }
        if let Some(model) = &filter.model {
            conditions.push("model = ?");
            params.push(model);
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            r#"
            SELECT id, brand, model, year
            FROM vehicles
            {}
            ORDER BY id
            "#,
            where_clause
        );

        let mut query = sqlx::query(&sql);
        for param in params {
            query = query.bind(param);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.iter()
            .map(|row| Vehicle::try_from(row).map_err(DbError::from))
            .collect()
    }

    async fn find_vehicle(&self, id: i64) -> Result<Option<Vehicle>, DbError> {
        let result = sqlx::query(
            r#"
            SELECT id, brand, model, year
            FROM vehicles
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        result
            .map(|row| Vehicle::try_from(&row).map_err(DbError::from))
            .transpose()
    }

    async fn insert_vehicle(&self, vehicle: NewVehicle) -> Result<Vehicle, DbError> {
        let _guard = self.vehicle_writes.lock().await;

        let result = sqlx::query(
            r#"
            INSERT INTO vehicles (id, brand, model, year)
            SELECT COALESCE(MAX(id), 0) + 1, ?, ?, ?
            FROM vehicles
            RETURNING id
            "#,
        )
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = result.get("id");
        debug!("Assigned vehicle id {}", id);

        Ok(Vehicle {
            id,
            brand: vehicle.brand,
            model: vehicle.model,
            year: vehicle.year,
        })
    }

    async fn delete_vehicle(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_vehicles(&self) -> Result<i64, DbError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM vehicles")
            .fetch_one(&self.pool)
            .await?;
        Ok(result.get("count"))
    }
}
