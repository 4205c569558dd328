//! Initial data for an empty store

use anyhow::{Context, Result};
use chrono::Utc;
use motorpool_db::{Database, NewUser, NewVehicle, UserRole, UserStore, VehicleStore};
use tracing::info;

use crate::config::SeedConfig;

const SEED_VEHICLES: [(&str, &str, i32); 5] = [
    ("Toyota", "Corolla", 2020),
    ("Honda", "Civic", 2019),
    ("Ford", "Focus", 2018),
    ("Volkswagen", "Golf", 2019),
    ("Chevrolet", "Cruze", 2022),
];

/// Insert seed users and vehicles into whichever collections are empty
pub async fn seed(db: &Database, config: &SeedConfig) -> Result<()> {
    if db.count_users().await? == 0 {
        // Every role must parse before the first insert
        let roles = config
            .users
            .iter()
            .map(|user| {
                user.role
                    .parse::<UserRole>()
                    .with_context(|| format!("Seed user {} has an invalid role", user.username))
            })
            .collect::<Result<Vec<_>>>()?;

        for (user, role) in config.users.iter().zip(roles) {
            let password_hash = motorpool_auth::hash_password(&user.password)?;

            db.insert_user(NewUser {
                id: user.id.clone(),
                username: user.username.clone(),
                password_hash,
                role,
                created_at: Utc::now(),
            })
            .await?;
            info!("Seeded user {} ({})", user.username, role);
        }
    }

    if config.vehicles && db.count_vehicles().await? == 0 {
        for (brand, model, year) in SEED_VEHICLES {
            db.insert_vehicle(NewVehicle {
                brand: brand.to_string(),
                model: model.to_string(),
                year,
            })
            .await?;
        }
        info!("Seeded {} vehicles", SEED_VEHICLES.len());
    }

    Ok(())
}
