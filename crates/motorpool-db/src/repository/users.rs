//! User operations

use async_trait::async_trait;
use sqlx::Row;

use crate::error::DbError;
use crate::models::{NewUser, User};
use crate::repository::Database;
use crate::store::UserStore;

#[async_trait]
impl UserStore for Database {
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DbError> {
        let result = sqlx::query(
            r#"
            SELECT id, username, password_hash, role, created_at
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        result.map(|row| User::try_from(&row).map_err(DbError::from)).transpose()
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, DbError> {
        // Check if user already exists
        let existing = self.find_user_by_username(&user.username).await?;
        if existing.is_some() {
            return Err(DbError::Duplicate(format!("User '{}' already exists", user.username)));
        }

        sqlx::query(
            r#"
            INSERT INTO users (id, username, password_hash, role, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            // Lost a race with a concurrent insert of the same username
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DbError::Duplicate(format!("User '{}' already exists", user.username))
            }
            other => DbError::Connection(other),
        })?;

        Ok(User {
            id: user.id,
            username: user.username,
            password_hash: user.password_hash,
            role: user.role,
            created_at: user.created_at,
        })
    }

    async fn count_users(&self) -> Result<i64, DbError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(result.get("count"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;
    use chrono::{TimeZone, Utc};

    fn new_user(id: &str, username: &str) -> NewUser {
        NewUser {
            id: id.to_string(),
            username: username.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            role: UserRole::Manager,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 11, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_user() {
        let db = Database::in_memory().await.unwrap();
        assert_eq!(db.count_users().await.unwrap(), 0);

        db.insert_user(new_user("user-2", "manager")).await.unwrap();

        let found = db.find_user_by_username("manager").await.unwrap().unwrap();
        assert_eq!(found.id, "user-2");
        assert_eq!(found.role, UserRole::Manager);
        assert_eq!(found.created_at.to_rfc3339(), "2024-01-15T11:00:00+00:00");
        assert!(found.password_hash.starts_with("$argon2id$"));
        assert_eq!(db.count_users().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_missing_user() {
        let db = Database::in_memory().await.unwrap();
        assert!(db.find_user_by_username("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let db = Database::in_memory().await.unwrap();
        db.insert_user(new_user("user-2", "manager")).await.unwrap();

        let result = db.insert_user(new_user("user-9", "manager")).await;
        assert!(matches!(result, Err(DbError::Duplicate(_))));
        assert_eq!(db.count_users().await.unwrap(), 1);
    }
}
