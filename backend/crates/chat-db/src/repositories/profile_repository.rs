use crate::{DbError, Result as DbErrorResult};

use chat_core::{LocalProfile, ProfileUpdate, SubjectId};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

const TABLE: &str = "user_profiles";

#[derive(Debug, FromRow)]
struct ProfileRow {
    user_id: i64,
    first_name: Option<String>,
    last_name: Option<String>,
    avatar_url: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ProfileRow> for LocalProfile {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: ProfileRow) -> DbErrorResult<Self> {
        Ok(LocalProfile {
            subject_id: row.user_id,
            first_name: row.first_name,
            last_name: row.last_name,
            avatar_url: row.avatar_url,
            created_at: timestamp(row.created_at, "created_at")?,
            updated_at: timestamp(row.updated_at, "updated_at")?,
        })
    }
}

#[track_caller]
fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::InvalidRow {
        table: TABLE,
        message: format!("{column} out of range: {secs}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Local profile store. The only identity data this service writes.
#[derive(Clone)]
pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find(&self, subject_id: SubjectId) -> DbErrorResult<Option<LocalProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
              SELECT user_id, first_name, last_name, avatar_url, created_at, updated_at
              FROM user_profiles
              WHERE user_id = ?
              "#,
        )
        .bind(subject_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(LocalProfile::try_from).transpose()
    }

    /// Insert or update the profile for `subject_id`.
    ///
    /// Fields that are `None` in `update` keep their stored value;
    /// `updated_at` is always bumped.
    pub async fn upsert(
        &self,
        subject_id: SubjectId,
        update: &ProfileUpdate,
    ) -> DbErrorResult<LocalProfile> {
        let now = Utc::now().timestamp();

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
              INSERT INTO user_profiles (
                  user_id, first_name, last_name, avatar_url, created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?)
              ON CONFLICT(user_id) DO UPDATE SET
                  first_name = COALESCE(excluded.first_name, user_profiles.first_name),
                  last_name = COALESCE(excluded.last_name, user_profiles.last_name),
                  avatar_url = COALESCE(excluded.avatar_url, user_profiles.avatar_url),
                  updated_at = excluded.updated_at
              RETURNING user_id, first_name, last_name, avatar_url, created_at, updated_at
              "#,
        )
        .bind(subject_id)
        .bind(update.first_name.as_deref())
        .bind(update.last_name.as_deref())
        .bind(update.avatar_url.as_deref())
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        LocalProfile::try_from(row)
    }
}
