use career_core::model::{
    DailyTime, DreamJob, Percentage, ProgressRecord, RoadmapId, UserId,
};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::{StorageError, UserRecord};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn connection(e: sqlx::Error) -> StorageError {
    StorageError::Connection(e.to_string())
}

pub(crate) fn daily_time_to_i64(daily_time: DailyTime) -> i64 {
    i64::from(daily_time.hours())
}

pub(crate) fn daily_time_from_i64(v: i64) -> Result<DailyTime, StorageError> {
    let hours = u8::try_from(v)
        .map_err(|_| StorageError::Serialization(format!("invalid daily_time: {v}")))?;
    DailyTime::new(hours).map_err(ser)
}

pub(crate) fn map_user_row(row: &SqliteRow) -> Result<UserRecord, StorageError> {
    let id: String = row.try_get("id").map_err(ser)?;
    let dream_job: String = row.try_get("dream_job").map_err(ser)?;

    Ok(UserRecord {
        id: UserId::parse(&id).map_err(ser)?,
        full_name: row.try_get("full_name").map_err(ser)?,
        email: row.try_get("email").map_err(ser)?,
        email_key: row.try_get("email_key").map_err(ser)?,
        dream_job: dream_job.parse::<DreamJob>().map_err(ser)?,
        daily_time: daily_time_from_i64(row.try_get("daily_time").map_err(ser)?)?,
        secret_salt: row.try_get("secret_salt").map_err(ser)?,
        secret_hash: row.try_get("secret_hash").map_err(ser)?,
        created_at: row.try_get("created_at").map_err(ser)?,
    })
}

pub(crate) fn map_progress_row(row: &SqliteRow) -> Result<ProgressRecord, StorageError> {
    let user_id: String = row.try_get("user_id").map_err(ser)?;
    let roadmap_id: String = row.try_get("roadmap_id").map_err(ser)?;

    Ok(ProgressRecord {
        user_id: UserId::parse(&user_id).map_err(ser)?,
        roadmap_id: RoadmapId::parse(&roadmap_id).map_err(ser)?,
        percentage: Percentage::new(row.try_get("percentage").map_err(ser)?).map_err(ser)?,
        updated_at: row.try_get("updated_at").map_err(ser)?,
    })
}
