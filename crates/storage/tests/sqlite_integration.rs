use career_core::model::{DailyTime, DreamJob, Percentage, ProgressRecord, RoadmapId, UserId};
use career_core::time::fixed_now;
use storage::repository::{AccountRepository, ProgressRepository, StorageError, UserRecord};
use storage::sqlite::SqliteRepository;
use storage::Storage;

fn build_user(id: &str, email: &str) -> UserRecord {
    UserRecord {
        id: UserId::parse(id).unwrap(),
        full_name: "Ada".into(),
        email: email.into(),
        email_key: email.to_lowercase(),
        dream_job: DreamJob::Backend,
        daily_time: DailyTime::new(3).unwrap(),
        secret_salt: "00ff".into(),
        secret_hash: "abcd".into(),
        created_at: fixed_now(),
    }
}

fn build_progress(user: &str, roadmap: &str, value: f64) -> ProgressRecord {
    ProgressRecord {
        user_id: UserId::parse(user).unwrap(),
        roadmap_id: RoadmapId::parse(roadmap).unwrap(),
        percentage: Percentage::new(value).unwrap(),
        updated_at: fixed_now(),
    }
}

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_roundtrips_user_and_rejects_duplicate_email() {
    let repo = connect("memdb_users").await;
    let user = build_user("u1", "Ada@X.com");
    repo.insert_user(&user).await.unwrap();

    let fetched = repo.find_by_email_key("ada@x.com").await.unwrap().unwrap();
    assert_eq!(fetched, user);
    assert_eq!(fetched.email, "Ada@X.com");

    let by_id = repo.get_user(&user.id).await.unwrap().unwrap();
    assert_eq!(by_id.dream_job, DreamJob::Backend);
    assert_eq!(by_id.daily_time.hours(), 3);

    let err = repo
        .insert_user(&build_user("u2", "ada@x.com"))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::Conflict));
    let u2 = UserId::parse("u2").unwrap();
    assert!(repo.get_user(&u2).await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_missing_user_is_none() {
    let repo = connect("memdb_missing").await;
    assert!(repo.find_by_email_key("nobody@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_upsert_replaces_and_lists_in_order() {
    let repo = connect("memdb_progress").await;
    repo.upsert_progress(&build_progress("u1", "r2", 0.0))
        .await
        .unwrap();
    repo.upsert_progress(&build_progress("u1", "r1", 43.0))
        .await
        .unwrap();
    repo.upsert_progress(&build_progress("u1", "r1", 57.0))
        .await
        .unwrap();
    repo.upsert_progress(&build_progress("u2", "r1", 12.5))
        .await
        .unwrap();

    let u1 = UserId::parse("u1").unwrap();
    let r1 = RoadmapId::parse("r1").unwrap();
    let stored = repo.get_progress(&u1, &r1).await.unwrap().unwrap();
    assert_eq!(stored.percentage.value(), 57.0);

    let list = repo.list_progress(&u1).await.unwrap();
    let ids: Vec<_> = list.iter().map(|r| r.roadmap_id.as_str()).collect();
    assert_eq!(ids, ["r1", "r2"]);

    let untouched = RoadmapId::parse("r9").unwrap();
    assert!(repo.get_progress(&u1, &untouched).await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_concurrent_upserts_leave_one_submitted_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("race.sqlite3");
    std::fs::File::create(&path).unwrap();
    let repo = SqliteRepository::connect(&format!("sqlite://{}", path.display()))
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    let values = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];

    let mut handles = Vec::new();
    for value in values {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.upsert_progress(&build_progress("u1", "r1", value)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let u1 = UserId::parse("u1").unwrap();
    let r1 = RoadmapId::parse("r1").unwrap();
    let stored = repo.get_progress(&u1, &r1).await.unwrap().unwrap();
    assert!(values.contains(&stored.percentage.value()));
    assert_eq!(repo.list_progress(&u1).await.unwrap().len(), 1);
}

#[tokio::test]
async fn sqlite_file_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("career.sqlite3");
    std::fs::File::create(&path).unwrap();
    let url = format!("sqlite://{}", path.display());

    {
        let storage = Storage::sqlite(&url).await.unwrap();
        storage
            .accounts
            .insert_user(&build_user("u1", "ada@x.com"))
            .await
            .unwrap();
        storage
            .progress
            .upsert_progress(&build_progress("u1", "frontend-dev", 57.0))
            .await
            .unwrap();
    }

    let reopened = Storage::sqlite(&url).await.unwrap();
    let user = reopened
        .accounts
        .find_by_email_key("ada@x.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.id.as_str(), "u1");
    let list = reopened.progress.list_progress(&user.id).await.unwrap();
    assert_eq!(list[0].percentage.value(), 57.0);
}
