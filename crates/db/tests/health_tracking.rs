use chrono::NaiveDate;
use mumentum_db::models::health_tracking::UpsertHealthEntry;
use mumentum_db::repositories::HealthTrackingRepo;
use sqlx::PgPool;
use uuid::Uuid;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_one_entry_per_day(pool: PgPool) {
    let user = Uuid::new_v4();
    let morning = UpsertHealthEntry {
        blood_pressure_systolic: Some(118),
        blood_pressure_diastolic: Some(76),
        symptoms: vec!["nausea".to_string()],
        ..Default::default()
    };
    let evening = UpsertHealthEntry {
        weight_kg: Some(64.5),
        mood: Some("calm".to_string()),
        ..Default::default()
    };

    let first = HealthTrackingRepo::upsert(&pool, user, day(3), &morning).await.unwrap();
    let second = HealthTrackingRepo::upsert(&pool, user, day(3), &evening).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.blood_pressure_systolic, None);
    assert_eq!(second.weight_kg, Some(64.5));
    assert!(second.symptoms.is_empty());

    let found = HealthTrackingRepo::find_for_date(&pool, user, day(3)).await.unwrap();
    assert_eq!(found.map(|e| e.mood), Some(Some("calm".to_string())));
    assert!(HealthTrackingRepo::find_for_date(&pool, user, day(4)).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_history_is_newest_first_and_limited(pool: PgPool) {
    let user = Uuid::new_v4();
    for d in 1..=5 {
        HealthTrackingRepo::upsert(&pool, user, day(d), &UpsertHealthEntry::default())
            .await
            .unwrap();
    }

    let recent = HealthTrackingRepo::list_recent(&pool, user, 3).await.unwrap();
    let dates: Vec<_> = recent.iter().map(|e| e.entry_date).collect();
    assert_eq!(dates, vec![day(5), day(4), day(3)]);

    let other = HealthTrackingRepo::list_recent(&pool, Uuid::new_v4(), 30).await.unwrap();
    assert!(other.is_empty());
}
