//! Integration tests for the generic repository contract, exercised
//! through representative resources.

mod common;

use sqlx::PgPool;
use std::sync::Arc;

use hospital_api::domain::entities::{
    Department, DepartmentPatch, Doctor, NewDepartment, NewDoctor,
};
use hospital_api::domain::repository::{FilterSet, PageWindow, ResourceRepository};
use hospital_api::error::AppError;
use hospital_api::infrastructure::persistence::PgRepository;

fn department_repo(pool: PgPool) -> PgRepository<Department> {
    PgRepository::new(Arc::new(pool))
}

fn doctor_repo(pool: PgPool) -> PgRepository<Doctor> {
    PgRepository::new(Arc::new(pool))
}

fn new_department(name: &str) -> NewDepartment {
    NewDepartment {
        name: name.to_string(),
        description: Some("Heart care".to_string()),
        image_url: None,
    }
}

#[sqlx::test]
async fn test_create_then_get_roundtrip(pool: PgPool) {
    let repo = department_repo(pool);

    let created = repo.create(new_department("Cardiology")).await.unwrap();
    assert_eq!(created.name, "Cardiology");
    assert_eq!(created.description.as_deref(), Some("Heart care"));
    assert!(created.is_active);

    let fetched = repo.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Cardiology");
}

#[sqlx::test]
async fn test_get_absent_is_none(pool: PgPool) {
    let repo = department_repo(pool);

    let result = repo.get(424242).await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_duplicate_name_is_conflict(pool: PgPool) {
    let repo = department_repo(pool);

    repo.create(new_department("Neurology")).await.unwrap();
    let result = repo.create(new_department("Neurology")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_concurrent_create_same_name_one_wins(pool: PgPool) {
    let first = department_repo(pool.clone());
    let second = department_repo(pool);

    // The unique index is the arbiter; exactly one insert lands.
    let (a, b) = tokio::join!(
        first.create(new_department("Unique")),
        second.create(new_department("Unique"))
    );

    assert_eq!([&a, &b].iter().filter(|r| r.is_ok()).count(), 1);

    let err = if a.is_err() {
        a.unwrap_err()
    } else {
        b.unwrap_err()
    };
    assert!(matches!(err, AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_list_window_bounds_the_page(pool: PgPool) {
    let repo = department_repo(pool);

    for i in 1..=5 {
        repo.create(new_department(&format!("Dept {i}")))
            .await
            .unwrap();
    }

    let window = PageWindow::new(1, 2).unwrap();
    let page = repo.list(window, &FilterSet::new()).await.unwrap();

    assert_eq!(page.items.len(), 2);
    // Total reflects all matching rows, not the page.
    assert_eq!(page.total, 5);
    // Ordered by id: skipping one row starts at the second insert.
    assert_eq!(page.items[0].name, "Dept 2");
    assert_eq!(page.items[1].name, "Dept 3");
}

#[sqlx::test]
async fn test_list_skip_past_end_is_empty(pool: PgPool) {
    let repo = department_repo(pool);

    repo.create(new_department("Only")).await.unwrap();

    let window = PageWindow::new(100, 10).unwrap();
    let page = repo.list(window, &FilterSet::new()).await.unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 1);
}

#[sqlx::test]
async fn test_list_filters_are_conjunctive(pool: PgPool) {
    let dept = common::create_test_department(&pool, "General").await;
    let other = common::create_test_department(&pool, "Ortho").await;
    let repo = doctor_repo(pool.clone());

    for (name, department_id) in [("Dr. A", dept), ("Dr. B", dept), ("Dr. C", other)] {
        repo.create(NewDoctor {
            full_name: name.to_string(),
            specialty: "Cardiology".to_string(),
            image_url: None,
            bio: None,
            experience_years: None,
            department_id,
        })
        .await
        .unwrap();
    }

    let filters = FilterSet::new()
        .eq("department_id", dept)
        .eq("specialty", "Cardiology");
    let page = repo.list(PageWindow::default(), &filters).await.unwrap();

    assert_eq!(page.total, 2);
    assert!(page.items.iter().all(|d| d.department_id == dept));
}

#[sqlx::test]
async fn test_unknown_filter_field_is_rejected(pool: PgPool) {
    let repo = department_repo(pool);

    let filters = FilterSet::new().eq("nonexistent_column", true);
    let result = repo.list(PageWindow::default(), &filters).await;

    assert!(matches!(
        result.unwrap_err(),
        AppError::InvalidFilter { .. }
    ));
}

#[sqlx::test]
async fn test_partial_update_preserves_other_fields(pool: PgPool) {
    let repo = department_repo(pool);

    let created = repo.create(new_department("Radiology")).await.unwrap();

    let patch = DepartmentPatch {
        name: Some("Imaging".to_string()),
        ..Default::default()
    };
    let updated = repo.update(created.id, patch).await.unwrap();

    assert_eq!(updated.name, "Imaging");
    // Untouched fields survive the patch.
    assert_eq!(updated.description.as_deref(), Some("Heart care"));
    assert!(updated.is_active);
    // The patch ran in a later transaction, so the refresh moves the clock.
    assert!(updated.updated_at > created.updated_at);
}

#[sqlx::test]
async fn test_update_can_clear_nullable_field(pool: PgPool) {
    let repo = department_repo(pool);

    let created = repo.create(new_department("Oncology")).await.unwrap();

    let patch = DepartmentPatch {
        description: Some(None),
        ..Default::default()
    };
    let updated = repo.update(created.id, patch).await.unwrap();

    assert_eq!(updated.description, None);
}

#[sqlx::test]
async fn test_update_absent_is_not_found(pool: PgPool) {
    let repo = department_repo(pool);

    let result = repo.update(424242, DepartmentPatch::default()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_soft_delete_deactivates_and_keeps_row(pool: PgPool) {
    let repo = department_repo(pool);

    let created = repo.create(new_department("Dermatology")).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());

    // Row still exists, flagged inactive.
    let after = repo.get(created.id).await.unwrap().unwrap();
    assert!(!after.is_active);

    // Deleting an already-inactive row reports no match.
    assert!(!repo.delete(created.id).await.unwrap());
}

#[sqlx::test]
async fn test_hard_delete_removes_row(pool: PgPool) {
    let dept = common::create_test_department(&pool, "Surgery").await;
    let repo = doctor_repo(pool.clone());

    let created = repo
        .create(NewDoctor {
            full_name: "Dr. Gone".to_string(),
            specialty: "Surgery".to_string(),
            image_url: None,
            bio: None,
            experience_years: Some(12),
            department_id: dept,
        })
        .await
        .unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(repo.get(created.id).await.unwrap().is_none());
    assert!(!repo.delete(created.id).await.unwrap());
}

#[sqlx::test]
async fn test_delete_absent_reports_no_match(pool: PgPool) {
    let repo = department_repo(pool);

    assert!(!repo.delete(424242).await.unwrap());
}

#[sqlx::test]
async fn test_find_by_name(pool: PgPool) {
    let repo = department_repo(pool);

    repo.create(new_department("Pediatrics")).await.unwrap();

    let found = repo.find_by_name("Pediatrics").await.unwrap();
    assert!(found.is_some());

    let missing = repo.find_by_name("Nope").await.unwrap();
    assert!(missing.is_none());
}
