//! Integration tests for blood-group inventory lookups.

mod common;

use sqlx::PgPool;
use std::sync::Arc;

use hospital_api::domain::entities::{BloodBank, BloodGroup};
use hospital_api::domain::repository::PageWindow;
use hospital_api::infrastructure::persistence::PgRepository;

fn repo(pool: PgPool) -> PgRepository<BloodBank> {
    PgRepository::new(Arc::new(pool))
}

#[sqlx::test]
async fn test_only_stocked_banks_are_listed(pool: PgPool) {
    common::create_test_blood_bank(&pool, "Stocked", 12).await;
    common::create_test_blood_bank(&pool, "Empty", 0).await;

    let page = repo(pool)
        .list_by_blood_group(BloodGroup::OPositive, PageWindow::default())
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].name, "Stocked");
    assert_eq!(page.items[0].units(BloodGroup::OPositive), 12);
}

#[sqlx::test]
async fn test_inactive_banks_are_excluded(pool: PgPool) {
    common::create_test_blood_bank(&pool, "Active", 5).await;
    common::create_inactive_blood_bank(&pool, "Closed", 50).await;

    let page = repo(pool)
        .list_by_blood_group(BloodGroup::OPositive, PageWindow::default())
        .await
        .unwrap();

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Active");
}

#[sqlx::test]
async fn test_groups_are_independent(pool: PgPool) {
    common::create_test_blood_bank(&pool, "O+ only", 3).await;

    let repo = repo(pool);

    let o_pos = repo
        .list_by_blood_group(BloodGroup::OPositive, PageWindow::default())
        .await
        .unwrap();
    assert_eq!(o_pos.total, 1);

    let ab_neg = repo
        .list_by_blood_group(BloodGroup::AbNegative, PageWindow::default())
        .await
        .unwrap();
    assert_eq!(ab_neg.total, 0);
    assert!(ab_neg.items.is_empty());
}

#[sqlx::test]
async fn test_inventory_listing_is_paged(pool: PgPool) {
    for i in 1..=4 {
        common::create_test_blood_bank(&pool, &format!("Bank {i}"), i).await;
    }

    let window = PageWindow::new(2, 2).unwrap();
    let page = repo(pool)
        .list_by_blood_group(BloodGroup::OPositive, window)
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 4);
    assert_eq!(page.items[0].name, "Bank 3");
}
