//! Contract tests for [`MemoryStorage`].
//!
//! These run without a database and pin the behaviour every backend must
//! share: server-assigned ids, newest-first listing, and username uniqueness.

use assert_matches::assert_matches;
use chrono::Utc;
use matjib_core::lead::{
    parse_lead, LeadKind, NewAdvertiserApplication, NewCriticApplication, NewLocationRequest,
};
use matjib_db::models::lead::StoredLead;
use matjib_db::models::user::CreateUser;
use matjib_db::{MemoryStorage, Storage, StoreError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn location(name: &str) -> NewLocationRequest {
    NewLocationRequest {
        name: name.to_string(),
        address: "서울시 강남구 역삼동".to_string(),
    }
}

fn critic(name: &str) -> NewCriticApplication {
    NewCriticApplication {
        name: name.to_string(),
        email: "chef@example.com".to_string(),
        phone: "010-1111-2222".to_string(),
    }
}

fn advertiser(company: &str) -> NewAdvertiserApplication {
    NewAdvertiserApplication {
        company_name: company.to_string(),
        representative: "홍대표".to_string(),
        phone: "02-1234-5678".to_string(),
        email: "info@tasty.com".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Leads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_assigns_id_and_timestamp() {
    let store = MemoryStorage::new();
    let before = Utc::now();

    let row = store.create_location_request(&location("김철수")).await.unwrap();

    assert!(!row.id.is_nil());
    assert!(row.created_at >= before);
    assert_eq!(row.name, "김철수");
    assert_eq!(row.address, "서울시 강남구 역삼동");
}

#[tokio::test]
async fn list_on_empty_store_is_empty() {
    let store = MemoryStorage::new();
    assert!(store.list_location_requests().await.unwrap().is_empty());
    assert!(store.list_critic_applications().await.unwrap().is_empty());
    assert!(store.list_advertiser_applications().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_returns_every_row_newest_first() {
    let store = MemoryStorage::new();
    let mut created = Vec::new();
    for name in ["최요리", "정미식", "박민수"] {
        created.push(store.create_critic_application(&critic(name)).await.unwrap());
    }

    let listed = store.list_critic_applications().await.unwrap();
    assert_eq!(listed.len(), 3);
    assert!(listed
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
    assert_eq!(listed[0], created[2]);
    assert_eq!(listed[2], created[0]);
}

#[tokio::test]
async fn listing_twice_without_writes_is_identical() {
    let store = MemoryStorage::new();
    store.create_advertiser_application(&advertiser("맛있는 식당")).await.unwrap();
    store.create_advertiser_application(&advertiser("진짜 맛집")).await.unwrap();

    let first = store.list_advertiser_applications().await.unwrap();
    let second = store.list_advertiser_applications().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn kinds_are_stored_independently() {
    let store = MemoryStorage::new();
    store.create_location_request(&location("이영희")).await.unwrap();

    assert_eq!(store.list_location_requests().await.unwrap().len(), 1);
    assert!(store.list_critic_applications().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_lead_dispatches_on_kind() {
    let store = MemoryStorage::new();
    let raw = serde_json::json!({
        "companyName": "진짜 맛집",
        "representative": "김사장",
        "phone": "02-8765-4321",
        "email": "contact@real.com",
    });
    let lead = parse_lead(LeadKind::AdvertiserApplication, &raw).unwrap();

    let stored = store.create_lead(&lead).await.unwrap();

    assert_eq!(stored.kind(), LeadKind::AdvertiserApplication);
    assert_matches!(stored, StoredLead::AdvertiserApplication(ref row) if row.company_name == "진짜 맛집");
    let listed = store.list_advertiser_applications().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, stored.id());
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn user_lookup_by_username_and_id() {
    let store = MemoryStorage::new();
    let input = CreateUser {
        username: "admin".to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
    };
    let user = store.create_user(&input).await.unwrap();

    let by_name = store.get_user_by_username("admin").await.unwrap().unwrap();
    assert_eq!(by_name.id, user.id);

    let by_id = store.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, "admin");

    assert!(store.get_user_by_username("Admin").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let store = MemoryStorage::new();
    let input = CreateUser {
        username: "admin".to_string(),
        password_hash: "hash".to_string(),
    };
    store.create_user(&input).await.unwrap();

    let err = store.create_user(&input).await.unwrap_err();
    assert_matches!(err, StoreError::Conflict(msg) if msg.contains("uq_users_username"));
}
