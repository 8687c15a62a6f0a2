//! Workshops referencing notions: raw storage, expanded reads, bounded lists

mod common;

use atelier_core::application::{
    CreateNotionRequest, CreateWorkshopRequest, ListWorkshopsRequest,
};
use atelier_core::domain::EntityId;
use atelier_core::error::AppError;
use atelier_core::port::WorkshopRepository;
use atelier_infra_sqlite::SqliteWorkshopRepository;
use serde_json::json;

const DANGLING: &str = "deadbeefdeadbeefdeadbeef";

#[tokio::test]
async fn test_create_drops_dangling_and_keeps_order() {
    let catalog = common::in_memory().await;
    let docker = catalog
        .notions
        .create(CreateNotionRequest::new("Docker"))
        .await
        .unwrap();
    let cicd = catalog
        .notions
        .create(CreateNotionRequest::new("CI/CD"))
        .await
        .unwrap();

    let refs = vec![
        docker.id.to_string(),
        cicd.id.to_string(),
        DANGLING.to_string(),
    ];
    let created = catalog
        .workshops
        .create(CreateWorkshopRequest::new("DevOps 101", refs.clone()))
        .await
        .unwrap();

    assert_eq!(created.name, "DevOps 101");
    assert_eq!(created.notions, vec![docker.clone(), cicd.clone()]);

    // Stored form still holds all three raw IDs
    let raw = SqliteWorkshopRepository::new(catalog.pool.clone())
        .find_by_id(&created.id)
        .await
        .unwrap()
        .unwrap();
    let raw_ids: Vec<String> = raw.notions.iter().map(EntityId::to_string).collect();
    assert_eq!(raw_ids, refs);

    // Every read path expands the same way
    let fetched = catalog
        .workshops
        .get(created.id.as_str())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched, created);

    let listed = catalog
        .workshops
        .list(ListWorkshopsRequest::default())
        .await
        .unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_duplicates_and_reordering_survive_expansion() {
    let catalog = common::in_memory().await;
    let a = catalog
        .notions
        .create(CreateNotionRequest::new("A"))
        .await
        .unwrap();
    let b = catalog
        .notions
        .create(CreateNotionRequest::new("B"))
        .await
        .unwrap();

    let created = catalog
        .workshops
        .create(CreateWorkshopRequest::new(
            "Repeats",
            vec![
                b.id.to_string(),
                DANGLING.to_string(),
                a.id.to_string(),
                b.id.to_string(),
            ],
        ))
        .await
        .unwrap();

    assert_eq!(created.notions, vec![b.clone(), a, b]);
}

#[tokio::test]
async fn test_empty_or_missing_notions() {
    let catalog = common::in_memory().await;

    for payload in [
        json!({ "name": "Empty" }),
        json!({ "name": "Array", "notions": [] }),
    ] {
        let req = CreateWorkshopRequest::from_json(payload).unwrap();
        let created = catalog.workshops.create(req).await.unwrap();
        assert!(created.notions.is_empty());
    }
}

#[tokio::test]
async fn test_null_notions_rejected_without_writing() {
    let catalog = common::in_memory().await;

    let err = CreateWorkshopRequest::from_json(json!({ "name": "Null", "notions": null }))
        .unwrap_err();
    match err {
        AppError::Validation(msg) => assert_eq!(msg, "\"notions\" must be an array"),
        other => panic!("expected validation error, got {other:?}"),
    }

    let listed = catalog
        .workshops
        .list(ListWorkshopsRequest::default())
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_rejects_malformed_reference_without_writing() {
    let catalog = common::in_memory().await;

    let err = CreateWorkshopRequest::from_json(json!({
        "name": "Bad",
        "notions": ["000000000000000000000001", "xyz"],
    }))
    .unwrap_err();
    match err {
        AppError::Validation(msg) => assert_eq!(
            msg,
            "\"notions[1]\" with value \"xyz\" fails to match the required pattern: /^[0-9a-fA-F]{24}$/"
        ),
        other => panic!("expected validation error, got {other:?}"),
    }

    let err = catalog
        .workshops
        .create(CreateWorkshopRequest::new("Bad", vec!["n1".to_string()]))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let listed = catalog
        .workshops
        .list(ListWorkshopsRequest::default())
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_list_limit_bounds_results() {
    let catalog = common::in_memory().await;
    for n in 0..5 {
        catalog
            .workshops
            .create(CreateWorkshopRequest::new(format!("W{}", n), vec![]))
            .await
            .unwrap();
    }

    let two = catalog
        .workshops
        .list(ListWorkshopsRequest::with_limit(2))
        .await
        .unwrap();
    let names: Vec<&str> = two.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["W0", "W1"]);

    let prefixed = catalog
        .workshops
        .list(ListWorkshopsRequest {
            limit: Some(json!("3abc")),
        })
        .await
        .unwrap();
    assert_eq!(prefixed.len(), 3);

    let all = catalog
        .workshops
        .list(ListWorkshopsRequest::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 5);

    for bad in [json!("abc"), json!(0), json!(-3), json!(true)] {
        let err = catalog
            .workshops
            .list(ListWorkshopsRequest {
                limit: Some(bad.clone()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)), "{bad}");
    }
}

#[tokio::test]
async fn test_get_absent_and_malformed() {
    let catalog = common::in_memory().await;

    assert!(catalog.workshops.get(DANGLING).await.unwrap().is_none());

    let err = catalog.workshops.get("not-a-valid-id").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidIdentifier(_)));
}

#[tokio::test]
async fn test_expansion_failure_surfaces_stable_message() {
    let catalog = common::in_memory().await;
    let docker = catalog
        .notions
        .create(CreateNotionRequest::new("Docker"))
        .await
        .unwrap();
    let created = catalog
        .workshops
        .create(CreateWorkshopRequest::new(
            "DevOps 101",
            vec![docker.id.to_string()],
        ))
        .await
        .unwrap();

    sqlx::query("DROP TABLE notions")
        .execute(&catalog.pool)
        .await
        .unwrap();

    let err = catalog
        .workshops
        .get(created.id.as_str())
        .await
        .unwrap_err();
    match err {
        AppError::Persistence(msg) => assert_eq!(msg, "Failed to fetch workshop"),
        other => panic!("expected persistence error, got {other:?}"),
    }
}
