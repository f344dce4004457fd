//! Ticket service integration tests.
//!
//! Exercises ownership scoping, pagination, sorting, and patch semantics
//! over the in-memory store.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::Arc;

use ticketd_tickets::{
    NewTicket, TicketError, TicketPatch, TicketService, TicketStatus, TicketStore,
    stores::MemoryTicketStore,
};

const ALICE: i64 = 1;
const BOB: i64 = 2;

fn service() -> TicketService {
    TicketService::new(Arc::new(MemoryTicketStore::new()) as Arc<dyn TicketStore>)
}

fn draft(title: &str) -> NewTicket {
    NewTicket {
        title: title.to_string(),
        description: None,
        status: TicketStatus::Open,
    }
}

#[tokio::test]
async fn test_create_defaults_and_assigns_identity() {
    let service = service();
    let ticket = service
        .create(
            ALICE,
            NewTicket {
                title: "printer on fire".to_string(),
                description: Some("third floor".to_string()),
                status: TicketStatus::Open,
            },
        )
        .await
        .expect("create");

    assert_eq!(ticket.owner_id, ALICE);
    assert_eq!(ticket.status, TicketStatus::Open);
    assert!(ticket.id > 0);
}

#[tokio::test]
async fn test_create_rejects_blank_title() {
    let service = service();
    assert_eq!(
        service.create(ALICE, draft("")).await.unwrap_err(),
        TicketError::InvalidTitle
    );
    assert_eq!(
        service.create(ALICE, draft("   ")).await.unwrap_err(),
        TicketError::InvalidTitle
    );
}

#[tokio::test]
async fn test_pagination_window_and_total() {
    let service = service();
    for i in 0..5 {
        service.create(ALICE, draft(&format!("t{i}"))).await.unwrap();
    }
    // Another user's tickets never leak into the count.
    service.create(BOB, draft("bob's")).await.unwrap();

    let page = service.list(ALICE, 0, 2, "created_at", "desc").await.unwrap();
    assert_eq!(page.tickets.len(), 2);
    assert_eq!(page.total, 5);
    assert_eq!(page.skip, 0);
    assert_eq!(page.limit, 2);

    let rest = service.list(ALICE, 4, 100, "created_at", "desc").await.unwrap();
    assert_eq!(rest.tickets.len(), 1);
    assert_eq!(rest.total, 5);
}

#[tokio::test]
async fn test_sorting_by_title() {
    let service = service();
    for title in ["charlie", "alpha", "bravo"] {
        service.create(ALICE, draft(title)).await.unwrap();
    }

    let page = service.list(ALICE, 0, 10, "title", "asc").await.unwrap();
    let titles: Vec<&str> = page.tickets.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["alpha", "bravo", "charlie"]);

    let page = service.list(ALICE, 0, 10, "title", "desc").await.unwrap();
    let titles: Vec<&str> = page.tickets.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["charlie", "bravo", "alpha"]);
}

#[tokio::test]
async fn test_list_rejects_unknown_sort_params() {
    let service = service();
    assert!(matches!(
        service.list(ALICE, 0, 10, "bogus", "asc").await.unwrap_err(),
        TicketError::InvalidQuery(_)
    ));
    assert!(matches!(
        service
            .list(ALICE, 0, 10, "created_at", "sideways")
            .await
            .unwrap_err(),
        TicketError::InvalidQuery(_)
    ));
}

#[tokio::test]
async fn test_get_is_ownership_scoped() {
    let service = service();
    let ticket = service.create(ALICE, draft("mine")).await.unwrap();

    assert_eq!(service.get(ALICE, ticket.id).await.unwrap().id, ticket.id);
    // Foreign tickets read as absent, not forbidden.
    assert_eq!(
        service.get(BOB, ticket.id).await.unwrap_err(),
        TicketError::NotFound
    );
    assert_eq!(
        service.get(ALICE, 9999).await.unwrap_err(),
        TicketError::NotFound
    );
}

#[tokio::test]
async fn test_partial_update_leaves_absent_fields_alone() {
    let service = service();
    let ticket = service
        .create(
            ALICE,
            NewTicket {
                title: "original".to_string(),
                description: Some("details".to_string()),
                status: TicketStatus::Open,
            },
        )
        .await
        .unwrap();

    let updated = service
        .update(
            ALICE,
            ticket.id,
            TicketPatch {
                description: Some("new details".to_string()),
                ..TicketPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "original");
    assert_eq!(updated.description.as_deref(), Some("new details"));
    assert_eq!(updated.status, TicketStatus::Open);
    assert_eq!(updated.created_at, ticket.created_at);
}

#[tokio::test]
async fn test_update_rejects_blank_title_patch() {
    let service = service();
    let ticket = service.create(ALICE, draft("fine")).await.unwrap();

    let err = service
        .update(
            ALICE,
            ticket.id,
            TicketPatch {
                title: Some("  ".to_string()),
                ..TicketPatch::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, TicketError::InvalidTitle);
}

#[tokio::test]
async fn test_mutations_enforce_ownership() {
    let service = service();
    let ticket = service.create(ALICE, draft("mine")).await.unwrap();

    let patch = TicketPatch {
        title: Some("stolen".to_string()),
        ..TicketPatch::default()
    };
    assert_eq!(
        service.update(BOB, ticket.id, patch).await.unwrap_err(),
        TicketError::Forbidden
    );
    assert_eq!(
        service.close(BOB, ticket.id).await.unwrap_err(),
        TicketError::Forbidden
    );
    assert_eq!(
        service.delete(BOB, ticket.id).await.unwrap_err(),
        TicketError::Forbidden
    );

    // The ticket is untouched after all that.
    let unchanged = service.get(ALICE, ticket.id).await.unwrap();
    assert_eq!(unchanged.title, "mine");
    assert_eq!(unchanged.status, TicketStatus::Open);
}

#[tokio::test]
async fn test_close_forces_status_only() {
    let service = service();
    let ticket = service
        .create(
            ALICE,
            NewTicket {
                title: "to close".to_string(),
                description: Some("keep me".to_string()),
                status: TicketStatus::Open,
            },
        )
        .await
        .unwrap();

    let closed = service.close(ALICE, ticket.id).await.unwrap();
    assert_eq!(closed.status, TicketStatus::Closed);
    assert_eq!(closed.title, "to close");
    assert_eq!(closed.description.as_deref(), Some("keep me"));
}

#[tokio::test]
async fn test_delete_returns_last_state() {
    let service = service();
    let ticket = service.create(ALICE, draft("ephemeral")).await.unwrap();
    service.close(ALICE, ticket.id).await.unwrap();

    let deleted = service.delete(ALICE, ticket.id).await.unwrap();
    assert_eq!(deleted.id, ticket.id);
    assert_eq!(deleted.status, TicketStatus::Closed);

    assert_eq!(
        service.get(ALICE, ticket.id).await.unwrap_err(),
        TicketError::NotFound
    );
    assert_eq!(
        service.delete(ALICE, ticket.id).await.unwrap_err(),
        TicketError::NotFound
    );
}
