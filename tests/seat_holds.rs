//! Integration tests for seat holds: blocking, releasing and the
//! races between competing requests.

mod common;

use std::sync::Arc;

use chrono::{Duration, Utc};

use cinema_booking::application::SeatService;
use cinema_booking::domain::{DomainError, SeatStatus};

#[tokio::test]
async fn block_seats_places_a_timed_hold() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 5, 10).await;
    let user = ctx.seed_user("Alice", "alice@example.com").await;
    let ids = ctx.seat_ids(screen.id, 3).await;

    let before = Utc::now();
    let seats = ctx
        .seat_service
        .block_seats(screen.id, &ids, user.id)
        .await
        .unwrap();

    assert_eq!(seats.len(), 3);
    for seat in &seats {
        assert_eq!(seat.status, SeatStatus::Blocked);
        assert_eq!(seat.held_by_user_id, Some(user.id));
        let expires = seat.hold_expires_at.unwrap();
        assert!(expires >= before + Duration::seconds(common::HOLD_TTL_SECS as i64));
    }
}

#[tokio::test]
async fn concurrent_block_of_same_seats_has_one_winner() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 5, 10).await;
    let alice = ctx.seed_user("Alice", "alice@example.com").await;
    let bob = ctx.seed_user("Bob", "bob@example.com").await;
    let ids = ctx.seat_ids(screen.id, 2).await;

    let service = Arc::new(SeatService::new(
        ctx.repos.clone(),
        ctx.event_bus.clone(),
        common::HOLD_TTL_SECS,
        common::MAX_SEATS,
    ));

    let (a, b) = {
        let s1 = service.clone();
        let s2 = service.clone();
        let ids1 = ids.clone();
        let ids2 = ids.clone();
        let t1 = tokio::spawn(async move { s1.block_seats(screen.id, &ids1, alice.id).await });
        let t2 = tokio::spawn(async move { s2.block_seats(screen.id, &ids2, bob.id).await });
        (t1.await.unwrap(), t2.await.unwrap())
    };

    assert_eq!(
        a.is_ok() as u8 + b.is_ok() as u8,
        1,
        "exactly one hold must win"
    );
    let loser = if a.is_ok() { b } else { a };
    assert!(matches!(
        loser.unwrap_err(),
        DomainError::SeatUnavailable { .. }
    ));

    // Both seats belong to the single winner
    for seat in ctx.repos.seats().find_by_ids(&ids).await.unwrap() {
        assert_eq!(seat.status, SeatStatus::Blocked);
    }
}

#[tokio::test]
async fn blocking_a_held_seat_fails_for_everyone_else() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 3, 4).await;
    let alice = ctx.seed_user("Alice", "alice@example.com").await;
    let bob = ctx.seed_user("Bob", "bob@example.com").await;
    let ids = ctx.seat_ids(screen.id, 2).await;

    ctx.seat_service
        .block_seats(screen.id, &ids, alice.id)
        .await
        .unwrap();

    // Bob asks for a batch that includes one of Alice's seats
    let all = ctx.seat_ids(screen.id, 3).await;
    let err = ctx
        .seat_service
        .block_seats(screen.id, &all, bob.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::SeatUnavailable { .. }));

    // The free seat of Bob's batch was not touched
    let third = ctx.repos.seats().find_by_id(all[2]).await.unwrap().unwrap();
    assert_eq!(third.status, SeatStatus::Available);
}

#[tokio::test]
async fn expired_hold_is_reclaimable_by_another_user() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 3, 4).await;
    let alice = ctx.seed_user("Alice", "alice@example.com").await;
    let bob = ctx.seed_user("Bob", "bob@example.com").await;
    let ids = ctx.seat_ids(screen.id, 2).await;

    // Alice's hold lapsed a minute ago
    let now = Utc::now();
    ctx.repos
        .seats()
        .try_block(&ids, alice.id, now - Duration::seconds(60), now)
        .await
        .unwrap();

    let seats = ctx
        .seat_service
        .block_seats(screen.id, &ids, bob.id)
        .await
        .unwrap();
    for seat in seats {
        assert_eq!(seat.held_by_user_id, Some(bob.id));
    }
}

#[tokio::test]
async fn batch_size_limits_are_enforced() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 2, 10).await;
    let user = ctx.seed_user("Alice", "alice@example.com").await;

    let err = ctx
        .seat_service
        .block_seats(screen.id, &[], user.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    let too_many = ctx.seat_ids(screen.id, common::MAX_SEATS + 1).await;
    let err = ctx
        .seat_service
        .block_seats(screen.id, &too_many, user.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn batch_cap_counts_distinct_ids_only() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 2, 10).await;
    let user = ctx.seed_user("Alice", "alice@example.com").await;

    // Six distinct seats listed seven times still fit the cap
    let ids = ctx.seat_ids(screen.id, common::MAX_SEATS).await;
    let mut padded = ids.clone();
    padded.push(ids[0]);

    let seats = ctx
        .seat_service
        .block_seats(screen.id, &padded, user.id)
        .await
        .unwrap();
    assert_eq!(seats.len(), common::MAX_SEATS);
}

#[tokio::test]
async fn seat_from_another_screen_is_rejected() {
    let ctx = common::setup().await;
    let screen1 = ctx.seed_screen("Screen 1", 2, 4).await;
    let screen2 = ctx.seed_screen("Screen 2", 2, 4).await;
    let user = ctx.seed_user("Alice", "alice@example.com").await;

    let mut ids = ctx.seat_ids(screen1.id, 1).await;
    ids.extend(ctx.seat_ids(screen2.id, 1).await);

    let err = ctx
        .seat_service
        .block_seats(screen1.id, &ids, user.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::WrongScreen { .. }));
}

#[tokio::test]
async fn unblock_releases_holds_and_is_idempotent() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 3, 4).await;
    let user = ctx.seed_user("Alice", "alice@example.com").await;
    let ids = ctx.seat_ids(screen.id, 2).await;

    ctx.seat_service
        .block_seats(screen.id, &ids, user.id)
        .await
        .unwrap();

    let freed = ctx
        .seat_service
        .unblock_seats(screen.id, &ids)
        .await
        .unwrap();
    assert_eq!(freed.len(), 2);
    for seat in &freed {
        assert_eq!(seat.status, SeatStatus::Available);
        assert!(seat.held_by_user_id.is_none());
        assert!(seat.hold_expires_at.is_none());
    }

    // Repeating the release finds nothing blocked and stays quiet
    let freed_again = ctx
        .seat_service
        .unblock_seats(screen.id, &ids)
        .await
        .unwrap();
    assert!(freed_again.is_empty());
}

#[tokio::test]
async fn seat_map_presents_lapsed_holds_as_available() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 2, 3).await;
    let user = ctx.seed_user("Alice", "alice@example.com").await;
    let ids = ctx.seat_ids(screen.id, 2).await;

    let now = Utc::now();
    ctx.repos
        .seats()
        .try_block(&ids, user.id, now - Duration::seconds(1), now)
        .await
        .unwrap();

    let seats = ctx.seat_service.get_seats_for_screen(screen.id).await.unwrap();
    for seat in seats.iter().filter(|s| ids.contains(&s.id)) {
        assert_eq!(seat.status, SeatStatus::Available);
        assert!(seat.held_by_user_id.is_none());
    }

    // The map is a view only, the stored rows still carry the hold
    let stored = ctx.repos.seats().find_by_id(ids[0]).await.unwrap().unwrap();
    assert_eq!(stored.status, SeatStatus::Blocked);
}

#[tokio::test]
async fn unknown_screen_and_user_are_not_found() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 2, 3).await;
    let ids = ctx.seat_ids(screen.id, 1).await;

    let err = ctx.seat_service.get_seats_for_screen(999).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "Screen", .. }));

    let err = ctx
        .seat_service
        .block_seats(screen.id, &ids, 999)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { entity: "User", .. }));
}
