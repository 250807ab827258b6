//! Integration tests for hold expiry and past-show cleanup.

mod common;

use chrono::{Duration, Utc};

use cinema_booking::application::start_expiry_sweeper;
use cinema_booking::domain::SeatStatus;
use cinema_booking::shared::shutdown::ShutdownSignal;

#[tokio::test]
async fn expired_holds_are_found_and_released() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 3, 4).await;
    let alice = ctx.seed_user("Alice", "alice@example.com").await;
    let bob = ctx.seed_user("Bob", "bob@example.com").await;

    let now = Utc::now();
    let expired_ids = ctx.seat_ids(screen.id, 2).await;
    ctx.repos
        .seats()
        .try_block(&expired_ids, alice.id, now - Duration::seconds(10), now)
        .await
        .unwrap();

    // Bob's hold is still live and must survive the sweep
    let live_ids: Vec<i64> = ctx.seat_ids(screen.id, 3).await[2..].to_vec();
    ctx.repos
        .seats()
        .try_block(&live_ids, bob.id, now + Duration::seconds(300), now)
        .await
        .unwrap();

    let expired = ctx.repos.seats().find_expired_holds(Utc::now()).await.unwrap();
    let mut found: Vec<i64> = expired.iter().map(|s| s.id).collect();
    found.sort_unstable();
    let mut wanted = expired_ids.clone();
    wanted.sort_unstable();
    assert_eq!(found, wanted);

    let freed = ctx.repos.seats().release_holds(&found).await.unwrap();
    assert_eq!(freed.len(), 2);

    for id in &expired_ids {
        let seat = ctx.repos.seats().find_by_id(*id).await.unwrap().unwrap();
        assert_eq!(seat.status, SeatStatus::Available);
        assert!(seat.hold_expires_at.is_none());
    }
    let live = ctx.repos.seats().find_by_id(live_ids[0]).await.unwrap().unwrap();
    assert_eq!(live.status, SeatStatus::Blocked);
}

#[tokio::test]
async fn past_shows_are_deactivated() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 3, 4).await;
    let movie = ctx.seed_movie("Inception", 150).await;
    let yesterday = Utc::now().date_naive() - Duration::days(1);

    let past = ctx
        .seed_show(movie.id, screen.id, yesterday, (18, 0), 250.0)
        .await;
    let upcoming = ctx
        .seed_show(movie.id, screen.id, common::tomorrow(), (18, 0), 250.0)
        .await;

    let today = Utc::now().date_naive();
    let stale = ctx.repos.shows().find_active_before(today).await.unwrap();
    assert_eq!(stale.len(), 1);
    assert_eq!(stale[0].id, past.id);

    let count = ctx.repos.shows().set_inactive(&[past.id]).await.unwrap();
    assert_eq!(count, 1);

    let reloaded = ctx.repos.shows().find_by_id(past.id).await.unwrap().unwrap();
    assert!(!reloaded.is_active);
    let kept = ctx.repos.shows().find_by_id(upcoming.id).await.unwrap().unwrap();
    assert!(kept.is_active);
}

#[tokio::test]
async fn sweeper_task_reclaims_lapsed_holds() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 2, 3).await;
    let user = ctx.seed_user("Alice", "alice@example.com").await;
    let ids = ctx.seat_ids(screen.id, 2).await;

    let now = Utc::now();
    ctx.repos
        .seats()
        .try_block(&ids, user.id, now - Duration::seconds(5), now)
        .await
        .unwrap();

    let shutdown = ShutdownSignal::new();
    start_expiry_sweeper(ctx.repos.clone(), ctx.event_bus.clone(), shutdown.clone(), 1);

    // Give the task a couple of ticks
    let deadline = tokio::time::Instant::now() + tokio::time::Duration::from_secs(5);
    loop {
        let seat = ctx.repos.seats().find_by_id(ids[0]).await.unwrap().unwrap();
        if seat.status == SeatStatus::Available {
            break;
        }
        if tokio::time::Instant::now() > deadline {
            panic!("sweeper did not release the expired hold in time");
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
    }

    shutdown.trigger();
}
