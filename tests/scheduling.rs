//! Integration tests for show scheduling and the overlap validator.

mod common;

use chrono::NaiveTime;

use cinema_booking::domain::DomainError;

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[tokio::test]
async fn show_is_scheduled_on_a_free_slot() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 5, 10).await;
    let movie = ctx.seed_movie("Inception", 148).await;

    let show = ctx
        .show_service
        .create_show(movie.id, screen.id, common::tomorrow(), at(18, 0), 250.0)
        .await
        .unwrap();
    assert!(show.is_active);
    assert_eq!(show.screen_id, screen.id);
}

#[tokio::test]
async fn overlapping_show_on_same_screen_is_rejected() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 5, 10).await;
    let movie = ctx.seed_movie("Inception", 150).await;

    ctx.show_service
        .create_show(movie.id, screen.id, common::tomorrow(), at(10, 0), 250.0)
        .await
        .unwrap();

    // 10:00 + 150min runs until 12:30; a 12:00 start collides
    let err = ctx
        .show_service
        .create_show(movie.id, screen.id, common::tomorrow(), at(12, 0), 250.0)
        .await
        .unwrap_err();
    match err {
        DomainError::ScheduleConflict { movie_title, ends, .. } => {
            assert_eq!(movie_title, "Inception");
            assert_eq!(ends, at(12, 30));
        }
        other => panic!("expected ScheduleConflict, got {:?}", other),
    }
}

#[tokio::test]
async fn back_to_back_shows_are_allowed() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 5, 10).await;
    let movie = ctx.seed_movie("Inception", 150).await;

    ctx.show_service
        .create_show(movie.id, screen.id, common::tomorrow(), at(10, 0), 250.0)
        .await
        .unwrap();

    // Starts exactly when the first one ends
    ctx.show_service
        .create_show(movie.id, screen.id, common::tomorrow(), at(12, 30), 250.0)
        .await
        .unwrap();
}

#[tokio::test]
async fn same_screen_different_date_never_conflicts() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 5, 10).await;
    let movie = ctx.seed_movie("Inception", 150).await;

    ctx.show_service
        .create_show(movie.id, screen.id, common::tomorrow(), at(10, 0), 250.0)
        .await
        .unwrap();
    ctx.show_service
        .create_show(
            movie.id,
            screen.id,
            common::tomorrow() + chrono::Duration::days(1),
            at(10, 0),
            250.0,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn other_screens_are_independent() {
    let ctx = common::setup().await;
    let screen1 = ctx.seed_screen("Screen 1", 5, 10).await;
    let screen2 = ctx.seed_screen("Screen 2", 5, 10).await;
    let movie = ctx.seed_movie("Inception", 150).await;

    ctx.show_service
        .create_show(movie.id, screen1.id, common::tomorrow(), at(10, 0), 250.0)
        .await
        .unwrap();
    ctx.show_service
        .create_show(movie.id, screen2.id, common::tomorrow(), at(10, 0), 250.0)
        .await
        .unwrap();
}

#[tokio::test]
async fn show_date_must_be_strictly_in_the_future() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 5, 10).await;
    let movie = ctx.seed_movie("Inception", 150).await;
    let today = chrono::Utc::now().date_naive();

    for date in [today, today - chrono::Duration::days(1)] {
        let err = ctx
            .show_service
            .create_show(movie.id, screen.id, date, at(10, 0), 250.0)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}

#[tokio::test]
async fn unreleased_movie_cannot_be_scheduled() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 5, 10).await;

    let mut movie = cinema_booking::domain::Movie::new("Avatar 4".to_string(), 180);
    movie.release_date = Some(common::tomorrow() + chrono::Duration::days(30));
    let movie = ctx.repos.movies().save(movie).await.unwrap();

    let err = ctx
        .show_service
        .create_show(movie.id, screen.id, common::tomorrow(), at(10, 0), 250.0)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    // On the release date itself it goes through
    ctx.show_service
        .create_show(
            movie.id,
            screen.id,
            movie.release_date.unwrap(),
            at(10, 0),
            250.0,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn ticket_price_must_be_positive() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 5, 10).await;
    let movie = ctx.seed_movie("Inception", 150).await;

    let err = ctx
        .show_service
        .create_show(movie.id, screen.id, common::tomorrow(), at(10, 0), 0.0)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn rescheduling_skips_the_show_itself() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 5, 10).await;
    let movie = ctx.seed_movie("Inception", 150).await;

    let show = ctx
        .show_service
        .create_show(movie.id, screen.id, common::tomorrow(), at(10, 0), 250.0)
        .await
        .unwrap();

    // Nudging inside its own old window is fine
    let updated = ctx
        .show_service
        .update_show(show.id, common::tomorrow(), at(10, 30), 275.0)
        .await
        .unwrap();
    assert_eq!(updated.start_time, at(10, 30));
    assert_eq!(updated.ticket_price, 275.0);
}

#[tokio::test]
async fn rescheduling_into_another_show_is_rejected() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 5, 10).await;
    let movie = ctx.seed_movie("Inception", 150).await;

    ctx.show_service
        .create_show(movie.id, screen.id, common::tomorrow(), at(10, 0), 250.0)
        .await
        .unwrap();
    let evening = ctx
        .show_service
        .create_show(movie.id, screen.id, common::tomorrow(), at(20, 0), 250.0)
        .await
        .unwrap();

    let err = ctx
        .show_service
        .update_show(evening.id, common::tomorrow(), at(11, 0), 250.0)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ScheduleConflict { .. }));
}

#[tokio::test]
async fn late_shows_are_clamped_at_midnight() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 5, 10).await;
    let movie = ctx.seed_movie("Inception", 150).await;

    // 23:00 + 150min would run past midnight; the window stops at 24:00
    ctx.show_service
        .create_show(movie.id, screen.id, common::tomorrow(), at(23, 0), 250.0)
        .await
        .unwrap();

    let err = ctx
        .show_service
        .create_show(movie.id, screen.id, common::tomorrow(), at(23, 30), 250.0)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::ScheduleConflict { .. }));
}

#[tokio::test]
async fn deleting_a_show_frees_its_slot() {
    let ctx = common::setup().await;
    let screen = ctx.seed_screen("Screen 1", 5, 10).await;
    let movie = ctx.seed_movie("Inception", 150).await;

    let show = ctx
        .show_service
        .create_show(movie.id, screen.id, common::tomorrow(), at(10, 0), 250.0)
        .await
        .unwrap();
    ctx.show_service.delete_show(show.id).await.unwrap();

    ctx.show_service
        .create_show(movie.id, screen.id, common::tomorrow(), at(10, 0), 250.0)
        .await
        .unwrap();

    let err = ctx.show_service.get_show(show.id).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}
