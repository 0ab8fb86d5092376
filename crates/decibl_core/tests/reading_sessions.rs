use decibl_core::fixture::{reading_session_fixtures, seed_reading_sessions};
use decibl_core::{
    clean_text, EntityKind, LatencyProfile, NewReadingSession, PlaybackSimulator, PlaybackSpeed,
    PlaybackState, ReadingSessionPatch, ReadingSessionService, ServiceError, VoiceId,
};

fn seeded_service() -> ReadingSessionService {
    ReadingSessionService::new(seed_reading_sessions().unwrap(), LatencyProfile::zero())
}

#[tokio::test]
async fn seeded_sessions_list_newest_first() {
    let service = seeded_service();
    let sessions = service.get_all().await;
    let ids = sessions.iter().map(|session| session.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![3, 2, 1]);
    for pair in sessions.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[tokio::test]
async fn create_uses_next_id_and_fresh_timestamp() {
    let service = seeded_service();
    let oldest_seed = reading_session_fixtures()
        .unwrap()
        .into_iter()
        .map(|session| session.created_at)
        .max()
        .unwrap();

    let created = service
        .create(NewReadingSession {
            text: "plain".to_string(),
            cleaned_text: "plain".to_string(),
            voice: VoiceId::Pierre,
            speed: PlaybackSpeed::Double,
            progress: 0.0,
        })
        .await;
    assert_eq!(created.id, 4);
    assert!(created.created_at > oldest_seed);
    assert_eq!(service.get_all().await[0].id, 4);
}

#[tokio::test]
async fn start_reading_cleans_text() {
    let service = seeded_service();
    let session = service
        .start_reading(
            "# Title\n\n*bold* [1] text",
            VoiceId::James,
            PlaybackSpeed::OneAndQuarter,
        )
        .await
        .unwrap();

    assert_eq!(session.cleaned_text, "Title\n\nbold  text");
    assert_eq!(session.text, "# Title\n\n*bold* [1] text");
    assert_eq!(session.voice, VoiceId::James);
    assert_eq!(session.speed, PlaybackSpeed::OneAndQuarter);
    assert_eq!(session.progress, 0.0);
}

#[tokio::test]
async fn start_reading_rejects_blank_text() {
    let service = seeded_service();
    let err = service
        .start_reading("  ## [1] ", VoiceId::Sarah, PlaybackSpeed::Normal)
        .await
        .unwrap_err();
    assert_eq!(err, ServiceError::EmptyText);
    assert_eq!(service.get_all().await.len(), 3);
}

#[tokio::test]
async fn save_progress_clamps_into_range() {
    let service = seeded_service();
    assert_eq!(service.save_progress(2, 150.0).await.unwrap().progress, 100.0);
    assert_eq!(service.save_progress(2, -3.0).await.unwrap().progress, 0.0);
    assert_eq!(service.save_progress("2", 61.5).await.unwrap().progress, 61.5);

    let err = service.save_progress(9, 10.0).await.unwrap_err();
    assert_eq!(
        err,
        ServiceError::NotFound {
            entity: EntityKind::ReadingSession,
            id: "9".to_string(),
        }
    );
}

#[tokio::test]
async fn generic_writes_keep_progress_in_range() {
    let service = seeded_service();

    let updated = service
        .update(
            1,
            ReadingSessionPatch {
                progress: Some(250.0),
                ..ReadingSessionPatch::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.progress, 100.0);
    assert_eq!(service.get_by_id(1).await.unwrap().progress, 100.0);

    let created = service
        .create(NewReadingSession {
            text: "plain".to_string(),
            cleaned_text: "plain".to_string(),
            progress: f64::NAN,
            ..NewReadingSession::default()
        })
        .await;
    assert_eq!(created.progress, 0.0);
    assert_eq!(service.get_by_id(created.id).await.unwrap().progress, 0.0);

    let negative = service
        .create(NewReadingSession {
            progress: -12.0,
            ..NewReadingSession::default()
        })
        .await;
    assert_eq!(negative.progress, 0.0);
}

#[tokio::test]
async fn update_then_get_reflects_patch() {
    let service = seeded_service();
    let before = service.get_by_id(1).await.unwrap();
    service
        .update(
            1,
            ReadingSessionPatch {
                voice: Some(VoiceId::Maria),
                speed: Some(PlaybackSpeed::Half),
                ..ReadingSessionPatch::default()
            },
        )
        .await
        .unwrap();

    let after = service.get_by_id(1).await.unwrap();
    assert_eq!(after.voice, VoiceId::Maria);
    assert_eq!(after.speed, PlaybackSpeed::Half);
    assert_eq!(after.text, before.text);
    assert_eq!(after.id, before.id);
    assert_eq!(after.created_at, before.created_at);
}

#[tokio::test]
async fn delete_then_get_fails() {
    let service = seeded_service();
    service.delete("3").await.unwrap();
    assert!(matches!(
        service.get_by_id(3).await,
        Err(ServiceError::NotFound { .. })
    ));
}

#[tokio::test]
async fn playback_progress_can_be_saved_back() {
    let service = seeded_service();
    let session = service.get_by_id(2).await.unwrap();

    let mut playback = PlaybackSimulator::at(session.progress);
    playback.play();
    playback.tick();
    playback.skip_forward();
    assert_eq!(playback.state(), PlaybackState::Playing);

    let saved = service
        .save_progress(session.id, playback.progress())
        .await
        .unwrap();
    assert_eq!(saved.progress, 57.5);
}

#[test]
fn fixture_cleaned_text_matches_cleanup_rules() {
    for session in reading_session_fixtures().unwrap() {
        assert_eq!(clean_text(&session.text), session.cleaned_text);
    }
}
