use chrono::{DateTime, Duration, TimeZone, Utc};
use futures::executor::block_on;
use questline_core::{
    ContextSlot, Quest, QuestController, QuestError, QuestPhase, ScriptedBackend, ServiceLine,
    UserContext,
};

const QUEST_JSON: &str = r#"{
    "quest_id": "q-100",
    "narrative": "From Blok M to lunch at Senayan.",
    "objectives": [
        {"id": "o1", "platform": "GoRide", "description": "Ride to Blok M", "points": 50},
        {"id": "o2", "platform": "GoFood", "description": "Order satay", "points": 30, "promotion": "FOODIE10"},
        {"id": "o3", "platform": "GoSend", "description": "Send a package", "points": 20}
    ]
}"#;

fn scripted(quests: Vec<Result<Quest, QuestError>>) -> ScriptedBackend {
    quests
        .into_iter()
        .fold(ScriptedBackend::default(), ScriptedBackend::with_quest)
}

fn quest() -> Quest {
    Quest::from_json(QUEST_JSON).expect("fixture quest")
}

fn morning(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, day, 8, 0, 0)
        .single()
        .expect("timestamp")
}

#[test]
fn full_journey_accumulates_points_and_progress() {
    let mut controller = QuestController::new(scripted(vec![Ok(quest())]));
    block_on(controller.generate_quest());
    assert_eq!(controller.session().phase(), QuestPhase::QuestActive);

    let url = block_on(controller.handle_task_click("o1", morning(1)));
    assert_eq!(url.as_deref(), Some("https://gojek.com/goride"));
    let url = block_on(controller.handle_task_click("o3", morning(1)));
    assert_eq!(url.as_deref(), Some("https://gojek.com"));

    let session = controller.session();
    assert_eq!(session.progress.points, 70);
    assert_eq!(session.progress_percent(), 67);
    assert_eq!(session.progress.streak, 1);

    assert_eq!(
        controller.backend().completion_calls(),
        [
            ("000000006".to_string(), "q-100".to_string()),
            ("000000006".to_string(), "q-100".to_string()),
        ]
    );
}

#[test]
fn repeated_click_does_not_call_backend_again() {
    let mut controller = QuestController::new(scripted(vec![Ok(quest())]));
    block_on(controller.generate_quest());
    block_on(controller.handle_task_click("o2", morning(1)));
    let again = block_on(controller.handle_task_click("o2", morning(2)));
    assert_eq!(again, None);
    assert_eq!(controller.session().progress.points, 30);
    assert_eq!(controller.backend().completion_calls().len(), 1);
}

#[test]
fn server_error_on_completion_leaves_progress_untouched() {
    let backend = scripted(vec![Ok(quest())])
        .with_completion(Ok(()))
        .with_completion(Err(QuestError::status(500, None)));
    let mut controller = QuestController::new(backend);
    block_on(controller.generate_quest());
    block_on(controller.handle_task_click("o1", morning(1)));

    let before = controller.session().progress.clone();
    let url = block_on(controller.handle_task_click("o2", morning(2)));
    assert_eq!(url, None);
    assert_eq!(controller.session().progress, before);
    assert_eq!(
        controller.session().error.as_deref(),
        Some("Failed to complete task")
    );
}

#[test]
fn streak_follows_calendar_gaps() {
    let mut controller = QuestController::new(scripted(vec![Ok(quest())]));
    block_on(controller.generate_quest());

    block_on(controller.handle_task_click("o1", morning(1)));
    assert_eq!(controller.session().progress.streak, 1);
    block_on(controller.handle_task_click("o2", morning(2)));
    assert_eq!(controller.session().progress.streak, 2);
    block_on(controller.handle_task_click("o3", morning(2) + Duration::days(3)));
    assert_eq!(controller.session().progress.streak, 1);
}

#[test]
fn regenerating_resets_points_and_completion() {
    let mut second = quest();
    second.quest_id = "q-200".into();
    let mut controller = QuestController::new(scripted(vec![
        Ok(quest()),
        Ok(second),
    ]));
    block_on(controller.generate_quest());
    block_on(controller.handle_task_click("o1", morning(1)));
    block_on(controller.handle_task_click("o2", morning(1)));
    assert_eq!(controller.session().progress.points, 80);

    block_on(controller.generate_quest());
    let session = controller.session();
    assert!(session.progress.completed.is_empty());
    assert_eq!(session.progress.points, 0);
    assert_eq!(session.progress_percent(), 0);
    assert_eq!(
        session.quest.as_ref().map(|q| q.quest_id.as_str()),
        Some("q-200")
    );
}

#[test]
fn generation_error_keeps_no_quest_and_reports_server_text() {
    let mut controller = QuestController::new(scripted(vec![Err(
        QuestError::status(500, Some("Failed to generate quest".into())),
    )]));
    block_on(controller.generate_quest());
    let session = controller.session();
    assert_eq!(session.phase(), QuestPhase::NoQuest);
    assert_eq!(session.error.as_deref(), Some("Failed to generate quest"));
}

#[test]
fn context_load_populates_slot() {
    let backend = ScriptedBackend::default().with_context(Ok(UserContext {
        food_treatment: "20% off".into(),
        ..UserContext::default()
    }));
    let mut controller = QuestController::for_user(backend, "000000042");
    assert_eq!(controller.user_id(), "000000042");
    block_on(controller.load_user_context());
    let session = controller.into_session();
    let ContextSlot::Loaded(ctx) = session.user_context else {
        panic!("context should be loaded");
    };
    assert_eq!(ctx.promotion_label(ServiceLine::Food), "20% off");
    assert_eq!(ctx.promotion_label(ServiceLine::Ride), "No promo");
}

#[test]
fn empty_quest_reports_zero_progress() {
    let empty = Quest::from_json(r#"{"quest_id":"q0","narrative":"","objectives":[]}"#)
        .expect("empty quest");
    let mut controller = QuestController::new(scripted(vec![Ok(empty)]));
    block_on(controller.generate_quest());
    assert_eq!(controller.session().progress_percent(), 0);
    assert!(!controller.session().quest_finished());
}
