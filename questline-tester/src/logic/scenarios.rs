//! Deterministic quest-session scenarios over [`ScriptedBackend`].
//!
//! Every scenario takes the instant of its first completion; iterations shift
//! that instant by whole days so streak arithmetic is exercised across month
//! and year boundaries.

use anyhow::{Result, ensure};
use chrono::{DateTime, Duration, Utc};
use futures::executor::block_on;
use questline_core::{
    DEMO_USER_ID, QuestController, QuestError, QuestPhase, ServiceLine, UserContext, next_streak,
    progress_percent,
};

use super::scripted::{ScriptedBackend, sample_context, sample_quest};

/// Run the logic half of `key`. `None` when the scenario has no logic body.
pub fn run_logic(key: &str, start: DateTime<Utc>) -> Option<Result<()>> {
    let outcome = match key {
        "smoke" => smoke(start),
        "progress-rounding" => progress_rounding(),
        "completion-idempotent" => completion_idempotent(start),
        "streak-rules" => streak_rules(start),
        "regeneration-reset" => regeneration_reset(start),
        "completion-failure" => completion_failure(start),
        "generation-error" => generation_error(),
        "promo-fallback" => promo_fallback(),
        "context-shapes" => context_shapes(),
        _ => return None,
    };
    Some(outcome)
}

fn active_controller(backend: ScriptedBackend) -> Result<QuestController<ScriptedBackend>> {
    let mut controller = QuestController::new(backend);
    block_on(controller.generate_quest());
    ensure!(
        controller.session().phase() == QuestPhase::QuestActive,
        "quest should be active after generation, error: {:?}",
        controller.session().error
    );
    Ok(controller)
}

fn smoke(start: DateTime<Utc>) -> Result<()> {
    let backend = ScriptedBackend::default()
        .with_context(Ok(sample_context("20% off")))
        .with_quest(Ok(sample_quest("q-smoke")));
    let mut controller = QuestController::new(backend);

    block_on(controller.load_user_context());
    ensure!(
        controller.session().user_context.is_loaded(),
        "user context should load"
    );
    ensure!(controller.session().phase() == QuestPhase::NoQuest);

    block_on(controller.generate_quest());
    ensure!(controller.session().phase() == QuestPhase::QuestActive);

    let url = block_on(controller.handle_task_click("1", start));
    ensure!(
        url.as_deref() == Some("https://gojek.com/goride"),
        "expected GoRide url, got {url:?}"
    );
    let session = controller.session();
    ensure!(session.progress.points == 30, "points {}", session.progress.points);
    ensure!(session.progress.streak == 1, "streak {}", session.progress.streak);
    ensure!(session.progress_percent() == 33, "progress {}", session.progress_percent());
    ensure!(
        controller.backend().completion_calls()
            == vec![(DEMO_USER_ID.to_string(), "q-smoke".to_string())],
        "unexpected completion calls {:?}",
        controller.backend().completion_calls()
    );
    Ok(())
}

fn progress_rounding() -> Result<()> {
    let cases = [
        (0, 0, 0),
        (0, 3, 0),
        (1, 3, 33),
        (2, 3, 67),
        (3, 3, 100),
        (1, 8, 13),
        (1, 6, 17),
    ];
    for (done, total, expected) in cases {
        let got = progress_percent(done, total);
        ensure!(got == expected, "{done}/{total} gave {got}%, expected {expected}%");
    }
    Ok(())
}

fn completion_idempotent(start: DateTime<Utc>) -> Result<()> {
    let backend = ScriptedBackend::default().with_quest(Ok(sample_quest("q-dup")));
    let mut controller = active_controller(backend)?;

    let first = block_on(controller.handle_task_click("2", start));
    let second = block_on(controller.handle_task_click("2", start + Duration::minutes(5)));
    ensure!(first.is_some(), "first completion should open the platform");
    ensure!(second.is_none(), "second completion should be ignored");
    ensure!(controller.session().progress.points == 50);
    ensure!(
        controller.backend().completion_calls().len() == 1,
        "expected a single POST, saw {}",
        controller.backend().completion_calls().len()
    );
    Ok(())
}

fn streak_rules(start: DateTime<Utc>) -> Result<()> {
    let backend = ScriptedBackend::default().with_quest(Ok(sample_quest("q-streak")));
    let mut controller = active_controller(backend)?;

    block_on(controller.handle_task_click("1", start));
    ensure!(controller.session().progress.streak == 1, "first completion starts at 1");

    block_on(controller.handle_task_click("2", start + Duration::days(1)));
    ensure!(
        controller.session().progress.streak == 2,
        "next day should extend the streak, got {}",
        controller.session().progress.streak
    );

    block_on(controller.handle_task_click("3", start + Duration::days(4)));
    ensure!(
        controller.session().progress.streak == 1,
        "three-day gap should restart the streak, got {}",
        controller.session().progress.streak
    );

    let same_day = next_streak(4, Some(start), start + Duration::hours(23));
    ensure!(same_day == 4, "same-day completion should keep the streak");
    Ok(())
}

fn regeneration_reset(start: DateTime<Utc>) -> Result<()> {
    let backend = ScriptedBackend::default()
        .with_quest(Ok(sample_quest("q-first")))
        .with_quest(Ok(sample_quest("q-second")));
    let mut controller = active_controller(backend)?;
    block_on(controller.handle_task_click("1", start));
    block_on(controller.handle_task_click("2", start));
    ensure!(controller.session().progress.points == 80);

    block_on(controller.generate_quest());
    let session = controller.session();
    ensure!(
        session.quest.as_ref().map(|q| q.quest_id.as_str()) == Some("q-second"),
        "second quest should replace the first"
    );
    ensure!(session.progress.completed.is_empty(), "completions should reset");
    ensure!(session.progress.points == 0, "points should reset");
    ensure!(session.progress_percent() == 0);
    Ok(())
}

fn completion_failure(start: DateTime<Utc>) -> Result<()> {
    let backend = ScriptedBackend::default()
        .with_quest(Ok(sample_quest("q-fail")))
        .with_completion(Err(QuestError::status(500, None)));
    let mut controller = active_controller(backend)?;

    let url = block_on(controller.handle_task_click("1", start));
    let session = controller.session();
    ensure!(url.is_none(), "failed completion must not open a platform");
    ensure!(
        session.error.as_deref() == Some("Failed to complete task"),
        "error {:?}",
        session.error
    );
    ensure!(session.progress.points == 0);
    ensure!(session.progress.completed.is_empty());
    ensure!(session.progress.streak == 0);
    Ok(())
}

fn generation_error() -> Result<()> {
    let backend = ScriptedBackend::default()
        .with_quest(Err(QuestError::status(
            500,
            Some("Quest engine unavailable".to_string()),
        )))
        .with_quest(Err(QuestError::Network("connection refused".to_string())));
    let mut controller = QuestController::new(backend);

    block_on(controller.generate_quest());
    ensure!(
        controller.session().error.as_deref() == Some("Quest engine unavailable"),
        "server message should surface, got {:?}",
        controller.session().error
    );
    ensure!(!controller.session().loading, "loading must clear after failure");

    block_on(controller.generate_quest());
    ensure!(
        controller.session().error.as_deref() == Some("Failed to generate quest"),
        "network failures fall back to the generic message"
    );
    ensure!(controller.session().phase() == QuestPhase::NoQuest);
    Ok(())
}

fn promo_fallback() -> Result<()> {
    let none = sample_context("0");
    ensure!(none.promotion_label(ServiceLine::Food) == "No promo");
    let some = sample_context("20% off");
    ensure!(some.promotion_label(ServiceLine::Food) == "20% off");
    ensure!(some.promotion_label(ServiceLine::Car) == "No promo");
    Ok(())
}

fn context_shapes() -> Result<()> {
    let flat = UserContext::from_json(
        r#"{
            "food_treatment": 0,
            "ride_treatment": "RIDE10",
            "car_treatment": "0",
            "RIDE_PREDICTION_PLACE": "Stasiun Sudirman",
            "CAR_PREDICTION_PLACE": "null",
            "FOOD_PREDICTION_PLACE": "null"
        }"#,
    )?;
    let nested = UserContext::from_json(
        r#"{
            "customer_id": "000000006",
            "promotions": {"food": "0", "ride": "RIDE10", "car": "0"},
            "favorite_places": {"ride": "Stasiun Sudirman", "car": null, "food": null},
            "payment_preferences": {"rank_1": "GoPay", "rank_2": "Cash"},
            "completed_quests": 3,
            "quest_completion_rate": 75.0
        }"#,
    )?;
    for line in ServiceLine::ALL {
        ensure!(
            flat.promotion(line) == nested.promotion(line),
            "promotion mismatch for {line:?}"
        );
        ensure!(
            flat.favorite_place(line) == nested.favorite_place(line),
            "place mismatch for {line:?}"
        );
    }
    ensure!(nested.payment_preferences == vec!["GoPay", "Cash"]);
    ensure!(nested.completed_quests == Some(3));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::scenario::CATALOG;
    use chrono::TimeZone;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 31, 8, 30, 0).unwrap()
    }

    #[test]
    fn every_logic_scenario_in_catalog_passes() {
        for info in CATALOG.iter().filter(|info| info.support.logic) {
            let outcome = run_logic(info.key, start())
                .unwrap_or_else(|| panic!("{} has no logic body", info.key));
            assert!(outcome.is_ok(), "{} failed: {:?}", info.key, outcome.err());
        }
    }

    #[test]
    fn live_only_scenarios_have_no_logic_body() {
        assert!(run_logic("live-journey", start()).is_none());
        assert!(run_logic("unknown", start()).is_none());
    }
}
