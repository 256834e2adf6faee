//! Fixtures shared by the logic scenarios.

pub use questline_core::ScriptedBackend;
use questline_core::{Objective, Platform, Quest, UserContext};

pub fn objective(id: &str, platform: Platform, points: i64) -> Objective {
    let description = format!("Use {platform} for task {id}");
    Objective {
        id: id.to_string(),
        platform,
        description,
        points,
        promotion: None,
        location: None,
        required: Some(true),
    }
}

/// Ride 30, food 50, pay 20.
pub fn sample_quest(quest_id: &str) -> Quest {
    Quest {
        quest_id: quest_id.to_string(),
        narrative: "Ride to the office, order lunch, settle up with GoPay.".to_string(),
        objectives: vec![
            objective("1", Platform::GoRide, 30),
            objective("2", Platform::GoFood, 50),
            objective("3", Platform::GoPay, 20),
        ],
        title: Some("Workday Warm-up".to_string()),
        difficulty: Some("easy".to_string()),
        duration: Some("1 day".to_string()),
        rewards: None,
    }
}

pub fn sample_context(food_treatment: &str) -> UserContext {
    UserContext {
        food_treatment: food_treatment.to_string(),
        ride_treatment: "RIDE10".to_string(),
        ride_prediction_place: "Stasiun Sudirman".to_string(),
        ..UserContext::default()
    }
}
