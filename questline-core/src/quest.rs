use crate::platform::Platform;
use serde::{Deserialize, Serialize};

/// A single completable task inside a quest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub platform: Platform,
    pub description: String,
    #[serde(deserialize_with = "lenient_points")]
    pub points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QuestRewards {
    #[serde(default, deserialize_with = "lenient_points")]
    pub xp: i64,
    #[serde(default)]
    pub vouchers: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl QuestRewards {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xp == 0 && self.vouchers.is_empty() && self.achievements.is_empty()
    }
}

/// Server-generated bundle of objectives. Replaced wholesale on regeneration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    #[serde(deserialize_with = "id_string")]
    pub quest_id: String,
    pub narrative: String,
    pub objectives: Vec<Objective>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewards: Option<QuestRewards>,
}

impl Quest {
    /// Parse a quest payload from the generation endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or mistyped.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn objective(&self, id: &str) -> Option<&Objective> {
        self.objectives.iter().find(|objective| objective.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.objective(id).is_some()
    }

    #[must_use]
    pub fn total_points(&self) -> i64 {
        self.objectives.iter().map(|objective| objective.points).sum()
    }
}

/// Generated ids show up as either strings or integers.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, found {other}"
        ))),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn whole_points(value: f64) -> Option<i64> {
    value.is_finite().then(|| value.round() as i64)
}

/// Point values arrive as integers, floats (`50.0`) or numeric strings.
fn lenient_points<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(whole_points)),
        serde_json::Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_points))
        }
        _ => None,
    };
    parsed.ok_or_else(|| serde::de::Error::custom(format!("expected point value, found {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "quest_id": "3f1c2b2e-3c55-4a38-9f1b-0f3b9a1d2c11",
        "title": "Lunch Run",
        "narrative": "Ride to the office, then treat yourself.",
        "difficulty": "easy",
        "objectives": [
            {"id": "obj_1", "platform": "GoRide", "description": "Ride to Blok M", "points": 50, "required": true, "location": "Blok M"},
            {"id": 2, "platform": "GoFood", "description": "Order satay", "points": 30, "promotion": "FOODIE10"}
        ],
        "rewards": {"xp": 120, "vouchers": ["GOPAY5"], "achievements": ["Early Bird"]},
        "game_rules": ["Finish before midnight"]
    }"#;

    #[test]
    fn parses_generated_quest_with_extras() {
        let quest = Quest::from_json(SAMPLE).expect("quest");
        assert_eq!(quest.objectives.len(), 2);
        assert_eq!(quest.title.as_deref(), Some("Lunch Run"));
        assert_eq!(quest.objectives[1].id, "2");
        assert_eq!(quest.objectives[1].platform, Platform::GoFood);
        assert_eq!(quest.objectives[0].location.as_deref(), Some("Blok M"));
        assert_eq!(quest.total_points(), 80);
        let rewards = quest.rewards.expect("rewards");
        assert_eq!(rewards.xp, 120);
        assert!(!rewards.is_empty());
    }

    #[test]
    fn objective_lookup_by_id() {
        let quest = Quest::from_json(SAMPLE).expect("quest");
        assert!(quest.contains("obj_1"));
        assert!(!quest.contains("obj_9"));
        assert_eq!(
            quest.objective("2").map(|o| o.description.as_str()),
            Some("Order satay")
        );
    }

    #[test]
    fn missing_objectives_is_an_error() {
        let err = Quest::from_json(r#"{"quest_id": "q", "narrative": "n"}"#)
            .expect_err("objectives are required");
        assert!(err.to_string().contains("objectives"));
    }

    #[test]
    fn fractional_and_quoted_points_are_accepted() {
        let json = r#"{
            "quest_id": "q",
            "narrative": "n",
            "objectives": [
                {"id": "a", "platform": "GoRide", "description": "d", "points": 50.0},
                {"id": "b", "platform": "GoPay", "description": "d", "points": "20"}
            ],
            "rewards": {"xp": 99.6}
        }"#;
        let quest = Quest::from_json(json).expect("quest");
        assert_eq!(quest.objectives[0].points, 50);
        assert_eq!(quest.objectives[1].points, 20);
        assert_eq!(quest.total_points(), 70);
        assert_eq!(quest.rewards.expect("rewards").xp, 100);
    }

    #[test]
    fn non_numeric_points_are_rejected() {
        let json = r#"{"quest_id": "q", "narrative": "n", "objectives": [
            {"id": "a", "platform": "GoRide", "description": "d", "points": "lots"}
        ]}"#;
        assert!(Quest::from_json(json).is_err());
    }

    #[test]
    fn boolean_ids_are_rejected() {
        let json = r#"{"quest_id": true, "narrative": "n", "objectives": []}"#;
        assert!(Quest::from_json(json).is_err());
    }
}
