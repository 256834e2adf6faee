//! Per-customer promotion and destination context.
//!
//! The context drives the "perks" section and the voucher shown on task
//! cards. The backend has served two shapes over time: a flat record keyed by
//! the CSV column names and a nested record grouped by concern. Both decode
//! into the same [`UserContext`].

use crate::constants::{NO_PREDICTION, NO_PROMO_LABEL, NO_TREATMENT};
use crate::platform::{Platform, ServiceLine};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawUserContext")]
pub struct UserContext {
    pub food_treatment: String,
    pub ride_treatment: String,
    pub car_treatment: String,
    #[serde(rename = "RIDE_PREDICTION_PLACE")]
    pub ride_prediction_place: String,
    #[serde(rename = "CAR_PREDICTION_PLACE")]
    pub car_prediction_place: String,
    #[serde(rename = "FOOD_PREDICTION_PLACE")]
    pub food_prediction_place: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payment_preferences: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_quests: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quest_completion_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_quest_date: Option<String>,
}

impl Default for UserContext {
    fn default() -> Self {
        Self {
            food_treatment: NO_TREATMENT.to_string(),
            ride_treatment: NO_TREATMENT.to_string(),
            car_treatment: NO_TREATMENT.to_string(),
            ride_prediction_place: NO_PREDICTION.to_string(),
            car_prediction_place: NO_PREDICTION.to_string(),
            food_prediction_place: NO_PREDICTION.to_string(),
            customer_id: None,
            payment_preferences: Vec::new(),
            completed_quests: None,
            quest_completion_rate: None,
            last_quest_date: None,
        }
    }
}

impl UserContext {
    /// Parse a backend payload in either the flat or the nested shape.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn treatment(&self, line: ServiceLine) -> &str {
        match line {
            ServiceLine::Food => &self.food_treatment,
            ServiceLine::Ride => &self.ride_treatment,
            ServiceLine::Car => &self.car_treatment,
        }
    }

    /// Active promotion for a service line, if any.
    #[must_use]
    pub fn promotion(&self, line: ServiceLine) -> Option<&str> {
        let value = self.treatment(line);
        (value != NO_TREATMENT).then_some(value)
    }

    #[must_use]
    pub fn promotion_label(&self, line: ServiceLine) -> &str {
        self.promotion(line).unwrap_or(NO_PROMO_LABEL)
    }

    /// Predicted frequent destination (or restaurant) for a service line.
    #[must_use]
    pub fn favorite_place(&self, line: ServiceLine) -> Option<&str> {
        let value = match line {
            ServiceLine::Food => &self.food_prediction_place,
            ServiceLine::Ride => &self.ride_prediction_place,
            ServiceLine::Car => &self.car_prediction_place,
        };
        (value != NO_PREDICTION).then_some(value.as_str())
    }

    /// Voucher matching an objective's platform. GoPay and unknown platforms
    /// never carry one.
    #[must_use]
    pub fn voucher_for(&self, platform: &Platform) -> Option<&str> {
        platform
            .service_line()
            .and_then(|line| self.promotion(line))
    }
}

/// Whether the user context has arrived yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContextSlot {
    #[default]
    Absent,
    Loaded(UserContext),
}

impl ContextSlot {
    #[must_use]
    pub const fn get(&self) -> Option<&UserContext> {
        match self {
            Self::Absent => None,
            Self::Loaded(ctx) => Some(ctx),
        }
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Voucher for `platform`, or `None` while the context is absent.
    #[must_use]
    pub fn voucher_for(&self, platform: &Platform) -> Option<&str> {
        self.get().and_then(|ctx| ctx.voucher_for(platform))
    }
}

#[derive(Debug, Default, Deserialize)]
struct ServiceTriple {
    #[serde(default, deserialize_with = "lenient_string")]
    food: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    ride: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    car: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PaymentRanks {
    #[serde(default, deserialize_with = "lenient_string")]
    rank_1: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    rank_2: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    rank_3: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawUserContext {
    #[serde(default, deserialize_with = "lenient_string")]
    food_treatment: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    ride_treatment: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    car_treatment: Option<String>,
    #[serde(default, rename = "RIDE_PREDICTION_PLACE", deserialize_with = "lenient_string")]
    ride_prediction_place: Option<String>,
    #[serde(default, rename = "CAR_PREDICTION_PLACE", deserialize_with = "lenient_string")]
    car_prediction_place: Option<String>,
    #[serde(default, rename = "FOOD_PREDICTION_PLACE", deserialize_with = "lenient_string")]
    food_prediction_place: Option<String>,
    #[serde(default)]
    promotions: Option<ServiceTriple>,
    #[serde(default)]
    favorite_places: Option<ServiceTriple>,
    #[serde(default, deserialize_with = "lenient_string")]
    customer_id: Option<String>,
    #[serde(default)]
    payment_preferences: Option<PaymentRanks>,
    #[serde(default)]
    completed_quests: Option<u32>,
    #[serde(default)]
    quest_completion_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    last_quest_date: Option<String>,
}

impl From<RawUserContext> for UserContext {
    fn from(raw: RawUserContext) -> Self {
        let promotions = raw.promotions.unwrap_or_default();
        let places = raw.favorite_places.unwrap_or_default();
        let pick = |flat: Option<String>, nested: Option<String>, sentinel: &str| {
            flat.or(nested).unwrap_or_else(|| sentinel.to_string())
        };
        let payment_preferences = raw
            .payment_preferences
            .map(|ranks| {
                [ranks.rank_1, ranks.rank_2, ranks.rank_3]
                    .into_iter()
                    .flatten()
                    .collect()
            })
            .unwrap_or_default();

        Self {
            food_treatment: pick(raw.food_treatment, promotions.food, NO_TREATMENT),
            ride_treatment: pick(raw.ride_treatment, promotions.ride, NO_TREATMENT),
            car_treatment: pick(raw.car_treatment, promotions.car, NO_TREATMENT),
            ride_prediction_place: pick(raw.ride_prediction_place, places.ride, NO_PREDICTION),
            car_prediction_place: pick(raw.car_prediction_place, places.car, NO_PREDICTION),
            food_prediction_place: pick(raw.food_prediction_place, places.food, NO_PREDICTION),
            customer_id: raw.customer_id,
            payment_preferences,
            completed_quests: raw.completed_quests,
            quest_completion_rate: raw.quest_completion_rate,
            last_quest_date: raw.last_quest_date,
        }
    }
}

/// Accept strings, numbers and booleans as text; `null` becomes `None`.
///
/// Treatment columns come out of a CSV, so `0` regularly arrives as a number.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(food: &str) -> UserContext {
        UserContext::from_json(&format!(
            r#"{{
                "food_treatment": "{food}",
                "ride_treatment": "0",
                "car_treatment": "RIDE15",
                "RIDE_PREDICTION_PLACE": "Stasiun Sudirman",
                "CAR_PREDICTION_PLACE": "null",
                "FOOD_PREDICTION_PLACE": "Sate Khas Senayan"
            }}"#
        ))
        .expect("flat context")
    }

    #[test]
    fn zero_treatment_reads_as_no_promo() {
        let ctx = flat("0");
        assert_eq!(ctx.promotion(ServiceLine::Food), None);
        assert_eq!(ctx.promotion_label(ServiceLine::Food), "No promo");
    }

    #[test]
    fn real_treatment_is_displayed_verbatim() {
        let ctx = flat("20% off");
        assert_eq!(ctx.promotion_label(ServiceLine::Food), "20% off");
        assert_eq!(ctx.promotion_label(ServiceLine::Car), "RIDE15");
        assert_eq!(ctx.promotion_label(ServiceLine::Ride), "No promo");
    }

    #[test]
    fn null_prediction_hides_the_place() {
        let ctx = flat("0");
        assert_eq!(
            ctx.favorite_place(ServiceLine::Ride),
            Some("Stasiun Sudirman")
        );
        assert_eq!(ctx.favorite_place(ServiceLine::Car), None);
    }

    #[test]
    fn voucher_lookup_follows_platform() {
        let ctx = flat("FOODIE10");
        assert_eq!(ctx.voucher_for(&Platform::GoFood), Some("FOODIE10"));
        assert_eq!(ctx.voucher_for(&Platform::GoRide), None);
        assert_eq!(ctx.voucher_for(&Platform::GoCar), Some("RIDE15"));
        assert_eq!(ctx.voucher_for(&Platform::GoPay), None);
        assert_eq!(ctx.voucher_for(&Platform::from("GoSend")), None);
    }

    #[test]
    fn nested_backend_shape_decodes() {
        let ctx = UserContext::from_json(
            r#"{
                "customer_id": "000000006",
                "promotions": {"food": 0, "ride": "GORIDE5K", "car": null},
                "payment_preferences": {"rank_1": "gopay", "rank_2": "ovo", "rank_3": null},
                "favorite_places": {"ride": "Blok M", "car": "null", "food": null},
                "completed_quests": 4,
                "quest_completion_rate": 80.0,
                "last_quest_date": "2024-11-02T09:00:00"
            }"#,
        )
        .expect("nested context");
        assert_eq!(ctx.food_treatment, "0");
        assert_eq!(ctx.promotion(ServiceLine::Ride), Some("GORIDE5K"));
        assert_eq!(ctx.promotion(ServiceLine::Car), None);
        assert_eq!(ctx.favorite_place(ServiceLine::Ride), Some("Blok M"));
        assert_eq!(ctx.favorite_place(ServiceLine::Food), None);
        assert_eq!(ctx.payment_preferences, vec!["gopay", "ovo"]);
        assert_eq!(ctx.completed_quests, Some(4));
        assert_eq!(ctx.customer_id.as_deref(), Some("000000006"));
    }

    #[test]
    fn flat_keys_win_over_nested_ones() {
        let ctx = UserContext::from_json(
            r#"{"food_treatment": "FLAT", "promotions": {"food": "NESTED"}}"#,
        )
        .expect("mixed context");
        assert_eq!(ctx.food_treatment, "FLAT");
    }

    #[test]
    fn empty_object_means_nothing_to_show() {
        let ctx = UserContext::from_json("{}").expect("empty context");
        assert_eq!(ctx, UserContext::default());
        for line in ServiceLine::ALL {
            assert_eq!(ctx.promotion(line), None);
            assert_eq!(ctx.favorite_place(line), None);
        }
    }

    #[test]
    fn serialized_context_uses_flat_wire_names() {
        let json = serde_json::to_value(flat("0")).expect("serialize");
        assert_eq!(json["RIDE_PREDICTION_PLACE"], "Stasiun Sudirman");
        assert!(json.get("customer_id").is_none());
        let back: UserContext = serde_json::from_value(json).expect("decode");
        assert_eq!(back, flat("0"));
    }

    #[test]
    fn absent_slot_has_no_vouchers() {
        let slot = ContextSlot::Absent;
        assert!(!slot.is_loaded());
        assert_eq!(slot.voucher_for(&Platform::GoFood), None);
        let loaded = ContextSlot::Loaded(flat("FOODIE10"));
        assert_eq!(loaded.voucher_for(&Platform::GoFood), Some("FOODIE10"));
    }
}
