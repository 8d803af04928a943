use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::types::{BudgetBreakdown, GeneratedTravelPlan, TripRequest};

pub(crate) const WEATHER_UNAVAILABLE: &str = "Weather information unavailable";

/// Greedy slice from the first `{` to the last `}`. Model replies are often
/// wrapped in prose or markdown fences, so whole-text parsing is not an
/// option.
pub(crate) fn extract_json_object(input: &str) -> Option<String> {
    let start = input.find('{')?;
    let end = input.rfind('}')?;
    if end < start {
        return None;
    }
    Some(input[start..=end].to_string())
}

/// Projects a loosely-typed model reply into the plan contract. Destination,
/// budget, and duration always come from the request; every other field is
/// taken from the reply when it has the right shape, else defaulted.
pub(crate) fn project_plan(parsed: Value, request: &TripRequest) -> GeneratedTravelPlan {
    let mut fields = match parsed {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    GeneratedTravelPlan {
        destination: request.destination.clone(),
        duration: request.duration_label(),
        budget: request.budget,
        itinerary: take_field(&mut fields, "itinerary").unwrap_or_default(),
        recommendations: take_field(&mut fields, "recommendations").unwrap_or_default(),
        weather_info: take_field(&mut fields, "weatherInfo")
            .unwrap_or_else(|| WEATHER_UNAVAILABLE.to_string()),
        budget_breakdown: take_field(&mut fields, "budgetBreakdown")
            .unwrap_or_else(|| BudgetBreakdown::remote_default(request.budget)),
        local_tips: take_field(&mut fields, "localTips").unwrap_or_default(),
        emergency_info: take_field(&mut fields, "emergencyInfo").unwrap_or_default(),
    }
}

/// A field that is absent or of the wrong shape counts as missing; only
/// that field falls back to its default.
fn take_field<T: DeserializeOwned>(fields: &mut Map<String, Value>, key: &str) -> Option<T> {
    fields
        .remove(key)
        .and_then(|value| serde_json::from_value(value).ok())
}
