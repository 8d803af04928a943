use super::types::{BudgetBreakdown, DayPlan, GeneratedTravelPlan, TripRequest};

// Itineraries are capped regardless of trip length.
const MAX_ITINERARY_DAYS: i64 = 7;

/// Deterministic offline plan used when no API key is configured or the
/// remote path fails at any stage. Pure: the same request always yields the
/// same plan.
pub(crate) fn generate_offline_plan(request: &TripRequest) -> GeneratedTravelPlan {
    let duration = request.duration_days();

    let mut itinerary = Vec::new();
    if duration > 0 {
        let per_day_cost = (request.budget / duration as f64 * 0.8).floor() as i64;
        for day in 1..=duration.min(MAX_ITINERARY_DAYS) {
            itinerary.push(DayPlan {
                day: day as u32,
                title: format!("Day {} - Exploring {}", day, request.destination),
                activities: vec![
                    "Visit a main attraction".to_string(),
                    "Walk through the historic quarter".to_string(),
                    "Meal at a recommended local restaurant".to_string(),
                    "Shopping at the local market".to_string(),
                ],
                estimated_cost: per_day_cost,
                time_of_day: match day % 3 {
                    1 => "morning",
                    2 => "afternoon",
                    _ => "evening",
                }
                .to_string(),
            });
        }
    }

    GeneratedTravelPlan {
        destination: request.destination.clone(),
        duration: request.duration_label(),
        budget: request.budget,
        itinerary,
        recommendations: vec![
            "Book ahead during peak season".to_string(),
            "Take out comprehensive travel insurance".to_string(),
            "Learn basic words in the local language".to_string(),
            "Check the weather before you travel".to_string(),
            "Keep digital copies of important documents".to_string(),
        ],
        weather_info: "Pleasant warm weather, bring summer clothes and a hat".to_string(),
        budget_breakdown: BudgetBreakdown::offline(request.budget),
        local_tips: vec![
            "Use public transport to save money".to_string(),
            "Eat where the locals eat".to_string(),
            "Learn about local customs".to_string(),
            "Prepare a phrase list in the local language".to_string(),
        ],
        emergency_info: vec![
            "Local emergency number: 112".to_string(),
            "Address of your embassy at the destination".to_string(),
            "Phone number of your travel insurance company".to_string(),
            "Nearest place to get medical help".to_string(),
        ],
    }
}
