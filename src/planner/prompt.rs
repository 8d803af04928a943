use super::types::TripRequest;

pub(crate) const SYSTEM_PROMPT: &str = "You are an expert travel planner with years of experience. \
Always answer in English. Create a detailed, realistic travel plan that matches the user's \
preferences exactly. Include practical details, accurate costs, and important local tips.";

/// Renders the user prompt for a trip request. Pure text templating: a
/// reversed date range flows straight through as a zero or negative
/// duration.
pub(crate) fn build_prompt(request: &TripRequest) -> String {
    let duration = request.duration_days();
    let interests = request.interests.join(", ");

    format!(
        r#"Plan a detailed trip for me with the following details:

**Trip details:**
- Destination: {destination}
- Dates: {start} to {end} ({duration} days)
- Number of travelers: {travelers}
- Total budget: {budget}
- Travel style: {style}
- Interests: {interests}

**Requests:**
1. Create a detailed day-by-day plan with concrete activities
2. Estimate costs for each day
3. Give practical recommendations and local tips
4. Include information about the expected weather
5. Break down the budget
6. Add important emergency information

Take the travel style ({style}) and the selected interests into account.
Make sure the plan fits the number of travelers and the budget.

Please return the answer in JSON format with the following structure:
{{
  "itinerary": [
    {{
      "day": 1,
      "title": "Title for the day",
      "activities": ["Activity 1", "Activity 2"],
      "estimatedCost": 500,
      "timeOfDay": "morning/afternoon/evening"
    }}
  ],
  "recommendations": ["Recommendation 1", "Recommendation 2"],
  "weatherInfo": "Weather information",
  "budgetBreakdown": {{
    "accommodation": 2000,
    "food": 1500,
    "activities": 1000,
    "transportation": 800,
    "miscellaneous": 700
  }},
  "localTips": ["Tip 1", "Tip 2"],
  "emergencyInfo": ["Emergency info 1", "Emergency info 2"]
}}
"#,
        destination = request.destination,
        start = request.start_date,
        end = request.end_date,
        duration = duration,
        travelers = request.travelers,
        budget = request.budget,
        style = request.travel_style,
        interests = interests,
    )
}
