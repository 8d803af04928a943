use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Trip parameters collected by the frontend. Interests and travel style are
/// carried as plain text; the collecting layer owns their vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub budget: f64,
    pub interests: Vec<String>,
    pub travel_style: String,
}

impl TripRequest {
    /// Whole-day span of the trip. Zero or negative when the dates are
    /// reversed; callers tolerate that rather than correcting it.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn duration_label(&self) -> String {
        format!("{} days", self.duration_days())
    }
}

/// Fully-populated plan returned to the caller. Every field is always
/// present; the resolver never hands back a partial structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTravelPlan {
    pub destination: String,
    pub duration: String,
    pub budget: f64,
    pub itinerary: Vec<DayPlan>,
    pub recommendations: Vec<String>,
    pub weather_info: String,
    pub budget_breakdown: BudgetBreakdown,
    pub local_tips: Vec<String>,
    pub emergency_info: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub estimated_cost: i64,
    #[serde(default)]
    pub time_of_day: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub accommodation: i64,
    pub food: i64,
    pub activities: i64,
    pub transportation: i64,
    pub miscellaneous: i64,
}

impl BudgetBreakdown {
    /// Split substituted when a model reply omits its own breakdown.
    pub fn remote_default(budget: f64) -> Self {
        Self {
            accommodation: (budget * 0.40).floor() as i64,
            food: (budget * 0.30).floor() as i64,
            activities: (budget * 0.20).floor() as i64,
            transportation: (budget * 0.08).floor() as i64,
            miscellaneous: (budget * 0.02).floor() as i64,
        }
    }

    /// Split used by the offline generator. The two paths carry different
    /// proportions on purpose; keep them as separate constructors.
    pub fn offline(budget: f64) -> Self {
        Self {
            accommodation: (budget * 0.40).floor() as i64,
            food: (budget * 0.25).floor() as i64,
            activities: (budget * 0.20).floor() as i64,
            transportation: (budget * 0.10).floor() as i64,
            miscellaneous: (budget * 0.05).floor() as i64,
        }
    }

    pub fn total(&self) -> i64 {
        self.accommodation + self.food + self.activities + self.transportation + self.miscellaneous
    }
}
