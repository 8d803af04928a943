use colored::Colorize;

use crate::planner::GeneratedTravelPlan;

/// Formatted terminal rendering of a plan. Display only; consumes the plan
/// as data and never alters it.
pub(crate) fn print_plan(plan: &GeneratedTravelPlan) {
    println!();
    println!(
        "🌍 {}",
        format!("Trip to {}", plan.destination).bold().cyan()
    );
    println!("📅 {}   💰 Budget: {}", plan.duration, plan.budget);

    if plan.itinerary.is_empty() {
        println!("\n{}", "No itinerary days to show.".dimmed());
    } else {
        println!("\n{}", "Itinerary".bold().underline());
        for day in &plan.itinerary {
            println!(
                "\n  {} {}",
                format!("Day {}:", day.day).bold(),
                day.title.green()
            );
            for activity in &day.activities {
                println!("    • {}", activity);
            }
            println!(
                "    {}",
                format!("~{} | {}", day.estimated_cost, day.time_of_day).dimmed()
            );
        }
    }

    if !plan.recommendations.is_empty() {
        println!("\n{}", "Recommendations".bold().underline());
        for tip in &plan.recommendations {
            println!("  ✅ {}", tip);
        }
    }

    println!("\n{}", "Weather".bold().underline());
    println!("  ☀️  {}", plan.weather_info);

    println!("\n{}", "Budget breakdown".bold().underline());
    let breakdown = &plan.budget_breakdown;
    println!("  🏨 Accommodation:  {}", breakdown.accommodation);
    println!("  🍽️  Food:           {}", breakdown.food);
    println!("  🎟️  Activities:     {}", breakdown.activities);
    println!("  🚌 Transportation: {}", breakdown.transportation);
    println!("  🧾 Miscellaneous:  {}", breakdown.miscellaneous);
    println!("  {}", format!("Total: {}", breakdown.total()).dimmed());

    if !plan.local_tips.is_empty() {
        println!("\n{}", "Local tips".bold().underline());
        for tip in &plan.local_tips {
            println!("  💡 {}", tip);
        }
    }

    if !plan.emergency_info.is_empty() {
        println!("\n{}", "Emergency info".bold().underline());
        for item in &plan.emergency_info {
            println!("  🚨 {}", item);
        }
    }

    println!();
}
