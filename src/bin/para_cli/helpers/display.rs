// ABOUTME: Output formatting helpers for para-cli
// ABOUTME: Provides consistent display functions for predictions and coach replies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use para_coach::models::StructuredReply;
use para_coach::service::PredictionOutcome;

/// Display the canonical profile and its predictions
pub fn display_outcome(outcome: &PredictionOutcome) {
    let athlete = &outcome.input;
    let predictions = &outcome.predictions;

    println!("\nAthlete Profile");
    println!("{}", "=".repeat(50));
    println!("   Age: {}", athlete.age);
    println!("   Gender: {}", athlete.gender);
    println!("   Disability: {}", athlete.disability_type);
    println!("   Sport: {}", athlete.sport_type);
    println!(
        "   Body: {:.1} kg, {:.1} cm (BMI {:.1})",
        athlete.weight_kg,
        athlete.height_cm,
        athlete.bmi()
    );
    println!("   Training: {} days/week", athlete.training_days_per_week);
    println!("   Sleep: {:.1} h", athlete.sleep_hours);
    println!("   Resting HR: {} bpm", athlete.heart_rate_rest);
    println!(
        "   Nutrition: {} kcal, {:.0} g protein, {:.1} L water",
        athlete.daily_calorie_intake, athlete.protein_intake_g, athlete.water_intake_liters
    );
    println!("   Hydration: {}%", athlete.hydration_level);

    println!("\nPredictions");
    println!("{}", "=".repeat(50));
    println!("   Stamina level: {:.2} / 100", predictions.stamina_level());
    println!("   Fatigue level: {:.2} / 1", predictions.fatigue_level());
    println!(
        "   Injury risk: {:.2} ({})",
        predictions.injury_risk_score(),
        predictions.injury_risk_label()
    );
    println!();
}

/// Display one coach reply
pub fn display_reply(reply: &StructuredReply) {
    println!("\n===== COACH =====\n");
    println!("{reply}");
    println!("\n=================\n");
}
