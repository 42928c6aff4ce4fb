// ABOUTME: Output formatting helpers for mesoplan-cli
// ABOUTME: Renders templates, model comparisons, and the model catalogue as text tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mesoplan::{DeloadSchedule, ProgressionModel, ProgressionTemplate};

fn deload_marker(schedule: &DeloadSchedule, week: u32) -> &'static str {
    if schedule.is_deload_week(week) {
        "*"
    } else {
        " "
    }
}

/// Display a single template as a week table
pub fn display_template(
    model: ProgressionModel,
    template: &ProgressionTemplate,
    schedule: &DeloadSchedule,
) {
    println!("\n{} progression, {} weeks", model, template.len());
    println!("{}", "=".repeat(30));
    println!("{:>5}  {:>9}  {:>6}", "Week", "Intensity", "Volume");

    for week in template {
        println!(
            "{:>4}{}  {:>9}  {:>6}",
            week.week,
            deload_marker(schedule, week.week),
            week.intensity,
            week.volume
        );
    }

    if let (Some(intensity), Some(volume)) =
        (template.average_intensity(), template.average_volume())
    {
        println!("{}", "-".repeat(30));
        println!("Average intensity {intensity:.1}, volume {volume:.1}");
    }
    if schedule.active_frequency().is_some() {
        println!("* deload week (x{})", schedule.factor);
    }
}

/// Display every model side by side as intensity/volume pairs
pub fn display_comparison(
    results: &[(ProgressionModel, ProgressionTemplate)],
    schedule: &DeloadSchedule,
) {
    print!("{:>5}", "Week");
    for (model, _) in results {
        print!("  {:>13}", model.name());
    }
    println!();
    println!("{}", "=".repeat(5 + results.len() * 15));

    let weeks = results.first().map_or(0, |(_, template)| template.len());
    for index in 0..weeks {
        let week = u32::try_from(index + 1).unwrap_or(u32::MAX);
        print!("{:>4}{}", week, deload_marker(schedule, week));
        for (_, template) in results {
            match template.get(week) {
                Some(prescription) => print!(
                    "  {:>13}",
                    format!("{}/{}", prescription.intensity, prescription.volume)
                ),
                None => print!("  {:>13}", "-"),
            }
        }
        println!();
    }

    println!("\nValues are intensity/volume on the 1-10 scale");
    if schedule.active_frequency().is_some() {
        println!("* deload week (x{})", schedule.factor);
    }
}

/// Display the model catalogue
pub fn display_models() {
    println!("\nAvailable progression models:");
    println!("{}", "=".repeat(60));
    for model in ProgressionModel::ALL {
        println!("  {:<14} {}", model.name(), model.description());
    }
    println!("\nUnknown model names fall back to linear unless --strict is given.");
}
