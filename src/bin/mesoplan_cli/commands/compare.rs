// ABOUTME: `compare` subcommand: every periodization model for the same block
// ABOUTME: Prints a side-by-side table or a JSON array of model templates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mesoplan::config::PlannerConfig;
use mesoplan::errors::AppResult;
use mesoplan::{ProgressionModel, ProgressionTemplate, TemplateGenerator};
use serde::Serialize;

use super::{BlockArgs, OptionArgs, OutputFormat};
use crate::helpers::display;

#[derive(Serialize)]
struct ModelTemplate<'a> {
    model: ProgressionModel,
    weeks: &'a ProgressionTemplate,
}

/// Generate and print templates for all models
pub fn run(
    block: &BlockArgs,
    option_args: &OptionArgs,
    format: OutputFormat,
    config: &PlannerConfig,
) -> AppResult<()> {
    let options = option_args.resolve(config.default_options);

    let generator = TemplateGenerator::new(block.weeks, block.intensity, block.volume, options);
    let results = generator.compare_models();

    match format {
        OutputFormat::Table => {
            display::display_comparison(&results, &options.deload_schedule());
        }
        OutputFormat::Json => {
            let payload: Vec<ModelTemplate<'_>> = results
                .iter()
                .map(|(model, template)| ModelTemplate {
                    model: *model,
                    weeks: template,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}
