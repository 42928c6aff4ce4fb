// ABOUTME: `generate` subcommand: one template for one periodization model
// ABOUTME: Applies strict validation on request, otherwise falls back to linear like the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mesoplan::config::PlannerConfig;
use mesoplan::errors::AppResult;
use mesoplan::{ProgressionModel, ProgressionRequest, TemplateGenerator};
use tracing::{info, warn};

use super::{BlockArgs, OptionArgs, OutputFormat};
use crate::helpers::display;

/// Generate and print a template
pub fn run(
    model_name: &str,
    block: &BlockArgs,
    option_args: &OptionArgs,
    format: OutputFormat,
    strict: bool,
    config: &PlannerConfig,
) -> AppResult<()> {
    let request = ProgressionRequest {
        model_type: model_name.to_owned(),
        duration: block.weeks,
        base_intensity: block.intensity,
        base_volume: block.volume,
        options: option_args.resolve(config.default_options),
    };

    let model = if strict {
        request.validate()?
    } else {
        if model_name.parse::<ProgressionModel>().is_err() {
            warn!(model = model_name, "Unknown model, falling back to linear");
        }
        request.model()
    };

    let template = TemplateGenerator::new(
        request.duration,
        request.base_intensity,
        request.base_volume,
        request.options,
    )
    .generate(model);
    info!(model = %model, weeks = template.len(), "Template generated");

    match format {
        OutputFormat::Table => {
            display::display_template(model, &template, &request.options.deload_schedule());
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&template)?),
    }

    Ok(())
}
