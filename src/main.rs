use std::path::Path;

use anyhow::{anyhow, Result};

use bestshot::cli::Args;
use bestshot::config::Config;
use bestshot::evaluation::evaluate_best_shot_on_goal;
use bestshot::models::Field;
use bestshot::utils::{self, ScenarioParser};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .format_module_path(false)
        .init();

    let args = Args::parse().map_err(|err| anyhow!(err))?;

    let mut config = match args.config_path.as_ref() {
        Some(config_path) => Config::load_yaml_file(config_path)?,
        None => Config::default(),
    };
    if let Some(goal) = args.goal {
        config.goal = goal;
    }
    if args.output_path.is_some() {
        config.output_path = args.output_path.clone();
    }

    let scenario = ScenarioParser::parse_file(Path::new(&args.scenario_path))?;
    log::info!(
        "Loaded scenario {} with {} friendly and {} enemy robots",
        args.scenario_path,
        scenario.friendly_team.len(),
        scenario.enemy_team.len()
    );

    let field = Field::from_config(&config);
    let evaluation = evaluate_best_shot_on_goal(
        &field,
        &scenario.friendly_team,
        &scenario.enemy_team,
        &scenario.shot_origin,
        config.goal,
        &scenario.robots_to_ignore,
        config.robot_radius,
    );

    match evaluation.shot.as_ref() {
        Some(shot) => log::info!(
            "Shot at ({:.3}, {:.3}) with {:.2} deg open",
            shot.point.x,
            shot.point.y,
            shot.open_angle.to_degrees()
        ),
        None => log::info!(
            "No shot, {} obstacles block the goal",
            evaluation.obstacles.len()
        ),
    }
    println!("{}", serde_json::to_string(&evaluation.shot)?);

    if let Some(output_path) = config.output_path.as_ref() {
        utils::write_shot_file(output_path, evaluation.shot.as_ref())?;
    }
    Ok(())
}
