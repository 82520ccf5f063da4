use clap::{App, Arg};

use crate::models::Goal;

/// Representing the resulting command line arguments
pub struct Args {
    pub scenario_path: String,
    pub config_path: Option<String>,
    pub output_path: Option<String>,
    pub goal: Option<Goal>,
}

impl Args {
    /// Setup the clap app and parse the command line arguments
    pub fn parse() -> Result<Self, String> {
        let matches = App::new("bestshot")
            .version("0.1")
            .author("Martin Simensen")
            .about("Finds the widest open angle for a shot on goal")
            .arg(
                Arg::with_name("scenario_path")
                    .required(true)
                    .help("Path to scenario file"),
            )
            .arg(
                Arg::with_name("config_path")
                    .short("c")
                    .takes_value(true)
                    .help("Path to config file"),
            )
            .arg(
                Arg::with_name("output_path")
                    .short("o")
                    .takes_value(true)
                    .help("Path to shot output"),
            )
            .arg(
                Arg::with_name("goal")
                    .short("g")
                    .takes_value(true)
                    .possible_values(&["friendly", "enemy"])
                    .help("Goal to shoot at"),
            )
            .get_matches();

        let scenario_path = matches
            .value_of("scenario_path")
            .ok_or_else(|| "Scenario path is not provided".to_owned())?
            .to_owned();

        let goal = match matches.value_of("goal") {
            Some(goal) => Some(goal.parse::<Goal>()?),
            None => None,
        };

        Ok(Self {
            scenario_path,
            config_path: matches.value_of("config_path").map(str::to_owned),
            output_path: matches.value_of("output_path").map(str::to_owned),
            goal,
        })
    }
}
