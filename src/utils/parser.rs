use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use nalgebra::Point2;
use serde::Deserialize;

use crate::models::{Robot, Team};

#[derive(Clone, Copy, Debug, Deserialize)]
struct Position {
    x: f64,
    y: f64,
}

#[derive(Clone, Copy, Debug, Deserialize)]
struct RobotEntry {
    id: u32,
    x: f64,
    y: f64,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum TeamSide {
    Friendly,
    Enemy,
}

#[derive(Clone, Copy, Debug, Deserialize)]
struct IgnoreEntry {
    team: TeamSide,
    id: u32,
}

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    shot_origin: Position,
    #[serde(default)]
    friendly: Vec<RobotEntry>,
    #[serde(default)]
    enemy: Vec<RobotEntry>,
    #[serde(default)]
    ignore: Vec<IgnoreEntry>,
}

/// Snapshot of a match used as input for one shot query
#[derive(Clone, Debug)]
pub struct Scenario {
    pub shot_origin: Point2<f64>,
    pub friendly_team: Team,
    pub enemy_team: Team,
    pub robots_to_ignore: Vec<Robot>,
}

pub struct ScenarioParser;

impl ScenarioParser {
    pub fn parse_file(path: &Path) -> Result<Scenario> {
        let file = File::open(path).with_context(|| format!("Cannot open file {:?}", path))?;
        let reader = BufReader::new(file);
        let scenario: ScenarioFile = serde_yaml::from_reader(reader)
            .with_context(|| format!("Failed to parse scenario {:?}", path))?;
        Self::build(scenario)
    }

    pub fn parse_str(content: &str) -> Result<Scenario> {
        let scenario: ScenarioFile =
            serde_yaml::from_str(content).context("Failed to parse scenario")?;
        Self::build(scenario)
    }

    fn create_team(entries: &[RobotEntry]) -> Team {
        Team::new(
            entries
                .iter()
                .map(|entry| Robot::new(entry.id, Point2::new(entry.x, entry.y)))
                .collect(),
        )
    }

    fn build(scenario: ScenarioFile) -> Result<Scenario> {
        let friendly_team = Self::create_team(&scenario.friendly);
        let enemy_team = Self::create_team(&scenario.enemy);

        let robots_to_ignore = scenario
            .ignore
            .iter()
            .map(|entry| {
                let team = match entry.team {
                    TeamSide::Friendly => &friendly_team,
                    TeamSide::Enemy => &enemy_team,
                };
                team.robot_by_id(entry.id)
                    .cloned()
                    .ok_or_else(|| anyhow!("Cannot ignore unknown {:?} robot {}", entry.team, entry.id))
            })
            .collect::<Result<Vec<Robot>>>()?;

        Ok(Scenario {
            shot_origin: Point2::new(scenario.shot_origin.x, scenario.shot_origin.y),
            friendly_team,
            enemy_team,
            robots_to_ignore,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "
shot_origin: { x: 1.0, y: -0.5 }
friendly:
  - { id: 0, x: 1.0, y: -0.5 }
  - { id: 1, x: 2.5, y: 0.3 }
enemy:
  - { id: 0, x: 3.8, y: 0.0 }
ignore:
  - { team: friendly, id: 0 }
";

    #[test]
    fn parse_scenario() {
        let scenario = ScenarioParser::parse_str(SCENARIO).unwrap();
        assert_eq!(Point2::new(1.0, -0.5), scenario.shot_origin);
        assert_eq!(2, scenario.friendly_team.len());
        assert_eq!(1, scenario.enemy_team.len());
        assert_eq!(
            vec![Robot::new(0, Point2::new(1.0, -0.5))],
            scenario.robots_to_ignore
        );
    }

    #[test]
    fn teams_default_to_empty() {
        let scenario = ScenarioParser::parse_str("shot_origin: { x: 0.0, y: 0.0 }").unwrap();
        assert!(scenario.friendly_team.is_empty());
        assert!(scenario.enemy_team.is_empty());
        assert!(scenario.robots_to_ignore.is_empty());
    }

    #[test]
    fn unknown_ignored_robot_is_an_error() {
        let content = "
shot_origin: { x: 0.0, y: 0.0 }
ignore:
  - { team: enemy, id: 4 }
";
        assert!(ScenarioParser::parse_str(content).is_err());
    }

    #[test]
    fn missing_origin_is_an_error() {
        assert!(ScenarioParser::parse_str("enemy: []").is_err());
    }
}
