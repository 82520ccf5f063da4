use std::cmp::Ordering;

use nalgebra::{Point2, Vector2};
use serde::Serialize;

use crate::evaluation::Shot;
use crate::geom::{intersection, Angle, AngleMap, AngleSegment, Ray, Segment};
use crate::models::{Field, Goal, Robot, Team};

/// Everything computed while resolving a shot.
///
/// Angles in `biggest_viable`, `angle_map` and `obstacles` are relative to
/// `reference`, the direction from the shot origin to the middle of the goal.
#[derive(Clone, Debug, Serialize)]
pub struct ShotEvaluation {
    pub reference: Angle,
    pub biggest_viable: AngleSegment,
    pub angle_map: AngleMap,
    // Obstacles in the order the robots were visited, enemies first
    pub unsorted_obstacles: Vec<AngleSegment>,
    // Same obstacles in the order they were applied to the angle map
    pub obstacles: Vec<AngleSegment>,
    pub shot: Option<Shot>,
}

/// Best shot on `goal_segment` from `shot_origin`, treating every robot in
/// `robot_obstacles` as an obstacle. Robots are ahead of the shooter when they
/// are closer to the goal along the line from the shot origin to the goal.
pub fn calc_best_shot_on_goal(
    goal_segment: &Segment,
    shot_origin: &Point2<f64>,
    robot_obstacles: &[Robot],
    robot_radius: f64,
) -> Option<Shot> {
    let shooting_axis = (goal_segment.midpoint() - *shot_origin)
        .try_normalize(0.0)
        .unwrap_or_else(Vector2::zeros);
    evaluate(
        goal_segment,
        shot_origin,
        robot_obstacles.iter(),
        &shooting_axis,
        robot_radius,
    )
    .shot
}

/// Best shot on `goal` from `shot_origin`. Robots of both teams block the
/// shot unless they are in `robots_to_ignore`.
pub fn calc_best_shot_on_goal_for_team(
    field: &Field,
    friendly_team: &Team,
    enemy_team: &Team,
    shot_origin: &Point2<f64>,
    goal: Goal,
    robots_to_ignore: &[Robot],
    robot_radius: f64,
) -> Option<Shot> {
    evaluate_best_shot_on_goal(
        field,
        friendly_team,
        enemy_team,
        shot_origin,
        goal,
        robots_to_ignore,
        robot_radius,
    )
    .shot
}

/// Same as `calc_best_shot_on_goal_for_team`, but keeps the intermediate
/// state around for inspection
pub fn evaluate_best_shot_on_goal(
    field: &Field,
    friendly_team: &Team,
    enemy_team: &Team,
    shot_origin: &Point2<f64>,
    goal: Goal,
    robots_to_ignore: &[Robot],
    robot_radius: f64,
) -> ShotEvaluation {
    let goal_segment = field.goal_segment(goal);
    let robots = enemy_team
        .robots()
        .iter()
        .chain(friendly_team.robots().iter())
        .filter(|robot| !robots_to_ignore.contains(*robot));

    evaluate(
        &goal_segment,
        shot_origin,
        robots,
        &field.shooting_axis(goal),
        robot_radius,
    )
}

fn evaluate<'a>(
    goal_segment: &Segment,
    shot_origin: &Point2<f64>,
    robots: impl Iterator<Item = &'a Robot>,
    shooting_axis: &Vector2<f64>,
    robot_radius: f64,
) -> ShotEvaluation {
    let shot_origin = *shot_origin;
    let reference = Angle::from_vector(&(goal_segment.midpoint() - shot_origin));
    let pos_post_angle = Angle::from_vector(&(goal_segment.start - shot_origin)).diff(reference);
    let neg_post_angle = Angle::from_vector(&(goal_segment.end - shot_origin)).diff(reference);

    let mut angle_map = AngleMap::from_window(
        pos_post_angle.min(neg_post_angle),
        pos_post_angle.max(neg_post_angle),
    );

    let mut obstacles = Vec::new();
    for robot in robots {
        let to_robot = robot.position() - shot_origin;
        if to_robot.dot(shooting_axis) <= 0.0 {
            log::trace!("Robot {} is behind the shot origin", robot.id);
            continue;
        }

        let obstacle = match obstacle_segment(&shot_origin, &robot.position(), robot_radius, reference) {
            Some(obstacle) => obstacle,
            None => continue,
        };

        if obstacle.bottom() > angle_map.window_max() || obstacle.top() < angle_map.window_min() {
            log::trace!("Robot {} is outside the goal window", robot.id);
            continue;
        }

        obstacles.push(obstacle);
    }

    let unsorted_obstacles = obstacles.clone();

    // Highest leading edge first, equal tops keep their order
    obstacles.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));

    for obstacle in obstacles.iter() {
        angle_map.add_non_viable_angle_segment(*obstacle);
    }

    let biggest_viable = angle_map.biggest_viable_angle_segment();
    log::debug!(
        "{} obstacles, {} viable segments, widest {:.3} deg",
        obstacles.len(),
        angle_map.viable_angle_segments().len(),
        biggest_viable.delta().to_degrees()
    );

    let shot = if biggest_viable.is_degenerate() {
        None
    } else {
        let mid_point_ray = Ray::new(shot_origin, (reference + biggest_viable.mid()).normalized());
        intersection(&mid_point_ray, goal_segment)
            .map(|point| Shot::new(point, biggest_viable.delta()))
    };

    ShotEvaluation {
        reference,
        biggest_viable,
        angle_map,
        unsorted_obstacles,
        obstacles,
        shot,
    }
}

/// Directions blocked by a robot as seen from `shot_origin`, relative to
/// `reference`. The footprint is approximated by the diameter perpendicular
/// to the line of sight.
fn obstacle_segment(
    shot_origin: &Point2<f64>,
    robot_position: &Point2<f64>,
    robot_radius: f64,
    reference: Angle,
) -> Option<AngleSegment> {
    let (shot_origin, robot_position) = (*shot_origin, *robot_position);
    let to_robot = robot_position - shot_origin;
    let perpendicular = Vector2::new(-to_robot.y, to_robot.x).try_normalize(0.0)?;

    let one_end = robot_position + perpendicular * robot_radius;

    // Build around the center so the bounds are never wrapped apart. Bounds
    // past +-PI are fine, they fall outside the goal window.
    let center_direction = Angle::from_vector(&to_robot);
    let center = center_direction.diff(reference);
    let half = Angle::from_vector(&(one_end - shot_origin))
        .diff(center_direction)
        .abs();

    Some(AngleSegment::new(center + half, center - half))
}
