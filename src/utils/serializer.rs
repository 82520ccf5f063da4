use std::fs::OpenOptions;
use std::io::Write;

use anyhow::{Context, Result};

use crate::evaluation::Shot;

pub fn write_shot_file(output_path: &str, shot: Option<&Shot>) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(output_path)
        .with_context(|| format!("Cannot open output file {}", output_path))?;

    let json = serde_json::to_string_pretty(&shot).context("Failed to serialize shot")?;
    writeln!(file, "{}", json).with_context(|| format!("Failed to write shot to {}", output_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Angle;
    use crate::utils::FloatCompare;
    use nalgebra::Point2;

    #[test]
    fn write_and_read_back() {
        let path = std::env::temp_dir().join("bestshot_serializer_test.json");
        let path = path.to_str().unwrap();
        let shot = Shot::new(Point2::new(4.5, 0.1), Angle::from_degrees(8.0));

        write_shot_file(path, Some(&shot)).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        let read: Shot = serde_json::from_str(&content).unwrap();
        assert!(read.point.x.approx_eq(4.5) && read.point.y.approx_eq(0.1));
        assert!(read.open_angle.approx_eq(shot.open_angle));

        write_shot_file(path, None).unwrap();
        assert_eq!("null", std::fs::read_to_string(path).unwrap().trim());
    }
}
