//! Readout panel
//!
//! Turns the configured inputs into the labelled lines the display layer
//! prints. The display layer only ever sees formatted strings; all the
//! arithmetic happens here against `quatview_math`.

use quatview_math::{direction_to_direction, rotate_axis_angle, Quat};

use crate::config::AppConfig;

/// Width of the label column, so values line up
const LABEL_WIDTH: usize = 18;

fn quat_line(label: &str, q: Quat) -> String {
    format!("{:<LABEL_WIDTH$}: {}", label, q)
}

/// Build the quaternion algebra section of the panel
pub fn quaternion_panel(config: &AppConfig) -> Vec<String> {
    let q1 = config.quaternions.q1();
    let q2 = config.quaternions.q2();

    vec![
        quat_line("Identity", Quat::IDENTITY),
        quat_line("Conjugate", q1.conjugate()),
        quat_line("Inverse", q1.inverse()),
        quat_line("Normalize", q1.normalized()),
        quat_line("Multiply(q1, q2)", q1 * q2),
        quat_line("Multiply(q2, q1)", q2 * q1),
        format!("{:<LABEL_WIDTH$}: {:6.2}", "Norm", q1.norm()),
    ]
}

/// Build the rotation matrix section of the panel
pub fn rotation_panel(config: &AppConfig) -> Vec<String> {
    let dir = direction_to_direction(
        config.directions.from_vec(),
        config.directions.to_vec(),
    );
    let axis = rotate_axis_angle(
        config.axis_angle.axis_vec(),
        config.axis_angle.angle_radians(),
    );

    let mut lines = vec!["DirectionToDirection".to_string()];
    lines.extend(format!("{}", dir).lines().map(String::from));
    lines.push("RotateAxisAngle".to_string());
    lines.extend(format!("{}", axis).lines().map(String::from));
    lines
}

/// Build the full panel: quaternion section, blank separator, rotation section
pub fn build(config: &AppConfig) -> Vec<String> {
    let mut lines = quaternion_panel(config);
    lines.push(String::new());
    lines.extend(rotation_panel(config));
    lines
}
