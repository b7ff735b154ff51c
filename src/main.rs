//! quatview - quaternion and rotation-matrix readout
//!
//! Computes the configured quaternion algebra and rotation matrices and
//! prints the formatted panel. Where the values end up (terminal, overlay,
//! window) is the display layer's business; this binary just prints lines.

use quatview::config::AppConfig;
use quatview::readout;

fn main() {
    env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    log::info!(
        "Readout inputs: q1 {:?}, q2 {:?}, from {:?}, to {:?}, axis {:?} at {} deg",
        config.quaternions.q1,
        config.quaternions.q2,
        config.directions.from,
        config.directions.to,
        config.axis_angle.axis,
        config.axis_angle.angle_degrees,
    );

    for line in readout::build(&config) {
        println!("{}", line);
    }
}
