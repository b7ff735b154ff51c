//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`QV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use quatview_math::{Quat, Vec3};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Quaternion pair shown in the readout
    #[serde(default)]
    pub quaternions: QuaternionConfig,
    /// Direction pair for the direction-to-direction rotation
    #[serde(default)]
    pub directions: DirectionConfig,
    /// Axis and angle for the axis-angle rotation
    #[serde(default)]
    pub axis_angle: AxisAngleConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`QV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        // Load default config (required)
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // QV_AXIS_ANGLE__ANGLE_DEGREES=90 -> axis_angle.angle_degrees = 90
        figment = figment.merge(Env::prefixed("QV_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Quaternion pair configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuaternionConfig {
    /// Left operand [x, y, z, w]
    pub q1: [f32; 4],
    /// Right operand [x, y, z, w]
    pub q2: [f32; 4],
}

impl Default for QuaternionConfig {
    fn default() -> Self {
        Self {
            q1: [2.0, 3.0, 4.0, 1.0],
            q2: [1.0, 3.0, 5.0, 2.0],
        }
    }
}

impl QuaternionConfig {
    pub fn q1(&self) -> Quat {
        let [x, y, z, w] = self.q1;
        Quat::new(x, y, z, w)
    }

    pub fn q2(&self) -> Quat {
        let [x, y, z, w] = self.q2;
        Quat::new(x, y, z, w)
    }
}

/// Direction pair configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionConfig {
    /// Source direction [x, y, z]
    pub from: [f32; 3],
    /// Target direction [x, y, z]
    pub to: [f32; 3],
}

impl Default for DirectionConfig {
    fn default() -> Self {
        Self {
            from: [1.0, 0.0, 0.0],
            to: [0.0, 1.0, 0.0],
        }
    }
}

impl DirectionConfig {
    pub fn from_vec(&self) -> Vec3 {
        let [x, y, z] = self.from;
        Vec3::new(x, y, z)
    }

    pub fn to_vec(&self) -> Vec3 {
        let [x, y, z] = self.to;
        Vec3::new(x, y, z)
    }
}

/// Axis-angle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisAngleConfig {
    /// Rotation axis [x, y, z]; need not be normalized
    pub axis: [f32; 3],
    /// Rotation angle in degrees
    pub angle_degrees: f32,
}

impl Default for AxisAngleConfig {
    fn default() -> Self {
        Self {
            axis: [1.0, 1.0, 1.0],
            angle_degrees: 45.0,
        }
    }
}

impl AxisAngleConfig {
    pub fn axis_vec(&self) -> Vec3 {
        let [x, y, z] = self.axis;
        Vec3::new(x, y, z)
    }

    pub fn angle_radians(&self) -> f32 {
        self.angle_degrees.to_radians()
    }
}

/// Configuration loading error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
