//! Scene configuration
//!
//! Every geometric constant of the scene lives here. Values are read from
//! `scene.json` in the platform config directory when that file exists and
//! fall back to the built-in scene otherwise:
//! - macOS: ~/Library/Application Support/heliorbit/scene.json
//! - Linux: ~/.config/heliorbit/scene.json
//! - Windows: %APPDATA%\heliorbit\config\scene.json

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::orbital::EllipticalOrbit;

const CONFIG_FILE_NAME: &str = "scene.json";

/// Invalid scene parameters, detected once at startup.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("orbit semi-major axis ({a}) must be at least the semi-minor axis ({b})")]
    InvalidAxes { a: f32, b: f32 },
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("orbit curve needs at least 3 segments, got {0}")]
    TooFewSegments(u32),
    #[error("camera near plane ({near}) must be closer than the far plane ({far})")]
    InvalidClipPlanes { near: f32, far: f32 },
}

/// Check that `value` is finite and strictly positive.
pub fn ensure_positive(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn ensure_finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

/// Full scene description.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub semi_major_axis: f32,
    pub semi_minor_axis: f32,
    /// X position of the orbit focus, where the sun sits.
    pub primary_offset: f32,
    /// Seconds of simulation time per radian of orbital phase.
    pub time_scale: f32,
    /// Self-rotation added on every frame while running.
    pub spin_step_rad: f32,
    pub axial_tilt_deg: f32,
    pub sun_radius: f32,
    pub earth_radius: f32,
    pub orbit_segments: u32,
    pub ecliptic_plane_extent: f32,
    pub equator_plane_extent: f32,
    pub sun_axis_length: f32,
    pub earth_axis_length: f32,
    pub camera: CameraConfig,
    pub sun_texture: String,
    pub earth_texture: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Distance of the side view from the world origin.
    pub side_view_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            side_view_distance: 50.0,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            semi_major_axis: 21.0,
            semi_minor_axis: 10.0,
            primary_offset: 5.0,
            time_scale: 10.0,
            spin_step_rad: 0.04,
            axial_tilt_deg: -23.45,
            sun_radius: 2.0,
            earth_radius: 1.0,
            orbit_segments: 100,
            ecliptic_plane_extent: 100.0,
            equator_plane_extent: 10.0,
            sun_axis_length: 16.0,
            earth_axis_length: 10.0,
            camera: CameraConfig::default(),
            sun_texture: "img/sun.jpeg".to_string(),
            earth_texture: "img/earth.jpeg".to_string(),
        }
    }
}

impl SceneConfig {
    /// Location of the user config file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "heliorbit").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load from the platform config directory, or use the built-in scene.
    pub fn load() -> anyhow::Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                warn!("No config directory on this platform; using the built-in scene");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`. A missing file yields the defaults; a file that
    /// exists but cannot be read or parsed is an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!("No scene config at {}; using the built-in scene", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        info!("Loaded scene config from {}", path.display());
        Ok(config)
    }

    /// Check every parameter and build the orbit they describe.
    pub fn validate(&self) -> Result<EllipticalOrbit, ConfigError> {
        ensure_positive("time_scale", self.time_scale)?;
        ensure_positive("spin_step_rad", self.spin_step_rad)?;
        ensure_finite("axial_tilt_deg", self.axial_tilt_deg)?;
        ensure_positive("sun_radius", self.sun_radius)?;
        ensure_positive("earth_radius", self.earth_radius)?;
        ensure_positive("ecliptic_plane_extent", self.ecliptic_plane_extent)?;
        ensure_positive("equator_plane_extent", self.equator_plane_extent)?;
        ensure_positive("sun_axis_length", self.sun_axis_length)?;
        ensure_positive("earth_axis_length", self.earth_axis_length)?;
        ensure_positive("camera.fov_deg", self.camera.fov_deg)?;
        ensure_positive("camera.near", self.camera.near)?;
        ensure_positive("camera.far", self.camera.far)?;
        if self.camera.near >= self.camera.far {
            return Err(ConfigError::InvalidClipPlanes {
                near: self.camera.near,
                far: self.camera.far,
            });
        }
        ensure_positive("camera.side_view_distance", self.camera.side_view_distance)?;
        if self.orbit_segments < 3 {
            return Err(ConfigError::TooFewSegments(self.orbit_segments));
        }

        EllipticalOrbit::new(
            self.semi_major_axis,
            self.semi_minor_axis,
            self.primary_offset,
        )
    }

    pub fn axial_tilt_rad(&self) -> f32 {
        self.axial_tilt_deg.to_radians()
    }
}
