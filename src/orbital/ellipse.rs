//! Elliptical orbit geometry
//!
//! The orbit lies in the ecliptic (XZ) plane. The sun sits on the focus at
//! `(primary_offset, 0, 0)`, so the ellipse center is shifted a further
//! focal offset `c` along +X.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::config::{ConfigError, ensure_positive};

/// Fixed orbit of the orbiting body around the primary.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct EllipticalOrbit {
    a: f32,
    b: f32,
    primary_offset: f32,
}

impl EllipticalOrbit {
    /// Build an orbit, rejecting axes that would give a non-real focal offset.
    pub fn new(a: f32, b: f32, primary_offset: f32) -> Result<Self, ConfigError> {
        ensure_positive("semi_major_axis", a)?;
        ensure_positive("semi_minor_axis", b)?;
        if a < b {
            return Err(ConfigError::InvalidAxes { a, b });
        }
        if !primary_offset.is_finite() {
            return Err(ConfigError::NotFinite {
                field: "primary_offset",
                value: primary_offset,
            });
        }
        Ok(Self {
            a,
            b,
            primary_offset,
        })
    }

    pub fn semi_major_axis(&self) -> f32 {
        self.a
    }

    pub fn semi_minor_axis(&self) -> f32 {
        self.b
    }

    pub fn primary_offset(&self) -> f32 {
        self.primary_offset
    }

    /// Distance from the ellipse center to its focus, `sqrt(a² − b²)`.
    pub fn focal_offset(&self) -> f32 {
        (self.a * self.a - self.b * self.b).sqrt()
    }

    /// X coordinate of the ellipse center.
    pub fn center_x(&self) -> f32 {
        self.primary_offset + self.focal_offset()
    }

    /// Position of the primary body (the occupied focus).
    pub fn primary_position(&self) -> Vec3 {
        Vec3::new(self.primary_offset, 0.0, 0.0)
    }

    /// Point on the ellipse for the given phase. Motion is confined to y = 0.
    pub fn position_at(&self, phase: f32) -> Vec3 {
        let (sin, cos) = phase.sin_cos();
        Vec3::new(self.center_x() + self.a * cos, 0.0, self.b * sin)
    }

    /// Closed polyline along the orbit: `segments + 1` points, the last
    /// one coinciding with the first.
    pub fn sample_points(&self, segments: u32) -> Vec<Vec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| {
                let phase = if i == segments {
                    0.0
                } else {
                    TAU * i as f32 / segments as f32
                };
                self.position_at(phase)
            })
            .collect()
    }

    /// How far `point` is from satisfying the ellipse equation; zero on the orbit.
    pub fn residual(&self, point: Vec3) -> f32 {
        let u = (point.x - self.center_x()) / self.a;
        let v = point.z / self.b;
        u * u + v * v - 1.0
    }
}
