//! UI state management

use bevy::prelude::*;

/// Decorations that the control panel can show or hide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Guide {
    EclipticPlane,
    EquatorPlane,
    SunAxis,
    EarthAxis,
    Orbit,
}

impl Guide {
    pub fn label(self) -> &'static str {
        match self {
            Guide::EclipticPlane => "Show ecliptic plane",
            Guide::EquatorPlane => "Show equator plane",
            Guide::SunAxis => "Show sun axis",
            Guide::EarthAxis => "Show earth axis",
            Guide::Orbit => "Show orbit",
        }
    }
}

/// Tags a decoration entity with the guide flag that controls it.
#[derive(Component, Clone, Copy, Debug)]
pub struct GuideKind(pub Guide);

/// Main UI state resource
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct UIState {
    pub show_ecliptic_plane: bool,
    pub show_equator_plane: bool,
    pub show_sun_axis: bool,
    pub show_earth_axis: bool,
    pub show_orbit: bool,
    /// Mirrors the simulation clock so the panel can reflect keyboard toggles.
    pub running: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            show_ecliptic_plane: true,
            show_equator_plane: true,
            show_sun_axis: true,
            show_earth_axis: true,
            show_orbit: true,
            running: false,
        }
    }
}

impl UIState {
    pub fn is_visible(&self, guide: Guide) -> bool {
        match guide {
            Guide::EclipticPlane => self.show_ecliptic_plane,
            Guide::EquatorPlane => self.show_equator_plane,
            Guide::SunAxis => self.show_sun_axis,
            Guide::EarthAxis => self.show_earth_axis,
            Guide::Orbit => self.show_orbit,
        }
    }

    pub fn set_visible(&mut self, guide: Guide, visible: bool) {
        let flag = match guide {
            Guide::EclipticPlane => &mut self.show_ecliptic_plane,
            Guide::EquatorPlane => &mut self.show_equator_plane,
            Guide::SunAxis => &mut self.show_sun_axis,
            Guide::EarthAxis => &mut self.show_earth_axis,
            Guide::Orbit => &mut self.show_orbit,
        };
        *flag = visible;
    }
}
