//! Per-frame orbit update
//!
//! Phase is derived from the simulation clock on every tick, never
//! integrated, so the body stays exactly on the ellipse. Spin advances by a
//! fixed step per tick and therefore depends on the display refresh rate.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::orbital::body::{AttachedToBody, OrbitalBody};
use crate::orbital::ellipse::EllipticalOrbit;
use crate::orbital::time::SimulationClock;

/// Kinematic parameters for the orbiting body.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct OrbitalFrameUpdater {
    /// Seconds of simulation time per radian of phase.
    pub time_scale: f32,
    /// Self-rotation added per tick, in radians.
    pub spin_step: f32,
}

impl Default for OrbitalFrameUpdater {
    fn default() -> Self {
        Self {
            time_scale: 10.0,
            spin_step: 0.04,
        }
    }
}

impl OrbitalFrameUpdater {
    /// Orbital phase for an elapsed time, in `(-2π, 0]`. The negative sign
    /// makes the orbit retrograde when seen from +Y. Reduced in f64 so the
    /// f32 phase keeps full resolution however long the clock has run.
    pub fn phase_at(&self, elapsed_secs: f64) -> f32 {
        let turns = elapsed_secs / self.time_scale as f64;
        (-turns.rem_euclid(std::f64::consts::TAU)) as f32
    }

    /// Advance `body` by one frame. Returns false and leaves the body
    /// untouched while the clock is paused.
    pub fn tick(
        &self,
        body: &mut OrbitalBody,
        clock: &SimulationClock,
        orbit: &EllipticalOrbit,
    ) -> bool {
        if !clock.running {
            return false;
        }

        body.phase = self.phase_at(clock.elapsed_secs);
        body.position = orbit.position_at(body.phase);
        body.spin = (body.spin + self.spin_step).rem_euclid(TAU);
        debug_assert!(orbit.residual(body.position).abs() < 1e-3);
        true
    }
}

/// Move the orbiting body and copy its position to attached decorations.
pub fn update_orbiting_body(
    updater: Res<OrbitalFrameUpdater>,
    clock: Res<SimulationClock>,
    orbit: Res<EllipticalOrbit>,
    mut bodies: Query<(&mut OrbitalBody, &mut Transform), Without<AttachedToBody>>,
    mut attached: Query<&mut Transform, (With<AttachedToBody>, Without<OrbitalBody>)>,
) {
    let Ok((mut body, mut transform)) = bodies.single_mut() else {
        return;
    };

    if !updater.tick(&mut body, &clock, &orbit) {
        return;
    }

    transform.translation = body.position;
    transform.rotation = body.rotation();

    for mut decoration in &mut attached {
        decoration.translation = body.position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn earth_orbit() -> EllipticalOrbit {
        EllipticalOrbit::new(21.0, 10.0, 5.0).expect("valid orbit")
    }

    fn running(elapsed_secs: f64) -> SimulationClock {
        SimulationClock {
            elapsed_secs,
            running: true,
        }
    }

    #[test]
    fn test_initial_tick_at_zero_time() {
        let orbit = earth_orbit();
        let updater = OrbitalFrameUpdater::default();
        let mut body = OrbitalBody::new(Vec3::ZERO, 0.0);

        assert!(updater.tick(&mut body, &running(0.0), &orbit));
        assert_eq!(body.phase, 0.0);
        assert!((body.position.x - (5.0 + 341.0_f32.sqrt() + 21.0)).abs() < EPS);
        assert!(body.position.z.abs() < EPS);
    }

    #[test]
    fn test_phase_is_retrograde() {
        let updater = OrbitalFrameUpdater::default();
        assert!((updater.phase_at(10.0) + 1.0).abs() < 1e-6);
        assert!(updater.phase_at(20.0) < updater.phase_at(10.0));

        // A quarter turn later the body sits at negative z.
        let orbit = earth_orbit();
        let mut body = OrbitalBody::new(Vec3::ZERO, 0.0);
        let quarter = std::f64::consts::FRAC_PI_2 * 10.0;
        updater.tick(&mut body, &running(quarter), &orbit);
        assert!((body.position.z + 10.0).abs() < EPS);
        assert!((body.position.x - orbit.center_x()).abs() < EPS);
    }

    #[test]
    fn test_phase_stays_bounded() {
        let updater = OrbitalFrameUpdater::default();
        for elapsed in [0.0, 62.8, 1e3, 1e6, 1e9] {
            let phase = updater.phase_at(elapsed);
            assert!(phase <= 0.0 && phase > -TAU, "phase {} at t = {}", phase, elapsed);
        }
    }

    #[test]
    fn test_phase_advances_every_tick_after_long_run() {
        let orbit = earth_orbit();
        let updater = OrbitalFrameUpdater::default();
        let dt = 1.0 / 60.0;
        let one_tick_phase = (dt / updater.time_scale as f64) as f32;
        let mut body = OrbitalBody::new(Vec3::ZERO, 0.0);
        let mut clock = running(1e6);
        updater.tick(&mut body, &clock, &orbit);

        for _ in 0..600 {
            let previous = body;
            clock.advance(dt);
            updater.tick(&mut body, &clock, &orbit);

            let step = (previous.phase - body.phase).rem_euclid(TAU);
            assert!(step > 0.0, "phase stalled at t = {}", clock.elapsed_secs);
            assert!(
                (step - one_tick_phase).abs() < 1e-5,
                "phase step {} at t = {}",
                step,
                clock.elapsed_secs
            );
            let max_step = orbit.semi_major_axis() * one_tick_phase;
            assert!(previous.position.distance(body.position) <= max_step + EPS);
        }
    }

    #[test]
    fn test_position_stays_on_ellipse() {
        let orbit = earth_orbit();
        let updater = OrbitalFrameUpdater::default();
        let mut body = OrbitalBody::new(Vec3::ZERO, 0.0);
        let mut clock = running(0.0);
        for _ in 0..5_000 {
            clock.advance(1.0 / 60.0);
            updater.tick(&mut body, &clock, &orbit);
            assert!(orbit.residual(body.position).abs() < 1e-4);
            assert_eq!(body.position.y, 0.0);
        }
    }

    #[test]
    fn test_pause_freezes_position_and_spin() {
        let orbit = earth_orbit();
        let updater = OrbitalFrameUpdater::default();
        let mut body = OrbitalBody::new(Vec3::ZERO, 0.0);
        let mut clock = running(0.0);
        for _ in 0..30 {
            clock.advance(1.0 / 60.0);
            updater.tick(&mut body, &clock, &orbit);
        }

        clock.set_running(false);
        let frozen = body;
        for _ in 0..30 {
            clock.advance(1.0 / 60.0);
            assert!(!updater.tick(&mut body, &clock, &orbit));
        }
        assert_eq!(body, frozen);
    }

    #[test]
    fn test_resume_has_no_discontinuity() {
        let orbit = earth_orbit();
        let updater = OrbitalFrameUpdater::default();
        let mut body = OrbitalBody::new(Vec3::ZERO, 0.0);
        let dt = 1.0 / 60.0;
        let mut clock = running(0.0);
        for _ in 0..120 {
            clock.advance(dt);
            updater.tick(&mut body, &clock, &orbit);
        }
        let before_pause = body;

        clock.set_running(false);
        for _ in 0..600 {
            clock.advance(dt);
            updater.tick(&mut body, &clock, &orbit);
        }

        clock.set_running(true);
        clock.advance(dt);
        updater.tick(&mut body, &clock, &orbit);

        let one_tick_phase = (dt / updater.time_scale as f64) as f32;
        assert!((before_pause.phase - body.phase).abs() <= one_tick_phase + 1e-6);
        // |d position / d phase| is at most a.
        let max_step = orbit.semi_major_axis() * one_tick_phase;
        assert!(before_pause.position.distance(body.position) <= max_step + EPS);
    }

    #[test]
    fn test_spin_advances_fixed_step_per_tick() {
        let orbit = earth_orbit();
        let updater = OrbitalFrameUpdater::default();
        let mut body = OrbitalBody::new(Vec3::ZERO, 0.0);
        let mut clock = running(0.0);
        for _ in 0..1_000 {
            let previous = body.spin;
            clock.advance(1.0 / 60.0);
            updater.tick(&mut body, &clock, &orbit);
            let delta = (body.spin - previous).rem_euclid(TAU);
            assert!(delta > 0.0);
            assert!((delta - updater.spin_step).abs() < 1e-4);
            assert!((0.0..TAU).contains(&body.spin));
        }
    }

    #[test]
    fn test_spin_ignores_frame_delta() {
        // Spin is per tick, not per second: a slow frame and a fast frame
        // rotate the body by the same amount.
        let orbit = earth_orbit();
        let updater = OrbitalFrameUpdater::default();
        let mut fast = OrbitalBody::new(Vec3::ZERO, 0.0);
        let mut slow = OrbitalBody::new(Vec3::ZERO, 0.0);
        updater.tick(&mut fast, &running(1.0 / 144.0), &orbit);
        updater.tick(&mut slow, &running(1.0 / 30.0), &orbit);
        assert_eq!(fast.spin, slow.spin);
        assert_ne!(fast.phase, slow.phase);
    }

    #[test]
    fn test_system_moves_attached_decorations_same_tick() {
        let orbit = earth_orbit();
        let mut app = App::new();
        app.insert_resource(orbit)
            .insert_resource(OrbitalFrameUpdater::default())
            .insert_resource(running(7.5))
            .add_systems(Update, update_orbiting_body);

        let body = app
            .world_mut()
            .spawn((OrbitalBody::new(Vec3::ZERO, 0.3), Transform::default()))
            .id();
        let plane = app
            .world_mut()
            .spawn((AttachedToBody, Transform::default()))
            .id();
        let axis = app
            .world_mut()
            .spawn((
                AttachedToBody,
                Transform::from_rotation(Quat::from_rotation_z(0.3)),
            ))
            .id();

        for step in 0..3 {
            app.world_mut().resource_mut::<SimulationClock>().elapsed_secs += 0.5 * step as f64;
            app.update();

            let world = app.world();
            let body_translation = world.get::<Transform>(body).unwrap().translation;
            assert_eq!(body_translation, world.get::<OrbitalBody>(body).unwrap().position);
            assert_eq!(world.get::<Transform>(plane).unwrap().translation, body_translation);
            assert_eq!(world.get::<Transform>(axis).unwrap().translation, body_translation);
        }

        // Decorations keep their own orientation.
        let axis_rotation = app.world().get::<Transform>(axis).unwrap().rotation;
        assert!(axis_rotation.angle_between(Quat::from_rotation_z(0.3)) < 1e-6);
    }

    #[test]
    fn test_system_idle_while_paused() {
        let mut app = App::new();
        app.insert_resource(earth_orbit())
            .insert_resource(OrbitalFrameUpdater::default())
            .insert_resource(SimulationClock {
                elapsed_secs: 12.0,
                running: false,
            })
            .add_systems(Update, update_orbiting_body);

        let body = app
            .world_mut()
            .spawn((OrbitalBody::new(Vec3::ONE, 0.0), Transform::default()))
            .id();
        app.update();

        assert_eq!(app.world().get::<Transform>(body).unwrap().translation, Vec3::ZERO);
        assert_eq!(app.world().get::<OrbitalBody>(body).unwrap().spin, 0.0);
    }
}
