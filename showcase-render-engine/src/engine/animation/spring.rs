use bevy::math::NormedVectorSpace;
use bevy::prelude::*;
use constants::motion::SpringProfile;

/// Integration step for the spring ODE, in seconds.
const STEP_SECS: f32 = 0.001;
/// Longer frame gaps (tab in background, debugger) are clamped to this.
const MAX_FRAME_SECS: f32 = 0.1;
const REST_DISTANCE: f32 = 1e-3;
const REST_SPEED: f32 = 1e-3;

#[derive(Debug, Clone, Copy)]
struct PendingTarget<T> {
    target: T,
    remaining: f32,
}

/// Damped spring that chases a target value.
///
/// Retargeting keeps the current value and velocity, so a change of target
/// mid-flight bends the path instead of restarting it.
#[derive(Debug, Clone, Copy)]
pub struct Spring<T: NormedVectorSpace> {
    value: T,
    velocity: T,
    target: T,
    profile: SpringProfile,
    pending: Option<PendingTarget<T>>,
}

impl<T: NormedVectorSpace> Spring<T> {
    /// Spring at rest on `value`.
    pub fn new(value: T, profile: SpringProfile) -> Self {
        Self {
            value,
            velocity: T::ZERO,
            target: value,
            profile,
            pending: None,
        }
    }

    pub fn value(&self) -> T {
        self.value
    }

    /// Target currently being chased. A delayed target only shows up here
    /// once its delay has elapsed.
    pub fn target(&self) -> T {
        self.target
    }

    pub fn has_pending_target(&self) -> bool {
        self.pending.is_some()
    }

    pub fn set_target(&mut self, target: T) {
        self.pending = None;
        self.target = target;
    }

    /// Switch to `target` after `delay` seconds of simulated time.
    pub fn set_target_after(&mut self, target: T, delay: f32) {
        if delay > 0.0 {
            self.pending = Some(PendingTarget {
                target,
                remaining: delay,
            });
        } else {
            self.set_target(target);
        }
    }

    pub fn is_resting(&self) -> bool {
        self.pending.is_none()
            && (self.value - self.target).norm() < REST_DISTANCE
            && self.velocity.norm() < REST_SPEED
    }

    /// Advance the simulation by `dt` seconds of frame time.
    pub fn step(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let mut remaining = dt.min(MAX_FRAME_SECS);

        if let Some(mut pending) = self.pending.take() {
            if pending.remaining > remaining {
                pending.remaining -= remaining;
                self.integrate(remaining);
                self.pending = Some(pending);
                return;
            }
            self.integrate(pending.remaining);
            remaining -= pending.remaining;
            self.target = pending.target;
        }

        self.integrate(remaining);
    }

    fn integrate(&mut self, dt: f32) {
        if dt <= 0.0 || self.is_resting() {
            return;
        }

        let steps = (dt / STEP_SECS).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let SpringProfile {
            mass,
            tension,
            friction,
        } = self.profile;

        for _ in 0..steps {
            let displacement = self.value - self.target;
            let force = displacement * -tension - self.velocity * friction;
            self.velocity = self.velocity + force * (h / mass);
            self.value = self.value + self.velocity * h;
        }

        if (self.value - self.target).norm() < REST_DISTANCE && self.velocity.norm() < REST_SPEED {
            self.value = self.target;
            self.velocity = T::ZERO;
        }
    }
}

/// Spring-driven translation and uniform scale for an entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct SpringTransform {
    pub translation: Spring<Vec3>,
    pub scale: Spring<f32>,
}

impl SpringTransform {
    pub fn at(translation: Vec3, scale: f32, profile: SpringProfile) -> Self {
        Self {
            translation: Spring::new(translation, profile),
            scale: Spring::new(scale, profile),
        }
    }

    pub fn retarget(&mut self, translation: Vec3, scale: f32) {
        self.translation.set_target(translation);
        self.scale.set_target(scale);
    }

    pub fn retarget_after(&mut self, translation: Vec3, scale: f32, delay: f32) {
        self.translation.set_target_after(translation, delay);
        self.scale.set_target_after(scale, delay);
    }

    pub fn is_resting(&self) -> bool {
        self.translation.is_resting() && self.scale.is_resting()
    }

    pub fn step(&mut self, dt: f32) {
        self.translation.step(dt);
        self.scale.step(dt);
    }

    /// Transform at the current spring values, rotation left as identity.
    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.translation.value())
            .with_scale(Vec3::splat(self.scale.value()))
    }
}

// Writes spring state into the entity transform every frame it is moving
pub fn step_spring_transforms(
    time: Res<Time>,
    mut q: Query<(&mut SpringTransform, &mut Transform)>,
) {
    let dt = time.delta_secs();
    for (mut motion, mut transform) in &mut q {
        if motion.is_resting() {
            continue;
        }
        motion.step(dt);
        let next = motion.transform();
        transform.translation = next.translation;
        transform.scale = next.scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::motion::{INTRO, MOLASSES};

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn new_spring_is_at_rest_on_its_value() {
        let spring = Spring::new(3.0_f32, MOLASSES);
        assert!(spring.is_resting());
        assert_eq!(spring.value(), 3.0);
        assert_eq!(spring.target(), 3.0);
    }

    #[test]
    fn intro_profile_approaches_target_without_overshoot() {
        let mut spring = Spring::new(0.0_f32, INTRO);
        spring.set_target(1.0);

        let mut previous = spring.value();
        for _ in 0..180 {
            spring.step(FRAME);
            let value = spring.value();
            assert!(value >= previous - 1e-6, "went backwards: {previous} -> {value}");
            assert!(value <= 1.0 + 1e-4, "overshot: {value}");
            previous = value;
        }
        assert!((spring.value() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn molasses_settles_within_a_few_seconds() {
        let mut spring = Spring::new(20.0_f32, MOLASSES);
        spring.set_target(100.0);

        for _ in 0..(3.0 / FRAME) as usize {
            spring.step(FRAME);
        }
        assert!((spring.value() - 100.0).abs() < 1.0);

        // still moving after a single frame: no snap
        let mut fresh = Spring::new(20.0_f32, MOLASSES);
        fresh.set_target(100.0);
        fresh.step(FRAME);
        assert!(fresh.value() > 20.0 && fresh.value() < 30.0);
    }

    #[test]
    fn delayed_target_waits_then_applies() {
        let mut spring = Spring::new(0.0_f32, INTRO);
        spring.set_target_after(1.0, 0.2);

        spring.step(0.1);
        assert_eq!(spring.target(), 0.0);
        assert_eq!(spring.value(), 0.0);
        assert!(spring.has_pending_target());
        assert!(!spring.is_resting());

        spring.step(0.05);
        assert_eq!(spring.target(), 0.0);
        assert!(spring.has_pending_target());

        // 50ms of delay left, then 50ms of motion
        spring.step(0.1);
        assert_eq!(spring.target(), 1.0);
        assert!(!spring.has_pending_target());
        assert!(spring.value() > 0.0);
    }

    #[test]
    fn long_frames_are_clamped_while_delayed() {
        let mut spring = Spring::new(0.0_f32, INTRO);
        spring.set_target_after(1.0, 0.2);

        // a 0.3s frame only counts as 0.1s
        spring.step(0.3);
        assert!(spring.has_pending_target());
        assert_eq!(spring.value(), 0.0);

        // ~0.1s of delay remains
        spring.step(0.05);
        assert!(spring.has_pending_target());
        assert_eq!(spring.target(), 0.0);
    }

    #[test]
    fn retarget_mid_flight_is_continuous() {
        let mut spring = Spring::new(Vec3::ZERO, MOLASSES);
        spring.set_target(Vec3::new(10.0, 0.0, 0.0));
        for _ in 0..20 {
            spring.step(FRAME);
        }
        let before = spring.value();

        spring.set_target(Vec3::new(-10.0, 5.0, 0.0));
        assert_eq!(spring.value(), before);

        spring.step(FRAME);
        assert!(spring.value().distance(before) < 1.0);
    }

    #[test]
    fn non_finite_or_negative_dt_is_ignored() {
        let mut spring = Spring::new(0.0_f32, INTRO);
        spring.set_target(1.0);
        spring.step(f32::NAN);
        spring.step(-1.0);
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn spring_transform_reports_uniform_scale() {
        let mut motion = SpringTransform::at(Vec3::new(1.0, 2.0, 0.0), 20.0, MOLASSES);
        let transform = motion.transform();
        assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 0.0));
        assert_eq!(transform.scale, Vec3::splat(20.0));

        motion.retarget(Vec3::ZERO, 0.0);
        assert!(!motion.is_resting());
    }
}
