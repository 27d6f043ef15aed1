//! Critically damped smoothing for scalars and angles.
//!
//! This is the usual spring-damper approximation with the exponential
//! replaced by a rational fit, which stays stable for any `delta` and never
//! overshoots the target.

/// Moves `current` towards `target`, updating `velocity` in place.
///
/// `smooth_time` is roughly the time taken to reach the target. A zero or
/// negative `delta` leaves everything untouched.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    delta: f32,
) -> f32 {
    if delta <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(1e-4);
    let omega = 2.0 / smooth_time;
    let x = omega * delta;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * delta;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Clamp if we went past the target.
    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    output
}

/// Shortest signed difference from `current` to `target`, in (-180, 180].
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// [`smooth_damp`] for angles in degrees, always taking the short way round.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    delta: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_angle_takes_short_way() {
        assert_eq!(delta_angle(0.0, 90.0), 90.0);
        assert_eq!(delta_angle(10.0, 350.0), -20.0);
        assert_eq!(delta_angle(350.0, 10.0), 20.0);
        assert_eq!(delta_angle(0.0, -90.0), -90.0);
    }

    #[test]
    fn converges_monotonically_without_overshoot() {
        let mut velocity = 0.0;
        let mut heading = 0.0;
        let mut previous = heading;
        for _ in 0..100 {
            heading = smooth_damp_angle(heading, 90.0, &mut velocity, 0.1, 0.02);
            assert!(heading >= previous, "{heading} < {previous}");
            assert!(heading <= 90.0, "overshot to {heading}");
            previous = heading;
        }
        assert!((heading - 90.0).abs() < 0.01);
    }

    #[test]
    fn converges_across_the_wrap_point() {
        let mut velocity = 0.0;
        let mut heading = 170.0;
        for _ in 0..100 {
            heading = smooth_damp_angle(heading, -170.0, &mut velocity, 0.1, 0.02);
        }
        assert!(delta_angle(heading, -170.0).abs() < 0.01);
        // went through 180 rather than back through 0
        assert!(heading > 170.0);
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut velocity = 5.0;
        assert_eq!(smooth_damp(1.0, 2.0, &mut velocity, 0.1, 0.0), 1.0);
        assert_eq!(velocity, 5.0);
    }
}
