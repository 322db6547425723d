// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;
use crate::constants::{EARTH_RADIUS_METRES, FRAC_PI_2};

fn motion(speed: f64, bearing: f64, lat: f64, lon: f64) -> GreatCircleMotion {
    GreatCircleMotion::new(speed, EARTH_RADIUS_METRES, 10000.0, bearing, lat, lon).unwrap()
}

#[test]
fn test_stationary_aircraft_does_not_move() {
    let m = motion(0.0, 123.0, -33.9, 151.2);
    let (theta0, phi0) = m.position(0.0, PolePolicy::Freeze).unwrap();
    for t in [5.0, 60.0, 3600.0, 86400.0] {
        let (theta, phi) = m.position(t, PolePolicy::Freeze).unwrap();
        assert_abs_diff_eq!(theta, theta0);
        assert_abs_diff_eq!(phi, phi0);
    }
    assert_abs_diff_eq!(phi0, (90.0_f64 + 33.9).to_radians(), epsilon = 1e-12);
    assert_abs_diff_eq!(theta0, 151.2_f64.to_radians(), epsilon = 1e-12);
}

#[test]
fn test_initial_position() {
    let m = motion(250.0, 45.0, 10.0, -90.0);
    assert_abs_diff_eq!(m.phi(0.0), 80_f64.to_radians(), epsilon = 1e-12);
    assert_abs_diff_eq!(
        m.theta(0.0, PolePolicy::Freeze).unwrap(),
        270_f64.to_radians(),
        epsilon = 1e-12
    );
}

#[test]
fn test_heading_north_decreases_colatitude() {
    let m = motion(250.0, 0.0, 0.0, 0.0);
    let rate = 250.0 / (EARTH_RADIUS_METRES + 10000.0);
    assert_abs_diff_eq!(m.phi_angular_speed(), rate);
    assert_abs_diff_eq!(m.phi(100.0), FRAC_PI_2 - 100.0 * rate, epsilon = 1e-12);
    // No east-west component.
    assert_abs_diff_eq!(m.theta(100.0, PolePolicy::Freeze).unwrap(), 0.0);
}

#[test]
fn test_heading_south_increases_colatitude() {
    let m = motion(411.5552, 180.0, 0.0, 0.0);
    assert!(m.phi(5.0) > FRAC_PI_2);
    assert!(m.phi(10.0) > m.phi(5.0));
}

#[test]
fn test_heading_east_along_the_equator() {
    let m = motion(250.0, 90.0, 0.0, 0.0);
    let rate = 250.0 / (EARTH_RADIUS_METRES + 10000.0);
    assert_abs_diff_eq!(m.phi(1000.0), FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(
        m.theta_angular_speed(1000.0, PolePolicy::Freeze).unwrap(),
        rate,
        epsilon = 1e-15
    );
    assert_abs_diff_eq!(
        m.theta(1000.0, PolePolicy::Freeze).unwrap(),
        1000.0 * rate,
        epsilon = 1e-12
    );

    // Heading west wraps below zero longitude.
    let m = motion(250.0, 270.0, 0.0, 0.0);
    assert_abs_diff_eq!(
        m.theta(1000.0, PolePolicy::Freeze).unwrap(),
        TAU - 1000.0 * rate,
        epsilon = 1e-12
    );
}

#[test]
fn test_crossing_the_north_pole_flips_longitude() {
    let m = motion(250.0, 0.0, 89.9, 10.0);
    let t = 100.0;
    assert!(m.phi_signed(t) < 0.0);
    let expected_phi = 100.0 * 250.0 / (EARTH_RADIUS_METRES + 10000.0) - 0.1_f64.to_radians();
    assert_abs_diff_eq!(m.phi(t), expected_phi, epsilon = 1e-12);
    assert_abs_diff_eq!(
        m.theta(t, PolePolicy::Freeze).unwrap(),
        190_f64.to_radians(),
        epsilon = 1e-12
    );
}

#[test]
fn test_pole_policy() {
    // Moving east while sitting exactly on the pole.
    let m = motion(250.0, 90.0, 90.0, 0.0);
    assert_abs_diff_eq!(m.theta_angular_speed(0.0, PolePolicy::Freeze).unwrap(), 0.0);
    assert_abs_diff_eq!(m.theta(0.0, PolePolicy::Freeze).unwrap(), 0.0);
    assert_eq!(
        m.theta(0.0, PolePolicy::Error),
        Err(PropagationError::Singularity { elapsed: 0.0 })
    );

    // Stationary at the pole is fine either way.
    let m = motion(0.0, 90.0, 90.0, 0.0);
    assert!(m.theta(0.0, PolePolicy::Error).is_ok());
}

#[test]
fn test_outputs_stay_in_range() {
    let m = motion(300.0, 37.0, 45.0, 179.0);
    for i in 0..200 {
        let t = i as f64 * 997.0;
        let (theta, phi) = m.position(t, PolePolicy::Freeze).unwrap();
        assert!((0.0..TAU).contains(&theta), "theta {theta} at {t}");
        assert!((0.0..=PI).contains(&phi), "phi {phi} at {t}");
    }
}

#[test]
fn test_bad_inputs() {
    assert_eq!(
        GreatCircleMotion::new(-1.0, EARTH_RADIUS_METRES, 0.0, 0.0, 0.0, 0.0),
        Err(PropagationError::Speed(-1.0))
    );
    assert!(matches!(
        GreatCircleMotion::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0),
        Err(PropagationError::Radius { .. })
    ));
    assert_eq!(
        GreatCircleMotion::new(1.0, EARTH_RADIUS_METRES, 0.0, 0.0, 91.0, 0.0),
        Err(PropagationError::Latitude(91.0))
    );
    assert_eq!(
        GreatCircleMotion::new(1.0, EARTH_RADIUS_METRES, 0.0, 0.0, 0.0, 181.0),
        Err(PropagationError::Longitude(181.0))
    );
    assert!(GreatCircleMotion::new(1.0, EARTH_RADIUS_METRES, 0.0, f64::NAN, 0.0, 0.0).is_err());
}

#[test]
fn test_pole_policy_strings() {
    use std::str::FromStr;

    assert_eq!(PolePolicy::default(), PolePolicy::Freeze);
    assert_eq!(PolePolicy::from_str("error").unwrap(), PolePolicy::Error);
    assert_eq!(PolePolicy::Freeze.to_string(), "freeze");
}
