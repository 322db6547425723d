// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn test_deg_rad_round_trip() {
    assert_abs_diff_eq!(deg_to_rad(180.0), PI);
    assert_abs_diff_eq!(rad_to_deg(FRAC_PI_2), 90.0);
    assert_abs_diff_eq!(rad_to_deg(deg_to_rad(-33.25)), -33.25, epsilon = 1e-12);
}

#[test]
fn test_normalize_longitude() {
    assert_abs_diff_eq!(normalize_longitude(0.0), 0.0);
    assert_abs_diff_eq!(normalize_longitude(-90.0), 270.0);
    assert_abs_diff_eq!(normalize_longitude(180.0), 180.0);
    assert_abs_diff_eq!(normalize_longitude(-180.0), 180.0);
    assert_abs_diff_eq!(normalize_longitude(725.0), 5.0);
    assert_abs_diff_eq!(normalize_longitude(360.0), 0.0);
    // Must never hand back 360.
    assert!(normalize_longitude(-1e-20) < 360.0);
}

#[test]
fn test_longitude_compositions_are_identities() {
    for i in -179..=180 {
        let lon = i as f64 + 0.25_f64.min(180.0 - i as f64);
        assert_abs_diff_eq!(
            unconvert_longitude(normalize_longitude(lon)),
            lon,
            epsilon = 1e-10
        );
    }
    for i in 0..360 {
        let lon = i as f64 + 0.5;
        assert_abs_diff_eq!(
            normalize_longitude(unconvert_longitude(lon)),
            lon,
            epsilon = 1e-10
        );
    }
}

#[test]
fn test_lat_to_colatitude() {
    assert_abs_diff_eq!(lat_to_colatitude(0.0).unwrap(), FRAC_PI_2);
    assert_abs_diff_eq!(lat_to_colatitude(90.0).unwrap(), 0.0);
    assert_abs_diff_eq!(lat_to_colatitude(-90.0).unwrap(), PI);

    assert_eq!(lat_to_colatitude(90.5), Err(AngleError::Latitude(90.5)));
    assert_eq!(lat_to_colatitude(-91.0), Err(AngleError::Latitude(-91.0)));
    assert!(lat_to_colatitude(f64::NAN).is_err());
}

#[test]
fn test_colatitude_to_lat() {
    assert_abs_diff_eq!(colatitude_to_lat(FRAC_PI_2).unwrap(), 0.0);
    assert_abs_diff_eq!(colatitude_to_lat(0.0).unwrap(), 90.0);
    assert_abs_diff_eq!(colatitude_to_lat(PI).unwrap(), -90.0);
    assert!(colatitude_to_lat(-0.1).is_err());
    assert!(colatitude_to_lat(PI + 0.1).is_err());

    let lat = 43.65;
    assert_abs_diff_eq!(
        colatitude_to_lat(lat_to_colatitude(lat).unwrap()).unwrap(),
        lat,
        epsilon = 1e-12
    );
}

#[test]
fn test_lon_theta() {
    assert_abs_diff_eq!(lon_to_theta(-90.0).unwrap(), 1.5 * PI);
    assert_abs_diff_eq!(lon_to_theta(90.0).unwrap(), FRAC_PI_2);
    assert!(lon_to_theta(181.0).is_err());

    assert_abs_diff_eq!(theta_to_lon(1.5 * PI).unwrap(), -90.0);
    assert!(theta_to_lon(-0.5).is_err());
    assert!(theta_to_lon(7.0).is_err());
}

#[test]
fn test_spherical_to_cartesian() {
    let [x, y, z] = spherical_to_cartesian(2.0, 0.0, FRAC_PI_2).unwrap();
    assert_abs_diff_eq!(x, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(z, 0.0, epsilon = 1e-12);

    let [x, y, z] = spherical_to_cartesian(1.0, FRAC_PI_2, FRAC_PI_2).unwrap();
    assert_abs_diff_eq!(x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(y, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(z, 0.0, epsilon = 1e-12);

    let [x, y, z] = spherical_to_cartesian(3.0, 1.0, 0.0).unwrap();
    assert_abs_diff_eq!(x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(z, 3.0, epsilon = 1e-12);
}

#[test]
fn test_spherical_to_cartesian_rejects_bad_angles() {
    assert_eq!(
        spherical_to_cartesian(1.0, 0.0, -0.1),
        Err(AngleError::Phi(-0.1))
    );
    assert!(spherical_to_cartesian(1.0, 0.0, PI + 1e-6).is_err());
    // Theta is half-open.
    assert_eq!(
        spherical_to_cartesian(1.0, TAU, 0.5),
        Err(AngleError::Theta(TAU))
    );
    assert!(spherical_to_cartesian(1.0, -1e-3, 0.5).is_err());
}

#[test]
fn test_wrap_tau() {
    assert_abs_diff_eq!(wrap_tau(-FRAC_PI_2), 1.5 * PI);
    assert_abs_diff_eq!(wrap_tau(TAU + 1.0), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(wrap_tau(TAU), 0.0);
    assert!(wrap_tau(-1e-20) < TAU);
}

#[test]
fn test_haversine() {
    assert_abs_diff_eq!(haversine(0.0, 0.0, 0.0, 0.0), 0.0);
    assert_abs_diff_eq!(haversine(0.0, 0.0, 0.0, FRAC_PI_2), FRAC_PI_2, epsilon = 1e-12);
    assert_abs_diff_eq!(haversine(FRAC_PI_2, 0.0, -FRAC_PI_2, 0.0), PI, epsilon = 1e-12);
}
