// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use approx::assert_abs_diff_eq;

use super::*;

#[test]
fn test_fov_angular_diameter() {
    // 50 mm sensor, 6000 mm focal length.
    let d = fov_angular_diameter(6000.0, 50.0, 1.0).unwrap();
    assert_abs_diff_eq!(d, 0.477464829275686, epsilon = 1e-12);

    // A 2x barlow halves the field.
    let oc = OpticalConfig::new(6000.0, 50.0, 2.0).unwrap();
    assert_abs_diff_eq!(oc.fov_angular_diameter().unwrap(), d / 2.0, epsilon = 1e-12);

    // A full-frame camera on a short lens.
    let d = fov_angular_diameter(35.0, 36.0, 1.0).unwrap();
    assert_abs_diff_eq!(d, 58.932801784884674, epsilon = 1e-10);
}

#[test]
fn test_fov_angular_diameter_rejects_bad_optics() {
    assert_eq!(
        fov_angular_diameter(0.0, 50.0, 1.0),
        Err(FovError::OpticalParameter {
            name: "focal length",
            value: 0.0
        })
    );
    assert_eq!(
        fov_angular_diameter(6000.0, 50.0, 0.0),
        Err(FovError::OpticalParameter {
            name: "barlow factor",
            value: 0.0
        })
    );
    assert!(fov_angular_diameter(6000.0, -1.0, 1.0).is_err());
    assert!(OpticalConfig::new(f64::NAN, 50.0, 1.0).is_err());
}

#[test]
fn test_angular_distance_to_self_is_zero() {
    for (ra, dec) in [(0.0, 0.0), (19.0, 14.63), (359.9, -89.0), (180.0, 90.0)] {
        assert_abs_diff_eq!(angular_distance(ra, dec, ra, dec).unwrap(), 0.0);
    }
}

#[test]
fn test_angular_distance() {
    assert_abs_diff_eq!(
        angular_distance(0.0, 0.0, 90.0, 0.0).unwrap(),
        90.0,
        epsilon = 1e-10
    );
    assert_abs_diff_eq!(
        angular_distance(0.0, 90.0, 123.0, -90.0).unwrap(),
        180.0,
        epsilon = 1e-10
    );
    // Across RA = 0.
    assert_abs_diff_eq!(
        angular_distance(359.0, 0.0, 1.0, 0.0).unwrap(),
        2.0,
        epsilon = 1e-10
    );
    // RA = 360 is accepted.
    assert!(angular_distance(360.0, 0.0, 0.0, 0.0).is_ok());
}

#[test]
fn test_angular_distance_out_of_bounds() {
    assert_eq!(angular_distance(-1.0, 0.0, 0.0, 0.0), Err(FovError::Ra(-1.0)));
    assert_eq!(angular_distance(0.0, 0.0, 361.0, 0.0), Err(FovError::Ra(361.0)));
    assert_eq!(angular_distance(0.0, 91.0, 0.0, 0.0), Err(FovError::Dec(91.0)));
    assert_eq!(
        angular_distance(0.0, 0.0, 0.0, -90.5),
        Err(FovError::Dec(-90.5))
    );
}

#[test]
fn test_intersection_along_paths() {
    let fov = 4.77464829;

    // A path heading to the centre of the field intersects it.
    let centre = (0.0, 5.0);
    let intersects = (0..=50)
        .map(|i| i as f64 * 0.1)
        .any(|dec| is_intersecting(0.0, dec, centre.0, centre.1, fov).unwrap());
    assert!(intersects);

    // This one never gets close enough.
    let centre = (10.0, 0.0);
    let intersects = (0..=100)
        .map(|i| 10.0 + i as f64 * 0.1)
        .any(|dec| is_intersecting(10.0, dec, centre.0, centre.1, fov).unwrap());
    assert!(!intersects);
}

#[test]
fn test_intersection_is_symmetric() {
    let fov = 4.77464829;
    let points = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (359.0, -1.0), (45.0, 60.0)];
    for &(ra1, dec1) in &points {
        for &(ra2, dec2) in &points {
            assert_eq!(
                is_intersecting(ra1, dec1, ra2, dec2, fov).unwrap(),
                is_intersecting(ra2, dec2, ra1, dec1, fov).unwrap()
            );
        }
    }
}

#[test]
fn test_intersection_is_strict() {
    // Exactly on the edge is outside.
    let d = angular_distance(0.0, 0.0, 3.0, 4.0).unwrap();
    assert!(!is_intersecting(0.0, 0.0, 3.0, 4.0, 2.0 * d).unwrap());
    assert!(is_intersecting(0.0, 0.0, 3.0, 4.0, 2.0 * d + 1e-9).unwrap());
    assert!(is_intersecting(0.0, 0.0, 0.0, 0.999, 2.0).unwrap());
    assert!(is_intersecting(0.0, 0.0, 0.0, 0.0, 0.1).unwrap());
    assert!(is_intersecting(0.0, 0.0, 0.0, 0.0, 0.0).is_err());
}
