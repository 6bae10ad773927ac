//! Low-precision apparent solar longitude.
//!
//! Geometric mean longitude plus equation of center, corrected for
//! nutation and aberration. Accuracy is about 0.01° over 1900–2100, which
//! places a solar term within a few minutes of the published instant.
//!
//! Source: J. Meeus, Astronomical Algorithms (2nd ed.), ch. 25,
//! "low accuracy" method.

use crate::julian::centuries_since_j2000;

/// Normalize an angle to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, +180].
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Apparent geocentric ecliptic longitude of the Sun in degrees [0, 360).
///
/// `jd` is a Julian Date; UTC is accepted in place of TT.
pub fn apparent_longitude_deg(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let t2 = t * t;

    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t2;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t2).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1_934.136 * t).to_radians();

    normalize_360(l0 + c - 0.00569 - 0.00478 * omega.sin())
}
