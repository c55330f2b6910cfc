//! Shared angle arithmetic for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-17 % 360 + 360 rounds to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest-arc separation between two longitudes, in [0, 180].
pub fn angular_distance(a_deg: f64, b_deg: f64) -> f64 {
    let diff = (normalize_360(a_deg) - normalize_360(b_deg)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}
