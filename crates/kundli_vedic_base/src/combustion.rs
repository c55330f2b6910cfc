//! Combustion (Asta) detection for grahas.
//!
//! A graha is combust when it is too close to the Sun. Only the five
//! tara grahas (Mercury, Venus, Mars, Jupiter, Saturn) are checked; the
//! luminaries and the lunar nodes are never combust.

use crate::graha::Graha;
use crate::util::angular_distance;

/// Default combustion orb in degrees from the Sun.
pub const COMBUSTION_ORB_DEG: f64 = 8.0;

/// Whether the combustion check applies to this graha at all.
pub const fn can_combust(graha: Graha) -> bool {
    matches!(
        graha,
        Graha::Buddh | Graha::Shukra | Graha::Mangal | Graha::Guru | Graha::Shani
    )
}

/// Check combustion against an explicit orb.
///
/// Uses shortest-arc distance on the ecliptic circle. A graha at exactly the
/// orb distance is **not** combust (strict less-than).
pub fn is_combust_within(graha: Graha, graha_lon: f64, sun_lon: f64, orb_deg: f64) -> bool {
    can_combust(graha) && angular_distance(graha_lon, sun_lon) < orb_deg
}

/// Check combustion with the default 8 deg orb.
pub fn is_combust(graha: Graha, graha_lon: f64, sun_lon: f64) -> bool {
    is_combust_within(graha, graha_lon, sun_lon, COMBUSTION_ORB_DEG)
}
