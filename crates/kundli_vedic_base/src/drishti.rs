//! Graha drishti (planetary aspect) angles.
//!
//! Every graha aspects the point opposite it (the 7th). Mars, Jupiter and
//! Saturn carry additional special aspects, matched against the
//! shortest-arc separation between the two grahas:
//! - Mars: 4th (90), 7th (180), 8th (210)
//! - Jupiter: 5th (150), 7th (180), 9th (210)
//! - Saturn: 3rd (90), 7th (180), 10th (270)

use crate::graha::Graha;

/// Angle of the universal 7th-house aspect.
pub const OPPOSITION_DEG: f64 = 180.0;

/// Default tolerance (degrees) when matching an aspect angle.
pub const ASPECT_ORB_DEG: f64 = 2.0;

/// Special aspect angles for a graha. Empty for grahas without special aspects.
pub const fn special_aspect_angles(graha: Graha) -> &'static [u16] {
    match graha {
        Graha::Mangal => &[90, 180, 210],
        Graha::Guru => &[150, 180, 210],
        Graha::Shani => &[90, 180, 270],
        _ => &[],
    }
}

/// Whether `separation_deg` lies strictly within `orb_deg` of `aspect_deg`.
pub fn within_orb(separation_deg: f64, aspect_deg: f64, orb_deg: f64) -> bool {
    (separation_deg - aspect_deg).abs() < orb_deg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::ALL_GRAHAS;

    #[test]
    fn only_three_grahas_have_special_aspects() {
        let with_special: Vec<Graha> = ALL_GRAHAS
            .iter()
            .copied()
            .filter(|g| !special_aspect_angles(*g).is_empty())
            .collect();
        assert_eq!(with_special, vec![Graha::Mangal, Graha::Guru, Graha::Shani]);
    }

    #[test]
    fn special_aspects_include_opposition() {
        for g in [Graha::Mangal, Graha::Guru, Graha::Shani] {
            assert!(special_aspect_angles(g).contains(&180));
        }
    }

    #[test]
    fn orb_is_strict() {
        assert!(within_orb(181.9, 180.0, ASPECT_ORB_DEG));
        assert!(!within_orb(182.0, 180.0, ASPECT_ORB_DEG));
        assert!(within_orb(88.5, 90.0, ASPECT_ORB_DEG));
    }
}
