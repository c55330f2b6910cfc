//! Pairwise conjunctions and drishti across the planet list.

use kundli_vedic_base::{OPPOSITION_DEG, angular_distance, special_aspect_angles, within_orb};

use crate::chart_types::{AspectKind, AspectRecord, ConjunctionRecord, PlanetRecord};

/// Conjunctions: same sign and degree-within-sign difference under `orb_deg`.
///
/// One record per unordered pair, in planet-list order.
pub fn find_conjunctions(planets: &[PlanetRecord], orb_deg: f64) -> Vec<ConjunctionRecord> {
    let mut out = Vec::new();
    for (i, a) in planets.iter().enumerate() {
        for b in &planets[i + 1..] {
            if a.sign == b.sign && (a.degree_in_sign - b.degree_in_sign).abs() < orb_deg {
                out.push(ConjunctionRecord {
                    planets: [a.graha, b.graha],
                    sign: a.sign,
                });
            }
        }
    }
    out
}

/// Directional aspects over every unordered pair.
///
/// Opposition and the special aspects of Mars, Jupiter and Saturn are both
/// matched against the shortest-arc separation. Opposition is emitted both
/// ways; specials are checked with each member of the pair as the source.
pub fn find_aspects(planets: &[PlanetRecord], orb_deg: f64) -> Vec<AspectRecord> {
    let mut out = Vec::new();
    for (i, a) in planets.iter().enumerate() {
        for b in &planets[i + 1..] {
            let sep = angular_distance(a.longitude, b.longitude);
            if within_orb(sep, OPPOSITION_DEG, orb_deg) {
                out.push(opposition(a, b));
                out.push(opposition(b, a));
            }
            push_special(&mut out, a, b, sep, orb_deg);
            push_special(&mut out, b, a, sep, orb_deg);
        }
    }
    out
}

fn opposition(from: &PlanetRecord, to: &PlanetRecord) -> AspectRecord {
    AspectRecord {
        from: from.graha,
        to: to.graha,
        kind: AspectKind::Opposition,
    }
}

fn push_special(
    out: &mut Vec<AspectRecord>,
    from: &PlanetRecord,
    to: &PlanetRecord,
    sep: f64,
    orb_deg: f64,
) {
    for &angle in special_aspect_angles(from.graha) {
        if within_orb(sep, f64::from(angle), orb_deg) {
            out.push(AspectRecord {
                from: from.graha,
                to: to.graha,
                kind: AspectKind::Special {
                    graha: from.graha,
                    angle,
                },
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundli_vedic_base::{
        Dignity, Graha, nakshatra_from_longitude, normalize_360, rashi_from_longitude,
    };

    fn planet(graha: Graha, lon: f64) -> PlanetRecord {
        let r = rashi_from_longitude(lon);
        let n = nakshatra_from_longitude(lon);
        PlanetRecord {
            graha,
            longitude: lon,
            sign: r.rashi,
            house: 1,
            degree_in_sign: r.degrees_in_rashi,
            nakshatra: n.nakshatra,
            pada: n.pada,
            dignity: Dignity::Neutral,
            retrograde: false,
            combust: false,
        }
    }

    #[test]
    fn mars_opposition_emits_both_kinds() {
        let planets = [planet(Graha::Mangal, 100.0), planet(Graha::Chandra, 280.0)];
        let aspects = find_aspects(&planets, 2.0);
        assert_eq!(aspects.len(), 3);
        assert!(aspects.contains(&AspectRecord {
            from: Graha::Mangal,
            to: Graha::Chandra,
            kind: AspectKind::Opposition,
        }));
        assert!(aspects.contains(&AspectRecord {
            from: Graha::Chandra,
            to: Graha::Mangal,
            kind: AspectKind::Opposition,
        }));
        assert!(aspects.contains(&AspectRecord {
            from: Graha::Mangal,
            to: Graha::Chandra,
            kind: AspectKind::Special {
                graha: Graha::Mangal,
                angle: 180,
            },
        }));
    }

    #[test]
    fn saturn_90_either_side() {
        let planets = [planet(Graha::Chandra, 10.0), planet(Graha::Shani, 100.0)];
        let aspects = find_aspects(&planets, 2.0);
        // The Moon has no specials, so only Saturn's 3rd-house aspect appears.
        assert_eq!(
            aspects,
            vec![AspectRecord {
                from: Graha::Shani,
                to: Graha::Chandra,
                kind: AspectKind::Special {
                    graha: Graha::Shani,
                    angle: 90,
                },
            }]
        );
    }

    #[test]
    fn mars_and_saturn_square_each_other() {
        let planets = [planet(Graha::Mangal, 100.0), planet(Graha::Shani, 10.0)];
        let aspects = find_aspects(&planets, 2.0);
        assert_eq!(aspects.len(), 2);
        assert!(aspects.contains(&AspectRecord {
            from: Graha::Mangal,
            to: Graha::Shani,
            kind: AspectKind::Special {
                graha: Graha::Mangal,
                angle: 90,
            },
        }));
        assert!(aspects.contains(&AspectRecord {
            from: Graha::Shani,
            to: Graha::Mangal,
            kind: AspectKind::Special {
                graha: Graha::Shani,
                angle: 90,
            },
        }));
    }

    #[test]
    fn jupiter_trine_has_no_mars_aspect() {
        // 210 apart going forward, 150 by the shortest arc.
        let planets = [planet(Graha::Mangal, 100.0), planet(Graha::Guru, 310.0)];
        let aspects = find_aspects(&planets, 2.0);
        assert_eq!(
            aspects,
            vec![AspectRecord {
                from: Graha::Guru,
                to: Graha::Mangal,
                kind: AspectKind::Special {
                    graha: Graha::Guru,
                    angle: 150,
                },
            }]
        );
        assert!(aspects.iter().all(|a| a.from != Graha::Mangal));
    }

    #[test]
    fn wide_specials_unreachable_at_default_orb() {
        let mut lon = 0.0;
        while lon < 360.0 {
            let planets = [
                planet(Graha::Mangal, 0.0),
                planet(Graha::Guru, lon),
                planet(Graha::Shani, normalize_360(lon + 45.0)),
            ];
            for a in find_aspects(&planets, 2.0) {
                if let AspectKind::Special { angle, .. } = a.kind {
                    assert!(angle <= 180, "unexpected {angle} at {lon}");
                }
            }
            lon += 0.5;
        }
    }

    #[test]
    fn orb_is_exclusive() {
        let planets = [planet(Graha::Surya, 0.0), planet(Graha::Chandra, 178.0)];
        assert!(find_aspects(&planets, 2.0).is_empty());
        let planets = [planet(Graha::Surya, 0.0), planet(Graha::Chandra, 178.5)];
        assert_eq!(find_aspects(&planets, 2.0).len(), 2);
    }

    #[test]
    fn conjunction_same_sign_only() {
        let planets = [
            planet(Graha::Surya, 10.0),
            planet(Graha::Buddh, 15.0),
            planet(Graha::Shukra, 31.0),
        ];
        let conj = find_conjunctions(&planets, 8.0);
        assert_eq!(conj.len(), 1);
        assert_eq!(conj[0].planets, [Graha::Surya, Graha::Buddh]);
        // Venus at 31 is 16 deg from the Sun and in the next sign.
    }

    #[test]
    fn conjunction_across_cusp_not_counted() {
        let planets = [planet(Graha::Surya, 29.0), planet(Graha::Buddh, 31.0)];
        assert!(find_conjunctions(&planets, 8.0).is_empty());
    }

    #[test]
    fn rahu_ketu_always_opposed() {
        let planets = [planet(Graha::Rahu, 45.0), planet(Graha::Ketu, 225.0)];
        let aspects = find_aspects(&planets, 2.0);
        assert_eq!(aspects.len(), 2);
        assert!(aspects.iter().all(|a| a.kind == AspectKind::Opposition));
    }
}
