use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, TimeZone, Utc};
use kundli_chart::{
    BirthInput, BodyState, ChartConfig, ChartRequest, CollaboratorError, EphemerisProvider,
    GeoLocation, GeoTimeResolver, HouseMethod, HouseSystem, KundliError, RiseSet, compute_kundli,
    derive_from_request,
};
use kundli_vedic_base::{Graha, Rashi};

/// Resolver that knows one city at a fixed +05:30 offset.
struct OneCity;

impl GeoTimeResolver for OneCity {
    fn resolve(&self, place: &str) -> Result<GeoLocation, CollaboratorError> {
        if place.eq_ignore_ascii_case("pune") {
            Ok(GeoLocation {
                latitude: 18.5204,
                longitude: 73.8567,
                timezone: "Asia/Kolkata".into(),
            })
        } else {
            Err(CollaboratorError::PlaceNotFound(place.into()))
        }
    }

    fn to_utc(
        &self,
        local: NaiveDateTime,
        timezone: &str,
    ) -> Result<DateTime<Utc>, CollaboratorError> {
        if timezone != "Asia/Kolkata" {
            return Err(CollaboratorError::TimezoneNotFound(timezone.into()));
        }
        let ist = FixedOffset::east_opt(5 * 3600 + 1800)
            .ok_or_else(|| CollaboratorError::TimeConversion("bad offset".into()))?;
        ist.from_local_datetime(&local)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
            .ok_or_else(|| CollaboratorError::TimeConversion(local.to_string()))
    }
}

/// Ephemeris returning fixed tropical positions.
struct FixedEphemeris {
    fail_ayanamsa: bool,
    polar: bool,
}

impl EphemerisProvider for FixedEphemeris {
    fn longitude_and_speed(&self, graha: Graha, _jd: f64) -> Result<BodyState, CollaboratorError> {
        assert_ne!(graha, Graha::Ketu, "Ketu must never be queried");
        Ok(match graha {
            Graha::Surya => BodyState::new(112.0, 0.95),
            Graha::Chandra => BodyState::new(250.0, 12.8),
            Graha::Buddh => BodyState::new(118.0, -0.4),
            Graha::Shukra => BodyState::new(80.0, 1.1),
            Graha::Mangal => BodyState::new(20.0, 0.7),
            Graha::Guru => BodyState::new(105.0, 0.22),
            Graha::Shani => BodyState::new(290.0, -0.06),
            _ => BodyState::new(310.0, -0.053),
        })
    }

    fn houses(
        &self,
        _jd: f64,
        _latitude: f64,
        _longitude: f64,
        method: HouseMethod,
    ) -> Result<HouseSystem, CollaboratorError> {
        assert_eq!(method, HouseMethod::Equal);
        Ok(HouseSystem::equal_from_ascendant(200.0))
    }

    fn ayanamsa(&self, _jd: f64) -> Result<f64, CollaboratorError> {
        if self.fail_ayanamsa {
            Err(CollaboratorError::EphemerisUnavailable("ayanamsa".into()))
        } else {
            Ok(23.7)
        }
    }

    fn sunrise_sunset(&self, _jd: f64, _longitude: f64, _latitude: f64) -> RiseSet {
        if self.polar {
            RiseSet::default()
        } else {
            RiseSet {
                sunrise: NaiveTime::from_hms_opt(6, 4, 11),
                sunset: NaiveTime::from_hms_opt(19, 12, 40),
            }
        }
    }
}

fn ephemeris() -> FixedEphemeris {
    FixedEphemeris {
        fail_ayanamsa: false,
        polar: false,
    }
}

#[test]
fn full_pipeline() {
    let birth = BirthInput::new("1990-07-15", "14:30:00", "Pune");
    let chart = compute_kundli(&birth, &OneCity, &ephemeris(), &ChartConfig::default()).unwrap();

    assert_eq!(chart.context.utc, Utc.with_ymd_and_hms(1990, 7, 15, 9, 0, 0).unwrap());
    assert!((chart.context.julian_day - 2_448_087.875).abs() < 1e-6);
    assert_eq!(chart.context.timezone, "Asia/Kolkata");
    assert_eq!(chart.planets.len(), 9);

    // 112 - 23.7 = 88.3 sidereal
    let sun = chart.planet(Graha::Surya).unwrap();
    assert_eq!(sun.sign, Rashi::Mithuna);
    assert!(chart.planet(Graha::Buddh).unwrap().retrograde);
    assert!(chart.planet(Graha::Buddh).unwrap().combust);
    assert!(!chart.planet(Graha::Rahu).unwrap().retrograde);
    assert_eq!(chart.sunrise, NaiveTime::from_hms_opt(6, 4, 11));
    assert_eq!(chart.sunset, NaiveTime::from_hms_opt(19, 12, 40));
}

#[test]
fn unknown_place_propagates_unchanged() {
    let birth = BirthInput::new("1990-07-15", "14:30:00", "Atlantis");
    let err = compute_kundli(&birth, &OneCity, &ephemeris(), &ChartConfig::default()).unwrap_err();
    assert_eq!(
        err,
        KundliError::Collaborator(CollaboratorError::PlaceNotFound("Atlantis".into()))
    );
}

#[test]
fn ephemeris_failure_propagates() {
    let birth = BirthInput::new("1990-07-15", "14:30:00", "Pune");
    let eph = FixedEphemeris {
        fail_ayanamsa: true,
        polar: false,
    };
    let err = compute_kundli(&birth, &OneCity, &eph, &ChartConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        KundliError::Collaborator(CollaboratorError::EphemerisUnavailable(_))
    ));
}

#[test]
fn malformed_date_fails_before_any_lookup() {
    let birth = BirthInput::new("15/07/1990", "14:30:00", "Atlantis");
    let err = compute_kundli(&birth, &OneCity, &ephemeris(), &ChartConfig::default()).unwrap_err();
    assert!(matches!(err, KundliError::InvalidInput(_)));
}

#[test]
fn polar_day_yields_null_times() {
    let birth = BirthInput::new("1990-07-15", "14:30:00", "Pune");
    let eph = FixedEphemeris {
        fail_ayanamsa: false,
        polar: true,
    };
    let chart = compute_kundli(&birth, &OneCity, &eph, &ChartConfig::default()).unwrap();
    assert!(chart.sunrise.is_none());
    assert!(chart.sunset.is_none());
    let json = serde_json::to_value(&chart).unwrap();
    assert!(json["sunrise"].is_null());
}

const GREENWICH_REQUEST: &str = r#"{
        "birth": {"date": "2000-01-01", "time": "12:00:00", "place": "Greenwich"},
        "context": {
            "latitude": 51.48, "longitude": 0.0, "timezone": "Europe/London",
            "utc": "2000-01-01T12:00:00Z", "julian_day": 2451545.0
        },
        "snapshot": {
            "bodies": {
                "Sun": {"longitude": 280.46, "speed": 1.02},
                "Moon": {"longitude": 223.32, "speed": 12.1},
                "Mercury": {"longitude": 271.89, "speed": 1.55},
                "Venus": {"longitude": 241.57, "speed": 1.21},
                "Mars": {"longitude": 327.96, "speed": 0.77},
                "Jupiter": {"longitude": 25.25, "speed": 0.04},
                "Saturn": {"longitude": 40.40, "speed": -0.02},
                "Rahu": {"longitude": 125.04, "speed": -0.05}
            },
            "rise_set": {"sunrise": "08:06:00", "sunset": "16:01:00"}
        },
        "houses": {
            "cusps": [24.0, 54.0, 84.0, 114.0, 144.0, 174.0, 204.0, 234.0, 264.0, 294.0, 324.0, 354.0],
            "ascendant": 24.0
        },
        "ayanamsa": 23.85
    }"#;

#[test]
fn request_json_derives_chart() {
    let request: ChartRequest = serde_json::from_str(GREENWICH_REQUEST).unwrap();
    let chart = derive_from_request(&request).unwrap();
    assert_eq!(chart.ascendant.sign, Rashi::Mesha);
    assert_eq!(chart.planet(Graha::Surya).unwrap().sign, Rashi::Dhanu);
    assert!(chart.planet(Graha::Shani).unwrap().retrograde);
    assert_eq!(chart.sunrise, NaiveTime::from_hms_opt(8, 6, 0));
}

#[test]
fn request_with_eleven_cusps_rejected() {
    let request = GREENWICH_REQUEST.replace(", 354.0]", "]");
    let err = serde_json::from_str::<ChartRequest>(&request).unwrap_err();
    assert!(err.to_string().contains("expected 12 house cusps, got 11"));
}

#[test]
fn request_supplying_ketu_rejected() {
    let request = GREENWICH_REQUEST.replace(
        r#""Rahu": {"longitude": 125.04, "speed": -0.05}"#,
        r#""Rahu": {"longitude": 125.04, "speed": -0.05}, "Ketu": {"longitude": 305.04, "speed": -0.05}"#,
    );
    assert!(serde_json::from_str::<ChartRequest>(&request).is_err());
}
