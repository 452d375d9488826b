//! Facet predicates
//!
//! Four pure predicates, one per facet. Each is total (never panics, never
//! errors) and treats a missing or malformed parameter as identity, so the
//! engine can compose them in any subset without special cases.

use chrono::{DateTime, Duration, Utc};
use seismo_core::{LookbackWindow, MagnitudeBand, QuakeEvent, TimeSelector};

/// Magnitude facet: `min <= magnitude <= max`
///
/// A band whose `max` sits at the slider cap extends to +inf, capturing the
/// "7.0+" events the control cannot express. Non-finite or inverted bands
/// degrade to no restriction.
pub fn magnitude_in_band(event: &QuakeEvent, band: Option<&MagnitudeBand>) -> bool {
    let Some(band) = band else {
        return true;
    };
    if !band.is_well_formed() {
        return true;
    }
    if !event.magnitude.is_finite() {
        return false;
    }
    let above_min = event.magnitude >= band.min;
    let below_max = band.is_open_ended() || event.magnitude <= band.max;
    above_min && below_max
}

/// Time facet: relative lookback from the injected `now`, or an inclusive
/// year range with open ends
pub fn in_time_window(event: &QuakeEvent, selector: &TimeSelector, now: DateTime<Utc>) -> bool {
    match selector {
        TimeSelector::All => true,
        TimeSelector::Lookback(window) => in_lookback(event, *window, now),
        TimeSelector::YearRange { start, end } => {
            let year = event.year();
            start.map_or(true, |start| year >= start) && end.map_or(true, |end| year <= end)
        }
    }
}

fn in_lookback(event: &QuakeEvent, window: LookbackWindow, now: DateTime<Utc>) -> bool {
    event.time >= now - Duration::days(window.days())
}

/// Region facet: exact match against the trimmed record value
pub fn region_matches(event: &QuakeEvent, selector: Option<&str>) -> bool {
    match selector {
        None | Some("all") => true,
        Some(value) => event.region.trim() == value,
    }
}

/// Subregion facet: exact match against the trimmed record value
pub fn subregion_matches(event: &QuakeEvent, selector: Option<&str>) -> bool {
    match selector {
        None | Some("all") => true,
        Some(value) => event.subregion.trim() == value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use seismo_core::MAG_SLIDER_MAX;

    fn event(magnitude: f64, time: DateTime<Utc>) -> QuakeEvent {
        QuakeEvent {
            id: "eq-1".to_string(),
            time,
            magnitude,
            depth_km: 12.0,
            latitude: 33.0,
            longitude: 35.5,
            region: "Lebanon".to_string(),
            subregion: "South".to_string(),
            felt: false,
        }
    }

    fn at(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_magnitude_band_inclusive() {
        let ev = event(5.0, at(2020));
        assert!(magnitude_in_band(&ev, Some(&MagnitudeBand::new(5.0, 6.0))));
        assert!(magnitude_in_band(&ev, Some(&MagnitudeBand::new(4.0, 5.0))));
        assert!(!magnitude_in_band(&ev, Some(&MagnitudeBand::new(5.1, 6.0))));
    }

    #[test]
    fn test_magnitude_band_open_ended_at_cap() {
        let big = event(8.4, at(2020));
        assert!(magnitude_in_band(
            &big,
            Some(&MagnitudeBand::new(5.0, MAG_SLIDER_MAX))
        ));
        // Below the cap the upper bound is a real bound
        assert!(!magnitude_in_band(&big, Some(&MagnitudeBand::new(5.0, 6.9))));
    }

    #[test]
    fn test_magnitude_band_malformed_is_identity() {
        let ev = event(1.0, at(2020));
        assert!(magnitude_in_band(&ev, None));
        assert!(magnitude_in_band(&ev, Some(&MagnitudeBand::new(f64::NAN, 5.0))));
        assert!(magnitude_in_band(&ev, Some(&MagnitudeBand::new(6.0, 5.0))));
    }

    #[test]
    fn test_lookback_window() {
        let now = Utc.with_ymd_and_hms(2025, 3, 31, 12, 0, 0).unwrap();
        let recent = event(3.0, now - Duration::days(3));
        let old = event(3.0, now - Duration::days(40));
        let selector = TimeSelector::Lookback(LookbackWindow::Month);
        assert!(in_time_window(&recent, &selector, now));
        assert!(!in_time_window(&old, &selector, now));
        // Boundary instant is included
        let edge = event(3.0, now - Duration::days(30));
        assert!(in_time_window(&edge, &selector, now));
    }

    #[test]
    fn test_year_range_open_ends() {
        let now = at(2025);
        let ev = event(3.0, at(2010));
        let both = TimeSelector::YearRange {
            start: Some(2005),
            end: Some(2015),
        };
        let open_start = TimeSelector::YearRange {
            start: None,
            end: Some(2010),
        };
        let open_end = TimeSelector::YearRange {
            start: Some(2011),
            end: None,
        };
        assert!(in_time_window(&ev, &both, now));
        assert!(in_time_window(&ev, &open_start, now));
        assert!(!in_time_window(&ev, &open_end, now));
    }

    #[test]
    fn test_region_match_is_exact_and_trimmed() {
        let mut ev = event(3.0, at(2020));
        ev.region = "  Lebanon ".to_string();
        assert!(region_matches(&ev, Some("Lebanon")));
        assert!(!region_matches(&ev, Some("lebanon")));
        assert!(region_matches(&ev, Some("all")));
        assert!(region_matches(&ev, None));
    }

    #[test]
    fn test_subregion_match() {
        let ev = event(3.0, at(2020));
        assert!(subregion_matches(&ev, Some("South")));
        assert!(!subregion_matches(&ev, Some("North")));
        assert!(subregion_matches(&ev, None));
    }
}
