//! Filter -> decimate pipeline behavior

use chrono::{TimeZone, Utc};
use seismo_core::{Catalog, FilterState, MagnitudeBand, QuakeEvent};
use seismo_decimate::{decimate, DecimationConfig, RenderStrategy};
use seismo_facet::filtered_events;

fn event(id: usize, magnitude: f64, year: i32) -> QuakeEvent {
    QuakeEvent {
        id: format!("eq-{id}"),
        time: Utc.with_ymd_and_hms(year, 3, 10, 6, 0, 0).unwrap(),
        magnitude,
        depth_km: 15.0,
        latitude: 32.0,
        longitude: 35.0,
        region: "Israel".to_string(),
        subregion: "HaDarom".to_string(),
        felt: magnitude >= 5.0,
    }
}

#[test]
fn filtered_view_decimates_to_render_budget() {
    let events: Vec<QuakeEvent> = (0..2000)
        .map(|i| {
            // Mostly small events, with an occasional significant one
            let magnitude = if i % 100 == 0 {
                6.0
            } else {
                3.0 + (i % 10) as f64 * 0.1
            };
            event(i, magnitude, 1990 + (i % 30) as i32)
        })
        .collect();
    let catalog = Catalog::new(events).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    let state = FilterState {
        magnitude: Some(MagnitudeBand::new(3.0, 7.0)),
        ..FilterState::default()
    };
    let filtered = filtered_events(&catalog, &state, now);
    assert!(!filtered.is_empty());

    let config = DecimationConfig::default();

    // Wide zoom: thinned set, but every significant event kept
    let wide = decimate(&filtered, 5.0, &config);
    assert!(wide.len() < filtered.len());
    let significant_in = filtered
        .iter()
        .filter(|ev| ev.magnitude >= config.significance_cutoff)
        .count();
    let significant_out = wide
        .iter()
        .filter(|ev| ev.magnitude >= config.significance_cutoff)
        .count();
    assert_eq!(significant_in, significant_out);

    // Full-detail zoom: the filtered view passes through unchanged
    let close = decimate(&filtered, config.table.full_detail_zoom(), &config);
    assert_eq!(close.len(), filtered.len());

    // Large render sets flip the renderer into batched mode
    assert_eq!(
        config.render_strategy(close.len()),
        RenderStrategy::Batched
    );
    assert_eq!(config.render_strategy(wide.len()), RenderStrategy::Individual);
}
