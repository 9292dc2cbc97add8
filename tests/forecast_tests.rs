//! Integration tests for the Zambretti forecast engine

use chrono::{DateTime, Duration, TimeZone, Utc};
use rstest::rstest;
use zambretti::{
    forecast, forecast_in_hemisphere, Hemisphere, PressureSeries, WindDirection, ZambrettiError,
};

fn minutes_before(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 19, 12, 0, 0).unwrap() - Duration::minutes(minutes)
}

/// Six readings falling from 1050 to 1000 hPa across the three-hour window
fn falling_series() -> PressureSeries {
    PressureSeries::from_points(vec![
        (minutes_before(179), 1050.0),
        (minutes_before(169), 1040.0),
        (minutes_before(159), 1030.0),
        (minutes_before(132), 1020.0),
        (minutes_before(79), 1010.0),
        (minutes_before(20), 1000.0),
    ])
    .unwrap()
}

/// Six readings rising from 1001 to 1007 hPa
fn rising_series() -> PressureSeries {
    PressureSeries::from_points(vec![
        (minutes_before(179), 1001.0),
        (minutes_before(169), 1002.0),
        (minutes_before(159), 1001.0),
        (minutes_before(132), 1000.0),
        (minutes_before(79), 1005.0),
        (minutes_before(20), 1007.0),
    ])
    .unwrap()
}

/// Six constant readings at the given pressure
fn steady_series(pressure_hpa: f64) -> PressureSeries {
    PressureSeries::from_points(
        [179, 149, 119, 89, 59, 0]
            .into_iter()
            .map(|m| (minutes_before(m), pressure_hpa))
            .collect::<Vec<_>>(),
    )
    .unwrap()
}

#[test]
fn falling_pressure_in_summer_with_north_wind() {
    let text = forecast(
        1000.0,
        90.0,
        25.0,
        &falling_series(),
        Some(WindDirection::N),
    )
    .unwrap();

    // Falling band, summer correction, northerly nudge back toward settled.
    assert_eq!(text, "Showery, Becoming More Unsettled");
}

#[test]
fn rising_pressure_in_summer_with_north_wind() {
    let text = forecast(
        1007.0,
        90.0,
        25.0,
        &rising_series(),
        Some(WindDirection::N),
    )
    .unwrap();

    assert_eq!(text, "Fine Weather");
}

#[test]
fn steady_pressure_in_winter_without_wind() {
    let series = steady_series(1013.0);
    let text = forecast(1013.0, 0.0, 3.0, &series, None).unwrap();

    assert_eq!(text, "Fine, Possibly Showers");
}

#[test]
fn repeated_calls_are_byte_identical() {
    let series = steady_series(1013.0);
    let first = forecast(1013.0, 0.0, 3.0, &series, None).unwrap();
    let second = forecast(1013.0, 0.0, 3.0, &series, None).unwrap();

    assert_eq!(first, second);
}

#[test]
fn six_readings_spanning_the_window_always_forecast() {
    let series = steady_series(1002.5);
    let text = forecast(1002.5, 50.0, 18.0, &series, Some(WindDirection::Wnw)).unwrap();

    assert!(!text.is_empty());
}

#[test]
fn fewer_than_six_readings_is_an_error() {
    let result = PressureSeries::from_points(vec![
        (minutes_before(179), 1001.0),
        (minutes_before(169), 1002.0),
    ]);

    match result {
        Err(ZambrettiError::InsufficientReadings { have, required }) => {
            assert_eq!(have, 2);
            assert_eq!(required, 6);
        }
        other => panic!("expected InsufficientReadings, got {other:?}"),
    }
}

#[test]
fn readings_older_than_three_hours_do_not_count() {
    // Five recent readings plus three stale ones: the stale ones are
    // discarded and the series fails exactly as a five-reading series would.
    let result = PressureSeries::from_points(vec![
        (minutes_before(0), 1013.0),
        (minutes_before(30), 1013.2),
        (minutes_before(60), 1013.4),
        (minutes_before(90), 1013.6),
        (minutes_before(120), 1013.8),
        (minutes_before(200), 1014.0),
        (minutes_before(260), 1014.2),
        (minutes_before(320), 1014.4),
    ]);

    match result {
        Err(ZambrettiError::InsufficientReadings { have, .. }) => assert_eq!(have, 5),
        other => panic!("expected InsufficientReadings, got {other:?}"),
    }
}

#[rstest]
#[case(WindDirection::N)]
#[case(WindDirection::Nne)]
#[case(WindDirection::Ne)]
#[case(WindDirection::Ene)]
#[case(WindDirection::E)]
#[case(WindDirection::Ese)]
#[case(WindDirection::Se)]
#[case(WindDirection::Sse)]
#[case(WindDirection::S)]
#[case(WindDirection::Ssw)]
#[case(WindDirection::Sw)]
#[case(WindDirection::Wsw)]
#[case(WindDirection::W)]
#[case(WindDirection::Wnw)]
#[case(WindDirection::Nw)]
#[case(WindDirection::Nnw)]
fn wind_never_pushes_the_code_out_of_range(#[case] direction: WindDirection) {
    // Extreme pressures sit on the band edges, so any out-of-range nudge
    // would surface as a missing-description error.
    for station_pressure in [900.0, 1013.0, 1100.0] {
        for series in [
            falling_series(),
            rising_series(),
            steady_series(station_pressure),
        ] {
            for hemisphere in [Hemisphere::Northern, Hemisphere::Southern] {
                let text = forecast_in_hemisphere(
                    station_pressure,
                    0.0,
                    25.0,
                    &series,
                    Some(direction),
                    hemisphere,
                )
                .unwrap();
                assert!(!text.is_empty());
            }
        }
    }
}

#[test]
fn extreme_pressures_clamp_to_edge_forecasts() {
    // Beyond the published table the nearest bracket is used, degraded
    // rather than rejected.
    let deep_low = forecast(900.0, 0.0, 3.0, &falling_series(), None).unwrap();
    assert_eq!(deep_low, "Very Unsettled, Rain");

    let strong_high = forecast(1100.0, 0.0, 3.0, &falling_series(), None).unwrap();
    assert_eq!(strong_high, "Settled Fine");
}

#[test]
fn elevation_changes_the_bracket() {
    // The same station pressure reads further up the table at elevation.
    let at_sea_level = forecast(1000.0, 0.0, 25.0, &falling_series(), None).unwrap();
    let at_altitude = forecast(1000.0, 500.0, 25.0, &falling_series(), None).unwrap();

    assert_ne!(at_sea_level, at_altitude);
}

#[test]
fn negative_elevation_is_rejected() {
    let result = forecast(1013.0, -5.0, 10.0, &steady_series(1013.0), None);
    assert!(matches!(result, Err(ZambrettiError::OutOfRange { .. })));
}

#[test]
fn degenerate_series_is_rejected_at_forecast_time() {
    let stamp = minutes_before(0);
    let series =
        PressureSeries::from_points((0..6).map(|_| (stamp, 1010.0)).collect::<Vec<_>>()).unwrap();

    let result = forecast(1010.0, 0.0, 15.0, &series, None);
    assert!(matches!(result, Err(ZambrettiError::DegenerateSeries { .. })));
}

#[test]
fn a_shared_series_can_serve_many_forecasts() {
    let series = steady_series(1013.0);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let series = series.clone();
            std::thread::spawn(move || forecast(1013.0, 0.0, 3.0, &series, None).unwrap())
        })
        .collect();

    let mut texts: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    texts.dedup();
    assert_eq!(texts, vec!["Fine, Possibly Showers".to_string()]);
}
