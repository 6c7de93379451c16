//! Property tests for the Wells-Riley calculation.

use proptest::prelude::*;

use wellsriley_core::prelude::*;

fn ventilation() -> impl Strategy<Value = VentilationLevel> {
    prop::sample::select(VentilationLevel::ALL.to_vec())
}

fn humidity() -> impl Strategy<Value = HumidityLevel> {
    prop::sample::select(HumidityLevel::ALL.to_vec())
}

fn season() -> impl Strategy<Value = Season> {
    prop::sample::select(Season::ALL.to_vec())
}

fn probability(side: f64, ventilation: VentilationLevel, humidity: HumidityLevel, hours: f64) -> f64 {
    let room = RoomDimensions::new(side, side, 3.0).unwrap();
    let env = EnvironmentalSettings::new(ventilation, Season::Winter, humidity, hours).unwrap();
    compute_risk(&room, &env, &Occupancy::new(5).unwrap())
        .unwrap()
        .individual_probability_percent
}

proptest! {
    #[test]
    fn probability_is_in_range_and_cases_match(
        length in 0.5f64..100.0,
        width in 0.5f64..100.0,
        height in 0.5f64..20.0,
        ventilation in ventilation(),
        season in season(),
        humidity in humidity(),
        hours in 0.5f64..1_000.0,
        persons in 2u32..500,
    ) {
        let room = RoomDimensions::new(length, width, height).unwrap();
        let env = EnvironmentalSettings::new(ventilation, season, humidity, hours).unwrap();
        let result = compute_risk(&room, &env, &Occupancy::new(persons).unwrap()).unwrap();

        let p = result.individual_probability_percent;
        prop_assert!((0.0..100.0).contains(&p));

        let expected = ((p / 100.0) * f64::from(persons - 1)).ceil() as u32;
        prop_assert_eq!(result.secondary_cases, expected);
        prop_assert!(result.secondary_cases <= persons - 1);
    }

    #[test]
    fn longer_exposure_raises_probability(
        ventilation in ventilation(),
        humidity in humidity(),
        hours in 0.5f64..10.0,
        extra in 0.25f64..5.0,
    ) {
        let shorter = probability(5.0, ventilation, humidity, hours);
        let longer = probability(5.0, ventilation, humidity, hours + extra);
        prop_assert!(longer > shorter);
    }

    #[test]
    fn larger_room_lowers_probability(
        ventilation in ventilation(),
        humidity in humidity(),
        side in 2.0f64..20.0,
        growth in 0.5f64..10.0,
    ) {
        let small = probability(side, ventilation, humidity, 2.0);
        let large = probability(side + growth, ventilation, humidity, 2.0);
        prop_assert!(large < small);
    }

    #[test]
    fn category_strings_from_display_are_accepted(
        ventilation in ventilation(),
        season in season(),
        humidity in humidity(),
    ) {
        let request = RiskRequest {
            ventilation_level: ventilation.to_string(),
            season: season.to_string(),
            humidity_level: humidity.to_string(),
            ..RiskRequest::default()
        };
        let inputs = request.validate().unwrap();
        prop_assert_eq!(inputs.environment.ventilation_level(), ventilation);
        prop_assert_eq!(inputs.environment.season(), season);
        prop_assert_eq!(inputs.environment.humidity_level(), humidity);
    }

    #[test]
    fn tiny_rooms_never_divide_by_zero(
        length_exp in -120.0f64..-90.0,
        width_exp in -120.0f64..-90.0,
        height_exp in -120.0f64..-90.0,
        ventilation in ventilation(),
        humidity in humidity(),
    ) {
        let request = RiskRequest {
            length: 10f64.powf(length_exp),
            width: 10f64.powf(width_exp),
            height: 10f64.powf(height_exp),
            ventilation_level: ventilation.to_string(),
            humidity_level: humidity.to_string(),
            ..RiskRequest::default()
        };
        match request.evaluate() {
            Ok(result) => prop_assert!(result.volume_m3 > 0.0),
            Err(err) => prop_assert_eq!(err.field(), Some("volume")),
        }
    }
}

#[test]
fn more_ventilation_lowers_probability() {
    for humidity in HumidityLevel::ALL {
        let values: Vec<f64> = VentilationLevel::ALL
            .iter()
            .map(|&v| probability(5.0, v, humidity, 2.0))
            .collect();
        assert!(values.windows(2).all(|w| w[1] < w[0]), "{humidity}: {values:?}");
    }
}

#[test]
fn more_humidity_lowers_probability() {
    for ventilation in VentilationLevel::ALL {
        let values: Vec<f64> = HumidityLevel::ALL
            .iter()
            .map(|&h| probability(5.0, ventilation, h, 2.0))
            .collect();
        assert!(values.windows(2).all(|w| w[1] < w[0]), "{ventilation}: {values:?}");
    }
}

#[test]
fn probability_limits_in_exposure_time() {
    let short = probability(5.0, VentilationLevel::High, HumidityLevel::VeryHigh, 0.5);
    assert!(short < 2.0);

    let long = probability(5.0, VentilationLevel::None, HumidityLevel::Dry, 1.0e6);
    assert!(long < 100.0);
    assert!(long > 99.999);
}

#[test]
fn invalid_inputs_are_rejected() {
    let err = Occupancy::new(1).unwrap_err();
    assert!(matches!(err, ModelError::InvalidInput { ref field, .. } if field == "total_persons"));

    let err = RoomDimensions::new(0.0, 4.0, 3.0).unwrap_err();
    assert!(matches!(err, ModelError::InvalidInput { ref field, .. } if field == "length"));
}
