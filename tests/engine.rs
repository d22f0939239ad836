use naval_power_calculator::core::constants::KW_PER_HP;
use naval_power_calculator::engine::{
    CruiseOperatingPoint, EngineDesignInput, EngineError, EnginePriority, calculate_engine_system,
    compare_configurations, resolve_cruising_speed,
};
use naval_power_calculator::power::PowerError;
use naval_power_calculator::propulsion::{ConfigurationId, HullType, Registry, RegistryError};

fn frigate(configuration: &str) -> EngineDesignInput {
    EngineDesignInput::new(configuration, HullType::Frigate, 5000.0, 0.12, 30.0)
}

fn approx(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn frigate_power_follows_admiralty_chain() {
    let registry = Registry::standard();
    let output = calculate_engine_system(&registry, &frigate("CODAG")).expect("frigate design");

    // 5000 t is above the small-hull limit, so no planing penalty applies.
    let power_kw = 5000.0_f64.powf(2.0 / 3.0) * 30.0_f64.powi(3) / 210.0;
    let expected_hp = power_kw / 1.0 / KW_PER_HP;
    assert!(
        approx(output.max_power, expected_hp, 1e-6),
        "max power {} vs {}",
        output.max_power,
        expected_hp
    );
    assert!(approx(output.max_power, 50_416.0, 5.0));
    assert_eq!(output.configuration, ConfigurationId::Codag);
    assert_eq!(output.max_speed, 30.0);
}

#[test]
fn identical_input_is_deterministic() {
    let registry = Registry::standard();
    let input = frigate("COGAG")
        .with_priority(EnginePriority::Reliability)
        .with_cruising_speed(16.0);
    let first = calculate_engine_system(&registry, &input).unwrap();
    let second = calculate_engine_system(&registry, &input).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.max_power.to_bits(), second.max_power.to_bits());
    assert_eq!(first.max_range.to_bits(), second.max_range.to_bits());
}

#[test]
fn unknown_configuration_fails_before_power_model() {
    let registry = Registry::standard();
    // Out-of-envelope displacement as well: the configuration lookup must win.
    let input = EngineDesignInput::new("WARP_DRIVE", HullType::Frigate, 100.0, 0.12, 30.0);
    let err = calculate_engine_system(&registry, &input).unwrap_err();
    assert_eq!(
        err,
        EngineError::Registry(RegistryError::ConfigurationNotFound(
            "WARP_DRIVE".to_string()
        ))
    );
}

#[test]
fn displacement_outside_envelope_cites_bounds() {
    let registry = Registry::standard();
    let input = EngineDesignInput::new("diesel", HullType::Frigate, 100.0, 0.12, 30.0);
    match calculate_engine_system(&registry, &input) {
        Err(EngineError::Power(PowerError::DisplacementOutOfRange {
            hull_type,
            displacement,
            min,
            max,
        })) => {
            assert_eq!(hull_type, HullType::Frigate);
            assert_eq!(displacement, 100.0);
            assert_eq!(min, 2000.0);
            assert_eq!(max, 6000.0);
        }
        other => panic!("expected DisplacementOutOfRange, got {other:?}"),
    }
}

#[test]
fn envelope_bounds_are_inclusive() {
    let registry = Registry::standard();
    for displacement in [2000.0, 6000.0] {
        let input = EngineDesignInput::new("CODOG", HullType::Frigate, displacement, 0.12, 28.0);
        assert!(
            calculate_engine_system(&registry, &input).is_ok(),
            "{displacement} t should be accepted"
        );
    }
    for displacement in [1999.0, 6001.0] {
        let input = EngineDesignInput::new("CODOG", HullType::Frigate, displacement, 0.12, 28.0);
        assert!(matches!(
            calculate_engine_system(&registry, &input),
            Err(EngineError::Power(PowerError::DisplacementOutOfRange { .. }))
        ));
    }
}

#[test]
fn efficiency_priority_is_heavier_than_power_priority() {
    let registry = Registry::standard();
    for cfg in registry.configurations() {
        let base = frigate("diesel").for_configuration(cfg.id);
        let efficiency =
            calculate_engine_system(&registry, &base.clone().with_priority(EnginePriority::Efficiency))
                .unwrap();
        let power =
            calculate_engine_system(&registry, &base.with_priority(EnginePriority::Power)).unwrap();
        assert!(
            efficiency.total_engine_weight > power.total_engine_weight,
            "{}: {} <= {}",
            cfg.id,
            efficiency.total_engine_weight,
            power.total_engine_weight
        );
    }
}

#[test]
fn priorities_move_their_metric_in_the_expected_direction() {
    let registry = Registry::standard();
    for cfg in registry.configurations() {
        let base = frigate("diesel").for_configuration(cfg.id);
        let run = |priority| {
            calculate_engine_system(&registry, &base.clone().with_priority(priority)).unwrap()
        };
        let balanced = run(EnginePriority::Balanced);
        let power = run(EnginePriority::Power);
        let reliability = run(EnginePriority::Reliability);
        let efficiency = run(EnginePriority::Efficiency);

        assert!(power.max_power > balanced.max_power, "{}", cfg.id);
        assert!(reliability.mtbf > balanced.mtbf, "{}", cfg.id);
        assert!(
            efficiency.fuel_consumption_at_full_power < balanced.fuel_consumption_at_full_power,
            "{}",
            cfg.id
        );
    }
}

#[test]
fn larger_displacement_never_reduces_power_or_weight_above_small_hull_limit() {
    // 4000 t and up carries no planing correction, so nothing steps down.
    let registry = Registry::standard();
    let mut previous: Option<(f64, f64)> = None;
    for step in 0..=40 {
        let displacement = 4000.0 + step as f64 * 150.0;
        let input = EngineDesignInput::new("COGOG", HullType::Destroyer, displacement, 0.1, 31.0);
        let output = calculate_engine_system(&registry, &input).unwrap();
        if let Some((power, weight)) = previous {
            assert!(output.max_power >= power, "power fell at {displacement} t");
            assert!(output.total_engine_weight >= weight, "weight fell at {displacement} t");
        }
        previous = Some((output.max_power, output.total_engine_weight));
    }
}

#[test]
fn planing_correction_steps_down_at_hull_size_limits() {
    let registry = Registry::standard();
    let run = |hull_type, displacement| {
        let input = EngineDesignInput::new("CODAD", hull_type, displacement, 0.12, 28.0);
        calculate_engine_system(&registry, &input).unwrap()
    };

    for (hull_type, below, at) in [
        (HullType::Corvette, 1499.0, 1500.0),
        (HullType::Frigate, 3999.0, 4000.0),
    ] {
        let small = run(hull_type, below);
        let large = run(hull_type, at);
        assert!(
            large.max_power < small.max_power,
            "{hull_type}: {} t -> {} hp, {} t -> {} hp",
            below,
            small.max_power,
            at,
            large.max_power
        );
        assert!(large.total_engine_weight < small.total_engine_weight);
    }

    let corvette_small = run(HullType::Corvette, 1499.0);
    let corvette_large = run(HullType::Corvette, 1500.0);
    assert!((corvette_small.max_power - 26_123.0).abs() < 1.0);
    assert!((corvette_large.max_power - 23_550.0).abs() < 1.0);
    assert_eq!(corvette_small.total_engine_weight, 317.1);
    assert_eq!(corvette_large.total_engine_weight, 308.7);
}

#[test]
fn custom_cruise_is_slower_and_cheaper_than_full_power() {
    let registry = Registry::standard();
    for cruise in [8.0, 15.0, 22.0, 29.5] {
        let input = frigate("CODAD").with_cruising_speed(cruise);
        let output = calculate_engine_system(&registry, &input).unwrap();
        assert_eq!(output.cruising_speed, cruise);
        assert!(output.cruising_speed < output.max_speed);
        assert!(output.fuel_consumption_at_cruise < output.fuel_consumption_at_full_power);
        assert!(output.max_range > 0.0);
    }
}

#[test]
fn default_cruise_burns_full_power_at_part_setting() {
    let registry = Registry::standard();
    let output = calculate_engine_system(&registry, &frigate("gas-turbine")).unwrap();
    // 5000 t × 0.12 is well above the sleek-hull threshold.
    assert_eq!(output.cruising_speed, 15.0);
    let ratio = output.fuel_consumption_at_cruise / output.fuel_consumption_at_full_power;
    assert!(approx(ratio, 0.65_f64.powf(1.25), 1e-3), "ratio {ratio}");
}

#[test]
fn custom_cruise_uses_cubic_scaling_without_part_load_curve() {
    let point = CruiseOperatingPoint::resolve(40_000.0, 30.0, Some(15.0));
    assert!(approx(point.power_hp, 5_000.0, 1e-9));
    assert_eq!(point.power_setting, 1.0);

    let default = CruiseOperatingPoint::resolve(40_000.0, 30.0, None);
    assert_eq!(default.power_hp, 40_000.0);
    assert_eq!(default.power_setting, 0.65);
}

#[test]
fn cruising_speed_heuristic() {
    assert_eq!(resolve_cruising_speed(Some(12.5), 5000.0, 0.12), 12.5);
    assert_eq!(resolve_cruising_speed(None, 5000.0, 0.12), 15.0);
    assert_eq!(resolve_cruising_speed(Some(0.0), 5000.0, 0.12), 15.0);
    assert_eq!(resolve_cruising_speed(None, 0.5, 0.1), 18.0);
    assert_eq!(resolve_cruising_speed(None, 1.2, 0.1), 15.0);
}

#[test]
fn derived_metrics_stay_in_range() {
    let registry = Registry::standard();
    let input = frigate("IEP").with_priority(EnginePriority::Reliability);
    let output = calculate_engine_system(&registry, &input).unwrap();

    // IEP reliability 1.20 × 1.25 would exceed 100 without the clamp.
    assert_eq!(output.mtbf, 12_000.0);
    assert_eq!(output.reliability_score, 100.0);
    assert!(output.acceleration_rating <= 100);
    assert!(output.heat_signature <= 100);
    assert_eq!(output.complexity_rating, 85);
    assert!(approx(output.engine_volume, output.max_power / 55.0, 0.05));
    assert!(output.operating_cost_per_hour > 0.0);
    assert_eq!(output.total_cost, output.total_cost.round());
}

#[test]
fn acceleration_rating_uses_unrounded_engine_weight() {
    let registry = Registry::standard();
    let input = EngineDesignInput::new("steam-turbine", HullType::Carrier, 100_000.0, 0.1, 20.0);
    let output = calculate_engine_system(&registry, &input).unwrap();

    let weight = (100_000.0 * 0.14 + output.max_power * 0.003) * 1.4;
    let expected = (output.max_power / weight / 50.0 * 100.0).round();
    assert_eq!(f64::from(output.acceleration_rating), expected);
    assert_eq!(output.total_engine_weight, (weight * 10.0).round() / 10.0);
}

#[test]
fn invalid_inputs_are_rejected() {
    let registry = Registry::standard();
    let cases = [
        frigate("diesel").with_cruising_speed(30.0),
        frigate("diesel").with_cruising_speed(-1.0),
        EngineDesignInput::new("diesel", HullType::Frigate, 5000.0, -0.1, 30.0),
        EngineDesignInput::new("diesel", HullType::Frigate, 5000.0, 0.12, 0.0),
    ];
    for input in cases {
        assert!(
            matches!(
                calculate_engine_system(&registry, &input),
                Err(EngineError::InvalidInput(_))
            ),
            "{input:?} should be rejected"
        );
    }
}

#[test]
fn priority_parses_case_insensitively() {
    assert_eq!("Power".parse::<EnginePriority>().unwrap(), EnginePriority::Power);
    assert_eq!(
        " balanced ".parse::<EnginePriority>().unwrap(),
        EnginePriority::Balanced
    );
    assert!(matches!(
        "speed".parse::<EnginePriority>(),
        Err(EngineError::UnknownPriority(_))
    ));
}

#[test]
fn comparison_covers_every_configuration_in_registry_order() {
    let registry = Registry::standard();
    let rows = compare_configurations(&registry, &frigate("ignored"));
    let ids: Vec<ConfigurationId> = rows.iter().map(|row| row.configuration).collect();
    let expected: Vec<ConfigurationId> = registry.configurations().map(|cfg| cfg.id).collect();
    assert_eq!(ids, expected);
    assert_eq!(rows.len(), ConfigurationId::ALL.len());

    // Same hull and speed everywhere, so provisioned power is configuration-independent.
    let powers: Vec<f64> = rows
        .iter()
        .map(|row| row.output().expect("valid design").max_power)
        .collect();
    assert!(powers.windows(2).all(|w| w[0] == w[1]));

    let lightest = rows
        .iter()
        .min_by(|a, b| {
            a.output()
                .unwrap()
                .total_engine_weight
                .total_cmp(&b.output().unwrap().total_engine_weight)
        })
        .unwrap();
    assert_eq!(lightest.configuration, ConfigurationId::GasTurbine);
}

#[test]
fn comparison_reports_per_row_failures() {
    let registry = Registry::standard();
    let input = EngineDesignInput::new("diesel", HullType::Frigate, 100.0, 0.12, 30.0);
    let rows = compare_configurations(&registry, &input);
    assert!(rows.iter().all(|row| row.result.is_err()));
}
