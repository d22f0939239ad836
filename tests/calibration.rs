use std::fs;

use naval_power_calculator::calibration::coefficients::{OUTLIER_THRESHOLD, raw_coefficient};
use naval_power_calculator::calibration::formulas::{AdmiraltyFormula, ShipTypeBuckets};
use naval_power_calculator::calibration::{
    CalibrationError, PowerFormula, analyze_class_coefficients, displacement_factors,
    fleet_summary, load_dataset, run_formula_comparison, standard_dataset, standard_formulas,
};
use naval_power_calculator::propulsion::{ConfigurationId, HullForm, HullType, Registry};

#[test]
fn bundled_dataset_loads() {
    let vessels = standard_dataset().expect("dataset");
    assert_eq!(vessels.len(), 22);

    let norfolk = vessels
        .iter()
        .find(|v| v.class == "Type 23")
        .expect("Type 23 present");
    assert_eq!(norfolk.propulsion, ConfigurationId::Codag);
    assert_eq!(norfolk.power_alternate_hp, Some(41_700.0));

    let visby = vessels.iter().find(|v| v.class == "Visby").unwrap();
    assert_eq!(visby.hull_form, HullForm::Planing);
    assert_eq!(visby.vessel_type, HullType::Corvette);

    let registry = Registry::standard();
    for vessel in &vessels {
        let profile = registry.hull_profile(vessel.vessel_type).unwrap();
        assert!(
            profile.contains(vessel.displacement_full),
            "{} outside its envelope",
            vessel.name
        );
    }
}

#[test]
fn hydrodynamic_ratios_are_derived() {
    let vessels = standard_dataset().unwrap();
    let burke = vessels.iter().find(|v| v.class == "Arleigh Burke").unwrap();
    let h = &burke.hydrodynamics;
    assert!((h.length_beam_ratio - 153.9 / 20.1).abs() < 1e-9);
    assert!((h.power_displacement_ratio - 100_000.0 / 8315.0).abs() < 1e-9);
    let fn_expected = 30.0 * 0.514444 / (9.80665_f64 * 153.9).sqrt();
    assert!((h.froude_number - fn_expected).abs() < 1e-3);
    assert!(h.resistance_factor > 0.0);
}

#[test]
fn rankings_are_sorted_and_complete() {
    let registry = Registry::standard();
    let vessels = standard_dataset().unwrap();
    let formulas = standard_formulas(&registry);
    let report = run_formula_comparison(&vessels, &formulas).expect("comparison");

    assert_eq!(report.vessel_count, 22);
    assert_eq!(report.rankings.len(), formulas.len());
    assert!(
        report
            .rankings
            .windows(2)
            .all(|w| w[0].mean_absolute_error <= w[1].mean_absolute_error)
    );
    for score in &report.rankings {
        assert_eq!(score.predictions.len(), vessels.len());
        assert!(score.min_absolute_error <= score.mean_absolute_error);
        assert!(score.mean_absolute_error <= score.max_absolute_error);
        for (vessel, prediction) in vessels.iter().zip(&score.predictions) {
            assert_eq!(prediction.vessel, vessel.name);
        }
    }
    assert_eq!(
        report.best().map(|s| s.formula.as_str()),
        Some(report.rankings[0].formula.as_str())
    );
}

#[test]
fn admiralty_error_is_reproducible() {
    let registry = Registry::standard();
    let vessels = standard_dataset().unwrap();
    let formulas = standard_formulas(&registry);
    let first = run_formula_comparison(&vessels, &formulas).unwrap();
    let second = run_formula_comparison(&vessels, &formulas).unwrap();

    let a = first.score("admiralty").expect("admiralty scored");
    let b = second.score("admiralty").expect("admiralty scored");
    assert!((a.mean_absolute_error - b.mean_absolute_error).abs() < 1e-12);

    // Recompute by hand from the same formula.
    let formula = AdmiraltyFormula::new(&registry);
    let manual: f64 = vessels
        .iter()
        .map(|v| {
            let predicted = formula.predict(v).unwrap();
            ((predicted - v.power_hp) / v.power_hp * 100.0).abs()
        })
        .sum::<f64>()
        / vessels.len() as f64;
    assert!((a.mean_absolute_error - manual).abs() < 1e-9);
}

#[test]
fn bucket_formula_uses_fixed_coefficients() {
    assert_eq!(ShipTypeBuckets::coefficient(HullType::Corvette), 120.0);
    assert_eq!(ShipTypeBuckets::coefficient(HullType::Carrier), 320.0);
}

#[test]
fn class_coefficients_flag_outliers() {
    let vessels = standard_dataset().unwrap();
    let analysis = analyze_class_coefficients(&vessels).expect("analysis");

    let classes: Vec<HullType> = analysis.classes.iter().map(|c| c.hull_type).collect();
    assert_eq!(classes, HullType::ALL.to_vec());
    assert_eq!(
        analysis.classes.iter().map(|c| c.vessel_count).sum::<usize>(),
        vessels.len()
    );
    for class in &analysis.classes {
        assert!(
            (class.deviation - (class.adjusted_coefficient - analysis.fleet_adjusted_average)).abs()
                < 1e-9
        );
        assert_eq!(class.outlier, class.deviation.abs() > OUTLIER_THRESHOLD);
    }
    assert_eq!(
        analysis.outliers().count(),
        analysis.classes.iter().filter(|c| c.outlier).count()
    );
}

#[test]
fn displacement_factors_partition_the_fleet() {
    let vessels = standard_dataset().unwrap();
    let factors = displacement_factors(&vessels).expect("factors");
    assert_eq!(
        factors.iter().map(|f| f.vessel_count).sum::<usize>(),
        vessels.len()
    );
    assert_eq!(factors.len(), 5, "every bucket holds at least one vessel");
    assert!(factors.last().unwrap().max_displacement.is_none());
}

#[test]
fn factor_multipliers_average_to_fleet() {
    let vessels = standard_dataset().unwrap();
    let factors = displacement_factors(&vessels).unwrap();
    let fleet: f64 =
        vessels.iter().map(raw_coefficient).sum::<f64>() / vessels.len() as f64;
    for factor in &factors {
        assert!((factor.baseline_coefficient / fleet - factor.normalization_multiplier).abs() < 1e-12);
        assert!(factor.contains(factor.min_displacement));
    }
}

#[test]
fn fleet_summary_reports_means() {
    let vessels = standard_dataset().unwrap();
    let summary = fleet_summary(&vessels).expect("summary");
    assert_eq!(summary.vessel_count, 22);
    let mean_speed = vessels.iter().map(|v| v.max_speed_knots).sum::<f64>() / 22.0;
    assert!((summary.mean_max_speed - mean_speed).abs() < 1e-9);
    assert!(fleet_summary(&[]).is_none());
}

#[test]
fn custom_dataset_is_validated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let header = "name,class,nation,design_year,displacement_standard,displacement_full,length_m,beam_m,draught_m,max_speed_knots,cruise_speed_knots,power_hp,power_alternate_hp,shafts,propulsion,hull_form,vessel_type";

    let empty = dir.path().join("empty.csv");
    fs::write(&empty, format!("{header}\n")).unwrap();
    assert!(matches!(load_dataset(&empty), Err(CalibrationError::EmptyDataset)));

    let bad = dir.path().join("bad.csv");
    fs::write(
        &bad,
        format!("{header}\nGhost,Ghost,Nowhere,2000,3000,3500,120,14,4.5,28,16,0,,2,diesel,displacement,frigate\n"),
    )
    .unwrap();
    assert!(matches!(
        load_dataset(&bad),
        Err(CalibrationError::InvalidVessel { .. })
    ));

    let unknown = dir.path().join("unknown.csv");
    fs::write(
        &unknown,
        format!("{header}\nGhost,Ghost,Nowhere,2000,3000,3500,120,14,4.5,28,16,30000,,2,nuclear,displacement,frigate\n"),
    )
    .unwrap();
    assert!(load_dataset(&unknown).is_err());
}
