use std::fs;

use naval_power_calculator::config::{
    ConfigError, load_design_requests, load_vessel_records, parse_vessel_records,
};
use naval_power_calculator::engine::{EngineDesignInput, EngineError, EnginePriority};
use naval_power_calculator::propulsion::HullType;

#[test]
fn yaml_design_requests_fill_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("designs.yaml");
    fs::write(
        &path,
        r#"
- label: light frigate
  configuration: CODOG
  top_speed_knots: 29
  displacement_tonnes: 3500
  drag_coefficient: 0.12
  hull_type: frigate
- configuration: IEP
  top_speed_knots: 30
  cruising_speed_knots: 18
  priority: reliability
  displacement_tonnes: 8000
  drag_coefficient: 0.1
  hull_type: destroyer
"#,
    )
    .expect("write designs");

    let records = load_design_requests(&path).expect("load designs");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].label.as_deref(), Some("light frigate"));
    assert_eq!(records[0].priority, "balanced");
    assert!(records[0].cruising_speed_knots.is_none());

    let input = EngineDesignInput::try_from(&records[1]).expect("convert");
    assert_eq!(input.priority, EnginePriority::Reliability);
    assert_eq!(input.hull_type, HullType::Destroyer);
    assert_eq!(input.cruising_speed_knots, Some(18.0));
}

#[test]
fn toml_design_requests_use_designs_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("designs.toml");
    fs::write(
        &path,
        r#"
[[designs]]
configuration = "diesel"
top_speed_knots = 24.0
displacement_tonnes = 1800.0
drag_coefficient = 0.15
hull_type = "corvette"
priority = "turbo"
"#,
    )
    .unwrap();

    let records = load_design_requests(&path).expect("load designs");
    assert_eq!(records.len(), 1);
    assert!(matches!(
        EngineDesignInput::try_from(&records[0]),
        Err(EngineError::UnknownPriority(p)) if p == "turbo"
    ));
}

#[test]
fn misspelled_design_fields_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("designs.yaml");
    fs::write(
        &path,
        r#"
- configuration: CODOG
  top_speed_knots: 29
  cruise_speed_knots: 18
  displacement_tonnes: 3500
  drag_coefficient: 0.12
  hull_type: frigate
"#,
    )
    .unwrap();
    assert!(matches!(
        load_design_requests(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn vessel_csv_skips_comments_and_trims() {
    let csv = "\
# comment line
name,class,nation,design_year,displacement_standard,displacement_full,length_m,beam_m,draught_m,max_speed_knots,cruise_speed_knots,power_hp,power_alternate_hp,shafts,propulsion,hull_form,vessel_type
 Test Ship ,Test,Nowhere,2000,3000,3500,120.0,14.0,4.5,28.0,16.0,40000,,2,CODOG,displacement,frigate
";
    let records = parse_vessel_records(csv.as_bytes()).expect("parse");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Test Ship");
    assert_eq!(records[0].power_alternate_hp, None);
    assert_eq!(records[0].displacement_full, 3500.0);
}

#[test]
fn missing_files_surface_io_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.csv");
    assert!(matches!(
        load_vessel_records(&missing),
        Err(ConfigError::Io(_))
    ));
}
