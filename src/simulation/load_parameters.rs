// src/simulation/load_parameters.rs

use std::error::Error;
use std::fs::File;

use serde_yaml::from_reader;

use crate::config::{parameters::VehicleParameters, scenario::Scenario};

/// 車両パラメータの読み込み
pub fn load_vehicle_parameters(path: &str) -> Result<VehicleParameters, Box<dyn Error>> {
    let file = File::open(path)?;
    let params: VehicleParameters = from_reader(file)?;
    Ok(params)
}

/// シナリオの読み込み
pub fn load_scenario(path: &str) -> Result<Scenario, Box<dyn Error>> {
    let file = File::open(path)?;
    let scenario: Scenario = from_reader(file)?;
    Ok(scenario)
}

#[cfg(test)]
mod tests {
    use serde_yaml::from_str;

    use crate::config::{parameters::VehicleParameters, scenario::Scenario};

    /// test_parse_vehicle_parameters
    /// YAML文字列から各フィールドが読み込まれることを確認します。
    #[test]
    fn test_parse_vehicle_parameters() {
        let yaml = "\
target_speed: 10.0
mass: 1200.0
engine_gain: 50.0
air_resistance_force: 30.0
";
        let params: VehicleParameters = from_str(yaml).unwrap();
        assert_eq!(params.target_speed, 10.0);
        assert_eq!(params.mass, 1200.0);
        assert_eq!(params.engine_gain, 50.0);
        assert_eq!(params.air_resistance_force, 30.0);
    }

    /// test_parse_scenario
    /// ウェイポイント列・目的地・摩擦区間が読み込まれることを確認します。
    /// is_finish_option は省略時 false になります。
    #[test]
    fn test_parse_scenario() {
        let yaml = "\
grid_scale: 2.0
waypoints:
  - id: gate
    position: [0.0, 0.0]
  - id: library
    position: [10.0, 0.0]
    is_finish_option: true
destination_id: library
friction:
  coefficient: 0.4
  active: true
  range_start_index: 0
  range_end_index: 1
";
        let scenario: Scenario = from_str(yaml).unwrap();
        assert_eq!(scenario.grid_scale, 2.0);
        assert_eq!(scenario.waypoints.len(), 2);
        assert_eq!(scenario.waypoints[0].id, "gate");
        assert!(!scenario.waypoints[0].is_finish_option);
        assert!(scenario.waypoints[1].is_finish_option);
        assert_eq!(scenario.destination_id, "library");
        assert!(scenario.friction.active);
        assert_eq!(scenario.friction.range_end_index, 1);
    }
}
