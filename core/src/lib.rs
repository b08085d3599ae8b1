mod config;
mod params;
mod trajectory;
extern crate nalgebra as na;
extern crate serde;

pub use config::Config;
pub use config::ConfigError;
pub use config::InitialConditions;
pub use config::IntegrationOptions;
pub use config::Method;
pub use params::Parameters;
pub use trajectory::{load_trajectory_from_file, save_trajectory_to_file};
pub use trajectory::SaveLoadError;
pub use trajectory::TrajectoryWriter;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use na::Vector3;
    use tempdir::TempDir;
    use crate::{Config, ConfigError, InitialConditions, IntegrationOptions, Method, Parameters};
    use crate::{load_trajectory_from_file, save_trajectory_to_file, SaveLoadError};

    fn test_config() -> Config {
        Config {
            initial_conditions: InitialConditions { x: 1.0, y: 0.0, z: 0.0 },
            parameters: Parameters { sigma: 3.0, r: 2.0, b: 1.0 },
            integration: IntegrationOptions {
                t_final: 10.0,
                method: Method::Rk45,
                dense_output: false,
                points: None,
            },
        }
    }

    fn temp_file(name: &str) -> PathBuf {
        let temp_dir = TempDir::new("test_dir").expect("Can't create temp directory");
        let mut path = temp_dir.into_path();
        path.push(name);
        path
    }

    #[test]
    fn config_serialization() {
        let path = temp_file("config.json");
        let config = test_config();
        config.save_to_file(&path).expect("Can't save config");
        let loaded = Config::load_from_file(&path).expect("Can't load config");
        assert_eq!(loaded, config);
    }

    #[test]
    fn config_defaults() {
        let path = temp_file("config.json");
        std::fs::write(
            &path,
            r#"{
                "initial_conditions": {"x": 1.0, "y": 0.0, "z": 0.0},
                "parameters": {"sigma": 3.0, "r": 2.0, "b": 1.0},
                "integration": {"t_final": 10.0}
            }"#,
        )
        .expect("Can't write config");
        let config = Config::load_from_file(&path).expect("Can't load config");
        assert_eq!(config.integration.method, Method::Rk45);
        assert!(!config.integration.dense_output);
        assert_eq!(config.integration.points, None);
    }

    #[test]
    fn config_missing_points() {
        let mut config = test_config();
        config.integration.dense_output = true;
        assert!(matches!(config.validate(), Err(ConfigError::MissingPoints)));
    }

    #[test]
    fn config_zero_points() {
        let mut config = test_config();
        config.integration.dense_output = true;
        config.integration.points = Some(0);
        assert!(matches!(config.validate(), Err(ConfigError::ZeroPoints)));
    }

    #[test]
    fn config_non_positive_final_time() {
        let mut config = test_config();
        config.integration.t_final = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveFinalTime(_))
        ));
        config.integration.t_final = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveFinalTime(_))
        ));
    }

    #[test]
    fn config_method_must_be_string() {
        let path = temp_file("config.json");
        std::fs::write(
            &path,
            r#"{
                "initial_conditions": {"x": 1.0, "y": 0.0, "z": 0.0},
                "parameters": {"sigma": 3.0, "r": 2.0, "b": 1.0},
                "integration": {"t_final": 10.0, "method": 123}
            }"#,
        )
        .expect("Can't write config");
        assert!(matches!(
            Config::load_from_file(&path),
            Err(ConfigError::CantRead(_))
        ));
    }

    #[test]
    fn config_unknown_method() {
        let path = temp_file("config.json");
        std::fs::write(
            &path,
            r#"{
                "initial_conditions": {"x": 1.0, "y": 0.0, "z": 0.0},
                "parameters": {"sigma": 3.0, "r": 2.0, "b": 1.0},
                "integration": {"t_final": 10.0, "method": "LSODA"}
            }"#,
        )
        .expect("Can't write config");
        assert!(matches!(
            Config::load_from_file(&path),
            Err(ConfigError::CantRead(_))
        ));
    }

    #[test]
    fn trajectory_round_trip() {
        let path = temp_file("trajectory.csv");
        let times = vec![0.0, 0.1, 0.30000000000000004, 1.0 / 3.0];
        let states = vec![
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.9, 0.1, 0.01),
            Vector3::new(0.8123456789012345, 0.2, 0.02),
            Vector3::new(-0.7, 1e-300, 3.0e20),
        ];
        save_trajectory_to_file(&times, &states, &path).expect("Can't save trajectory");
        let (loaded_times, loaded_states) =
            load_trajectory_from_file(&path).expect("Can't load trajectory");
        assert_eq!(loaded_times, times);
        assert_eq!(loaded_states, states);
    }

    #[test]
    fn trajectory_rejects_foreign_header() {
        let path = temp_file("trajectory.csv");
        std::fs::write(&path, "time,a,b,c\n0.0,1.0,2.0,3.0\n").expect("Can't write file");
        assert!(matches!(
            load_trajectory_from_file(&path),
            Err(SaveLoadError::BadHeader)
        ));
    }

    #[test]
    fn trajectory_rejects_malformed_record() {
        let path = temp_file("trajectory.csv");
        std::fs::write(&path, "t,x,y,z\n0.0,1.0,2.0,3.0\n0.1,one,2.0,3.0\n")
            .expect("Can't write file");
        assert!(matches!(
            load_trajectory_from_file(&path),
            Err(SaveLoadError::BadRecord(1))
        ));
    }
}
