use std::{
    fs,
    path::{Path, PathBuf},
};

use fixture_core::FIXTURE_EXTENSION;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid params file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid params: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureSetParams {
    pub input_folder: PathBuf,
    pub output_file: PathBuf,
    pub scratch_file: Option<PathBuf>,
    pub class_name: Option<String>,
}

impl Default for FixtureSetParams {
    fn default() -> Self {
        Self {
            input_folder: PathBuf::from("fixtures"),
            output_file: PathBuf::from("schema.rs"),
            scratch_file: None,
            class_name: None,
        }
    }
}

impl FixtureSetParams {
    /// Load and validate params from a JSON document
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let content = fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&content)?;
        params.validate().map_err(ParamsError::Invalid)?;

        Ok(params)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.input_folder.as_os_str().is_empty() {
            return Err("input_folder is required".to_string());
        }

        if self.output_file.as_os_str().is_empty() {
            return Err("output_file is required".to_string());
        }

        if self.is_listed_as_fixture(&self.output_file) {
            return Err(format!(
                "output_file would be listed as a fixture: {}",
                self.output_file.display()
            ));
        }

        if let Some(scratch_file) = &self.scratch_file {
            if scratch_file.as_os_str().is_empty() {
                return Err("scratch_file must not be empty".to_string());
            }

            if scratch_file == &self.output_file {
                return Err("scratch_file must differ from output_file".to_string());
            }

            if self.is_listed_as_fixture(scratch_file) {
                return Err(format!(
                    "scratch_file would be listed as a fixture: {}",
                    scratch_file.display()
                ));
            }
        }

        if let Some(class_name) = &self.class_name {
            if !Self::is_valid_type_name(class_name) {
                return Err(format!("class_name is not a valid type name: {class_name}"));
            }
        }

        Ok(())
    }

    /// Validates if a given name can be used as a Rust type name.
    pub fn is_valid_type_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {
                name != "_" && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }

    fn is_listed_as_fixture(&self, path: &Path) -> bool {
        path.parent() == Some(self.input_folder.as_path())
            && path.extension().is_some_and(|ext| ext == FIXTURE_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        assert!(FixtureSetParams::default().validate().is_ok());
    }

    #[test]
    fn test_is_valid_type_name() {
        assert!(FixtureSetParams::is_valid_type_name("Response"));
        assert!(FixtureSetParams::is_valid_type_name("_Private2"));
        assert!(!FixtureSetParams::is_valid_type_name(""));
        assert!(!FixtureSetParams::is_valid_type_name("_"));
        assert!(!FixtureSetParams::is_valid_type_name("2Fast"));
        assert!(!FixtureSetParams::is_valid_type_name("has space"));
    }

    #[test]
    fn test_params_validation() {
        let params = FixtureSetParams {
            input_folder: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap_err(), "input_folder is required");

        let params = FixtureSetParams {
            output_file: PathBuf::from("fixtures/schema.json"),
            ..Default::default()
        };
        assert_eq!(
            params.validate().unwrap_err(),
            "output_file would be listed as a fixture: fixtures/schema.json"
        );

        // Same folder but another extension is fine
        let params = FixtureSetParams {
            output_file: PathBuf::from("fixtures/schema.rs"),
            ..Default::default()
        };
        assert!(params.validate().is_ok());

        let params = FixtureSetParams {
            scratch_file: Some(PathBuf::from("schema.rs")),
            ..Default::default()
        };
        assert_eq!(
            params.validate().unwrap_err(),
            "scratch_file must differ from output_file"
        );

        let params = FixtureSetParams {
            scratch_file: Some(PathBuf::from("fixtures/scratch.json")),
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = FixtureSetParams {
            class_name: Some("my-type".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.validate().unwrap_err(),
            "class_name is not a valid type name: my-type"
        );
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixtures.config.json");
        let value = json!({
            "input_folder": "tests/fixtures/users",
            "output_file": "src/users.rs",
            "class_name": "User",
        });
        fs::write(&path, value.to_string()).unwrap();

        let params = FixtureSetParams::from_json_file(&path).unwrap();
        assert_eq!(params.input_folder, PathBuf::from("tests/fixtures/users"));
        assert_eq!(params.class_name.as_deref(), Some("User"));
        assert_eq!(params.scratch_file, None);

        fs::write(&path, json!({"class_name": "not valid"}).to_string()).unwrap();
        let err = FixtureSetParams::from_json_file(&path).unwrap_err();
        assert!(matches!(err, ParamsError::Invalid(_)));

        fs::write(&path, "{").unwrap();
        let err = FixtureSetParams::from_json_file(&path).unwrap_err();
        assert!(matches!(err, ParamsError::Parse(_)));
    }
}
