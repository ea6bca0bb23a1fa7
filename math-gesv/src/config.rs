//! Run configuration
//!
//! Values come from three layers, later ones winning: built-in defaults, an
//! optional JSON file given with `--config`, then the command line.

use crate::args::Cli;
use crate::error::{GesvError, Result};
use crate::fill::FillPattern;
use math_lapack::{BackendKind, SystemDims};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default order of the matrix
pub const DEFAULT_N: usize = 5;
/// Default number of right-hand sides
pub const DEFAULT_NRHS: usize = 1;

/// Backend used when neither the configuration file nor the command line
/// chooses one. Set at build time by the `use-*` features.
pub fn default_backend() -> BackendKind {
    if cfg!(feature = "use-gemm") {
        BackendKind::GemmPlaceholder
    } else if cfg!(feature = "use-native") {
        BackendKind::Native
    } else if cfg!(feature = "use-recursive") {
        BackendKind::Recursive
    } else {
        BackendKind::Reference
    }
}

/// Everything one run needs to know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GesvConfig {
    /// Order of A
    pub n: usize,
    /// Number of right-hand sides
    pub nrhs: usize,
    /// Seed for the random fill; `None` draws a fresh seed
    pub seed: Option<u64>,
    /// Which backend runs the computation
    pub backend: BackendKind,
    /// How A is filled
    pub fill: FillPattern,
    /// Print the system and the results
    pub print: bool,
}

impl Default for GesvConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            nrhs: DEFAULT_NRHS,
            seed: None,
            backend: default_backend(),
            fill: FillPattern::default(),
            print: false,
        }
    }
}

impl GesvConfig {
    /// Load a configuration file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let config_error = |message: String| GesvError::Config {
            path: path.to_path_buf(),
            message,
        };
        let text = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        let config = serde_json::from_str(&text).map_err(|e| config_error(e.to_string()))?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Build the configuration for a parsed command line and validate it.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    /// Overwrite fields given on the command line.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(n) = cli.n {
            self.n = n;
        }
        if let Some(nrhs) = cli.nrhs {
            self.nrhs = nrhs;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(backend) = cli.backend {
            self.backend = backend;
        }
        if let Some(fill) = cli.fill {
            self.fill = fill;
        }
        self.print |= cli.print;
    }

    /// Check the values before any buffer is allocated.
    pub fn validate(&self) -> Result<()> {
        check_count("n", self.n)?;
        check_count("nrhs", self.nrhs)?;
        if !self.backend.is_available() {
            return Err(GesvError::InvalidArgument(format!(
                "backend '{}' is not compiled into this build (enable the 'native' feature)",
                self.backend
            )));
        }
        Ok(())
    }

    /// Tightly packed dimensions for this configuration.
    pub fn dims(&self) -> SystemDims {
        SystemDims::square(self.n, self.nrhs)
    }
}

fn check_count(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(GesvError::InvalidArgument(format!(
            "{name} must be a positive integer"
        )));
    }
    if i32::try_from(value).is_err() {
        return Err(GesvError::InvalidArgument(format!(
            "{name} = {value} exceeds the largest supported size {}",
            i32::MAX
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "math-gesv-{}-{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = GesvConfig::default();
        assert_eq!(config.n, 5);
        assert_eq!(config.nrhs, 1);
        assert_eq!(config.fill, FillPattern::Random);
        assert!(!config.print);
        assert_eq!(config.dims(), SystemDims::square(5, 1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides_defaults() {
        let cli = Cli {
            n: Some(3),
            nrhs: Some(2),
            seed: Some(11),
            backend: Some(BackendKind::Recursive),
            ..Cli::default()
        };
        let config = GesvConfig::resolve(&cli).unwrap();
        assert_eq!(config.n, 3);
        assert_eq!(config.nrhs, 2);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.backend, BackendKind::Recursive);
    }

    #[test]
    fn test_zero_sizes_rejected() {
        let cli = Cli {
            n: Some(0),
            ..Cli::default()
        };
        let err = GesvConfig::resolve(&cli).unwrap_err();
        assert!(err.is_argument_error());

        let config = GesvConfig {
            nrhs: 0,
            ..GesvConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_count_rejected() {
        let config = GesvConfig {
            n: i32::MAX as usize + 1,
            ..GesvConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_json_file_then_cli() {
        let path = temp_config(
            "layered",
            r#"{ "n": 8, "nrhs": 3, "fill": "identity", "backend": "recursive" }"#,
        );
        let cli = Cli {
            nrhs: Some(4),
            config: Some(path.clone()),
            ..Cli::default()
        };
        let config = GesvConfig::resolve(&cli).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.n, 8);
        assert_eq!(config.nrhs, 4);
        assert_eq!(config.fill, FillPattern::Identity);
        assert_eq!(config.backend, BackendKind::Recursive);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let path = temp_config("broken", "{ \"n\": ");
        let err = GesvConfig::from_json_file(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, GesvError::Config { .. }));
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let path = temp_config("unknown-key", r#"{ "order": 4 }"#);
        let err = GesvConfig::from_json_file(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = GesvConfig::from_json_file(Path::new("/nonexistent/gesv.json")).unwrap_err();
        assert!(matches!(err, GesvError::Config { .. }));
    }
}
