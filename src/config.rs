//! Harness configuration from the environment.
//!
//! | Variable              | Values                              | Default          |
//! |-----------------------|-------------------------------------|------------------|
//! | `BESSEL_I_INVOCATION` | `surface`, `ignore`                 | `surface`        |
//! | `BESSEL_I_OVERFLOW`   | `error`, `ignore`                   | `ignore`         |
//! | `BESSEL_I_STRICT`     | `0`, `1`, `false`, `true`           | `false`          |
//! | `BESSEL_I_TYPES`      | comma list of `f32,f64,real_concept`| all three        |

use core::fmt;
use core::str::FromStr;

use crate::accuracy::InvocationPolicy;
use crate::types::OverflowPolicy;

pub const INVOCATION_VAR: &str = "BESSEL_I_INVOCATION";
pub const OVERFLOW_VAR: &str = "BESSEL_I_OVERFLOW";
pub const STRICT_VAR: &str = "BESSEL_I_STRICT";
pub const TYPES_VAR: &str = "BESSEL_I_TYPES";

/// A numeric type the suite can run over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeSelection {
    F32,
    F64,
    RealConcept,
}

impl TypeSelection {
    pub const ALL: [TypeSelection; 3] = [Self::F32, Self::F64, Self::RealConcept];

    pub const fn name(self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::RealConcept => "real_concept",
        }
    }
}

impl FromStr for TypeSelection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| ConfigError::invalid(TYPES_VAR, s))
    }
}

impl fmt::Display for TypeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error reading the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable holds a value outside its accepted set.
    InvalidValue { var: &'static str, value: String },
    /// `BESSEL_I_TYPES` selects no type.
    NoTypes,
}

impl ConfigError {
    fn invalid(var: &'static str, value: &str) -> Self {
        ConfigError::InvalidValue {
            var,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { var, value } => {
                write!(f, "invalid value for {var}: {value:?}")
            }
            ConfigError::NoTypes => write!(f, "{TYPES_VAR} selects no type"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// Settings for one harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// How rows the function cannot evaluate are treated.
    pub invocation: InvocationPolicy,
    /// Overflow policy passed to the function under test.
    pub overflow: OverflowPolicy,
    /// Exit with failure status when any dataset misses its tolerance.
    pub strict: bool,
    /// Types to run, in order.
    pub types: Vec<TypeSelection>,
}

impl Default for HarnessConfig {
    /// Datasets deliberately contain overflowing rows, so overflow yields
    /// ±∞ (which compares equal to an infinite expected value).
    fn default() -> Self {
        Self {
            invocation: InvocationPolicy::Surface,
            overflow: OverflowPolicy::Ignore,
            strict: false,
            types: TypeSelection::ALL.to_vec(),
        }
    }
}

impl HarnessConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name
    /// to its value (if set). Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(INVOCATION_VAR) {
            config.invocation = match value.trim().to_ascii_lowercase().as_str() {
                "surface" => InvocationPolicy::Surface,
                "ignore" => InvocationPolicy::Ignore,
                _ => return Err(ConfigError::invalid(INVOCATION_VAR, &value)),
            };
        }

        if let Some(value) = lookup(OVERFLOW_VAR) {
            config.overflow = match value.trim().to_ascii_lowercase().as_str() {
                "error" => OverflowPolicy::Error,
                "ignore" => OverflowPolicy::Ignore,
                _ => return Err(ConfigError::invalid(OVERFLOW_VAR, &value)),
            };
        }

        if let Some(value) = lookup(STRICT_VAR) {
            config.strict = match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" => true,
                "0" | "false" => false,
                _ => return Err(ConfigError::invalid(STRICT_VAR, &value)),
            };
        }

        if let Some(value) = lookup(TYPES_VAR) {
            let mut types = Vec::new();
            for name in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                let t: TypeSelection = name.parse()?;
                if !types.contains(&t) {
                    types.push(t);
                }
            }
            if types.is_empty() {
                return Err(ConfigError::NoTypes);
            }
            config.types = types;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults() {
        let config = HarnessConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, HarnessConfig::default());
        assert_eq!(config.invocation, InvocationPolicy::Surface);
        assert_eq!(config.overflow, OverflowPolicy::Ignore);
        assert!(!config.strict);
        assert_eq!(config.types, TypeSelection::ALL.to_vec());
    }

    #[test]
    fn all_variables() {
        let config = HarnessConfig::from_lookup(lookup(&[
            ("BESSEL_I_INVOCATION", "ignore"),
            ("BESSEL_I_OVERFLOW", "Error"),
            ("BESSEL_I_STRICT", "1"),
            ("BESSEL_I_TYPES", "real_concept, f32,f32"),
        ]))
        .unwrap();
        assert_eq!(config.invocation, InvocationPolicy::Ignore);
        assert_eq!(config.overflow, OverflowPolicy::Error);
        assert!(config.strict);
        assert_eq!(config.types, vec![TypeSelection::RealConcept, TypeSelection::F32]);
    }

    #[test]
    fn invalid_values() {
        let err = HarnessConfig::from_lookup(lookup(&[("BESSEL_I_STRICT", "yes")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: STRICT_VAR,
                value: "yes".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid value for BESSEL_I_STRICT: \"yes\"");

        let err = HarnessConfig::from_lookup(lookup(&[("BESSEL_I_TYPES", "f16")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: TYPES_VAR, .. }));

        let err = HarnessConfig::from_lookup(lookup(&[("BESSEL_I_TYPES", " , ")])).unwrap_err();
        assert_eq!(err, ConfigError::NoTypes);
    }

    #[test]
    fn type_names_round_trip() {
        for t in TypeSelection::ALL {
            assert_eq!(t.name().parse::<TypeSelection>(), Ok(t));
            assert_eq!(t.to_string(), t.name());
        }
    }
}
