//! Expected error rates per build environment, type and dataset.
//!
//! Rules are tried in registration order and the first one whose six
//! matchers all accept wins; with no match the strictest tolerance of one
//! epsilon peak and RMS applies. Register specific rules (a platform known
//! to be less accurate) before generic ones.

use core::fmt;

use log::debug;

/// Allowed peak and RMS error, in epsilons of the type under test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub max_peak: f64,
    pub max_rms: f64,
}

impl Tolerance {
    /// Used when no rule matches.
    pub const STRICTEST: Tolerance = Tolerance::new(1.0, 1.0);

    pub const fn new(max_peak: f64, max_rms: f64) -> Self {
        Self { max_peak, max_rms }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::STRICTEST
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "peak {}ε, rms {}ε", self.max_peak, self.max_rms)
    }
}

/// Predicate over one field of a rule.
#[derive(Clone, Copy)]
pub enum Matcher {
    /// Accepts every value.
    Any,
    /// Accepts exactly this value.
    Exact(&'static str),
    /// Accepts values containing this substring.
    Contains(&'static str),
    /// Accepts any of these values exactly.
    OneOf(&'static [&'static str]),
    /// Accepts values for which the function returns `true`.
    Predicate(fn(&str) -> bool),
}

impl Matcher {
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Matcher::Any => true,
            Matcher::Exact(s) => value == *s,
            Matcher::Contains(s) => value.contains(*s),
            Matcher::OneOf(list) => list.iter().any(|s| *s == value),
            Matcher::Predicate(p) => p(value),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Any => write!(f, "Any"),
            Matcher::Exact(s) => f.debug_tuple("Exact").field(s).finish(),
            Matcher::Contains(s) => f.debug_tuple("Contains").field(s).finish(),
            Matcher::OneOf(list) => f.debug_tuple("OneOf").field(list).finish(),
            Matcher::Predicate(_) => write!(f, "Predicate(..)"),
        }
    }
}

/// Where the tests run, as reported by the toolchain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub compiler: String,
    pub stdlib: String,
    pub platform: String,
}

impl Environment {
    /// The running build: `rustc`, `std`, and `<os>-<arch>`.
    #[must_use]
    pub fn current() -> Self {
        Self {
            compiler: "rustc".to_string(),
            stdlib: "std".to_string(),
            platform: format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH),
        }
    }

    pub fn new(compiler: &str, stdlib: &str, platform: &str) -> Self {
        Self {
            compiler: compiler.to_string(),
            stdlib: stdlib.to_string(),
            platform: platform.to_string(),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.compiler, self.stdlib, self.platform)
    }
}

/// One entry of the registry: six matchers and the tolerance they select.
///
/// ```
/// use bessel_accuracy::accuracy::{Matcher, ToleranceRule};
///
/// let rule = ToleranceRule::new(100.0, 50.0)
///     .platform(Matcher::Contains("macos"))
///     .type_name(Matcher::OneOf(&["f64", "real_concept"]));
/// assert_eq!(rule.tolerance().max_peak, 100.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ToleranceRule {
    compiler: Matcher,
    stdlib: Matcher,
    platform: Matcher,
    type_name: Matcher,
    dataset: Matcher,
    function: Matcher,
    tolerance: Tolerance,
}

impl ToleranceRule {
    /// A rule matching everything; narrow it with the builder methods.
    pub const fn new(max_peak: f64, max_rms: f64) -> Self {
        Self {
            compiler: Matcher::Any,
            stdlib: Matcher::Any,
            platform: Matcher::Any,
            type_name: Matcher::Any,
            dataset: Matcher::Any,
            function: Matcher::Any,
            tolerance: Tolerance::new(max_peak, max_rms),
        }
    }

    #[must_use]
    pub const fn compiler(mut self, m: Matcher) -> Self {
        self.compiler = m;
        self
    }

    #[must_use]
    pub const fn stdlib(mut self, m: Matcher) -> Self {
        self.stdlib = m;
        self
    }

    #[must_use]
    pub const fn platform(mut self, m: Matcher) -> Self {
        self.platform = m;
        self
    }

    #[must_use]
    pub const fn type_name(mut self, m: Matcher) -> Self {
        self.type_name = m;
        self
    }

    #[must_use]
    pub const fn dataset(mut self, m: Matcher) -> Self {
        self.dataset = m;
        self
    }

    #[must_use]
    pub const fn function(mut self, m: Matcher) -> Self {
        self.function = m;
        self
    }

    pub const fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    fn matches(&self, env: &Environment, type_name: &str, dataset: &str, function: &str) -> bool {
        self.compiler.matches(&env.compiler)
            && self.stdlib.matches(&env.stdlib)
            && self.platform.matches(&env.platform)
            && self.type_name.matches(type_name)
            && self.dataset.matches(dataset)
            && self.function.matches(function)
    }
}

/// Ordered collection of [`ToleranceRule`]s. Read-only once populated.
#[derive(Debug, Clone, Default)]
pub struct ToleranceRegistry {
    rules: Vec<ToleranceRule>,
}

impl ToleranceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule after all previously registered ones.
    pub fn register(&mut self, rule: ToleranceRule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Tolerance of the first matching rule, or [`Tolerance::STRICTEST`].
    #[must_use]
    pub fn lookup(&self, env: &Environment, type_name: &str, dataset: &str, function: &str) -> Tolerance {
        match self
            .rules
            .iter()
            .position(|r| r.matches(env, type_name, dataset, function))
        {
            Some(i) => {
                debug!("{function}<{type_name}> \"{dataset}\": rule {i} ({})", self.rules[i].tolerance);
                self.rules[i].tolerance
            }
            None => {
                debug!("{function}<{type_name}> \"{dataset}\": no rule, using strictest tolerance");
                Tolerance::STRICTEST
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linux() -> Environment {
        Environment::new("rustc", "std", "linux-x86_64")
    }

    fn macos() -> Environment {
        Environment::new("rustc", "std", "macos-aarch64")
    }

    fn registry() -> ToleranceRegistry {
        let mut r = ToleranceRegistry::new();
        r.register(
            ToleranceRule::new(100.0, 50.0)
                .platform(Matcher::Contains("macos"))
                .type_name(Matcher::Exact("f64")),
        );
        r.register(ToleranceRule::new(15.0, 10.0).type_name(Matcher::Exact("f64")));
        r
    }

    #[test]
    fn matchers() {
        assert!(Matcher::Any.matches(""));
        assert!(Matcher::Exact("f64").matches("f64"));
        assert!(!Matcher::Exact("f64").matches("f6"));
        assert!(Matcher::Contains("mac").matches("macos-aarch64"));
        assert!(Matcher::OneOf(&["f64", "real_concept"]).matches("real_concept"));
        assert!(!Matcher::OneOf(&["f64", "real_concept"]).matches("f32"));
        assert!(Matcher::Predicate(|s| s.ends_with("Data")).matches("Bessel I0: Mathworld Data"));
    }

    #[test]
    fn first_match_wins() {
        let r = registry();
        assert_eq!(r.lookup(&macos(), "f64", "any", "f"), Tolerance::new(100.0, 50.0));
        assert_eq!(r.lookup(&linux(), "f64", "any", "f"), Tolerance::new(15.0, 10.0));
    }

    #[test]
    fn registration_order_matters() {
        // Generic rule first shadows the platform rule
        let mut r = ToleranceRegistry::new();
        r.register(ToleranceRule::new(15.0, 10.0).type_name(Matcher::Exact("f64")));
        r.register(ToleranceRule::new(100.0, 50.0).platform(Matcher::Contains("macos")));
        assert_eq!(r.lookup(&macos(), "f64", "any", "f"), Tolerance::new(15.0, 10.0));
        assert_eq!(r.lookup(&macos(), "f32", "any", "f"), Tolerance::new(100.0, 50.0));
    }

    #[test]
    fn no_match_is_strictest() {
        let r = registry();
        assert_eq!(r.lookup(&linux(), "f32", "any", "f"), Tolerance::STRICTEST);
        assert_eq!(ToleranceRegistry::new().lookup(&linux(), "f64", "d", "f"), Tolerance::new(1.0, 1.0));
    }

    #[test]
    fn every_field_is_matched() {
        let mut r = ToleranceRegistry::new();
        r.register(
            ToleranceRule::new(7.0, 3.0)
                .compiler(Matcher::Exact("rustc"))
                .stdlib(Matcher::Exact("std"))
                .dataset(Matcher::Contains("Random"))
                .function(Matcher::Exact("cyl_bessel_i")),
        );
        let env = linux();
        assert_eq!(r.lookup(&env, "f64", "Bessel In: Random Data", "cyl_bessel_i"), Tolerance::new(7.0, 3.0));
        assert_eq!(r.lookup(&env, "f64", "Bessel In: Mathworld Data", "cyl_bessel_i"), Tolerance::STRICTEST);
        assert_eq!(r.lookup(&env, "f64", "Bessel In: Random Data", "cyl_bessel_k"), Tolerance::STRICTEST);
        let other = Environment::new("gcc", "std", "linux-x86_64");
        assert_eq!(r.lookup(&other, "f64", "Bessel In: Random Data", "cyl_bessel_i"), Tolerance::STRICTEST);
    }

    #[test]
    fn current_environment() {
        let env = Environment::current();
        assert_eq!(env.compiler, "rustc");
        assert!(env.platform.starts_with(std::env::consts::OS));
        assert_eq!(env.to_string(), format!("rustc, std, {}", env.platform));
    }
}
