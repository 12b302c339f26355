use crate::{
    constants::{DEFAULT_IGNORE_PATTERNS, IGNORE_FILE, WILDCARD},
    error::Result,
};
use log::{debug, info};
use std::{fs::read_to_string, io::ErrorKind, path::Path};

/// A single exclusion rule matched against entry names.
///
/// Matching is by name only, never by path, and is not glob matching:
/// a pattern such as `*.log` becomes `PrefixOf("")` and matches every name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreRule {
    /// The name must equal the rule.
    Exact(String),
    /// The name must start with the prefix.
    PrefixOf(String),
}

impl IgnoreRule {
    /// Parses a textual pattern. Everything before the first `*` becomes a
    /// prefix rule, a pattern without `*` is an exact rule.
    pub fn parse(pattern: &str) -> Self {
        match pattern.split_once(WILDCARD) {
            Some((prefix, _)) => IgnoreRule::PrefixOf(prefix.to_string()),
            None => IgnoreRule::Exact(pattern.to_string()),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            IgnoreRule::Exact(rule) => name == rule,
            IgnoreRule::PrefixOf(prefix) => name.starts_with(prefix.as_str()),
        }
    }
}

impl std::fmt::Display for IgnoreRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnoreRule::Exact(name) => write!(f, "{name}"),
            IgnoreRule::PrefixOf(prefix) => write!(f, "{prefix}{WILDCARD}"),
        }
    }
}

/// Returns true if any rule matches `name`.
pub fn should_ignore(name: &str, rules: &[IgnoreRule]) -> bool {
    rules.iter().any(|rule| rule.matches(name))
}

/// The rule set used while materializing one template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnorePolicy {
    rules: Vec<IgnoreRule>,
}

impl IgnorePolicy {
    pub fn new(rules: Vec<IgnoreRule>) -> Self {
        Self { rules }
    }

    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(patterns.into_iter().map(|p| IgnoreRule::parse(p.as_ref())).collect())
    }

    /// The built-in rules: version control metadata, dependency caches,
    /// build output and the raw `gitignore` template.
    pub fn defaults() -> Self {
        Self::from_patterns(DEFAULT_IGNORE_PATTERNS)
    }

    pub fn extend<I, S>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.rules.extend(patterns.into_iter().map(|p| IgnoreRule::parse(p.as_ref())));
    }

    pub fn rules(&self) -> &[IgnoreRule] {
        &self.rules
    }

    pub fn should_ignore(&self, name: &str) -> bool {
        should_ignore(name, &self.rules)
    }
}

/// Reads the optional ignore file at the template root.
///
/// Blank lines and `#` comments are skipped. A missing file yields no rules.
pub fn parse_ignore_file<P: AsRef<Path>>(template_root: P) -> Result<Vec<String>> {
    let ignore_path = template_root.as_ref().join(IGNORE_FILE);
    let contents = match read_to_string(&ignore_path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No {IGNORE_FILE} file found, using default patterns.");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let patterns: Vec<String> = contents
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();
    info!("Loaded the following ignore patterns from {IGNORE_FILE}: {patterns:?}");
    Ok(patterns)
}

/// Builds the complete policy for a template: defaults, then the template's
/// ignore file, then any extra patterns.
pub fn load_ignore_policy<P: AsRef<Path>>(
    template_root: P,
    extra_patterns: &[String],
) -> Result<IgnorePolicy> {
    let mut policy = IgnorePolicy::defaults();
    policy.extend(parse_ignore_file(template_root)?);
    policy.extend(extra_patterns);
    for rule in policy.rules() {
        debug!("Using ignore rule: {rule}");
    }
    Ok(policy)
}
