//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against the criteria engine. A fixture
//! declares criteria with their vocabularies, then a sequence of cases applied
//! to one registry in order: state changes, an optional reset, and expectations
//! on formatting, modification status and match results.

use criteria::prelude::*;
use serde::Deserialize;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub criteria: Vec<CriterionSpec>,
    pub cases: Vec<TestCase>,
}

/// A criterion and its vocabulary
#[derive(Debug, Deserialize)]
pub struct CriterionSpec {
    pub name: String,
    pub kind: CriterionKind,
    #[serde(default)]
    pub values: Vec<ValueSpec>,
    /// Pairs that must be refused by `add_value_pair`
    #[serde(default)]
    pub rejected: Vec<ValueSpec>,
}

#[derive(Debug, Deserialize)]
pub struct ValueSpec {
    pub literal: String,
    pub numerical: i32,
}

/// One step: mutate, then check
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    #[serde(default)]
    pub set: Vec<StateChange>,
    #[serde(default)]
    pub reset: bool,
    #[serde(default)]
    pub expect: Vec<Expectation>,
    /// Expected `list_selection_criteria(false, true)`
    #[serde(default)]
    pub list: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct StateChange {
    pub criterion: String,
    pub state: i32,
}

#[derive(Debug, Deserialize)]
pub struct Expectation {
    pub criterion: String,
    #[serde(default)]
    pub formatted: Option<String>,
    #[serde(default)]
    pub state: Option<i32>,
    #[serde(default)]
    pub modified: Option<bool>,
    #[serde(default)]
    pub matches: Vec<MatchExpectation>,
}

/// `result` for a successful match, or `error: true` for an unknown method
#[derive(Debug, Deserialize)]
pub struct MatchExpectation {
    pub method: String,
    pub value: i32,
    #[serde(default)]
    pub result: Option<bool>,
    #[serde(default)]
    pub error: bool,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Builder: Register declared criteria
// ═══════════════════════════════════════════════════════════════════════════════

impl CriterionSpec {
    fn register(&self, criteria: &mut Criteria) -> Result<(), String> {
        let criterion = criteria
            .create_criterion(self.name.as_str(), self.kind)
            .map_err(|e| e.to_string())?;

        for value in &self.values {
            criterion
                .add_value_pair(value.numerical, value.literal.as_str())
                .map_err(|e| e.to_string())?;
        }
        for value in &self.rejected {
            match criterion.add_value_pair(value.numerical, value.literal.as_str()) {
                Err(CriterionError::InvalidValue { .. }) => {}
                other => {
                    return Err(format!(
                        "expected {} = {} to be rejected, got {other:?}",
                        value.literal, value.numerical
                    ))
                }
            }
        }
        Ok(())
    }
}

impl Fixture {
    /// Parse a fixture from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file with `---` separators
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            fixtures.push(Self::deserialize(doc)?);
        }
        Ok(fixtures)
    }

    /// Build the registry declared by this fixture
    pub fn build(&self) -> Result<Criteria, String> {
        let mut criteria = Criteria::new();
        for declared in &self.criteria {
            declared.register(&mut criteria)?;
        }
        Ok(criteria)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Runner
// ═══════════════════════════════════════════════════════════════════════════════

/// Result of running a single test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub failures: Vec<String>,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

impl TestCase {
    fn run(&self, criteria: &mut Criteria) -> CaseResult {
        let mut failures = Vec::new();

        for change in &self.set {
            match criteria.get_criterion_mut(&change.criterion) {
                Some(c) => c.set_criterion_state(change.state),
                None => failures.push(format!("no criterion '{}'", change.criterion)),
            }
        }
        if self.reset {
            criteria.reset_modified_status();
        }

        for expectation in &self.expect {
            match criteria.get_criterion(&expectation.criterion) {
                Some(c) => expectation.check(c, &mut failures),
                None => failures.push(format!("no criterion '{}'", expectation.criterion)),
            }
        }

        if let Some(list) = &self.list {
            let actual = criteria.list_selection_criteria(false, true);
            if &actual != list {
                failures.push(format!("list: expected {list:?}, got {actual:?}"));
            }
        }

        CaseResult {
            case_name: self.name.clone(),
            failures,
        }
    }
}

impl Expectation {
    fn check(&self, criterion: &Criterion, failures: &mut Vec<String>) {
        let name = &self.criterion;
        if let Some(formatted) = &self.formatted {
            let actual = criterion.formatted_state();
            if &actual != formatted {
                failures.push(format!("{name}: formatted {formatted:?}, got {actual:?}"));
            }
        }
        if let Some(state) = self.state {
            let actual = criterion.criterion_state();
            if actual != state {
                failures.push(format!("{name}: state {state}, got {actual}"));
            }
        }
        if let Some(modified) = self.modified {
            let actual = criterion.has_been_modified();
            if actual != modified {
                failures.push(format!("{name}: modified {modified}, got {actual}"));
            }
        }
        for m in &self.matches {
            let actual = criterion.matches(&m.method, m.value);
            let ok = match (&actual, m.error, m.result) {
                (Err(CriterionError::UnknownMatchMethod { .. }), true, _) => true,
                (Ok(r), false, Some(expected)) => *r == expected,
                _ => false,
            };
            if !ok {
                failures.push(format!(
                    "{name}: {} {}: expected {}, got {actual:?}",
                    m.method,
                    m.value,
                    if m.error {
                        "UnknownMatchMethod".to_owned()
                    } else {
                        format!("{:?}", m.result)
                    }
                ));
            }
        }
    }
}

impl Fixture {
    /// Run all test cases in order against one registry
    pub fn run(&self) -> Result<Vec<CaseResult>, String> {
        let mut criteria = self.build()?;
        Ok(self
            .cases
            .iter()
            .map(|case| case.run(&mut criteria))
            .collect())
    }

    /// Run all test cases and panic on first failure
    pub fn run_and_assert(&self) {
        let results = self
            .run()
            .unwrap_or_else(|e| panic!("Fixture '{}' failed to build: {e}", self.name));
        for result in results {
            assert!(
                result.passed(),
                "Fixture '{}' case '{}' failed:\n  {}",
                self.name,
                result.case_name,
                result.failures.join("\n  ")
            );
        }
    }
}
