//! Declarative option schema with lazily evaluated, inter-dependent defaults.
//!
//! A schema is an ordered list of option specs. Resolution walks the specs in
//! declaration order, so a lazy default may read any sibling declared before
//! it (the payment-method `code` default reads the resolved `name`). Lazy
//! defaults run only when the caller left the option unset.

use crate::error::{FixtureError, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// JSON type categories an option is allowed to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Kind::Null, Value::Null)
                | (Kind::Bool, Value::Bool(_))
                | (Kind::Number, Value::Number(_))
                | (Kind::String, Value::String(_))
                | (Kind::Array, Value::Array(_))
                | (Kind::Object, Value::Object(_))
        )
    }

    fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

/// Names the JSON type of a value, for error messages.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

type LazyFn = Box<dyn Fn(&ResolvedOptions) -> Result<Value> + Send + Sync>;

/// How an option obtains its value when the caller leaves it unset.
pub enum DefaultRule {
    /// A fixed value.
    Literal(Value),
    /// Computed on demand; sees siblings resolved earlier in declaration
    /// order.
    Lazy(LazyFn),
    /// Left unset by the resolver; the owner of the schema materializes it
    /// afterwards (typically a repository read).
    External,
}

impl DefaultRule {
    pub fn lazy(f: impl Fn(&ResolvedOptions) -> Result<Value> + Send + Sync + 'static) -> Self {
        DefaultRule::Lazy(Box::new(f))
    }
}

struct OptionSpec {
    name: &'static str,
    allowed: &'static [Kind],
    default: DefaultRule,
}

impl OptionSpec {
    fn expected(&self) -> String {
        self.allowed
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

/// Option names mapped to concrete values, produced once per `create` call.
#[derive(Debug, Default)]
pub struct ResolvedOptions(BTreeMap<&'static str, Value>);

impl ResolvedOptions {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn str(&self, name: &'static str) -> Result<&str> {
        match self.0.get(name) {
            Some(Value::String(s)) => Ok(s),
            other => Err(mismatch(name, "string", other)),
        }
    }

    /// Like [`str`](Self::str) but treats null and absent as `None`.
    pub fn opt_str(&self, name: &'static str) -> Result<Option<&str>> {
        match self.0.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            other => Err(mismatch(name, "null or string", other)),
        }
    }

    pub fn bool(&self, name: &'static str) -> Result<bool> {
        match self.0.get(name) {
            Some(Value::Bool(b)) => Ok(*b),
            other => Err(mismatch(name, "bool", other)),
        }
    }

    pub fn object(&self, name: &'static str) -> Result<&Map<String, Value>> {
        match self.0.get(name) {
            Some(Value::Object(map)) => Ok(map),
            other => Err(mismatch(name, "object", other)),
        }
    }

    /// Returns the option's array if it was resolved, `None` if the spec left
    /// it for external materialization.
    pub fn array(&self, name: &'static str) -> Result<Option<&Vec<Value>>> {
        match self.0.get(name) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            other => Err(mismatch(name, "array", other)),
        }
    }
}

fn mismatch(option: &'static str, expected: &str, actual: Option<&Value>) -> FixtureError {
    FixtureError::TypeMismatch {
        option,
        expected: expected.to_string(),
        actual: actual.map(kind_of).unwrap_or("nothing"),
    }
}

/// Ordered option schema. Built once, reused across every `resolve` call.
#[derive(Default)]
pub struct OptionsResolver {
    specs: Vec<OptionSpec>,
}

impl OptionsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an option. Declaration order is resolution order.
    pub fn define(
        mut self,
        name: &'static str,
        allowed: &'static [Kind],
        default: DefaultRule,
    ) -> Self {
        self.specs.push(OptionSpec {
            name,
            allowed,
            default,
        });
        self
    }

    /// Merges caller-supplied values with the schema's defaults.
    ///
    /// Fails on unknown keys and type violations before evaluating any
    /// default. Lazy defaults run only for options the caller omitted.
    pub fn resolve(&self, supplied: Map<String, Value>) -> Result<ResolvedOptions> {
        if let Some(key) = supplied
            .keys()
            .find(|key| !self.specs.iter().any(|spec| spec.name == key.as_str()))
        {
            return Err(FixtureError::UnknownOption(key.clone()));
        }

        for spec in &self.specs {
            if let Some(value) = supplied.get(spec.name)
                && !spec.allowed.iter().any(|kind| kind.matches(value))
            {
                return Err(FixtureError::TypeMismatch {
                    option: spec.name,
                    expected: spec.expected(),
                    actual: kind_of(value),
                });
            }
        }

        let mut supplied = supplied;
        let mut resolved = ResolvedOptions::default();
        for spec in &self.specs {
            let value = match supplied.remove(spec.name) {
                Some(value) => value,
                None => match &spec.default {
                    DefaultRule::Literal(value) => value.clone(),
                    DefaultRule::Lazy(f) => f(&resolved)?,
                    DefaultRule::External => continue,
                },
            };
            resolved.0.insert(spec.name, value);
        }

        Ok(resolved)
    }
}
