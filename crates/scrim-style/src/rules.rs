#![forbid(unsafe_code)]

//! Declarative style description model.
//!
//! A style description is an ordered sequence of [`RuleGroup`]s, each keyed
//! by a structural selector. Groups for the same selector merge by shallow
//! override: later entries in the sequence win on conflicting properties.
//! Precedence between groups is carried entirely by sequence order, never by
//! selector specificity tricks.
//!
//! Invariants:
//! - `Declarations::set` replaces by property name, keeping the position of
//!   the first insertion, so output ordering stays stable under overrides.
//! - Zero-valued lengths are emitted like any other value; omission would
//!   fall back to an inherited value from a different rule group.

use ahash::AHashMap;
use core::fmt;

use crate::length::Length;

/// A single CSS-like property value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Length(Length),
    Number(f64),
    Str(String),
}

impl Value {
    /// Printable form of the value. A length prints its own unit, so
    /// dimensionless multipliers (line heights) stay bare numbers.
    #[must_use]
    pub fn resolve(&self) -> String {
        match self {
            Self::Length(l) => l.resolve(),
            Self::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Self::Str(s) => s.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve())
    }
}

impl From<Length> for Value {
    fn from(value: Length) -> Self {
        Self::Length(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// An ordered property block with set-replaces-by-name semantics.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Declarations(Vec<(String, Value)>);

impl Declarations {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Set a property. An existing entry is overwritten in place.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<Value>) {
        let property = property.into();
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.0.push((property, value)),
        }
    }

    /// Shallow override: apply every declaration of `other` on top of self.
    pub fn merge(&mut self, other: &Self) {
        for (property, value) in &other.0 {
            self.set(property.clone(), value.clone());
        }
    }

    #[must_use]
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.0.iter().find(|(p, _)| p == property).map(|(_, v)| v)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(p, v)| (p.as_str(), v))
    }
}

impl<P: Into<String>, V: Into<Value>> FromIterator<(P, V)> for Declarations {
    fn from_iter<T: IntoIterator<Item = (P, V)>>(iter: T) -> Self {
        let mut block = Self::new();
        for (p, v) in iter {
            block.set(p, v);
        }
        block
    }
}

/// A selector-keyed rule group with nested sub-groups.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleGroup {
    pub selector: String,
    pub declarations: Declarations,
    pub nested: Vec<RuleGroup>,
}

impl RuleGroup {
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            declarations: Declarations::new(),
            nested: Vec::new(),
        }
    }

    /// Add or override a declaration.
    #[must_use]
    pub fn decl(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.declarations.set(property, value);
        self
    }

    /// Add a nested rule group.
    #[must_use]
    pub fn nest(mut self, group: RuleGroup) -> Self {
        self.nested.push(group);
        self
    }

    /// Shallow-merge `other` into self: declarations override by name,
    /// nested groups merge by selector (recursively) or append.
    pub fn merge(&mut self, other: &RuleGroup) {
        self.declarations.merge(&other.declarations);
        for group in &other.nested {
            match self
                .nested
                .iter_mut()
                .find(|existing| existing.selector == group.selector)
            {
                Some(existing) => existing.merge(group),
                None => self.nested.push(group.clone()),
            }
        }
    }

    /// Look up a nested group by selector.
    #[must_use]
    pub fn nested_group(&self, selector: &str) -> Option<&RuleGroup> {
        self.nested.iter().find(|g| g.selector == selector)
    }
}

/// Merge an ordered sequence of rule groups by selector.
///
/// First-seen selector order is preserved; later groups with the same
/// selector override earlier ones property by property.
#[must_use]
pub fn flatten(groups: Vec<RuleGroup>) -> Vec<RuleGroup> {
    let mut out: Vec<RuleGroup> = Vec::with_capacity(groups.len());
    let mut index: AHashMap<String, usize> = AHashMap::with_capacity(groups.len());

    for group in groups {
        match index.get(&group.selector) {
            Some(&at) => out[at].merge(&group),
            None => {
                index.insert(group.selector.clone(), out.len());
                out.push(group);
            }
        }
    }

    out
}
