//! Wiring plan value objects
//!
//! A wiring plan is a plain data description of how to construct and
//! assemble the runtime cache objects: which factory to invoke, with which
//! ordered constructor arguments, and which properties to set afterwards.
//! The plan carries no behavior; an external dependency-injection container
//! interprets it and performs the actual instantiation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::CACHES_PROPERTY;

/// A by-name reference into the consuming container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeanRef(String);

impl BeanRef {
    /// Create a reference to the bean registered under `name`
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// The referenced bean name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BeanRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ref:{}", self.0)
    }
}

/// A single value inside a wiring directive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WiringValue {
    /// Literal string value
    String(String),
    /// Literal non-negative integer value
    Integer(u64),
    /// Reference to a bean wired elsewhere in the scope
    Reference(BeanRef),
    /// Nested definition, instantiated inline by the container
    Definition(Box<WiringDirective>),
    /// Ordered list of values
    List(Vec<WiringValue>),
}

impl WiringValue {
    /// View this value as a nested definition, if it is one
    pub fn as_definition(&self) -> Option<&WiringDirective> {
        match self {
            Self::Definition(directive) => Some(directive),
            _ => None,
        }
    }

    /// View this value as a bean reference, if it is one
    pub fn as_reference(&self) -> Option<&BeanRef> {
        match self {
            Self::Reference(bean_ref) => Some(bean_ref),
            _ => None,
        }
    }
}

/// Instruction to construct one runtime object
///
/// `factory` names the client factory or composite the container should
/// invoke; `constructor_args` are passed in order; `properties` are set on
/// the constructed object afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiringDirective {
    /// Identifier of the factory to invoke
    pub factory: String,
    /// Ordered constructor arguments
    pub constructor_args: Vec<WiringValue>,
    /// Properties set after construction, keyed by property name
    pub properties: BTreeMap<String, WiringValue>,
}

impl WiringDirective {
    /// Create a directive for the given factory with no arguments
    pub fn new<S: Into<String>>(factory: S) -> Self {
        Self {
            factory: factory.into(),
            constructor_args: Vec::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Append a constructor argument
    pub fn with_constructor_arg(mut self, value: WiringValue) -> Self {
        self.constructor_args.push(value);
        self
    }

    /// Append a constructor argument referencing another bean
    pub fn with_constructor_ref(mut self, bean_ref: BeanRef) -> Self {
        self.constructor_args.push(WiringValue::Reference(bean_ref));
        self
    }

    /// Set a property value
    pub fn with_property<S: Into<String>>(mut self, name: S, value: WiringValue) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// Look up a property by name
    pub fn property(&self, name: &str) -> Option<&WiringValue> {
        self.properties.get(name)
    }
}

/// The complete output of a topology translation
///
/// The cache-manager directive holds the ordered cache entries under the
/// `caches` property; each entry is either a pass-through reference or a
/// nested named-cache definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiringPlan {
    /// The top-level cache-manager directive
    pub cache_manager: WiringDirective,
}

impl WiringPlan {
    /// Create a plan from the assembled cache-manager directive
    pub fn new(cache_manager: WiringDirective) -> Self {
        Self { cache_manager }
    }

    /// The ordered cache entries of the manager, empty if unset
    pub fn caches(&self) -> &[WiringValue] {
        match self.cache_manager.property(CACHES_PROPERTY) {
            Some(WiringValue::List(entries)) => entries,
            _ => &[],
        }
    }
}
