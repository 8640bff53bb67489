//! Component Definitions
//!
//! A component is declared as data ([`ComponentSpec`]) and validated once, at
//! registration, into an immutable [`ComponentDefinition`]. The runtime that
//! later instantiates components only ever sees validated definitions.

use crate::html_parser::is_component_tag;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Member names the base model type already owns.
pub const RESERVED_NAMES: &[&str] = &[
    "trigger",
    "constructor",
    "get",
    "set",
    "has",
    "extend",
    "escape",
    "unset",
    "clear",
    "cid",
    "attributes",
    "changed",
    "toJSON",
    "validationError",
    "isValid",
    "isNew",
    "hasChanged",
    "changedAttributes",
    "previous",
    "previousAttributes",
];

/// Member names read as configuration rather than component state.
pub const CONFIG_PROPERTIES: &[&str] = &[
    "routes",
    "template",
    "defaults",
    "outlet",
    "url",
    "urlRoot",
    "idAttribute",
    "id",
    "createdCallback",
    "attachedCallback",
    "detachedCallback",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecycleHook {
    Created,
    Attached,
    Detached,
}

impl LifecycleHook {
    pub fn from_property(name: &str) -> Option<Self> {
        match name {
            "createdCallback" => Some(LifecycleHook::Created),
            "attachedCallback" => Some(LifecycleHook::Attached),
            "detachedCallback" => Some(LifecycleHook::Detached),
            _ => None,
        }
    }

    pub fn property_name(self) -> &'static str {
        match self {
            LifecycleHook::Created => "createdCallback",
            LifecycleHook::Attached => "attachedCallback",
            LifecycleHook::Detached => "detachedCallback",
        }
    }
}

/// One declared member of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Member {
    /// Plain state; becomes a default value.
    Data { value: Value },
    #[serde(rename_all = "camelCase")]
    Function {
        arity: usize,
        #[serde(default)]
        returns_value: bool,
    },
}

impl Member {
    /// Zero-argument functions that return a value are computed properties.
    pub fn is_computed(&self) -> bool {
        matches!(
            self,
            Member::Function {
                arity: 0,
                returns_value: true
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    pub name: String,
    #[serde(default)]
    pub members: IndexMap<String, Member>,
    /// Route pattern to handler method name.
    #[serde(default)]
    pub routes: IndexMap<String, String>,
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    #[error("component name '{0}' must contain a dash")]
    InvalidName(String),
    #[error("{name} is a reserved method name in {component}")]
    ReservedName { component: String, name: String },
    #[error("{hook} on the {component} component must be a function")]
    HookNotAFunction { component: String, hook: String },
    #[error("callback function {handler} for route '{route}' does not exist on the {component} component")]
    UnknownRouteHandler {
        component: String,
        route: String,
        handler: String,
    },
    #[error("template must be provided for the {component} component")]
    MissingTemplate { component: String },
    #[error("a different component named {name} is already registered")]
    Conflict { name: String },
}

/// A validated component. Fields are fixed once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDefinition {
    name: String,
    defaults: IndexMap<String, Value>,
    computed: Vec<String>,
    methods: Vec<String>,
    hooks: Vec<LifecycleHook>,
    routes: IndexMap<String, String>,
    template: String,
}

impl ComponentDefinition {
    pub fn from_spec(spec: ComponentSpec) -> Result<Self, DefinitionError> {
        let ComponentSpec {
            name,
            members,
            routes,
            template,
        } = spec;

        if !is_component_tag(&name) {
            return Err(DefinitionError::InvalidName(name));
        }

        let mut defaults = IndexMap::new();
        let mut computed = Vec::new();
        let mut methods = Vec::new();
        let mut hooks = Vec::new();

        for (key, member) in members {
            if CONFIG_PROPERTIES.contains(&key.as_str()) {
                if let Some(hook) = LifecycleHook::from_property(&key) {
                    if !matches!(member, Member::Function { .. }) {
                        return Err(DefinitionError::HookNotAFunction {
                            component: name,
                            hook: key,
                        });
                    }
                    hooks.push(hook);
                }
                continue;
            }

            if RESERVED_NAMES.contains(&key.as_str()) {
                return Err(DefinitionError::ReservedName {
                    component: name,
                    name: key,
                });
            }

            if member.is_computed() {
                computed.push(key);
            } else {
                match member {
                    Member::Data { value } => {
                        defaults.insert(key, value);
                    }
                    Member::Function { .. } => methods.push(key),
                }
            }
        }

        if let Some((route, handler)) = routes
            .iter()
            .find(|(_, handler)| !methods.contains(*handler))
        {
            return Err(DefinitionError::UnknownRouteHandler {
                component: name.clone(),
                route: route.clone(),
                handler: handler.clone(),
            });
        }

        let template = match template {
            Some(template) if !template.is_empty() => template,
            _ => return Err(DefinitionError::MissingTemplate { component: name }),
        };

        Ok(ComponentDefinition {
            name,
            defaults,
            computed,
            methods,
            hooks,
            routes,
            template,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn defaults(&self) -> &IndexMap<String, Value> {
        &self.defaults
    }

    pub fn computed(&self) -> &[String] {
        &self.computed
    }

    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    pub fn hooks(&self) -> &[LifecycleHook] {
        &self.hooks
    }

    pub fn has_hook(&self, hook: LifecycleHook) -> bool {
        self.hooks.contains(&hook)
    }

    pub fn routes(&self) -> &IndexMap<String, String> {
        &self.routes
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

/// Outcome of a registration. Registering the same definition twice is not
/// an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    Registered(Arc<ComponentDefinition>),
    AlreadyRegistered(Arc<ComponentDefinition>),
}

impl Registration {
    pub fn definition(&self) -> &Arc<ComponentDefinition> {
        match self {
            Registration::Registered(definition) | Registration::AlreadyRegistered(definition) => {
                definition
            }
        }
    }
}

/// Validated components by name, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    definitions: IndexMap<String, Arc<ComponentDefinition>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, definition: ComponentDefinition) -> Result<Registration, DefinitionError> {
        if let Some(existing) = self.definitions.get(definition.name()) {
            if **existing == definition {
                log::debug!("component {} already registered", definition.name());
                return Ok(Registration::AlreadyRegistered(Arc::clone(existing)));
            }
            return Err(DefinitionError::Conflict {
                name: definition.name,
            });
        }

        log::info!(
            "registered component {} ({} default(s), {} method(s))",
            definition.name(),
            definition.defaults().len(),
            definition.methods().len()
        );
        let definition = Arc::new(definition);
        self.definitions
            .insert(definition.name().to_string(), Arc::clone(&definition));
        Ok(Registration::Registered(definition))
    }

    /// Validate and register in one step.
    pub fn register_spec(&mut self, spec: ComponentSpec) -> Result<Registration, DefinitionError> {
        let definition = ComponentDefinition::from_spec(spec)?;
        self.register(definition)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ComponentDefinition>> {
        self.definitions.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
