use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// A YAML mapping as read from disk, keys kept in file order.
pub type Passthrough = IndexMap<String, Value>;

const CURRENT_CONTEXT: &str = "current-context";
const CONTEXTS: &str = "contexts";
const CONTEXT: &str = "context";
const NAME: &str = "name";
const NAMESPACE: &str = "namespace";

/// The parts of a kubeconfig document this tool reads and edits.
///
/// The parsed mapping is kept alongside the typed fields. On write only fields whose value differs from
/// the mapping are replaced, in place, so every other key keeps its position and spelling.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Passthrough", into = "Passthrough")]
pub struct KubeConfig {
    pub current_context: String,
    pub contexts: Vec<NamedContext>,
    fields: Passthrough,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Passthrough", into = "Passthrough")]
pub struct NamedContext {
    pub name: String,
    pub context: ContextEntry,
    fields: Passthrough,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "Passthrough", into = "Passthrough")]
pub struct ContextEntry {
    /// Empty means the cluster's default namespace.
    pub namespace: String,
    fields: Passthrough,
}

impl KubeConfig {
    pub fn from_yaml(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Top-level mapping as it was read.
    pub fn fields(&self) -> &Passthrough {
        &self.fields
    }

    pub fn context(&self, name: &str) -> Option<&ContextEntry> {
        self.contexts.iter().find(|c| c.name == name).map(|c| &c.context)
    }

    pub fn context_mut(&mut self, name: &str) -> Option<&mut ContextEntry> {
        self.contexts.iter_mut().find(|c| c.name == name).map(|c| &mut c.context)
    }

    pub fn has_context(&self, name: &str) -> bool {
        self.context(name).is_some()
    }

    /// Entry for `current-context`, or `None` when it is empty or dangling.
    pub fn current(&self) -> Option<&ContextEntry> {
        if self.current_context.is_empty() {
            return None;
        }
        self.context(&self.current_context)
    }

    pub fn current_mut(&mut self) -> Option<&mut ContextEntry> {
        if self.current_context.is_empty() {
            return None;
        }
        let name = &self.current_context;
        self.contexts.iter_mut().find(|c| &c.name == name).map(|c| &mut c.context)
    }
}

impl NamedContext {
    pub fn fields(&self) -> &Passthrough {
        &self.fields
    }

    fn is_modified(&self) -> bool {
        self.context.is_modified()
    }
}

impl ContextEntry {
    pub fn fields(&self) -> &Passthrough {
        &self.fields
    }

    fn is_modified(&self) -> bool {
        string_field(&self.fields, NAMESPACE).map_or(true, |ns| ns != self.namespace)
    }
}

impl TryFrom<Passthrough> for KubeConfig {
    type Error = String;

    fn try_from(fields: Passthrough) -> Result<Self, Self::Error> {
        let current_context = string_field(&fields, CURRENT_CONTEXT)?;
        let contexts = match fields.get(CONTEXTS) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(items)) => items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    serde_yaml::from_value::<NamedContext>(item.clone()).map_err(|e| format!("{CONTEXTS}[{i}]: {e}"))
                })
                .collect::<Result<_, _>>()?,
            Some(_) => return Err(format!("`{CONTEXTS}` must be a list")),
        };
        Ok(Self { current_context, contexts, fields })
    }
}

impl From<KubeConfig> for Passthrough {
    fn from(config: KubeConfig) -> Self {
        let KubeConfig { current_context, contexts, mut fields } = config;

        if string_field(&fields, CURRENT_CONTEXT).map_or(true, |current| current != current_context) {
            fields.insert(CURRENT_CONTEXT.to_string(), Value::String(current_context));
        }
        if contexts.iter().any(NamedContext::is_modified) {
            let items = contexts.into_iter().map(|c| Value::Mapping(to_mapping(c.into()))).collect();
            fields.insert(CONTEXTS.to_string(), Value::Sequence(items));
        }
        fields
    }
}

impl TryFrom<Passthrough> for NamedContext {
    type Error = String;

    fn try_from(fields: Passthrough) -> Result<Self, Self::Error> {
        let name = match fields.get(NAME) {
            Some(Value::String(name)) => name.clone(),
            Some(_) => return Err(format!("`{NAME}` must be a string")),
            None => return Err(format!("missing field `{NAME}`")),
        };
        let context = match fields.get(CONTEXT) {
            None | Some(Value::Null) => ContextEntry::default(),
            Some(value) => serde_yaml::from_value(value.clone()).map_err(|e| format!("context '{name}': {e}"))?,
        };
        Ok(Self { name, context, fields })
    }
}

impl From<NamedContext> for Passthrough {
    fn from(named: NamedContext) -> Self {
        let NamedContext { context, mut fields, .. } = named;
        if context.is_modified() {
            fields.insert(CONTEXT.to_string(), Value::Mapping(to_mapping(context.into())));
        }
        fields
    }
}

impl TryFrom<Passthrough> for ContextEntry {
    type Error = String;

    fn try_from(fields: Passthrough) -> Result<Self, Self::Error> {
        Ok(Self { namespace: string_field(&fields, NAMESPACE)?, fields })
    }
}

impl From<ContextEntry> for Passthrough {
    fn from(entry: ContextEntry) -> Self {
        let ContextEntry { namespace, mut fields } = entry;
        if string_field(&fields, NAMESPACE).map_or(true, |ns| ns != namespace) {
            if namespace.is_empty() {
                // kubeconfig spells the default namespace by leaving the key out
                fields.shift_remove(NAMESPACE);
            } else {
                fields.insert(NAMESPACE.to_string(), Value::String(namespace));
            }
        }
        fields
    }
}

// kubeconfig writers emit `null` for unset scalars; treat it like an absent key.
fn string_field(fields: &Passthrough, key: &str) -> Result<String, String> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(value)) => Ok(value.clone()),
        Some(_) => Err(format!("`{key}` must be a string")),
    }
}

fn to_mapping(fields: Passthrough) -> Mapping {
    fields.into_iter().map(|(k, v)| (Value::String(k), v)).collect()
}
