use crate::specifier::Specifier;
use metadata::MetadataProvider;
use std::collections::HashMap;

/// Holds the metadata of many annotated types, keyed by type name, and hands
/// out a [`Specifier`] per registered type.
pub struct MetadataRegistry {
    providers: HashMap<String, Box<dyn MetadataProvider>>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Registers a provider under its own type name. Registering a second
    /// provider with the same type name replaces the first.
    pub fn register<P: MetadataProvider + 'static>(&mut self, provider: P) {
        let name = provider.type_name().to_string();
        self.providers.insert(name, Box::new(provider));
    }

    pub fn get(&self, type_name: &str) -> Option<&dyn MetadataProvider> {
        self.providers.get(type_name).map(|provider| provider.as_ref())
    }

    /// A borrowed introspection session over the named type, if registered.
    pub fn specifier(&self, type_name: &str) -> Option<Specifier<&dyn MetadataProvider>> {
        self.get(type_name).map(Specifier::new)
    }

    /// Registered type names, sorted lexicographically ascending.
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for MetadataRegistry {
    fn default() -> Self {
        Self::new()
    }
}
