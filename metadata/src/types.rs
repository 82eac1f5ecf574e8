use crate::annotations::Annotation;
use crate::provider::MetadataProvider;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Errors that can occur when validating declared metadata
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("Type name cannot be empty")]
    EmptyTypeName,

    #[error("Duplicate method: {name}")]
    DuplicateMethod { name: String },

    #[error("Duplicate parameter {name} on method {method}")]
    DuplicateParam { method: String, name: String },
}

pub type MetadataResult<T> = Result<T, MetadataError>;

/// Declared metadata for a parameter of an exposed method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamMetadata {
    pub name: String,
    pub annotations: Vec<Annotation>,
}

impl ParamMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_description(self, text: impl Into<String>) -> Self {
        self.with_annotation(Annotation::description(text))
    }

    pub fn required(self, flag: bool) -> Self {
        self.with_annotation(Annotation::required(flag))
    }

    pub fn with_bounds(self, min: impl Into<Option<i64>>, max: impl Into<Option<i64>>) -> Self {
        self.with_annotation(Annotation::int_bounds(min, max))
    }
}

/// Declared metadata for a method of an annotated type.
///
/// `return_annotations` distinguishes "no annotation set attached at all"
/// (`None`) from "attached but empty" (`Some` of an empty vec); the presence
/// of a return description downstream keys off a non-empty set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodMetadata {
    pub name: String,
    pub api_surface: bool,
    pub annotations: Vec<Annotation>,
    pub params: Vec<ParamMetadata>,
    pub return_annotations: Option<Vec<Annotation>>,
}

impl MethodMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            api_surface: false,
            annotations: Vec::new(),
            params: Vec::new(),
            return_annotations: None,
        }
    }

    /// Marks this method as part of the documented API surface.
    pub fn api_surface(mut self) -> Self {
        self.api_surface = true;
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_description(self, text: impl Into<String>) -> Self {
        self.with_annotation(Annotation::description(text))
    }

    pub fn with_param(mut self, param: ParamMetadata) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_return_annotation(mut self, annotation: Annotation) -> Self {
        self.return_annotations
            .get_or_insert_with(Vec::new)
            .push(annotation);
        self
    }

    pub fn with_return_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.return_annotations = Some(annotations);
        self
    }

    pub fn with_return_required(self, flag: bool) -> Self {
        self.with_return_annotation(Annotation::required(flag))
    }

    pub fn with_return_bounds(
        self,
        min: impl Into<Option<i64>>,
        max: impl Into<Option<i64>>,
    ) -> Self {
        self.with_return_annotation(Annotation::int_bounds(min, max))
    }
}

/// Declared metadata for one annotated type: the root record handed to the
/// introspection engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMetadata {
    pub name: String,
    pub annotations: Vec<Annotation>,
    pub methods: Vec<MethodMetadata>,
}

impl TypeMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_description(self, text: impl Into<String>) -> Self {
        self.with_annotation(Annotation::description(text))
    }

    pub fn with_method(mut self, method: MethodMetadata) -> Self {
        self.methods.push(method);
        self
    }

    /// Checks the declaration invariants: non-empty type name, method names
    /// unique within the type, parameter names unique within each method.
    ///
    /// Validation is advisory; the introspection engine is a pure function of
    /// whatever records it is given.
    pub fn validate(&self) -> MetadataResult<()> {
        if self.name.is_empty() {
            return Err(MetadataError::EmptyTypeName);
        }

        let mut method_names = HashSet::new();
        for method in &self.methods {
            if !method_names.insert(method.name.as_str()) {
                return Err(MetadataError::DuplicateMethod {
                    name: method.name.clone(),
                });
            }

            let mut param_names = HashSet::new();
            for param in &method.params {
                if !param_names.insert(param.name.as_str()) {
                    return Err(MetadataError::DuplicateParam {
                        method: method.name.clone(),
                        name: param.name.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl MetadataProvider for TypeMetadata {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn type_annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn methods(&self) -> &[MethodMetadata] {
        &self.methods
    }
}
