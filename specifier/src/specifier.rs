//! API surface introspection engine
//!
//! This module projects a type's declared metadata into documentation
//! structures: which methods the type exposes, what they do, and the
//! constraints declared on each parameter and return value. All queries are
//! pure and read-only; repeated calls against unchanged metadata return
//! identical results.
//!
//! # Examples
//!
//! ```rust
//! use metadata::{MethodMetadata, ParamMetadata, TypeMetadata};
//! use specifier::Specifier;
//!
//! let calc = TypeMetadata::new("Calc")
//!     .with_description("a calculator")
//!     .with_method(
//!         MethodMetadata::new("Add")
//!             .api_surface()
//!             .with_description("adds two numbers")
//!             .with_param(ParamMetadata::new("a").required(true).with_bounds(0, 100))
//!             .with_param(ParamMetadata::new("b")),
//!     );
//!
//! let specifier = Specifier::new(calc);
//! assert_eq!(specifier.api_method_names(), vec!["Add"]);
//! assert_eq!(
//!     specifier.api_method_description("Add").as_deref(),
//!     Some("adds two numbers")
//! );
//!
//! let full = specifier.api_method_full_description("Add").unwrap();
//! assert_eq!(full.params.len(), 2);
//! assert!(full.params[0].required);
//! assert!(full.return_description.is_none());
//! ```

use metadata::{
    Annotation, CommonDescription, ConstraintDescription, MetadataProvider, MethodDescription,
    MethodMetadata, ParamMetadata,
};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while querying an API surface
#[derive(Error, Debug)]
pub enum SpecifierError {
    /// The named method does not resolve to an API-surface member
    #[error("Method not found: {name}")]
    MethodNotFound { name: String },
}

pub type SpecifierResult<T> = Result<T, SpecifierError>;

/// Query engine over one annotated type's declared metadata.
///
/// Generic over the [`MetadataProvider`] so the same logic applies to any
/// introspection backend. Every description-lookup operation fails soft,
/// returning an absent value when a name does not resolve; the one exception
/// is [`Specifier::api_method_param_names`], which must produce a
/// non-optional sequence and therefore reports an unresolved method as
/// [`SpecifierError::MethodNotFound`].
pub struct Specifier<P: MetadataProvider> {
    provider: P,
}

impl<P: MetadataProvider> Specifier<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The type-level description, if the type carries a description
    /// annotation.
    pub fn api_description(&self) -> Option<String> {
        description_of(self.provider.type_annotations())
    }

    /// Names of all methods marked as API surface, sorted lexicographically
    /// ascending.
    ///
    /// Ordering is byte-wise `str` ordering: case-sensitive, uppercase ASCII
    /// before lowercase, the empty string first.
    pub fn api_method_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .provider
            .methods()
            .iter()
            .filter(|method| method.api_surface)
            .map(|method| method.name.clone())
            .collect();
        names.sort();
        names
    }

    /// The named method's description. Absent when the name does not resolve
    /// to an API-surface method or the method carries no description
    /// annotation; the two cases are indistinguishable by design.
    pub fn api_method_description(&self, method_name: &str) -> Option<String> {
        let method = self.api_method(method_name)?;
        description_of(&method.annotations)
    }

    /// Parameter names of the named method, in declaration order.
    ///
    /// Unlike the description lookups, this must return a non-optional
    /// sequence, so an unresolved method is reported as
    /// [`SpecifierError::MethodNotFound`].
    pub fn api_method_param_names(&self, method_name: &str) -> SpecifierResult<Vec<String>> {
        let method = self.api_method(method_name).ok_or_else(|| {
            debug!(
                type_name = self.provider.type_name(),
                method = method_name,
                "parameter listing requested for unresolved method"
            );
            SpecifierError::MethodNotFound {
                name: method_name.to_string(),
            }
        })?;
        Ok(method.params.iter().map(|param| param.name.clone()).collect())
    }

    /// The named parameter's description. Absent when the method or the
    /// parameter does not resolve, or no description is declared.
    pub fn api_method_param_description(
        &self,
        method_name: &str,
        param_name: &str,
    ) -> Option<String> {
        let method = self.api_method(method_name)?;
        let param = find_param(method, param_name)?;
        description_of(&param.annotations)
    }

    /// The named parameter's full description, combining its free-text
    /// description with the declared constraints.
    ///
    /// Always returns a structure: when the method or parameter does not
    /// resolve, the result carries the queried name, an absent description,
    /// and the absent-annotation defaults (`required = false`, bounds
    /// absent).
    pub fn api_method_param_full_description(
        &self,
        method_name: &str,
        param_name: &str,
    ) -> ConstraintDescription {
        let param = self
            .api_method(method_name)
            .and_then(|method| find_param(method, param_name));

        let mut description = ConstraintDescription {
            common: CommonDescription {
                name: Some(param_name.to_string()),
                description: param.and_then(|p| description_of(&p.annotations)),
            },
            ..ConstraintDescription::default()
        };
        aggregate_constraints(param.map(|p| p.annotations.as_slice()), &mut description);
        description
    }

    /// The full structured description of the named method: its own name and
    /// description, one constraint entry per declared parameter in
    /// declaration order, and a return entry present only if the return
    /// value carries at least one recognized annotation.
    ///
    /// Absent when the name does not resolve to an API-surface method.
    pub fn api_method_full_description(&self, method_name: &str) -> Option<MethodDescription> {
        let method = self.api_method(method_name)?;

        let params = method
            .params
            .iter()
            .map(|param| self.api_method_param_full_description(method_name, &param.name))
            .collect();

        let return_description = match method.return_annotations.as_deref() {
            Some(annotations) if !annotations.is_empty() => {
                let mut description = ConstraintDescription::default();
                aggregate_constraints(Some(annotations), &mut description);
                Some(description)
            }
            _ => None,
        };

        Some(MethodDescription {
            method: CommonDescription {
                name: Some(method_name.to_string()),
                description: description_of(&method.annotations),
            },
            params,
            return_description,
        })
    }

    /// Resolves a name to a declared method only if that method is marked as
    /// API surface.
    fn api_method(&self, name: &str) -> Option<&MethodMetadata> {
        let method = self
            .provider
            .methods()
            .iter()
            .find(|method| method.name == name && method.api_surface);
        if method.is_none() {
            trace!(
                type_name = self.provider.type_name(),
                method = name,
                "name does not resolve to an api-surface method"
            );
        }
        method
    }
}

fn find_param<'a>(method: &'a MethodMetadata, name: &str) -> Option<&'a ParamMetadata> {
    method.params.iter().find(|param| param.name == name)
}

fn description_of(annotations: &[Annotation]) -> Option<String> {
    annotations.iter().find_map(|annotation| match annotation {
        Annotation::Description(text) => Some(text.clone()),
        _ => None,
    })
}

/// Folds an annotation set into constraint fields: the first bounds
/// annotation contributes its min/max, and `required` is true only if a
/// required-flag annotation is present with a true flag. An absent set
/// (`None`) yields the same result as an empty one.
fn aggregate_constraints(
    annotations: Option<&[Annotation]>,
    description: &mut ConstraintDescription,
) {
    let annotations = annotations.unwrap_or_default();

    if let Some((min, max)) = annotations.iter().find_map(|annotation| match annotation {
        Annotation::IntBounds { min, max } => Some((*min, *max)),
        _ => None,
    }) {
        description.min_value = min;
        description.max_value = max;
    }

    description.required = annotations
        .iter()
        .find_map(|annotation| match annotation {
            Annotation::Required(flag) => Some(*flag),
            _ => None,
        })
        .unwrap_or(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use metadata::TypeMetadata;

    fn calc() -> TypeMetadata {
        TypeMetadata::new("Calc")
            .with_description("a calculator")
            .with_method(
                MethodMetadata::new("Add")
                    .api_surface()
                    .with_description("adds two numbers")
                    .with_param(ParamMetadata::new("a").required(true).with_bounds(0, 100))
                    .with_param(ParamMetadata::new("b")),
            )
    }

    #[test]
    fn test_api_description() {
        let specifier = Specifier::new(calc());
        assert_eq!(specifier.api_description().as_deref(), Some("a calculator"));

        let undescribed = Specifier::new(TypeMetadata::new("Bare"));
        assert_eq!(undescribed.api_description(), None);
    }

    #[test]
    fn test_method_names_empty_surface() {
        let meta = TypeMetadata::new("Quiet")
            .with_description("has no exposed methods")
            .with_method(MethodMetadata::new("Hidden"));
        let specifier = Specifier::new(meta);

        assert!(specifier.api_method_names().is_empty());
        // The type-level description is unaffected by having zero methods.
        assert_eq!(
            specifier.api_description().as_deref(),
            Some("has no exposed methods")
        );
    }

    #[test]
    fn test_method_names_sorted_bytewise() {
        let meta = TypeMetadata::new("Mixed")
            .with_method(MethodMetadata::new("add").api_surface())
            .with_method(MethodMetadata::new("Z").api_surface())
            .with_method(MethodMetadata::new("").api_surface())
            .with_method(MethodMetadata::new("Add").api_surface());
        let specifier = Specifier::new(meta);

        assert_eq!(specifier.api_method_names(), vec!["", "Add", "Z", "add"]);
    }

    #[test]
    fn test_method_names_idempotent() {
        let specifier = Specifier::new(calc());
        assert_eq!(specifier.api_method_names(), specifier.api_method_names());
    }

    #[test]
    fn test_method_description() {
        let specifier = Specifier::new(calc());
        assert_eq!(
            specifier.api_method_description("Add").as_deref(),
            Some("adds two numbers")
        );
        // Unknown and undescribed methods are indistinguishable.
        assert_eq!(specifier.api_method_description("NoSuchMethod"), None);

        let undescribed = Specifier::new(
            TypeMetadata::new("T").with_method(MethodMetadata::new("M").api_surface()),
        );
        assert_eq!(undescribed.api_method_description("M"), None);
    }

    #[test]
    fn test_non_surface_method_is_invisible() {
        let meta = TypeMetadata::new("T").with_method(
            MethodMetadata::new("Internal")
                .with_description("not exposed")
                .with_param(ParamMetadata::new("x")),
        );
        let specifier = Specifier::new(meta);

        assert!(specifier.api_method_names().is_empty());
        assert_eq!(specifier.api_method_description("Internal"), None);
        assert!(specifier.api_method_param_names("Internal").is_err());
        assert_eq!(
            specifier.api_method_param_description("Internal", "x"),
            None
        );
        assert!(specifier.api_method_full_description("Internal").is_none());
    }

    #[test]
    fn test_param_names_declaration_order() {
        let meta = TypeMetadata::new("T").with_method(
            MethodMetadata::new("M")
                .api_surface()
                .with_param(ParamMetadata::new("zeta"))
                .with_param(ParamMetadata::new("alpha"))
                .with_param(ParamMetadata::new("mid")),
        );
        let specifier = Specifier::new(meta);

        let names = specifier.api_method_param_names("M").unwrap();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);

        let full = specifier.api_method_full_description("M").unwrap();
        assert_eq!(full.params.len(), names.len());
        for (constraint, name) in full.params.iter().zip(&names) {
            assert_eq!(constraint.common.name.as_deref(), Some(name.as_str()));
        }
    }

    #[test]
    fn test_param_names_unresolved_method() {
        let specifier = Specifier::new(calc());
        let result = specifier.api_method_param_names("NoSuchMethod");
        assert!(matches!(
            result,
            Err(SpecifierError::MethodNotFound { name }) if name == "NoSuchMethod"
        ));
    }

    #[test]
    fn test_param_description() {
        let meta = TypeMetadata::new("T").with_method(
            MethodMetadata::new("M")
                .api_surface()
                .with_param(ParamMetadata::new("a").with_description("first operand"))
                .with_param(ParamMetadata::new("b")),
        );
        let specifier = Specifier::new(meta);

        assert_eq!(
            specifier.api_method_param_description("M", "a").as_deref(),
            Some("first operand")
        );
        assert_eq!(specifier.api_method_param_description("M", "b"), None);
        assert_eq!(specifier.api_method_param_description("M", "missing"), None);
        assert_eq!(specifier.api_method_param_description("missing", "a"), None);
    }

    #[test]
    fn test_param_full_description_unresolved() {
        let specifier = Specifier::new(calc());

        // Total function: an unresolved lookup still yields a structure with
        // the queried name and the absent-annotation defaults.
        let description = specifier.api_method_param_full_description("NoSuchMethod", "x");
        assert_eq!(description.common.name.as_deref(), Some("x"));
        assert_eq!(description.common.description, None);
        assert!(!description.required);
        assert_eq!(description.min_value, None);
        assert_eq!(description.max_value, None);
    }

    #[test]
    fn test_constraint_defaulting() {
        let meta = TypeMetadata::new("T").with_method(
            MethodMetadata::new("M")
                .api_surface()
                .with_param(ParamMetadata::new("plain"))
                .with_param(ParamMetadata::new("optional").required(false))
                .with_param(ParamMetadata::new("min_only").with_bounds(5, None)),
        );
        let specifier = Specifier::new(meta);

        let plain = specifier.api_method_param_full_description("M", "plain");
        assert!(!plain.required);
        assert_eq!(plain.min_value, None);
        assert_eq!(plain.max_value, None);

        // A declared-but-false required flag is identical to no annotation.
        let optional = specifier.api_method_param_full_description("M", "optional");
        assert_eq!(optional.required, plain.required);
        assert_eq!(optional.min_value, None);

        let min_only = specifier.api_method_param_full_description("M", "min_only");
        assert_eq!(min_only.min_value, Some(5));
        assert_eq!(min_only.max_value, None);
        assert!(!min_only.required);
    }

    #[test]
    fn test_return_description_presence() {
        let meta = TypeMetadata::new("T")
            .with_method(MethodMetadata::new("NoAnnotations").api_surface())
            .with_method(
                MethodMetadata::new("EmptySet")
                    .api_surface()
                    .with_return_annotations(Vec::new()),
            )
            .with_method(
                MethodMetadata::new("BoundsOnly")
                    .api_surface()
                    .with_return_bounds(1, 10),
            );
        let specifier = Specifier::new(meta);

        let none = specifier.api_method_full_description("NoAnnotations").unwrap();
        assert!(none.return_description.is_none());

        // Attached-but-empty also yields no return description.
        let empty = specifier.api_method_full_description("EmptySet").unwrap();
        assert!(empty.return_description.is_none());

        let bounds = specifier.api_method_full_description("BoundsOnly").unwrap();
        let ret = bounds.return_description.unwrap();
        assert!(!ret.required);
        assert_eq!(ret.min_value, Some(1));
        assert_eq!(ret.max_value, Some(10));
        assert_eq!(ret.common.name, None);
        assert_eq!(ret.common.description, None);
    }

    #[test]
    fn test_return_required_flag() {
        let meta = TypeMetadata::new("T").with_method(
            MethodMetadata::new("M")
                .api_surface()
                .with_return_required(true),
        );
        let specifier = Specifier::new(meta);

        let full = specifier.api_method_full_description("M").unwrap();
        let ret = full.return_description.unwrap();
        assert!(ret.required);
        assert_eq!(ret.min_value, None);
        assert_eq!(ret.max_value, None);
    }

    #[test]
    fn test_calc_scenario() {
        let specifier = Specifier::new(calc());

        assert_eq!(specifier.api_method_names(), vec!["Add"]);

        let full = specifier.api_method_full_description("Add").unwrap();
        assert_eq!(full.method.name.as_deref(), Some("Add"));
        assert_eq!(full.method.description.as_deref(), Some("adds two numbers"));

        assert_eq!(full.params.len(), 2);
        let a = &full.params[0];
        assert_eq!(a.common.name.as_deref(), Some("a"));
        assert!(a.required);
        assert_eq!(a.min_value, Some(0));
        assert_eq!(a.max_value, Some(100));

        let b = &full.params[1];
        assert_eq!(b.common.name.as_deref(), Some("b"));
        assert!(!b.required);
        assert_eq!(b.min_value, None);
        assert_eq!(b.max_value, None);

        assert!(full.return_description.is_none());
    }

    #[test]
    fn test_full_description_idempotent() {
        let specifier = Specifier::new(calc());
        assert_eq!(
            specifier.api_method_full_description("Add"),
            specifier.api_method_full_description("Add")
        );
    }

    #[test]
    fn test_full_description_serialization() {
        let specifier = Specifier::new(calc());
        let full = specifier.api_method_full_description("Add").unwrap();

        let json = serde_json::to_string(&full).unwrap();
        let deserialized: MethodDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(full, deserialized);
    }
}
