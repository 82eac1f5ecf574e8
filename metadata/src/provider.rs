use crate::annotations::Annotation;
use crate::types::MethodMetadata;

/// Capability interface the introspection engine consumes: everything it
/// needs to know about one annotated type.
///
/// [`crate::types::TypeMetadata`] is the canonical record-backed
/// implementation; anything that can enumerate its declared members and
/// their annotations can implement this instead.
pub trait MetadataProvider: Send + Sync {
    fn type_name(&self) -> &str;

    fn type_annotations(&self) -> &[Annotation];

    /// All declared methods, in declaration order, API surface or not.
    fn methods(&self) -> &[MethodMetadata];
}

impl<P: MetadataProvider + ?Sized> MetadataProvider for &P {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn type_annotations(&self) -> &[Annotation] {
        (**self).type_annotations()
    }

    fn methods(&self) -> &[MethodMetadata] {
        (**self).methods()
    }
}

impl<P: MetadataProvider + ?Sized> MetadataProvider for Box<P> {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn type_annotations(&self) -> &[Annotation] {
        (**self).type_annotations()
    }

    fn methods(&self) -> &[MethodMetadata] {
        (**self).methods()
    }
}
