pub mod annotations;
pub mod descriptions;
pub mod provider;
pub mod types;

pub use annotations::Annotation;
pub use descriptions::{CommonDescription, ConstraintDescription, MethodDescription};
pub use provider::MetadataProvider;
pub use types::{MetadataError, MetadataResult, MethodMetadata, ParamMetadata, TypeMetadata};

pub mod prelude {
    pub use crate::annotations::*;
    pub use crate::descriptions::*;
    pub use crate::provider::*;
    pub use crate::types::*;
}
