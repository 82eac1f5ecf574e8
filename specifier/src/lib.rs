pub mod registry;
pub mod specifier;

pub use registry::MetadataRegistry;
pub use specifier::{Specifier, SpecifierError, SpecifierResult};

pub mod prelude {
    pub use crate::registry::*;
    pub use crate::specifier::*;

    pub use metadata::prelude::*;
}
