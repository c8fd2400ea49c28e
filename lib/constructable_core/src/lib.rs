pub mod error;
pub mod factory;
pub mod registry;

pub use error::{invalid_descriptor, Error, ErrorDetails};
pub use factory::{create, Constructable};
pub use registry::{Descriptor, DescriptorInfo, Registry};
