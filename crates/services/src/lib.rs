#![forbid(unsafe_code)]

pub mod dir_provider;
pub mod error;
pub mod http_provider;
pub mod provider;
pub mod registry;

pub use dir_provider::DirProvider;
pub use error::{ProviderError, RegistryError};
pub use http_provider::HttpProvider;
pub use provider::{ContentProvider, StaticProvider};
pub use registry::{ContentRegistry, RegistryStats};
