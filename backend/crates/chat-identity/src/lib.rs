pub mod cache_keys;
pub mod error;
pub mod http_authority;
pub mod identity_authority;
pub mod identity_resolver;
pub mod profile_store;

pub use cache_keys::{CacheTtls, identity_cache_key, profile_cache_key};
pub use error::{IdentityError, Result};
pub use http_authority::HttpIdentityAuthority;
pub use identity_authority::{AuthorityError, IdentityAuthority};
pub use identity_resolver::IdentityResolver;
pub use profile_store::{ProfileStore, StoreError};

#[cfg(test)]
mod tests;
