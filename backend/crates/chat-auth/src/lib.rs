pub mod bearer;
pub mod claims;
pub mod error;
pub mod token_verifier;

pub use bearer::parse_bearer;
pub use claims::{Claims, NumericClaim};
pub use error::{AuthError, Result};
pub use token_verifier::TokenVerifier;
