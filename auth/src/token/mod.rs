pub mod authority;
pub mod claims;
pub mod errors;

pub use authority::TokenAuthority;
pub use claims::IdentityClaims;
pub use errors::TokenError;
