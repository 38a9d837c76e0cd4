//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2id)
//! - Signed identity token issuance and verification
//!
//! Services compose these primitives into their own login flows; this crate
//! deliberately knows nothing about user storage.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Identity Tokens
//! ```
//! use auth::TokenAuthority;
//!
//! let authority = TokenAuthority::new(b"secret_key_at_least_32_bytes_long!");
//! let token = authority.issue("user123", "user@example.com").unwrap();
//! let claims = authority.verify(&token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! assert_eq!(claims.email, "user@example.com");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::IdentityClaims;
pub use token::TokenAuthority;
pub use token::TokenError;
