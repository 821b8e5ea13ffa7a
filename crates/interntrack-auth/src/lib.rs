//! # InternTrack Auth
//!
//! Principal types and JWT utilities for the InternTrack API.
//!
//! - [`claims`]: The two principal kinds and the token payload that carries them
//! - [`jwt`]: Token issuance and verification
//! - [`access`]: The student resource-ownership rule
//!
//! # Principal kinds
//!
//! Admins ([`AdminPrincipal`]) operate the dashboard; students
//! ([`StudentPrincipal`]) use the mobile app. Both kinds are signed with the
//! same secret, so every token carries a `type` discriminator and a token of
//! one kind never verifies as the other.
//!
//! # Example
//!
//! ```ignore
//! use interntrack_auth::{AdminPrincipal, StudentPrincipal, create_token, verify_token};
//! use interntrack_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_token(&AdminPrincipal { user_id, username: "ops".into() }, &config)?;
//!
//! assert!(verify_token::<AdminPrincipal>(&token, &config).is_some());
//! assert!(verify_token::<StudentPrincipal>(&token, &config).is_none());
//! ```

pub mod access;
pub mod claims;
pub mod jwt;

pub use access::validate_student_access;
pub use claims::{AdminPrincipal, Principal, PrincipalKind, StudentPrincipal, TokenClaims};
pub use jwt::{
    TokenError, create_token, create_token_at, decode_token, decode_token_at, verify_admin_token,
    verify_student_token, verify_token, verify_token_at,
};
