pub mod token_claims;

pub use token_claims::TokenClaims;
