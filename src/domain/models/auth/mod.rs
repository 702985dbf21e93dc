pub mod authenticated_user;

pub use authenticated_user::{AuthMode, AuthenticatedUser, OptionalUser};
