pub mod create_user;
pub mod update_profile;
pub mod search_user;

pub use create_user::CreateUserRequest;
pub use update_profile::{UpdateProfileRequest, ProfilePhotoRequest};
pub use search_user::{NicknameQuery, SearchUserQuery};
