pub mod client; // REST client for the user directory backend
pub mod error;

// Re-export commonly used types
pub use client::UserClient;
pub use error::ApiError;

use crate::users::{CreateUserRequest, UpdateUserRequest, User, UserListResponse, UserSearchParams};

/// User CRUD operations against the directory backend
///
/// `UserClient` talks HTTP; the form modal and the demos only depend on
/// this trait.
#[allow(async_fn_in_trait)]
pub trait UserService {
    /// GET /users with pagination, search and sorting
    async fn list_users(&self, params: &UserSearchParams) -> Result<UserListResponse, ApiError>;

    /// GET /users/{id}
    async fn get_user(&self, id: u64) -> Result<User, ApiError>;

    /// POST /users
    async fn create_user(&self, user: &CreateUserRequest) -> Result<User, ApiError>;

    /// PUT /users/{id}
    async fn update_user(&self, id: u64, user: &UpdateUserRequest) -> Result<User, ApiError>;

    /// DELETE /users/{id}
    async fn delete_user(&self, id: u64) -> Result<(), ApiError>;
}
