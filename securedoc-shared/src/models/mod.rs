pub mod credentials;
pub mod envelope;
pub mod user;

pub use credentials::{
    EmailAddress, LoginRequest, QrCodeRequest, RegisterRequest, RoleRequest, UpdateNewPassword,
    UpdatePassword, UpdateUserRequest,
};
pub use envelope::{ApiError, ResponseEnvelope};
pub use user::{Role, User, UserData, UserListData};
