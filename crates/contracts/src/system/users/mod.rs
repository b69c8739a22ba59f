pub mod aggregate;
pub mod fixtures;

pub use aggregate::{user_criteria, Permissions, Role, RoleProfile, User, UserId, UserSummary};
pub use fixtures::users;
