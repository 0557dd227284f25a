//! Platform users: admin management and the signed-in profile

mod data;
pub mod admin;
pub mod profile;

pub use data::{User, UserProfile, UserStatus, mock_users, CURRENT_USER_ID};
pub use admin::{Selection, update_user, remove_user, deactivate_selected};
pub use profile::{update_profile, delete_account};
