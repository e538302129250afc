//! HTTP request handlers, split by concern

pub mod health;
pub mod search;
pub mod users;

// Re-export the handler set the router wires up
pub use health::{health_check, metrics};
pub use search::search_users;
pub use users::{
    confirm_delete_user, create_user, delete_user, edit_user, get_user, list_users, new_user,
    update_user,
};
