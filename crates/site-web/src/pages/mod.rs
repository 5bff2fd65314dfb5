//! Page Components

mod contacts;
mod home;
mod not_found;
mod policy;
mod tool;

pub use contacts::ContactsPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use policy::{CookiePolicyPage, PrivacyPage};
pub use tool::ToolPage;
