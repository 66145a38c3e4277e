mod home_page;
mod user;

pub use home_page::HomePage;
pub use user::User;
