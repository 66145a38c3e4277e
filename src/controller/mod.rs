mod format;
mod health_check;
mod home;

pub use format::*;
pub use health_check::*;
pub use home::*;
