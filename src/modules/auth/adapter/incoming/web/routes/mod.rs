pub mod login_admin;
pub mod logout_admin;

pub use login_admin::*;
pub use logout_admin::*;
