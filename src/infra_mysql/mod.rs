mod registered_user_repo_mysql;

pub use registered_user_repo_mysql::*;

mod util;
