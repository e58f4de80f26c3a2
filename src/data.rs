mod comment;
pub use comment::*;

mod session;
pub use session::*;

mod user;
pub use user::*;

mod vote;
pub use vote::*;
