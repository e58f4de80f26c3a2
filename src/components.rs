mod comments;
pub use comments::*;

mod name_form;
pub use name_form::*;

mod region;
pub use region::*;

mod session;
pub use session::*;

mod votes;
pub use votes::*;
