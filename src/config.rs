pub static LOGIN_STATUS: &str = "/login-status";
pub static USER_INFO: &str = "/user-info";
pub static COMMENTS: &str = "/comments";
pub static LEGACY_COMMENTS: &str = "/data";
pub static NEXT_PROJECT: &str = "/next-project";
pub static DELETE_ALL_COMMENTS: &str = "/delete-data";
pub static EDIT_COMMENT: &str = "/edit-comment";
pub static DELETE_COMMENT: &str = "/delete-comment";
pub static SET_NAME: &str = "/name";

/// Forwarded verbatim as the `limit` query parameter until the user changes it.
pub static DEFAULT_COMMENT_LIMIT: &str = "5";

/// Categories reported positionally by backends that return the tally as an array.
pub static PROJECTS: [&str; 3] = ["Website", "iOS App", "Machine Learning"];

pub static EMPTY_COMMENTS_PLACEHOLDER: &str = "Be the first to leave a comment!";

/// The paths the client reads from. Form targets are not included,
/// those are posted natively by the browser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoints {
	pub login_status: &'static str,
	pub user_info: &'static str,
	pub comments: &'static str,
	pub vote_tally: &'static str,
	pub delete_all_comments: &'static str,
}
impl Default for Endpoints {
	fn default() -> Self {
		Self {
			login_status: LOGIN_STATUS,
			user_info: USER_INFO,
			comments: COMMENTS,
			vote_tally: NEXT_PROJECT,
			delete_all_comments: DELETE_ALL_COMMENTS,
		}
	}
}
impl Endpoints {
	/// Reads comments from the plain-text feed that predates comment records.
	pub fn legacy() -> Self {
		Self {
			comments: LEGACY_COMMENTS,
			..Default::default()
		}
	}

	/// The endpoints this build talks to. Sites still serving the `/data` feed
	/// build with the `legacy-feed` feature.
	pub fn for_build() -> Self {
		match cfg!(feature = "legacy-feed") {
			true => Self::legacy(),
			false => Self::default(),
		}
	}
}

pub fn log_level() -> log::Level {
	match cfg!(debug_assertions) {
		true => log::Level::Debug,
		false => log::Level::Info,
	}
}
