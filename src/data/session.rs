use serde::{Deserialize, Deserializer};

/// Whether the visitor is signed in, and where to send them to change that.
/// When signed in, `url` logs out; otherwise it starts the login flow.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginStatus {
	pub is_logged_in: bool,
	pub url: String,
}

impl<'de> Deserialize<'de> for LoginStatus {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		// The servlet answers with `[isLoggedIn, url]`, newer backends with an object.
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Wire {
			Pair(bool, String),
			Object {
				#[serde(rename = "isLoggedIn")]
				is_logged_in: bool,
				#[serde(rename = "logoutOrLoginUrl")]
				url: String,
			},
		}
		Ok(match Wire::deserialize(deserializer)? {
			Wire::Pair(is_logged_in, url) => Self { is_logged_in, url },
			Wire::Object { is_logged_in, url } => Self { is_logged_in, url },
		})
	}
}
