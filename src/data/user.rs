use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
	pub first_name: String,
	pub last_name: String,
	pub can_vote: bool,
}

impl UserInfo {
	/// Accounts are created without a name; the profile stays hidden until at least one part is set.
	pub fn needs_name(&self) -> bool {
		self.first_name.trim().is_empty() && self.last_name.trim().is_empty()
	}

	pub fn display_name(&self) -> String {
		format!("{} {}", self.first_name, self.last_name)
	}
}
