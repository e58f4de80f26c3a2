use serde::{de::Error as _, Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comment {
	pub id: String,
	pub first_name: String,
	pub last_name: String,
	pub text: String,
	/// True when the comment belongs to the signed-in user.
	pub can_edit: bool,
}

impl Comment {
	/// Legacy feed entries carry no author at all.
	pub fn author(&self) -> Option<String> {
		let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
		let name = name.trim();
		match name.is_empty() {
			true => None,
			false => Some(name.to_owned()),
		}
	}
}

impl<'de> Deserialize<'de> for Comment {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Id {
			Number(i64),
			Text(String),
		}
		#[derive(Deserialize)]
		#[serde(rename_all = "camelCase")]
		struct Record {
			id: Id,
			#[serde(default)]
			first_name: String,
			#[serde(default)]
			last_name: String,
			#[serde(alias = "comment")]
			text: String,
			#[serde(default)]
			can_edit: bool,
		}
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Wire {
			Text(String),
			Record(Record),
		}
		Ok(match Wire::deserialize(deserializer)? {
			Wire::Text(text) => Self {
				text,
				..Default::default()
			},
			Wire::Record(record) => Self {
				id: match record.id {
					Id::Number(id) => id.to_string(),
					Id::Text(id) => id,
				},
				first_name: record.first_name,
				last_name: record.last_name,
				text: record.text,
				can_edit: record.can_edit,
			},
		})
	}
}

/// Most-recent-first, as ordered by the server.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Comments(pub Vec<Comment>);

impl Comments {
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl IntoIterator for Comments {
	type Item = Comment;
	type IntoIter = std::vec::IntoIter<Comment>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl<'de> Deserialize<'de> for Comments {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		// An empty datastore has been seen to serialize as `{}`.
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Wire {
			List(Vec<Comment>),
			Object(serde_json::Map<String, serde_json::Value>),
		}
		match Wire::deserialize(deserializer)? {
			Wire::List(comments) => Ok(Self(comments)),
			Wire::Object(map) if map.is_empty() => Ok(Self::default()),
			Wire::Object(map) => Err(D::Error::custom(format!(
				"expected a list of comments, found an object with {} keys",
				map.len()
			))),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_list_and_empty_object() {
		assert!(serde_json::from_str::<Comments>("[]").unwrap().is_empty());
		assert!(serde_json::from_str::<Comments>("{}").unwrap().is_empty());
	}

	#[test]
	fn populated_object_is_an_error() {
		assert!(serde_json::from_str::<Comments>(r#"{"id": 1}"#).is_err());
	}

	#[test]
	fn servlet_records_keep_order() {
		let json = r#"[
			{"id": 7, "comment": "newest", "firstName": "Ada", "lastName": "Lovelace", "canEdit": true},
			{"id": 3, "comment": "older", "firstName": "Alan", "lastName": "Turing", "canEdit": false}
		]"#;
		let comments = serde_json::from_str::<Comments>(json).unwrap();
		let ids = comments.0.iter().map(|c| c.id.as_str()).collect::<Vec<_>>();
		assert_eq!(ids, vec!["7", "3"]);
		assert_eq!(comments.0[0].text, "newest");
		assert_eq!(comments.0[0].author().as_deref(), Some("Ada Lovelace"));
		assert!(comments.0[0].can_edit);
		assert!(!comments.0[1].can_edit);
	}

	#[test]
	fn record_with_text_key_and_string_id() {
		let json = r#"[{"id": "abc", "text": "hi", "firstName": "A", "lastName": "B", "canEdit": false}]"#;
		let comments = serde_json::from_str::<Comments>(json).unwrap();
		assert_eq!(comments.0[0].id, "abc");
		assert_eq!(comments.0[0].text, "hi");
	}

	#[test]
	fn legacy_strings_have_no_author() {
		let comments = serde_json::from_str::<Comments>(r#"["first", "second"]"#).unwrap();
		assert_eq!(comments.len(), 2);
		assert_eq!(comments.0[1].text, "second");
		assert_eq!(comments.0[1].author(), None);
		assert!(!comments.0[1].can_edit);
	}
}
