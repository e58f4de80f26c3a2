use serde::{de::Error as _, Deserialize, Deserializer};

/// Votes per proposed next project, in the order the server listed them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VoteTally(pub Vec<(String, u64)>);

impl VoteTally {
	pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
		self.0.iter().map(|(project, votes)| (project.as_str(), *votes))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<'de> Deserialize<'de> for VoteTally {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Wire {
			Positional(Vec<u64>),
			Named(serde_json::Map<String, serde_json::Value>),
		}
		match Wire::deserialize(deserializer)? {
			Wire::Positional(counts) => {
				if counts.len() > crate::config::PROJECTS.len() {
					return Err(D::Error::invalid_length(counts.len(), &"one count per fixed project"));
				}
				let entries = crate::config::PROJECTS.iter().zip(counts);
				Ok(Self(entries.map(|(project, votes)| (project.to_string(), votes)).collect()))
			}
			Wire::Named(map) => {
				let mut entries = Vec::with_capacity(map.len());
				for (project, votes) in map {
					let Some(votes) = votes.as_u64() else {
						return Err(D::Error::custom(format!("vote count for {project:?} is not a count: {votes}")));
					};
					entries.push((project, votes));
				}
				Ok(Self(entries))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn positional_counts_map_to_fixed_projects() {
		let tally = serde_json::from_str::<VoteTally>("[4, 0, 9]").unwrap();
		let entries = tally.iter().collect::<Vec<_>>();
		assert_eq!(entries, vec![("Website", 4), ("iOS App", 0), ("Machine Learning", 9)]);
	}

	#[test]
	fn short_positional_counts_cover_leading_projects() {
		let tally = serde_json::from_str::<VoteTally>("[7]").unwrap();
		assert_eq!(tally.len(), 1);
		assert!(!tally.is_empty());
		assert_eq!(tally.iter().next(), Some(("Website", 7)));
	}

	#[test]
	fn too_many_positional_counts() {
		assert!(serde_json::from_str::<VoteTally>("[1, 2, 3, 4]").is_err());
	}

	#[test]
	fn named_counts_keep_their_keys() {
		let json = r#"{"Compiler": 2, "Game": 11, "Blog": 0}"#;
		let tally = serde_json::from_str::<VoteTally>(json).unwrap();
		let mut entries = tally.iter().collect::<Vec<_>>();
		entries.sort();
		assert_eq!(entries, vec![("Blog", 0), ("Compiler", 2), ("Game", 11)]);
	}

	#[test]
	fn negative_count_is_an_error() {
		assert!(serde_json::from_str::<VoteTally>(r#"{"Game": -1}"#).is_err());
	}
}
