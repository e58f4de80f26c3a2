use crate::data::{Comment, Comments, LoginStatus, UserInfo, VoteTally};

/// Whether a region of the page is rendered visibly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
	Shown,
	#[default]
	Hidden,
}
impl Display {
	pub fn when(visible: bool) -> Self {
		match visible {
			true => Self::Shown,
			false => Self::Hidden,
		}
	}

	pub fn style(self) -> &'static str {
		match self {
			Self::Shown => "",
			Self::Hidden => "display: none",
		}
	}

	pub fn is_shown(self) -> bool {
		self == Self::Shown
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProfileView {
	NeedsName,
	Ready(UserInfo),
}
impl From<UserInfo> for ProfileView {
	fn from(user: UserInfo) -> Self {
		match user.needs_name() {
			true => Self::NeedsName,
			false => Self::Ready(user),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionView {
	Anonymous { login_url: String },
	Identified { logout_url: String, profile: ProfileView },
}
impl SessionView {
	pub fn anonymous(status: LoginStatus) -> Self {
		Self::Anonymous { login_url: status.url }
	}

	pub fn login_url(&self) -> Option<&str> {
		match self {
			Self::Anonymous { login_url } => Some(login_url),
			Self::Identified { .. } => None,
		}
	}

	pub fn logout_url(&self) -> Option<&str> {
		match self {
			Self::Anonymous { .. } => None,
			Self::Identified { logout_url, .. } => Some(logout_url),
		}
	}

	pub fn user(&self) -> Option<&UserInfo> {
		match self {
			Self::Identified {
				profile: ProfileView::Ready(user),
				..
			} => Some(user),
			_ => None,
		}
	}

	pub fn regions(&self) -> Regions {
		let needs_name = matches!(
			self,
			Self::Identified {
				profile: ProfileView::NeedsName,
				..
			}
		);
		let has_profile = self.user().is_some();
		Regions {
			login_prompt: Display::when(self.login_url().is_some()),
			name_prompt: Display::when(needs_name),
			user_header: Display::when(has_profile),
			comment_form: Display::when(has_profile),
			voting: Display::when(has_profile),
		}
	}
}

/// Visibility of the login-gated parts of the page.
/// The default hides everything, which is what renders before login status arrives.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Regions {
	pub login_prompt: Display,
	pub name_prompt: Display,
	pub user_header: Display,
	pub comment_form: Display,
	pub voting: Display,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentItem {
	pub id: String,
	/// "First Last", or "Comment #n" for entries without an author.
	pub label: String,
	pub text: String,
	pub editable: bool,
}
impl CommentItem {
	fn new(position: usize, comment: Comment) -> Self {
		let label = match comment.author() {
			Some(author) => author,
			None => format!("Comment #{}", position + 1),
		};
		Self {
			label,
			editable: comment.can_edit && !comment.id.is_empty(),
			id: comment.id,
			text: comment.text,
		}
	}

	/// Element id of the inline edit/delete forms.
	pub fn edit_form_id(&self) -> String {
		format!("edit-comment-{}", self.id)
	}
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CommentsView {
	#[default]
	Empty,
	Listed(Vec<CommentItem>),
}
impl From<Comments> for CommentsView {
	fn from(comments: Comments) -> Self {
		if comments.is_empty() {
			return Self::Empty;
		}
		let items = comments.into_iter().enumerate();
		Self::Listed(items.map(|(position, comment)| CommentItem::new(position, comment)).collect())
	}
}
impl CommentsView {
	pub fn placeholder(&self) -> Option<&'static str> {
		match self {
			Self::Empty => Some(crate::config::EMPTY_COMMENTS_PLACEHOLDER),
			Self::Listed(_) => None,
		}
	}

	pub fn items(&self) -> &[CommentItem] {
		match self {
			Self::Empty => &[],
			Self::Listed(items) => items,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct VoteRow {
	pub project: String,
	pub votes: u64,
	/// Bar length relative to the leading project, 0..=100.
	pub percent: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VoteChart {
	pub rows: Vec<VoteRow>,
}
impl From<&VoteTally> for VoteChart {
	fn from(tally: &VoteTally) -> Self {
		let max = tally.iter().map(|(_, votes)| votes).max().unwrap_or(0);
		let rows = tally.iter().map(|(project, votes)| VoteRow {
			project: project.to_owned(),
			votes,
			percent: match max {
				0 => 0,
				max => (u128::from(votes) * 100 / u128::from(max)) as u64,
			},
		});
		Self { rows: rows.collect() }
	}
}
impl VoteChart {
	/// The choices offered by the voting form.
	pub fn projects(&self) -> Vec<String> {
		match self.rows.is_empty() {
			true => crate::config::PROJECTS.iter().map(|project| project.to_string()).collect(),
			false => self.rows.iter().map(|row| row.project.clone()).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn user(first: &str, last: &str, can_vote: bool) -> UserInfo {
		UserInfo {
			first_name: first.into(),
			last_name: last.into(),
			can_vote,
		}
	}

	#[test]
	fn anonymous_hides_profile_regions() {
		let session = SessionView::anonymous(LoginStatus {
			is_logged_in: false,
			url: "/_ah/login?continue=%2Fname".into(),
		});
		let regions = session.regions();
		assert_eq!(regions.login_prompt, Display::Shown);
		assert_eq!(session.login_url(), Some("/_ah/login?continue=%2Fname"));
		for hidden in [regions.user_header, regions.comment_form, regions.voting, regions.name_prompt] {
			assert_eq!(hidden.style(), "display: none");
		}
	}

	#[test]
	fn missing_name_shows_prompt_instead_of_profile() {
		let session = SessionView::Identified {
			logout_url: "/_ah/logout".into(),
			profile: ProfileView::from(user("", "", true)),
		};
		let regions = session.regions();
		assert_eq!(regions.name_prompt, Display::Shown);
		assert_eq!(regions.user_header, Display::Hidden);
		assert_eq!(regions.comment_form, Display::Hidden);
		assert_eq!(regions.voting, Display::Hidden);
		assert_eq!(regions.login_prompt, Display::Hidden);
		assert_eq!(session.user(), None);
	}

	#[test]
	fn named_user_reveals_profile() {
		let session = SessionView::Identified {
			logout_url: "/_ah/logout".into(),
			profile: ProfileView::from(user("Ada", "Lovelace", false)),
		};
		let regions = session.regions();
		assert!(regions.user_header.is_shown());
		assert!(regions.comment_form.is_shown());
		assert!(regions.voting.is_shown());
		assert!(!regions.name_prompt.is_shown());
		assert!(!regions.login_prompt.is_shown());
		assert_eq!(session.logout_url(), Some("/_ah/logout"));
		assert_eq!(regions.user_header.style(), "");
	}

	#[test]
	fn nothing_gated_shows_before_login_status() {
		let regions = Regions::default();
		assert!(!regions.login_prompt.is_shown());
		assert!(!regions.comment_form.is_shown());
	}

	#[test]
	fn empty_comments_render_placeholder() {
		for json in ["[]", "{}"] {
			let view = CommentsView::from(serde_json::from_str::<Comments>(json).unwrap());
			assert_eq!(view.placeholder(), Some("Be the first to leave a comment!"));
			assert!(view.items().is_empty());
		}
	}

	#[test]
	fn listed_comments_match_input_order() {
		let json = r#"[
			{"id": 9, "comment": "c", "firstName": "Ada", "lastName": "Lovelace", "canEdit": true},
			{"id": 8, "comment": "b", "firstName": "Alan", "lastName": "Turing", "canEdit": false},
			{"id": 2, "comment": "a", "firstName": "Grace", "lastName": "Hopper", "canEdit": false}
		]"#;
		let view = CommentsView::from(serde_json::from_str::<Comments>(json).unwrap());
		assert_eq!(view.placeholder(), None);
		let texts = view.items().iter().map(|item| item.text.as_str()).collect::<Vec<_>>();
		assert_eq!(texts, vec!["c", "b", "a"]);
		assert_eq!(view.items()[0].label, "Ada Lovelace");
		assert!(view.items()[0].editable);
		assert_eq!(view.items()[0].edit_form_id(), "edit-comment-9");
		assert!(!view.items()[1].editable);
	}

	#[test]
	fn legacy_comments_are_numbered() {
		let view = CommentsView::from(serde_json::from_str::<Comments>(r#"["x", "y"]"#).unwrap());
		let labels = view.items().iter().map(|item| item.label.as_str()).collect::<Vec<_>>();
		assert_eq!(labels, vec!["Comment #1", "Comment #2"]);
		assert!(view.items().iter().all(|item| !item.editable));
	}

	#[test]
	fn chart_has_one_row_per_tally_entry() {
		let tally = serde_json::from_str::<VoteTally>(r#"{"Blog": 1, "Compiler": 4, "Game": 2}"#).unwrap();
		let chart = VoteChart::from(&tally);
		assert_eq!(chart.rows.len(), tally.len());
		for (project, votes) in tally.iter() {
			let row = chart.rows.iter().find(|row| row.project == project).unwrap();
			assert_eq!(row.votes, votes);
		}
		let compiler = chart.rows.iter().find(|row| row.project == "Compiler").unwrap();
		assert_eq!(compiler.percent, 100);
		let game = chart.rows.iter().find(|row| row.project == "Game").unwrap();
		assert_eq!(game.percent, 50);
	}

	#[test]
	fn huge_counts_scale_without_overflow() {
		let tally = VoteTally(vec![("Compiler".into(), u64::MAX), ("Game".into(), u64::MAX / 2)]);
		let chart = VoteChart::from(&tally);
		let percents = chart.rows.iter().map(|row| row.percent).collect::<Vec<_>>();
		assert_eq!(percents, vec![100, 49]);
		assert_eq!(chart.rows[0].votes, u64::MAX);
	}

	#[test]
	fn half_named_user_keeps_profile() {
		let session = SessionView::Identified {
			logout_url: "/_ah/logout".into(),
			profile: ProfileView::from(user("Ada", "", true)),
		};
		let regions = session.regions();
		assert!(regions.user_header.is_shown());
		assert!(regions.comment_form.is_shown());
		assert!(!regions.name_prompt.is_shown());
	}

	#[test]
	fn chart_without_votes_has_empty_bars() {
		let tally = serde_json::from_str::<VoteTally>("[0, 0, 0]").unwrap();
		let chart = VoteChart::from(&tally);
		assert_eq!(chart.rows.len(), 3);
		assert!(chart.rows.iter().all(|row| row.percent == 0));
		assert_eq!(chart.projects(), vec!["Website", "iOS App", "Machine Learning"]);
	}

	#[test]
	fn voting_choices_fall_back_to_fixed_projects() {
		assert_eq!(VoteChart::default().projects().len(), crate::config::PROJECTS.len());
	}
}
