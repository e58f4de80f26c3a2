use crate::{
	api::Backend,
	view::{CommentsView, ProfileView, SessionView, VoteChart},
};
use std::{cell::Cell, rc::Rc};

/// Hands out increasing tickets so a reply can tell whether a newer request was issued after it.
#[derive(Debug, Default)]
struct Sequence(Cell<u64>);
impl Sequence {
	fn begin(&self) -> u64 {
		let ticket = self.0.get() + 1;
		self.0.set(ticket);
		ticket
	}

	fn is_latest(&self, ticket: u64) -> bool {
		self.0.get() == ticket
	}
}

/// Fetches page data and turns it into what each region should show.
/// Nothing is cached; every call goes back to the server.
pub struct ViewController<B> {
	backend: B,
	comment_requests: Sequence,
}

impl<B> ViewController<B>
where
	B: Backend,
{
	pub fn new(backend: B) -> Self {
		Self {
			backend,
			comment_requests: Sequence::default(),
		}
	}

	pub async fn refresh_login_status(&self) -> anyhow::Result<SessionView> {
		let status = self.backend.login_status().await?;
		if !status.is_logged_in {
			log::info!(target: "session", "Not signed in.");
			return Ok(SessionView::anonymous(status));
		}
		let profile = self.refresh_profile().await?;
		Ok(SessionView::Identified {
			logout_url: status.url,
			profile,
		})
	}

	pub async fn refresh_profile(&self) -> anyhow::Result<ProfileView> {
		let user = self.backend.user_info().await?;
		let profile = ProfileView::from(user);
		match &profile {
			ProfileView::NeedsName => log::info!(target: "session", "Signed in without a name."),
			ProfileView::Ready(user) => log::info!(target: "session", "Signed in as {}.", user.display_name()),
		}
		Ok(profile)
	}

	/// Resolves to `None` when another comment request was started while this one was in flight.
	pub async fn refresh_comments(&self, limit: &str) -> anyhow::Result<Option<CommentsView>> {
		let ticket = self.comment_requests.begin();
		let comments = self.backend.comments(limit).await?;
		if !self.comment_requests.is_latest(ticket) {
			log::debug!(target: "comments", "Discarding superseded response for limit {limit:?}.");
			return Ok(None);
		}
		log::info!(target: "comments", "Acquired {} comments.", comments.len());
		Ok(Some(CommentsView::from(comments)))
	}

	pub async fn refresh_vote_chart(&self) -> anyhow::Result<VoteChart> {
		let tally = self.backend.vote_tally().await?;
		log::info!(target: "votes", "Acquired votes for {} projects.", tally.len());
		Ok(VoteChart::from(&tally))
	}

	pub async fn submit_delete_all_comments(&self, limit: &str) -> anyhow::Result<Option<CommentsView>> {
		self.backend.delete_all_comments().await?;
		log::info!(target: "comments", "Deleted all comments.");
		self.refresh_comments(limit).await
	}
}

/// Shared handle given to components through context.
pub struct Controller<B>(Rc<ViewController<B>>);
impl<B> Controller<B>
where
	B: Backend,
{
	pub fn new(backend: B) -> Self {
		Self(Rc::new(ViewController::new(backend)))
	}
}
impl<B> Clone for Controller<B> {
	fn clone(&self) -> Self {
		Self(self.0.clone())
	}
}
impl<B> PartialEq for Controller<B> {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}
impl<B> std::ops::Deref for Controller<B> {
	type Target = ViewController<B>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
