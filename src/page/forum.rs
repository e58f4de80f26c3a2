use crate::{
	api::HttpBackend,
	components::{CommentForm, CommentSection, SessionBar, VoteBars, VoteForm},
	config,
	controller::Controller,
	hooks::use_refresh,
	view::SessionView,
};
use futures_util::FutureExt;
use yew::prelude::*;

pub type ForumController = Controller<HttpBackend>;

enum CommentRequest {
	Refresh(String),
	DeleteAll(String),
}

#[function_component]
pub fn ForumPage() -> Html {
	match use_context::<ForumController>() {
		Some(controller) => html! { <Forum {controller} /> },
		None => {
			log::error!(target: "forum", "rendered without a controller");
			html! {}
		}
	}
}

#[derive(Clone, PartialEq, Properties)]
struct ForumProps {
	controller: ForumController,
}

#[function_component]
fn Forum(ForumProps { controller }: &ForumProps) -> Html {
	let session = use_refresh("session", Some(()), {
		let controller = controller.clone();
		move |()| {
			let controller = controller.clone();
			async move { controller.refresh_login_status().await.map(Some) }.boxed_local()
		}
	});

	let limit = use_state(|| config::DEFAULT_COMMENT_LIMIT.to_owned());
	let comments = use_refresh(
		"comments",
		Some(CommentRequest::Refresh((*limit).clone())),
		{
			let controller = controller.clone();
			move |request| {
				let controller = controller.clone();
				async move {
					match request {
						CommentRequest::Refresh(limit) => controller.refresh_comments(&limit).await,
						CommentRequest::DeleteAll(limit) => controller.submit_delete_all_comments(&limit).await,
					}
				}
				.boxed_local()
			}
		},
	);

	let votes = use_refresh("votes", Some(()), {
		let controller = controller.clone();
		move |()| {
			let controller = controller.clone();
			async move { controller.refresh_vote_chart().await.map(Some) }.boxed_local()
		}
	});

	let on_limit = {
		let limit = limit.clone();
		let comments = comments.clone();
		Callback::from(move |value: String| {
			limit.set(value.clone());
			comments.run(CommentRequest::Refresh(value));
		})
	};
	let on_delete_all = {
		let limit = limit.clone();
		let comments = comments.clone();
		Callback::from(move |()| {
			comments.run(CommentRequest::DeleteAll((*limit).clone()));
		})
	};

	let regions = session.as_ref().map(SessionView::regions).unwrap_or_default();
	let can_vote = session.as_ref().and_then(SessionView::user).map_or(false, |user| user.can_vote);
	let projects = (*votes).clone().unwrap_or_default().projects();
	html! {
		<div class="container forum">
			<SessionBar session={(*session).clone()} />
			<CommentForm display={regions.comment_form} />
			<CommentSection
				comments={(*comments).clone()}
				limit={(*limit).clone()}
				{on_limit}
				{on_delete_all}
			/>
			<section id="next-project">
				<h3>{"Next project"}</h3>
				<VoteForm display={regions.voting} {can_vote} {projects} />
				<VoteBars chart={(*votes).clone()} />
			</section>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::testing::{is_hidden, render_routed};
	use url::Url;

	#[tokio::test]
	async fn missing_controller_renders_nothing() {
		let markup = render_routed(|| html! { <ForumPage /> }).await;
		assert!(!markup.contains("comments-container"));
	}

	#[tokio::test]
	async fn first_render_hides_gated_regions() {
		let markup = render_routed(|| {
			let base = Url::parse("http://localhost:8080/").unwrap();
			let controller = ForumController::new(HttpBackend::new(base));
			html! {
				<ContextProvider<ForumController> context={controller}>
					<ForumPage />
				</ContextProvider<ForumController>>
			}
		})
		.await;
		assert!(markup.contains(r#"id="comments-container""#));
		assert!(!markup.contains("<li"));
		for id in ["login-prompt", "name-prompt", "user-header", "comment-form", "voting"] {
			assert!(is_hidden(&markup, id), "{id} visible in {markup}");
		}
	}
}
