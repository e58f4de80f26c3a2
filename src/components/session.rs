use super::Region;
use crate::{
	data::UserInfo,
	page::Route,
	view::SessionView,
};
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct SessionProps {
	/// `None` until the first login status reply arrives.
	pub session: Option<SessionView>,
}

#[function_component]
pub fn SessionBar(SessionProps { session }: &SessionProps) -> Html {
	let regions = session.as_ref().map(SessionView::regions).unwrap_or_default();
	let login_url = session.as_ref().and_then(SessionView::login_url).unwrap_or_default().to_owned();
	let logout_url = session.as_ref().and_then(SessionView::logout_url).unwrap_or_default().to_owned();
	let name = session
		.as_ref()
		.and_then(SessionView::user)
		.map(UserInfo::display_name)
		.unwrap_or_default();
	html! {<>
		<Region id="login-prompt" display={regions.login_prompt}>
			<p>
				{"Sign in to leave a comment or vote on my next project. "}
				<a class="btn btn-primary btn-sm" href={login_url}>{"Log in"}</a>
			</p>
		</Region>
		<Region id="user-header" display={regions.user_header}>
			<h3>{format!("Welcome, {name}!")}</h3>
			<a class="btn btn-outline-danger btn-sm" href={logout_url.clone()}>{"Log out"}</a>
		</Region>
		<Region id="name-prompt" display={regions.name_prompt}>
			<p>
				{"Please "}
				<Link<Route> to={Route::SetName}>{"set a name"}</Link<Route>>
				{" before commenting or voting. "}
				<a href={logout_url}>{"Log out"}</a>
			</p>
		</Region>
	</>}
}
