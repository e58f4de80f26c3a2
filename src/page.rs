use yew::prelude::*;
use yew_router::{Routable, Switch};

mod forum;
pub use forum::*;

#[derive(Debug, Clone, Copy, PartialEq, Routable)]
pub enum Route {
	#[at("/")]
	Home,
	// Servlets redirect to these after form posts.
	#[at("/forum.html")]
	Forum,
	#[at("/contact.html")]
	Contact,
	#[at("/name.html")]
	SetName,
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl Route {
	fn html(self) -> Html {
		match self {
			Self::Home | Self::Forum | Self::Contact => html! { <ForumPage /> },
			Self::SetName => html! {
				<div class="container">
					<crate::components::NameForm />
				</div>
			},
			Self::NotFound => html! {
				<h1>{"404: Page not found"}</h1>
			},
		}
	}
}

#[function_component]
pub fn Routes() -> Html {
	html! {
		<Switch<Route> render={Route::html} />
	}
}
