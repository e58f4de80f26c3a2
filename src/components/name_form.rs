use crate::config;
use yew::prelude::*;

/// New accounts have no name; the server stores it and redirects back to the forum.
#[function_component]
pub fn NameForm() -> Html {
	html! {
		<form id="name-form" action={config::SET_NAME} method="POST">
			<h3>{"What should we call you?"}</h3>
			<label>
				{"First name "}
				<input type="text" name="firstName" required=true />
			</label>
			<label>
				{"Last name "}
				<input type="text" name="lastName" required=true />
			</label>
			<input class="btn btn-success" type="submit" value="Save" />
		</form>
	}
}
