use super::Region;
use crate::{
	config,
	view::{CommentItem, CommentsView, Display},
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct CommentFormProps {
	pub display: Display,
}

#[function_component]
pub fn CommentForm(CommentFormProps { display }: &CommentFormProps) -> Html {
	html! {
		<Region id="comment-form" display={*display}>
			<form action={config::COMMENTS} method="POST">
				<textarea name="comment" placeholder="Leave a comment" required=true />
				<input class="btn btn-success btn-sm" type="submit" value="Post" />
			</form>
		</Region>
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct CommentSectionProps {
	/// `None` until the first reply arrives.
	pub comments: Option<CommentsView>,
	pub limit: AttrValue,
	pub on_limit: Callback<String>,
	pub on_delete_all: Callback<()>,
}

#[function_component]
pub fn CommentSection(props: &CommentSectionProps) -> Html {
	// The value goes to the server as typed; it decides what an odd limit means.
	let onchange = props.on_limit.reform(|event: Event| event.target_unchecked_into::<HtmlInputElement>().value());
	let delete_all = props.on_delete_all.reform(|_: MouseEvent| ());
	let list = match &props.comments {
		None => html! {},
		Some(view) => match view.placeholder() {
			Some(placeholder) => html! { <li class="placeholder">{placeholder}</li> },
			None => view
				.items()
				.iter()
				.map(|item| html! { <CommentEntry item={item.clone()} /> })
				.collect::<Html>(),
		},
	};
	html! {
		<section id="comments">
			<h3>{"Comments"}</h3>
			<div class="d-flex align-items-center">
				<label>
					{"Show "}
					<input id="comment-limit" type="number" value={props.limit.clone()} {onchange} />
					{" comments"}
				</label>
				<button class="btn btn-outline-danger btn-sm" onclick={delete_all}>{"Delete all comments"}</button>
			</div>
			<ul id="comments-container">{list}</ul>
		</section>
	}
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct CommentEntryProps {
	pub item: CommentItem,
}

#[function_component]
fn CommentEntry(CommentEntryProps { item }: &CommentEntryProps) -> Html {
	let editing = use_state_eq(|| false);
	let toggle = {
		let editing = editing.clone();
		Callback::from(move |_: MouseEvent| editing.set(!*editing))
	};
	let toggle_label = match *editing {
		true => "Cancel",
		false => "Edit",
	};
	let forms = match item.editable {
		false => html! {},
		true => html! {<>
			<button class="btn btn-link btn-sm" onclick={toggle}>
				{toggle_label}
			</button>
			<div id={item.edit_form_id()} style={Display::when(*editing).style()}>
				<form action={config::EDIT_COMMENT} method="POST">
					<input type="hidden" name="id" value={item.id.clone()} />
					<textarea name="comment" value={item.text.clone()} />
					<input class="btn btn-primary btn-sm" type="submit" value="Save" />
				</form>
				<form action={config::DELETE_COMMENT} method="POST">
					<input type="hidden" name="id" value={item.id.clone()} />
					<input class="btn btn-danger btn-sm" type="submit" value="Delete" />
				</form>
			</div>
		</>},
	};
	html! {
		<li class="comment">
			<strong>{&item.label}</strong>
			{": "}{&item.text}
			{forms}
		</li>
	}
}
