use crate::view::Display;
use yew::{prelude::*, Component, Properties};

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct RegionProps {
	pub id: AttrValue,
	pub display: Display,
	#[prop_or_default]
	pub children: Html,
}

/// A block of the page that is always in the document and hidden with `display: none` when gated off.
pub struct Region;
impl Component for Region {
	type Message = ();
	type Properties = RegionProps;

	fn create(_ctx: &yew::Context<Self>) -> Self {
		Self
	}

	fn view(&self, ctx: &yew::Context<Self>) -> yew::Html {
		let props = ctx.props();
		html! {
			<div id={props.id.clone()} style={props.display.style()}>
				{props.children.clone()}
			</div>
		}
	}
}
