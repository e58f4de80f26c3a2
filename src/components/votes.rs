use super::Region;
use crate::{
	config,
	view::{Display, VoteChart},
};
use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct VoteFormProps {
	pub display: Display,
	pub can_vote: bool,
	pub projects: Vec<String>,
}

#[function_component]
pub fn VoteForm(props: &VoteFormProps) -> Html {
	let content = match props.can_vote {
		false => html! {
			<p>{"Thanks for voting!"}</p>
		},
		true => html! {
			<form action={config::NEXT_PROJECT} method="POST">
				{props.projects.iter().map(|project| html! {
					<label class="d-block">
						<input type="radio" name="project" value={project.clone()} required=true />
						{" "}{project}
					</label>
				}).collect::<Html>()}
				<input class="btn btn-primary btn-sm" type="submit" value="Vote" />
			</form>
		},
	};
	html! {
		<Region id="voting" display={props.display}>
			<h3>{"What should I build next?"}</h3>
			{content}
		</Region>
	}
}

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct VoteBarsProps {
	/// `None` until the first tally arrives.
	pub chart: Option<VoteChart>,
}

/// Horizontal bar chart, one row per project, scaled to the leading project.
#[function_component]
pub fn VoteBars(VoteBarsProps { chart }: &VoteBarsProps) -> Html {
	let Some(chart) = chart else {
		return html! { <div id="vote-chart" /> };
	};
	html! {
		<div id="vote-chart">
			{chart.rows.iter().map(|row| html! {
				<div class="d-flex align-items-center vote-row">
					<span class="vote-project">{&row.project}</span>
					<div class="vote-bar" style={format!("width: {}%;", row.percent)} />
					<span class="vote-count">{row.votes}</span>
				</div>
			}).collect::<Html>()}
		</div>
	}
}
