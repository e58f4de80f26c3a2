use crate::{
	config::Endpoints,
	data::{Comments, LoginStatus, UserInfo, VoteTally},
	response::Response,
};
use anyhow::anyhow;
use futures_util::{future::LocalBoxFuture, FutureExt};
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

/// The backend servlets the forum reads from.
/// Futures are local because the browser runs everything on one thread.
pub trait Backend {
	fn login_status(&self) -> LocalBoxFuture<'_, anyhow::Result<LoginStatus>>;

	fn user_info(&self) -> LocalBoxFuture<'_, anyhow::Result<UserInfo>>;

	/// `limit` is forwarded untouched, the server decides what it means.
	fn comments<'a>(&'a self, limit: &'a str) -> LocalBoxFuture<'a, anyhow::Result<Comments>>;

	fn vote_tally(&self) -> LocalBoxFuture<'_, anyhow::Result<VoteTally>>;

	fn delete_all_comments(&self) -> LocalBoxFuture<'_, anyhow::Result<()>>;
}

pub struct HttpBackend {
	client: reqwest::Client,
	base: Url,
	endpoints: Endpoints,
}

impl HttpBackend {
	pub fn new(base: Url) -> Self {
		Self {
			client: reqwest::Client::new(),
			base,
			endpoints: Endpoints::default(),
		}
	}

	/// Resolves endpoints against the page's base URI, so the app works wherever the site is hosted.
	pub fn from_document() -> anyhow::Result<Self> {
		let base_uri = gloo_utils::document()
			.base_uri()
			.map_err(|err| anyhow!("failed to read document base uri: {err:?}"))?;
		let Some(base_uri) = base_uri else {
			return Err(anyhow!("document has no base uri"));
		};
		Ok(Self::new(Url::parse(&base_uri)?))
	}

	pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
		self.endpoints = endpoints;
		self
	}

	pub fn url(&self, path: &str) -> anyhow::Result<Url> {
		Ok(self.base.join(path)?)
	}

	fn request<T>(&self, method: Method, path: &str) -> anyhow::Result<Response<T>> {
		let url = self.url(path)?;
		let builder = self.client.request(method, url);
		Ok(Response::<T>::from(builder.header("Accept", "application/json")))
	}

	async fn get<T>(&self, path: &str) -> anyhow::Result<T>
	where
		T: DeserializeOwned,
	{
		let request = self.request::<T>(Method::GET, path)?;
		log::debug!(target: "api", "{request:?}");
		request.send().await
	}
}

impl Backend for HttpBackend {
	fn login_status(&self) -> LocalBoxFuture<'_, anyhow::Result<LoginStatus>> {
		self.get(self.endpoints.login_status).boxed_local()
	}

	fn user_info(&self) -> LocalBoxFuture<'_, anyhow::Result<UserInfo>> {
		self.get(self.endpoints.user_info).boxed_local()
	}

	fn comments<'a>(&'a self, limit: &'a str) -> LocalBoxFuture<'a, anyhow::Result<Comments>> {
		async move {
			let request = self.request::<Comments>(Method::GET, self.endpoints.comments)?;
			let request = request.with_query(&[("limit", limit)]);
			log::debug!(target: "api", "{request:?}");
			request.send().await
		}
		.boxed_local()
	}

	fn vote_tally(&self) -> LocalBoxFuture<'_, anyhow::Result<VoteTally>> {
		self.get(self.endpoints.vote_tally).boxed_local()
	}

	fn delete_all_comments(&self) -> LocalBoxFuture<'_, anyhow::Result<()>> {
		async move {
			let request = self.request::<()>(Method::POST, self.endpoints.delete_all_comments)?;
			let status = request.dispatch().await?;
			log::debug!(target: "api", "delete all comments answered {status}");
			Ok(())
		}
		.boxed_local()
	}
}
