use reqwest::{RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

/// A pending request whose body is expected to parse as `T`.
pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Response<T> {
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_query<Q>(mut self, query: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.query(query);
		self
	}

	/// Sends the request and drops whatever the server answers with.
	/// Used for actions whose reply is a redirect or an empty page.
	pub async fn dispatch(self) -> anyhow::Result<StatusCode> {
		let response = self.builder.send().await?;
		Ok(response.status())
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub async fn send(self) -> anyhow::Result<T> {
		let response: reqwest::Response = self.builder.send().await?;
		let status = response.status();
		let text = response.text().await?;
		let output = match serde_json::from_str(&text) {
			Ok(data) => data,
			Err(err) => {
				return Err(InvalidJson { status, body: text, source: err }.into());
			}
		};
		Ok(output)
	}
}

#[derive(thiserror::Error, Debug)]
#[error("invalid json in {status} response: {body:?}")]
pub struct InvalidJson {
	pub status: StatusCode,
	pub body: String,
	#[source]
	pub source: serde_json::Error,
}
