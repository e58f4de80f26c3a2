use futures_util::future::LocalBoxFuture;
use std::rc::Rc;
use yew::prelude::*;
use yew_hooks::use_mount;

/// The latest accepted value for one region of the page, and a trigger to fetch it again.
pub struct RefreshHandle<Args, T> {
	state: UseStateHandle<Option<T>>,
	run: Rc<dyn Fn(Args)>,
}
impl<Args, T> RefreshHandle<Args, T> {
	pub fn run(&self, args: Args) {
		(*self.run)(args);
	}
}
impl<Args, T> Clone for RefreshHandle<Args, T> {
	fn clone(&self) -> Self {
		Self {
			state: self.state.clone(),
			run: self.run.clone(),
		}
	}
}
impl<Args, T> std::ops::Deref for RefreshHandle<Args, T> {
	type Target = Option<T>;

	fn deref(&self) -> &Self::Target {
		&self.state
	}
}

/// Runs `make_future` on demand (and once on mount when `on_mount` has arguments).
///
/// `Ok(Some(value))` replaces the region's value. `Ok(None)` means the reply was superseded and
/// leaves the region alone. Errors are logged under `target` and also leave the region alone,
/// so a failed fetch shows up as a stale or blank region rather than a broken page.
#[hook]
pub fn use_refresh<Args, T, F>(target: &'static str, on_mount: Option<Args>, make_future: F) -> RefreshHandle<Args, T>
where
	F: Fn(Args) -> LocalBoxFuture<'static, anyhow::Result<Option<T>>> + 'static,
	Args: 'static,
	T: 'static,
{
	let state = use_state(|| None);
	let run: Rc<dyn Fn(Args)> = {
		let state = state.clone();
		Rc::new(move |args| {
			let state = state.clone();
			let future = make_future(args);
			wasm_bindgen_futures::spawn_local(async move {
				match future.await {
					Ok(Some(value)) => state.set(Some(value)),
					Ok(None) => {}
					Err(err) => log::error!(target: target, "{err:?}"),
				}
			});
		})
	};
	use_mount({
		let run = run.clone();
		move || {
			if let Some(args) = on_mount {
				run(args);
			}
		}
	});
	RefreshHandle { state, run }
}
