//! Reactive wrappers around [`DataService`] calls.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::data::{DataService, use_data_service};
use crate::error::DataError;

/// Reactive state of one data-service call.
pub struct Fetch<T: 'static> {
	/// Last successful answer.
	pub value: ReadSignal<Option<T>>,
	/// True while a request is in flight.
	pub loading: ReadSignal<bool>,
	/// Failure of the last request.
	pub error: ReadSignal<Option<DataError>>,
}

impl<T: 'static> Clone for Fetch<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: 'static> Copy for Fetch<T> {}

/// Request counter shared by a hook and its in-flight requests.
///
/// Each request takes a ticket; only the holder of the newest ticket may
/// publish its answer.
#[derive(Clone, Default)]
struct Generation(Rc<Cell<u64>>);

impl Generation {
	/// Supersedes every earlier ticket.
	fn next(&self) -> u64 {
		let ticket = self.0.get() + 1;
		self.0.set(ticket);
		ticket
	}

	fn is_current(&self, ticket: u64) -> bool {
		self.0.get() == ticket
	}
}

/// Write halves of a [`Fetch`].
struct Outcome<T: 'static> {
	value: WriteSignal<Option<T>>,
	loading: WriteSignal<bool>,
	error: WriteSignal<Option<DataError>>,
}

impl<T: 'static> Clone for Outcome<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T: 'static> Copy for Outcome<T> {}

impl<T: Send + Sync + 'static> Outcome<T> {
	/// Publishes `result` if `ticket` is still the newest request.
	///
	/// Returns whether anything was written.
	fn settle(self, generation: &Generation, ticket: u64, result: Result<T, DataError>) -> bool {
		if !generation.is_current(ticket) {
			log::debug!("dropping superseded answer #{ticket}");
			return false;
		}
		match result {
			Ok(v) => {
				self.value.try_set(Some(v));
			}
			Err(err) => {
				log::warn!("data request failed: {err}");
				self.error.try_set(Some(err));
			}
		}
		self.loading.try_set(false);
		true
	}
}

/// Calls `fetch` whenever `key` changes.
///
/// A `None` key clears the value without fetching. Answers to requests that
/// were superseded by a newer key are dropped.
pub fn use_keyed_fetch<K, T, F, Fut>(key: impl Fn() -> Option<K> + 'static, fetch: F) -> Fetch<T>
where
	K: 'static,
	T: Send + Sync + 'static,
	F: Fn(Rc<dyn DataService>, K) -> Fut + 'static,
	Fut: Future<Output = Result<T, DataError>> + 'static,
{
	let service = use_data_service();
	let (value, set_value) = signal(None::<T>);
	let (loading, set_loading) = signal(true);
	let (error, set_error) = signal(None::<DataError>);
	let outcome = Outcome {
		value: set_value,
		loading: set_loading,
		error: set_error,
	};
	let generation = Generation::default();
	let fetch = Rc::new(fetch);

	Effect::new(move |_| {
		// a `None` key also retires whatever is in flight
		let ticket = generation.next();

		let Some(key) = key() else {
			set_value.set(None);
			set_loading.set(false);
			return;
		};
		set_loading.set(true);
		set_error.set(None);

		let (service, fetch, generation) = (service.clone(), fetch.clone(), generation.clone());
		spawn_local(async move {
			let result = fetch(service, key).await;
			outcome.settle(&generation, ticket, result);
		});
	});

	Fetch { value, loading, error }
}

/// Calls `fetch` once, when the calling component mounts.
pub fn use_fetch<T, F, Fut>(fetch: F) -> Fetch<T>
where
	T: Send + Sync + 'static,
	F: Fn(Rc<dyn DataService>) -> Fut + 'static,
	Fut: Future<Output = Result<T, DataError>> + 'static,
{
	use_keyed_fetch(|| Some(()), move |service, ()| fetch(service))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn fetch_signals() -> (Fetch<u32>, Outcome<u32>) {
		let (value, set_value) = signal(None);
		let (loading, set_loading) = signal(true);
		let (error, set_error) = signal(None);
		(
			Fetch { value, loading, error },
			Outcome {
				value: set_value,
				loading: set_loading,
				error: set_error,
			},
		)
	}

	#[test]
	fn newer_ticket_supersedes_older() {
		let generation = Generation::default();
		let first = generation.next();
		assert!(generation.is_current(first));

		let second = generation.next();
		assert!(!generation.is_current(first));
		assert!(generation.is_current(second));
	}

	#[test]
	fn only_the_latest_answer_lands() {
		let owner = Owner::new();
		owner.with(|| {
			let (fetch, outcome) = fetch_signals();
			let generation = Generation::default();
			let finance = generation.next();
			let marketing = generation.next();

			// marketing answers first, finance's late answer must not overwrite it
			assert!(outcome.settle(&generation, marketing, Ok(12)));
			assert!(!outcome.settle(&generation, finance, Ok(8)));
			assert_eq!(fetch.value.get_untracked(), Some(12));
			assert!(!fetch.loading.get_untracked());
		});
	}

	#[test]
	fn cleared_key_retires_in_flight_request() {
		let owner = Owner::new();
		owner.with(|| {
			let (fetch, outcome) = fetch_signals();
			let generation = Generation::default();
			let ticket = generation.next();

			// key went to None: the effect takes a ticket without issuing a request
			generation.next();
			assert!(!outcome.settle(&generation, ticket, Err(DataError::ProviderNotConfigured {
				provider: "KREA",
				env_key: "KREA_API_KEY",
			})));
			assert_eq!(fetch.value.get_untracked(), None);
			assert!(fetch.error.get_untracked().is_none());
			assert!(fetch.loading.get_untracked());
		});
	}
}
