//! Custom hooks shared by the pages.

use crate::api::ApiError;
use crate::config::page_title;
use crate::models::me::{MeState, fetch_current_user};
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store;

/// Progress of a query issued by a page.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Loading,
    Failed(String),
    Loaded(T),
}

/// Cached profile, requesting it once on mount when nothing is cached yet.
#[hook]
pub fn use_current_user() -> Rc<MeState> {
    let (me, dispatch) = use_store::<MeState>();
    let cached = me.current_user().is_some();
    use_effect_with((), move |_| {
        if !cached {
            fetch_current_user(dispatch);
        }
    });
    me
}

/// Set the document title to `"<page> | Nuber Eats"`.
#[hook]
pub fn use_page_title(page: &str) {
    use_effect_with(page_title(page), |title| {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            document.set_title(title);
        }
    });
}

/// Run `fetch` whenever `deps` change and expose its progress.
///
/// Responses are not cancelled when `deps` change again before they land.
#[hook]
pub fn use_fetch<D, T, F, Fut>(deps: D, fetch: F) -> UseStateHandle<Fetch<T>>
where
    D: PartialEq + Clone + 'static,
    T: 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let state = use_state(|| Fetch::Loading);
    {
        let state = state.clone();
        use_effect_with(deps, move |deps| {
            state.set(Fetch::Loading);
            let request = fetch(deps.clone());
            spawn_local(async move {
                match request.await {
                    Ok(data) => state.set(Fetch::Loaded(data)),
                    Err(err) => {
                        log::warn!("query failed: {err}");
                        state.set(Fetch::Failed(err.to_string()));
                    }
                }
            });
        });
    }
    state
}
