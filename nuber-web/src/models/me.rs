//! Cached profile of the signed-in user.

use crate::api::NuberClient;
use shared::models::{CoreOutput, CurrentUser};
use wasm_bindgen_futures::spawn_local;
use yewdux::{Dispatch, Store};

/// Where the `me` query stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MeStatus {
    #[default]
    Loading,
    Error(String),
    Ready(CurrentUser),
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct MeState {
    pub status: MeStatus,
}

impl MeState {
    pub fn ready(user: CurrentUser) -> Self {
        Self {
            status: MeStatus::Ready(user),
        }
    }

    pub fn current_user(&self) -> Option<&CurrentUser> {
        match &self.status {
            MeStatus::Ready(user) => Some(user),
            MeStatus::Loading | MeStatus::Error(_) => None,
        }
    }

    /// Record a failed fetch. A profile that is already cached is kept.
    pub fn fail(&mut self, message: String) {
        if self.current_user().is_none() {
            self.status = MeStatus::Error(message);
        }
    }

    /// Patch the cached profile after the server confirmed the email.
    pub fn mark_verified(&mut self) {
        if let MeStatus::Ready(user) = &mut self.status {
            user.verified = true;
        }
    }

    /// Apply a `verifyEmail` result; `true` when it succeeded.
    pub fn complete_verification(&mut self, output: &CoreOutput) -> bool {
        if output.ok {
            self.mark_verified();
        }
        output.ok
    }
}

/// Whether the "verify your email" banner should be shown.
pub fn needs_verification(user: Option<&CurrentUser>) -> bool {
    !user.is_some_and(|user| user.verified)
}

/// Request the profile with `client` and store the outcome.
///
/// The answer is dropped when the client's token changed while the request
/// was in flight, so a profile never lands in a different session.
pub async fn refresh_current_user(client: &NuberClient, dispatch: &Dispatch<MeState>) {
    let requested_with = client.current_token();
    let result = client.me().await;
    if client.current_token() != requested_with {
        log::debug!("discarding profile fetched for a previous session");
        return;
    }
    match result {
        Ok(user) => {
            log::debug!("loaded profile for {} ({})", user.email, user.role);
            dispatch.set(MeState::ready(user));
        }
        Err(err) => {
            log::warn!("failed to load profile: {err}");
            dispatch.reduce_mut(|state| state.fail(err.to_string()));
        }
    }
}

/// Request the profile in the background.
pub fn fetch_current_user(dispatch: Dispatch<MeState>) {
    spawn_local(async move {
        refresh_current_user(&NuberClient::shared(), &dispatch).await;
    });
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod refresh_tests {
    use super::*;
    use yewdux::Context;

    // Nothing listens on the discard port. The host name forces a resolver
    // round trip, so the request is always still pending after its first poll.
    const UNREACHABLE: &str = "http://localhost:9/graphql";

    #[tokio::test]
    async fn transport_failure_is_recorded() {
        let cx = Context::new();
        let dispatch = Dispatch::<MeState>::new(&cx);
        let client = NuberClient::with_endpoint(UNREACHABLE);
        client.set_token(Some("jwt".to_string()));

        refresh_current_user(&client, &dispatch).await;

        assert!(matches!(dispatch.get().status, MeStatus::Error(_)));
    }

    #[tokio::test]
    async fn answer_for_previous_session_is_dropped() {
        let cx = Context::new();
        let dispatch = Dispatch::<MeState>::new(&cx);
        let client = NuberClient::with_endpoint(UNREACHABLE);
        client.set_token(Some("first-session".to_string()));

        tokio::join!(refresh_current_user(&client, &dispatch), async {
            client.set_token(Some("second-session".to_string()));
        });

        assert_eq!(dispatch.get().status, MeStatus::Loading);
    }
}
