//! Effect layer: brackets each API call with request and outcome actions.

use serde_json::Value;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::state::actions::{AgentRef, ApiAction, ListAgentsRequest};
use crate::state::Dispatch;

/// Runs monitor API operations and reports them to a dispatch sink.
///
/// Every operation dispatches its request action first, then exactly one
/// success or failure action. The outcome is also returned to the caller.
pub struct ApiEffects<D> {
    client: ApiClient,
    sink: D,
}

impl<D: Dispatch<ApiAction>> ApiEffects<D> {
    pub fn new(client: ApiClient, sink: D) -> Self {
        Self { client, sink }
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub async fn ping(&self) -> Result<Value, ApiError> {
        self.sink.dispatch(ApiAction::ping_api());
        match self.client.ping().await {
            Ok(response) => {
                tracing::info!("Monitor API is reachable");
                self.sink.dispatch(ApiAction::ping_api_success(response.clone()));
                Ok(response)
            }
            Err(err) => {
                tracing::warn!("Ping failed: {}", err);
                self.sink.dispatch(ApiAction::ping_api_failure(&err));
                Err(err)
            }
        }
    }

    pub async fn list_agents(&self) -> Result<Value, ApiError> {
        self.sink.dispatch(ApiAction::list_agents());
        match self.client.list_agents().await {
            Ok(response) => {
                tracing::info!(count = response.as_array().map(Vec::len), "Listed agents");
                self.sink.dispatch(ApiAction::list_agents_success(
                    ListAgentsRequest::default(),
                    response.clone(),
                ));
                Ok(response)
            }
            Err(err) => {
                tracing::warn!("Listing agents failed: {}", err);
                self.sink.dispatch(ApiAction::list_agents_failure(&err));
                Err(err)
            }
        }
    }

    pub async fn get_agent(&self, org: &str, cn: &str) -> Result<Value, ApiError> {
        let request = AgentRef::new(org, cn);
        self.sink.dispatch(ApiAction::GetAgent(request.clone()));
        match self.client.get_agent(&request).await {
            Ok(response) => {
                tracing::info!(agent = %request, "Fetched agent");
                self.sink
                    .dispatch(ApiAction::get_agent_success(request, response.clone()));
                Ok(response)
            }
            Err(err) => {
                tracing::warn!(agent = %request, "Fetching agent failed: {}", err);
                self.sink.dispatch(ApiAction::get_agent_failure(request, &err));
                Err(err)
            }
        }
    }
}
