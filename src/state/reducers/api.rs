//! Reducer for monitor API request state.

use serde::Serialize;
use serde_json::Value;

use crate::state::actions::{AgentRef, ApiAction};
use crate::state::mvi::{Reducer, StoreState};

/// Lifecycle of one API request slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum RequestStatus<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(Value),
}

impl<T> RequestStatus<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Value> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

/// Client-side view of the monitor API.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ApiState {
    pub ping: RequestStatus<Value>,
    pub agents: RequestStatus<Value>,
    /// Agent targeted by the latest `GET_AGENT`.
    pub selected: Option<AgentRef>,
    pub agent: RequestStatus<Value>,
}

impl StoreState for ApiState {}

/// Reducer for [`ApiState`].
///
/// Each action touches exactly one slot. Outcomes of a single-agent fetch
/// that no longer match `selected` are ignored.
pub struct ApiReducer;

impl Reducer for ApiReducer {
    type State = ApiState;
    type Action = ApiAction;

    fn reduce(state: Self::State, action: Self::Action) -> Self::State {
        match action {
            ApiAction::PingApi {} => ApiState {
                ping: RequestStatus::Loading,
                ..state
            },
            ApiAction::PingApiSuccess { response } => ApiState {
                ping: RequestStatus::Loaded(response),
                ..state
            },
            ApiAction::PingApiFailure { error } => ApiState {
                ping: RequestStatus::Failed(error),
                ..state
            },

            ApiAction::ListAgents {} => ApiState {
                agents: RequestStatus::Loading,
                ..state
            },
            ApiAction::ListAgentsSuccess { response, .. } => ApiState {
                agents: RequestStatus::Loaded(response),
                ..state
            },
            ApiAction::ListAgentsFailure { error } => ApiState {
                agents: RequestStatus::Failed(error),
                ..state
            },

            ApiAction::GetAgent(agent) => ApiState {
                selected: Some(agent),
                agent: RequestStatus::Loading,
                ..state
            },
            ApiAction::GetAgentSuccess { request, response } => {
                if state.selected.as_ref() != Some(&request) {
                    return state;
                }
                ApiState {
                    agent: RequestStatus::Loaded(response),
                    ..state
                }
            }
            ApiAction::GetAgentFailure { request, error } => {
                if state.selected.as_ref() != Some(&request) {
                    return state;
                }
                ApiState {
                    agent: RequestStatus::Failed(error),
                    ..state
                }
            }
        }
    }
}
