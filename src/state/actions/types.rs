//! Registry of action type identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a wire string does not name a known action type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown action type '{0}'")]
pub struct UnknownActionType(pub String);

/// Closed set of action type tags.
///
/// Serialized as the SCREAMING_SNAKE_CASE identifier used on the wire
/// (`PING_API`, `LIST_AGENTS_SUCCESS`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    PingApi,
    PingApiSuccess,
    PingApiFailure,
    ListAgents,
    ListAgentsSuccess,
    ListAgentsFailure,
    GetAgent,
    GetAgentSuccess,
    GetAgentFailure,
}

impl ActionType {
    /// Every identifier, each exactly once.
    pub const ALL: [ActionType; 9] = [
        ActionType::PingApi,
        ActionType::PingApiSuccess,
        ActionType::PingApiFailure,
        ActionType::ListAgents,
        ActionType::ListAgentsSuccess,
        ActionType::ListAgentsFailure,
        ActionType::GetAgent,
        ActionType::GetAgentSuccess,
        ActionType::GetAgentFailure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionType::PingApi => "PING_API",
            ActionType::PingApiSuccess => "PING_API_SUCCESS",
            ActionType::PingApiFailure => "PING_API_FAILURE",
            ActionType::ListAgents => "LIST_AGENTS",
            ActionType::ListAgentsSuccess => "LIST_AGENTS_SUCCESS",
            ActionType::ListAgentsFailure => "LIST_AGENTS_FAILURE",
            ActionType::GetAgent => "GET_AGENT",
            ActionType::GetAgentSuccess => "GET_AGENT_SUCCESS",
            ActionType::GetAgentFailure => "GET_AGENT_FAILURE",
        }
    }

    /// True for actions that start an operation rather than report its outcome.
    pub fn is_request(self) -> bool {
        matches!(
            self,
            ActionType::PingApi | ActionType::ListAgents | ActionType::GetAgent
        )
    }

    pub fn is_failure(self) -> bool {
        matches!(
            self,
            ActionType::PingApiFailure
                | ActionType::ListAgentsFailure
                | ActionType::GetAgentFailure
        )
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = UnknownActionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownActionType(s.to_string()))
    }
}
