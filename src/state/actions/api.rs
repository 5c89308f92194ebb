//! Action descriptors for the monitor API operations.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::mvi::Action;

use super::types::ActionType;

/// Everything but RFC 3986 unreserved characters is escaped, `:` and `%` included.
const ID_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Identifies one agent by organization and common name.
///
/// Neither field is validated here; empty strings are carried as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentRef {
    pub org: String,
    pub cn: String,
}

impl AgentRef {
    pub fn new(org: impl Into<String>, cn: impl Into<String>) -> Self {
        Self {
            org: org.into(),
            cn: cn.into(),
        }
    }

    /// Agent id as used by the monitor API (`org:cn`).
    ///
    /// Each half is percent-encoded on its own, so a `:` inside `org` or `cn`
    /// never moves the separator and distinct agents get distinct ids.
    pub fn id(&self) -> String {
        format!(
            "{}:{}",
            utf8_percent_encode(&self.org, ID_COMPONENT),
            utf8_percent_encode(&self.cn, ID_COMPONENT)
        )
    }
}

impl fmt::Display for AgentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// Arguments of a list-agents call. The listing takes none, so this
/// serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAgentsRequest {}

/// Action descriptor for a monitor API operation or its outcome.
///
/// On the wire every descriptor is exactly `{ "type": ..., "payload": {...} }`.
/// Request variants use empty braces so the payload is `{}` rather than absent.
/// Opaque values (`error`, `response`) default to `null` when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiAction {
    PingApi {},
    PingApiSuccess {
        #[serde(default)]
        response: Value,
    },
    PingApiFailure {
        #[serde(default)]
        error: Value,
    },
    ListAgents {},
    ListAgentsSuccess {
        #[serde(default)]
        request: ListAgentsRequest,
        #[serde(default)]
        response: Value,
    },
    ListAgentsFailure {
        #[serde(default)]
        error: Value,
    },
    GetAgent(AgentRef),
    GetAgentSuccess {
        request: AgentRef,
        #[serde(default)]
        response: Value,
    },
    GetAgentFailure {
        request: AgentRef,
        #[serde(default)]
        error: Value,
    },
}

impl ApiAction {
    /// Start a health check.
    pub fn ping_api() -> Self {
        ApiAction::PingApi {}
    }

    pub fn ping_api_success(response: impl Into<Value>) -> Self {
        ApiAction::PingApiSuccess {
            response: response.into(),
        }
    }

    pub fn ping_api_failure(error: impl Into<Value>) -> Self {
        ApiAction::PingApiFailure {
            error: error.into(),
        }
    }

    /// Start listing agents.
    pub fn list_agents() -> Self {
        ApiAction::ListAgents {}
    }

    pub fn list_agents_success(request: ListAgentsRequest, response: impl Into<Value>) -> Self {
        ApiAction::ListAgentsSuccess {
            request,
            response: response.into(),
        }
    }

    pub fn list_agents_failure(error: impl Into<Value>) -> Self {
        ApiAction::ListAgentsFailure {
            error: error.into(),
        }
    }

    /// Start fetching a single agent.
    pub fn get_agent(org: impl Into<String>, cn: impl Into<String>) -> Self {
        ApiAction::GetAgent(AgentRef::new(org, cn))
    }

    pub fn get_agent_success(request: AgentRef, response: impl Into<Value>) -> Self {
        ApiAction::GetAgentSuccess {
            request,
            response: response.into(),
        }
    }

    pub fn get_agent_failure(request: AgentRef, error: impl Into<Value>) -> Self {
        ApiAction::GetAgentFailure {
            request,
            error: error.into(),
        }
    }

    /// The error carried by a failure descriptor.
    pub fn error(&self) -> Option<&Value> {
        match self {
            ApiAction::PingApiFailure { error }
            | ApiAction::ListAgentsFailure { error }
            | ApiAction::GetAgentFailure { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl Action for ApiAction {
    type Kind = ActionType;

    fn kind(&self) -> ActionType {
        match self {
            ApiAction::PingApi {} => ActionType::PingApi,
            ApiAction::PingApiSuccess { .. } => ActionType::PingApiSuccess,
            ApiAction::PingApiFailure { .. } => ActionType::PingApiFailure,
            ApiAction::ListAgents {} => ActionType::ListAgents,
            ApiAction::ListAgentsSuccess { .. } => ActionType::ListAgentsSuccess,
            ApiAction::ListAgentsFailure { .. } => ActionType::ListAgentsFailure,
            ApiAction::GetAgent(_) => ActionType::GetAgent,
            ApiAction::GetAgentSuccess { .. } => ActionType::GetAgentSuccess,
            ApiAction::GetAgentFailure { .. } => ActionType::GetAgentFailure,
        }
    }
}
