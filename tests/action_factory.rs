use banana_client::state::actions::{ActionType, AgentRef, ApiAction, ListAgentsRequest};
use banana_client::state::mvi::Action;
use serde_json::{json, Value};

#[test]
fn ping_api_is_exact() {
    let value = serde_json::to_value(ApiAction::ping_api()).unwrap();
    assert_eq!(value, json!({"type": "PING_API", "payload": {}}));
}

#[test]
fn ping_api_failure_carries_error() {
    let value = serde_json::to_value(ApiAction::ping_api_failure("network down")).unwrap();
    assert_eq!(
        value,
        json!({"type": "PING_API_FAILURE", "payload": {"error": "network down"}})
    );
}

#[test]
fn list_agents_is_exact() {
    let value = serde_json::to_value(ApiAction::list_agents()).unwrap();
    assert_eq!(value, json!({"type": "LIST_AGENTS", "payload": {}}));
}

#[test]
fn list_agents_success_preserves_request_and_response() {
    let response = json!([{"org": "org1", "cn": "agent1"}, {"org": "org2", "cn": "agent2"}]);
    let action = ApiAction::list_agents_success(ListAgentsRequest::default(), response.clone());

    match &action {
        ApiAction::ListAgentsSuccess {
            request,
            response: stored,
        } => {
            assert_eq!(request, &ListAgentsRequest::default());
            assert_eq!(stored, &response);
        }
        other => panic!("unexpected variant {:?}", other),
    }

    assert_eq!(
        serde_json::to_value(&action).unwrap(),
        json!({
            "type": "LIST_AGENTS_SUCCESS",
            "payload": {"request": {}, "response": response}
        })
    );
}

#[test]
fn get_agent_is_exact() {
    let value = serde_json::to_value(ApiAction::get_agent("org1", "agent1")).unwrap();
    assert_eq!(
        value,
        json!({"type": "GET_AGENT", "payload": {"org": "org1", "cn": "agent1"}})
    );
}

#[test]
fn get_agent_success_echoes_request() {
    let request = AgentRef::new("org1", "agent1");
    let action = ApiAction::get_agent_success(request, json!({"last_seen": 42}));
    assert_eq!(
        serde_json::to_value(&action).unwrap(),
        json!({
            "type": "GET_AGENT_SUCCESS",
            "payload": {
                "request": {"org": "org1", "cn": "agent1"},
                "response": {"last_seen": 42}
            }
        })
    );
}

#[test]
fn type_never_varies_with_input() {
    let inputs = [json!(null), json!(""), json!({"nested": [1, 2]}), json!(0)];
    for input in inputs {
        assert_eq!(
            ApiAction::ping_api_failure(input.clone()).kind(),
            ActionType::PingApiFailure
        );
        assert_eq!(
            ApiAction::list_agents_success(ListAgentsRequest::default(), input.clone()).kind(),
            ActionType::ListAgentsSuccess
        );
        assert_eq!(
            ApiAction::get_agent_success(AgentRef::new("", ""), input).kind(),
            ActionType::GetAgentSuccess
        );
    }
    assert_eq!(ApiAction::get_agent("", "").kind(), ActionType::GetAgent);
}

#[test]
fn absent_values_are_accepted() {
    let action = ApiAction::ping_api_failure(Value::Null);
    assert_eq!(
        serde_json::to_value(&action).unwrap(),
        json!({"type": "PING_API_FAILURE", "payload": {"error": null}})
    );

    let value = serde_json::to_value(ApiAction::get_agent("", "")).unwrap();
    assert_eq!(value["payload"], json!({"org": "", "cn": ""}));
}

#[test]
fn repeated_calls_are_equal_and_independent() {
    let first = ApiAction::get_agent_success(AgentRef::new("o", "c"), json!({"k": [1]}));
    let mut second = ApiAction::get_agent_success(AgentRef::new("o", "c"), json!({"k": [1]}));
    assert_eq!(first, second);

    if let ApiAction::GetAgentSuccess { response, .. } = &mut second {
        response["k"] = json!([2]);
    }
    assert_ne!(first, second);
    assert_eq!(
        serde_json::to_value(&first).unwrap()["payload"]["response"],
        json!({"k": [1]})
    );
}

#[test]
fn descriptors_deserialize_from_wire_shape() {
    let action: ApiAction = serde_json::from_value(json!({
        "type": "GET_AGENT",
        "payload": {"org": "enix", "cn": "web-01"}
    }))
    .unwrap();
    assert_eq!(action, ApiAction::get_agent("enix", "web-01"));

    let action: ApiAction = serde_json::from_value(json!({
        "type": "PING_API_FAILURE",
        "payload": {}
    }))
    .unwrap();
    assert_eq!(action, ApiAction::ping_api_failure(Value::Null));
}

#[test]
fn unknown_type_fails_to_deserialize() {
    let result: Result<ApiAction, _> = serde_json::from_value(json!({
        "type": "DELETE_AGENT",
        "payload": {}
    }));
    assert!(result.is_err());
}
