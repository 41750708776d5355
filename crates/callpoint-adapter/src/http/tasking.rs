/*
[INPUT]:  Task-creation requests and callback identifiers
[OUTPUT]: Creation envelopes and authoritative task listings
[POS]:    HTTP layer - tasking endpoints
[UPDATE]: When the tasking contract or task schema changes
*/

use crate::http::{CallpointClient, Result};
use crate::types::{CreateTaskRequest, CreateTaskResponse, Task};
use reqwest::Method;

impl CallpointClient {
    /// Create a task against a callback
    ///
    /// POST /api/callbacks/{callback_id}/tasks
    ///
    /// A rejected task still arrives as a 2xx envelope with `status: error`;
    /// only transport and server faults surface as `Err`.
    pub async fn create_task(
        &self,
        callback_id: i64,
        request: CreateTaskRequest,
    ) -> Result<CreateTaskResponse> {
        let endpoint = format!("/api/callbacks/{}/tasks", callback_id);
        let builder = self.api_request(Method::POST, &endpoint)?.json(&request);
        self.send_json(builder).await
    }

    /// Fetch the authoritative task list for a callback
    ///
    /// GET /api/callbacks/{callback_id}/tasks
    ///
    /// The server returns top-level tasks only (no parent task id), ordered
    /// ascending by id; the listing is passed through in server order.
    pub async fn get_tasking(&self, callback_id: i64) -> Result<Vec<Task>> {
        let endpoint = format!("/api/callbacks/{}/tasks", callback_id);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{CallpointClient, ClientConfig};
    use crate::types::{CreateStatus, CreateTaskRequest};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> CallpointClient {
        CallpointClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init")
    }

    #[tokio::test]
    async fn test_create_task_success() {
        let server = MockServer::start().await;
        let request = CreateTaskRequest {
            command: "shell".to_string(),
            params: "whoami".to_string(),
            files: None,
        };

        let _mock = Mock::given(method("POST"))
            .and(path("/api/callbacks/3/tasks"))
            .and(body_json(serde_json::json!({
                "command": "shell",
                "params": "whoami",
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(r#"{"status": "success", "id": 55}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .create_task(3, request)
            .await
            .expect("create_task failed");

        assert_eq!(response.status, CreateStatus::Success);
        assert_eq!(response.id, Some(55));
        assert_eq!(response.error, None);
    }

    #[tokio::test]
    async fn test_create_task_rejection_envelope() {
        let server = MockServer::start().await;
        let request = CreateTaskRequest {
            command: "rm".to_string(),
            params: "-rf /".to_string(),
            files: None,
        };

        let _mock = Mock::given(method("POST"))
            .and(path("/api/callbacks/3/tasks"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(
                        r#"{"status": "error", "error": "permission denied"}"#,
                        "application/json",
                    ),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .create_task(3, request)
            .await
            .expect("create_task failed");

        assert_eq!(response.status, CreateStatus::Error);
        assert_eq!(response.id, None);
        assert_eq!(response.error, Some("permission denied".to_string()));
    }

    #[tokio::test]
    async fn test_create_task_serializes_files_payload() {
        let server = MockServer::start().await;
        let request = CreateTaskRequest {
            command: "upload".to_string(),
            params: r#"{"7": "payload.bin"}"#.to_string(),
            files: Some("QmFzZTY0IGJsb2I=".to_string()),
        };

        let _mock = Mock::given(method("POST"))
            .and(path("/api/callbacks/3/tasks"))
            .and(body_json(serde_json::json!({
                "command": "upload",
                "params": r#"{"7": "payload.bin"}"#,
                "files": "QmFzZTY0IGJsb2I=",
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(r#"{"status": "success", "id": 56}"#, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .create_task(3, request)
            .await
            .expect("create_task failed");

        assert_eq!(response.id, Some(56));
    }

    #[tokio::test]
    async fn test_get_tasking_preserves_server_order() {
        let server = MockServer::start().await;
        let mock_response = r#"[
            {
                "id": 5,
                "callbackId": 3,
                "command": {"cmd": "shell", "id": 41},
                "originalParams": "whoami",
                "displayParams": "whoami",
                "comment": "",
                "operatorName": "red1",
                "status": "completed",
                "completed": true,
                "timestamp": "2026-07-30T10:15:00Z",
                "responses": [{"id": 3}, {"id": 1}],
                "opsecPreBlocked": false,
                "opsecPreBypassed": false,
                "opsecPostBlocked": false,
                "opsecPostBypassed": false
            },
            {
                "id": 2,
                "callbackId": 3,
                "command": {"cmd": "ls", "id": 44},
                "originalParams": "",
                "displayParams": "",
                "comment": "initial recon",
                "commentOperatorName": "red2",
                "operatorName": "red1",
                "status": "submitted",
                "completed": false,
                "timestamp": "2026-07-30T10:14:00Z",
                "responses": [],
                "opsecPreBlocked": true,
                "opsecPreBypassed": true,
                "opsecPostBlocked": false,
                "opsecPostBypassed": false
            }
        ]"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/callbacks/3/tasks"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let tasks = client_for(&server)
            .get_tasking(3)
            .await
            .expect("get_tasking failed");

        // Server order is passed through verbatim even when it violates the
        // ascending-by-id contract.
        let ids: Vec<i64> = tasks.iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![5, 2]);
        assert_eq!(tasks[1].comment_operator_name, Some("red2".to_string()));
        assert!(tasks.iter().all(|task| task.is_top_level()));
    }
}
