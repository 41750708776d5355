/*
[INPUT]:  Callback identifiers
[OUTPUT]: Loaded command rows with parameter schemas
[POS]:    HTTP layer - command catalog endpoint
[UPDATE]: When the loaded-commands listing or its schema changes
*/

use crate::http::{CallpointClient, Result};
use crate::types::LoadedCommand;
use reqwest::Method;

impl CallpointClient {
    /// List the commands currently loaded on a callback
    ///
    /// GET /api/callbacks/{callback_id}/commands
    pub async fn load_commands(&self, callback_id: i64) -> Result<Vec<LoadedCommand>> {
        let endpoint = format!("/api/callbacks/{}/commands", callback_id);
        let builder = self.api_request(Method::GET, &endpoint)?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{CallpointClient, ClientConfig};
    use crate::types::{CommandDef, CommandParameter, LoadedCommand, ParameterType};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_load_commands() {
        let server = MockServer::start().await;
        let mock_response = r#"[
            {
                "id": 101,
                "command": {
                    "id": 41,
                    "cmd": "shell",
                    "helpCmd": "shell {command}",
                    "description": "Run a shell command",
                    "needsAdmin": false,
                    "payloadTypeId": 2,
                    "commandparameters": []
                }
            },
            {
                "id": 102,
                "command": {
                    "id": 42,
                    "cmd": "upload",
                    "helpCmd": "upload",
                    "description": "Upload a file to the remote host",
                    "needsAdmin": false,
                    "payloadTypeId": 2,
                    "commandparameters": [
                        {"id": 7, "type": "File"},
                        {"id": 8, "type": "String"}
                    ]
                }
            }
        ]"#;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/callbacks/3/commands"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_raw(mock_response, "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = CallpointClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");

        let response = client.load_commands(3).await.expect("load_commands failed");

        let expected = vec![
            LoadedCommand {
                id: 101,
                command: CommandDef {
                    id: 41,
                    cmd: "shell".to_string(),
                    help_cmd: "shell {command}".to_string(),
                    description: "Run a shell command".to_string(),
                    needs_admin: false,
                    payload_type_id: 2,
                    parameters: vec![],
                },
            },
            LoadedCommand {
                id: 102,
                command: CommandDef {
                    id: 42,
                    cmd: "upload".to_string(),
                    help_cmd: "upload".to_string(),
                    description: "Upload a file to the remote host".to_string(),
                    needs_admin: false,
                    payload_type_id: 2,
                    parameters: vec![
                        CommandParameter {
                            id: 7,
                            parameter_type: ParameterType::File,
                        },
                        CommandParameter {
                            id: 8,
                            parameter_type: ParameterType::String,
                        },
                    ],
                },
            },
        ];

        assert_eq!(response, expected);
    }

    #[tokio::test]
    async fn test_load_commands_server_error() {
        let server = MockServer::start().await;

        let _mock = Mock::given(method("GET"))
            .and(path("/api/callbacks/3/commands"))
            .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
            .expect(1)
            .mount(&server)
            .await;

        let client = CallpointClient::with_config_and_base_url(ClientConfig::default(), &server.uri())
            .expect("client init");

        let err = client.load_commands(3).await.expect_err("expected API error");
        match err {
            crate::http::CallpointError::Api { code, message } => {
                assert_eq!(code, 500);
                assert_eq!(message, "database unavailable");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
