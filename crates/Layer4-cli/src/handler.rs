//! Stdio handler - one JSON request per line in, one JSON response per line out

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};
use vmagent_action::{ActionDispatcher, Request, Response};

/// Serve requests until the reader hits EOF. Returns the number of requests answered.
pub async fn serve<R, W>(dispatcher: &ActionDispatcher, reader: R, mut writer: W) -> anyhow::Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut handled = 0;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Request>(line) {
            Ok(request) => {
                debug!(
                    "Request {} ({} args, reply_to: {:?})",
                    request.method,
                    request.arguments.len(),
                    request.reply_to
                );
                dispatcher.dispatch(request).await
            }
            Err(e) => {
                warn!("Malformed request: {}", e);
                Response::exception(format!("Invalid request: {}", e))
            }
        };

        let mut out = serde_json::to_vec(&response)?;
        out.push(b'\n');
        writer.write_all(&out).await?;
        writer.flush().await?;
        handled += 1;
    }

    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use vmagent_action::ActionRegistry;
    use vmagent_foundation::UuidGenerator;
    use vmagent_task::AsyncTaskService;

    fn dispatcher() -> ActionDispatcher {
        let service = Arc::new(AsyncTaskService::new(Arc::new(UuidGenerator)));
        let registry = Arc::new(ActionRegistry::with_builtins(service.clone()));
        ActionDispatcher::new(registry, service)
    }

    async fn run(input: &str) -> (usize, Vec<Value>) {
        let mut output = Vec::new();
        let handled = serve(&dispatcher(), input.as_bytes(), &mut output)
            .await
            .unwrap();

        let responses = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (handled, responses)
    }

    #[tokio::test]
    async fn test_answers_each_line() {
        let (handled, responses) = run(
            "{\"method\":\"ping\"}\n\n{\"method\":\"get_task\",\"arguments\":[\"nope\"]}\n",
        )
        .await;

        assert_eq!(handled, 2);
        assert_eq!(responses[0], json!({"value": "pong"}));
        assert_eq!(
            responses[1],
            json!({"exception": {"message": "Task with id nope could not be found"}})
        );
    }

    #[tokio::test]
    async fn test_malformed_line_is_an_exception() {
        let (handled, responses) = run("not json\n{\"method\":\"ping\"}\n").await;

        assert_eq!(handled, 2);
        let message = responses[0]["exception"]["message"].as_str().unwrap();
        assert!(message.starts_with("Invalid request:"));
        assert_eq!(responses[1], json!({"value": "pong"}));
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let (_, responses) = run("{\"method\":\"reboot\",\"arguments\":[]}\n").await;
        assert_eq!(
            responses[0],
            json!({"exception": {"message": "unknown message reboot"}})
        );
    }
}
