//! Concurrent rendering of independent templates.
//!
//! Rendering is synchronous and CPU-bound, so each job runs on tokio's
//! blocking pool. A semaphore sized from
//! [`RenderConfig::max_concurrency`] bounds how many run at once.

use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::config::RenderConfig;
use crate::dom::props::Props;
use crate::render::driver::{error_fragment, Renderer, TemplateError, TemplateSource};

/// One template and the properties to render it with.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub source: TemplateSource,
    pub props: Props,
}

impl RenderJob {
    pub fn new(source: impl Into<TemplateSource>, props: Props) -> Self {
        Self {
            source: source.into(),
            props,
        }
    }
}

/// Render every job and return the HTML in input order.
///
/// Each job is fail-soft: a failing template yields its error fragment and
/// the others are unaffected.
pub async fn render_batch(jobs: Vec<RenderJob>, config: &RenderConfig) -> Vec<String> {
    let renderer = Arc::new(Renderer::new(config.clone()));
    let semaphore = Arc::new(Semaphore::new(config.max_concurrency.max(1)));
    tracing::debug!(jobs = jobs.len(), limit = config.max_concurrency, "starting render batch");

    let mut handles = Vec::with_capacity(jobs.len());
    for job in jobs {
        // The semaphore is never closed, so acquiring only waits.
        let permit = Arc::clone(&semaphore).acquire_owned().await.ok();
        let renderer = Arc::clone(&renderer);
        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            renderer.render(&job.source, &job.props)
        }));
    }

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let html = match handle.await {
            Ok(html) => html,
            Err(err) => {
                tracing::error!(error = %err, "render task failed");
                error_fragment(&TemplateError::Panicked(err.to_string()))
            }
        };
        results.push(html);
    }
    results
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::node::Node;
    use crate::dom::value::Value;
    use crate::render::driver::{BoxError, Template};
    use crate::widgets::Text;

    fn echo() -> Template {
        Template::new(|props: &Props| {
            let label = props.get("label").and_then(Value::as_str).unwrap_or_default().to_owned();
            Ok(Node::from(Text::new()).with_child(label))
        })
    }

    #[tokio::test]
    async fn results_keep_input_order() {
        let jobs: Vec<_> = (0..10)
            .map(|i| RenderJob::new(echo(), Props::new().with("label", format!("job-{i}"))))
            .collect();
        let config = RenderConfig::new().with_max_concurrency(3);
        let results = render_batch(jobs, &config).await;
        assert_eq!(results.len(), 10);
        for (i, html) in results.iter().enumerate() {
            assert!(html.ends_with(&format!(">job-{i}</p>")), "{html}");
        }
    }

    #[tokio::test]
    async fn one_failure_does_not_spoil_the_batch() {
        let failing = Template::without_props(|| -> Result<Node, BoxError> { Err("nope".into()) });
        let jobs = vec![
            RenderJob::new(echo(), Props::new().with("label", "a")),
            RenderJob::new(failing, Props::new()),
            RenderJob::new(TemplateSource::Missing, Props::new()),
            RenderJob::new(echo(), Props::new().with("label", "b")),
        ];
        let results = render_batch(jobs, &RenderConfig::default()).await;
        assert!(results[0].ends_with(">a</p>"));
        assert!(results[1].contains("Error Rendering Template"));
        assert!(results[2].contains("invalid template"));
        assert!(results[3].ends_with(">b</p>"));
    }

    #[test]
    fn empty_batch() {
        let results = tokio_test::block_on(render_batch(Vec::new(), &RenderConfig::default()));
        assert!(results.is_empty());
    }
}
