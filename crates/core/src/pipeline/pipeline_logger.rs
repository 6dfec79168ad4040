use std::time::Instant;

/// Cross-cutting logger for pipeline events.
///
/// Decouples the use case from where its diagnostics go (log crate,
/// test assertions) so callers can observe each stage without changing
/// the orchestration code.
pub trait PipelineLogger: Send {
    /// Record how long a named stage took.
    fn timing(&mut self, stage: &str, duration_ms: f64);

    /// Record a point-in-time metric (e.g. decoded bytes, face count).
    fn metric(&mut self, name: &str, value: f64);

    /// Log a human-readable status message.
    fn info(&mut self, message: &str);

    /// Emit an end-of-request summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent logger that discards all events.
pub struct NullPipelineLogger;

impl PipelineLogger for NullPipelineLogger {
    fn timing(&mut self, _stage: &str, _duration_ms: f64) {}
    fn metric(&mut self, _name: &str, _value: f64) {}
    fn info(&mut self, _message: &str) {}
}

/// Request-scoped logger writing through the `log` facade.
///
/// Messages are logged as they arrive; timings and metrics are kept in
/// arrival order and reported together by [`PipelineLogger::summary`].
pub struct RequestLogger {
    timings: Vec<(String, f64)>,
    metrics: Vec<(String, f64)>,
    messages: Vec<String>,
    start_time: Instant,
}

impl RequestLogger {
    pub fn new() -> Self {
        Self {
            timings: Vec::new(),
            metrics: Vec::new(),
            messages: Vec::new(),
            start_time: Instant::now(),
        }
    }

    /// Returns the formatted summary string, or `None` if no data recorded.
    pub fn summary_string(&self) -> Option<String> {
        if self.timings.is_empty() && self.metrics.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!("Request summary ({elapsed_ms:.1}ms total):")];
        for (stage, ms) in &self.timings {
            lines.push(format!("  {stage:10}: {ms:8.1}ms"));
        }
        for (name, value) in &self.metrics {
            lines.push(format!("  {name}: {value}"));
        }
        Some(lines.join("\n"))
    }

    pub fn timing_for(&self, stage: &str) -> Option<f64> {
        self.timings
            .iter()
            .find(|(s, _)| s == stage)
            .map(|(_, ms)| *ms)
    }

    pub fn metric_for(&self, name: &str) -> Option<f64> {
        self.metrics
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Default for RequestLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineLogger for RequestLogger {
    fn timing(&mut self, stage: &str, duration_ms: f64) {
        log::debug!("{stage} took {duration_ms:.1}ms");
        self.timings.push((stage.to_string(), duration_ms));
    }

    fn metric(&mut self, name: &str, value: f64) {
        self.metrics.push((name.to_string(), value));
    }

    fn info(&mut self, message: &str) {
        log::info!("{message}");
        self.messages.push(message.to_string());
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("{text}");
        }
    }
}
