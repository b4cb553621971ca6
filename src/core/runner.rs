use crate::core::{Example, ExampleReport};
use crate::utils::error::{CatalogError, Result};
use crate::utils::monitor::SystemMonitor;
use std::collections::HashMap;
use std::io::Write;
use std::time::Instant;

type ExampleBody = Box<dyn Fn(&mut dyn Write) -> Result<()>>;

/// 以閉包包裝的範例，對應 `example_of(label) { ... }` 的寫法
pub struct FnExample {
    name: String,
    description: String,
    body: ExampleBody,
}

impl FnExample {
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&mut dyn Write) -> Result<()> + 'static,
    {
        Self {
            name: name.into(),
            description: String::new(),
            body: Box::new(body),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Example for FnExample {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        (self.body)(out)
    }
}

/// 範例執行器，依註冊順序逐一執行
pub struct ExampleRunner {
    examples: Vec<Box<dyn Example>>, // 使用 trait object 支持多態
    show_headers: bool,
    monitor: Option<SystemMonitor>,
    run_id: String,
}

impl std::fmt::Debug for ExampleRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExampleRunner")
            .field("examples", &self.examples.len())
            .field("show_headers", &self.show_headers)
            .field("monitor", &self.monitor.is_some())
            .field("run_id", &self.run_id)
            .finish()
    }
}

impl Default for ExampleRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ExampleRunner {
    pub fn new() -> Self {
        Self {
            examples: Vec::new(),
            show_headers: true,
            monitor: None,
            run_id: format!("run_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S")),
        }
    }

    pub fn with_headers(mut self, show_headers: bool) -> Self {
        self.show_headers = show_headers;
        self
    }

    /// 啟用或禁用系統監控
    pub fn with_monitoring(mut self, enabled: bool) -> Self {
        self.monitor = if enabled {
            Some(SystemMonitor::new(true))
        } else {
            None
        };
        self
    }

    pub fn with_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = run_id.into();
        self
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn add_example(&mut self, example: Box<dyn Example>) {
        self.examples.push(example);
    }

    pub fn names(&self) -> Vec<&str> {
        self.examples.iter().map(|e| e.name()).collect()
    }

    pub fn descriptions(&self) -> Vec<(&str, &str)> {
        self.examples
            .iter()
            .map(|e| (e.name(), e.description()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// 執行所有範例，遇到第一個失敗就停止
    pub fn run_all(&self, out: &mut dyn Write) -> Result<Vec<ExampleReport>> {
        let mut reports = Vec::with_capacity(self.examples.len());

        tracing::info!("🚀 Running {} examples ({})", self.examples.len(), self.run_id);
        if let Some(monitor) = &self.monitor {
            monitor.log_stats("Example run started.");
        }

        for example in &self.examples {
            let report = self.execute(example.as_ref(), out)?;
            reports.push(report);
        }

        if let Some(monitor) = &self.monitor {
            monitor.log_stats("Example run completed.");
        }

        Ok(reports)
    }

    /// 只執行指定名稱的範例
    pub fn run_named(&self, name: &str, out: &mut dyn Write) -> Result<ExampleReport> {
        let example = self
            .examples
            .iter()
            .find(|e| e.name() == name)
            .ok_or_else(|| CatalogError::UnknownExample {
                name: name.to_string(),
            })?;

        self.execute(example.as_ref(), out)
    }

    /// 直接執行一段範例邏輯，不需先註冊
    pub fn example_of<F>(&self, description: &str, out: &mut dyn Write, body: F) -> Result<ExampleReport>
    where
        F: Fn(&mut dyn Write) -> Result<()> + 'static,
    {
        self.execute(&FnExample::new(description, body), out)
    }

    fn execute(&self, example: &dyn Example, out: &mut dyn Write) -> Result<ExampleReport> {
        let start_time = Instant::now();
        let mut buffer: Vec<u8> = Vec::new();

        if let Err(e) = example.run(&mut buffer) {
            tracing::error!("❌ Example failed: {} ({})", example.name(), e);
            return Err(CatalogError::ExampleFailed {
                example: example.name().to_string(),
                details: e.to_string(),
            });
        }

        let duration = start_time.elapsed();
        let output = String::from_utf8_lossy(&buffer).into_owned();

        if self.show_headers {
            writeln!(out, "--- Example of: {} ---", example.name())?;
        }
        out.write_all(output.as_bytes())?;
        if self.show_headers {
            writeln!(out)?;
        }

        let report = ExampleReport {
            name: example.name().to_string(),
            output,
            duration,
        };

        tracing::debug!(
            "✅ Example executed: {} (lines: {}, duration: {:?})",
            report.name,
            report.line_count(),
            report.duration
        );

        Ok(report)
    }

    /// 獲取執行摘要
    pub fn execution_summary(&self, reports: &[ExampleReport]) -> HashMap<String, serde_json::Value> {
        let mut summary = HashMap::new();

        let total_examples = reports.len();
        let total_lines: usize = reports.iter().map(|r| r.line_count()).sum();
        let total_duration: std::time::Duration = reports.iter().map(|r| r.duration).sum();

        summary.insert("run_id".to_string(), serde_json::Value::String(self.run_id.clone()));
        summary.insert("total_examples".to_string(), serde_json::Value::Number(total_examples.into()));
        summary.insert("total_output_lines".to_string(), serde_json::Value::Number(total_lines.into()));
        summary.insert(
            "total_duration_ms".to_string(),
            serde_json::Value::Number((total_duration.as_millis() as u64).into()),
        );

        let names: Vec<serde_json::Value> = reports
            .iter()
            .map(|r| serde_json::Value::String(r.name.clone()))
            .collect();
        summary.insert("executed_examples".to_string(), serde_json::Value::Array(names));

        summary
    }
}
