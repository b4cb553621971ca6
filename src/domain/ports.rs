use crate::utils::error::Result;
use std::io::Write;

/// 可由 runner 執行的範例
pub trait Example {
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// 把範例輸出寫入 `out`
    fn run(&self, out: &mut dyn Write) -> Result<()>;
}

pub trait ConfigProvider {
    /// 只執行這些範例；空代表全部
    fn selected_examples(&self) -> &[String];
    fn skipped_examples(&self) -> &[String];
    fn random_seed(&self) -> Option<u64>;
    fn show_headers(&self) -> bool;
    fn monitoring_enabled(&self) -> bool;
}
