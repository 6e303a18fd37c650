pub mod bandwidth_graphs;
pub mod export;

use anyhow::Result;
use std::path::Path;

pub trait GraphRenderer {
    fn render(&self, output_path: &Path) -> Result<()>;
}

/// Chart geometry and per-run rendering options shared by every interface
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub width: u32,
    pub height: u32,
    /// Window of the EMA trend line drawn over the inbound series
    pub ema_window: usize,
    pub y_scale: YScale,
}

/// Y-axis scale selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YScale {
    /// Linear axis pinned to a zero floor
    #[default]
    Linear,
    /// Logarithmic axis; zero-valued samples are clipped by the axis rather
    /// than rejected
    Logarithmic,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            ema_window: 60,
            y_scale: YScale::default(),
        }
    }
}
