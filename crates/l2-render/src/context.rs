use l2_config::{FormatConfig, L2Config, RenderConfig};

/// Formatting policy and labels shared by every component in one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub format: FormatConfig,
    pub labels: RenderConfig,
}

impl RenderContext {
    #[must_use]
    pub fn from_config(config: &L2Config) -> Self {
        Self {
            format: config.format.clone(),
            labels: config.render.clone(),
        }
    }
}
