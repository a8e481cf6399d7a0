use anyhow::Context;
use l2_catalog::ProjectStore;
use l2_config::L2Config;
use l2_render::RenderContext;

use crate::cli::GlobalFlags;

/// Everything a catalog command needs, loaded once per invocation.
#[derive(Debug)]
pub struct AppContext {
    pub store: ProjectStore,
    pub render: RenderContext,
}

impl AppContext {
    pub fn init(config: L2Config) -> anyhow::Result<Self> {
        let store =
            ProjectStore::from_config(&config.catalog).context("failed to build project catalog")?;
        tracing::debug!(projects = store.len(), "catalog ready");

        Ok(Self {
            render: RenderContext::from_config(&config),
            store,
        })
    }
}

pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<L2Config> {
    match &flags.config {
        Some(path) => L2Config::load_with_file(path)
            .with_context(|| format!("failed to load config file {}", path.display())),
        None => L2Config::load_with_dotenv().context("failed to load l2s configuration"),
    }
}
