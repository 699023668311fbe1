use anyhow::Result;

use gnv_core::GnvConfig;

pub struct ListHandler;

impl ListHandler {
    pub fn handle_list(config: &GnvConfig) -> Result<()> {
        gnv_core::list_deps(config)
    }
}
