//! Interactive terminal dashboard command.

use std::path::PathBuf;

use super::common::CommandContext;
use crate::{error::Result, tui};

pub fn handle_dashboard(data_dir: Option<PathBuf>) -> Result<()> {
    let ctx = CommandContext::new(data_dir, false)?;
    tui::run(ctx.dataset, ctx.domains)
}
