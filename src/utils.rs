//! File system helpers.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, instrument};

const PROBE_FILE_NAME: &str = "..__naver_news_probe_write__";

/// Create `path` if needed and confirm a file can be written into it.
///
/// Runs before the fetch so an unwritable destination fails fast.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn ensure_writable_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)?;
    let probe = path.join(PROBE_FILE_NAME);
    fs::File::create(&probe)?;
    let _ = fs::remove_file(&probe);
    debug!("Output directory is writable");
    Ok(())
}
