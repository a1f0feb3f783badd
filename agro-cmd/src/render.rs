//! `render` command: one-shot and watch mode.

use crate::export;
use agro_charts::Page;
use agro_db::{DatasetCache, Database};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Load `input`, assemble the page and write it to `output`.
pub fn run_render(input: &Path, output: &Path, plotly_url: &str) -> anyhow::Result<()> {
    let db = Database::from_path(input)?;
    export::write_page(&Page::assemble(&db), output, plotly_url)
}

/// Re-renders the page whenever the input file changes on disk.
pub struct Watcher {
    input: PathBuf,
    output: PathBuf,
    plotly_url: String,
    cache: DatasetCache,
}

impl Watcher {
    pub fn new(input: &Path, output: &Path, plotly_url: &str) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            plotly_url: plotly_url.to_string(),
            cache: DatasetCache::new(),
        }
    }

    /// Check the input once. Returns true when the page was written.
    pub fn poll(&mut self) -> anyhow::Result<bool> {
        let lookup = self.cache.load(&self.input)?;
        if !lookup.reloaded {
            return Ok(false);
        }
        export::write_page(&Page::assemble(&lookup.db), &self.output, &self.plotly_url)?;
        Ok(true)
    }
}

/// Render, then keep polling every `interval` seconds. The first render must
/// succeed; later failures are logged and retried on the next tick.
pub fn run_watch(
    input: &Path,
    output: &Path,
    plotly_url: &str,
    interval: u64,
) -> anyhow::Result<()> {
    let mut watcher = Watcher::new(input, output, plotly_url);
    watcher.poll()?;
    log::info!(
        "render: watching {} every {}s",
        input.display(),
        interval.max(1)
    );
    loop {
        thread::sleep(Duration::from_secs(interval.max(1)));
        match watcher.poll() {
            Ok(true) => log::info!("render: {} updated", output.display()),
            Ok(false) => {}
            Err(e) => log::error!("render: {:#}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::time::SystemTime;

    const CSV: &str = "\
Area,Year,Forestland,Net Forest conversion
Chad,2000,10,-1
";

    #[test]
    fn run_render_writes_html() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("emissions.csv");
        let output = dir.path().join("out.html");
        fs::write(&input, CSV).unwrap();

        run_render(&input, &output, export::DEFAULT_PLOTLY_URL).unwrap();
        assert!(fs::read_to_string(&output).unwrap().contains("Forest Flux"));
    }

    #[test]
    fn run_render_fails_on_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_render(
            &dir.path().join("absent.csv"),
            &dir.path().join("out.html"),
            export::DEFAULT_PLOTLY_URL,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("absent.csv"));
    }

    #[test]
    fn watcher_renders_only_on_change() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("emissions.csv");
        let output = dir.path().join("out.html");
        fs::write(&input, CSV).unwrap();

        let mut watcher = Watcher::new(&input, &output, export::DEFAULT_PLOTLY_URL);
        assert!(watcher.poll().unwrap());
        assert!(!watcher.poll().unwrap());

        fs::write(&input, format!("{CSV}Mali,2000,5,3\n")).unwrap();
        File::options()
            .write(true)
            .open(&input)
            .unwrap()
            .set_modified(SystemTime::now() + Duration::from_secs(10))
            .unwrap();
        assert!(watcher.poll().unwrap());
        assert!(fs::read_to_string(&output).unwrap().contains("Mali"));
    }
}
