// src/progress.rs
/// Lightweight progress reporting for a run over the inventory.
/// Frontends implement this to surface status; every method defaults to a no-op.
pub trait Progress {
    /// Called once with the number of inventory rows.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Row `index` finished; `tables` is the joined field that was written.
    fn item_done(&mut self, _index: usize, _tool_id: &str, _tables: &str) {}

    /// Row `index` was read but not processed (before the resume offset).
    fn item_skipped(&mut self, _index: usize) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}

/// Progress sink that narrates through the log.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
    skipped: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        logd!("{total} inventory rows");
    }
    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }
    fn item_done(&mut self, _index: usize, _tool_id: &str, tables: &str) {
        self.done += 1;
        logf!("Fetched tables: {tables}");
    }
    fn item_skipped(&mut self, _index: usize) {
        self.skipped += 1;
    }
    fn finish(&mut self) {
        logf!("Done: {} processed, {} skipped, {} rows in inventory", self.done, self.skipped, self.total);
    }
}
