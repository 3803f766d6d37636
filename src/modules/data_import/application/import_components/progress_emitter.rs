/// Progress checkpoints reported to the caller during one run
pub const PROGRESS_RUN_CREATED: u8 = 10;
pub const PROGRESS_FILE_ARCHIVED: u8 = 30;
pub const PROGRESS_PARSED: u8 = 40;
pub const PROGRESS_DONE: u8 = 100;

/// Progress after `completed` of `total` candidates; the persisting phase
/// spans 40..=100
pub fn persisting_progress(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return PROGRESS_PARSED;
    }
    let span = usize::from(PROGRESS_DONE - PROGRESS_PARSED);
    let step = completed.min(total) * span / total;
    PROGRESS_PARSED + step as u8
}

/// Forwards progress to the caller's callback, clamped to 0..=100 and never
/// lower than the last value emitted
pub struct ProgressEmitter<F>
where
    F: FnMut(u8),
{
    callback: F,
    last: Option<u8>,
}

impl<F> ProgressEmitter<F>
where
    F: FnMut(u8),
{
    pub fn new(callback: F) -> Self {
        Self {
            callback,
            last: None,
        }
    }

    pub fn emit(&mut self, value: u8) {
        let value = value.min(PROGRESS_DONE);
        let value = self.last.map_or(value, |last| last.max(value));
        self.last = Some(value);
        (self.callback)(value);
    }

    pub fn last(&self) -> Option<u8> {
        self.last
    }
}
