use tokio::sync::watch;

/// Search box control
///
/// Every `patch_value` is a change, even when the text is the same.
pub struct SearchText {
    sender: watch::Sender<String>,
}

impl Default for SearchText {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchText {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(String::new());
        Self { sender }
    }

    pub fn patch_value(&self, value: impl Into<String>) {
        self.sender.send_replace(value.into());
    }

    pub fn value(&self) -> String {
        self.sender.borrow().clone()
    }

    /// Receiver of later changes; the current value counts as seen
    pub fn value_changes(&self) -> watch::Receiver<String> {
        self.sender.subscribe()
    }
}
