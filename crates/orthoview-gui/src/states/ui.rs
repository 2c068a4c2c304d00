use orthoview_core::pipeline::LoadStage;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    /// Source of the volume being shown or loaded.
    pub source_label: Option<String>,

    /// Current load stage (None = idle, or loader released).
    pub loading: Option<LoadStage>,

    /// Log messages.
    pub log_messages: Vec<String>,

    /// Progress.
    pub progress_items_done: Option<usize>,
    pub progress_items_total: Option<usize>,

    /// Tag of the most recent load request.
    load_generation: u64,
}

impl UIState {
    pub fn is_busy(&self) -> bool {
        self.loading.is_some()
    }

    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }

    pub fn clear_progress(&mut self) {
        self.loading = None;
        self.progress_items_done = None;
        self.progress_items_total = None;
    }

    /// Tag a new load request. Results of earlier requests become stale.
    pub fn next_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.clear_progress();
        self.load_generation
    }

    pub fn is_current_load(&self, generation: u64) -> bool {
        generation == self.load_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_load_makes_older_results_stale() {
        let mut state = UIState::default();
        let first = state.next_load();
        assert!(state.is_current_load(first));

        let second = state.next_load();
        assert_ne!(first, second);
        assert!(!state.is_current_load(first));
        assert!(state.is_current_load(second));
    }

    #[test]
    fn test_next_load_resets_progress() {
        let mut state = UIState {
            progress_items_done: Some(3),
            progress_items_total: Some(9),
            ..Default::default()
        };
        state.next_load();
        assert!(!state.is_busy());
        assert_eq!(state.progress_items_total, None);
    }
}
