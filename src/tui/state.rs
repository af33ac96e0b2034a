use crate::store::TaskStore;
use ratatui::widgets::ListState;

pub const HELP: &str = "a: Add | Space: Toggle | t: Theme | q: Quit";

#[derive(PartialEq, Clone, Copy)]
pub enum InputMode {
    Normal,
    Creating,
}

pub struct AppState {
    pub store: TaskStore,
    pub list_state: ListState,
    pub message: String,
    pub mode: InputMode,
    pub input_buffer: String,
    pub cursor_position: usize,
    /// Light/dark flag for this session only. Always starts light.
    pub dark_mode: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(store: TaskStore) -> Self {
        let mut l_state = ListState::default();
        l_state.select(Some(0));
        Self {
            store,
            list_state: l_state,
            message: HELP.to_string(),
            mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            dark_mode: false,
            should_quit: false,
        }
    }

    pub fn move_cursor_left(&mut self) {
        let cursor_moved_left = self.cursor_position.saturating_sub(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_left);
    }
    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor_position.saturating_add(1);
        self.cursor_position = self.clamp_cursor(cursor_moved_right);
    }
    pub fn enter_char(&mut self, new_char: char) {
        let byte_index = self
            .input_buffer
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor_position)
            .unwrap_or(self.input_buffer.len());
        self.input_buffer.insert(byte_index, new_char);
        self.move_cursor_right();
    }
    pub fn delete_char(&mut self) {
        if self.cursor_position != 0 {
            let current_index = self.cursor_position;
            let from_left_to_current_index = current_index - 1;
            let before_char_to_delete = self.input_buffer.chars().take(from_left_to_current_index);
            let after_char_to_delete = self.input_buffer.chars().skip(current_index);
            self.input_buffer = before_char_to_delete.chain(after_char_to_delete).collect();
            self.move_cursor_left();
        }
    }
    pub fn reset_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        new_cursor_pos.clamp(0, self.input_buffer.chars().count())
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Id of the task under the cursor, if any.
    pub fn selected_task_id(&self) -> Option<u64> {
        let idx = self.list_state.selected()?;
        self.store.tasks().get(idx).map(|t| t.id)
    }

    pub fn select_last(&mut self) {
        if !self.store.is_empty() {
            self.list_state.select(Some(self.store.len() - 1));
        }
    }

    pub fn next(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn jump_forward(&mut self, step: usize) {
        if self.store.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        // Clamp to the last item (don't wrap around like next())
        let new_index = (current + step).min(self.store.len() - 1);
        self.list_state.select(Some(new_index));
    }

    pub fn jump_backward(&mut self, step: usize) {
        if self.store.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        // Clamp to 0 (don't wrap around)
        let new_index = current.saturating_sub(step);
        self.list_state.select(Some(new_index));
    }
}
