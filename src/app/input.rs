use super::*;

impl App {
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if self.detail.is_some() {
            self.handle_detail_key(key);
            return;
        }
        match self.mode {
            Mode::Editing => self.handle_editing_key(key),
            Mode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('o') => {
                self.close_detail()
            }
            KeyCode::Char('j') | KeyCode::Down => self.scroll_detail(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_detail(-1),
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Enter => {
                self.mode = Mode::Normal;
                if let Some(user_id) = self.selected_user().map(|user| user.id) {
                    self.request_submit(user_id);
                }
            }
            KeyCode::Backspace => self.pop_draft_char(),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_draft()
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.push_draft_char(ch)
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.move_selection(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection(-1),
            KeyCode::Char('g') | KeyCode::Home => self.selected_user = 0,
            KeyCode::Char('G') | KeyCode::End => self.select_last(),
            KeyCode::Enter | KeyCode::Char('o') => self.open_detail(),
            KeyCode::Char('i') | KeyCode::Char('e') => {
                if self.selected_user().is_some() {
                    self.mode = Mode::Editing;
                }
            }
            KeyCode::Char('s') => {
                if let Some(user_id) = self.selected_user().map(|user| user.id) {
                    self.request_submit(user_id);
                }
            }
            KeyCode::Char('r') => self.request_reload(),
            _ => {}
        }
    }
}
