use crate::todo::ids::{IdCounter, IdSource};
use crate::todo::models::{Collection, Item};
use crate::tui::edit::EditState;
use crate::tui::handlers::{EditModeAction, HelpModeAction, KeyHandler, NormalModeAction};
use crate::undo::{Dispatcher, Intent, Strategy};
use anyhow::Result;
use crossterm::event::KeyEvent;

/// Turns key presses into intents and keeps the last collection the
/// dispatcher returned for drawing.
pub struct App {
    pub dispatcher: Dispatcher,
    pub collection: Collection,
    pub selected_index: usize,
    pub should_quit: bool,
    pub help_mode: bool,
    pub edit: EditState,
    pub status: Option<String>,
    ids: Box<dyn IdSource>,
}

impl App {
    pub fn new(strategy: Strategy) -> Self {
        Self::with_id_source(Dispatcher::new(strategy), Box::new(IdCounter::new()))
    }

    pub fn with_id_source(dispatcher: Dispatcher, ids: Box<dyn IdSource>) -> Self {
        let collection = dispatcher.current();
        Self {
            dispatcher,
            collection,
            selected_index: 0,
            should_quit: false,
            help_mode: false,
            edit: EditState::new(),
            status: None,
            ids,
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            self.handle_help_mode_key(key_event);
        } else if self.edit.edit_mode {
            self.handle_edit_mode_key(key_event);
        } else {
            self.handle_normal_mode_key(key_event);
        }
        Ok(())
    }

    fn handle_normal_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_normal_mode_key(key_event) {
            NormalModeAction::Quit => self.should_quit = true,
            NormalModeAction::ClearStatus => self.status = None,
            NormalModeAction::MoveSelectionUp => self.move_selection_up(),
            NormalModeAction::MoveSelectionDown => self.move_selection_down(),
            NormalModeAction::ToggleSelectedItem => self.toggle_selected_item(),
            NormalModeAction::AddNewItem => self.add_new_item(),
            NormalModeAction::DeleteItem => self.delete_selected_item(),
            NormalModeAction::Undo => self.undo(),
            NormalModeAction::ToggleHelpMode => self.help_mode = true,
            NormalModeAction::None => {}
        }
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        if KeyHandler::handle_help_mode_key(key_event) == HelpModeAction::ExitHelpMode {
            self.help_mode = false;
        }
    }

    fn handle_edit_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_edit_mode_key(key_event) {
            EditModeAction::CancelEdit => self.cancel_edit(),
            EditModeAction::ConfirmEdit => self.confirm_edit(),
            EditModeAction::Backspace => self.edit.backspace(),
            EditModeAction::Delete => self.edit.delete(),
            EditModeAction::MoveCursorLeft => self.edit.move_cursor_left(),
            EditModeAction::MoveCursorRight => self.edit.move_cursor_right(),
            EditModeAction::MoveCursorHome => self.edit.move_cursor_home(),
            EditModeAction::MoveCursorEnd => self.edit.move_cursor_end(),
            EditModeAction::InsertChar(c) => self.edit.insert_char(c),
            EditModeAction::None => {}
        }
    }

    fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn move_selection_down(&mut self) {
        if self.selected_index < self.collection.len().saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    fn selected_item(&self) -> Option<&Item> {
        self.collection.get(self.selected_index)
    }

    fn toggle_selected_item(&mut self) {
        if let Some(id) = self.selected_item().map(|item| item.id) {
            self.apply(Intent::Toggle(id));
        }
    }

    fn delete_selected_item(&mut self) {
        if let Some(id) = self.selected_item().map(|item| item.id) {
            self.apply(Intent::Delete(id));
        }
    }

    fn add_new_item(&mut self) {
        self.status = None;
        self.edit.enter_edit_mode(String::new());
    }

    fn cancel_edit(&mut self) {
        self.edit.exit_edit_mode();
    }

    fn confirm_edit(&mut self) {
        let text = self.edit.exit_edit_mode();
        let text = text.trim();

        if text.is_empty() {
            self.status = Some("Item text cannot be empty".to_string());
            return;
        }

        let item = Item::new(self.ids.next_id(), text);
        self.apply(Intent::Add(item));
        self.selected_index = self.collection.len().saturating_sub(1);
    }

    fn undo(&mut self) {
        if !self.dispatcher.can_undo() {
            self.status = Some("Nothing to undo".to_string());
            return;
        }

        if let Some(description) = self.dispatcher.undo_description() {
            self.status = Some(format!("Undid: {}", description));
        }
        self.collection = self.dispatcher.undo();
        self.clamp_selection();
    }

    fn apply(&mut self, intent: Intent) {
        self.status = None;
        self.collection = self.dispatcher.dispatch(intent);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.collection.len() {
            self.selected_index = self.collection.len().saturating_sub(1);
        }
    }

    pub fn total_items(&self) -> usize {
        self.collection.total_items()
    }

    pub fn completed_items(&self) -> usize {
        self.collection.completed_items()
    }
}
