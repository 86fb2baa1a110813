//! Top-level menu / play state machine

use serde::{Deserialize, Serialize};

use super::state::PlayerId;

/// Whether the simulation is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Menu shown, physics frozen
    Menu,
    /// Active gameplay
    Playing,
}

/// Highlighted menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    Play,
    Quit,
}

impl Selection {
    pub fn toggled(self) -> Self {
        match self {
            Selection::Play => Selection::Quit,
            Selection::Quit => Selection::Play,
        }
    }
}

/// Result of a confirm press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Menu -> Playing, continuing the current match
    Resume,
    /// Menu -> Playing after a win; the caller resets the match
    NewMatch,
    /// Playing -> Menu
    Pause,
    /// Quit selected
    Quit,
}

/// Menu selection, pending winner and current mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuState {
    pub mode: Mode,
    pub selection: Selection,
    /// Winner of the last match, shown until the next match starts
    pub winner: Option<PlayerId>,
}

impl Default for MenuState {
    fn default() -> Self {
        Self {
            mode: Mode::Menu,
            selection: Selection::Play,
            winner: None,
        }
    }
}

impl MenuState {
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.mode == Mode::Playing
    }

    /// Move the highlight; only meaningful while the menu is shown
    pub fn toggle_selection(&mut self) {
        if self.mode == Mode::Menu {
            self.selection = self.selection.toggled();
        }
    }

    /// Handle a confirm press
    pub fn confirm(&mut self) -> Transition {
        match (self.mode, self.selection) {
            (Mode::Playing, _) => {
                self.mode = Mode::Menu;
                Transition::Pause
            }
            (Mode::Menu, Selection::Quit) => Transition::Quit,
            (Mode::Menu, Selection::Play) => {
                self.mode = Mode::Playing;
                if self.winner.take().is_some() {
                    Transition::NewMatch
                } else {
                    Transition::Resume
                }
            }
        }
    }

    /// End the match and show the win screen
    pub fn declare_winner(&mut self, winner: PlayerId) {
        self.mode = Mode::Menu;
        self.selection = Selection::Play;
        self.winner = Some(winner);
    }
}
