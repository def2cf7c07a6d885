//! Selection state machine for the interactive profile picker.
//!
//! The machine performs no I/O. Input arrives as [`SelectEvent`] values and
//! every transition goes through [`Selector::apply`], so the picker's
//! behavior is fully exercisable in tests without a terminal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectEvent {
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Cursor moved (or stayed put at a bound); keep reading events.
    Continue,
    /// Terminal: the user confirmed the named profile.
    Selected(String),
    /// Terminal: the user backed out without selecting.
    Aborted,
}

#[derive(Debug)]
pub struct Selector {
    profiles: Vec<String>,
    cursor: usize,
    current_profile: String,
}

impl Selector {
    pub fn new(profiles: Vec<String>, current_profile: String) -> Self {
        Self {
            profiles,
            cursor: 0,
            current_profile,
        }
    }

    pub fn apply(&mut self, event: SelectEvent) -> Transition {
        match event {
            SelectEvent::MoveUp => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                Transition::Continue
            }
            SelectEvent::MoveDown => {
                if self.cursor + 1 < self.profiles.len() {
                    self.cursor += 1;
                }
                Transition::Continue
            }
            SelectEvent::Confirm => match self.profiles.get(self.cursor) {
                Some(profile) => Transition::Selected(profile.clone()),
                None => Transition::Aborted,
            },
            SelectEvent::Cancel => Transition::Aborted,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    /// One display line per profile, marking the cursor row and annotating
    /// the active profile. Pure projection of the state.
    pub fn render_lines(&self) -> Vec<String> {
        self.profiles
            .iter()
            .enumerate()
            .map(|(index, profile)| {
                let marker = if index == self.cursor { ">" } else { " " };
                let annotation = if *profile == self.current_profile {
                    " [current]"
                } else {
                    ""
                };
                format!("{marker} {profile}{annotation}")
            })
            .collect()
    }
}
