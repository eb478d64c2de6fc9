/// Slots a fresh quiz starts with.
pub const BASELINE_SLOTS: usize = 4;

/// Fewest slots the editable list may shrink to.
pub const MIN_SLOTS: usize = 2;

/// Editable answer options bound to the index of the correct one.
///
/// Every mutation keeps `correct < slots.len()` and `slots.len() >= MIN_SLOTS`,
/// so no caller can observe an index pointing past the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOptions {
    slots: Vec<String>,
    correct: usize,
}

impl Default for AnswerOptions {
    fn default() -> Self {
        Self::baseline()
    }
}

// Never fewer than two slots.
#[allow(clippy::len_without_is_empty)]
impl AnswerOptions {
    pub fn baseline() -> Self {
        Self {
            slots: vec![String::new(); BASELINE_SLOTS],
            correct: 0,
        }
    }

    /// Builds the list from stored options. Short lists are padded with empty
    /// slots up to the floor and the index is clamped into range.
    pub fn from_parts(values: Vec<String>, correct: usize) -> Self {
        let mut options = Self::baseline();
        options.replace_all(values);
        options.correct = correct.min(options.slots.len() - 1);
        options
    }

    pub fn as_slice(&self) -> &[String] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn correct_index(&self) -> usize {
        self.correct
    }

    /// Returns `false` and leaves the index untouched when it is out of range.
    pub fn set_correct_index(&mut self, index: usize) -> bool {
        if index >= self.slots.len() {
            return false;
        }
        self.correct = index;
        true
    }

    /// Returns `false` when `index` is not a slot.
    pub fn set_option(&mut self, index: usize, value: impl Into<String>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn add_option(&mut self) {
        self.slots.push(String::new());
    }

    /// Removes a slot unless that would leave fewer than two. Returns whether
    /// anything was removed.
    pub fn remove_option(&mut self, index: usize) -> bool {
        if index >= self.slots.len() || self.slots.len() <= MIN_SLOTS {
            return false;
        }
        self.slots.remove(index);
        self.clamp();
        true
    }

    /// Replaces every slot, keeping source order.
    pub fn replace_all<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slots = values.into_iter().map(Into::into).collect();
        while self.slots.len() < MIN_SLOTS {
            self.slots.push(String::new());
        }
        self.clamp();
    }

    /// Back to exactly the baseline slots, all empty, index zero.
    pub fn reset(&mut self) {
        self.slots.truncate(BASELINE_SLOTS);
        self.slots.iter_mut().for_each(String::clear);
        self.slots.resize(BASELINE_SLOTS, String::new());
        self.correct = 0;
    }

    /// Non-blank entries in order. This, not the raw list, is what gets
    /// validated and submitted.
    pub fn filled(&self) -> Vec<String> {
        self.slots
            .iter()
            .filter(|slot| !slot.trim().is_empty())
            .cloned()
            .collect()
    }

    fn clamp(&mut self) {
        if self.correct >= self.slots.len() {
            self.correct = self.slots.len() - 1;
        }
    }
}
