use std::collections::HashMap;

pub type Frame = HashMap<String, i64>;

/// Variable storage made of nested scope frames.
///
/// The innermost frame is the last element of `frames`. Writes only ever land
/// in that frame, so a binding made inside a scope shadows an outer binding of
/// the same name until the scope is closed.
#[derive(Debug, Default)]
pub struct ScopedMemory {
    frames: Vec<Frame>,
}

impl ScopedMemory {
    pub fn new() -> Self {
        Self { frames: vec![] }
    }

    pub fn open_scope(&mut self) {
        self.frames.push(Frame::new());
    }

    /// Discards the innermost frame, returning it. `None` means there was no
    /// frame left to close.
    pub fn close_scope(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    pub fn read(&self, name: &str) -> Option<i64> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name).copied())
    }

    pub fn write(&mut self, name: &str, value: i64) {
        match self.frames.last_mut() {
            Some(frame) => {
                frame.insert(name.to_string(), value);
            }
            None => log::warn!("write to `{}` with no open scope was dropped", name),
        }
    }

    pub fn has_open_scope(&self) -> bool {
        !self.frames.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}
