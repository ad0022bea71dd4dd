use super::data::ImageRecord;

/// Which image, if any, is open in the lightbox.
///
/// Navigation always runs against the *currently filtered* images handed in
/// by the caller, never the full catalog, and wraps around at both ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<String>,
}

/// Where the selected image sits in the filtered sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Zero-based index
    pub index: usize,
    pub len: usize,
}

impl Position {
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len
    }
}

impl Selection {
    /// Open `image` in the lightbox. Valid from any state.
    pub fn open(&mut self, image: &ImageRecord) {
        self.current = Some(image.id.clone());
    }

    /// Close the lightbox. No-op when nothing is open.
    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Id of the open image
    pub fn current_id(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Position of the open image within `filtered`.
    ///
    /// `None` when nothing is open, or when the open image has been filtered
    /// out since it was opened.
    pub fn position(&self, filtered: &[&ImageRecord]) -> Option<Position> {
        let id = self.current.as_deref()?;
        let index = filtered.iter().position(|image| image.id == id)?;
        Some(Position {
            index,
            len: filtered.len(),
        })
    }

    /// Advance to the next filtered image, wrapping from last to first
    pub fn next(&mut self, filtered: &[&ImageRecord]) {
        self.step(filtered, |index, len| (index + 1) % len);
    }

    /// Step back to the previous filtered image, wrapping from first to last
    pub fn previous(&mut self, filtered: &[&ImageRecord]) {
        self.step(filtered, |index, len| (index + len - 1) % len);
    }

    fn step(&mut self, filtered: &[&ImageRecord], advance: impl Fn(usize, usize) -> usize) {
        // Nothing open, empty sequence, or selection filtered out: stay put
        let Some(position) = self.position(filtered) else {
            return;
        };

        let target = advance(position.index, position.len);
        self.current = Some(filtered[target].id.clone());
    }
}
