//! Bookkeeping for fragments set aside during expansion.
//!
//! The expander pulls a template call, parser function or tag body out of the
//! text, stores it here and writes the returned codepoint in its place. Once
//! the surrounding markup has been parsed the codepoint is looked up again
//! and replaced by the expanded text.
//!
//! Codepoints are minted in increasing order and are not handed out twice
//! until [`PlaceholderTable::clear`] is called, so a stale marker left in
//! some text can never resolve to the wrong fragment.

use crate::magic::{MAGIC_FIRST, MAGIC_LAST, is_magic};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceholderError {
    #[error("all {capacity} placeholder codepoints are in use")]
    Exhausted { capacity: u32 },
    #[error(
        "placeholder range U+{first:X}..=U+{last:X} is not inside U+{min:X}..=U+{max:X}",
        min = MAGIC_FIRST,
        max = MAGIC_LAST
    )]
    InvalidRange { first: u32, last: u32 },
    #[error("unknown placeholder U+{:X}", codepoint(.0))]
    Unknown(char),
}

fn codepoint(c: &char) -> u32 {
    u32::from(*c)
}

/// Values set aside for later expansion, keyed by their placeholder char.
#[derive(Debug, Clone)]
pub struct PlaceholderTable<T> {
    first: u32,
    last: u32,
    /// Slot `i` belongs to codepoint `first + i`. Removed entries stay `None`.
    slots: Vec<Option<T>>,
    live: usize,
}

impl<T> Default for PlaceholderTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PlaceholderTable<T> {
    /// A table over the whole general placeholder range.
    pub fn new() -> Self {
        Self {
            first: MAGIC_FIRST,
            last: MAGIC_LAST,
            slots: Vec::new(),
            live: 0,
        }
    }

    /// A table over `first..=last`, which must lie inside the general range.
    pub fn with_range(first: u32, last: u32) -> Result<Self, PlaceholderError> {
        if first > last || first < MAGIC_FIRST || last > MAGIC_LAST {
            return Err(PlaceholderError::InvalidRange { first, last });
        }
        log::debug!("placeholder table over U+{first:X}..=U+{last:X}");
        Ok(Self {
            first,
            last,
            slots: Vec::new(),
            live: 0,
        })
    }

    pub fn capacity(&self) -> u32 {
        self.last - self.first + 1
    }

    /// Codepoints that can still be minted before [`Self::clear`].
    pub fn remaining(&self) -> u32 {
        // slots.len() never exceeds capacity()
        self.capacity() - self.slots.len() as u32
    }

    /// Number of values currently in flight.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Returns true if `c` falls in this table's range.
    pub fn owns(&self, c: char) -> bool {
        (self.first..=self.last).contains(&u32::from(c))
    }

    /// Stores `value` and returns the placeholder char standing in for it.
    pub fn insert(&mut self, value: T) -> Result<char, PlaceholderError> {
        let capacity = self.capacity();
        if self.remaining() == 0 {
            log::warn!("placeholder range exhausted after {capacity} insertions");
            return Err(PlaceholderError::Exhausted { capacity });
        }
        let cp = self.first + self.slots.len() as u32;
        let c = char::from_u32(cp).ok_or(PlaceholderError::Exhausted { capacity })?;
        self.slots.push(Some(value));
        self.live += 1;
        log::trace!("minted placeholder U+{cp:X}");
        Ok(c)
    }

    fn slot(&self, c: char) -> Option<usize> {
        self.owns(c).then(|| (u32::from(c) - self.first) as usize)
    }

    pub fn get(&self, c: char) -> Option<&T> {
        self.slot(c)
            .and_then(|i| self.slots.get(i))
            .and_then(Option::as_ref)
    }

    /// Takes the value out; the codepoint is not minted again.
    pub fn remove(&mut self, c: char) -> Option<T> {
        let i = self.slot(c)?;
        let value = self.slots.get_mut(i)?.take()?;
        self.live -= 1;
        log::trace!("resolved placeholder U+{:X}", u32::from(c));
        Some(value)
    }

    /// Drops every value and starts minting from the bottom of the range again.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.live = 0;
    }

    /// Replaces each placeholder of this table found in `text` with
    /// `render(value)`, in a single left-to-right pass.
    ///
    /// Characters outside this table's range, named magic codepoints
    /// included, are copied unchanged. A codepoint inside the range that has
    /// no live value is an error.
    pub fn substitute<F, R>(&self, text: &str, mut render: F) -> Result<String, PlaceholderError>
    where
        F: FnMut(&T) -> R,
        R: AsRef<str>,
    {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if !(is_magic(c) && self.owns(c)) {
                out.push(c);
                continue;
            }
            match self.get(c) {
                Some(value) => out.push_str(render(value).as_ref()),
                None => {
                    log::warn!("unknown placeholder U+{:X} in text", u32::from(c));
                    return Err(PlaceholderError::Unknown(c));
                }
            }
        }
        Ok(out)
    }
}
