/// Bounded circular buffer holding the most recent `window_size` emitted bytes
///
/// Appending to a full window evicts the oldest byte, so the contents are
/// always the last `window_size` bytes written. This is the only state the
/// decoder may consult for back-references.
///
/// Storage grows with the bytes written and stops at `window_size`, so a
/// window far larger than the stream costs nothing up front.
pub struct HistoryWindow {
    buffer: Vec<u8>,
    window_size: usize,
    /// Next write position once the buffer has reached `window_size`
    write_pos: usize,
    /// Largest length ever observed
    peak_len: usize,
}

impl HistoryWindow {
    pub fn new(window_size: usize) -> Self {
        Self { buffer: Vec::new(), window_size, write_pos: 0, peak_len: 0 }
    }

    /// Append a byte, evicting the oldest one if the window is full
    #[inline]
    pub fn push(&mut self, byte: u8) {
        if self.window_size == 0 {
            return;
        }

        if self.buffer.len() < self.window_size {
            self.buffer.push(byte);
            self.peak_len = self.buffer.len();
            // Oldest byte sits at index 0 until the buffer first fills
            self.write_pos = self.buffer.len() % self.window_size;
        } else {
            self.buffer[self.write_pos] = byte;
            self.write_pos += 1;
            if self.write_pos == self.window_size {
                self.write_pos = 0;
            }
        }
    }

    /// Byte `distance` positions behind the write head.
    ///
    /// distance=1 is the most recently written byte.
    #[inline]
    pub fn back(&self, distance: usize) -> u8 {
        let len = self.buffer.len();
        debug_assert!((1..=len).contains(&distance));
        // While growing write_pos == len, so this is plain len - distance
        self.buffer[(self.write_pos + len - distance) % len]
    }

    /// Contents from oldest to newest
    pub fn to_vec(&self) -> Vec<u8> {
        let len = self.buffer.len();
        (0..len).map(|i| self.back(len - i)).collect()
    }

    /// Bytes currently available for back-references
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Largest number of bytes the window has ever held
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }
}
