/// Circular buffer holding the most recent `capacity` bytes of history
pub struct SlidingWindow {
    buffer: Box<[u8]>,
    /// Next write position (0..capacity)
    write_pos: usize,
    /// Total bytes ever written
    total_written: u64,
}

impl SlidingWindow {
    /// Create an empty window. `capacity` must be non-zero.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self { buffer: vec![0u8; capacity].into_boxed_slice(), write_pos: 0, total_written: 0 }
    }

    /// Add a single byte to the window
    #[inline]
    pub fn push_byte(&mut self, byte: u8) {
        self.buffer[self.write_pos] = byte;
        self.write_pos += 1;
        if self.write_pos == self.buffer.len() {
            self.write_pos = 0;
        }
        self.total_written += 1;
    }

    /// Add multiple bytes to the window
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push_byte(b);
        }
    }

    /// Byte `distance` positions back; distance=1 is the most recently written byte.
    ///
    /// `distance` must be in `1..=available()`.
    #[inline]
    pub fn byte_back(&self, distance: usize) -> u8 {
        debug_assert!((1..=self.available()).contains(&distance));
        let cap = self.buffer.len();
        self.buffer[(self.write_pos + cap - distance) % cap]
    }

    /// History as two contiguous slices: `(recent, older)`.
    ///
    /// The last byte of `recent` is at distance 1; the last byte of `older`
    /// is at distance `recent.len() + 1`. `older` is empty until the window
    /// has wrapped.
    pub fn halves(&self) -> (&[u8], &[u8]) {
        let (recent, rest) = self.buffer.split_at(self.write_pos);
        if self.total_written >= self.buffer.len() as u64 {
            (recent, rest)
        } else {
            (recent, &rest[..0])
        }
    }

    /// Number of valid history bytes
    pub fn available(&self) -> usize {
        self.total_written.min(self.buffer.len() as u64) as usize
    }

    /// Get total bytes written
    pub fn total_written(&self) -> u64 {
        self.total_written
    }

    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Reset the window
    pub fn clear(&mut self) {
        self.write_pos = 0;
        self.total_written = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_basic() {
        let mut window = SlidingWindow::new(16);
        window.push_bytes(b"ABC");

        assert_eq!(window.byte_back(1), b'C');
        assert_eq!(window.byte_back(2), b'B');
        assert_eq!(window.byte_back(3), b'A');
        assert_eq!(window.available(), 3);
    }

    #[test]
    fn test_window_wrap() {
        let mut window = SlidingWindow::new(8192);

        for i in 0..10000u32 {
            window.push_byte((i & 0xFF) as u8);
        }

        assert_eq!(window.available(), 8192);
        assert_eq!(window.total_written(), 10000);

        // Most recent byte should be (9999 & 0xFF) = 15
        assert_eq!(window.byte_back(1), 15);
        // Oldest retained byte was written at index 10000 - 8192 = 1808
        assert_eq!(window.byte_back(8192), (1808 & 0xFF) as u8);
    }

    #[test]
    fn test_window_non_power_of_two() {
        let mut window = SlidingWindow::new(5);
        window.push_bytes(b"abcdefg");

        assert_eq!(window.available(), 5);
        assert_eq!(window.byte_back(1), b'g');
        assert_eq!(window.byte_back(5), b'c');
    }

    #[test]
    fn test_halves_before_wrap() {
        let mut window = SlidingWindow::new(8);
        window.push_bytes(b"xyz");

        let (recent, older) = window.halves();
        assert_eq!(recent, b"xyz");
        assert!(older.is_empty());
    }

    #[test]
    fn test_halves_after_wrap() {
        let mut window = SlidingWindow::new(4);
        window.push_bytes(b"abcdef");

        // buffer = [e, f, c, d], write_pos = 2
        let (recent, older) = window.halves();
        assert_eq!(recent, b"ef");
        assert_eq!(older, b"cd");
    }

    #[test]
    fn test_halves_exactly_full() {
        let mut window = SlidingWindow::new(4);
        window.push_bytes(b"abcd");

        let (recent, older) = window.halves();
        assert!(recent.is_empty());
        assert_eq!(older, b"abcd");
    }

    #[test]
    fn test_clear() {
        let mut window = SlidingWindow::new(4);
        window.push_bytes(b"abcdef");
        window.clear();

        assert_eq!(window.available(), 0);
        assert_eq!(window.halves(), (&b""[..], &b""[..]));
    }
}
