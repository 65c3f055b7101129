/// Container struct for a response that can be glued together from multiple
/// datagrams.
///
/// Fragments are kept in arrival order and joined byte for byte. Text decoding
/// happens once over the whole buffer, so a UTF-8 sequence cut in half by a
/// datagram boundary still comes out whole.
#[derive(Debug, Default)]
pub struct Response {
    buffer: Vec<u8>,
    fragments: usize,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, fragment: &[u8]) {
        self.buffer.extend_from_slice(fragment);
        self.fragments += 1;
    }

    /// Number of fragments appended so far.
    pub fn fragments(&self) -> usize {
        self.fragments
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Decodes the collected bytes. Invalid UTF-8 is replaced rather than
    /// rejected since the result is only meant for display.
    pub fn finalize(self) -> String {
        String::from_utf8_lossy(&self.buffer).into_owned()
    }
}
