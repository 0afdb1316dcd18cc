/// One physical line of a robots.txt document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    pub number: u32,
    pub content: &'a str,
}

/// Splits robots.txt text into 1-indexed physical lines.
///
/// `\n`, `\r\n` and a lone `\r` each end a line. A trailing terminator does not
/// produce an extra empty line, but a final line without one is still yielded.
/// Cloning the scanner restarts it from the same position.
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    rest: &'a str,
    next_number: u32,
}

impl<'a> LineScanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            rest: text.strip_prefix('\u{feff}').unwrap_or(text),
            next_number: 1,
        }
    }
}

impl<'a> Iterator for LineScanner<'a> {
    type Item = ScannedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let (content, rest) = match self.rest.find(['\n', '\r']) {
            Some(end) => {
                let terminator_len = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
                (&self.rest[..end], &self.rest[end + terminator_len..])
            }
            None => (self.rest, ""),
        };

        let line = ScannedLine {
            number: self.next_number,
            content,
        };
        self.rest = rest;
        self.next_number = self.next_number.saturating_add(1);
        Some(line)
    }
}
