/// Output text built one token contribution at a time.
///
/// Each `push` opens a span. The pipeline may replace the most recent span
/// (verb re-conjugation), splice text in front of it (particles before a
/// closing punctuation mark) or rewrite the trailing characters (か → かしら).
#[derive(Debug, Default)]
pub(crate) struct OutputBuffer {
    text: String,
    /// Byte offset where each span starts; spans run to the next start.
    starts: Vec<usize>,
}

impl OutputBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, s: &str) {
        self.starts.push(self.text.len());
        self.text.push_str(s);
    }

    /// Replace the text of the most recent span. Pushes when empty.
    pub(crate) fn replace_last(&mut self, s: &str) {
        match self.starts.last() {
            Some(&start) => {
                self.text.truncate(start);
                self.text.push_str(s);
            }
            None => self.push(s),
        }
    }

    /// Insert `s` as a new span directly before the most recent one.
    pub(crate) fn insert_before_last(&mut self, s: &str) {
        let Some(last) = self.starts.last_mut() else {
            self.push(s);
            return;
        };
        let at = *last;
        *last += s.len();
        self.text.insert_str(at, s);
        let idx = self.starts.len() - 1;
        self.starts.insert(idx, at);
    }

    /// Replace `suffix` at the very end of the text with `with`.
    /// Returns `false` (and changes nothing) when the text does not end with it.
    pub(crate) fn replace_trailing(&mut self, suffix: &str, with: &str) -> bool {
        if suffix.is_empty() || !self.text.ends_with(suffix) {
            return false;
        }
        let cut = self.text.len() - suffix.len();
        self.text.truncate(cut);
        self.text.push_str(with);
        // Drop spans that were swallowed entirely by the cut.
        while self.starts.len() > 1 && self.starts.last().is_some_and(|&s| s > cut) {
            self.starts.pop();
        }
        true
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn into_string(self) -> String {
        self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_replace_last() {
        let mut buf = OutputBuffer::new();
        buf.push("本を");
        buf.push("食べる");
        buf.replace_last("食べます");
        assert_eq!(buf.as_str(), "本を食べます");
        buf.replace_last("食べ");
        assert_eq!(buf.as_str(), "本を食べ");
    }

    #[test]
    fn test_replace_last_on_empty_pushes() {
        let mut buf = OutputBuffer::new();
        buf.replace_last("走っ");
        buf.push("て");
        assert_eq!(buf.into_string(), "走って");
    }

    #[test]
    fn test_insert_before_last() {
        let mut buf = OutputBuffer::new();
        buf.push("お本");
        buf.push("。");
        buf.insert_before_last("です");
        buf.insert_before_last("わ");
        assert_eq!(buf.as_str(), "お本ですわ。");
        // The punctuation is still the most recent span.
        buf.replace_last("！");
        assert_eq!(buf.as_str(), "お本ですわ！");
    }

    #[test]
    fn test_insert_before_last_on_empty() {
        let mut buf = OutputBuffer::new();
        buf.insert_before_last("わ");
        assert_eq!(buf.as_str(), "わ");
    }

    #[test]
    fn test_replace_trailing() {
        let mut buf = OutputBuffer::new();
        buf.push("食べます");
        buf.push("か");
        assert!(buf.replace_trailing("か", "かしら"));
        assert_eq!(buf.as_str(), "食べますかしら");
        assert!(!buf.replace_trailing("か", "かしら"));
        assert_eq!(buf.as_str(), "食べますかしら");
    }

    #[test]
    fn test_replace_trailing_keeps_spans_consistent() {
        let mut buf = OutputBuffer::new();
        buf.push("本で");
        buf.push("す");
        buf.push("か");
        assert!(buf.replace_trailing("すか", "すかしら"));
        buf.push("。");
        buf.replace_last("？");
        assert_eq!(buf.as_str(), "本ですかしら？");
    }
}
