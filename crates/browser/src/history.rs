use core_types::HistoryMode;
use url::Url;

/// Back/forward list for one tab.
#[derive(Clone, Debug)]
pub struct SessionHistory {
    entries: Vec<Url>,
    index: usize,
}

impl SessionHistory {
    pub fn new(initial: Url) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    pub fn current(&self) -> &Url {
        &self.entries[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Url] {
        &self.entries
    }

    /// Record to history (truncate forward branch).
    pub fn push(&mut self, url: Url) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url);
        self.index = self.entries.len() - 1;
    }

    pub fn replace_current(&mut self, url: Url) {
        self.entries[self.index] = url;
    }

    pub fn record(&mut self, url: Url, mode: HistoryMode) {
        match mode {
            HistoryMode::Replace => self.replace_current(url),
            HistoryMode::Push => self.push(url),
        }
    }

    pub fn back(&mut self) -> Option<&Url> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    pub fn forward(&mut self) -> Option<&Url> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn push_truncates_forward_branch() {
        let mut h = SessionHistory::new(url("https://a.test/"));
        h.push(url("https://a.test/1"));
        h.push(url("https://a.test/2"));
        assert_eq!(h.back().map(Url::as_str), Some("https://a.test/1"));
        h.push(url("https://a.test/3"));

        assert_eq!(h.len(), 3);
        assert!(h.forward().is_none());
        assert_eq!(h.current().as_str(), "https://a.test/3");
    }

    #[test]
    fn replace_keeps_length_and_position() {
        let mut h = SessionHistory::new(url("https://a.test/docs"));
        h.record(url("https://a.test/docs#x"), HistoryMode::Replace);
        assert_eq!(h.len(), 1);
        assert_eq!(h.current().fragment(), Some("x"));

        h.record(url("https://a.test/docs#y"), HistoryMode::Push);
        assert_eq!(h.len(), 2);
        assert_eq!(h.index(), 1);
    }

    #[test]
    fn back_stops_at_first_entry() {
        let mut h = SessionHistory::new(url("https://a.test/"));
        assert!(h.back().is_none());
        assert_eq!(h.index(), 0);
    }
}
