use super::field_parser::FieldParser;
use crate::log_debug;
use crate::modules::data_import::domain::entities::ImportCandidate;
use std::collections::HashMap;

/// Candidates keyed by name, kept in first-seen order
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    candidates: Vec<ImportCandidate>,
    index: HashMap<String, usize>,
    skipped_lines: usize,
}

impl CandidateSet {
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ImportCandidate> {
        self.index.get(name).map(|&i| &self.candidates[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImportCandidate> {
        self.candidates.iter()
    }

    /// Data lines dropped because their name field was empty
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    fn upsert(&mut self, name: String, email: Option<&str>, phone: Option<&str>) {
        let position = match self.index.get(&name) {
            Some(&position) => position,
            None => {
                self.candidates.push(ImportCandidate::new(name.clone()));
                self.index.insert(name, self.candidates.len() - 1);
                self.candidates.len() - 1
            }
        };
        self.candidates[position].merge_contacts(email, phone);
    }
}

impl IntoIterator for CandidateSet {
    type Item = ImportCandidate;
    type IntoIter = std::vec::IntoIter<ImportCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a ImportCandidate;
    type IntoIter = std::slice::Iter<'a, ImportCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

/// Turns decoded file text into deduplicated import candidates.
///
/// Blank lines are dropped, then the first remaining line is discarded as the
/// header without looking at it. Lines whose name is empty are skipped.
/// Names are grouped by exact, case-sensitive match.
#[derive(Debug, Clone, Default)]
pub struct CsvAggregator {
    parser: FieldParser,
}

impl CsvAggregator {
    pub fn new(parser: FieldParser) -> Self {
        Self { parser }
    }

    pub fn aggregate(&self, text: &str) -> CandidateSet {
        let mut set = CandidateSet::default();

        let data_lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .skip(1);

        for line in data_lines {
            let record = self.parser.parse_record(line);
            if record.name.trim().is_empty() {
                log_debug!("Skipping line without a name: {}", line);
                set.skipped_lines += 1;
                continue;
            }
            set.upsert(record.name, record.email.as_deref(), record.phone.as_deref());
        }

        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(text: &str) -> CandidateSet {
        CsvAggregator::default().aggregate(text)
    }

    #[test]
    fn merges_duplicate_names() {
        let set = aggregate("name,email,phone\nAna,ana@x.com,111\nAna,ana2@x.com,\nBeto,,222");

        assert_eq!(set.len(), 2);
        let ana = set.get("Ana").unwrap();
        assert_eq!(
            ana.emails.iter().collect::<Vec<_>>(),
            vec!["ana2@x.com", "ana@x.com"]
        );
        assert_eq!(ana.phones.iter().collect::<Vec<_>>(), vec!["111"]);

        let beto = set.get("Beto").unwrap();
        assert!(beto.emails.is_empty());
        assert_eq!(beto.phones.iter().collect::<Vec<_>>(), vec!["222"]);
    }

    #[test]
    fn keeps_first_seen_order() {
        let set = aggregate("h\nZed\nAna\nZed,z@x.com");
        let names: Vec<_> = set.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Ana"]);
    }

    #[test]
    fn header_only_yields_nothing() {
        assert!(aggregate("name,email,phone\n").is_empty());
        assert!(aggregate("").is_empty());
    }

    #[test]
    fn header_is_never_validated() {
        let set = aggregate("Ana,ana@x.com,111\nBeto,b@x.com,222");
        assert_eq!(set.len(), 1);
        assert!(set.get("Ana").is_none());
    }

    #[test]
    fn blank_lines_and_crlf_are_ignored() {
        let set = aggregate("\r\n  \r\nname;email;phone\r\n\r\nAna;ana@x.com;111\r\n   \r\n");
        assert_eq!(set.len(), 1);
        assert_eq!(
            set.get("Ana").unwrap().phones.iter().collect::<Vec<_>>(),
            vec!["111"]
        );
    }

    #[test]
    fn empty_names_are_dropped_silently() {
        let set = aggregate("name,email\n,orphan@x.com,1\n  ;x@x.com\n\"\",q@x.com\nAna");
        assert_eq!(set.len(), 1);
        assert_eq!(set.skipped_lines(), 3);
    }

    #[test]
    fn names_are_case_sensitive() {
        let set = aggregate("h\nana\nAna\nANA");
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn quoted_values_lose_their_quotes() {
        let set = aggregate("h\n\"Ana\",\"ana@x.com\",'111'");
        let ana = set.get("Ana").unwrap();
        assert!(ana.emails.contains("ana@x.com"));
        assert!(ana.phones.contains("111"));
    }
}
