pub const DEFAULT_DELIMITERS: [char; 2] = [',', ';'];

const QUOTES: [char; 2] = ['"', '\''];

/// Splits one raw line into normalized field values
///
/// Fields are separated by any of the accepted delimiters, interchangeably.
/// Each value is trimmed, loses one leading and one trailing quote (single or
/// double), and has any delimiter characters left inside it removed. No
/// arity is enforced here.
#[derive(Debug, Clone)]
pub struct FieldParser {
    delimiters: Vec<char>,
}

/// The three columns an import line carries, in file order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Default for FieldParser {
    fn default() -> Self {
        Self::new(&DEFAULT_DELIMITERS)
    }
}

impl FieldParser {
    pub fn new(delimiters: &[char]) -> Self {
        Self {
            delimiters: delimiters.to_vec(),
        }
    }

    pub fn parse_fields(&self, line: &str) -> Vec<String> {
        line.split(|c: char| self.is_delimiter(c))
            .map(|field| self.normalize(field))
            .collect()
    }

    /// Fields past the third are ignored; missing or empty ones are `None`
    pub fn parse_record(&self, line: &str) -> ParsedRecord {
        let mut fields = self.parse_fields(line).into_iter();
        let name = fields.next().unwrap_or_default();
        let mut next_present = || fields.next().filter(|value| !value.is_empty());
        let email = next_present();
        let phone = next_present();

        ParsedRecord { name, email, phone }
    }

    fn normalize(&self, field: &str) -> String {
        let trimmed = field.trim();
        let unquoted = trimmed.strip_prefix(QUOTES).unwrap_or(trimmed);
        let unquoted = unquoted.strip_suffix(QUOTES).unwrap_or(unquoted);

        unquoted.chars().filter(|c| !self.is_delimiter(*c)).collect()
    }

    fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }
}
