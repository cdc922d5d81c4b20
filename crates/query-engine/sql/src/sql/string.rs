/// Type definitions of a low-level SQL string representation.
///
/// Clauses are laid out one per line. Nothing appended here is quoted or escaped
/// unless the method says so.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SQL {
    pub sql: String,
}

impl SQL {
    pub fn new() -> SQL {
        SQL {
            sql: String::new(),
        }
    }
    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }
    /// Start a new clause on its own line.
    pub fn append_clause(&mut self, keyword: &str) {
        if !self.sql.is_empty() {
            self.sql.push('\n');
        }
        self.sql.push_str(keyword);
    }
    /// Identifiers are written as given, unquoted.
    pub fn append_identifier(&mut self, identifier: &str) {
        self.sql.push_str(identifier);
    }
    /// Wrap `text` in single quotes. Quotes inside `text` are not escaped.
    pub fn append_unsafe_string(&mut self, text: &str) {
        self.sql.push('\'');
        self.sql.push_str(text);
        self.sql.push('\'');
    }
}

impl From<SQL> for String {
    fn from(value: SQL) -> Self {
        value.sql
    }
}
