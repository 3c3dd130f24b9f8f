use std::{
    error::Error,
    fmt, io,
    path::{Path, PathBuf},
};

use csv::{Position, ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use social_store::models::{City, Follows, LivesIn, User};
use social_store::schema::SeedTable;

/// Error type for seed file failures.
#[derive(Debug)]
pub enum SeedParseError {
    Io { path: PathBuf, source: io::Error },
    Malformed {
        path: String,
        line: u64,
        message: String,
    },
    Join(String),
}

impl fmt::Display for SeedParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read seed file {}: {source}", path.display())
            }
            Self::Malformed {
                path,
                line,
                message,
            } => write!(f, "{path}:{line}: {message}"),
            Self::Join(message) => write!(f, "seed parse task failed: {message}"),
        }
    }
}

impl Error for SeedParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { .. } | Self::Join(_) => None,
        }
    }
}

impl From<tokio::task::JoinError> for SeedParseError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Join(err.to_string())
    }
}

/// Parsed contents of the four seed files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSet {
    pub users: Vec<User>,
    pub cities: Vec<City>,
    pub follows: Vec<Follows>,
    pub lives_in: Vec<LivesIn>,
}

impl SeedSet {
    /// Reads and parses the seed files from a directory.
    ///
    /// # Errors
    /// Returns `SeedParseError` if any file is missing, unreadable, or malformed.
    pub async fn read_dir(dir: impl AsRef<Path>) -> Result<Self, SeedParseError> {
        let dir = dir.as_ref().to_path_buf();
        tokio::task::spawn_blocking(move || Self::read_dir_blocking(&dir)).await?
    }

    fn read_dir_blocking(dir: &Path) -> Result<Self, SeedParseError> {
        let read = |table: SeedTable| {
            let path = dir.join(table.file_name());
            std::fs::read_to_string(&path)
                .map(|text| (table.file_name(), text))
                .map_err(|source| SeedParseError::Io { path, source })
        };

        let (file, text) = read(SeedTable::User)?;
        let users = SeedParser::users(&text, file)?;
        let (file, text) = read(SeedTable::City)?;
        let cities = SeedParser::cities(&text, file)?;
        let (file, text) = read(SeedTable::Follows)?;
        let follows = SeedParser::follows(&text, file)?;
        let (file, text) = read(SeedTable::LivesIn)?;
        let lives_in = SeedParser::lives_in(&text, file)?;

        Ok(Self {
            users,
            cities,
            follows,
            lives_in,
        })
    }

    #[must_use]
    pub fn len(&self, table: SeedTable) -> usize {
        match table {
            SeedTable::User => self.users.len(),
            SeedTable::City => self.cities.len(),
            SeedTable::Follows => self.follows.len(),
            SeedTable::LivesIn => self.lives_in.len(),
        }
    }
}

/// Parser for header-less, comma-delimited seed files.
///
/// Fields are trimmed, may be double-quoted to carry commas, and blank lines
/// are skipped. `path` only labels error messages.
pub struct SeedParser;

impl SeedParser {
    /// Parses `name,age` lines.
    ///
    /// # Errors
    /// Returns `SeedParseError::Malformed` on a bad line.
    pub fn users(text: &str, path: &str) -> Result<Vec<User>, SeedParseError> {
        parse_rows(text, path, SeedTable::User)
    }

    /// Parses `name,population` lines.
    ///
    /// # Errors
    /// Returns `SeedParseError::Malformed` on a bad line.
    pub fn cities(text: &str, path: &str) -> Result<Vec<City>, SeedParseError> {
        parse_rows(text, path, SeedTable::City)
    }

    /// Parses `from,to,since` lines.
    ///
    /// # Errors
    /// Returns `SeedParseError::Malformed` on a bad line.
    pub fn follows(text: &str, path: &str) -> Result<Vec<Follows>, SeedParseError> {
        parse_rows(text, path, SeedTable::Follows)
    }

    /// Parses `user,city` lines.
    ///
    /// # Errors
    /// Returns `SeedParseError::Malformed` on a bad line.
    pub fn lives_in(text: &str, path: &str) -> Result<Vec<LivesIn>, SeedParseError> {
        parse_rows(text, path, SeedTable::LivesIn)
    }
}

fn parse_rows<T: DeserializeOwned>(
    text: &str,
    path: &str,
    table: SeedTable,
) -> Result<Vec<T>, SeedParseError> {
    let columns = table.columns();
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|err| {
            let line = err.position().map_or(0, Position::line);
            malformed(path, line, err.to_string())
        })?;
        let line = record.position().map_or(0, Position::line);
        if record.len() != columns.len() {
            return Err(malformed(
                path,
                line,
                format!(
                    "expected {} fields for {}, found {}",
                    columns.len(),
                    table.table(),
                    record.len()
                ),
            ));
        }
        if let Some(index) = record.iter().position(str::is_empty) {
            return Err(malformed(path, line, format!("{} is empty", columns[index])));
        }
        let row = deserialize_row(&record, columns)
            .map_err(|message| malformed(path, line, message))?;
        rows.push(row);
    }
    Ok(rows)
}

fn deserialize_row<T: DeserializeOwned>(
    record: &StringRecord,
    columns: &[&str],
) -> Result<T, String> {
    record.deserialize(None).map_err(|err| match err.kind() {
        csv::ErrorKind::Deserialize { err: field_err, .. } => {
            let column = field_err
                .field()
                .and_then(|index| usize::try_from(index).ok())
                .and_then(|index| columns.get(index))
                .copied()
                .unwrap_or("field");
            format!("invalid {column} ({field_err})")
        }
        _ => err.to_string(),
    })
}

fn malformed(path: &str, line: u64, message: impl Into<String>) -> SeedParseError {
    SeedParseError::Malformed {
        path: path.to_string(),
        line,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_users_and_skips_blank_lines() {
        let users = SeedParser::users("Adam,30\n\nKarissa, 40\r\n", "user.csv").unwrap();
        assert_eq!(
            users,
            vec![
                User {
                    name: "Adam".to_string(),
                    age: 30
                },
                User {
                    name: "Karissa".to_string(),
                    age: 40
                },
            ]
        );
    }

    #[test]
    fn quoted_fields_keep_commas_and_quotes() {
        let users = SeedParser::users("\"O\"\"Brien, Pat\",41\n", "user.csv").unwrap();
        assert_eq!(users[0].name, "O\"Brien, Pat");
        assert_eq!(users[0].age, 41);
    }

    #[test]
    fn follows_requires_three_columns() {
        let err =
            SeedParser::follows("Adam,Karissa,2020\nAdam,Zhang\n", "follows.csv").unwrap_err();
        match err {
            SeedParseError::Malformed { path, line, message } => {
                assert_eq!(path, "follows.csv");
                assert_eq!(line, 2);
                assert!(message.contains("expected 3 fields"), "{message}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_integer_population() {
        let err = SeedParser::cities("Waterloo,150000\nGuelph,many\n", "city.csv").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("city.csv:2:"), "{message}");
        assert!(message.contains("invalid population"), "{message}");
    }

    #[test]
    fn unterminated_quote_swallows_the_line() {
        let err = SeedParser::lives_in("\"Adam,Waterloo\n", "lives-in.csv").unwrap_err();
        assert!(matches!(err, SeedParseError::Malformed { .. }), "{err}");
    }

    #[test]
    fn rejects_empty_name() {
        let err = SeedParser::lives_in("Adam,Waterloo\n  ,Guelph\n", "lives-in.csv").unwrap_err();
        assert_eq!(err.to_string(), "lives-in.csv:2: user is empty");
    }

    #[test]
    fn header_line_is_treated_as_data() {
        let err = SeedParser::users("name,age\nAdam,30\n", "user.csv").unwrap_err();
        assert!(err.to_string().contains("invalid age"));
    }

    #[tokio::test]
    async fn missing_directory_reports_io_error() {
        let err = SeedSet::read_dir("/nonexistent/social-graph-seed")
            .await
            .unwrap_err();
        let SeedParseError::Io { path, source } = &err else {
            panic!("unexpected error: {err}");
        };
        assert!(path.ends_with("user.csv"));
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
        assert!(err.source().is_some());
    }
}
