use std::io::Read;
use std::path::PathBuf;

use crate::error::SourceError;
use crate::types::table::RawTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Url(String),
    File(PathBuf),
}

impl SourceLocation {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with("http://") || value.starts_with("https://") {
            SourceLocation::Url(value.to_string())
        } else {
            SourceLocation::File(PathBuf::from(value))
        }
    }

    pub async fn fetch(&self, client: &reqwest::Client) -> Result<RawTable, SourceError> {
        let bytes = match self {
            SourceLocation::Url(url) => client
                .get(url)
                .send()
                .await?
                .error_for_status()?
                .bytes()
                .await?
                .to_vec(),
            SourceLocation::File(path) => {
                tokio::fs::read(path).await.map_err(|source| SourceError::Io {
                    path: path.display().to_string(),
                    source,
                })?
            }
        };

        read_csv(bytes.as_slice())
    }
}

pub fn read_csv<R: Read>(reader: R) -> Result<RawTable, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.byte_headers()?.iter().map(decode).collect();
    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        rows.push(record.iter().map(decode).collect());
    }

    Ok(RawTable::new(headers, rows))
}

// Invalid UTF-8 becomes U+FFFD instead of failing the sheet.
fn decode(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}
