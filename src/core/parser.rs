use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{AnimalRecord, HourRange, ParsedAnimals, ParsedLine};
use crate::utils::error::{Result, ZooError};
use csv::{ByteRecord, ReaderBuilder, Trim};

pub const FIELD_COUNT: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    pub delimiter: u8,
    pub has_header: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: b'/',
            has_header: true,
        }
    }
}

impl ParseOptions {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            delimiter: config.delimiter(),
            has_header: config.has_header(),
        }
    }
}

/// 讀取資料檔並逐行解析，格式錯誤的行只會留下警告
pub fn read_animals<S: Storage, C: ConfigProvider>(storage: &S, config: &C) -> Result<ParsedAnimals> {
    let path = config.data_file();
    tracing::debug!("Reading animal data from: {}", path);

    let data = storage.read_file(path)?;
    parse_animals(path, &data, &ParseOptions::from_config(config))
}

pub fn parse_animals(source: &str, data: &[u8], options: &ParseOptions) -> Result<ParsedAnimals> {
    let mut reader = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(options.has_header)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(data);

    if options.has_header {
        let header = reader.byte_headers()?;
        tracing::debug!("Skipping header with {} fields", header.len());
    }

    let delimiter = char::from(options.delimiter).to_string();
    let mut lines = Vec::new();
    let mut record = ByteRecord::new();

    while reader.read_byte_record(&mut record)? {
        // whitespace-only line
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        let line = record.position().map(|pos| pos.line()).unwrap_or(0);
        lines.push(parse_line(line, &record, &delimiter));
    }

    let parsed = ParsedAnimals {
        source: source.to_string(),
        lines,
    };

    tracing::info!(
        "Parsed {} animal records from {} ({} malformed)",
        parsed.records().count(),
        source,
        parsed.malformed_count()
    );

    Ok(parsed)
}

fn parse_line(line: u64, record: &ByteRecord, delimiter: &str) -> ParsedLine {
    let content = record
        .iter()
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join(delimiter);

    let malformed = |reason: String| {
        tracing::debug!("Skipping line {}: {}", line, reason);
        ZooError::MalformedLine {
            line,
            content: content.clone(),
            reason,
        }
    };

    let fields = record
        .iter()
        .map(std::str::from_utf8)
        .collect::<std::result::Result<Vec<&str>, _>>()
        .map_err(|_| malformed("line is not valid UTF-8".to_string()))?;

    if fields.len() != FIELD_COUNT {
        return Err(malformed(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    if fields[0].is_empty() {
        return Err(malformed("animal name is empty".to_string()));
    }

    let active_range: HourRange = fields[3].parse().map_err(|e| match e {
        ZooError::InvalidTimeFormat { value } => {
            malformed(format!("invalid active hours '{}'", value))
        }
        other => malformed(other.to_string()),
    })?;

    Ok(AnimalRecord {
        name: fields[0].to_string(),
        hibernation_season: fields[1].to_lowercase(),
        unused: fields[2].to_string(),
        active_range,
    })
}
