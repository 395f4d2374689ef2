//! Settings file persistence.
//!
//! One comma-separated line. `|` escapes the next character, which lets the
//! output path carry commas.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;

const FIELDS: usize = 11;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let output_path = settings
        .output_file_path
        .chars()
        .map(|c| match c {
            ',' => "|,".to_string(),
            '|' => "||".to_string(),
            _ => c.to_string(),
        })
        .collect::<String>();

    let data = format!(
        "{},{},{},{},{},{},{},{},{},{},{}\n",
        settings.length,
        settings.number_of_strings,
        settings.uppercase,
        settings.lowercase,
        settings.digits,
        settings.symbols,
        settings.whitespace,
        settings.repeat_chars,
        settings.min_distinct_chars,
        settings.fill,
        output_path,
    );

    file.write_all(data.as_bytes())?;
    log::debug!("settings saved to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        return save(settings, path);
    }

    let file = OpenOptions::new().read(true).open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts = split_escaped(line.trim_end_matches(['\r', '\n']), ',');
    if parts.len() != FIELDS {
        log::warn!(
            "settings file {} has {} fields, expected {}; rewriting defaults",
            path.display(),
            parts.len(),
            FIELDS
        );
        return save(settings, path);
    }

    let field = Field { path, parts: &parts };
    field.read(0, "length", &mut settings.length);
    field.read(1, "number", &mut settings.number_of_strings);
    field.read(2, "uppercase", &mut settings.uppercase);
    field.read(3, "lowercase", &mut settings.lowercase);
    field.read(4, "digits", &mut settings.digits);
    field.read(5, "symbols", &mut settings.symbols);
    field.read(6, "whitespace", &mut settings.whitespace);
    field.read(7, "repeat", &mut settings.repeat_chars);
    field.read(8, "min distinct", &mut settings.min_distinct_chars);
    field.read(9, "fill", &mut settings.fill);
    settings.output_file_path = parts[10].clone();
    settings.output_to_terminal = settings.output_file_path.is_empty();

    Ok(())
}

struct Field<'a> {
    path: &'a Path,
    parts: &'a [String],
}

impl Field<'_> {
    /// Parse field `idx` into `slot`; an unparsable value keeps the current one.
    fn read<T: FromStr + Display>(&self, idx: usize, name: &str, slot: &mut T) {
        match self.parts[idx].parse() {
            Ok(value) => *slot = value,
            Err(_) => log::warn!(
                "settings file {}: invalid {} {:?}, keeping {}",
                self.path.display(),
                name,
                self.parts[idx],
                slot
            ),
        }
    }
}

pub fn default_path() -> PathBuf {
    if let Ok(path) = env::var("RANDCHARS_SETTINGS") {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/randchars/settings", home))
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        env::temp_dir()
            .join(format!("randchars-{}-{}", std::process::id(), name))
            .join("settings")
    }

    #[test]
    fn split_keeps_empty_fields() {
        assert_eq!(split_escaped("a,,b,", ','), vec!["a", "", "b", ""]);
    }

    #[test]
    fn split_honours_escapes() {
        assert_eq!(split_escaped("x|,y,z||", ','), vec!["x,y", "z|"]);
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = scratch("missing");
        let _ = std::fs::remove_file(&path);

        let mut settings = Settings::default();
        load(&mut settings, &path).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
    }

    #[test]
    fn round_trip() {
        let path = scratch("round-trip");
        let settings = Settings {
            length: 40,
            number_of_strings: 7,
            uppercase: false,
            symbols: true,
            whitespace: true,
            repeat_chars: true,
            min_distinct_chars: 12,
            fill: true,
            output_file_path: "out/a,b|c.txt".to_string(),
            output_to_terminal: false,
            ..Settings::default()
        };
        save(&settings, &path).unwrap();

        let mut loaded = Settings::default();
        load(&mut loaded, &path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn unparsable_field_keeps_default() {
        let path = scratch("bad-field");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "abc,4,true,true,yes,true,false,true,3,false,\n").unwrap();

        let mut settings = Settings::default();
        load(&mut settings, &path).unwrap();
        assert_eq!(settings.length, Settings::default().length);
        assert_eq!(settings.digits, Settings::default().digits);
        assert_eq!(settings.number_of_strings, 4);
        assert!(settings.symbols && settings.repeat_chars);
        assert_eq!(settings.min_distinct_chars, 3);
    }

    #[test]
    fn malformed_file_rewritten() {
        let path = scratch("malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "1,2,3\n").unwrap();

        let mut settings = Settings::default();
        load(&mut settings, &path).unwrap();
        assert_eq!(settings, Settings::default());

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(split_escaped(contents.trim_end(), ',').len(), FIELDS);
    }
}
