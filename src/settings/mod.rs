//! Generation settings.

mod file;

use std::path::{Path, PathBuf};

use crate::chars::{CharClasses, Request};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub number_of_strings: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub whitespace: bool,
    pub repeat_chars: bool,
    pub min_distinct_chars: usize,
    pub fill: bool,
    pub output_file_path: String,
    pub output_to_terminal: bool,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        Self::load_from(&file::default_path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        self.save_to(&file::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        file::save(self, path)
    }

    pub fn path() -> PathBuf {
        file::default_path()
    }

    pub fn classes(&self) -> CharClasses {
        CharClasses {
            uppercase: self.uppercase,
            lowercase: self.lowercase,
            digits: self.digits,
            symbols: self.symbols,
            whitespace: self.whitespace,
        }
    }

    pub fn set_classes(&mut self, classes: CharClasses) {
        self.uppercase = classes.uppercase;
        self.lowercase = classes.lowercase;
        self.digits = classes.digits;
        self.symbols = classes.symbols;
        self.whitespace = classes.whitespace;
    }

    pub fn request(&self) -> Request {
        Request::new(self.length)
            .classes(self.classes())
            .repeat_chars(self.repeat_chars)
            .min_distinct_chars(self.min_distinct_chars)
    }
}

impl Default for Settings {
    fn default() -> Self {
        let classes = CharClasses::default();
        Self {
            length: 16,
            number_of_strings: 1,
            uppercase: classes.uppercase,
            lowercase: classes.lowercase,
            digits: classes.digits,
            symbols: classes.symbols,
            whitespace: classes.whitespace,
            repeat_chars: false,
            min_distinct_chars: 1,
            fill: false,
            output_file_path: String::new(),
            output_to_terminal: true,
            to_clipboard: false,
        }
    }
}
