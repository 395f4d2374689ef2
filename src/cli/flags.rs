#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub urandom: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub fill: bool,
    pub repeat: bool,
    pub no_repeat: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub symbols: bool,
    pub spaces: bool,
    pub digits_only: bool,
    /// Kept signed so that negative input reaches request validation.
    pub length: Option<i64>,
    pub number: Option<usize>,
    pub min_distinct: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<String>,
}

impl CliFlags {
    pub fn has_class_args(&self) -> bool {
        self.no_upper
            || self.no_lower
            || self.no_digits
            || self.symbols
            || self.spaces
            || self.digits_only
    }
}
