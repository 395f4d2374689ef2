//! CLI context - bundles settings, flags, and clipboard state.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use copypasta::{ClipboardContext, ClipboardProvider};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use zeroize::Zeroize;

use randchars::settings::Settings;
use randchars::{CharClasses, Error, Rand, fill_with_random_strings, random_string};

use super::{CliFlags, ParseError, prompts, quiet, text};

/// Why the CLI stopped early.
#[derive(Debug)]
pub enum Failure {
    Parse(ParseError),
    Generate(Error),
    Io(std::io::Error),
    /// User declined to continue. Not an error.
    Aborted,
}

impl Failure {
    pub fn status(&self) -> u8 {
        match self {
            Failure::Parse(_) | Failure::Generate(_) => 1,
            Failure::Io(_) => 2,
            Failure::Aborted => 0,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Failure::Parse(e) => write!(f, "{} (try --help)", e),
            Failure::Generate(e) => write!(f, "{}", e),
            Failure::Io(e) => write!(f, "I/O error: {}", e),
            Failure::Aborted => write!(f, "Aborted"),
        }
    }
}

impl From<Error> for Failure {
    fn from(e: Error) -> Self {
        Failure::Generate(e)
    }
}

impl From<std::io::Error> for Failure {
    fn from(e: std::io::Error) -> Self {
        Failure::Io(e)
    }
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self, Failure> {
        let flags = super::parse(args).map_err(Failure::Parse)?;
        Ok(Self {
            settings: Settings::default(),
            clipboard: None,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), Failure> {
        quiet::set(self.flags.quiet);
        if self.handle_info_flags() {
            return Ok(());
        }
        self.load_settings();
        self.apply_flags()?;
        self.handle_save(&Settings::path())?;
        self.handle_clipboard()?;

        let (mut rng, source) = self.rng();
        log::debug!("entropy source: {}", source);

        let mut strings = self.generate(rng.as_mut())?;
        let result = self.write_output(&strings);
        strings.iter_mut().for_each(Zeroize::zeroize);
        result?;

        if !quiet::enabled() && !self.settings.output_to_terminal {
            text::print_summary(&self.settings, strings.len(), source);
        }
        Ok(())
    }

    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            text::print_help();
            return true;
        }
        if self.flags.version {
            println!("randchars {}", env!("CARGO_PKG_VERSION"));
            return true;
        }
        false
    }

    fn load_settings(&mut self) {
        if !self.flags.saved {
            return;
        }
        self.settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {}", e));
            Settings::default()
        });
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<(), Failure> {
        if let Some(len) = self.flags.length {
            self.settings.length = match usize::try_from(len) {
                Ok(len) if len > 0 => len,
                _ => {
                    return Err(Error::InvalidConfiguration(format!(
                        "length must be at least 1, got {}",
                        len
                    ))
                    .into());
                }
            };
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_strings = num;
        }
        if let Some(min) = self.flags.min_distinct {
            self.settings.min_distinct_chars = min;
        }
        if self.flags.fill {
            self.settings.fill = true;
            self.settings.repeat_chars = true;
        }
        if self.flags.repeat {
            self.settings.repeat_chars = true;
        }
        if self.flags.no_repeat {
            self.settings.repeat_chars = false;
        }
        if self.settings.number_of_strings == 0 {
            return Err(Error::InvalidArgument("number of strings must be at least 1".into()).into());
        }

        // Apply character class flags
        if self.flags.digits_only {
            self.settings.set_classes(CharClasses::digits_only());
        } else if self.flags.has_class_args() {
            let mut classes = self.settings.classes();
            classes.uppercase &= !self.flags.no_upper;
            classes.lowercase &= !self.flags.no_lower;
            classes.digits &= !self.flags.no_digits;
            classes.symbols |= self.flags.symbols;
            classes.whitespace |= self.flags.spaces;
            self.settings.set_classes(classes);
        }

        // Apply output file
        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = if path.ends_with('/') || path == "." {
                if path == "." {
                    "rand_strings.txt".to_string()
                } else {
                    format!("{}rand_strings.txt", path)
                }
            } else {
                path.clone()
            };
        }
        self.settings.output_to_terminal = self.settings.output_file_path.is_empty();

        Ok(())
    }

    /// Persist settings, but only ones that can actually generate.
    fn handle_save(&self, path: &Path) -> Result<(), Failure> {
        if !self.flags.save {
            return Ok(());
        }
        self.settings.request().validated_pool()?;
        match self.settings.save_to(path) {
            Ok(()) => prompts::settings_saved(&path.display().to_string()),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
        Ok(())
    }

    fn handle_clipboard(&mut self) -> Result<(), Failure> {
        if !self.flags.clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => {
                self.clipboard = Some(c);
                self.settings.to_clipboard = true;
                self.settings.output_to_terminal = false;
                Ok(())
            }
            Err(_) => {
                if prompts::clipboard_fallback_prompt() {
                    self.settings.to_clipboard = false;
                    Ok(())
                } else {
                    Err(Failure::Aborted)
                }
            }
        }
    }

    fn rng(&self) -> (Box<dyn RngCore>, &'static str) {
        if let Some(seed) = self.flags.seed {
            (Box::new(StdRng::seed_from_u64(seed)), "fixed seed")
        } else if self.flags.urandom {
            (Box::new(StdRng::from_os_rng()), "operating system")
        } else {
            (Box::new(Rand::new()), randchars::rng::entropy_source())
        }
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Result<Vec<String>, Failure> {
        let request = self.settings.request();
        let count = self.settings.number_of_strings;

        if self.settings.fill {
            let mut strings = vec![String::new(); count];
            fill_with_random_strings(&mut strings, |slot, s| *slot = s, &request, rng)?;
            return Ok(strings);
        }

        let mut strings = Vec::with_capacity(count);
        for _ in 0..count {
            strings.push(random_string(&request, rng)?);
        }
        Ok(strings)
    }

    fn write_output(&mut self, strings: &[String]) -> Result<(), Failure> {
        if let Some(ctx) = self.clipboard.as_mut() {
            let mut joined = strings.join("\n");
            let copied = ctx.set_contents(joined.clone());
            joined.zeroize();
            match copied {
                Ok(()) => prompts::clipboard_copied(),
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            return Ok(());
        }

        if !self.settings.output_file_path.is_empty() {
            let path = Path::new(&self.settings.output_file_path);
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            write_lines(BufWriter::new(file), strings)?;
            let full_path = std::fs::canonicalize(path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| self.settings.output_file_path.clone());
            prompts::strings_written(strings.len(), &full_path);
            return Ok(());
        }

        let stdout = std::io::stdout();
        write_lines(BufWriter::new(stdout.lock()), strings)?;
        Ok(())
    }
}

fn write_lines<W: Write>(mut out: W, strings: &[String]) -> std::io::Result<()> {
    for s in strings {
        out.write_all(s.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(s: &str) -> Context {
        let args: Vec<String> = std::iter::once("randchars")
            .chain(s.split_whitespace())
            .map(String::from)
            .collect();
        let mut ctx = Context::new(&args).unwrap();
        ctx.apply_flags().unwrap();
        ctx
    }

    #[test]
    fn negative_length_is_invalid_configuration() {
        let args: Vec<String> = ["randchars", "-l", "-1"].map(String::from).to_vec();
        let mut ctx = Context::new(&args).unwrap();
        assert!(matches!(
            ctx.apply_flags(),
            Err(Failure::Generate(Error::InvalidConfiguration(_)))
        ));
    }

    #[test]
    fn class_flags_adjust_defaults() {
        let ctx = context("--no-upper --symbols --spaces");
        let classes = ctx.settings.classes();
        assert!(!classes.uppercase);
        assert!(classes.lowercase && classes.digits && classes.symbols && classes.whitespace);
    }

    #[test]
    fn digits_only_overrides_other_classes() {
        let ctx = context("--symbols --digits-only");
        assert_eq!(ctx.settings.classes(), CharClasses::digits_only());
    }

    #[test]
    fn output_path_defaults() {
        assert_eq!(context("-o").settings.output_file_path, "rand_strings.txt");
        assert_eq!(context("-o out/").settings.output_file_path, "out/rand_strings.txt");
        let ctx = context("-o keys.txt");
        assert_eq!(ctx.settings.output_file_path, "keys.txt");
        assert!(!ctx.settings.output_to_terminal);
    }

    #[test]
    fn seeded_generation_repeats() {
        let ctx = context("--seed 7 -n 5 -l 12 -r -m 4");
        let (mut a, _) = ctx.rng();
        let (mut b, _) = ctx.rng();
        assert_eq!(
            ctx.generate(a.as_mut()).unwrap(),
            ctx.generate(b.as_mut()).unwrap()
        );
    }

    #[test]
    fn fill_mode_yields_permutations() {
        let ctx = context("--seed 3 -n 10 -l 8 -f");
        let (mut rng, _) = ctx.rng();
        let strings = ctx.generate(rng.as_mut()).unwrap();
        assert_eq!(strings.len(), 10);
        let sorted = |s: &String| {
            let mut v: Vec<char> = s.chars().collect();
            v.sort_unstable();
            v
        };
        assert!(strings.iter().all(|s| sorted(s) == sorted(&strings[0])));
    }

    #[test]
    fn fill_defaults_to_repeats() {
        let ctx = context("--seed 1 -f -n 3 -l 70");
        assert!(ctx.settings.repeat_chars);
        let (mut rng, _) = ctx.rng();
        let strings = ctx.generate(rng.as_mut()).unwrap();
        assert_eq!(strings.len(), 3);
        assert!(strings.iter().all(|s| s.chars().count() == 70));
    }

    #[test]
    fn fill_without_repeats_on_request() {
        let ctx = context("--seed 1 -f --no-repeat -n 3 -l 70");
        assert!(!ctx.settings.repeat_chars);
        let (mut rng, _) = ctx.rng();
        assert!(matches!(
            ctx.generate(rng.as_mut()),
            Err(Failure::Generate(Error::InvalidConfiguration(_)))
        ));
    }

    #[test]
    fn zero_count_from_saved_settings_rejected() {
        let args: Vec<String> = ["randchars"].map(String::from).to_vec();
        let mut ctx = Context::new(&args).unwrap();
        ctx.settings.number_of_strings = 0;
        assert!(matches!(
            ctx.apply_flags(),
            Err(Failure::Generate(Error::InvalidArgument(_)))
        ));
    }

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("randchars-cli-{}-{}", std::process::id(), name))
            .join("settings")
    }

    #[test]
    fn unusable_settings_not_saved() {
        let path = scratch("unusable");
        let _ = std::fs::remove_file(&path);
        let ctx = context("--save --digits-only -l 50");
        assert!(matches!(
            ctx.handle_save(&path),
            Err(Failure::Generate(Error::InvalidConfiguration(_)))
        ));
        assert!(!path.exists());
    }

    #[test]
    fn valid_settings_saved() {
        let path = scratch("valid");
        let ctx = context("--save -l 20 --symbols");
        ctx.handle_save(&path).unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.length, 20);
        assert!(loaded.symbols);
    }

    #[test]
    fn impossible_request_surfaces_error() {
        let ctx = context("--seed 1 --digits-only -l 50");
        let (mut rng, _) = ctx.rng();
        assert!(matches!(
            ctx.generate(rng.as_mut()),
            Err(Failure::Generate(Error::InvalidConfiguration(_)))
        ));
    }

    #[test]
    fn exit_codes() {
        assert_eq!(Failure::Parse(ParseError::UnknownArg("-x".into())).status(), 1);
        assert_eq!(Failure::Generate(Error::InvalidArgument("x".into())).status(), 1);
        assert_eq!(Failure::Io(std::io::Error::other("disk")).status(), 2);
        assert_eq!(Failure::Aborted.status(), 0);
    }
}
