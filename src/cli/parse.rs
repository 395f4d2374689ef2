use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    MissingValue(String),
    UnknownArg(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
        }
    }
}

impl std::error::Error for ParseError {}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-u" | "--urandom" => flags.urandom = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "-f" | "--fill" => flags.fill = true,
            "-r" | "--repeat" => flags.repeat = true,
            "--no-repeat" => flags.no_repeat = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--symbols" => flags.symbols = true,
            "--spaces" => flags.spaces = true,
            "--digits-only" => flags.digits_only = true,
            "-l" | "--length" => flags.length = Some(number(args, &mut i)?),
            "-n" | "--number" => flags.number = Some(positive(args, &mut i)?),
            "-m" | "--min-distinct" => flags.min_distinct = Some(number(args, &mut i)?),
            "--seed" => flags.seed = Some(number(args, &mut i)?),
            "-o" | "--output" => {
                // Check if next arg exists and isn't another flag
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    // No path given, default to current dir
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Consume and parse the value following the flag at `args[*i]`.
fn number<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, ParseError> {
    let flag = &args[*i];
    *i += 1;
    let raw = args
        .get(*i)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))?;
    raw.parse()
        .map_err(|_| ParseError::InvalidNumber(raw.clone()))
}

fn positive(args: &[String], i: &mut usize) -> Result<usize, ParseError> {
    match number(args, i)? {
        0 => Err(ParseError::InvalidNumber(args[*i].clone())),
        n => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        std::iter::once("randchars")
            .chain(s.split_whitespace())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse(&args("")).unwrap(), CliFlags::default());
    }

    #[test]
    fn values_parsed() {
        let flags = parse(&args("-l 15 -n 3 -m 9 -r --digits-only --seed 42")).unwrap();
        assert_eq!(flags.length, Some(15));
        assert_eq!(flags.number, Some(3));
        assert_eq!(flags.min_distinct, Some(9));
        assert_eq!(flags.seed, Some(42));
        assert!(flags.repeat && flags.digits_only);
    }

    #[test]
    fn negative_length_parses() {
        assert_eq!(parse(&args("-l -1")).unwrap().length, Some(-1));
    }

    #[test]
    fn negative_count_rejected() {
        assert_eq!(
            parse(&args("-n -4")),
            Err(ParseError::InvalidNumber("-4".to_string()))
        );
    }

    #[test]
    fn zero_count_rejected() {
        assert_eq!(
            parse(&args("-n 0")),
            Err(ParseError::InvalidNumber("0".to_string()))
        );
    }

    #[test]
    fn missing_value_rejected() {
        assert_eq!(
            parse(&args("--length")),
            Err(ParseError::MissingValue("--length".to_string()))
        );
    }

    #[test]
    fn unknown_arg_rejected() {
        assert_eq!(
            parse(&args("--hex")),
            Err(ParseError::UnknownArg("--hex".to_string()))
        );
    }

    #[test]
    fn output_defaults_to_current_dir() {
        assert_eq!(parse(&args("-o -q")).unwrap().output.as_deref(), Some("."));
        assert_eq!(
            parse(&args("-o keys.txt")).unwrap().output.as_deref(),
            Some("keys.txt")
        );
    }
}
