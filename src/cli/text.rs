use randchars::chars::pool;
use randchars::settings::Settings;

use crate::terminal::{
    box_bottom, box_line, box_line_center, box_opt, box_top, calculate_entropy,
    entropy_strength, format_number,
};

pub fn print_help() {
    box_top("Randchars");
    box_line_center("Constrained random string generator");
    box_line("");
    box_line("USAGE:");
    box_line("  randchars [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" String:");
    box_opt("  -l, --length <N>", "Characters per string (default: 16)");
    box_opt("  -n, --number <N>", "How many strings to generate, at least 1 (default: 1)");
    box_opt("  -r, --repeat", "Allow repeated characters");
    box_opt("  -m, --min-distinct <N>", "With --repeat, minimum distinct characters per string (default: 1)");
    box_opt("      --no-repeat", "Forbid repeated characters (overrides --fill's default)");
    box_opt("  -f, --fill", "Generate one string and hand out reshuffled permutations of it. Allows repeats unless --no-repeat is given");
    box_line("");
    box_line(" Characters:");
    box_opt("      --no-upper", "Exclude uppercase letters");
    box_opt("      --no-lower", "Exclude lowercase letters");
    box_opt("      --no-digits", "Exclude digits");
    box_opt("      --symbols", "Include punctuation and symbols");
    box_opt("      --spaces", "Include the space character");
    box_opt("      --digits-only", "Digits 0-9 only");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output [FILE]", "Append to file (default: rand_strings.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress all output except the strings");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from saved settings");
    box_opt("      --save", "Save the effective settings as defaults");
    box_line("");
    box_line(" Entropy:");
    box_opt("  -u, --urandom", "Use operating system entropy instead of the cycle counter");
    box_opt("      --seed <N>", "Deterministic output from a fixed seed");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  randchars -l 20 -n 3             Three strings, 20 characters each");
    box_line("  randchars --digits-only -l 6     Six distinct digits");
    box_line("  randchars -l 15 -r -m 9 --digits-only");
    box_line("                                   15 digits, at least 9 distinct");
    box_line("  randchars -l 12 -n 100 -f -o     100 permutations to rand_strings.txt");
    box_line("");
    box_bottom();
    println!();
}

pub fn print_summary(settings: &Settings, count: usize, source: &str) {
    let pool_size = pool::size(&settings.classes());
    let entropy = calculate_entropy(settings.length, pool_size, settings.repeat_chars);

    println!();
    box_top("Complete");
    box_line(&format!("{} string(s) generated", format_number(count)));
    box_line(&format!(
        "{:.1} bits each ({})",
        entropy,
        entropy_strength(entropy)
    ));
    box_line(&format!("Source: {} • Pool: {} chars", source, pool_size));
    if settings.fill {
        box_line("Fill mode: permutations of one shared string");
    }
    box_bottom();
    println!();
}
