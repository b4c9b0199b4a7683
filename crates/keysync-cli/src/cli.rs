//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use keysync_core::Overrides;

/// keysync - Keep locale documents in step with a reference locale
///
/// Every `*.json` document in DIRECTORY is compared with REFERENCE_LOCALE.json.
/// Keys missing from a document are copied in from the reference, keys only a
/// document has are reported, and all files are written back with normalized
/// key order.
///
/// Examples:
///   keysync en locales/
///   keysync en locales/ --check-only
///   keysync en locales/ --keep-order-depth 1 --exclusions "meta.generated, plurals"
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "keysync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Locale id of the reference document (REFERENCE_LOCALE.json)
    pub reference_locale: String,

    /// Directory holding the locale documents
    pub directory: PathBuf,

    /// Report discrepancies without writing any file
    #[arg(long)]
    pub check_only: bool,

    /// Number of top levels whose key order is kept; deeper levels are sorted
    #[arg(long, value_name = "N")]
    pub keep_order_depth: Option<u32>,

    /// Comma-separated key paths to leave out of the comparison (e.g. "a.b, c")
    #[arg(long, value_name = "PATHS")]
    pub exclusions: Option<String>,

    /// Config file to use instead of DIRECTORY/keysync.toml
    #[arg(long, value_name = "FILE", env = "KEYSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the sync report as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The command-line layer of the configuration.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            check_only: self.check_only,
            keep_order_depth: self.keep_order_depth,
            exclusions: self.exclusions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("keysync").chain(args.iter().copied()))
    }

    #[test]
    fn test_positional_arguments() {
        let cli = parse(&["en", "locales"]).unwrap();
        assert_eq!(cli.reference_locale, "en");
        assert_eq!(cli.directory, PathBuf::from("locales"));
        assert!(!cli.check_only);
        assert_eq!(cli.overrides(), Overrides::default());
    }

    #[test]
    fn test_all_flags() {
        let cli = parse(&[
            "en",
            "locales",
            "--check-only",
            "--keep-order-depth",
            "2",
            "--exclusions",
            "a.b, c",
            "--json",
            "-v",
        ])
        .unwrap();

        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(
            cli.overrides(),
            Overrides {
                check_only: true,
                keep_order_depth: Some(2),
                exclusions: Some("a.b, c".to_string()),
            }
        );
    }

    #[test]
    fn test_flags_before_positionals() {
        let cli = parse(&["--check-only", "en", "locales"]).unwrap();
        assert!(cli.check_only);
        assert_eq!(cli.reference_locale, "en");
    }

    #[test]
    fn test_rejects_bad_depth() {
        assert!(parse(&["en", "locales", "--keep-order-depth", "two"]).is_err());
        assert!(parse(&["en", "locales", "--keep-order-depth", "-1"]).is_err());
        assert!(parse(&["en", "locales", "--keep-order-depth"]).is_err());
    }

    #[test]
    fn test_requires_positionals() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["en"]).is_err());
    }

    #[test]
    fn test_exclusions_requires_value() {
        assert!(parse(&["en", "locales", "--exclusions"]).is_err());
    }
}
