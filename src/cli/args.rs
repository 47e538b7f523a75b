//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use linkgen::ReferenceType;
use linkgen::content::ObjectId;
use std::path::PathBuf;

/// Canonical, localized links for content objects
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "linkgen.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate the link of one object
    #[command(visible_alias = "l")]
    Link {
        #[command(flatten)]
        args: LinkArgs,
    },

    /// Generate links for every object a target accepts
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },

    /// Slugify text with the configured slug settings
    #[command(visible_alias = "s")]
    Slug {
        /// Text to slugify (multiple words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },
}

/// Link command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct LinkArgs {
    /// Object id from the content fixture
    pub object: ObjectId,

    /// Target name from [[targets]] (optional with a single target)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Locale instead of [site] locale
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Document path to resolve the anchor from
    #[arg(short, long)]
    pub document: Option<String>,

    /// Object id to start the ancestor walk from
    #[arg(short, long)]
    pub parent: Option<ObjectId>,

    /// Document path of the simulated current request
    #[arg(short, long)]
    pub request: Option<String>,

    /// Reference type: 0 (absolute-url), 1 (absolute-path), 2 (relative-path), 3 (network-path)
    #[arg(short = 'R', long, value_parser = parse_reference_type)]
    pub reference_type: Option<ReferenceType>,
}

/// List command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Target name from [[targets]] (optional with a single target)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Locales to generate (comma-separated, default: [site] locale)
    #[arg(short, long, value_delimiter = ',')]
    pub locale: Vec<String>,

    /// Reference type applied to every link
    #[arg(short = 'R', long, value_parser = parse_reference_type)]
    pub reference_type: Option<ReferenceType>,

    /// Output JSON instead of tab-separated lines
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,
}

/// Accept a numeric code or its kebab-case name.
fn parse_reference_type(value: &str) -> Result<ReferenceType, String> {
    if let Ok(code) = value.parse::<u8>() {
        return ReferenceType::from_code(code)
            .ok_or_else(|| format!("unknown reference type code {code} (expected 0-3)"));
    }
    (0..4)
        .filter_map(ReferenceType::from_code)
        .find(|reference_type| reference_type.to_string() == value)
        .ok_or_else(|| format!("unknown reference type '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_link() {
        let cli = Cli::try_parse_from([
            "linkgen", "link", "42", "--target", "product", "-l", "de", "-R", "0",
        ])
        .unwrap();
        let Commands::Link { args } = cli.command else {
            unreachable!()
        };
        assert_eq!(args.object, 42);
        assert_eq!(args.target.as_deref(), Some("product"));
        assert_eq!(args.locale.as_deref(), Some("de"));
        assert_eq!(args.reference_type, Some(ReferenceType::AbsoluteUrl));
        assert_eq!(cli.config, PathBuf::from("linkgen.toml"));
    }

    #[test]
    fn test_parse_list_locales() {
        let cli = Cli::try_parse_from(["linkgen", "--verbose", "ls", "-l", "en,de", "-j"]).unwrap();
        assert!(cli.verbose);
        let Commands::List { args } = cli.command else {
            unreachable!()
        };
        assert_eq!(args.locale, vec!["en", "de"]);
        assert!(args.json);
    }

    #[test]
    fn test_parse_slug_words() {
        let cli = Cli::try_parse_from(["linkgen", "slug", "Café", "Müller"]).unwrap();
        let Commands::Slug { text } = cli.command else {
            unreachable!()
        };
        assert_eq!(text.join(" "), "Café Müller");
        assert!(Cli::try_parse_from(["linkgen", "slug"]).is_err());
    }

    #[test]
    fn test_reference_type_values() {
        assert_eq!(parse_reference_type("2"), Ok(ReferenceType::RelativePath));
        assert_eq!(
            parse_reference_type("absolute-url"),
            Ok(ReferenceType::AbsoluteUrl)
        );
        assert!(parse_reference_type("7").is_err());
        assert!(parse_reference_type("relative").is_err());
    }

    #[test]
    fn test_pretty_requires_json() {
        assert!(Cli::try_parse_from(["linkgen", "list", "--pretty"]).is_err());
    }
}
