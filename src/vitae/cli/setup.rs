use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vitae::export::ExportFormat;
use vitae::model::Template;

/// Returns the version string, with the git hash appended for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("VITAE_GIT_HASH");
    const IS_RELEASE: &str = env!("VITAE_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "vitae", bin_name = "vitae", version = get_version())]
#[command(about = "Build and export a structured resume", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding resume.json and config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Preview the rendered resume
    #[command(alias = "preview", display_order = 1)]
    Show {
        /// Render with this template without changing the selection
        #[arg(long, short)]
        template: Option<Template>,
    },

    /// Show or update personal information
    #[command(alias = "personal", display_order = 2)]
    Info {
        /// Field assignment, e.g. --set fullName="Ada Lovelace" (repeatable)
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_pair)]
        set: Vec<(String, String)>,
    },

    /// Manage education entries
    #[command(subcommand, alias = "edu", display_order = 10)]
    Education(EntryCommands),

    /// Manage work experience entries
    #[command(subcommand, alias = "exp", display_order = 11)]
    Experience(EntryCommands),

    /// Manage skills
    #[command(subcommand, alias = "skills", display_order = 12)]
    Skill(EntryCommands),

    /// Manage projects
    #[command(subcommand, alias = "projects", display_order = 13)]
    Project(EntryCommands),

    /// Show or select the presentation template
    #[command(display_order = 20)]
    Template {
        /// modern, classic or minimal
        name: Option<String>,
    },

    /// Write the resume to a file
    #[command(display_order = 21)]
    Export {
        /// md or html (defaults to the export_format setting)
        #[arg(long, short)]
        format: Option<ExportFormat>,

        /// Target file or directory (defaults to the current directory)
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Write the current resume to disk
    #[command(display_order = 30)]
    Save,

    /// Reload the resume from disk
    #[command(display_order = 31)]
    Load,

    /// Discard all resume data
    #[command(display_order = 32)]
    Reset {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Get or set configuration
    #[command(display_order = 40)]
    Config {
        /// Configuration key (e.g., list_width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Subcommands shared by every entry collection.
#[derive(Subcommand, Debug)]
pub enum EntryCommands {
    /// List entries with their positions
    #[command(alias = "ls")]
    List,

    /// Add an entry
    #[command(alias = "new")]
    Add(FieldArgs),

    /// Edit an entry by position or id
    #[command(alias = "e")]
    Edit {
        /// Position from `list` (1-based) or entry id
        selector: String,

        #[command(flatten)]
        fields: FieldArgs,

        /// Remove the Nth item of a list field, e.g. --drop highlights=2 (repeatable)
        #[arg(long = "drop", value_name = "FIELD=N", value_parser = parse_index)]
        drop: Vec<(String, usize)>,
    },

    /// Remove an entry by position or id
    #[command(alias = "rm")]
    Remove {
        /// Position from `list` (1-based) or entry id
        selector: String,

        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Field assignment, e.g. --set institution=MIT (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_pair)]
    pub set: Vec<(String, String)>,

    /// Append to a list field, e.g. --push highlights="Led the team" (repeatable)
    #[arg(long = "push", value_name = "FIELD=ITEM", value_parser = parse_pair)]
    pub push: Vec<(String, String)>,
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got `{}`", s))?;
    if field.trim().is_empty() {
        return Err(format!("missing field name in `{}`", s));
    }
    Ok((field.trim().to_string(), value.to_string()))
}

fn parse_index(s: &str) -> Result<(String, usize), String> {
    let (field, index) = parse_pair(s)?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("expected a position after `=`, got `{}`", index))?;
    Ok((field, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_entry_edit() {
        let cli = Cli::try_parse_from([
            "vitae",
            "experience",
            "edit",
            "2",
            "--set",
            "position=Lead Engineer",
            "--push",
            "highlights=Shipped v2",
            "--drop",
            "highlights=1",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Experience(EntryCommands::Edit {
                selector,
                fields,
                drop,
            })) => {
                assert_eq!(selector, "2");
                assert_eq!(
                    fields.set,
                    vec![("position".to_string(), "Lead Engineer".to_string())]
                );
                assert_eq!(
                    fields.push,
                    vec![("highlights".to_string(), "Shipped v2".to_string())]
                );
                assert_eq!(drop, vec![("highlights".to_string(), 1)]);
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn values_may_contain_equals() {
        assert_eq!(
            parse_pair("summary=a=b").unwrap(),
            ("summary".to_string(), "a=b".to_string())
        );
        assert!(parse_pair("summary").is_err());
        assert!(parse_pair("=x").is_err());
        assert!(parse_index("highlights=two").is_err());
    }

    #[test]
    fn template_and_format_are_typed() {
        let cli = Cli::try_parse_from(["vitae", "show", "--template", "classic"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Show {
                template: Some(Template::Classic)
            })
        ));

        assert!(Cli::try_parse_from(["vitae", "export", "--format", "pdf"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["vitae", "save", "--data", "/tmp/x", "-v"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }
}
