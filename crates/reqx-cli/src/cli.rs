use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Export locked Python dependencies to requirements files",
    disable_help_subcommand = true
)]
pub struct ReqxCli {
    #[arg(
        short,
        long,
        help = "Suppress human output (errors still print to stderr)",
        global = true
    )]
    pub quiet: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase logging (-vv reaches trace)", global = true)]
    pub verbose: u8,
    #[arg(long, help = "Force trace logging regardless of -v/-q", global = true)]
    pub trace: bool,
    #[arg(
        long,
        help = "Emit {status,message,details} JSON envelopes",
        global = true
    )]
    pub json: bool,
    #[arg(long, help = "Disable colored human output", global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: CommandGroupCli,
}

#[derive(Subcommand, Debug)]
pub enum CommandGroupCli {
    #[command(
        about = "Export locked packages to a requirements file",
        long_about = "Export locked packages to a requirements.txt file.\n\nIf you do not specify a path, it will be saved along the pyproject.toml file."
    )]
    Export(ExportArgs),
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(value_name = "PATH", help = "The path to create the requirements at")]
    pub path: Option<PathBuf>,
    #[arg(short = 'D', long, help = "Export development packages")]
    pub dev: bool,
    #[arg(short = 'T', long, help = "Use tag instead of commit hash for vcs packages")]
    pub tag: bool,
    #[arg(short = 'E', long, help = "Add an egg name for vcs packages")]
    pub egg: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_export_flags() {
        let cli = ReqxCli::parse_from(["reqx", "--json", "export", "out/reqs.txt", "-D", "-E"]);
        assert!(cli.json);
        let CommandGroupCli::Export(args) = cli.command;
        assert_eq!(args.path, Some(PathBuf::from("out/reqs.txt")));
        assert!(args.dev);
        assert!(!args.tag);
        assert!(args.egg);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        ReqxCli::command().debug_assert();
    }
}
