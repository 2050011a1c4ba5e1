use clap::Parser;

/// ps1-4git: fancy git dash(board) in the prompt
///
/// Reads `git status` output on stdin and prints a short, coloured
/// fragment for the end of a PS1 prompt, e.g.:
///
///   PS1="$PS1\$(git status 2>&1 | ps1-4git)"
#[derive(Parser, Debug)]
#[command(name = "ps1-4git", about, disable_version_flag = true)]
pub struct Cli {
    /// ascii only output (no fancy arrows or bullets)
    #[arg(short = 'n', long)]
    pub no_unicode: bool,

    /// show program version
    #[arg(short = 'v', long, conflicts_with_all = ["no_unicode", "bashrc"])]
    pub version: bool,

    /// print a PS1 definition suitable for inclusion in .bashrc
    #[arg(long = "4bashrc", conflicts_with = "no_unicode")]
    pub bashrc: bool,
}

/// what a single invocation should do
#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Version,
    Bashrc,
    Prompt { plain: bool },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn mode(&self) -> Mode {
        if self.version {
            Mode::Version
        } else if self.bashrc {
            Mode::Bashrc
        } else {
            Mode::Prompt {
                plain: self.no_unicode,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn mode_of(args: &[&str]) -> Mode {
        Cli::try_parse_from(args).unwrap().mode()
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_is_decorated_prompt() {
        assert_eq!(mode_of(&["ps1-4git"]), Mode::Prompt { plain: false });
    }

    #[test]
    fn test_no_unicode_flags() {
        assert_eq!(mode_of(&["ps1-4git", "-n"]), Mode::Prompt { plain: true });
        assert_eq!(
            mode_of(&["ps1-4git", "--no-unicode"]),
            Mode::Prompt { plain: true }
        );
    }

    #[test]
    fn test_info_flags() {
        assert_eq!(mode_of(&["ps1-4git", "-v"]), Mode::Version);
        assert_eq!(mode_of(&["ps1-4git", "--version"]), Mode::Version);
        assert_eq!(mode_of(&["ps1-4git", "--4bashrc"]), Mode::Bashrc);
    }

    #[test]
    fn test_conflicting_flags_are_rejected() {
        let err = Cli::try_parse_from(["ps1-4git", "-v", "-n"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err = Cli::try_parse_from(["ps1-4git", "--4bashrc", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_unknown_argument_is_rejected() {
        let err = Cli::try_parse_from(["ps1-4git", "--colour"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);
    }
}
