// cli
pub const PROGRAM_NAME: &str = "ps1-4git";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// exit codes
pub const EXIT_OK: i32 = 0;
pub const EXIT_IO_ERROR: i32 = 1;
/// same code `git status` exits with outside a repository
pub const EXIT_NOT_A_REPOSITORY: i32 = 128;

// .bashrc
pub const PS1_SETUP_STRING: &str = "PS1=\"$PS1\\$(git status 2>&1 | ps1-4git)\"  # ps1-4git-MARKER: Do NOT remove marker\n";
