use simplelog::*;

/// Logs go to stderr so they never interleave with the game dialogue on stdout.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )])
}
