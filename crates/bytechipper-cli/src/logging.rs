use stderrlog::{LogLevelNum, Timestamp};

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence log messages.
    #[clap(short, long, global = true)]
    pub quiet: bool,

    /// Raise the log level (-v, -vv, -vvv).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Enable timestamped logging.
    #[clap(long, global = true)]
    pub ts: bool,
}

/// Map a ``-v`` count onto a level; ``0`` keeps `default`.
fn log_level(
    verbose: u8,
    default: u8,
) -> LogLevelNum {
    match default.saturating_add(verbose) {
        0 => LogLevelNum::Off,
        1 => LogLevelNum::Error,
        2 => LogLevelNum::Warn,
        3 => LogLevelNum::Info,
        4 => LogLevelNum::Debug,
        _ => LogLevelNum::Trace,
    }
}

impl LogArgs {
    /// Install the ``stderrlog`` logger.
    ///
    /// ## Arguments
    /// * `default` - The level used without ``-v``; ``2`` is ``warn``.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), Box<dyn std::error::Error>> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(log_level(self.verbose, default))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()?;

        Ok(())
    }
}
