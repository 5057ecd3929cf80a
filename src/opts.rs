//! CLI options.

use std::path::PathBuf;

use clap::Parser;

mod parsers;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Opts {
    /// Whitespace-delimited text file, prompted for when omitted
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Sentry DSN
    #[arg(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry
    #[arg(
        long,
        default_value = "0",
        env = "TRACES_SAMPLE_RATE",
        value_parser = parsers::sample_rate,
    )]
    pub traces_sample_rate: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_optional_ok() -> crate::Result {
        let opts = Opts::try_parse_from(["column-average"])?;
        assert!(opts.path.is_none());
        Ok(())
    }

    #[test]
    fn path_ok() -> crate::Result {
        let opts = Opts::try_parse_from(["column-average", "data.txt"])?;
        assert_eq!(opts.path, Some(PathBuf::from("data.txt")));
        Ok(())
    }

    #[test]
    fn invalid_sample_rate_fails() {
        let result =
            Opts::try_parse_from(["column-average", "--traces-sample-rate", "1.5", "data.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn command_ok() {
        use clap::CommandFactory;
        Opts::command().debug_assert();
    }
}
