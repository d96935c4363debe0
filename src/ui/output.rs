//! Output verbosity.

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show per-module progress in addition to results.
    Verbose,
    /// Show results and summaries.
    #[default]
    Normal,
    /// Show only reports and errors.
    Quiet,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Pick the mode from the global `--verbose`/`--quiet` flags.
    ///
    /// `--quiet` wins when both are given.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows per-module progress.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_from_str() {
        assert_eq!("verbose".parse::<OutputMode>(), Ok(OutputMode::Verbose));
        assert_eq!("QUIET".parse::<OutputMode>(), Ok(OutputMode::Quiet));
        assert!("silent".parse::<OutputMode>().is_err());
    }

    #[test]
    fn output_mode_from_flags() {
        assert_eq!(OutputMode::from_flags(false, false), OutputMode::Normal);
        assert_eq!(OutputMode::from_flags(true, false), OutputMode::Verbose);
        assert_eq!(OutputMode::from_flags(true, true), OutputMode::Quiet);
    }

    #[test]
    fn output_mode_shows_details() {
        assert!(OutputMode::Verbose.shows_details());
        assert!(!OutputMode::Normal.shows_details());
        assert!(!OutputMode::Quiet.shows_details());
    }

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Verbose.shows_status());
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
