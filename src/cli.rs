use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::term::BellMode;

pub const USAGE: &str = "\
Usage: mini-platformer [OPTIONS]

Options:
  --levels <dir>              Directory with level .txt files [default: levels]
  --save <path>               Progress file [default: save.json]
  --log <path>                Write logs to this file (or set PLATFORMER_LOG)
  --bell <off|events|all>     Terminal bell for sound effects [default: events]
  -h, --help                  Print this help

Controls: arrows/WASD/HJKL to move, Space/Up to jump, Enter, Esc, q to quit.
Physics and viewport can be tuned with PLATFORMER_* environment variables.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub levels: PathBuf,
    pub save: PathBuf,
    pub log: Option<PathBuf>,
    pub bell: BellMode,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            levels: PathBuf::from("levels"),
            save: PathBuf::from("save.json"),
            log: None,
            bell: BellMode::default(),
        }
    }
}

/// Parse arguments (without the program name). `Ok(None)` means help was
/// requested.
pub fn parse_args(args: &[String]) -> Result<Option<Options>> {
    let mut opts = Options::default();
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        if matches!(flag, "-h" | "--help") {
            return Ok(None);
        }
        i += 1;
        let value = args
            .get(i)
            .ok_or_else(|| anyhow!("missing value for {}", flag));
        match flag {
            "--levels" => opts.levels = PathBuf::from(value?),
            "--save" => opts.save = PathBuf::from(value?),
            "--log" => opts.log = Some(PathBuf::from(value?)),
            "--bell" => opts.bell = value?.parse()?,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(Some(opts))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        assert_eq!(parse_args(&[]).unwrap(), Some(Options::default()));
    }

    #[test]
    fn parses_every_flag() {
        let opts = parse_args(&args(&[
            "--levels", "maps", "--save", "/tmp/s.json", "--log", "game.log", "--bell", "all",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(opts.levels, PathBuf::from("maps"));
        assert_eq!(opts.save, PathBuf::from("/tmp/s.json"));
        assert_eq!(opts.log, Some(PathBuf::from("game.log")));
        assert_eq!(opts.bell, BellMode::All);
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse_args(&args(&["--levels", "x", "--help"])).unwrap(), None);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_args(&args(&["--levels"])).is_err());
        assert!(parse_args(&args(&["--bell", "loud"])).is_err());
        assert!(parse_args(&args(&["--frobnicate", "1"])).is_err());
    }
}
