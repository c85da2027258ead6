use std::error::Error;
use std::io::{Read, Write};

#[cfg(test)]
use std::ffi::OsString;

use clap::{crate_version, App, AppSettings, Arg, ArgMatches};

mod get_repository;
pub(crate) mod logging;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn Error>>;

pub(crate) fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("victor")
        .version(crate_version!())
        .about("Open git repositories and remember them for the rest of the session")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands)
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .value_name("FILTER")
                .takes_value(true)
                .env("VICTOR_LOG")
                .default_value("warn")
                .help("Log filter for messages written to stderr (e.g. debug, victor=info)"),
        )
        .subcommand(get_repository::subcommand())
}

pub(crate) struct Cli<'a> {
    pub arg_matches: ArgMatches<'a>,
    pub stdin: &'a mut dyn Read,
    pub stdout: &'a mut dyn Write,
}

impl<'a> Cli<'a> {
    pub fn run(&mut self) -> Result<()> {
        let matches = self.arg_matches.clone();
        // ^^ Need an independent copy of matches so we can still pass
        // the Cli struct through to subcommand imps.

        match matches.subcommand() {
            ("get-repository", Some(m)) => get_repository::run(self, m),
            _ => unreachable!(),
            // unreachable: Should have exited out with appropriate help or
            // error message if no subcommand was given.
        }
    }

    #[cfg(test)]
    pub fn run_with_stdin_and_args<I, T>(stdin: Vec<u8>, args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(|x| x.into()).collect();
        args.insert(0, OsString::from("victor"));

        let mut stdin = std::io::Cursor::new(stdin);
        let mut stdout = Vec::new();

        Cli {
            arg_matches: app().get_matches_from_safe(args)?,
            stdin: &mut stdin,
            stdout: &mut stdout,
        }
        .run()?;

        Ok(stdout)
    }

    #[cfg(test)]
    pub fn run_with_args<I, T>(args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::run_with_stdin_and_args(Vec::new(), args)
    }
}

impl<'a> Write for Cli<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;

    use super::Cli;

    #[test]
    fn no_subcommand_prints_help() {
        let mut cmd = Command::cargo_bin("victor").unwrap();
        cmd.assert()
            .failure()
            .stdout("")
            .stderr(predicate::str::starts_with("victor 0."))
            .stderr(predicate::str::contains("USAGE:"));
    }

    #[test]
    fn version() {
        let mut cmd = Command::cargo_bin("victor").unwrap();
        cmd.arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("victor 0."))
            .stderr("");
    }

    #[test]
    fn error_unknown_subcommand() {
        let err = Cli::run_with_args(vec!["bogus"]).unwrap_err();

        let errmsg = err.to_string();
        assert!(
            errmsg.contains("bogus"),
            "\nincorrect error message:\n\n{}",
            errmsg
        );
    }
}
