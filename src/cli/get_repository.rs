use std::{
    io::{BufRead, BufReader, Write},
    path::Path,
};

use super::{Cli, Result};

use clap::{App, Arg, ArgMatches, SubCommand};
use victor::repo::{RepositoryHandle, Session};

pub(crate) fn subcommand<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("get-repository")
        .about("Open the git repository at each path, reusing ones already opened")
        .arg(
            Arg::with_name("C")
                .short("C")
                .value_name("DIR")
                .takes_value(true)
                .env("VICTOR_DIR")
                .help("Resolve relative paths against DIR instead of the working directory"),
        )
        .arg(
            Arg::with_name("stdin")
                .long("stdin")
                .help("Also read paths from standard input, one per line"),
        )
        .arg(
            Arg::with_name("path")
                .multiple(true)
                .help("Repository path (default '.')"),
        )
}

pub(crate) fn run(cli: &mut Cli, args: &ArgMatches) -> Result<()> {
    let mut session = Session::from_env()?;
    if let Some(dir) = args.value_of_os("C") {
        session.set_current_dir(dir);
    }

    let read_stdin = args.is_present("stdin");

    match args.values_of_os("path") {
        Some(paths) => {
            for path in paths {
                get_one(&mut session, &mut *cli.stdout, Some(Path::new(path)))?;
            }
        }
        None if !read_stdin => get_one(&mut session, &mut *cli.stdout, None)?,
        None => (),
    }

    if read_stdin {
        for line in BufReader::new(&mut *cli.stdin).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            get_one(&mut session, &mut *cli.stdout, Some(Path::new(&line)))?;
        }
    }

    Ok(())
}

// One pipeline item: resolve through the session cache and describe the
// handle on its own line.
fn get_one<W: Write + ?Sized>(
    session: &mut Session,
    out: &mut W,
    path: Option<&Path>,
) -> Result<()> {
    let repo = session.get_repository(path)?;
    writeln!(out, "{}", describe(repo))?;
    Ok(())
}

fn describe(repo: &RepositoryHandle) -> String {
    let work_dir = match repo.work_dir() {
        Some(dir) => dir.display().to_string(),
        None => "(bare)".to_string(),
    };

    format!("{}\t{}\t{}", repo.path(), repo.git_dir().display(), work_dir)
}
