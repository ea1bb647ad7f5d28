use std::io;

use anyhow::{Context, Result};

use nssh::args::{flag_registry, ArgsError, FlagArity};
use nssh::config::Config;
use nssh::launch::{exit_code, spawn_and_wait, write_title};
use nssh::logging::init_tracing;
use nssh::resolve::resolver_for;
use nssh::{Dispatcher, NsshError, Outcome};

fn main() {
    init_tracing();

    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    match run(&raw_args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "nssh failed");
            eprintln!("Error: {e:#}");
            if matches!(
                e.downcast_ref::<NsshError>(),
                Some(NsshError::Args(ArgsError::MissingTarget))
            ) {
                eprintln!();
                eprintln!("{}", usage());
            }
            std::process::exit(1);
        }
    }
}

fn run(raw_args: &[String]) -> Result<i32> {
    let config = Config::load()?;
    let resolver = resolver_for(&config.launch);
    let dispatcher = Dispatcher::new(config, resolver);

    let params = match dispatcher.dispatch(raw_args)? {
        Outcome::Reset => return Ok(0),
        Outcome::Launch(params) => params,
    };

    write_title(&mut io::stdout().lock(), &params).context("failed to print terminal title")?;

    let status = spawn_and_wait(&params).map_err(|source| NsshError::Launch {
        program: params.program.clone(),
        source,
    })?;
    Ok(exit_code(status))
}

fn usage() -> String {
    let mut out = String::from(
        "usage: nssh [ssh flags] [--list NAME] [--comment TEXT] [--user NAME] \
         (hostname | user@host | next | reset)\n\nnssh options:\n",
    );
    for def in flag_registry().iter().filter(|d| d.flag.starts_with("--")) {
        let value = match def.arity {
            FlagArity::RequiresValue => " <value>",
            FlagArity::NoValue => "",
        };
        let form = format!("{}{}", def.flag, value);
        out.push_str(&format!("  {:<20} {}\n", form, def.description));
    }
    out
}
