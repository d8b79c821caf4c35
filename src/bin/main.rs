extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate protosearch;
extern crate shlex;

use std::env;
use std::io::{self, BufWriter, IsTerminal, Write};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use crossterm::style::Stylize;
use protosearch::prelude::*;

//------------------------------------------------------------------------------
fn main() {
    env_logger::builder().format_timestamp_nanos().init();
    if let Err(err) = color_eyre::install() {
        eprintln!("{err}");
    }

    match real_main() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(err) => {
            // downstream pipe closed, exit silently
            if is_broken_pipe(&err) {
                std::process::exit(0)
            }
            eprintln!("{err:?}");
            std::process::exit(2)
        }
    }
}

fn is_broken_pipe(err: &color_eyre::Report) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|cause| cause.kind() == io::ErrorKind::BrokenPipe)
}

fn parse_args() -> SearchOptions {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("protosearch")));
    args.extend(
        env::var("PROTOSEARCH_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    for arg in env::args().skip(1) {
        args.push(arg);
    }

    SearchOptions::parse_from(args).build()
}

fn real_main() -> Result<i32> {
    let opts = parse_args();
    debug!("options: {opts:?}");

    //------------------------------------------------------------------------------
    // load the schemas
    let mut protocols = Vec::with_capacity(opts.schemas.len());
    for path in &opts.schemas {
        let protocol = Protocol::from_path(path).wrap_err("failed to load protocol")?;
        protocols.push(protocol);
    }
    let domains = Protocol::merge(protocols);

    let mut search = Search::from_options(&opts);
    search.set_domains(&domains);

    //------------------------------------------------------------------------------
    // search
    let results = search.search(&opts.query);
    if results.is_empty() {
        return Ok(1);
    }

    //------------------------------------------------------------------------------
    // output
    let stdout = io::stdout();
    let color = opts.color.enabled(stdout.is_terminal());
    let mut out = BufWriter::new(stdout.lock());

    let page = results.page(opts.limit);
    for matched in page {
        print_result(&mut out, matched, &opts, color).wrap_err("failed to write results")?;
    }
    out.flush().wrap_err("failed to write results")?;

    let remaining = results.len() - page.len();
    if remaining > 0 {
        eprintln!("{remaining} more results");
    }

    Ok(0)
}

fn print_result(out: &mut impl Write, matched: &MatchedItem, opts: &SearchOptions, color: bool) -> io::Result<()> {
    if opts.print_score {
        write!(out, "{}\t", matched.score)?;
    }

    let (domain, entry) = matched.title_segments(&matched.matches);
    write_segments(out, &domain, color, true)?;
    write_segments(out, &entry, color, false)?;

    if opts.print_route {
        write!(out, "\t#{}", matched.route().anchor())?;
    }
    writeln!(out)
}

fn write_segments(out: &mut impl Write, segments: &[Segment<'_>], color: bool, dim: bool) -> io::Result<()> {
    for segment in segments {
        match (color, segment.highlighted, dim) {
            (false, _, _) => write!(out, "{}", segment.text)?,
            (true, true, _) => write!(out, "{}", segment.text.yellow().bold())?,
            (true, false, true) => write!(out, "{}", segment.text.dim())?,
            (true, false, false) => write!(out, "{}", segment.text)?,
        }
    }
    Ok(())
}

