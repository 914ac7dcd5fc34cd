use std::{
    io,
    io::Read,
};

use structopt::StructOpt as _;

use showcase_sim::{
    decode,
    input,
    options::DecodeOptions,
    trace,
};

fn main() -> eyre::Result<()> {
    let options = DecodeOptions::from_args();
    trace::init();

    let mut stdout = io::stdout().lock();

    if options.inputs.is_empty() {
        let mut buf = vec![];
        io::stdin().read_to_end(&mut buf)?;

        return decode::show(&mut stdout, &options, &input::parse(options.format(), buf)?);
    }

    let failed = decode::show_files(&mut stdout, &options);
    if failed > 0 {
        eyre::bail!("{failed} of {} frames failed", options.inputs.len());
    }

    Ok(())
}
