use structopt::StructOpt as _;

use showcase_sim::{
    encode,
    options::Options,
    trace,
};

fn main() -> eyre::Result<()> {
    util::bootstrap!("starting {}", util::build::banner());

    let options = Options::from_args();
    trace::init();

    tracing::debug!(?options, "parsed options");

    encode::run(&mut std::io::stdout().lock(), &options, &message::SystemClock)?;

    Ok(())
}
