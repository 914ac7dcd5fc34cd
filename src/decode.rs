use std::{
    io::Write,
    path::Path,
};

use eyre::WrapErr;

use crate::{
    input,
    options::{
        DecodeOptions,
        Format,
    },
    render,
};

pub fn read(format: Format, path: &Path) -> eyre::Result<Vec<u8>> {
    let raw = std::fs::read(path).wrap_err_with(|| format!("reading {}", path.display()))?;
    input::parse(format, raw)
}

/// Print one frame. Fails on a malformed frame, and on a checksum mismatch when
/// `--strict` is set.
pub fn show(out: &mut impl Write, options: &DecodeOptions, frame: &[u8]) -> eyre::Result<()> {
    let record = message::decode(frame)?;
    let verification = message::verify(frame)?;

    if options.json {
        writeln!(out, "{}", render::json(&record)?)?;
    } else {
        write!(out, "{}", render::fields(&record))?;
        writeln!(out, "{}", render::verification(&verification))?;
    }

    if options.strict && !verification.is_valid() {
        eyre::bail!(render::verification(&verification));
    }

    Ok(())
}

/// Show every input file, logging failures instead of stopping. Returns how many
/// failed.
pub fn show_files(out: &mut impl Write, options: &DecodeOptions) -> usize {
    let format = options.format();
    let mut failed = 0;

    for path in &options.inputs {
        let result = read(format, path).and_then(|frame| show(&mut *out, options, &frame));
        util::trace_catch!(result, path = %path.display(), "failed to decode frame");

        if result.is_err() {
            failed += 1;
        }
    }

    failed
}
