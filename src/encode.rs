use std::io::Write;

use eyre::WrapErr;

use message::{
    Clock,
    Encoded,
};

use crate::{
    options::Options,
    render,
};

/// Encode the message described by `options`, report it to `out` and write the
/// frame to `--out` if given. `clock` stamps frames without `--timestamp`.
pub fn run(out: &mut impl Write, options: &Options, clock: &impl Clock) -> eyre::Result<Encoded> {
    let encoded = message::encode_with_clock(&options.outgoing(), options.timestamp(), clock);

    if encoded.was_truncated() {
        tracing::warn!(
            username = encoded.truncated.username,
            description = encoded.truncated.description,
            "text truncated to fit frame"
        );
    }

    writeln!(out, "Created payload ({} bytes)", encoded.frame.len())?;
    writeln!(out, "Hex:")?;
    writeln!(out, "{}", render::hex_string(encoded))?;

    if let Some(path) = &options.out {
        std::fs::write(path, encoded.frame)
            .wrap_err_with(|| format!("writing payload to {}", path.display()))?;

        tracing::info!(path = %path.display(), "wrote payload");
        writeln!(out, "Wrote binary payload to {}", path.display())?;
    }

    let record = message::decode(&encoded.frame)?;

    writeln!(out)?;
    if options.json {
        writeln!(out, "{}", render::json(&record)?)?;
    } else {
        write!(out, "{}", render::fields(&record))?;
    }

    Ok(encoded)
}
