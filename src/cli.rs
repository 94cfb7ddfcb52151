//!
//! Implementations of the subcommands of the `dhmm` binary
//!
//! Each command writes its result into `out`.
//!
use crate::error::Result;
use crate::hmm::{History, Model, SampleParams};
use crate::utils::timer;
use log::info;
use serde::Serialize;
use std::io::Write;

///
/// Split the command line emissions into symbols.
///
/// With `chars`, every character of every argument is a symbol
/// (`ACGT` is `A, C, G, T`).
///
pub fn split_emissions(args: &[String], chars: bool) -> Vec<String> {
    if chars {
        args.iter()
            .flat_map(|arg| arg.chars().filter(|c| !c.is_whitespace()))
            .map(|c| c.to_string())
            .collect()
    } else {
        args.to_vec()
    }
}

#[derive(Serialize)]
struct ForwardOutput<'a> {
    emissions: &'a [String],
    log_space: bool,
    /// `-inf` log values are written as `null`
    trellis: Vec<Vec<f64>>,
    full_prob: f64,
}

///
/// Run forward (or log forward) on the emissions and dump the trellis
///
pub fn forward<W: Write>(
    out: &mut W,
    model: &Model,
    emissions: &[String],
    log_space: bool,
    json: bool,
) -> Result<()> {
    let (trellis, full_prob, text, t) = if log_space {
        let (r, t) = timer(|| model.forward_log(emissions));
        let trellis = r?;
        let full_prob = trellis.full_prob().to_log_value();
        let rows: Vec<Vec<f64>> = trellis
            .log_values()
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect();
        (rows, full_prob, trellis.to_string(), t)
    } else {
        let (r, t) = timer(|| model.forward(emissions));
        let trellis = r?;
        (trellis.to_rows(), trellis.full_prob(), trellis.to_string(), t)
    };
    info!("forward len={} log={} in {}ms", emissions.len(), log_space, t);

    if json {
        let output = ForwardOutput {
            emissions,
            log_space,
            trellis,
            full_prob,
        };
        serde_json::to_writer(&mut *out, &output)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", text)?;
        if log_space {
            writeln!(out, "# log P = {}", full_prob)?;
        } else {
            writeln!(out, "# P = {}", full_prob)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct GenerateOutput<'a> {
    seed: u64,
    /// named `(state, observation)` pairs
    pairs: Vec<(&'a str, &'a str)>,
    final_state: &'a str,
    /// the same history by indices
    history: &'a History,
}

///
/// Generate a sequence and dump `state<TAB>observation` per line,
/// followed by `# final_state=<name>`
///
pub fn generate<W: Write>(
    out: &mut W,
    model: &Model,
    param: &SampleParams,
    seed: u64,
    json: bool,
) -> Result<()> {
    let history = model.generate_with_seed(seed, param)?;
    info!("generated {} pairs with seed={}", history.len(), seed);
    let pairs = history.to_named(model)?;
    let final_state = model.state_name(history.final_state())?;

    if json {
        let output = GenerateOutput {
            seed,
            pairs,
            final_state,
            history: &history,
        };
        serde_json::to_writer(&mut *out, &output)?;
        writeln!(out)?;
    } else {
        for (state, observation) in pairs {
            writeln!(out, "{}\t{}", state, observation)?;
        }
        writeln!(out, "# final_state={}", final_state)?;
    }
    Ok(())
}

///
/// Dump the model in the text format
///
pub fn show<W: Write>(out: &mut W, model: &Model) -> Result<()> {
    info!(
        "n_states={} n_observations={}",
        model.state_count(),
        model.observation_count()
    );
    write!(out, "{}", model)?;
    Ok(())
}
