mod error;
mod input;
mod instruments;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::input::{decode_wav, load_session};
use crate::instruments::loader::load_registry;
use crate::instruments::range::check_score_range;
use crate::instruments::{Instrument, Interpretation, Layout, Registry};
use crate::model::thresholds::AcousticProfile;
use crate::pipeline::color::color_mood;
use crate::pipeline::score::score_instrument;
use crate::pipeline::session::{analyze_session, validate_session};
use crate::pipeline::voice::analyze_voice;
use crate::report::json::render_json;
use crate::report::text::{render_color_text, render_score_text, render_voice_text};
use crate::report::{SummaryData, write_reports};

#[derive(Debug, Parser)]
#[command(
    name = "emostate",
    version,
    about = "Psychometric instrument scoring and acoustic emotional-state indicators"
)]
struct Cli {
    /// -v for info, -vv for debug; RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List instrument ids in registry order.
    List,
    /// Show the items and options of one instrument.
    Show { instrument: String },
    /// Score one response vector.
    Score(ScoreArgs),
    /// Interpret the pitch profile of a WAV recording.
    Voice(VoiceArgs),
    /// Nearest palette colour and its mood.
    Color { hex: String },
    /// Whether a score falls inside a range token such as `10–14`, `28+` or `0`.
    CheckRange { token: String, score: u32 },
    /// Analyse a full session file and write report.txt and summary.json.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct ScoreArgs {
    /// Full instrument id or short code (e.g. PHQ-9).
    instrument: String,
    /// Item weights, comma separated, in item order.
    #[arg(
        long,
        value_delimiter = ',',
        conflicts_with = "choices",
        required_unless_present = "choices"
    )]
    weights: Vec<u32>,
    /// Chosen option positions (0-based), comma separated, in item order.
    #[arg(long, value_delimiter = ',')]
    choices: Vec<usize>,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct VoiceArgs {
    wav: PathBuf,
    #[arg(long, value_enum, default_value_t = VoicedRatioArg::Frames)]
    voiced_ratio: VoicedRatioArg,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct RunArgs {
    #[arg(long)]
    session: PathBuf,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, value_enum, default_value_t = VoicedRatioArg::Frames)]
    voiced_ratio: VoicedRatioArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VoicedRatioArg {
    /// voiced frames / analysed frames
    Frames,
    /// voiced frames / raw sample count
    Samples,
}

impl VoicedRatioArg {
    fn profile(self) -> AcousticProfile {
        match self {
            VoicedRatioArg::Frames => AcousticProfile::default_v1(),
            VoicedRatioArg::Samples => AcousticProfile::legacy_v1(),
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    let registry = load_registry().map_err(|e| e.to_string())?;

    match command {
        Command::List => {
            for id in registry.list_instruments() {
                println!("{id}");
            }
        }
        Command::Show { instrument } => {
            let instrument = registry.find(&instrument).map_err(|e| e.to_string())?;
            print!("{}", describe_instrument(instrument));
        }
        Command::Score(args) => run_score(&registry, &args)?,
        Command::Voice(args) => run_voice(&args)?,
        Command::Color { hex } => {
            let mood = color_mood(&hex).map_err(|e| e.to_string())?;
            print!("{}", render_color_text(&mood));
        }
        Command::CheckRange { token, score } => {
            let inside = check_score_range(&token, score).map_err(|e| e.to_string())?;
            println!("{inside}");
        }
        Command::Run(args) => run_session(&registry, &args)?,
    }

    Ok(())
}

fn run_score(registry: &Registry, args: &ScoreArgs) -> Result<(), String> {
    let instrument = registry.find(&args.instrument).map_err(|e| e.to_string())?;
    let responses = if args.weights.is_empty() {
        instrument
            .weights_for_choices(&args.choices)
            .map_err(|e| e.to_string())?
    } else {
        args.weights.clone()
    };
    let result = score_instrument(instrument, &responses).map_err(|e| e.to_string())?;

    if args.json {
        print!("{}", render_json(&result).map_err(|e| e.to_string())?);
    } else {
        println!("Instrument: {}", instrument.id);
        print!("{}", render_score_text(&result));
    }
    Ok(())
}

fn run_voice(args: &VoiceArgs) -> Result<(), String> {
    let audio = decode_wav(&args.wav).map_err(|e| e.to_string())?;
    let profile = args.voiced_ratio.profile();
    let analysis =
        analyze_voice(&audio.samples, audio.sample_rate, &profile).map_err(|e| e.to_string())?;

    if args.json {
        print!("{}", render_json(&analysis).map_err(|e| e.to_string())?);
    } else {
        print!("{}", render_voice_text(&analysis));
    }
    Ok(())
}

fn run_session(registry: &Registry, args: &RunArgs) -> Result<(), String> {
    let session = load_session(&args.session).map_err(|e| e.to_string())?;

    let validation = validate_session(&session);
    for check in &validation.checks {
        let mark = if check.ok { "ok  " } else { "FAIL" };
        println!("[{mark}] {}", check.message);
    }
    println!("{} tests validated", validation.validated_count());

    let audio = match &session.voice {
        Some(voice) if validation.all_valid() => {
            Some(decode_wav(&voice.wav).map_err(|e| e.to_string())?)
        }
        _ => None,
    };

    let profile = args.voiced_ratio.profile();
    let report = analyze_session(&session, audio.as_ref(), registry, &profile)
        .map_err(|e| e.to_string())?;

    let summary = SummaryData::new(&validation, &report);
    let written = write_reports(&summary, &args.out).map_err(|e| e.to_string())?;
    println!("Wrote {}", written.report_txt.display());
    println!("Wrote {}", written.summary_json.display());
    Ok(())
}

fn describe_instrument(instrument: &Instrument) -> String {
    let mut out = format!(
        "{} [{}] ({:?}, {} items, total {}–{})\n",
        instrument.id,
        instrument.code,
        instrument.kind(),
        instrument.item_count(),
        instrument.min_score(),
        instrument.max_score()
    );
    out.push_str("Options:\n");
    for (idx, (option, weight)) in instrument
        .options
        .iter()
        .zip(instrument.weights.iter())
        .enumerate()
    {
        out.push_str(&format!("  {idx}: {option} (weight {weight})\n"));
    }
    out.push_str("Items:\n");
    for (idx, item) in instrument.items.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", idx + 1, item));
    }
    out.push_str("Interpretation:\n");
    match &instrument.layout {
        Layout::Total(interpretation) => describe_interpretation(&mut out, "  ", interpretation),
        layout => {
            for subscale in layout.subscales() {
                out.push_str(&format!("  {}:\n", subscale.name));
                describe_interpretation(&mut out, "    ", &subscale.interpretation);
            }
        }
    }
    out
}

fn describe_interpretation(out: &mut String, indent: &str, interpretation: &Interpretation) {
    if let Interpretation::Descriptive(sentence) = interpretation {
        out.push_str(&format!("{indent}{sentence}\n"));
        return;
    }
    for band in interpretation.bands() {
        out.push_str(&format!("{indent}{}: {}\n", band.token, band.label));
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
