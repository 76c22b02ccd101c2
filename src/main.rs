//! Runedra CLI - terminal shell for the infusion screens
//!
//! Usage:
//!   runedra --variant cryo -a 10 -b 5              # Single infusion
//!   runedra --variant quantum --interactive        # Interactive screen
//!   runedra --preset chamber.toml --json           # Preset, JSON output
//!   runedra --list                                 # Show variants and choices

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use runedra::core::{
    save_report, InfusionCalculator, InfusionSession, PacingPhase, ParameterOverrides, Preset,
    VariantConfig,
};
use runedra::types::{
    DisplayZone, Notice, ParameterSet, ResultRecord, SessionOutput, Severity, StabilityBand,
    Variant,
};
use runedra::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "runedra",
    version = VERSION,
    about = "Runedra Kraft - infusion parameter engine",
    long_about = "Runedra drives the Runedra Kraft infusion screens from a terminal.\n\n\
                  Variants:\n  \
                  cryo      - Ironhollow Frostshriek (cryogenic infusion)\n  \
                  nocturne  - Nightveil Duskwhisper (nocturne resonance)\n  \
                  quantum   - Quantum Infusion Nexus\n\n\
                  Choices (protocol, material, intensity) accept either the generic\n\
                  name (basic/enhanced/quantum/singularity, alpha/beta/gamma,\n\
                  low/mid/high) or the screen's own label."
)]
struct Args {
    /// Screen to drive (cryo, nocturne, quantum)
    #[arg(long, value_parser = parse_variant)]
    variant: Option<Variant>,

    /// Core temperature / luminescence / value
    #[arg(long, allow_hyphen_values = true)]
    primary: Option<f64>,

    /// Injection rate / duskwave frequency / infusion rate
    #[arg(long)]
    rate: Option<f64>,

    /// First free-text factor (e.g. Frostbite Factor)
    #[arg(short = 'a', long, allow_hyphen_values = true)]
    factor_a: Option<String>,

    /// Second free-text factor (e.g. Stabilizer Constant)
    #[arg(short = 'b', long, allow_hyphen_values = true)]
    factor_b: Option<String>,

    /// Iterations (1-10)
    #[arg(long)]
    iterations: Option<u32>,

    /// Protocol name or label
    #[arg(long)]
    protocol: Option<String>,

    /// Material name or label
    #[arg(long)]
    material: Option<String>,

    /// Intensity name or label
    #[arg(long)]
    intensity: Option<String>,

    /// Resonance frequency in kHz (1-5)
    #[arg(long)]
    resonance: Option<f64>,

    /// TOML preset to start from
    #[arg(long)]
    preset: Option<PathBuf>,

    /// Interactive mode - read commands from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Debug logging on stderr (RUST_LOG still applies)
    #[arg(long)]
    verbose: bool,

    /// Render timestamps in UTC instead of local time
    #[arg(long)]
    utc: bool,

    /// Play the screens' cosmetic delays
    #[arg(long)]
    paced: bool,

    /// Directory for share reports (single mode saves automatically when set)
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// List variants and their choices
    #[arg(long)]
    list: bool,
}

impl Args {
    fn display_zone(&self) -> DisplayZone {
        if self.utc {
            DisplayZone::Utc
        } else {
            DisplayZone::Local
        }
    }

    /// Any parameter given on the command line?
    fn has_inputs(&self) -> bool {
        self.preset.is_some()
            || self.primary.is_some()
            || self.rate.is_some()
            || self.factor_a.is_some()
            || self.factor_b.is_some()
            || self.iterations.is_some()
            || self.protocol.is_some()
            || self.material.is_some()
            || self.intensity.is_some()
            || self.resonance.is_some()
    }
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    s.parse()
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }
    init_logging(args.verbose);

    if args.list {
        run_list();
        return;
    }

    let (variant, params) = match resolve_start(&args) {
        Ok(start) => start,
        Err(message) => {
            print_notice(&Notice::error(message), None);
            std::process::exit(2);
        }
    };

    let mut session = InfusionSession::new(variant).with_display_zone(args.display_zone());
    session.apply(params);

    if args.interactive || !args.has_inputs() {
        run_interactive(session, &args);
    } else {
        let ready = run_single(&mut session, &args);
        if !ready {
            std::process::exit(1);
        }
    }
}

// =============================================================================
// STARTUP
// =============================================================================

/// Variant and initial parameters from preset + flags
fn resolve_start(args: &Args) -> Result<(Variant, ParameterSet), String> {
    let preset = match &args.preset {
        Some(path) => Some(Preset::load(path).map_err(|e| format!("{}: {}", path.display(), e))?),
        None => None,
    };

    let variant = match (&preset, args.variant) {
        (Some(p), Some(v)) if p.variant != v => {
            return Err(format!("preset is for '{}', not '{}'", p.variant, v));
        }
        (_, Some(v)) => v,
        (Some(p), None) => p.variant,
        (None, None) => Variant::Cryo,
    };

    let base = match &preset {
        Some(p) => p.parameter_set(),
        None => ParameterSet::defaults_for(variant),
    };

    let overrides = overrides_from_args(args, variant.config())?;
    Ok((variant, overrides.apply_to(base)))
}

fn overrides_from_args(args: &Args, config: &VariantConfig) -> Result<ParameterOverrides, String> {
    let protocol = match &args.protocol {
        Some(text) => Some(
            config
                .find_protocol(text)
                .ok_or_else(|| unknown_choice("protocol", text, &config.protocols))?,
        ),
        None => None,
    };
    let material = match &args.material {
        Some(text) => Some(
            config
                .find_material(text)
                .ok_or_else(|| unknown_choice("material", text, &config.materials))?,
        ),
        None => None,
    };
    let intensity = match &args.intensity {
        Some(text) => Some(
            config
                .find_intensity(text)
                .ok_or_else(|| unknown_choice("intensity", text, &config.intensities))?,
        ),
        None => None,
    };

    Ok(ParameterOverrides {
        primary_value: args.primary,
        secondary_rate: args.rate,
        factor_a: args.factor_a.clone(),
        factor_b: args.factor_b.clone(),
        iterations: args.iterations,
        protocol,
        material,
        intensity,
        resonance_frequency: args.resonance,
    })
}

fn unknown_choice(kind: &str, text: &str, labels: &[&str]) -> String {
    format!("unknown {} '{}' (expected one of: {})", kind, text, labels.join(", "))
}

// =============================================================================
// MODES
// =============================================================================

/// Run one infusion, return whether a result was produced
fn run_single(session: &mut InfusionSession, args: &Args) -> bool {
    let output = submit(session, args);

    // In JSON mode stdout carries the document only; the saved path goes inside it
    let report_path = match (&args.save_dir, session.result()) {
        (Some(dir), Some(result)) if output.is_ready() => {
            save(session.calculator(), result, dir, !args.json)
        }
        _ => None,
    };

    if args.json {
        print_json(session, &output, report_path.as_deref());
    } else {
        print_header(session.calculator().config());
        print_outcome(session, &output);
        if let Some(path) = &report_path {
            println!("{}", format!("  REPORT SAVED: {}", path.display()).cyan());
        }
    }

    output.is_ready()
}

/// Interactive screen
fn run_interactive(mut session: InfusionSession, args: &Args) {
    print_header(session.calculator().config());
    println!("Commands: set <field> <value>, show, run, reset, share, save, variant <name>, help, quit");
    println!("Fields: primary, rate, a, b, iterations, protocol, material, intensity, resonance");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}", format_prompt(&session));
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let config = Some(session.calculator().config());

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "quit" | "exit" => {
                println!("\nSession ended. Infusions: {}", session.submit_count());
                break;
            }
            "set" => match apply_set(&mut session, rest) {
                Ok(output) => print_status(&output, args),
                Err(message) => print_notice(&Notice::warning(message), config),
            },
            "show" => {
                println!("{}", session.preview_snapshot());
                println!();
            }
            "run" => {
                let output = submit(&mut session, args);
                if args.json {
                    print_json(&session, &output, None);
                } else {
                    print_outcome(&session, &output);
                }
            }
            "reset" => {
                let output = session.reset();
                print_notice(&output.notice, config);
            }
            "share" | "copy" => {
                let (text, output) = session.copy_share_text();
                if let Some(text) = text {
                    println!("{}", text);
                    println!();
                }
                print_notice(&output.notice, config);
            }
            "save" => match session.result() {
                Some(result) => {
                    let dir = args.save_dir.clone().unwrap_or_else(|| PathBuf::from("./reports"));
                    if let Some(path) = save(session.calculator(), result, &dir, true) {
                        println!("{}", format!("  REPORT SAVED: {}", path.display()).cyan());
                    }
                }
                None => print_notice(&Notice::info("Run an infusion before saving results"), config),
            },
            "variant" => match rest.parse::<Variant>() {
                Ok(variant) => {
                    session = InfusionSession::new(variant).with_display_zone(args.display_zone());
                    print_header(session.calculator().config());
                }
                Err(message) => print_notice(&Notice::warning(message), config),
            },
            "help" | "?" => print_notice(&session.help().notice, config),
            other => print_notice(&Notice::warning(format!("Unknown command '{}'", other)), config),
        }
    }
}

/// Print every variant with its labels
fn run_list() {
    for variant in Variant::ALL {
        let config = variant.config();
        println!("{} ({})", config.title.bold(), variant.code());
        println!("  {}", config.subtitle.dimmed());
        println!("  factors:     {} / {}", config.factor_a.label, config.factor_b.label);
        println!("  protocols:   {}", config.protocols.join(", "));
        println!("  materials:   {}", config.materials.join(", "));
        println!("  intensities: {}", config.intensities.join(", "));
        println!();
    }
}

// =============================================================================
// ACTIONS
// =============================================================================

fn submit(session: &mut InfusionSession, args: &Args) -> SessionOutput {
    if !args.paced {
        return session.submit();
    }

    let messages = session.calculator().config().messages;
    session.submit_paced(|phase, delay: Duration| {
        match phase {
            PacingPhase::Processing => {
                if let Some(text) = messages.processing {
                    println!("{}", text.cyan());
                }
            }
            PacingPhase::Reveal => println!("{}", messages.completion.bold().cyan()),
        }
        std::thread::sleep(delay);
    })
}

/// `set <field> <value>`
fn apply_set(session: &mut InfusionSession, rest: &str) -> Result<SessionOutput, String> {
    let (field, value) = rest
        .split_once(char::is_whitespace)
        .map(|(f, v)| (f, v.trim()))
        .unwrap_or((rest, ""));
    let config = session.calculator().config();

    let output = match field.to_lowercase().as_str() {
        "primary" => session.set_primary_value(parse_number(value)?),
        "rate" => session.set_secondary_rate(parse_number(value)?),
        "a" | "factor_a" => session.set_factor_a(value),
        "b" | "factor_b" => session.set_factor_b(value),
        "iterations" => session.set_iterations(
            value
                .parse::<u32>()
                .map_err(|_| format!("'{}' is not a whole number", value))?,
        ),
        "protocol" => {
            let protocol = config
                .find_protocol(value)
                .ok_or_else(|| unknown_choice("protocol", value, &config.protocols))?;
            session.set_protocol(protocol)
        }
        "material" => {
            let material = config
                .find_material(value)
                .ok_or_else(|| unknown_choice("material", value, &config.materials))?;
            session.set_material(material)
        }
        "intensity" => {
            let intensity = config
                .find_intensity(value)
                .ok_or_else(|| unknown_choice("intensity", value, &config.intensities))?;
            session.set_intensity(intensity)
        }
        "resonance" => session.set_resonance_frequency(parse_number(value)?),
        other => return Err(format!("Unknown field '{}'", other)),
    };

    Ok(output)
}

fn parse_number(text: &str) -> Result<f64, String> {
    text.parse()
        .map_err(|_| format!("'{}' is not a number", text))
}

/// Save the share text; failures are shown as an alert on the terminal, logged otherwise
fn save(
    calculator: &InfusionCalculator,
    result: &ResultRecord,
    dir: &Path,
    terminal: bool,
) -> Option<PathBuf> {
    match save_report(result, dir, calculator.zone()) {
        Ok(path) => Some(path),
        Err(e) => {
            let message = format!("Report save failed ({}): {}", e.code(), e);
            if terminal {
                print_notice(&Notice::error(message), Some(calculator.config()));
            } else {
                log::error!("{}", message);
            }
            None
        }
    }
}

// =============================================================================
// OUTPUT
// =============================================================================

fn print_header(config: &VariantConfig) {
    println!("========================================");
    println!("  {} v{}", config.title.to_uppercase().bold(), VERSION);
    println!("  {}", config.subtitle.dimmed());
    println!("========================================");
    println!();
}

fn format_prompt(session: &InfusionSession) -> String {
    format!("[{} | {}] > ", session.variant(), session.state())
}

fn print_status(output: &SessionOutput, args: &Args) {
    if args.verbose {
        let line = if args.no_color {
            output.to_parseable_string()
        } else {
            output.to_terminal_string()
        };
        println!("{}", line);
    }
}

fn print_outcome(session: &InfusionSession, output: &SessionOutput) {
    if let Some(result) = &output.result {
        print_result(session.calculator(), result);
    }
    print_notice(&output.notice, Some(session.calculator().config()));
}

fn print_result(calculator: &InfusionCalculator, result: &ResultRecord) {
    let config = calculator.config();
    let band = result.stability_band();

    println!("{}", "RESULTS".bold());
    for (i, metric) in calculator.metric_lines(result).into_iter().enumerate() {
        let value = if i == 1 {
            match band {
                StabilityBand::Stable => metric.value.green(),
                StabilityBand::Marginal => metric.value.yellow(),
                StabilityBand::Unstable => metric.value.red(),
            }
        } else {
            metric.value.normal()
        };
        println!("  {:<20} {}", format!("{}:", metric.label), value);
    }
    println!();

    println!("{}", config.recommendations.heading.bold());
    for item in calculator.recommendations(result) {
        println!("  • {}", item);
    }
    println!();
}

/// Alert line; the screen's own titles when a screen is known
fn print_notice(notice: &Notice, config: Option<&VariantConfig>) {
    let title = match config {
        Some(config) => config.alert_titles.get(notice.severity),
        None => notice.severity.title(),
    };
    let title = format!("[{}]", title);
    let title = match notice.severity {
        Severity::Info => title.blue(),
        Severity::Warning => title.yellow(),
        Severity::Error => title.red(),
        Severity::Success => title.green(),
    };
    println!("{} {}", title, notice.message);
}

fn print_json(session: &InfusionSession, output: &SessionOutput, report_path: Option<&Path>) {
    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        #[serde(flatten)]
        output: &'a SessionOutput,
        #[serde(skip_serializing_if = "Option::is_none")]
        share_text: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        recommendations: Option<&'static [&'static str]>,
        #[serde(skip_serializing_if = "Option::is_none")]
        report_path: Option<&'a Path>,
    }

    let calculator = session.calculator();
    let json = JsonOutput {
        output,
        share_text: output.result.as_ref().map(|r| calculator.render_share_text(r)),
        recommendations: output.result.as_ref().map(|r| calculator.recommendations(r)),
        report_path,
    };

    match serde_json::to_string_pretty(&json) {
        Ok(text) => println!("{}", text),
        Err(e) => log::error!("cannot serialize output: {}", e),
    }
}

// =============================================================================
// LOGGING
// =============================================================================

/// stderr logging; `--verbose` raises the default level, RUST_LOG overrides it
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
