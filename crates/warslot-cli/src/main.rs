//! warslot CLI: can one more hero, war engine, or monster join this army?

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use warslot_army::load_army;
use warslot_core::{simulate, Allocation, CanAdd, CheckConfig, OutputFormat, SlotInput, UnitKind};

#[derive(Parser)]
#[command(name = "warslot")]
#[command(about = "Special-unit slot checker for army lists", long_about = None)]
#[command(version = warslot_core::VERSION)]
struct Cli {
    /// Log allocation decisions (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct SlotArgs {
    /// Infantry and heavy infantry hordes
    #[arg(long, default_value_t = 0)]
    horde: u32,

    /// Large infantry, monstrous infantry and large cavalry hordes
    #[arg(long, default_value_t = 0)]
    large_inf: u32,

    /// Infantry and heavy infantry regiments
    #[arg(long, default_value_t = 0)]
    regiment: u32,

    /// Heroes already in the list
    #[arg(long, default_value_t = 0)]
    heroes: u32,

    /// War engines already in the list
    #[arg(long, default_value_t = 0)]
    war_engines: u32,

    /// Monsters and titans already in the list
    #[arg(long, default_value_t = 0)]
    monsters: u32,
}

impl From<SlotArgs> for SlotInput {
    fn from(a: SlotArgs) -> Self {
        SlotInput {
            horde_count: a.horde,
            large_inf_count: a.large_inf,
            regiment_count: a.regiment,
            hero_count: a.heroes,
            war_engine_count: a.war_engines,
            monster_count: a.monsters,
        }
    }
}

#[derive(Args, Debug, Clone, Copy, Default)]
struct OutputArgs {
    /// Reject placed counts that could not have been seated
    #[arg(long)]
    strict: bool,

    /// Output format: text, json or yaml (overrides config)
    #[arg(short, long)]
    output: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer from explicit slot and unit counts
    Check {
        #[command(flatten)]
        slots: SlotArgs,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Tally an army-list file (YAML, or JSON by extension) and answer for it
    List {
        /// Path to the army-list file
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Show how the placed units were packed into each pool
    Explain {
        #[command(flatten)]
        slots: SlotArgs,

        /// Output format: text, json or yaml (overrides config)
        #[arg(short, long)]
        output: Option<OutputFormat>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check { slots, out } => run_check(slots.into(), out),
        Commands::List { file, out } => run_list(&file, out),
        Commands::Explain { slots, output } => run_explain(slots.into(), output),
    };

    match result {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Layer CLI flags over `cfg`; flags have the last word.
fn apply_output_args(cfg: &mut CheckConfig, out: OutputArgs) {
    if out.strict {
        cfg.strict = true;
    }
    if let Some(format) = out.output {
        cfg.output = format;
    }
}

fn run_check(input: SlotInput, out: OutputArgs) -> Result<String, Box<dyn std::error::Error>> {
    let mut config = CheckConfig::from_env();
    apply_output_args(&mut config, out);
    debug!(?input, ?config, "check");

    let answer = config.evaluate(&input)?;
    render_can_add(&answer, config.output)
}

fn run_list(path: &Path, out: OutputArgs) -> Result<String, Box<dyn std::error::Error>> {
    let army = load_army(path)?;
    let mut config = army.effective_config(&CheckConfig::from_env());
    apply_output_args(&mut config, out);

    let input = army.tally();
    debug!(army = ?army.name, ?input, ?config, "list");

    let answer = army.check(&config)?;
    let mut text = String::new();
    if config.output == OutputFormat::Text {
        if let Some(name) = &army.name {
            text.push_str(&format!("{}\n", name));
        }
        text.push_str(&render_input(&input));
    }
    text.push_str(&render_can_add(&answer, config.output)?);
    Ok(text)
}

fn run_explain(
    input: SlotInput,
    output: Option<OutputFormat>,
) -> Result<String, Box<dyn std::error::Error>> {
    let format = output.unwrap_or(CheckConfig::from_env().output);
    let alloc = simulate(&input);
    match format {
        OutputFormat::Text => Ok(render_allocation(&alloc)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&alloc)? + "\n"),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&alloc)?),
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn render_can_add(
    answer: &CanAdd,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    Ok(match format {
        OutputFormat::Text => answer
            .iter()
            .map(|(kind, flag)| format!("{}: {}\n", kind.output_label(), yes_no(flag)))
            .collect(),
        OutputFormat::Json => serde_json::to_string_pretty(answer)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(answer)?,
    })
}

fn render_input(input: &SlotInput) -> String {
    format!(
        "Slots: {} horde, {} large infantry, {} regiment\nPlaced: {} hero, {} war engine, {} monster\n",
        input.horde_count,
        input.large_inf_count,
        input.regiment_count,
        input.hero_count,
        input.war_engine_count,
        input.monster_count,
    )
}

fn render_allocation(alloc: &Allocation) -> String {
    let mut s = String::new();
    s.push_str("Slot Allocation\n");
    s.push_str("===============\n\n");
    s.push_str(&render_input(&alloc.input));
    s.push('\n');
    s.push_str(&format!(
        "{:<12} {:>6} {:>10} {:>9} {:>9}\n",
        "kind", "horde", "large_inf", "regiment", "unseated"
    ));
    for kind in UnitKind::ALL {
        let u = alloc.usage(kind);
        s.push_str(&format!(
            "{:<12} {:>6} {:>10} {:>9} {:>9}\n",
            kind.name(),
            u.horde,
            u.large_inf,
            u.regiment,
            u.unseated
        ));
    }
    s.push('\n');
    s.push_str(&format!(
        "Large infantry used: {} of {}{}\n",
        alloc.large_inf_used(),
        u64::from(alloc.input.large_inf_count) * 2,
        if alloc.has_unused_large_inf_slots {
            " (headroom)"
        } else {
            ""
        }
    ));
    s.push_str(&format!(
        "Regiments used: {} of {}{}\n",
        alloc.regiment_used(),
        alloc.input.regiment_count,
        if alloc.has_unused_regiment_slots {
            " (headroom)"
        } else {
            ""
        }
    ));
    s.push('\n');
    for (kind, flag) in alloc.can_add().iter() {
        s.push_str(&format!("{}: {}\n", kind.output_label(), yes_no(flag)));
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(h: u32, l: u32, r: u32, hero: u32, we: u32, mon: u32) -> SlotInput {
        SlotArgs {
            horde: h,
            large_inf: l,
            regiment: r,
            heroes: hero,
            war_engines: we,
            monsters: mon,
        }
        .into()
    }

    #[test]
    fn text_output_mirrors_form_labels() {
        let answer = CanAdd {
            can_add_hero: false,
            can_add_war_engine: true,
            can_add_monster: true,
        };
        let text = render_can_add(&answer, OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "canAddHero: No\ncanAddWarEngine: Yes\ncanAddMonster: Yes\n"
        );
    }

    #[test]
    fn json_output_is_the_camel_case_record() {
        let text = render_can_add(&CanAdd::ALL, OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["canAddWarEngine"], serde_json::Value::Bool(true));
    }

    #[test]
    fn flags_override_config() {
        let mut cfg = CheckConfig::default();
        apply_output_args(
            &mut cfg,
            OutputArgs {
                strict: true,
                output: Some(OutputFormat::Yaml),
            },
        );
        assert!(cfg.strict);
        assert_eq!(cfg.output, OutputFormat::Yaml);

        // An unset --strict does not relax a strict config.
        apply_output_args(&mut cfg, OutputArgs::default());
        assert!(cfg.strict);
    }

    #[test]
    fn slot_args_map_onto_input_fields() {
        let input = slots(1, 2, 3, 4, 5, 6);
        assert_eq!(input.horde_count, 1);
        assert_eq!(input.large_inf_count, 2);
        assert_eq!(input.regiment_count, 3);
        assert_eq!(input.placed(UnitKind::Hero), 4);
        assert_eq!(input.placed(UnitKind::WarEngine), 5);
        assert_eq!(input.placed(UnitKind::Monster), 6);
    }

    #[test]
    fn explain_text_shows_headroom_and_answers() {
        let text = render_allocation(&simulate(&slots(0, 2, 0, 2, 1, 0)));
        assert!(text.contains("Large infantry used: 3 of 4 (headroom)"), "{text}");
        assert!(text.contains("Regiments used: 0 of 0\n"), "{text}");
        assert!(text.ends_with("canAddHero: No\ncanAddWarEngine: Yes\ncanAddMonster: Yes\n"));
    }

    #[test]
    fn cli_parses_check_flags() {
        let cli = Cli::try_parse_from([
            "warslot",
            "check",
            "--horde",
            "1",
            "--large-inf",
            "1",
            "--regiment",
            "2",
            "--war-engines",
            "4",
            "--output",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Check { slots, out } => {
                let input: SlotInput = slots.into();
                assert_eq!(input.war_engine_count, 4);
                assert_eq!(out.output, Some(OutputFormat::Json));
                assert!(!out.strict);
            }
            _ => panic!("expected check"),
        }
    }
}
