use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use expandable_label::{
    CachedLayoutEngine, Color, Dp, DpPosition, DpRect, ExpandableLabel, ExpandableLabelConfig,
    Font, GlyphonLayoutEngine, InteractionScope,
};

mod commands;
use commands::Command;

const SAMPLE_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
    eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis \
    nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute \
    irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.";

type PreviewLabel = ExpandableLabel<CachedLayoutEngine<GlyphonLayoutEngine>>;

#[derive(Parser)]
#[command(name = "expandable-label-preview")]
#[command(version, about = "Interactive preview for expandable-label", long_about = None)]
struct Cli {
    /// Text to show (defaults to a lorem ipsum paragraph)
    text: Option<String>,
    /// Layout width in dp
    #[arg(short, long, default_value_t = 300.0)]
    width: f64,
    /// Font size in dp
    #[arg(long, default_value_t = 16.0)]
    font_size: f64,
    /// Line height in dp (defaults to 1.2 × font size)
    #[arg(long)]
    line_height: Option<f64>,
    /// Rows shown while collapsed
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(1..=10))]
    unexpanded_lines: u32,
    /// Rows shown while expanded, 0 for unlimited
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=10))]
    expanded_lines: u32,
    /// Text color as #RRGGBB
    #[arg(long, default_value = "#000000", value_parser = parse_color)]
    text_color: Color,
    /// Toggle color as #RRGGBB (defaults to the text color)
    #[arg(long, value_parser = parse_color)]
    button_color: Option<Color>,
    /// Where taps toggle the label
    #[arg(long, value_enum, default_value_t = Scope::Button)]
    scope: Scope,
    /// Display scale factor used for shaping
    #[arg(long, default_value_t = 1.0)]
    scale_factor: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scope {
    Button,
    Text,
}

impl From<Scope> for InteractionScope {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Button => InteractionScope::Button,
            Scope::Text => InteractionScope::Text,
        }
    }
}

fn parse_color(value: &str) -> Result<Color> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.is_ascii() {
        bail!("expected a color like #RRGGBB, got {value:?}");
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).with_context(|| format!("invalid color {value:?}"))
    };
    Ok(Color::from_rgb_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("error,expandable_label=info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

impl Cli {
    fn config(&self) -> Result<ExpandableLabelConfig> {
        if !(self.width.is_finite() && self.width > 0.0) {
            bail!("width must be a positive number, got {}", self.width);
        }
        let mut font = Font::system(Dp(self.font_size));
        if let Some(line_height) = self.line_height {
            font = font.line_height(Dp(line_height));
        }

        let mut config = ExpandableLabelConfig::new(Dp(self.width), font, self.text_color)
            .unexpanded_max_lines(self.unexpanded_lines)
            .expanded_max_lines(self.expanded_lines)
            .interaction_scope(self.scope.into());
        config.button_color = self.button_color;
        Ok(config)
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let engine = CachedLayoutEngine::new(GlyphonLayoutEngine::with_scale_factor(cli.scale_factor));
    let mut label: PreviewLabel = ExpandableLabel::new(cli.config()?, engine)
        .with_on_expand_state_change(|expanded: bool| {
            println!("-> {}", if expanded { "expanded" } else { "collapsed" });
        });
    label.set_text(cli.text.as_deref().unwrap_or(SAMPLE_TEXT));
    relayout(&mut label);
    print_state(&label);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", Command::HELP),
            Command::Show => print_state(&label),
            Command::Toggle => {
                label.toggle_expand();
                relayout(&mut label);
            }
            Command::Tap { x, y } => {
                if !label.handle_tap(DpPosition::new(Dp(x), Dp(y))) {
                    println!("tap at ({x}, {y}) ignored");
                }
                relayout(&mut label);
            }
            Command::Text(text) => {
                label.set_text(text);
                relayout(&mut label);
                print_state(&label);
            }
            Command::UnexpandedLines(lines) => {
                let config = label.configuration().clone().unexpanded_max_lines(lines);
                label.set_configuration(config);
                relayout(&mut label);
                print_state(&label);
            }
            Command::ExpandedLines(lines) => {
                let config = label.configuration().clone().expanded_max_lines(lines);
                label.set_configuration(config);
                relayout(&mut label);
                print_state(&label);
            }
            Command::Scope(scope) => {
                let config = label.configuration().clone().interaction_scope(scope);
                label.set_configuration(config);
                println!("scope: {scope}");
            }
        }
    }

    Ok(())
}

/// Lays the label out at its configured width and the height of its visible
/// rows, the way a host stack would.
fn relayout(label: &mut PreviewLabel) {
    let size = label.size_that_fits(label.intrinsic_size());
    let origin = label.bounds().origin();
    label.layout(DpRect::new(
        origin.x,
        origin.y,
        label.configuration().width,
        size.height,
    ));
}

fn print_state(label: &PreviewLabel) {
    let intrinsic = label.intrinsic_size();
    let bounds = label.bounds();
    let surface = label.surface();

    println!("text:        {:?}", surface.text().to_plain_string());
    println!(
        "state:       {} (can expand: {})",
        if label.is_expanded() { "expanded" } else { "collapsed" },
        label.can_expand()
    );
    println!(
        "row limit:   {}",
        surface
            .line_limit()
            .map_or_else(|| "unlimited".to_string(), |limit| limit.to_string())
    );
    println!(
        "intrinsic:   {:.1} x {:.1} dp",
        intrinsic.width.0, intrinsic.height.0
    );
    println!("bounds:      {:.1} x {:.1} dp", bounds.width.0, bounds.height.0);
    match label.toggle() {
        Some(toggle) => {
            let frame = toggle.frame();
            let hit = toggle.hit_rect();
            println!(
                "toggle:      {} at ({:.1}, {:.1}) {:.1}dp, taps accepted in ({:.1}, {:.1}) {:.1} x {:.1}",
                toggle.icon().glyph(),
                frame.x.0,
                frame.y.0,
                frame.width.0,
                hit.x.0,
                hit.y.0,
                hit.width.0,
                hit.height.0,
            );
        }
        None => println!("toggle:      none"),
    }
    for region in surface.exclusion_regions() {
        println!(
            "exclusion:   ({:.1}, {:.1}) {:.1} x {:.1}",
            region.x.0, region.y.0, region.width.0, region.height.0
        );
    }
    println!("scope:       {}", label.configuration().interaction_scope);
}
