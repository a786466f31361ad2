//! Katexify CLI - render streamed chat model output for KaTeX

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use katexify::{
    core::is_balanced,
    process_with_options, process_with_report,
    settings::{catalog, ChatMessage, ChatRequest, Settings, MODELS, PROMPT_TEMPLATES},
    Error, RenderOptions, ResponseStream, Result,
};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "katexify")]
#[command(version)]
#[command(about = "Katexify - normalize streamed Markdown + LaTeX for KaTeX", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Replay the input as a stream of N-byte chunks, checking every
    /// intermediate render
    #[arg(long, value_name = "N")]
    stream: Option<usize>,

    /// Print a JSON report instead of the rendered text
    #[arg(long)]
    report: bool,

    /// Exit with an error if the input has unbalanced fences or `$$`
    #[arg(long)]
    check: bool,

    /// Render as the last pass of a finished response
    #[arg(long, conflicts_with = "minimal")]
    final_pass: bool,

    /// Only filter reasoning and close open constructs
    #[arg(long)]
    minimal: bool,

    /// Keep single newlines as soft breaks
    #[arg(long)]
    no_line_breaks: bool,

    /// Keep `\newcommand` / `\def` definitions
    #[arg(long)]
    keep_macros: bool,

    /// Do not convert full LaTeX documents
    #[arg(long)]
    no_documents: bool,

    /// Do not wrap bare LaTeX commands in math delimiters
    #[arg(long)]
    no_wrap: bool,

    /// Do not close unterminated fences and `$$` blocks
    #[arg(long)]
    no_repair: bool,

    /// Close a dangling inline `$`
    #[arg(long)]
    repair_inline: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List the available models and prompt templates
    Catalog,

    /// Print the upstream completion body for a message
    Request {
        /// User message
        message: String,

        /// Model id
        #[arg(short, long)]
        model: Option<String>,

        /// Prompt template id
        #[arg(short, long)]
        template: Option<String>,

        /// System prompt for the `custom` template
        #[arg(long)]
        custom_prompt: Option<String>,
    },
}

#[cfg(feature = "cli")]
impl Cli {
    fn render_options(&self) -> RenderOptions {
        let mut options = if self.minimal {
            RenderOptions::minimal()
        } else if self.final_pass {
            RenderOptions::final_pass()
        } else {
            RenderOptions::default()
        };
        if self.no_line_breaks {
            options.hard_line_breaks = false;
        }
        if self.keep_macros {
            options.strip_macros = false;
        }
        if self.no_documents {
            options.convert_documents = false;
        }
        if self.no_wrap {
            options.wrap_bare_math = false;
        }
        if self.no_repair {
            options.repair_incomplete = false;
        }
        if self.repair_inline {
            options.repair_inline_math = true;
        }
        options
    }
}

#[cfg(feature = "cli")]
fn init_tracing() {
    let filter = EnvFilter::try_from_env("KATEXIFY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if let Some(ref cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    let input = match cli.input_file {
        Some(ref path) => fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };

    let options = cli.render_options();

    if cli.check {
        let text = String::from_utf8_lossy(&input);
        if is_balanced(&text) {
            eprintln!("balanced");
            return Ok(());
        }
        eprintln!(
            "unbalanced: {} code fence marker(s), {} `$$` marker(s)",
            text.matches("```").count(),
            text.matches("$$").count()
        );
        std::process::exit(1);
    }

    let rendered = match cli.stream {
        Some(0) => return Err(Error::invalid("--stream chunk size must be positive")),
        Some(size) => replay_stream(&input, size, options.clone())?,
        None => {
            let text = String::from_utf8_lossy(&input);
            if cli.report {
                let report = process_with_report(&text, &options);
                serde_json::to_string_pretty(&report)?
            } else {
                process_with_options(&text, &options)
            }
        }
    };

    write_output(cli.output.as_deref(), &rendered)
}

/// Feed `input` through a [`ResponseStream`] in fixed-size byte chunks.
#[cfg(feature = "cli")]
fn replay_stream(input: &[u8], size: usize, options: RenderOptions) -> Result<String> {
    let check_balance = options.repair_incomplete;
    let mut stream = ResponseStream::new(options);
    for (index, chunk) in input.chunks(size).enumerate() {
        let rendered = stream.push_bytes(chunk);
        if check_balance && !is_balanced(rendered) {
            return Err(Error::invalid(format!(
                "render after chunk {} is unbalanced",
                index + 1
            )));
        }
    }
    let rendered = stream.finish().to_string();
    eprintln!("rendered {} chunk(s)", stream.chunk_count());
    Ok(rendered)
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: &Commands) -> Result<()> {
    match cmd {
        Commands::Catalog => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "Models:")?;
            for model in MODELS {
                writeln!(stdout, "  {:<36} {}", model.id, model.name)?;
            }
            writeln!(stdout, "Prompt templates:")?;
            for template in PROMPT_TEMPLATES {
                writeln!(stdout, "  {:<36} {}", template.id, template.name)?;
            }
            Ok(())
        }
        Commands::Request {
            message,
            model,
            template,
            custom_prompt,
        } => {
            let settings = Settings {
                model_id: model.clone().unwrap_or_else(|| catalog::DEFAULT_MODEL_ID.to_string()),
                prompt_template_id: template
                    .clone()
                    .unwrap_or_else(|| catalog::DEFAULT_TEMPLATE_ID.to_string()),
                custom_prompt: custom_prompt.clone().unwrap_or_default(),
                ..Settings::default()
            };
            if catalog::find_model(&settings.model_id).is_none() {
                tracing::warn!(model = %settings.model_id, "model is not in the catalog");
            }
            let request =
                ChatRequest::from_settings(&settings, vec![ChatMessage::user(message.as_str())]);
            let body = serde_json::to_string_pretty(&request.completion_body())?;
            write_output(None, &body)
        }
    }
}

#[cfg(feature = "cli")]
fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install katexify --features cli");
    eprintln!("  katexify [OPTIONS] [INPUT_FILE]");
}
