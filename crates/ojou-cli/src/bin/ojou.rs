use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use ojou_cli::commands::{chat_ops, conjugate_ops, dict_ops, translate_ops, Common};
use ojou_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "ojou", about = "Rewrite Japanese sentences into ojousama speech")]
struct Cli {
    /// Write JSON trace logs to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct CommonArgs {
    /// Settings TOML replacing the built-in defaults
    #[arg(long)]
    settings: Option<String>,
    /// Registered-word file (`[[words]]` tables)
    #[arg(long)]
    dict: Option<String>,
    /// Seed for candidate choice and sentence-final particles
    #[arg(long)]
    seed: Option<u64>,
}

impl From<CommonArgs> for Common {
    fn from(args: CommonArgs) -> Self {
        Self {
            settings: args.settings,
            dict: args.dict,
            seed: args.seed,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Analyze with the configured analyzer and rewrite (one sentence per stdin line when TEXT is omitted)
    Translate {
        /// Sentence to rewrite
        text: Option<String>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Rewrite MeCab output read from stdin
    Rewrite {
        /// Print the analyzed tokens and the output as JSON
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Answer prefixed chat messages read from stdin
    Chat {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Show every conjugation form of a verb
    Conjugate {
        /// Base form (e.g. 書く)
        base: String,
        /// IPADIC inflection type (e.g. 五段・カ行イ音便, 一段, カ変・来ル, サ変・スル)
        inflection_type: String,
    },
    /// Registered-word file operations
    Dict {
        #[command(subcommand)]
        command: DictCommand,
    },
}

#[derive(Subcommand)]
enum DictCommand {
    /// List entries as source, target and POS prefix
    List {
        /// Registered-word file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_deref());

    match cli.command {
        Command::Translate { text, common } => {
            translate_ops::translate(&common.into(), text.as_deref());
        }
        Command::Rewrite { json, common } => {
            translate_ops::rewrite_analyzed(&common.into(), json);
        }
        Command::Chat { common } => chat_ops::chat(&common.into()),
        Command::Conjugate {
            base,
            inflection_type,
        } => conjugate_ops::run(&base, &inflection_type),
        Command::Dict { command } => match command {
            DictCommand::List { file } => dict_ops::list(&file),
        },
    }
}
