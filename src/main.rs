use clap::Parser;

use taglog::{log_info, ColorMode, Level, Logger};

#[derive(Parser)]
#[command(name = "taglog")]
#[command(about = "Demo for the taglog line formatter")]
#[command(version = "0.1.0")]
struct Args {
    /// Messages to log at info level (default: one sample per level)
    #[arg(value_name = "MESSAGE")]
    messages: Vec<String>,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorMode,

    /// Log line template, e.g. "{time_short} {level_short} {message}"
    #[arg(long, value_name = "TEMPLATE")]
    format: Option<String>,

    /// Minimum level to emit
    #[arg(long, value_name = "LEVEL", default_value = "all")]
    level: Level,

    /// Tag attached to the sample messages
    #[arg(long, default_value = "demo")]
    tag: String,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut logger = Logger::new();
    logger.set_color_mode(args.color);
    logger.set_level_filter(args.level);
    if let Some(format) = &args.format {
        logger.set_format(format);
    }

    if args.messages.is_empty() {
        for level in Level::loggable() {
            logger.log(
                level,
                &args.tag,
                &format!("sample message at {}", level.name()),
            )?;
        }
        // One macro call so {file}/{file_short} fields have content.
        log_info!(&mut logger, &args.tag, "logged from {}", "the demo");
    } else {
        for message in &args.messages {
            logger.info(&args.tag, message)?;
        }
    }

    Ok(())
}
