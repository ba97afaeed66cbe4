use atty::Stream;
use clap::Parser;
use color_eyre::{eyre::eyre, Result};
use reqx_core::{
    CommandContext, CommandGroup, CommandInfo, CommandStatus, ExecutionOutcome, GlobalOptions,
};
use serde_json::Value;

mod cli;
mod style;

use cli::{CommandGroupCli, ReqxCli};
use style::Style;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = ReqxCli::parse();
    init_tracing(cli.trace, cli.verbose);

    let global = GlobalOptions {
        quiet: cli.quiet,
        verbose: cli.verbose,
        trace: cli.trace,
        json: cli.json,
    };

    let ctx = CommandContext::new(&global).map_err(|err| eyre!("{err:?}"))?;
    let (info, outcome) = dispatch(&ctx, &cli.command)?;
    let code = emit_output(&ctx, cli.no_color, info, &outcome)?;

    if code == 0 {
        Ok(())
    } else {
        std::process::exit(code);
    }
}

fn init_tracing(trace: bool, verbose: u8) {
    let level = if trace {
        "trace"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = format!("reqx={level},reqx_core={level},reqx_domain={level}");
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn dispatch(
    ctx: &CommandContext,
    group: &CommandGroupCli,
) -> Result<(CommandInfo, ExecutionOutcome)> {
    match group {
        CommandGroupCli::Export(args) => {
            let info = CommandInfo::new(CommandGroup::Export, "export");
            let request = reqx_core::ExportRequest {
                path: args.path.clone(),
                dev: args.dev,
                tag: args.tag,
                egg: args.egg,
            };
            let outcome = reqx_core::export(ctx, &request).map_err(|err| eyre!("{err:?}"))?;
            Ok((info, outcome))
        }
    }
}

fn emit_output(
    ctx: &CommandContext,
    no_color: bool,
    info: CommandInfo,
    outcome: &ExecutionOutcome,
) -> Result<i32> {
    let code = outcome.exit_code();

    if ctx.global.json {
        let payload = reqx_core::to_json_response(info, outcome);
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(code);
    }

    let message = reqx_core::format_status_message(info, &outcome.message);
    if ctx.global.quiet {
        if outcome.status != CommandStatus::Ok {
            let style = Style::new(no_color, atty::is(Stream::Stderr));
            eprintln!("{}", style.status(&outcome.status, &message));
        }
        return Ok(code);
    }

    let style = Style::new(no_color, atty::is(Stream::Stdout));
    println!("{}", style.status(&outcome.status, &message));
    if let Some(hint) = hint_from_details(&outcome.details) {
        let hint_line = format!("Hint: {hint}");
        println!("{}", style.info(&hint_line));
    }
    Ok(code)
}

fn hint_from_details(details: &Value) -> Option<&str> {
    details
        .as_object()
        .and_then(|map| map.get("hint"))
        .and_then(Value::as_str)
}
