use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use codecq::cmd::{decode, encode, time};
use codecq::domain::Codec;
use codecq::domain::error::{DecodeError, EncodeError, TimeError};
use codecq::domain::report::{PipelineInput, PipelineInputSource, PipelineReport};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Parser)]
#[command(
    name = "codecq",
    version,
    about = "Deterministic timestamp and payload codec CLI"
)]
struct Cli {
    #[arg(long, global = true, default_value_t = false)]
    emit_pipeline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize a timestamp to the canonical UTC form.
    Time(TimeArgs),
    /// Encode a payload with the selected codec.
    Encode(CodecArgs),
    /// Decode a payload with the selected codec.
    Decode(CodecArgs),
}

#[derive(Debug, clap::Args)]
struct TimeArgs {
    #[arg(long)]
    input: Option<PathBuf>,

    /// Use the current clock instant instead of reading input.
    #[arg(long, default_value_t = false)]
    now: bool,
}

#[derive(Debug, clap::Args)]
struct CodecArgs {
    #[arg(long)]
    input: Option<PathBuf>,

    #[arg(long, value_enum)]
    codec: CliCodec,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliCodec {
    Bytes,
    Text,
    Utf8,
}

impl From<CliCodec> for Codec {
    fn from(value: CliCodec) -> Self {
        match value {
            CliCodec::Bytes => Self::Bytes,
            CliCodec::Text => Self::Text,
            CliCodec::Utf8 => Self::Utf8,
        }
    }
}

#[derive(Serialize)]
struct CliError<'a> {
    error: &'a str,
    message: String,
    code: i32,
    details: Value,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error(error),
    };

    let emit_pipeline = cli.emit_pipeline;
    match cli.command {
        Commands::Time(args) => run_time(args, emit_pipeline),
        Commands::Encode(args) => run_encode(args, emit_pipeline),
        Commands::Decode(args) => run_decode(args, emit_pipeline),
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            0
        }
        _ => {
            emit_error(
                "input_usage_error",
                error.to_string(),
                json!({"kind": "cli_parse_error"}),
                3,
            );
            3
        }
    }
}

fn run_time(args: TimeArgs, emit_pipeline: bool) -> i32 {
    let pipeline_report = build_time_pipeline_report(&args);

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let exit_code = if args.now {
        match time::run_now(&mut output) {
            Ok(()) => 0,
            Err(error) => report_time_error(&error),
        }
    } else if let Some(path) = args.input {
        match File::open(&path) {
            Ok(file) => match time::run(file, &mut output) {
                Ok(()) => 0,
                Err(error) => report_time_error(&error),
            },
            Err(err) => report_open_error("time", &path, &err),
        }
    } else {
        let stdin = io::stdin();
        match time::run(stdin.lock(), &mut output) {
            Ok(()) => 0,
            Err(error) => report_time_error(&error),
        }
    };

    if emit_pipeline {
        emit_pipeline_report(&pipeline_report);
    }
    exit_code
}

fn run_encode(args: CodecArgs, emit_pipeline: bool) -> i32 {
    let codec: Codec = args.codec.into();
    let pipeline_report = build_codec_pipeline_report(
        "encode",
        &args,
        codec,
        encode::pipeline_steps(codec),
        encode::deterministic_guards(codec),
    );

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let exit_code = if let Some(path) = args.input {
        match File::open(&path) {
            Ok(file) => match encode::run(file, &mut output, codec) {
                Ok(()) => 0,
                Err(error) => report_encode_error(&error),
            },
            Err(err) => report_open_error("encode", &path, &err),
        }
    } else {
        let stdin = io::stdin();
        match encode::run(stdin.lock(), &mut output, codec) {
            Ok(()) => 0,
            Err(error) => report_encode_error(&error),
        }
    };

    if emit_pipeline {
        emit_pipeline_report(&pipeline_report);
    }
    exit_code
}

fn run_decode(args: CodecArgs, emit_pipeline: bool) -> i32 {
    let codec: Codec = args.codec.into();
    let pipeline_report = build_codec_pipeline_report(
        "decode",
        &args,
        codec,
        decode::pipeline_steps(codec),
        decode::deterministic_guards(codec),
    );

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let exit_code = if let Some(path) = args.input {
        match File::open(&path) {
            Ok(file) => match decode::run(file, &mut output, codec) {
                Ok(()) => 0,
                Err(error) => report_decode_error(&error),
            },
            Err(err) => report_open_error("decode", &path, &err),
        }
    } else {
        let stdin = io::stdin();
        match decode::run(stdin.lock(), &mut output, codec) {
            Ok(()) => 0,
            Err(error) => report_decode_error(&error),
        }
    };

    if emit_pipeline {
        emit_pipeline_report(&pipeline_report);
    }
    exit_code
}

fn report_time_error(error: &TimeError) -> i32 {
    let (exit_code, error_kind) = map_time_error(error);
    emit_error(
        error_kind,
        error.to_string(),
        json!({"command": "time"}),
        exit_code,
    );
    exit_code
}

fn report_encode_error(error: &EncodeError) -> i32 {
    let (exit_code, error_kind) = map_encode_error(error);
    emit_error(
        error_kind,
        error.to_string(),
        json!({"command": "encode"}),
        exit_code,
    );
    exit_code
}

fn report_decode_error(error: &DecodeError) -> i32 {
    let (exit_code, error_kind) = map_decode_error(error);
    emit_error(
        error_kind,
        error.to_string(),
        json!({"command": "decode"}),
        exit_code,
    );
    exit_code
}

fn report_open_error(command: &'static str, path: &PathBuf, err: &io::Error) -> i32 {
    emit_error(
        "input_usage_error",
        format!("failed to open input file `{}`: {err}", path.display()),
        json!({"command": command, "input": path}),
        3,
    );
    3
}

fn map_time_error(error: &TimeError) -> (i32, &'static str) {
    match error {
        TimeError::ReadInput { .. } | TimeError::InvalidInput { .. } => (3, "input_usage_error"),
        TimeError::Normalize { .. } => (2, "input_data_error"),
        TimeError::WriteOutput { .. } => (1, "internal_error"),
    }
}

fn map_encode_error(error: &EncodeError) -> (i32, &'static str) {
    match error {
        EncodeError::ReadInput { .. } | EncodeError::InvalidInput { .. } => {
            (3, "input_usage_error")
        }
        EncodeError::WriteOutput { .. } => (1, "internal_error"),
    }
}

fn map_decode_error(error: &DecodeError) -> (i32, &'static str) {
    match error {
        DecodeError::ReadInput { .. } | DecodeError::InvalidInput { .. } => {
            (3, "input_usage_error")
        }
        DecodeError::Decode { .. } => (2, "input_data_error"),
        DecodeError::WriteOutput { .. } => (1, "internal_error"),
    }
}

fn build_time_pipeline_report(args: &TimeArgs) -> PipelineReport {
    let source = if args.now {
        PipelineInputSource::clock("now")
    } else if let Some(path) = &args.input {
        PipelineInputSource::path("input", path.display().to_string(), Some("json"))
    } else {
        PipelineInputSource::stdin("input", Some("json"))
    };
    PipelineReport::new(
        "time",
        PipelineInput::new(vec![source]),
        time::pipeline_steps(args.now),
        time::deterministic_guards(),
    )
}

fn build_codec_pipeline_report(
    command: &'static str,
    args: &CodecArgs,
    codec: Codec,
    steps: Vec<String>,
    deterministic_guards: Vec<String>,
) -> PipelineReport {
    let source = if let Some(path) = &args.input {
        PipelineInputSource::path("input", path.display().to_string(), Some(codec.as_str()))
    } else {
        PipelineInputSource::stdin("input", Some(codec.as_str()))
    };
    PipelineReport::new(
        command,
        PipelineInput::new(vec![source]),
        steps,
        deterministic_guards,
    )
}

fn emit_pipeline_report(report: &PipelineReport) {
    match serde_json::to_string(report) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(error) => emit_error(
            "internal_error",
            format!("failed to serialize pipeline report: {error}"),
            json!({"command": "emit_pipeline"}),
            1,
        ),
    }
}

fn emit_error(error: &'static str, message: String, details: Value, code: i32) {
    let payload = CliError {
        error,
        message,
        code,
        details,
    };
    match serde_json::to_string(&payload) {
        Ok(serialized) => eprintln!("{serialized}"),
        Err(_) => eprintln!(
            "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
        ),
    }
}
