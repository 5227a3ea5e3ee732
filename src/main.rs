//! `rdm-fetch`：把 GakuNin RDM 项目（或其子目录）下载到本地目录。

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use rdm_fs::logging::init_logging;
use rdm_fs::{ContentProvider, RdmProvider};

#[derive(Debug, Parser)]
#[command(name = "rdm-fetch", version, about = "Fetch a GakuNin RDM directory to local disk")]
struct Cli {
    /// 项目地址，如 https://rdm.example.org/abc12/files/osfstorage/data
    source: String,

    /// 输出目录，不存在时自动创建
    output_dir: PathBuf,

    /// 稳定的 ref；未指定或为 HEAD 时每次生成新的内容标识
    #[arg(long = "ref")]
    git_ref: Option<String>,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let outcome = run(&cli);
    if let Err(e) = &outcome {
        tracing::error!("{e:#}");
        eprintln!("error: {e:#}");
    }
    ExitCode::from(exit_status(&outcome))
}

/// 成功为 0；源地址无法识别或获取失败都为 1
fn exit_status(outcome: &Result<bool>) -> u8 {
    match outcome {
        Ok(true) => 0,
        Ok(false) | Err(_) => 1,
    }
}

fn run(cli: &Cli) -> Result<bool> {
    let provider = RdmProvider::from_env().context("invalid RDM host configuration")?;
    materialize(&provider, &cli.source, cli.git_ref.as_deref(), &cli.output_dir)
}

/// 识别并获取；源地址不属于该 provider 时返回 `Ok(false)`
fn materialize<P: ContentProvider>(
    provider: &P,
    source: &str,
    git_ref: Option<&str>,
    output_dir: &Path,
) -> Result<bool> {
    let Some(spec) = provider.detect(source, git_ref) else {
        eprintln!("not an RDM source: {source}");
        return Ok(false);
    };

    tracing::info!(content_id = %provider.content_id(&spec), "detected RDM source");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in provider.fetch(&spec, output_dir) {
        let line = line.context("RDM fetch failed")?;
        out.write_all(line.as_bytes())?;
        out.flush()?;
    }

    Ok(true)
}
