// src/main.rs

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{error, info};

mod bidding;
mod config;
mod error;
mod logging;
mod model;
mod pipeline;
mod publish;

use bidding::DspAuction;
use config::{ConfigAdapter, ConfigManager, DefaultConfigAdapter, FileConfigAdapter};
use model::{CountryCodeResolver, Event};
use pipeline::Pipeline;
use publish::{FilePublisher, NoopPublisher, Publisher};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PublisherKind {
    /// 不做 I/O
    Noop,
    /// 写入 log_dir 下的 user_dsp_data.json
    File,
}

#[derive(Parser, Debug)]
#[command(author = "whiteCcinn", version = "1.0", about = "A minimal ADX event pipeline")]
struct CliArgs {
    /// 事件国家码，不传时处理空事件
    #[arg(short, long)]
    country_code: Option<String>,
    #[arg(long, default_value = "")]
    publisher_id: String,
    #[arg(long, default_value = "")]
    gamer_id: String,
    /// DSP 目录 JSON 文件，不传时使用内置目录
    #[arg(long)]
    catalog: Option<String>,
    #[arg(long, default_value = "logs")]
    log_dir: String,
    #[arg(long, value_enum, default_value_t = PublisherKind::Noop)]
    publisher: PublisherKind,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化全局 tracing 日志
    let _guard = logging::init_tracing(&args.log_dir)?;
    info!("ADX event pipeline starting");

    let adapter: Box<dyn ConfigAdapter> = match &args.catalog {
        Some(path) => Box::new(FileConfigAdapter::new(path)),
        None => Box::new(DefaultConfigAdapter),
    };
    let config = ConfigManager::from_adapter(adapter.as_ref())
        .context("Unable to load DSP catalog")?;

    let publisher: Box<dyn Publisher> = match args.publisher {
        PublisherKind::Noop => Box::new(NoopPublisher),
        PublisherKind::File => Box::new(
            FilePublisher::new(&args.log_dir).context("Unable to open publish file")?,
        ),
    };

    let pipeline = Pipeline::new(
        Box::new(CountryCodeResolver),
        DspAuction::new(config.catalog().clone()),
        publisher,
    );

    let outcome = match &args.country_code {
        Some(country_code) => {
            pipeline.process(&Event::new(country_code, &args.publisher_id, &args.gamer_id))
        }
        None => pipeline.run_pipeline(),
    };

    match outcome {
        Ok(result) => {
            println!("{}", result.dsp_id());
            info!(winning_dsp = %result.dsp_id(), "ADX event pipeline finished");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "ADX event pipeline failed");
            Err(e.into())
        }
    }
}
