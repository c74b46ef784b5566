//! module-view: render a Move module source listing with linked type references
//!
//! Fetches the module's normalized interface from a fullnode, resolves the
//! named types used by its exposed functions, and emits the tokenized
//! listing with hyperlink targets for every resolvable type token.
//!
//! ## Example Usage
//!
//! ```bash
//! # Rendered listing as a JSON artifact on stdout
//! module-view --package-id 0x2 --module-name coin --code-file coin.move
//!
//! # Annotated text listing, reading the source from stdin
//! cat coin.move | module-view --module-name coin --code-file - --text
//!
//! # Write the artifact to a file, against a custom fullnode
//! module-view --package-id 0x2 --module-name coin --code-file coin.move \
//!     --rpc-url https://fullnode.testnet.sui.io:443 --emit-json view.json
//! ```
//!
//! Omitting `--package-id` skips the interface fetch entirely; the listing
//! then renders without links, which is also the behavior when the fetch
//! fails.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use sui_module_view::linker::TokenSpan;
use sui_module_view::view::RenderedModule;
use sui_module_view::{JsonRpcClient, ModuleView, MoveTokenizer};

#[derive(Parser)]
#[command(
    name = "module-view",
    author,
    version,
    about = "Render a Move module source listing with linked type references"
)]
struct Cli {
    /// On-chain package id the module belongs to (omit to render without links)
    #[arg(long)]
    package_id: Option<String>,

    /// Module name within the package
    #[arg(long)]
    module_name: String,

    /// Path to the module source/disassembly to render ("-" for stdin)
    #[arg(long)]
    code_file: PathBuf,

    /// Fullnode JSON-RPC endpoint
    #[arg(long, default_value = "https://fullnode.mainnet.sui.io:443")]
    rpc_url: String,

    /// Write the rendered view as pretty JSON to this path ("-" for stdout)
    #[arg(long)]
    emit_json: Option<PathBuf>,

    /// Print an annotated text listing instead of JSON
    #[arg(long)]
    text: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = read_source(&cli.code_file)?;
    let view = ModuleView::new(cli.package_id.clone(), cli.module_name.clone(), source);
    let client = JsonRpcClient::new(&cli.rpc_url);
    let rendered = view.render(&client, &MoveTokenizer);

    if cli.text {
        print_text_listing(&rendered);
        return Ok(());
    }

    let value = serde_json::to_value(&rendered).context("serialize rendered module")?;
    let target = cli.emit_json.unwrap_or_else(|| PathBuf::from("-"));
    write_json(&target, &value)
}

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("read source from stdin")?;
        Ok(source)
    } else {
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
    }
}

fn print_text_listing(rendered: &RenderedModule) {
    for line in &rendered.lines {
        print!("{:>4} | ", line.number);
        for span in &line.spans {
            match span {
                TokenSpan::Text { text, .. } => print!("{}", text),
                TokenSpan::Link {
                    text,
                    href,
                    new_tab,
                    ..
                } => {
                    if *new_tab {
                        print!("{}[-> {} (new tab)]", text, href);
                    } else {
                        print!("{}[-> {}]", text, href);
                    }
                }
            }
        }
        println!();
    }
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    if path.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        if let Err(e) = serde_json::to_writer_pretty(&mut writer, value) {
            if e.is_io() && e.io_error_kind() == Some(io::ErrorKind::BrokenPipe) {
                return Ok(());
            }
            return Err(e).context("serialize JSON");
        }
        writer.write_all(b"\n").ok();
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }

    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).context("serialize JSON")?;
    writer.write_all(b"\n").ok();
    Ok(())
}
