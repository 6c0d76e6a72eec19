// 読み上げ変換の対話ツール
use std::io::{self, BufRead, Write};

use anyhow::Result;

use yomiage_lib::{EngineConfig, RawMessage};

fn main() -> Result<()> {
    // ログ初期化
    tracing_subscriber::fmt::init();

    let config = EngineConfig::load()?;
    let engine = config.build_engine()?;

    println!("=== yomiage 変換ツール ===");
    println!("1 行入力するごとに読み上げテキストへ変換します。空行で終了。\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            break;
        }

        let message = RawMessage::from_text(line);
        println!("→ {}", engine.normalize(&message, false));
    }

    Ok(())
}
