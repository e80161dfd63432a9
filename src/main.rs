use clap::Parser;

use instrument_engineering_toolbox::{app, config, i18n};

/// 계측 계산기 모음의 CLI 프런트엔드.
#[derive(Debug, Parser)]
#[command(name = "instrument_engineering_toolbox")]
struct Cli {
    /// 표시 언어 (ko/en/auto)
    #[arg(long, default_value = "auto")]
    lang: String,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = i18n::Translator::new(&lang);
    app::run(&mut cfg, &tr)?;
    Ok(())
}
