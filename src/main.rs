use clap::Parser;

use gas_norms_toolbox::i18n::{self, keys, Translator};
use gas_norms_toolbox::ui_cli::Cli;
use gas_norms_toolbox::{app, config, logging};

/// 설정을 읽고 로깅을 켠 뒤 CLI를 실행한다.
fn main() {
    let cli = Cli::parse();
    let cfg = match config::load_or_default() {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("config.toml: {err}");
            config::Config::default()
        }
    };

    let level = cli.log_level.clone().unwrap_or_else(|| cfg.log_level.clone());
    if let Err(err) = logging::init(&level) {
        eprintln!("logging: {err}");
    }

    let lang = i18n::resolve_language(cli.lang.as_deref(), cfg.language.as_deref());
    let tr = Translator::with_pack(lang.as_code(), std::path::Path::new("locales"));

    if let Err(err) = app::run(cli, &cfg, &tr) {
        eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}
