use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::conversion::{self, ConversionError};
use crate::error::CalcError;
use crate::i18n::{keys, Translator};
use crate::params::Parameters;
use crate::procedure::{Procedure, UnknownProcedure};
use crate::quantity::QuantityKind;
use crate::ui_cli::{self, CalcArgs, Cli, Command, ConvertArgs};

/// 애플리케이션 실행 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    #[error("계산 오류: {0}")]
    Calc(#[from] CalcError),
    #[error(transparent)]
    UnknownProcedure(#[from] UnknownProcedure),
    #[error("결과 직렬화 오류: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// 하위 명령을 실행한다. 명령이 없으면 대화형 메뉴.
pub fn run(cli: Cli, config: &Config, tr: &Translator) -> Result<(), AppError> {
    match cli.command {
        None => ui_cli::interactive_menu(config.precision, tr),
        Some(Command::List) => {
            print!("{}", ui_cli::render_list(tr));
            Ok(())
        }
        Some(Command::Calc(args)) => run_calc(args, config, tr),
        Some(Command::Convert(args)) => run_convert(args, config, tr),
    }
}

fn run_calc(args: CalcArgs, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let procedure: Procedure = args.procedure.parse()?;
    let params = load_parameters(args.params.as_deref(), &args.set)?;
    let result = procedure.evaluate(&params)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{}",
            ui_cli::render_result(procedure, &result, config.precision, tr)
        );
    }
    Ok(())
}

fn run_convert(args: ConvertArgs, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let kind: QuantityKind = args.kind.parse()?;
    let value = conversion::convert(kind, args.value, &args.from, &args.to)?;
    let precision = config.precision;
    println!(
        "{}: {value:.precision$} {}",
        tr.t(keys::CONVERSION_RESULT),
        args.to
    );
    Ok(())
}

/// 입력 파일(.toml 또는 JSON)을 읽고 `--set` 값을 위에 덮는다.
pub fn load_parameters(file: Option<&Path>, pairs: &[String]) -> Result<Parameters, AppError> {
    let mut params = match file {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let is_toml = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
            if is_toml {
                Parameters::from_toml_str(&text)?
            } else {
                Parameters::from_json_str(&text)?
            }
        }
        None => Parameters::new(),
    };
    params.merge(Parameters::from_pairs(pairs)?);
    Ok(params)
}
