use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::AppError;
use crate::i18n::{keys, Translator};
use crate::params::Parameters;
use crate::procedure::{Component, Procedure};
use crate::result::CalculationResult;

/// 가스 소비 기준량 계산기
#[derive(Debug, Parser)]
#[command(name = "gas_norms_cli", version, about = "Gas consumption norms calculator")]
pub struct Cli {
    /// 표시 언어 (ru, en)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// 생략하면 대화형 메뉴를 연다.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 계산 절차 목록
    List,
    /// 계산 실행
    Calc(CalcArgs),
    /// 단위 변환
    Convert(ConvertArgs),
}

#[derive(Debug, Args)]
pub struct CalcArgs {
    /// 절차 이름 (예: blowdown-separator)
    pub procedure: String,

    /// 입력 파일 (.json 또는 .toml)
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// 개별 입력값. 파일 값보다 우선한다. 예: --set pressure_mpa=1.2
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// 결과를 JSON으로 출력
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// 물리량 (pressure, temperature, length, volume, area, speed, weight, time)
    pub kind: String,
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
    pub from: String,
    pub to: String,
}

/// 구성요소별 절차 목록.
pub fn render_list(tr: &Translator) -> String {
    let mut out = format!("{}\n", tr.t(keys::LIST_HEADING));
    for component in Component::ALL {
        let _ = writeln!(out, "\n[{}]", tr.component_title(component));
        for p in Procedure::ALL.iter().filter(|p| p.component() == component) {
            let _ = writeln!(
                out,
                "  {:<32} {} [{}]",
                p.name(),
                tr.procedure_title(*p),
                p.unit().symbol()
            );
        }
    }
    out
}

/// 결과를 사람이 읽는 형태로 만든다.
pub fn render_result(
    procedure: Procedure,
    result: &CalculationResult,
    precision: usize,
    tr: &Translator,
) -> String {
    let title = tr.procedure_title(procedure);
    match result {
        CalculationResult::Scalar { value, unit } => {
            format!("{title}: {value:.precision$} {}", unit.symbol())
        }
        CalculationResult::Breakdown(breakdown) => {
            let symbol = procedure.unit().symbol();
            let mut out = format!("{title}\n");
            for (name, value) in breakdown.items() {
                let _ = writeln!(out, "  {name:<24} {value:>14.precision$} {symbol}");
            }
            let _ = write!(
                out,
                "  {:<24} {:>14.precision$} {symbol}",
                tr.t(keys::RESULT_TOTAL),
                breakdown.total()
            );
            out
        }
    }
}

/// 번호로 절차를 고르고 `키=값` 줄을 받아 계산하는 대화형 메뉴.
pub fn interactive_menu(precision: usize, tr: &Translator) -> Result<(), AppError> {
    loop {
        println!("{}", tr.t(keys::MENU_TITLE));
        for (i, p) in Procedure::ALL.iter().enumerate() {
            println!(
                "{:>2}) [{}] {}",
                i + 1,
                tr.component_title(p.component()),
                tr.procedure_title(*p)
            );
        }
        println!("{}", tr.t(keys::MENU_EXIT));

        let Some(procedure) = read_selection(tr)? else {
            println!("{}", tr.t(keys::APP_EXIT));
            return Ok(());
        };

        let mut pairs = Vec::new();
        while let Some(line) = read_line(&tr.t(keys::PROMPT_PARAMETER))? {
            let line = line.trim();
            if line.is_empty() {
                break;
            }
            pairs.push(line.to_string());
        }

        let outcome = Parameters::from_pairs(&pairs).and_then(|params| procedure.evaluate(&params));
        match outcome {
            Ok(result) => println!("{}", render_result(procedure, &result, precision, tr)),
            Err(err) => println!("{}: {err}", tr.t(keys::ERROR_PREFIX)),
        }
    }
}

fn read_selection(tr: &Translator) -> Result<Option<Procedure>, AppError> {
    loop {
        let Some(sel) = read_line(&tr.t(keys::PROMPT_MENU_SELECT))? else {
            return Ok(None);
        };
        match sel.trim().parse::<usize>() {
            Ok(0) => return Ok(None),
            Ok(n) if n <= Procedure::ALL.len() => return Ok(Some(Procedure::ALL[n - 1])),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 입력이 끝나면(EOF) `None`.
fn read_line(prompt: &str) -> Result<Option<String>, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf))
}
