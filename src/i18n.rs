use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::procedure::{Component, Procedure};

/// 문자열 키 모음.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const LIST_HEADING: &str = "list.heading";
    pub const RESULT_TOTAL: &str = "result.total";
    pub const CONVERSION_RESULT: &str = "conversion.result";

    pub const MENU_TITLE: &str = "menu.title";
    pub const MENU_EXIT: &str = "menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_PARAMETER: &str = "prompt.parameter";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
}

/// 지원 언어.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ru,
    En,
}

impl Language {
    /// `en`으로 시작하면 영어, 나머지는 러시아어.
    pub fn from_code(code: &str) -> Self {
        if code.trim().to_lowercase().starts_with("en") {
            Language::En
        } else {
            Language::Ru
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }
}

/// 내장 문자열과 선택적 언어팩(locales/<code>.toml)을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: HashMap<String, String>,
}

impl Translator {
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: HashMap::new(),
        }
    }

    /// 언어팩 디렉터리에 `<code>.toml`이 있으면 내장 문자열 위에 덮어쓴다.
    pub fn with_pack(lang_code: &str, pack_dir: &Path) -> Self {
        let mut tr = Self::new(lang_code);
        if let Some(map) = load_pack(pack_dir, tr.lang.as_code()) {
            tr.overrides = map;
        }
        tr
    }

    /// 키의 번역. 어느 곳에도 없으면 키 자체를 돌려준다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.get(key) {
            return v.clone();
        }
        let builtin = match self.lang {
            Language::Ru => ru(key),
            Language::En => en(key),
        };
        builtin.unwrap_or(key).to_string()
    }

    pub fn procedure_title(&self, procedure: Procedure) -> String {
        self.t(&format!("procedure.{}", procedure.name()))
    }

    pub fn component_title(&self, component: Component) -> String {
        self.t(&format!("component.{}", component.as_str()))
    }
}

/// CLI 플래그, 설정, 시스템 로캘 순으로 언어를 정한다. 모두 없으면 러시아어.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> Language {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or(Language::Ru)
}

fn normalize_lang(code: &str) -> Option<Language> {
    let lang = code
        .trim()
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ru" => Some(Language::Ru),
        "en" => Some(Language::En),
        _ => None,
    }
}

/// 시스템 로캘에서 언어를 추정한다.
pub fn detect_system_language() -> Option<Language> {
    get_locale()
        .as_deref()
        .and_then(normalize_lang)
        .or_else(|| std::env::var("LANG").ok().as_deref().and_then(normalize_lang))
}

fn load_pack(dir: &Path, code: &str) -> Option<HashMap<String, String>> {
    let content = fs::read_to_string(dir.join(format!("{code}.toml"))).ok()?;
    let value: toml::Value = toml::from_str(&content).ok()?;
    let mut map = HashMap::new();
    flatten("", &value, &mut map);
    Some(map)
}

fn flatten(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
    match val {
        toml::Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        toml::Value::Table(t) => {
            for (k, v) in t {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&key, v, out);
            }
        }
        _ => {}
    }
}

fn ru(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Ошибка",
        APP_EXIT => "Работа завершена.",
        LIST_HEADING => "Доступные расчёты",
        RESULT_TOTAL => "Итого",
        CONVERSION_RESULT => "Результат",
        MENU_TITLE => "\n=== Нормы расхода газа ===",
        MENU_EXIT => "0) Выход",
        PROMPT_MENU_SELECT => "Выберите пункт: ",
        PROMPT_PARAMETER => "Параметр (ключ=значение, пустая строка запускает расчёт): ",
        INVALID_SELECTION_RETRY => "Неверный выбор, повторите.",

        "component.station" => "ГРС",
        "component.compressor" => "КС",
        "component.pipeline" => "Магистральный газопровод",

        "procedure.blowdown-separator" => "Продувка сепаратора",
        "procedure.refuel-odorizer-tank" => "Заправка ёмкости одоризатора",
        "procedure.diaphragm-replacement" => "Замена диафрагмы",
        "procedure.gas-heating-before-regulators" => "Подогрев газа перед регуляторами",
        "procedure.pneumatic-devices" => "Пневмоприводы и КИП",
        "procedure.household-appliances" => "Бытовые газовые приборы",
        "procedure.heating-residential" => "Отопление жилых помещений",
        "procedure.station-all" => "Итоговый расчёт ГРС",
        "procedure.gpa-startup" => "Пуск ГПА",
        "procedure.compressor-venting" => "Стравливание газа из нагнетателя",
        "procedure.air-displacement" => "Вытеснение воздуха",
        "procedure.seal-system-venting" => "Стравливание из системы уплотнений",
        "procedure.oil-tank-purging" => "Продувка маслобаков",
        "procedure.liquid-degassing" => "Дегазация жидкостей",
        "procedure.enclosure-heating" => "Отопление укрытий ГПА",
        "procedure.thermal-oxidation" => "Термическое окисление",
        "procedure.compressor-all" => "Итоговый расчёт КС",
        "procedure.pipeline-volume" => "Геометрический объём участка",
        "procedure.pipeline-capacity" => "Пропускная способность",
        "procedure.final-pressure" => "Давление в конце участка",
        "procedure.gas-through-hole" => "Утечка через отверстие",
        "procedure.gas-velocity" => "Скорость газа",
        "procedure.hydrate-plug-removal" => "Ликвидация гидратной пробки",
        "procedure.pipeline-purging" => "Продувка участка",
        "procedure.dew-point-conversion" => "Пересчёт ТТР по воде",
        _ => return None,
    };
    Some(s)
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        LIST_HEADING => "Available calculations",
        RESULT_TOTAL => "Total",
        CONVERSION_RESULT => "Result",
        MENU_TITLE => "\n=== Gas Consumption Norms ===",
        MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select an item: ",
        PROMPT_PARAMETER => "Parameter (key=value, empty line to calculate): ",
        INVALID_SELECTION_RETRY => "Invalid selection, try again.",

        "component.station" => "Gas distribution station",
        "component.compressor" => "Compressor station",
        "component.pipeline" => "Trunk pipeline",

        "procedure.blowdown-separator" => "Separator blowdown",
        "procedure.refuel-odorizer-tank" => "Odorizer tank refuel",
        "procedure.diaphragm-replacement" => "Diaphragm replacement",
        "procedure.gas-heating-before-regulators" => "Gas heating before regulators",
        "procedure.pneumatic-devices" => "Pneumatic devices",
        "procedure.household-appliances" => "Household appliances",
        "procedure.heating-residential" => "Residential heating",
        "procedure.station-all" => "Station total",
        "procedure.gpa-startup" => "Gas-pumping unit startup",
        "procedure.compressor-venting" => "Compressor venting",
        "procedure.air-displacement" => "Air displacement",
        "procedure.seal-system-venting" => "Seal system venting",
        "procedure.oil-tank-purging" => "Oil tank purging",
        "procedure.liquid-degassing" => "Liquid degassing",
        "procedure.enclosure-heating" => "Enclosure heating",
        "procedure.thermal-oxidation" => "Thermal oxidation",
        "procedure.compressor-all" => "Compressor station total",
        "procedure.pipeline-volume" => "Pipeline volume",
        "procedure.pipeline-capacity" => "Pipeline capacity",
        "procedure.final-pressure" => "End-of-section pressure",
        "procedure.gas-through-hole" => "Leak through a hole",
        "procedure.gas-velocity" => "Gas velocity",
        "procedure.hydrate-plug-removal" => "Hydrate plug removal",
        "procedure.pipeline-purging" => "Pipeline purging",
        "procedure.dew-point-conversion" => "Water dew point conversion",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_procedure_has_titles_in_both_languages() {
        for p in Procedure::ALL {
            let key = format!("procedure.{}", p.name());
            assert!(ru(&key).is_some(), "{key}");
            assert!(en(&key).is_some(), "{key}");
        }
    }

    #[test]
    fn explicit_flag_wins() {
        assert_eq!(resolve_language(Some("en_US.UTF-8"), Some("ru")), Language::En);
        assert_eq!(resolve_language(Some("auto"), Some("ru")), Language::Ru);
    }
}
