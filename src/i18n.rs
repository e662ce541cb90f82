use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const INTRO: &str = "interactive.intro";
    pub const PROMPT_CONTINUE: &str = "interactive.prompt_continue";

    pub const FIELD_PARTICLE_DIAMETER: &str = "field.particle_diameter";
    pub const FIELD_TEMPERATURE: &str = "field.temperature";
    pub const FIELD_FLOWRATE: &str = "field.flowrate";
    pub const FIELD_TUBE_LENGTH: &str = "field.tube_length";
    pub const FIELD_TUBE_DIAMETER: &str = "field.tube_diameter";
    pub const PROMPT_EXAMPLE: &str = "prompt.example";

    pub const RESULT_LAMINAR: &str = "result.laminar";
    pub const RESULT_PENETRATION: &str = "result.penetration";
    pub const DETAIL_HEADING: &str = "detail.heading";
    pub const DETAIL_SPEED: &str = "detail.speed";
    pub const DETAIL_VISCOSITY: &str = "detail.viscosity";
    pub const DETAIL_CUNNINGHAM: &str = "detail.cunningham";
    pub const DETAIL_DIFFUSION: &str = "detail.diffusion";
    pub const DETAIL_ALPHA: &str = "detail.alpha";
    pub const DETAIL_BRANCH_EXP: &str = "detail.branch_exponential";
    pub const DETAIL_BRANCH_SERIES: &str = "detail.branch_series";
    pub const SWEEP_HEADING: &str = "sweep.heading";

    pub const ERROR_PARSE: &str = "error.parse";
    pub const ERROR_INVALID_UNIT: &str = "error.invalid_unit";
    pub const ERROR_NON_POSITIVE: &str = "error.non_positive";
    pub const ERROR_NON_LAMINAR: &str = "error.non_laminar";
    pub const ERROR_NON_FINITE: &str = "error.non_finite";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        if code.to_lowercase().starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 내장 문자열 번들을 제공한다.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().and_then(|loc| normalize_locale_string(&loc)) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        INTRO => "배관 내 입자 손실(투과율)을 계산합니다. 배관 흐름은 층류(Re ≤ 2000)여야 합니다.",
        PROMPT_CONTINUE => "다시 계산하려면 엔터, 종료하려면 q: ",
        FIELD_PARTICLE_DIAMETER => "입자 직경",
        FIELD_TEMPERATURE => "에어로졸 온도",
        FIELD_FLOWRATE => "유량",
        FIELD_TUBE_LENGTH => "배관 길이",
        FIELD_TUBE_DIAMETER => "배관 내경",
        PROMPT_EXAMPLE => "예",
        RESULT_LAMINAR => "층류, Re:",
        RESULT_PENETRATION => "투과율(침투계수):",
        DETAIL_HEADING => "-- 중간 계산값 --",
        DETAIL_SPEED => "평균 유속 [m/s]:",
        DETAIL_VISCOSITY => "공기 점도 [Pa·s]:",
        DETAIL_CUNNINGHAM => "Cunningham 보정계수:",
        DETAIL_DIFFUSION => "확산계수 [m2/s]:",
        DETAIL_ALPHA => "침착 변수 α:",
        DETAIL_BRANCH_EXP => "사용한 근사식: 지수합 (α ≥ 경계값)",
        DETAIL_BRANCH_SERIES => "사용한 근사식: 거듭제곱 급수 (α < 경계값)",
        SWEEP_HEADING => "입자 직경 [nm]    α           투과율",
        ERROR_PARSE => "{field}: '{text}'을(를) 해석할 수 없습니다 ({reason}). 숫자와 단위를 입력하세요.",
        ERROR_INVALID_UNIT => "{field}: 단위 '{unit}'({base})은(는) 사용할 수 없습니다. 허용 단위: {expected}",
        ERROR_NON_POSITIVE => "{field}: 값은 0보다 커야 합니다 (SI 환산값 {value}).",
        ERROR_NON_LAMINAR => "층류가 아닙니다 (Re = {re} > {limit}). 유량을 줄이거나 배관 조건을 조정하세요.",
        ERROR_NON_FINITE => "계산 중 유효하지 않은 값이 발생했습니다: {quantity}",
        _ => "???",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    let s = match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        INTRO => "Calculates particle losses in a tube. The flow inside the tube must be laminar (Re <= 2000).",
        PROMPT_CONTINUE => "Press Enter to calculate again, q to quit: ",
        FIELD_PARTICLE_DIAMETER => "Particle Diameter",
        FIELD_TEMPERATURE => "Aerosol Temperature",
        FIELD_FLOWRATE => "Flowrate",
        FIELD_TUBE_LENGTH => "Tube Length",
        FIELD_TUBE_DIAMETER => "Tube Diameter",
        PROMPT_EXAMPLE => "e.g.",
        RESULT_LAMINAR => "Laminar flow, Re:",
        RESULT_PENETRATION => "Penetration coefficient:",
        DETAIL_HEADING => "-- Intermediate values --",
        DETAIL_SPEED => "Mean flow speed [m/s]:",
        DETAIL_VISCOSITY => "Air viscosity [Pa·s]:",
        DETAIL_CUNNINGHAM => "Cunningham correction:",
        DETAIL_DIFFUSION => "Diffusion coefficient [m2/s]:",
        DETAIL_ALPHA => "Deposition parameter α:",
        DETAIL_BRANCH_EXP => "Branch: exponential sum (α >= threshold)",
        DETAIL_BRANCH_SERIES => "Branch: power series (α < threshold)",
        SWEEP_HEADING => "Diameter [nm]     α           Penetration",
        ERROR_PARSE => "{field}: cannot parse '{text}' ({reason}). Please enter a number with units.",
        ERROR_INVALID_UNIT => "{field}: unit '{unit}' ({base}) is not accepted. Accepted units: {expected}",
        ERROR_NON_POSITIVE => "{field}: value must be greater than zero (got {value} in SI units).",
        ERROR_NON_LAMINAR => "Flow not laminar (Re = {re} > {limit}). Please adjust the values to achieve a laminar flow.",
        ERROR_NON_FINITE => "The calculation produced an invalid value: {quantity}",
        _ => return None,
    };
    Some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("ko-KR"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en-US")), "en");
    }

    #[test]
    fn english_falls_back_to_korean_for_unknown_keys() {
        let tr = Translator::new("en");
        assert_eq!(tr.t(keys::RESULT_LAMINAR), "Laminar flow, Re:");
        assert_eq!(tr.t("no.such.key"), "???");
        assert_eq!(Translator::new("ko").language(), Language::Ko);
        assert_eq!(Translator::new("fr").language().as_code(), "en");
    }
}
