use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::eos::{EquationOfState, PerfectGas, RhoConst, Specie};
use crate::error::ThermoError;
use crate::steam::{Region, Seuif97};
use crate::thermo::{ClipPolicy, Envelope, IapwsThermo};
use crate::units::{to_kelvin, to_pascal, PressureUnit, TemperatureUnit};

/// 화학종 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecieConfig {
    pub name: String,
    #[serde(default = "default_n_moles")]
    pub n_moles: f64,
    /// 몰질량 [kg/kmol]
    pub molar_mass: f64,
}

fn default_n_moles() -> f64 {
    1.0
}

impl Default for SpecieConfig {
    fn default() -> Self {
        let water = Specie::water();
        Self {
            name: water.name().to_owned(),
            n_moles: water.n_moles(),
            molar_mass: water.molar_mass(),
        }
    }
}

/// 상태방정식 모델 선택.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "model")]
pub enum EquationOfStateConfig {
    #[default]
    PerfectGas,
    /// 밀도 [kg/m³] 고정
    RhoConst { rho: f64 },
}

/// 생성 기준값과 유효 범위 설정. 범위 값은 지정한 단위로 읽는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermodynamicsConfig {
    /// 생성 엔탈피 [J/kmol]
    pub hf: f64,
    /// 생성 엔트로피 [J/(kmol·K)]
    pub sf: f64,
    pub pressure_unit: PressureUnit,
    pub temperature_unit: TemperatureUnit,
    pub p_min: f64,
    pub p_max: f64,
    pub t_min: f64,
    pub t_max: f64,
    pub clip_policy: ClipPolicy,
}

impl Default for ThermodynamicsConfig {
    fn default() -> Self {
        Self {
            hf: 0.0,
            sf: 0.0,
            pressure_unit: PressureUnit::Pascal,
            temperature_unit: TemperatureUnit::Kelvin,
            p_min: Envelope::IF97_P_MIN,
            p_max: Envelope::IF97_P_MAX,
            t_min: Envelope::IF97_T_MIN,
            t_max: Envelope::IF97_T_MAX,
            clip_policy: ClipPolicy::Silent,
        }
    }
}

impl ThermodynamicsConfig {
    /// 설정 단위를 Pa/K 로 환산해 유효 범위를 만든다.
    pub fn envelope(&self) -> Result<Envelope, ThermoError> {
        let p = |v| to_pascal(v, self.pressure_unit);
        let t = |v| to_kelvin(v, self.temperature_unit);
        Ok(
            Envelope::new(p(self.p_min), p(self.p_max), t(self.t_min), t(self.t_max))?
                .with_clip_policy(self.clip_policy),
        )
    }
}

/// 증기표 설정. `region` 이 없으면 자동 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SteamTableConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
}

impl SteamTableConfig {
    pub fn table(&self) -> Seuif97 {
        self.region.map(Seuif97::in_region).unwrap_or_default()
    }
}

/// 물성 객체 설정 파일 전체.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThermoConfig {
    #[serde(default)]
    pub specie: SpecieConfig,
    #[serde(default)]
    pub equation_of_state: EquationOfStateConfig,
    #[serde(default)]
    pub thermodynamics: ThermodynamicsConfig,
    #[serde(default)]
    pub steam_table: SteamTableConfig,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Parse(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// 설정값 검증 오류
    Thermo(ThermoError),
    /// 요청한 상태방정식과 설정의 모델이 다름
    ModelMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Parse(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
            ConfigError::Thermo(e) => write!(f, "설정값 오류: {e}"),
            ConfigError::ModelMismatch { expected, found } => {
                write!(f, "상태방정식 모델 불일치: {expected} 요청, 설정은 {found}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

impl From<ThermoError> for ConfigError {
    fn from(value: ThermoError) -> Self {
        ConfigError::Thermo(value)
    }
}

impl EquationOfStateConfig {
    fn model_name(&self) -> &'static str {
        match self {
            EquationOfStateConfig::PerfectGas => "PerfectGas",
            EquationOfStateConfig::RhoConst { .. } => "RhoConst",
        }
    }
}

/// 설정으로부터 만들 수 있는 상태방정식.
pub trait FromConfig: Sized {
    fn from_config(specie: Specie, cfg: &EquationOfStateConfig) -> Result<Self, ConfigError>;
}

impl FromConfig for PerfectGas {
    fn from_config(specie: Specie, cfg: &EquationOfStateConfig) -> Result<Self, ConfigError> {
        match cfg {
            EquationOfStateConfig::PerfectGas => Ok(PerfectGas::new(specie)),
            other => Err(ConfigError::ModelMismatch {
                expected: "PerfectGas",
                found: other.model_name(),
            }),
        }
    }
}

impl FromConfig for RhoConst {
    fn from_config(specie: Specie, cfg: &EquationOfStateConfig) -> Result<Self, ConfigError> {
        match cfg {
            EquationOfStateConfig::RhoConst { rho } => Ok(RhoConst::new(specie, *rho)?),
            other => Err(ConfigError::ModelMismatch {
                expected: "RhoConst",
                found: other.model_name(),
            }),
        }
    }
}

impl ThermoConfig {
    /// TOML 문자열을 파싱한다.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// 설정 파일을 읽는다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            let cfg = Self::default();
            cfg.save(path)?;
            Ok(cfg)
        }
    }

    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 설정대로 물성 객체를 만든다. `E` 는 설정의 상태방정식 모델과 일치해야 한다.
    pub fn build<E: FromConfig + EquationOfState>(&self) -> Result<IapwsThermo<E>, ConfigError> {
        let specie = Specie::new(
            &self.specie.name,
            self.specie.n_moles,
            self.specie.molar_mass,
        )?;
        let eos = E::from_config(specie, &self.equation_of_state)?;
        let envelope = self.thermodynamics.envelope()?;
        Ok(IapwsThermo::with_table(
            eos,
            self.thermodynamics.hf,
            self.thermodynamics.sf,
            envelope,
            self.steam_table.table(),
        ))
    }
}
