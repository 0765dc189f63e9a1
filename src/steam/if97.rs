//! IAPWS-IF97 계산을 seuif97 크레이트로 위임한 증기표 평가기.
//! 입력: 압력(Pa, 절대), 온도(K)
//! 출력: 질량 기준 SI 값 (cp[J/kg·K], h[J/kg], s[J/kg·K])

use seuif97::{pt, OCP, OH, OS};
use serde::{Deserialize, Serialize};

use super::SteamTable;
use crate::units::{from_kelvin, from_pascal, PressureUnit, TemperatureUnit};

const J_PER_KJ: f64 = 1000.0;

/// 강제 지정 가능한 IF97 영역. Region 4(포화선)는 p-T 로 지정할 수 없어 제외한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Region {
    /// 압축수
    One,
    /// 과열 증기
    Two,
    /// 임계점 부근 고밀도 영역
    Three,
    /// 고온 증기 (1073.15 K 초과)
    Five,
}

impl Region {
    fn number(self) -> i32 {
        match self {
            Region::One => 1,
            Region::Two => 2,
            Region::Three => 3,
            Region::Five => 5,
        }
    }
}

impl TryFrom<u8> for Region {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Region::One),
            2 => Ok(Region::Two),
            3 => Ok(Region::Three),
            5 => Ok(Region::Five),
            _ => Err("IF97 영역은 1, 2, 3, 5 중 하나여야 합니다"),
        }
    }
}

impl From<Region> for u8 {
    fn from(value: Region) -> Self {
        value.number() as u8
    }
}

/// seuif97 기반 증기표. 기본값은 영역 자동 판정이다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Seuif97 {
    region: Option<Region>,
}

impl Seuif97 {
    /// 영역 자동 판정 평가기.
    pub fn new() -> Self {
        Self::default()
    }

    /// 지정한 영역의 식으로만 계산하는 평가기.
    pub fn in_region(region: Region) -> Self {
        Self {
            region: Some(region),
        }
    }

    pub fn region(&self) -> Option<Region> {
        self.region
    }

    /// seuif97 단위계(MPa, °C)로 바꿔 한 가지 물성을 계산한다. 결과는 seuif97 단위 그대로다.
    fn eval(&self, p_pa: f64, t_k: f64, o_id: i32) -> f64 {
        let p_mpa = from_pascal(p_pa, PressureUnit::MegaPascal);
        let t_c = from_kelvin(t_k, TemperatureUnit::Celsius);
        match self.region {
            Some(region) => pt(p_mpa, t_c, (o_id, region.number())),
            None => pt(p_mpa, t_c, o_id),
        }
    }
}

impl SteamTable for Seuif97 {
    fn cp_pt(&self, p: f64, t: f64) -> f64 {
        self.eval(p, t, OCP) * J_PER_KJ
    }

    fn h_pt(&self, p: f64, t: f64) -> f64 {
        self.eval(p, t, OH) * J_PER_KJ
    }

    fn s_pt(&self, p: f64, t: f64) -> f64 {
        self.eval(p, t, OS) * J_PER_KJ
    }
}
