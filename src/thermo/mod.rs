//! IAPWS-IF97 칼로리 모델. 상태방정식 위에 범위 제한된 증기표 물성을 얹는다.
//!
//! 모든 물성은 몰 기준(J/kmol, J/(kmol·K))이다. 증기표는 1 kg 기준 값을 주므로
//! 상태방정식의 몰질량 W[kg/kmol]를 곱한다.

pub mod envelope;
mod ops;

pub use envelope::{ClipPolicy, Clamped, Envelope};

use crate::eos::EquationOfState;
use crate::steam::{Seuif97, SteamTable};

/// 상태방정식 `E` 와 생성 엔탈피/엔트로피 기준값, 유효 범위, 증기표 `T` 를 묶은 물성 객체.
#[derive(Debug, Clone, PartialEq)]
pub struct IapwsThermo<E, T = Seuif97> {
    eos: E,
    hf: f64,
    sf: f64,
    envelope: Envelope,
    table: T,
}

impl<E: EquationOfState> IapwsThermo<E> {
    /// seuif97 자동 영역 판정과 기본 IF97 범위를 쓰는 물성 객체.
    pub fn new(eos: E, hf: f64, sf: f64) -> Self {
        Self::with_table(eos, hf, sf, Envelope::default(), Seuif97::default())
    }
}

impl<E: EquationOfState, T: SteamTable> IapwsThermo<E, T> {
    pub fn with_table(eos: E, hf: f64, sf: f64, envelope: Envelope, table: T) -> Self {
        Self {
            eos,
            hf,
            sf,
            envelope,
            table,
        }
    }

    pub fn with_envelope(self, envelope: Envelope) -> Self {
        Self { envelope, ..self }
    }

    /// 상태방정식 이름만 바꾼 사본.
    pub fn with_name(self, name: &str) -> Self {
        Self {
            eos: self.eos.with_name(name),
            ..self
        }
    }

    pub fn eos(&self) -> &E {
        &self.eos
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn name(&self) -> &str {
        self.eos.name()
    }

    pub fn n_moles(&self) -> f64 {
        self.eos.n_moles()
    }

    /// 몰질량 W [kg/kmol]
    pub fn molar_mass(&self) -> f64 {
        self.eos.molar_mass()
    }

    /// 생성 엔탈피 [J/kmol]
    pub fn hf(&self) -> f64 {
        self.hf
    }

    /// 생성 엔트로피 [J/(kmol·K)]
    pub fn sf(&self) -> f64 {
        self.sf
    }

    /// 온도 제한기. 이 모델은 온도를 바꾸지 않는다.
    pub fn limit(&self, t: f64) -> f64 {
        t
    }

    /// 유효 범위로 클램핑한 (p, T). 정책이 `Warn` 이면 경고를 남긴다.
    pub fn clamp(&self, p: f64, t: f64) -> Clamped {
        self.envelope.apply(p, t)
    }

    /// 정압비열 [J/(kmol·K)]
    pub fn cp(&self, p: f64, t: f64) -> f64 {
        let lim = self.clamp(p, t);
        self.table.cp_pt(lim.pressure, lim.temperature) * self.molar_mass()
    }

    /// 절대 엔탈피 [J/kmol]
    pub fn ha(&self, p: f64, t: f64) -> f64 {
        let lim = self.clamp(p, t);
        self.table.h_pt(lim.pressure, lim.temperature) * self.molar_mass()
    }

    /// 현열 엔탈피 = 절대 엔탈피 - 생성 엔탈피 [J/kmol]
    pub fn hs(&self, p: f64, t: f64) -> f64 {
        let lim = self.clamp(p, t);
        self.ha(lim.pressure, lim.temperature) - self.hc()
    }

    /// 화학 엔탈피(생성 엔탈피) [J/kmol]
    pub fn hc(&self) -> f64 {
        self.hf
    }

    /// 엔트로피 [J/(kmol·K)]
    ///
    /// 다른 접근자와 단위를 맞추려고 증기표 값에 몰질량을 곱한다.
    /// 증기표의 질량 기준 값(J/(kg·K))과는 W 배 차이가 나므로 필요하면 `molar_mass()` 로 나눈다.
    pub fn s(&self, p: f64, t: f64) -> f64 {
        let lim = self.clamp(p, t);
        self.table.s_pt(lim.pressure, lim.temperature) * self.molar_mass()
    }

    /// 밀도 [kg/m³]. 상태방정식에 그대로 위임하며 클램핑하지 않는다.
    pub fn rho(&self, p: f64, t: f64) -> f64 {
        self.eos.rho(p, t)
    }
}
