//! 기계적 상태방정식(밀도-압력 관계, 몰질량, 몰수)과 그 조합 연산.

pub mod perfect_gas;
pub mod rho_const;
pub mod specie;

pub use perfect_gas::PerfectGas;
pub use rho_const::RhoConst;
pub use specie::Specie;

use std::ops::{Add, Mul, Sub};

/// 일반 기체상수 [J/(kmol·K)]
pub const RR: f64 = 8314.47;

/// 칼로리 모델이 요구하는 상태방정식의 최소 기능.
///
/// `+`/`-` 는 두 흐름의 혼합/분리, `* s` 는 몰수 배율이다.
pub trait EquationOfState:
    Clone + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self>
{
    /// 화학종 이름
    fn name(&self) -> &str;

    /// 이름만 바꾼 사본
    fn with_name(self, name: &str) -> Self;

    /// 몰수 [kmol]
    fn n_moles(&self) -> f64;

    /// 몰질량 [kg/kmol]
    fn molar_mass(&self) -> f64;

    /// 밀도 [kg/m³]
    fn rho(&self, p: f64, t: f64) -> f64;

    /// 압축성 drho/dp [s²/m²]
    fn psi(&self, p: f64, t: f64) -> f64;
}
