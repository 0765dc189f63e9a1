//! 물/증기 증기표 평가기.

pub mod if97;

pub use if97::{Region, Seuif97};

/// 압력·온도로 물/증기의 질량 기준 물성을 주는 증기표.
///
/// 모든 입력은 SI(압력 Pa, 온도 K)이며 출력은 1 kg 기준이다.
/// 유효 범위 밖 입력에 대한 처리는 구현체에 맡긴다(seuif97 은 NaN 을 돌려준다).
pub trait SteamTable {
    /// 정압비열 [J/(kg·K)]
    fn cp_pt(&self, p: f64, t: f64) -> f64;

    /// 비엔탈피 [J/kg]
    fn h_pt(&self, p: f64, t: f64) -> f64;

    /// 비엔트로피 [J/(kg·K)]
    fn s_pt(&self, p: f64, t: f64) -> f64;
}
