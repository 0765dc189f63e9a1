/// 물성 객체 생성 시 입력 검증 오류.
///
/// 물성 평가 자체는 실패하지 않는다(범위 밖 입력은 클램핑). 이 오류는
/// 유효 범위, 화학종, 밀도 같은 생성 인자가 잘못되었을 때만 발생한다.
#[derive(Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// 유효 범위(압력/온도 상하한)가 잘못됨
    InvalidEnvelope(&'static str),
    /// 화학종 정보(몰수/몰질량)가 잘못됨
    InvalidSpecie(&'static str),
    /// 밀도가 양수가 아님
    InvalidDensity(f64),
}

impl std::fmt::Display for ThermoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThermoError::InvalidEnvelope(msg) => write!(f, "유효 범위 오류: {msg}"),
            ThermoError::InvalidSpecie(msg) => write!(f, "화학종 정보 오류: {msg}"),
            ThermoError::InvalidDensity(rho) => {
                write!(f, "밀도는 양수여야 합니다 (입력값 {rho} kg/m³)")
            }
        }
    }
}

impl std::error::Error for ThermoError {}
