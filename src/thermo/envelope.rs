use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ThermoError;

/// 범위 밖 입력을 클램핑할 때의 진단 방식. 어느 쪽이든 값은 똑같이 클램핑된다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClipPolicy {
    /// 조용히 클램핑
    #[default]
    Silent,
    /// 클램핑할 때마다 `tracing` 경고 이벤트를 남긴다
    Warn,
}

/// 클램핑 결과와 어느 입력이 잘렸는지.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clamped {
    /// 클램핑된 압력 [Pa]
    pub pressure: f64,
    /// 클램핑된 온도 [K]
    pub temperature: f64,
    pub pressure_clipped: bool,
    pub temperature_clipped: bool,
}

impl Clamped {
    pub fn clipped(&self) -> bool {
        self.pressure_clipped || self.temperature_clipped
    }
}

/// 증기표 상관식을 유효하다고 보는 압력/온도 범위.
///
/// 기본값은 IF97 Region 1~3 범위(삼중점 압력 ~ 100 MPa, 273.15 ~ 1073.15 K)이다.
/// Region 5 까지 쓰려면 온도 상한을 2273.15 K, 압력 상한을 50 MPa 로 지정한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    p_min: f64,
    p_max: f64,
    t_min: f64,
    t_max: f64,
    policy: ClipPolicy,
}

impl Envelope {
    /// 삼중점 압력 [Pa]
    pub const IF97_P_MIN: f64 = 611.657;
    pub const IF97_P_MAX: f64 = 100.0e6;
    pub const IF97_T_MIN: f64 = 273.15;
    pub const IF97_T_MAX: f64 = 1073.15;

    /// 상하한이 유한하고 min <= max 인지 확인한다. 단위는 Pa, K.
    pub fn new(p_min: f64, p_max: f64, t_min: f64, t_max: f64) -> Result<Self, ThermoError> {
        if !(p_min.is_finite() && p_max.is_finite() && t_min.is_finite() && t_max.is_finite()) {
            return Err(ThermoError::InvalidEnvelope("상하한은 유한값이어야 합니다"));
        }
        if p_min > p_max {
            return Err(ThermoError::InvalidEnvelope("압력 하한이 상한보다 큽니다"));
        }
        if t_min > t_max {
            return Err(ThermoError::InvalidEnvelope("온도 하한이 상한보다 큽니다"));
        }
        Ok(Self {
            p_min,
            p_max,
            t_min,
            t_max,
            policy: ClipPolicy::Silent,
        })
    }

    pub fn with_clip_policy(self, policy: ClipPolicy) -> Self {
        Self { policy, ..self }
    }

    pub fn p_min(&self) -> f64 {
        self.p_min
    }

    pub fn p_max(&self) -> f64 {
        self.p_max
    }

    pub fn t_min(&self) -> f64 {
        self.t_min
    }

    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    pub fn clip_policy(&self) -> ClipPolicy {
        self.policy
    }

    /// 상한 먼저, 하한 나중에 적용해 (p, T)를 범위 안으로 자른다.
    ///
    /// `f64::clamp` 와 달리 NaN 입력은 상한으로 치환되고 패닉하지 않는다.
    pub fn clamp(&self, p: f64, t: f64) -> Clamped {
        let temperature = t.min(self.t_max).max(self.t_min);
        let pressure = p.min(self.p_max).max(self.p_min);
        Clamped {
            pressure,
            temperature,
            pressure_clipped: pressure != p,
            temperature_clipped: temperature != t,
        }
    }

    /// [`Envelope::clamp`] 후 정책이 `Warn` 이면 잘린 입력을 경고로 남긴다.
    pub fn apply(&self, p: f64, t: f64) -> Clamped {
        let clamped = self.clamp(p, t);
        if self.policy == ClipPolicy::Warn && clamped.clipped() {
            warn!(
                p,
                t,
                p_lim = clamped.pressure,
                t_lim = clamped.temperature,
                "IF97 유효 범위를 벗어난 입력을 경계값으로 클램핑했습니다"
            );
        }
        clamped
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            p_min: Self::IF97_P_MIN,
            p_max: Self::IF97_P_MAX,
            t_min: Self::IF97_T_MIN,
            t_max: Self::IF97_T_MAX,
            policy: ClipPolicy::Silent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        assert!(Envelope::new(1.0e6, 1.0e5, 300.0, 400.0).is_err());
        assert!(Envelope::new(1.0e5, 1.0e6, 400.0, 300.0).is_err());
        assert!(Envelope::new(f64::NAN, 1.0e6, 300.0, 400.0).is_err());
    }

    #[test]
    fn clamp_reports_which_input_was_clipped() {
        let env = Envelope::new(1.0e5, 1.0e6, 300.0, 400.0).expect("envelope");
        let inside = env.clamp(5.0e5, 350.0);
        assert!(!inside.clipped());

        let hot = env.clamp(5.0e5, 900.0);
        assert_eq!(hot.temperature, 400.0);
        assert!(hot.temperature_clipped && !hot.pressure_clipped);

        let low = env.clamp(10.0, 350.0);
        assert_eq!(low.pressure, 1.0e5);
        assert!(low.pressure_clipped && !low.temperature_clipped);
    }

    #[test]
    fn warn_policy_does_not_change_values() {
        let env = Envelope::default().with_clip_policy(ClipPolicy::Warn);
        assert_eq!(env.apply(1.0e9, 5000.0), Envelope::default().clamp(1.0e9, 5000.0));
    }
}
