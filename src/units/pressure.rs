use serde::{Deserialize, Serialize};

/// 절대압 단위. 내부 기준은 항상 Pa(abs)이다.
/// 물성 계산에는 게이지압을 쓰지 않으므로 게이지 단위는 두지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PressureUnit {
    #[default]
    Pascal,
    KiloPascal,
    Bar,
    MegaPascal,
    Psi,
    Atm,
}

const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_PSI: f64 = 6_894.757;
const PA_PER_ATM: f64 = 101_325.0;

impl PressureUnit {
    /// 1 단위가 몇 Pa 인지 반환한다.
    fn pascal_per_unit(self) -> f64 {
        match self {
            PressureUnit::Pascal => 1.0,
            PressureUnit::KiloPascal => 1_000.0,
            PressureUnit::Bar => PA_PER_BAR,
            PressureUnit::MegaPascal => 1.0e6,
            PressureUnit::Psi => PA_PER_PSI,
            PressureUnit::Atm => PA_PER_ATM,
        }
    }
}

/// 주어진 압력을 Pa 로 변환한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    value * unit.pascal_per_unit()
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    value_pa / unit.pascal_per_unit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn megapascal_to_pascal() {
        assert!((to_pascal(3.0, PressureUnit::MegaPascal) - 3.0e6).abs() < 1e-9);
    }

    #[test]
    fn bar_to_megapascal() {
        let mpa = from_pascal(to_pascal(250.0, PressureUnit::Bar), PressureUnit::MegaPascal);
        assert!((mpa - 25.0).abs() < 1e-12);
    }
}
