use std::ops::{Add, Mul, Sub};

use crate::error::ThermoError;

/// 몰수 차이가 이 값보다 작으면 나눗셈 분모로 대신 쓴다.
const SMALL: f64 = 1.0e-15;

/// 화학종의 이름, 몰수, 몰질량.
#[derive(Debug, Clone, PartialEq)]
pub struct Specie {
    name: String,
    n_moles: f64,
    molar_mass: f64,
}

impl Specie {
    /// 몰질량[kg/kmol]이 양의 유한값인지 확인하고 화학종을 만든다.
    pub fn new(name: &str, n_moles: f64, molar_mass: f64) -> Result<Self, ThermoError> {
        if !n_moles.is_finite() {
            return Err(ThermoError::InvalidSpecie("몰수는 유한값이어야 합니다"));
        }
        if !molar_mass.is_finite() || molar_mass <= 0.0 {
            return Err(ThermoError::InvalidSpecie("몰질량은 양수여야 합니다"));
        }
        Ok(Self {
            name: name.to_owned(),
            n_moles,
            molar_mass,
        })
    }

    /// 물 1 kmol (몰질량 18.0153 kg/kmol).
    pub fn water() -> Self {
        Self {
            name: "water".to_owned(),
            n_moles: 1.0,
            molar_mass: 18.0153,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn n_moles(&self) -> f64 {
        self.n_moles
    }

    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    pub fn with_name(self, name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..self
        }
    }

    /// 기체상수 R = RR/W [J/(kg·K)]
    pub fn gas_constant(&self) -> f64 {
        super::RR / self.molar_mass
    }
}

impl Add for Specie {
    type Output = Specie;

    /// 몰수는 합, 몰질량은 몰분율 가중 평균.
    fn add(self, rhs: Specie) -> Specie {
        let n_moles = self.n_moles + rhs.n_moles;
        let molar_mass = (self.n_moles * self.molar_mass + rhs.n_moles * rhs.molar_mass) / n_moles;
        Specie {
            name: self.name,
            n_moles,
            molar_mass,
        }
    }
}

impl Sub for Specie {
    type Output = Specie;

    fn sub(self, rhs: Specie) -> Specie {
        let n_moles = self.n_moles - rhs.n_moles;
        let divisor = if n_moles.abs() < SMALL { SMALL } else { n_moles };
        let molar_mass = (self.n_moles * self.molar_mass - rhs.n_moles * rhs.molar_mass) / divisor;
        Specie {
            name: self.name,
            n_moles,
            molar_mass,
        }
    }
}

impl Mul<f64> for Specie {
    type Output = Specie;

    fn mul(self, rhs: f64) -> Specie {
        Specie {
            n_moles: self.n_moles * rhs,
            ..self
        }
    }
}

impl Mul<Specie> for f64 {
    type Output = Specie;

    fn mul(self, rhs: Specie) -> Specie {
        rhs * self
    }
}
