use std::ops::{Add, Mul, Sub};

use super::{EquationOfState, Specie};
use crate::error::ThermoError;

/// 밀도가 일정한 비압축 상태방정식.
#[derive(Debug, Clone, PartialEq)]
pub struct RhoConst {
    specie: Specie,
    rho: f64,
}

impl RhoConst {
    pub fn new(specie: Specie, rho: f64) -> Result<Self, ThermoError> {
        if !rho.is_finite() || rho <= 0.0 {
            return Err(ThermoError::InvalidDensity(rho));
        }
        Ok(Self { specie, rho })
    }

    pub fn specie(&self) -> &Specie {
        &self.specie
    }
}

impl EquationOfState for RhoConst {
    fn name(&self) -> &str {
        self.specie.name()
    }

    fn with_name(self, name: &str) -> Self {
        Self {
            specie: self.specie.with_name(name),
            rho: self.rho,
        }
    }

    fn n_moles(&self) -> f64 {
        self.specie.n_moles()
    }

    fn molar_mass(&self) -> f64 {
        self.specie.molar_mass()
    }

    fn rho(&self, _p: f64, _t: f64) -> f64 {
        self.rho
    }

    fn psi(&self, _p: f64, _t: f64) -> f64 {
        0.0
    }
}

impl Add for RhoConst {
    type Output = RhoConst;

    /// 밀도는 혼합 후 몰수 기준 몰분율로 가중한다.
    fn add(self, rhs: RhoConst) -> RhoConst {
        let (n1, n2) = (self.specie.n_moles(), rhs.specie.n_moles());
        let specie = self.specie + rhs.specie;
        let n = specie.n_moles();
        RhoConst {
            rho: n1 / n * self.rho + n2 / n * rhs.rho,
            specie,
        }
    }
}

impl Sub for RhoConst {
    type Output = RhoConst;

    fn sub(self, rhs: RhoConst) -> RhoConst {
        let (n1, n2) = (self.specie.n_moles(), rhs.specie.n_moles());
        let specie = self.specie - rhs.specie;
        let n = specie.n_moles();
        RhoConst {
            rho: n1 / n * self.rho - n2 / n * rhs.rho,
            specie,
        }
    }
}

impl Mul<f64> for RhoConst {
    type Output = RhoConst;

    fn mul(self, rhs: f64) -> RhoConst {
        RhoConst {
            specie: self.specie * rhs,
            rho: self.rho,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_density() {
        assert_eq!(
            RhoConst::new(Specie::water(), -1.0),
            Err(ThermoError::InvalidDensity(-1.0))
        );
    }

    #[test]
    fn mixed_density_is_mole_weighted() {
        let a = RhoConst::new(Specie::water(), 1000.0).expect("a");
        let b = RhoConst::new(Specie::water() * 3.0, 900.0).expect("b");
        let mix = a + b;
        assert!((mix.rho(1.0e5, 300.0) - 925.0).abs() < 1e-9);
        assert!((mix.n_moles() - 4.0).abs() < 1e-12);
    }
}
