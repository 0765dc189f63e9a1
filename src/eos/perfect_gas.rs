use std::ops::{Add, Mul, Sub};

use super::{EquationOfState, Specie};

/// 이상기체 상태방정식 rho = p/(R·T).
#[derive(Debug, Clone, PartialEq)]
pub struct PerfectGas {
    specie: Specie,
}

impl PerfectGas {
    pub fn new(specie: Specie) -> Self {
        Self { specie }
    }

    pub fn specie(&self) -> &Specie {
        &self.specie
    }
}

impl EquationOfState for PerfectGas {
    fn name(&self) -> &str {
        self.specie.name()
    }

    fn with_name(self, name: &str) -> Self {
        Self::new(self.specie.with_name(name))
    }

    fn n_moles(&self) -> f64 {
        self.specie.n_moles()
    }

    fn molar_mass(&self) -> f64 {
        self.specie.molar_mass()
    }

    fn rho(&self, p: f64, t: f64) -> f64 {
        p / (self.specie.gas_constant() * t)
    }

    fn psi(&self, _p: f64, t: f64) -> f64 {
        1.0 / (self.specie.gas_constant() * t)
    }
}

impl Add for PerfectGas {
    type Output = PerfectGas;

    fn add(self, rhs: PerfectGas) -> PerfectGas {
        PerfectGas::new(self.specie + rhs.specie)
    }
}

impl Sub for PerfectGas {
    type Output = PerfectGas;

    fn sub(self, rhs: PerfectGas) -> PerfectGas {
        PerfectGas::new(self.specie - rhs.specie)
    }
}

impl Mul<f64> for PerfectGas {
    type Output = PerfectGas;

    fn mul(self, rhs: f64) -> PerfectGas {
        PerfectGas::new(self.specie * rhs)
    }
}
