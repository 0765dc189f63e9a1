//! 두 상태의 몰분율 가중 조합과 몰수 배율.
//!
//! 결과의 유효 범위와 증기표는 왼쪽 피연산자를 따른다. 조합 후 몰수가 0 이면
//! 기준값이 유한하지 않게 되며 별도로 막지 않는다.

use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use super::IapwsThermo;
use crate::eos::EquationOfState;
use crate::steam::SteamTable;

/// 조합 전 두 몰수와 조합 후 몰수로 각 입력의 몰분율을 구한다.
fn mole_fractions(n1: f64, n2: f64, n: f64) -> (f64, f64) {
    (n1 / n, n2 / n)
}

impl<E: EquationOfState, T: SteamTable> Add for IapwsThermo<E, T> {
    type Output = IapwsThermo<E, T>;

    fn add(self, rhs: IapwsThermo<E, T>) -> Self::Output {
        let (n1, n2) = (self.n_moles(), rhs.n_moles());
        let eos = self.eos + rhs.eos;
        let (x1, x2) = mole_fractions(n1, n2, eos.n_moles());
        IapwsThermo {
            eos,
            hf: x1 * self.hf + x2 * rhs.hf,
            sf: x1 * self.sf + x2 * rhs.sf,
            envelope: self.envelope,
            table: self.table,
        }
    }
}

impl<E: EquationOfState, T: SteamTable> Sub for IapwsThermo<E, T> {
    type Output = IapwsThermo<E, T>;

    fn sub(self, rhs: IapwsThermo<E, T>) -> Self::Output {
        let (n1, n2) = (self.n_moles(), rhs.n_moles());
        let eos = self.eos - rhs.eos;
        let (x1, x2) = mole_fractions(n1, n2, eos.n_moles());
        IapwsThermo {
            eos,
            hf: x1 * self.hf - x2 * rhs.hf,
            sf: x1 * self.sf - x2 * rhs.sf,
            envelope: self.envelope,
            table: self.table,
        }
    }
}

/// 몰수만 배율하고 생성 기준값(세기 성질)은 그대로 둔다.
impl<E: EquationOfState, T: SteamTable> Mul<f64> for IapwsThermo<E, T> {
    type Output = IapwsThermo<E, T>;

    fn mul(self, rhs: f64) -> Self::Output {
        IapwsThermo {
            eos: self.eos * rhs,
            ..self
        }
    }
}

impl<E: EquationOfState, T: SteamTable> Mul<IapwsThermo<E, T>> for f64 {
    type Output = IapwsThermo<E, T>;

    fn mul(self, rhs: IapwsThermo<E, T>) -> Self::Output {
        rhs * self
    }
}

impl<E: EquationOfState, T: SteamTable> AddAssign for IapwsThermo<E, T> {
    fn add_assign(&mut self, rhs: IapwsThermo<E, T>) {
        let (n1, n2) = (self.n_moles(), rhs.n_moles());
        self.eos = self.eos.clone() + rhs.eos;
        let (x1, x2) = mole_fractions(n1, n2, self.eos.n_moles());
        self.hf = x1 * self.hf + x2 * rhs.hf;
        self.sf = x1 * self.sf + x2 * rhs.sf;
    }
}

impl<E: EquationOfState, T: SteamTable> SubAssign for IapwsThermo<E, T> {
    fn sub_assign(&mut self, rhs: IapwsThermo<E, T>) {
        let (n1, n2) = (self.n_moles(), rhs.n_moles());
        self.eos = self.eos.clone() - rhs.eos;
        let (x1, x2) = mole_fractions(n1, n2, self.eos.n_moles());
        self.hf = x1 * self.hf - x2 * rhs.hf;
        self.sf = x1 * self.sf - x2 * rhs.sf;
    }
}

impl<E: EquationOfState, T: SteamTable> MulAssign<f64> for IapwsThermo<E, T> {
    fn mul_assign(&mut self, rhs: f64) {
        self.eos = self.eos.clone() * rhs;
    }
}

impl<E: EquationOfState, T: SteamTable + Clone> IapwsThermo<E, T> {
    /// 반복 해법의 잔차 계산용 차이 `other - self`.
    pub fn residual(&self, other: &IapwsThermo<E, T>) -> IapwsThermo<E, T> {
        other.clone() - self.clone()
    }
}
