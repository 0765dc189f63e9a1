//! IAPWS-IF97 물/증기 칼로리 물성 모델.
//!
//! 상태방정식([`eos`]) 위에 증기표([`steam`]) 기반의 정압비열, 엔탈피, 엔트로피를
//! 얹고, 유효 범위 밖 입력은 경계값으로 클램핑한다([`thermo`]). 두 상태는 몰분율
//! 가중으로 조합할 수 있다.

pub mod config;
pub mod eos;
pub mod error;
pub mod steam;
pub mod thermo;
pub mod units;

pub use config::{ConfigError, ThermoConfig};
pub use eos::{EquationOfState, PerfectGas, RhoConst, Specie};
pub use error::ThermoError;
pub use steam::{Region, Seuif97, SteamTable};
pub use thermo::{ClipPolicy, Clamped, Envelope, IapwsThermo};
