//! 물성 입력에 쓰는 절대압/절대온도 단위 변환.

pub mod pressure;
pub mod temperature;

pub use pressure::{from_pascal, to_pascal, PressureUnit};
pub use temperature::{from_kelvin, to_kelvin, TemperatureUnit};
