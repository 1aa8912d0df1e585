mod error;
pub mod kart;

pub use crate::error::Error;
pub use crate::kart::{
    BoostCategory, BoostParams, BoostState, BoostTick, DriftChargeController, Kart, KartState,
    KartTick, SlipDriftHook, Vehicle, Wheelie,
};
