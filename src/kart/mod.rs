mod boost;
mod drift;
mod state;
mod vehicle;
mod wheelie;

pub use boost::{BoostCategory, BoostParams, BoostState, BoostTick};
pub use drift::{DriftChargeController, SlipDriftHook};
pub use state::KartState;
pub use vehicle::Vehicle;
pub use wheelie::Wheelie;

use tracing::debug;

/// What a single [`Kart::update`] resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KartTick {
    pub boost: BoostTick,
    pub multiplier: f32,
    pub acceleration: f32,
    pub speed_limit: Option<f32>,
    pub is_charging_drift: bool,
}

#[derive(Clone, Debug)]
pub struct Kart {
    vehicle: Vehicle,
    state: KartState,
    boost: BoostState,
    drift: DriftChargeController,
    wheelie: Option<Wheelie>,
}

impl Kart {
    pub fn new(vehicle: Vehicle) -> Kart {
        Kart::with_boost_params(vehicle, BoostParams::DEFAULT)
    }

    pub fn with_boost_params(vehicle: Vehicle, boost_params: [BoostParams; 6]) -> Kart {
        Kart {
            vehicle,
            state: KartState::new(),
            boost: BoostState::with_params(boost_params),
            drift: DriftChargeController::new(),
            wheelie: vehicle.is_bike().then(Wheelie::new),
        }
    }

    pub fn vehicle(&self) -> Vehicle {
        self.vehicle
    }

    pub fn state(&self) -> &KartState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut KartState {
        &mut self.state
    }

    pub fn boost(&self) -> &BoostState {
        &self.boost
    }

    pub fn drift(&self) -> &DriftChargeController {
        &self.drift
    }

    pub fn drift_mut(&mut self) -> &mut DriftChargeController {
        &mut self.drift
    }

    pub fn wheelie(&self) -> Option<&Wheelie> {
        self.wheelie.as_ref()
    }

    pub fn wheelie_mut(&mut self) -> Option<&mut Wheelie> {
        self.wheelie.as_mut()
    }

    /// Takes effect on the next [`Kart::update`].
    pub fn activate_boost(&mut self, category: BoostCategory, frames: i32) -> bool {
        self.boost.activate(category, frames)
    }

    pub fn update(&mut self) -> KartTick {
        let boost = self.boost.calc();

        if let Some(wheelie) = &mut self.wheelie {
            wheelie.update();
        }

        let mut hook = self.wheelie.as_mut();
        let is_charging_drift = self.drift.update(&mut self.state, &mut hook);

        KartTick {
            boost,
            multiplier: self.boost.multiplier(),
            acceleration: self.boost.acceleration(),
            speed_limit: self.boost.speed_limit(),
            is_charging_drift,
        }
    }

    pub fn respawn(&mut self) {
        self.boost.reset();
        self.drift.end_attempt();
        self.state.set_slipdrift_charge(false);
        if let Some(wheelie) = &mut self.wheelie {
            wheelie.cancel();
        }
        debug!(vehicle = u8::from(self.vehicle), "kart respawned");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kart(id: u8) -> Kart {
        Kart::new(Vehicle::try_from_raw(id).unwrap())
    }

    #[test]
    fn activation_applies_on_next_update() {
        let mut kart = kart(0);
        let tick = kart.update();
        assert!(!tick.boost.is_boosting);

        kart.activate_boost(BoostCategory::MushroomOrPanel, 3);
        let tick = kart.update();
        assert!(tick.boost.is_boosting);
        assert_eq!(tick.multiplier, 1.4);
        assert_eq!(tick.speed_limit, Some(115.0));
    }

    #[test]
    fn bike_slipdrift_cancels_wheelie() {
        let mut kart = kart(20);
        assert!(kart.wheelie_mut().unwrap().try_start(false));
        kart.update();
        assert!(kart.wheelie().unwrap().is_wheelieing());

        kart.state_mut().set_drift_input(true);
        kart.state_mut().set_stick_left(true);
        let tick = kart.update();
        assert!(tick.is_charging_drift);
        assert!(!kart.wheelie().unwrap().is_wheelieing());
    }

    #[test]
    fn kart_slipdrift_without_wheelie() {
        let mut kart = kart(3);
        assert!(kart.wheelie().is_none());

        kart.state_mut().set_drift_input(true);
        kart.state_mut().set_stick_right(true);
        let tick = kart.update();
        assert!(tick.is_charging_drift);
        assert_eq!(kart.drift().hop_stick_direction(), -1);
    }

    #[test]
    fn respawn_clears_boost_and_drift() {
        let mut kart = kart(25);
        kart.activate_boost(BoostCategory::Star, 100);
        kart.state_mut().set_drift_input(true);
        kart.state_mut().set_stick_left(true);
        kart.update();

        kart.respawn();
        assert!(!kart.boost().has_active_category());
        assert_eq!(kart.drift().hop_stick_direction(), 0);
        assert!(!kart.state().slipdrift_charge());
        assert_eq!(kart.boost().fov_multiplier(), 0.75);

        let tick = kart.update();
        assert!(!tick.boost.is_boosting);
        assert!(!tick.boost.just_ended);
    }
}
